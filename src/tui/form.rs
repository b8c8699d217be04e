//! Single-screen password form.
//!
//! Holds the live generation config, regenerates on every input change, and
//! shows the password with its strength rating. Copying flashes a transient
//! indicator that reverts after two seconds.

use std::time::{Duration, Instant};

use copypasta::{ClipboardContext, ClipboardProvider};
use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};
use zeroize::Zeroize;

use crate::config::{GenConfig, MAX_LENGTH, MIN_LENGTH};
use crate::pass::{self, Strength};
use crate::terminal::{
    DIM, RESET, RawModeGuard, box_bottom, box_line, box_line_center, box_top, clear, flush,
    print_error, print_rule, reset_terminal,
};

/// Event poll interval. Short enough that the copied indicator reverts
/// promptly without a keypress.
const TICK: Duration = Duration::from_millis(100);
const COPIED_FEEDBACK: Duration = Duration::from_secs(2);

struct Form {
    config: GenConfig,
    password: String,
    strength: Strength,
    clipboard: Option<ClipboardContext>,
    copied_at: Option<Instant>,
    notice: Option<String>,
}

enum Action {
    Redraw,
    Ignored,
    Quit,
}

impl Form {
    fn new() -> Self {
        let config = GenConfig::default();
        let password = pass::generate(&config);
        let strength = pass::score(&password, config.symbols, config.digits);
        Self {
            config,
            password,
            strength,
            clipboard: None,
            copied_at: None,
            notice: None,
        }
    }

    /// Replace (not mutate) the displayed password, wiping the old buffer.
    fn regenerate(&mut self) {
        let mut old = std::mem::replace(&mut self.password, pass::generate(&self.config));
        old.zeroize();
        self.strength = pass::score(&self.password, self.config.symbols, self.config.digits);
        self.copied_at = None;
    }

    fn set_length(&mut self, length: usize) {
        let clamped = GenConfig::clamp_length(length);
        if clamped != self.config.length {
            self.config.length = clamped;
            self.regenerate();
        }
    }

    fn toggle_symbols(&mut self) {
        self.config.symbols = !self.config.symbols;
        self.regenerate();
    }

    fn toggle_digits(&mut self) {
        self.config.digits = !self.config.digits;
        self.regenerate();
    }

    fn copy(&mut self) {
        if self.clipboard.is_none() {
            self.clipboard = ClipboardContext::new().ok();
        }

        let Some(ctx) = self.clipboard.as_mut() else {
            self.notice = Some("Clipboard unavailable".to_string());
            return;
        };

        match ctx.set_contents(self.password.clone()) {
            Ok(_) => {
                // copypasta hands back its own copy; wipe it
                if let Ok(mut retrieved) = ctx.get_contents() {
                    retrieved.zeroize();
                }
                self.notice = None;
                // a later copy supersedes the running indicator
                self.copied_at = Some(Instant::now());
            }
            Err(e) => self.notice = Some(format!("Clipboard error: {e}")),
        }
    }

    /// Clear an elapsed copied indicator. Returns true if it just expired.
    fn expire_copied(&mut self) -> bool {
        match self.copied_at {
            Some(at) if at.elapsed() >= COPIED_FEEDBACK => {
                self.copied_at = None;
                true
            }
            _ => false,
        }
    }

    fn handle_key(&mut self, code: KeyCode, modifiers: KeyModifiers) -> Action {
        match code {
            KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => {
                // process::exit doesn't run destructors; reset first
                reset_terminal();
                println!();
                std::process::exit(0);
            }
            KeyCode::Char('q') if modifiers.contains(KeyModifiers::CONTROL) => Action::Quit,
            KeyCode::Esc | KeyCode::Char('q') => Action::Quit,
            KeyCode::Up | KeyCode::Right | KeyCode::Char('+') | KeyCode::Char('=') => {
                self.set_length(self.config.length + 1);
                Action::Redraw
            }
            KeyCode::Down | KeyCode::Left | KeyCode::Char('-') => {
                self.set_length(self.config.length.saturating_sub(1));
                Action::Redraw
            }
            KeyCode::Char('s') => {
                self.toggle_symbols();
                Action::Redraw
            }
            KeyCode::Char('d') => {
                self.toggle_digits();
                Action::Redraw
            }
            KeyCode::Char('r') | KeyCode::Enter => {
                self.regenerate();
                Action::Redraw
            }
            KeyCode::Char('c') => {
                self.copy();
                Action::Redraw
            }
            _ => Action::Ignored,
        }
    }

    fn draw(&self) {
        clear();

        box_top("Passforge");
        box_line_center(&format!(
            "{DIM}↑/↓ length  s symbols  d digits  r new  c copy  q quit{RESET}"
        ));
        print_rule();
        box_line("");
        box_line_center(&self.password);
        box_line("");
        box_line_center(&format!(
            "Strength: {}{}{}",
            self.strength.color(),
            self.strength,
            RESET
        ));
        box_line("");
        print_rule();
        box_line(&format!(
            "  Length:  {:>2}   [{MIN_LENGTH}-{MAX_LENGTH}]",
            self.config.length
        ));
        box_line(&format!(
            "  Symbols: [{}]   Digits: [{}]",
            checkbox(self.config.symbols),
            checkbox(self.config.digits)
        ));
        box_bottom();

        if self.copied_at.is_some() {
            println!("*** -COPIED TO CLIPBOARD- ***");
        } else if let Some(ref notice) = self.notice {
            print_error(notice);
        } else {
            println!();
        }
        flush();
    }
}

fn checkbox(on: bool) -> char {
    if on { 'x' } else { ' ' }
}

pub fn run() {
    reset_terminal();

    let mut form = Form::new();

    let guard = match RawModeGuard::new() {
        Ok(g) => g,
        Err(_) => {
            // Not a tty: print one password and its rating, then bail.
            println!("{}  {}", form.password, form.strength);
            form.password.zeroize();
            return;
        }
    };

    form.draw();

    loop {
        if form.expire_copied() {
            form.draw();
        }

        if !event::poll(TICK).unwrap_or(false) {
            continue;
        }

        match event::read() {
            Ok(Event::Key(key)) if key.kind == KeyEventKind::Press => {
                match form.handle_key(key.code, key.modifiers) {
                    Action::Redraw => form.draw(),
                    Action::Ignored => {}
                    Action::Quit => break,
                }
            }
            Err(_) => break,
            _ => {}
        }
    }

    drop(guard);
    clear();
    form.password.zeroize();
}
