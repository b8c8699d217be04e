//! CLI context - bundles config, flags, and clipboard state.

use copypasta::{ClipboardContext, ClipboardProvider};
use zeroize::Zeroize;

use super::{CliFlags, prompts};
use crate::config::GenConfig;
use crate::pass;
use crate::terminal::RESET;
use crate::tui::print_help;

/// Early exit - not an error, just done.
pub struct Done;

/// Application context for CLI mode.
pub struct Context {
    pub config: GenConfig,
    pub clipboard: Option<ClipboardContext>,
    pub flags: CliFlags,
}

impl Context {
    /// Create a new context by parsing command-line arguments.
    /// Returns Err with the error message if parsing fails.
    pub fn new(args: Vec<String>) -> Result<Self, String> {
        let flags = super::parse(&args).map_err(|e| e.to_string())?;

        Ok(Self {
            config: GenConfig::default(),
            clipboard: None,
            flags,
        })
    }

    /// Run CLI. Returns `Err(Done)` for early exits, `Ok(())` on completion.
    pub fn run(&mut self) -> Result<(), Done> {
        self.handle_info_flags()?;
        prompts::set_quiet(self.flags.quiet);
        self.apply_flags();
        self.handle_check()?;
        self.generate_output();
        Ok(())
    }

    fn handle_info_flags(&self) -> Result<(), Done> {
        if self.flags.help {
            print_help();
            return Err(Done);
        }
        if self.flags.version {
            println!("passforge {}", env!("CARGO_PKG_VERSION"));
            return Err(Done);
        }
        Ok(())
    }

    /// Apply CLI flags to the generation config.
    fn apply_flags(&mut self) {
        if let Some(len) = self.flags.length {
            let clamped = GenConfig::clamp_length(len);
            if clamped != len {
                prompts::length_clamped(len, clamped);
            }
            self.config.length = clamped;
        }

        if self.flags.no_symbols {
            self.config.symbols = false;
        }
        if self.flags.no_digits {
            self.config.digits = false;
        }

        if self.flags.clipboard {
            match ClipboardContext::new() {
                Ok(ctx) => self.clipboard = Some(ctx),
                Err(_) => {
                    if !prompts::clipboard_fallback_prompt() {
                        std::process::exit(0);
                    }
                }
            }
        }
    }

    /// Rate an existing password and exit, when `--check` was given.
    fn handle_check(&self) -> Result<(), Done> {
        if let Some(ref password) = self.flags.check {
            let strength = pass::score(password, self.config.symbols, self.config.digits);
            if prompts::quiet() {
                println!("{strength}");
            } else {
                println!("Strength: {}{}{}", strength.color(), strength, RESET);
            }
            return Err(Done);
        }
        Ok(())
    }

    /// Generate passwords and handle output.
    fn generate_output(&mut self) {
        let count = self.flags.number.unwrap_or(1).max(1);

        if let Some(ctx) = self.clipboard.as_mut() {
            let mut passwords = String::new();
            for _ in 0..count {
                let mut password = pass::generate(&self.config);
                passwords.push_str(&password);
                passwords.push('\n');
                password.zeroize();
            }

            match ctx.set_contents(passwords.clone()) {
                Ok(_) => {
                    // copypasta hands back its own copy; wipe it
                    if let Ok(mut retrieved) = ctx.get_contents() {
                        retrieved.zeroize();
                    }
                    prompts::clipboard_copied();
                }
                Err(e) => prompts::clipboard_error(&e.to_string()),
            }
            passwords.zeroize();
        } else {
            for _ in 0..count {
                let mut password = pass::generate(&self.config);
                if prompts::quiet() {
                    println!("{password}");
                } else {
                    let strength =
                        pass::score(&password, self.config.symbols, self.config.digits);
                    println!("{password}  {}{}{}", strength.color(), strength, RESET);
                }
                password.zeroize();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn argv(args: &[&str]) -> Vec<String> {
        std::iter::once("passforge")
            .chain(args.iter().copied())
            .map(String::from)
            .collect()
    }

    #[test]
    fn flags_shape_config() {
        let mut ctx = Context::new(argv(&["-l", "20", "--no-digits"])).unwrap();
        ctx.apply_flags();
        assert_eq!(ctx.config.length, 20);
        assert!(ctx.config.symbols);
        assert!(!ctx.config.digits);
    }

    #[test]
    fn out_of_range_length_is_clamped() {
        let mut ctx = Context::new(argv(&["-q", "-l", "100"])).unwrap();
        prompts::set_quiet(true);
        ctx.apply_flags();
        assert_eq!(ctx.config.length, 32);

        let mut ctx = Context::new(argv(&["-q", "-l", "1"])).unwrap();
        ctx.apply_flags();
        assert_eq!(ctx.config.length, 6);
    }

    #[test]
    fn parse_failure_surfaces_message() {
        let err = match Context::new(argv(&["--bogus"])) {
            Err(e) => e,
            Ok(_) => panic!("parse should have failed"),
        };
        assert!(err.contains("--bogus"));
    }
}
