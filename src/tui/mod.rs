//! Interactive password form.

mod form;
mod text;

pub use text::print_help;

/// Run TUI interactive mode.
pub fn run() {
    form::run();
}
