mod context;
mod flags;
mod parse;
pub mod prompts;

pub use context::{Context, Done};
pub use flags::CliFlags;
pub use parse::parse;

/// Run client mode from raw argv.
pub fn run(args: Vec<String>) {
    let mut ctx = match Context::new(args) {
        Ok(ctx) => ctx,
        Err(e) => {
            prompts::error(&e);
            std::process::exit(2);
        }
    };

    let _ = ctx.run();
}
