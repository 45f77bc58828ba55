mod context;
mod error;
mod flags;
pub mod prompts;

use std::process::ExitCode;

pub use context::Context;
pub use error::Error;
pub use flags::CliFlags;

use crate::terminal::stdin_is_tty;
use crate::tui;

/// Run the program. `bare` is true when no arguments were given.
pub fn run(flags: CliFlags, bare: bool) -> ExitCode {
    let interactive = flags.interactive || (bare && stdin_is_tty());
    let ctx = match Context::new(flags) {
        Ok(ctx) => ctx,
        Err(e) => return fail(&e),
    };

    if interactive {
        tui::run(ctx.settings);
        return ExitCode::SUCCESS;
    }

    match ctx.run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => fail(&e),
    }
}

fn fail(e: &Error) -> ExitCode {
    log::debug!("exiting on error: {e:?}");
    prompts::error(&e.to_string());
    e.exit_code()
}
