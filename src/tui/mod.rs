//! Interactive terminal menu.

mod input;
mod options;
mod text;

pub use input::*;
pub use options::*;
pub use text::*;

use crate::pass::Password;
use crate::settings::Settings;

/// Outcome of the last menu action, shown under the menu.
#[derive(Debug)]
pub enum Status {
    Idle,
    Error(String),
    Generated {
        password: Password,
        warning: Option<String>,
    },
}

/// Run TUI interactive mode.
pub fn run(settings: Settings) {
    log::debug!("starting interactive mode");
    gen_main_menu(settings);
}
