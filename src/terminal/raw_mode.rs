//! Raw mode RAII guard and TTY detection.

use std::io;

use crossterm::terminal::{disable_raw_mode, enable_raw_mode, is_raw_mode_enabled};
use crossterm::tty::IsTty;

/// Disables raw mode when dropped, unless raw mode was already on.
pub struct RawModeGuard {
    restore: bool,
}

impl RawModeGuard {
    pub fn new() -> io::Result<Self> {
        let already = is_raw_mode_enabled()?;
        if !already {
            enable_raw_mode()?;
        }
        Ok(Self { restore: !already })
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        if self.restore {
            let _ = disable_raw_mode();
        }
    }
}

/// Whether stdin is attached to a terminal.
pub fn stdin_is_tty() -> bool {
    io::stdin().is_tty()
}
