//! Password generation settings.

use crate::pass::CharClasses;
use crate::pass::length::LARGE_LENGTH;

pub const DEFAULT_LENGTH: usize = 12;
pub const DEFAULT_MAX_LENGTH: usize = 100_000_000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub length: usize,
    pub classes: CharClasses,
    pub count: usize,
    pub warn_length: usize,
    pub max_length: usize,
}

impl Settings {
    pub fn toggle_letters(&mut self) {
        self.classes.letters = !self.classes.letters;
    }

    pub fn toggle_numbers(&mut self) {
        self.classes.numbers = !self.classes.numbers;
    }

    pub fn toggle_symbols(&mut self) {
        self.classes.symbols = !self.classes.symbols;
    }

    /// Whether the configured length should trigger a size warning.
    pub fn is_large(&self) -> bool {
        crate::pass::length::is_large(self.length, self.warn_length)
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            length: DEFAULT_LENGTH,
            classes: CharClasses::default(),
            count: 1,
            warn_length: LARGE_LENGTH,
            max_length: DEFAULT_MAX_LENGTH,
        }
    }
}
