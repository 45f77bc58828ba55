//! Character classes and the effective charset built from them.

pub const LETTERS: &[u8] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub const NUMBERS: &[u8] = b"0123456789";
pub const SYMBOLS: &[u8] = b"!\"#$%&'()*+,-./:;<=>?@[\\]^_`{|}~";

/// Which alphabets contribute to a password.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CharClasses {
    pub letters: bool,
    pub numbers: bool,
    pub symbols: bool,
}

impl CharClasses {
    pub const fn new(letters: bool, numbers: bool, symbols: bool) -> Self {
        Self {
            letters,
            numbers,
            symbols,
        }
    }

    /// True when no class is selected.
    pub fn is_empty(&self) -> bool {
        !(self.letters || self.numbers || self.symbols)
    }

    /// Size of the effective charset.
    pub fn size(&self) -> usize {
        let mut size = 0;
        if self.letters {
            size += LETTERS.len();
        }
        if self.numbers {
            size += NUMBERS.len();
        }
        if self.symbols {
            size += SYMBOLS.len();
        }
        size
    }
}

impl Default for CharClasses {
    fn default() -> Self {
        Self::new(true, true, true)
    }
}

/// Build the effective charset: letters, then numbers, then symbols.
pub fn build(classes: CharClasses) -> Vec<u8> {
    let mut chars = Vec::with_capacity(classes.size());

    if classes.letters {
        chars.extend_from_slice(LETTERS);
    }

    if classes.numbers {
        chars.extend_from_slice(NUMBERS);
    }

    if classes.symbols {
        chars.extend_from_slice(SYMBOLS);
    }

    chars
}
