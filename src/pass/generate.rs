//! Password generation.

use rand::rngs::ThreadRng;
use rand::{CryptoRng, Rng};

use super::charset::{self, CharClasses};
use super::{GenerateError, LengthError, Password};

/// Generate a password with the thread-local CSPRNG.
pub fn generate(length: i64, classes: CharClasses) -> Result<Password, GenerateError> {
    generate_with(&mut rand::rng(), length, classes)
}

/// Generate a password from an explicit randomness source.
///
/// An empty charset is reported before the length is looked at, so a call
/// with no classes selected always yields [`GenerateError::EmptyCharset`].
pub fn generate_with<R: CryptoRng>(
    rng: &mut R,
    length: i64,
    classes: CharClasses,
) -> Result<Password, GenerateError> {
    let chars = charset::build(classes);
    if chars.is_empty() {
        return Err(GenerateError::EmptyCharset);
    }

    let length = usize::try_from(length).map_err(|_| LengthError::Negative(length))?;
    log::debug!("generating {} chars from a {}-char set", length, chars.len());

    Ok(generate_from_charset(rng, &chars, length))
}

/// Lazily generates `count` independent passwords, one per `next()`.
#[derive(Debug)]
pub struct Batch {
    chars: Vec<u8>,
    length: usize,
    remaining: usize,
    rng: ThreadRng,
}

impl Iterator for Batch {
    type Item = Password;

    fn next(&mut self) -> Option<Password> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        Some(generate_from_charset(&mut self.rng, &self.chars, self.length))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for Batch {}

/// Prepare `count` independent passwords. The charset is checked up front;
/// nothing is generated until the batch is iterated.
pub fn generate_batch(
    length: usize,
    classes: CharClasses,
    count: usize,
) -> Result<Batch, GenerateError> {
    let chars = charset::build(classes);
    if chars.is_empty() {
        return Err(GenerateError::EmptyCharset);
    }

    Ok(Batch {
        chars,
        length,
        remaining: count,
        rng: rand::rng(),
    })
}

/// Sample `length` characters with replacement from a non-empty charset.
#[inline]
fn generate_from_charset<R: CryptoRng>(rng: &mut R, chars: &[u8], length: usize) -> Password {
    let mut pass = String::with_capacity(length);
    pass.extend((0..length).map(|_| random_char(chars, rng)));
    Password::from(pass)
}

#[inline]
fn random_char<R: CryptoRng>(chars: &[u8], rng: &mut R) -> char {
    chars[rng.random_range(0..chars.len())] as char
}
