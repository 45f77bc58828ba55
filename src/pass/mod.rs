//! Password generation and output.

pub mod charset;
mod error;
mod generate;
pub mod length;

use std::fmt;
use std::io::{self, Write};
use std::ops::Deref;

use zeroize::{Zeroize, Zeroizing};

pub use charset::CharClasses;
pub use error::{GenerateError, LengthError};
pub use generate::{Batch, generate, generate_batch, generate_with};

/// A generated password. The backing buffer is wiped on drop.
pub struct Password(Zeroizing<String>);

impl Password {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for Password {
    fn from(s: String) -> Self {
        Self(Zeroizing::new(s))
    }
}

impl Deref for Password {
    type Target = str;

    fn deref(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Password(<{} chars>)", self.0.len())
    }
}

/// Buffered writer whose buffer is zeroed after every flush and on drop.
pub struct SecureBufWriter<W: Write> {
    inner: W,
    buf: Vec<u8>,
}

const BUF_CAPACITY: usize = 8 * 1024;

impl<W: Write> SecureBufWriter<W> {
    pub fn new(inner: W) -> Self {
        Self {
            inner,
            buf: Vec::with_capacity(BUF_CAPACITY),
        }
    }

    fn flush_buf(&mut self) -> io::Result<()> {
        let res = self.inner.write_all(&self.buf);
        self.buf.zeroize();
        res
    }
}

impl<W: Write> Write for SecureBufWriter<W> {
    fn write(&mut self, data: &[u8]) -> io::Result<usize> {
        if self.buf.len() + data.len() > BUF_CAPACITY {
            self.flush_buf()?;
        }
        if data.len() >= BUF_CAPACITY {
            return self.inner.write(data);
        }
        self.buf.extend_from_slice(data);
        Ok(data.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.flush_buf()?;
        self.inner.flush()
    }
}

impl<W: Write> Drop for SecureBufWriter<W> {
    fn drop(&mut self) {
        let _ = self.flush();
        self.buf.zeroize();
    }
}

/// Write each password on its own line as it is produced, dropping it
/// before the next one is pulled. Returns how many were written.
pub fn write_lines<W, I>(out: W, passwords: I) -> io::Result<usize>
where
    W: Write,
    I: IntoIterator<Item = Password>,
{
    let mut out = SecureBufWriter::new(out);
    let mut written = 0;
    for pass in passwords {
        out.write_all(pass.as_bytes())?;
        out.write_all(b"\n")?;
        written += 1;
    }
    out.flush()?;
    Ok(written)
}
