//! CLI context: validated settings built from flags.

use std::io;

use super::{CliFlags, Error, prompts};
use crate::pass::{self, length};
use crate::settings::Settings;

/// Application context for CLI mode.
pub struct Context {
    pub settings: Settings,
    pub quiet: bool,
}

impl Context {
    /// Validate flags and apply them over the default settings.
    pub fn new(flags: CliFlags) -> Result<Self, Error> {
        let mut settings = Settings::default();
        apply_flags(&flags, &mut settings)?;
        Ok(Self {
            settings,
            quiet: flags.quiet,
        })
    }

    /// Generate passwords to stdout; warnings go to stderr.
    pub fn run(&self) -> Result<(), Error> {
        self.generate_output(io::stdout().lock(), io::stderr().lock())
    }

    /// Stream passwords to `out` one at a time. Warnings go to `err` unless
    /// quiet.
    pub fn generate_output<W, E>(&self, out: W, mut err: E) -> Result<(), Error>
    where
        W: io::Write,
        E: io::Write,
    {
        let s = &self.settings;
        let batch = pass::generate_batch(s.length, s.classes, s.count)?;

        if s.is_large() {
            log::debug!("length {} is above the warning threshold {}", s.length, s.warn_length);
            if !self.quiet {
                prompts::large_length(&mut err, s.warn_length)?;
            }
        }

        let written = pass::write_lines(out, batch)?;
        log::info!("generated {} password(s) of length {}", written, s.length);
        Ok(())
    }
}

fn apply_flags(flags: &CliFlags, settings: &mut Settings) -> Result<(), Error> {
    if let Some(max) = flags.max_length {
        settings.max_length = max;
    }
    if let Some(warn) = flags.warn_length {
        settings.warn_length = warn;
    }

    if let Some(ref raw) = flags.length {
        settings.length = length::parse(raw, settings.max_length)?;
    } else {
        settings.length = length::check(settings.length, settings.max_length)?;
    }

    match flags.number {
        Some(0) => return Err(Error::ZeroCount),
        Some(n) => settings.count = n,
        None => {}
    }

    if flags.no_letters {
        settings.classes.letters = false;
    }
    if flags.no_numbers {
        settings.classes.numbers = false;
    }
    if flags.no_symbols {
        settings.classes.symbols = false;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pass::{CharClasses, GenerateError, LengthError};

    fn flags(length: Option<&str>) -> CliFlags {
        CliFlags {
            length: length.map(String::from),
            ..Default::default()
        }
    }

    #[test]
    fn defaults_when_no_flags() {
        let ctx = Context::new(CliFlags::default()).unwrap();
        assert_eq!(ctx.settings, Settings::default());
    }

    #[test]
    fn applies_length_count_and_classes() {
        let ctx = Context::new(CliFlags {
            length: Some("20".into()),
            number: Some(3),
            no_symbols: true,
            ..Default::default()
        })
        .unwrap();
        assert_eq!(ctx.settings.length, 20);
        assert_eq!(ctx.settings.count, 3);
        assert_eq!(ctx.settings.classes, CharClasses::new(true, true, false));
    }

    #[test]
    fn rejects_bad_lengths() {
        for (raw, expected) in [
            ("-3", LengthError::Negative(-3)),
            ("0", LengthError::Zero),
            ("ten", LengthError::NotAnInteger("ten".into())),
        ] {
            match Context::new(flags(Some(raw))) {
                Err(Error::Generate(GenerateError::InvalidLength(e))) => assert_eq!(e, expected),
                other => panic!("{raw}: unexpected {:?}", other.err()),
            }
        }
    }

    #[test]
    fn max_length_applies_before_length() {
        let res = Context::new(CliFlags {
            length: Some("50".into()),
            max_length: Some(40),
            ..Default::default()
        });
        assert!(matches!(
            res,
            Err(Error::Generate(GenerateError::InvalidLength(LengthError::TooLong { length: 50, max: 40 })))
        ));
    }

    #[test]
    fn zero_count_rejected() {
        let res = Context::new(CliFlags {
            number: Some(0),
            ..Default::default()
        });
        assert!(matches!(res, Err(Error::ZeroCount)));
    }

    #[test]
    fn writes_one_password_per_line() {
        let ctx = Context::new(CliFlags {
            length: Some("16".into()),
            number: Some(4),
            no_letters: true,
            no_symbols: true,
            ..Default::default()
        })
        .unwrap();
        let mut out = Vec::new();
        ctx.generate_output(&mut out, io::sink()).unwrap();
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 4);
        assert!(lines.iter().all(|l| l.len() == 16 && l.bytes().all(|b| b.is_ascii_digit())));
    }

    #[test]
    fn empty_charset_is_reported() {
        let ctx = Context::new(CliFlags {
            no_letters: true,
            no_numbers: true,
            no_symbols: true,
            ..Default::default()
        })
        .unwrap();
        let mut out = Vec::new();
        let err = ctx.generate_output(&mut out, io::sink()).unwrap_err();
        assert!(matches!(err, Error::Generate(GenerateError::EmptyCharset)));
        assert!(out.is_empty());
    }

    fn large_length_stderr(quiet: bool) -> String {
        let ctx = Context::new(CliFlags {
            length: Some("20".into()),
            warn_length: Some(10),
            quiet,
            ..Default::default()
        })
        .unwrap();
        let (mut out, mut err) = (Vec::new(), Vec::new());
        ctx.generate_output(&mut out, &mut err).unwrap();
        assert_eq!(out.len(), 21);
        String::from_utf8(err).unwrap()
    }

    #[test]
    fn large_length_warns_on_stderr() {
        assert!(large_length_stderr(false).contains("over 10 characters"));
    }

    #[test]
    fn quiet_suppresses_large_length_warning() {
        assert!(large_length_stderr(true).is_empty());
    }
}
