//! Behavioral tests for password generation through the public API.

use std::collections::HashMap;
use std::thread;

use rand::SeedableRng;
use rand::rngs::StdRng;

use securepass::pass::charset::{self, LETTERS, NUMBERS, SYMBOLS};
use securepass::pass::{CharClasses, GenerateError, LengthError, generate, generate_with};

fn all_combinations() -> impl Iterator<Item = CharClasses> {
    (0..8u8).map(|b| CharClasses::new(b & 1 != 0, b & 2 != 0, b & 4 != 0))
}

#[test]
fn length_and_membership_for_every_selection() {
    for classes in all_combinations().filter(|c| !c.is_empty()) {
        let set = charset::build(classes);
        for len in [0, 1, 5, 33, 256] {
            let pass = generate(len, classes).unwrap();
            assert_eq!(pass.chars().count(), len as usize, "{classes:?}");
            assert!(pass.bytes().all(|b| set.contains(&b)), "{classes:?}");
        }
    }
}

#[test]
fn no_classes_always_empty_charset() {
    let none = CharClasses::new(false, false, false);
    for len in [-10, -1, 0, 1, 12, 10_000] {
        assert_eq!(generate(len, none).unwrap_err(), GenerateError::EmptyCharset);
    }
}

#[test]
fn negative_length_is_a_validation_error() {
    for classes in all_combinations().filter(|c| !c.is_empty()) {
        let err = generate(-7, classes).unwrap_err();
        assert_eq!(err, GenerateError::InvalidLength(LengthError::Negative(-7)));
    }
}

#[test]
fn twelve_chars_all_classes() {
    let pass = generate(12, CharClasses::new(true, true, true)).unwrap();
    assert_eq!(pass.len(), 12);
    for b in pass.bytes() {
        assert!(LETTERS.contains(&b) || NUMBERS.contains(&b) || SYMBOLS.contains(&b));
    }
}

#[test]
fn eight_chars_letters_only() {
    let pass = generate(8, CharClasses::new(true, false, false)).unwrap();
    assert_eq!(pass.len(), 8);
    assert!(pass.bytes().all(|b| b.is_ascii_alphabetic()));
}

fn counts(pass: &str) -> HashMap<u8, usize> {
    let mut counts = HashMap::new();
    for b in pass.bytes() {
        *counts.entry(b).or_insert(0) += 1;
    }
    counts
}

#[test]
fn digits_are_uniform() {
    let mut rng = StdRng::seed_from_u64(0x5eed);
    let n = 200_000;
    let pass = generate_with(&mut rng, n as i64, CharClasses::new(false, true, false)).unwrap();
    let counts = counts(&pass);

    assert_eq!(counts.len(), NUMBERS.len());
    let expected = n / NUMBERS.len();
    for (&c, &count) in &counts {
        let dev = count.abs_diff(expected) as f64 / expected as f64;
        assert!(dev < 0.03, "{} seen {count} times, expected ~{expected}", c as char);
    }
}

#[test]
fn full_charset_chi_square() {
    let classes = CharClasses::default();
    let k = classes.size();
    let n = k * 2_000;
    let mut rng = StdRng::seed_from_u64(42);
    let pass = generate_with(&mut rng, n as i64, classes).unwrap();
    let counts = counts(&pass);

    assert_eq!(counts.len(), k, "every character should appear");
    let expected = (n / k) as f64;
    let chi2: f64 = counts
        .values()
        .map(|&o| {
            let d = o as f64 - expected;
            d * d / expected
        })
        .sum();
    // 93 degrees of freedom; the 99.99th percentile is about 150.
    assert!(chi2 < 160.0, "chi-square {chi2:.1} too large");
}

#[test]
fn reproducible_with_same_rng_state() {
    let classes = CharClasses::new(true, true, false);
    let a = generate_with(&mut StdRng::seed_from_u64(99), 64, classes).unwrap();
    let b = generate_with(&mut StdRng::seed_from_u64(99), 64, classes).unwrap();
    assert_eq!(a.as_str(), b.as_str());
}

#[test]
fn concurrent_callers() {
    let handles: Vec<_> = (0..8)
        .map(|_| {
            thread::spawn(|| {
                (0..100)
                    .map(|_| generate(24, CharClasses::default()).unwrap().to_string())
                    .collect::<Vec<_>>()
            })
        })
        .collect();

    let mut all = Vec::new();
    for h in handles {
        all.extend(h.join().unwrap());
    }
    assert_eq!(all.len(), 800);
    assert!(all.iter().all(|p| p.len() == 24));

    all.sort();
    all.dedup();
    assert_eq!(all.len(), 800, "24-char passwords should not repeat");
}
