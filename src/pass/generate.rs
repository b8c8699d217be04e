//! Password generation.

use rand::Rng;
use rand::seq::SliceRandom;

use super::charset;
use crate::config::GenConfig;

/// Number of mandatory seed characters for a config: one uppercase, one
/// lowercase, plus one per enabled category.
pub fn seed_count(config: &GenConfig) -> usize {
    2 + usize::from(config.symbols) + usize::from(config.digits)
}

/// Generate a single password.
///
/// One character from each mandatory category is placed first, the rest is
/// filled from the full enabled pool, and the whole buffer gets a uniform
/// Fisher-Yates shuffle. Only minimum category presence is guaranteed.
///
/// If `config.length` is below the seed count the result is the seed
/// characters alone, so the output can exceed the request. Callers keep
/// lengths in `[MIN_LENGTH, MAX_LENGTH]`, which is always above the floor.
pub fn generate(config: &GenConfig) -> String {
    let mut rng = rand::thread_rng();
    let pool = charset::build(config);

    let mut bytes = Vec::with_capacity(config.length.max(seed_count(config)));

    bytes.push(charset::UPPERCASE[rng.gen_range(0..charset::UPPERCASE.len())]);
    bytes.push(charset::LOWERCASE[rng.gen_range(0..charset::LOWERCASE.len())]);
    if config.symbols {
        bytes.push(charset::SYMBOLS[rng.gen_range(0..charset::SYMBOLS.len())]);
    }
    if config.digits {
        bytes.push(charset::DIGITS[rng.gen_range(0..charset::DIGITS.len())]);
    }

    while bytes.len() < config.length {
        bytes.push(pool[rng.gen_range(0..pool.len())]);
    }

    bytes.shuffle(&mut rng);

    // Safety: every charset byte is ASCII
    unsafe { String::from_utf8_unchecked(bytes) }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{MAX_LENGTH, MIN_LENGTH};

    #[test]
    fn output_length_matches_config() {
        for length in MIN_LENGTH..=MAX_LENGTH {
            let config = GenConfig {
                length,
                ..GenConfig::default()
            };
            assert_eq!(generate(&config).len(), length);
        }
    }

    #[test]
    fn letters_only_when_toggles_off() {
        let config = GenConfig {
            length: 12,
            symbols: false,
            digits: false,
        };
        for _ in 0..50 {
            let pass = generate(&config);
            assert_eq!(pass.len(), 12);
            assert!(pass.bytes().all(|b| b.is_ascii_alphabetic()));
            assert!(pass.bytes().any(|b| b.is_ascii_uppercase()));
            assert!(pass.bytes().any(|b| b.is_ascii_lowercase()));
        }
    }

    #[test]
    fn mandatory_categories_present() {
        let config = GenConfig::default();
        for _ in 0..50 {
            let pass = generate(&config);
            assert!(pass.bytes().any(|b| b.is_ascii_uppercase()));
            assert!(pass.bytes().any(|b| b.is_ascii_lowercase()));
            assert!(pass.bytes().any(|b| b.is_ascii_digit()));
            assert!(pass.chars().any(charset::is_symbol));
        }
    }

    #[test]
    fn digits_without_symbols() {
        let config = GenConfig {
            length: 10,
            symbols: false,
            digits: true,
        };
        for _ in 0..50 {
            let pass = generate(&config);
            assert!(pass.bytes().any(|b| b.is_ascii_digit()));
            assert!(!pass.chars().any(charset::is_symbol));
        }
    }

    #[test]
    fn symbols_without_digits() {
        let config = GenConfig {
            length: 10,
            symbols: true,
            digits: false,
        };
        for _ in 0..50 {
            let pass = generate(&config);
            assert!(pass.chars().any(charset::is_symbol));
            assert!(!pass.bytes().any(|b| b.is_ascii_digit()));
        }
    }

    #[test]
    fn seed_counts() {
        let base = GenConfig {
            length: 12,
            symbols: false,
            digits: false,
        };
        assert_eq!(seed_count(&base), 2);
        assert_eq!(seed_count(&GenConfig { digits: true, ..base }), 3);
        assert_eq!(seed_count(&GenConfig { symbols: true, ..base }), 3);
        assert_eq!(seed_count(&GenConfig::default()), 4);
    }

    #[test]
    fn seed_floor_overflows_short_lengths() {
        // Below the caller minimum, seeds alone exceed the request.
        let config = GenConfig {
            length: 2,
            symbols: true,
            digits: true,
        };
        for _ in 0..20 {
            let pass = generate(&config);
            assert_eq!(pass.len(), 4);
            assert!(pass.bytes().any(|b| b.is_ascii_uppercase()));
            assert!(pass.bytes().any(|b| b.is_ascii_lowercase()));
            assert!(pass.bytes().any(|b| b.is_ascii_digit()));
            assert!(pass.chars().any(charset::is_symbol));
        }
    }
}
