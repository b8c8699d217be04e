//! Character sets for generation and strength checks.

use crate::config::GenConfig;

pub const UPPERCASE: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub const LOWERCASE: &[u8] = b"abcdefghijklmnopqrstuvwxyz";
pub const DIGITS: &[u8] = b"0123456789";
pub const SYMBOLS: &[u8] = b"!@#$%^&*()_+~|}{[]:;?><,./-=";

/// Build the fill pool for a config. Letters are always present;
/// symbols and digits only when their toggle is on.
pub fn build(config: &GenConfig) -> Vec<u8> {
    let mut chars = Vec::with_capacity(size(config));

    chars.extend_from_slice(UPPERCASE);
    chars.extend_from_slice(LOWERCASE);

    if config.symbols {
        chars.extend_from_slice(SYMBOLS);
    }

    if config.digits {
        chars.extend_from_slice(DIGITS);
    }

    chars
}

/// Effective pool size for a config.
pub fn size(config: &GenConfig) -> usize {
    let mut size = UPPERCASE.len() + LOWERCASE.len();
    if config.symbols {
        size += SYMBOLS.len();
    }
    if config.digits {
        size += DIGITS.len();
    }
    size
}

/// Whether a character belongs to the fixed symbol set.
pub fn is_symbol(c: char) -> bool {
    c.is_ascii() && SYMBOLS.contains(&(c as u8))
}
