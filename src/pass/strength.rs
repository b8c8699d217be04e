//! Heuristic strength rating.

use std::fmt;

use super::charset;
use crate::terminal::{GREEN, GREEN_BRIGHT, RED, YELLOW};

/// Strength tier, weakest to strongest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Strength {
    Weak,
    Medium,
    Strong,
    VeryStrong,
}

impl Strength {
    pub fn label(self) -> &'static str {
        match self {
            Strength::Weak => "Weak",
            Strength::Medium => "Medium",
            Strength::Strong => "Strong",
            Strength::VeryStrong => "Very Strong",
        }
    }

    /// ANSI color for terminal display.
    pub fn color(self) -> &'static str {
        match self {
            Strength::Weak => RED,
            Strength::Medium => YELLOW,
            Strength::Strong => GREEN,
            Strength::VeryStrong => GREEN_BRIGHT,
        }
    }
}

impl fmt::Display for Strength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Rate a password by accumulating points: one per length tier reached
/// (8, 12, 16) and one per present category. Digit and symbol presence
/// only counts when the corresponding toggle is enabled.
pub fn score(password: &str, symbols_enabled: bool, digits_enabled: bool) -> Strength {
    let length = password.chars().count();
    let mut points = 0;

    if length >= 8 {
        points += 1;
    }
    if length >= 12 {
        points += 1;
    }
    if length >= 16 {
        points += 1;
    }

    if password.chars().any(|c| c.is_ascii_uppercase()) {
        points += 1;
    }
    if password.chars().any(|c| c.is_ascii_lowercase()) {
        points += 1;
    }
    if digits_enabled && password.chars().any(|c| c.is_ascii_digit()) {
        points += 1;
    }
    if symbols_enabled && password.chars().any(charset::is_symbol) {
        points += 1;
    }

    match points {
        0..=2 => Strength::Weak,
        3..=4 => Strength::Medium,
        5..=6 => Strength::Strong,
        _ => Strength::VeryStrong,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lowercase_only_is_weak() {
        // length >= 8 and lowercase: 2 points
        assert_eq!(score("abcdefgh", false, false), Strength::Weak);
    }

    #[test]
    fn empty_is_weak() {
        assert_eq!(score("", true, true), Strength::Weak);
    }

    #[test]
    fn mixed_twelve_chars_is_strong() {
        // length 8+12, upper, lower, digit: 5 points
        assert_eq!(score("Abcdefgh1234", true, true), Strength::Strong);
    }

    #[test]
    fn all_checks_is_very_strong() {
        // all three length tiers plus all four categories: 7 points
        assert_eq!(score("Abcdefghijklmnop1!", true, true), Strength::VeryStrong);
    }

    #[test]
    fn three_points_is_medium() {
        // length 8, upper, lower
        assert_eq!(score("Abcdefgh", false, false), Strength::Medium);
    }

    #[test]
    fn six_points_is_strong() {
        // 16 chars, upper, lower, digit, no symbol
        assert_eq!(score("Aa1aaaaaaaaaaaaa", true, true), Strength::Strong);
    }

    #[test]
    fn disabled_toggles_gate_points() {
        // digit and symbol present but both toggles off: 12+8 length,
        // upper, lower = 4 points
        assert_eq!(score("Abcdefgh123!", false, false), Strength::Medium);
        // enabling the toggles lifts the same password two tiers
        assert_eq!(score("Abcdefgh123!", true, true), Strength::Strong);
    }

    #[test]
    fn same_input_same_label() {
        for _ in 0..10 {
            assert_eq!(score("Abcdefgh1234", true, true), Strength::Strong);
        }
    }

    #[test]
    fn more_checks_never_score_lower() {
        // each password satisfies strictly more checks than the one before
        let ladder = [
            "abc",                // 1 point
            "abcdefgh",           // 2
            "Abcdefgh",           // 3
            "Abcdefgh1",          // 4
            "Abcdefgh1234",       // 5
            "Abcdefgh1234!",      // 6
            "Abcdefghijkl1234!",  // 7
        ];
        let labels: Vec<Strength> = ladder.iter().map(|p| score(p, true, true)).collect();
        for pair in labels.windows(2) {
            assert!(pair[0] <= pair[1], "{:?} > {:?}", pair[0], pair[1]);
        }
    }

    #[test]
    fn tier_ordering() {
        assert!(Strength::Weak < Strength::Medium);
        assert!(Strength::Medium < Strength::Strong);
        assert!(Strength::Strong < Strength::VeryStrong);
    }

    #[test]
    fn labels() {
        assert_eq!(Strength::Weak.to_string(), "Weak");
        assert_eq!(Strength::VeryStrong.to_string(), "Very Strong");
    }
}
