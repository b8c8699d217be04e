//! Generation configuration.

/// Shortest password the form or CLI will request.
pub const MIN_LENGTH: usize = 6;
/// Longest password the form or CLI will request.
pub const MAX_LENGTH: usize = 32;

/// Inputs to password generation: target length plus category toggles.
/// Uppercase and lowercase letters are always included.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenConfig {
    pub length: usize,
    pub symbols: bool,
    pub digits: bool,
}

impl Default for GenConfig {
    fn default() -> Self {
        Self {
            length: 12,
            symbols: true,
            digits: true,
        }
    }
}

impl GenConfig {
    /// Clamp a requested length into the supported range.
    /// Callers enforce the bounds; `generate` itself does not.
    pub fn clamp_length(length: usize) -> usize {
        length.clamp(MIN_LENGTH, MAX_LENGTH)
    }
}
