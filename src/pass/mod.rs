//! Password generation and strength rating.

pub mod charset;
mod generate;
mod strength;

pub use generate::{generate, seed_count};
pub use strength::{Strength, score};
