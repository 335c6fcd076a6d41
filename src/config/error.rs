//! Errors raised while loading and validating a signal layout.

use crate::core::{Address, WORD_BITS};
use thiserror::Error;

/// A single problem found in a layout.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum LayoutViolation {
    #[error(
        "Signal {index} occupies bits {start_bit}..{end}, beyond the {}-bit status word",
        WORD_BITS
    )]
    SpanOutOfRange {
        index: usize,
        start_bit: u32,
        end: u32,
    },

    #[error("Signals {first} and {second} share status word bits")]
    OverlappingSpans { first: usize, second: usize },

    #[error("Signal {index} uses address {address} for more than one function")]
    DuplicateAddress { index: usize, address: Address },
}

/// Errors that can occur when turning configuration into signals.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Layout could not be parsed: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Layout rejected with {} violation(s)", .violations.len())]
    InvalidLayout { violations: Vec<LayoutViolation> },
}
