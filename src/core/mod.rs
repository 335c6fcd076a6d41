//! Core signal types and decision logic.
//!
//! This module contains the pure decision core:
//! - Aspect definitions via the `Aspect` trait
//! - Guard predicates for transition control
//! - The injectable clearance source for random-proceed
//! - The `Signal` contract every signal kind implements
//!
//! Nothing here performs I/O. A signal only changes when its own
//! `handle_event` is called, and reports whether it did.

mod aspect;
mod clearance;
mod guard;

pub use aspect::{Aspect, GroundAspect, Indication, ThreeAspect};
pub use clearance::{Clearance, ClearanceSource, FixedClearance, RngClearance};
pub use guard::Guard;

use serde::{Deserialize, Serialize};

/// The shared status word signals render their aspects into.
pub type Bitmask = u32;

/// Accessory address carried by a bus event.
pub type Address = u16;

/// Width of the status word in bits.
pub const WORD_BITS: u32 = Bitmask::BITS;

/// Contiguous range of status-word bits owned by one signal.
///
/// # Example
///
/// ```rust
/// use signalbox::core::BitSpan;
///
/// let span = BitSpan::new(4, 3);
/// assert_eq!(span.mask(), Some(0b111_0000));
/// assert!(span.overlaps(&BitSpan::new(6, 1)));
/// assert!(!span.overlaps(&BitSpan::new(7, 2)));
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct BitSpan {
    pub start: u32,
    pub len: u32,
}

impl BitSpan {
    /// Span of `len` bits starting at `start`.
    pub fn new(start: u32, len: u32) -> Self {
        Self { start, len }
    }

    /// One past the last bit of the span.
    pub fn end(&self) -> u32 {
        self.start.saturating_add(self.len)
    }

    /// Whether every bit of the span fits in the status word.
    pub fn fits_word(&self) -> bool {
        self.end() <= WORD_BITS
    }

    /// Mask covering the span, or `None` if it does not fit the word.
    pub fn mask(&self) -> Option<Bitmask> {
        if !self.fits_word() {
            return None;
        }
        let ones = match self.len {
            0 => 0,
            len if len >= WORD_BITS => Bitmask::MAX,
            len => (1 << len) - 1,
        };
        Some(ones << self.start.min(WORD_BITS - 1))
    }

    /// Whether the two spans share at least one bit. Empty spans never overlap.
    pub fn overlaps(&self, other: &BitSpan) -> bool {
        self.len > 0 && other.len > 0 && self.start < other.end() && other.start < self.end()
    }
}

/// Contract shared by every signal kind.
///
/// A signal owns the bits `[start_bit, start_bit + span)` of the status
/// word. `handle_event` is the only mutation path; when it returns `false`
/// the signal is left untouched.
///
/// # Example
///
/// ```rust
/// use signalbox::core::Signal;
/// use signalbox::signals::SubsidiarySignal;
///
/// let mut calling_on = SubsidiarySignal::new(5, 10);
/// assert_eq!(calling_on.current_state(), 0);
///
/// assert!(calling_on.handle_event(10, true));
/// assert_eq!(calling_on.current_state(), 1 << 5);
/// assert!(!calling_on.handle_event(10, true));
/// ```
pub trait Signal {
    /// Apply a bus event, returning whether the displayed state changed.
    fn handle_event(&mut self, address: Address, active: bool) -> bool;

    /// Bits currently set by this signal.
    fn current_state(&self) -> Bitmask;

    /// First bit of the status word owned by this signal.
    fn start_bit(&self) -> u32;

    /// Number of bits owned by this signal.
    fn span(&self) -> u32;

    /// The bits owned by this signal as a [`BitSpan`].
    fn bit_span(&self) -> BitSpan {
        BitSpan::new(self.start_bit(), self.span())
    }
}
