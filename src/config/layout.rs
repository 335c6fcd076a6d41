//! Construction-time checks for a set of signal configurations.
//!
//! Signals trust their start bit; nothing in the decision core stops two
//! signals from writing the same bits. These checks run before any signal
//! is built and report every problem in one pass.

use super::error::LayoutViolation;
use super::SignalConfig;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// Outcome of validating a layout.
pub type LayoutValidation = Validation<(), NonEmptyVec<LayoutViolation>>;

/// Check a layout, accumulating ALL violations.
///
/// - every span must fit the status word
/// - no two spans may share a bit
/// - a signal must not reuse one address for two functions
pub fn validate_layout(signals: &[SignalConfig]) -> LayoutValidation {
    let mut checks: Vec<LayoutValidation> = Vec::new();

    for (index, signal) in signals.iter().enumerate() {
        checks.push(check_span(index, signal));
        checks.push(check_addresses(index, signal));
    }

    for (first, a) in signals.iter().enumerate() {
        for (offset, b) in signals[first + 1..].iter().enumerate() {
            let second = first + 1 + offset;
            let check = if a.bit_span().overlaps(&b.bit_span()) {
                Validation::fail(LayoutViolation::OverlappingSpans { first, second })
            } else {
                Validation::success(())
            };
            checks.push(check);
        }
    }

    Validation::all_vec(checks).map(|_| ())
}

fn check_span(index: usize, signal: &SignalConfig) -> LayoutValidation {
    let span = signal.bit_span();
    if span.fits_word() {
        Validation::success(())
    } else {
        Validation::fail(LayoutViolation::SpanOutOfRange {
            index,
            start_bit: span.start,
            end: span.end(),
        })
    }
}

fn check_addresses(index: usize, signal: &SignalConfig) -> LayoutValidation {
    let addresses = signal.addresses();
    let duplicates: Vec<LayoutValidation> = addresses
        .iter()
        .enumerate()
        // Report each repeated address once, at its last occurrence.
        .filter(|&(i, address)| {
            addresses[..i].contains(address) && !addresses[i + 1..].contains(address)
        })
        .map(|(_, &address)| Validation::fail(LayoutViolation::DuplicateAddress { index, address }))
        .collect();

    Validation::all_vec(duplicates).map(|_| ())
}
