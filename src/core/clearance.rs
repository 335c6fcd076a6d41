//! Source of the nondeterministic aspect shown on a random-proceed command.
//!
//! A random-proceed clears a signal out of danger to an aspect the operator
//! did not pick. The choice is abstracted behind [`ClearanceSource`] so the
//! decision logic never reaches for a process-wide generator and tests can
//! pin the outcome.

use super::aspect::ThreeAspect;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

/// The non-danger aspects a random-proceed may resolve to.
///
/// Danger is deliberately absent: a random clearance can never leave the
/// signal at stop.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum Clearance {
    Caution,
    Proceed,
}

impl From<Clearance> for ThreeAspect {
    fn from(clearance: Clearance) -> Self {
        match clearance {
            Clearance::Caution => ThreeAspect::Caution,
            Clearance::Proceed => ThreeAspect::Proceed,
        }
    }
}

/// Picks the aspect for a random-proceed transition.
///
/// Closures returning a [`Clearance`] implement this trait, which is the
/// simplest way to script a sequence of outcomes in tests.
///
/// # Example
///
/// ```rust
/// use signalbox::core::{Clearance, ClearanceSource};
///
/// let mut next = Clearance::Caution;
/// let mut alternating = move || {
///     let current = next;
///     next = match current {
///         Clearance::Caution => Clearance::Proceed,
///         Clearance::Proceed => Clearance::Caution,
///     };
///     current
/// };
///
/// assert_eq!(alternating.choose(), Clearance::Caution);
/// assert_eq!(alternating.choose(), Clearance::Proceed);
/// ```
pub trait ClearanceSource {
    fn choose(&mut self) -> Clearance;
}

impl<F> ClearanceSource for F
where
    F: FnMut() -> Clearance,
{
    fn choose(&mut self) -> Clearance {
        self()
    }
}

/// Uniform choice between caution and proceed backed by a `rand` generator.
#[derive(Clone, Debug)]
pub struct RngClearance<R = StdRng> {
    rng: R,
}

impl<R: Rng> RngClearance<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RngClearance<StdRng> {
    /// Generator seeded from operating system entropy.
    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_os_rng())
    }

    /// Deterministic generator; the same seed yields the same sequence.
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl Default for RngClearance<StdRng> {
    fn default() -> Self {
        Self::from_entropy()
    }
}

impl<R: Rng> ClearanceSource for RngClearance<R> {
    fn choose(&mut self) -> Clearance {
        if self.rng.random_bool(0.5) {
            Clearance::Proceed
        } else {
            Clearance::Caution
        }
    }
}

/// Always resolves to the same clearance.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct FixedClearance(pub Clearance);

impl ClearanceSource for FixedClearance {
    fn choose(&mut self) -> Clearance {
        self.0
    }
}
