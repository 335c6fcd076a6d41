//! Concrete signal kinds.
//!
//! Each kind owns a fixed bit span and applies its own rule to incoming
//! bus events:
//!
//! | Kind                  | Span | Rule                                   |
//! |-----------------------|------|----------------------------------------|
//! | [`ThreeAspectSignal`] | 3    | positive-only aspect selection, random |
//! | [`GroundSignal`]      | 2    | positive-only aspect selection         |
//! | [`SubsidiarySignal`]  | 1    | literal on/off with debounce           |
//! | [`Feather`]           | 1    | literal on/off with debounce           |
//!
//! [`AnySignal`] closes over the four kinds so heterogeneous signals can
//! share one collection without boxing.

mod any;
mod ground;
mod indicator;
mod three_aspect;

pub use any::AnySignal;
pub use ground::GroundSignal;
pub use indicator::{Feather, SubsidiarySignal};
pub use three_aspect::{ThreeAspectAddresses, ThreeAspectSignal};

use crate::core::{Address, Aspect};
use serde::{Deserialize, Serialize};

/// Discriminant of the signal kinds.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SignalKind {
    ThreeAspect,
    Ground,
    Subsidiary,
    Feather,
}

impl SignalKind {
    pub fn name(&self) -> &'static str {
        match self {
            Self::ThreeAspect => "three_aspect",
            Self::Ground => "ground",
            Self::Subsidiary => "subsidiary",
            Self::Feather => "feather",
        }
    }

    /// Bits of the status word a signal of this kind occupies.
    pub fn span(&self) -> u32 {
        match self {
            Self::ThreeAspect => 3,
            Self::Ground => 2,
            Self::Subsidiary | Self::Feather => 1,
        }
    }
}

fn log_change<A: Aspect>(kind: SignalKind, start_bit: u32, address: Address, from: A, to: A) {
    tracing::debug!(
        kind = kind.name(),
        start_bit,
        address,
        from = from.name(),
        to = to.name(),
        "signal changed"
    );
}
