//! Declarative signal layout and construction.
//!
//! A layout lists every signal with its start bit and addresses. Loading a
//! layout validates it as a whole (see [`validate_layout`]) before any
//! signal is constructed, so a built set of signals always has disjoint,
//! in-range bit spans.
//!
//! # Example
//!
//! ```rust
//! use signalbox::config::LayoutConfig;
//! use signalbox::core::Signal;
//!
//! let layout = LayoutConfig::from_json(r#"{
//!     "seed": 7,
//!     "signals": [
//!         { "kind": "three_aspect", "start_bit": 0,
//!           "danger": 1, "proceed": 2, "caution": 3, "random_proceed": 4 },
//!         { "kind": "feather", "start_bit": 3, "diverge": 11 }
//!     ]
//! }"#).unwrap();
//!
//! let mut signals = layout.build().unwrap();
//! assert!(signals[0].handle_event(2, true));
//! assert_eq!(signals[0].current_state(), 0b100);
//! ```

pub mod error;
pub mod layout;

pub use error::{ConfigError, LayoutViolation};
pub use layout::{validate_layout, LayoutValidation};

use crate::core::{Address, BitSpan, ClearanceSource, RngClearance};
use crate::signals::{
    AnySignal, Feather, GroundSignal, SignalKind, SubsidiarySignal, ThreeAspectAddresses,
    ThreeAspectSignal,
};
use serde::{Deserialize, Serialize};
use stillwater::validation::Validation;

/// Configuration of one signal.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SignalConfig {
    ThreeAspect {
        start_bit: u32,
        danger: Address,
        proceed: Address,
        caution: Address,
        random_proceed: Address,
    },
    Ground {
        start_bit: u32,
        danger: Address,
        proceed: Address,
    },
    Subsidiary {
        start_bit: u32,
        proceed: Address,
    },
    Feather {
        start_bit: u32,
        diverge: Address,
    },
}

impl SignalConfig {
    pub fn kind(&self) -> SignalKind {
        match self {
            Self::ThreeAspect { .. } => SignalKind::ThreeAspect,
            Self::Ground { .. } => SignalKind::Ground,
            Self::Subsidiary { .. } => SignalKind::Subsidiary,
            Self::Feather { .. } => SignalKind::Feather,
        }
    }

    pub fn start_bit(&self) -> u32 {
        match *self {
            Self::ThreeAspect { start_bit, .. }
            | Self::Ground { start_bit, .. }
            | Self::Subsidiary { start_bit, .. }
            | Self::Feather { start_bit, .. } => start_bit,
        }
    }

    pub fn bit_span(&self) -> BitSpan {
        BitSpan::new(self.start_bit(), self.kind().span())
    }

    /// Every address this signal responds to, in declaration order.
    pub fn addresses(&self) -> Vec<Address> {
        match *self {
            Self::ThreeAspect {
                danger,
                proceed,
                caution,
                random_proceed,
                ..
            } => vec![danger, proceed, caution, random_proceed],
            Self::Ground {
                danger, proceed, ..
            } => vec![danger, proceed],
            Self::Subsidiary { proceed, .. } => vec![proceed],
            Self::Feather { diverge, .. } => vec![diverge],
        }
    }

    /// Construct the signal. Three-aspect signals take `clearance` as their
    /// random-proceed source; other kinds ignore it.
    pub fn build<C: ClearanceSource>(&self, clearance: C) -> AnySignal<C> {
        match *self {
            Self::ThreeAspect {
                start_bit,
                danger,
                proceed,
                caution,
                random_proceed,
            } => {
                let addresses = ThreeAspectAddresses {
                    danger,
                    proceed,
                    caution,
                    random_proceed,
                };
                AnySignal::ThreeAspect(ThreeAspectSignal::with_clearance(
                    start_bit, addresses, clearance,
                ))
            }
            Self::Ground {
                start_bit,
                danger,
                proceed,
            } => GroundSignal::new(start_bit, danger, proceed).into(),
            Self::Subsidiary { start_bit, proceed } => {
                SubsidiarySignal::new(start_bit, proceed).into()
            }
            Self::Feather { start_bit, diverge } => Feather::new(start_bit, diverge).into(),
        }
    }
}

/// A complete signal layout.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayoutConfig {
    /// Seed for random-proceed generators. Signal `i` uses `seed + i`;
    /// without a seed every generator draws from OS entropy.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,

    pub signals: Vec<SignalConfig>,
}

impl LayoutConfig {
    pub fn new(signals: Vec<SignalConfig>) -> Self {
        Self {
            seed: None,
            signals,
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Parse a layout from JSON. Parsing does not validate the layout.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Validate the layout, collecting every violation.
    pub fn validate(&self) -> Result<(), ConfigError> {
        match validate_layout(&self.signals) {
            Validation::Success(_) => Ok(()),
            Validation::Failure(errors) => {
                let violations: Vec<LayoutViolation> = errors.iter().cloned().collect();
                for violation in &violations {
                    tracing::warn!(%violation, "invalid signal layout");
                }
                Err(ConfigError::InvalidLayout { violations })
            }
        }
    }

    /// Validate and construct every signal, in declaration order.
    pub fn build(&self) -> Result<Vec<AnySignal>, ConfigError> {
        let seed = self.seed;
        self.build_with(|index| match seed {
            Some(seed) => RngClearance::seeded(seed.wrapping_add(index as u64)),
            None => RngClearance::from_entropy(),
        })
    }

    /// Validate and construct every signal, asking `clearance` for the
    /// random-proceed source of each signal by index.
    pub fn build_with<C, F>(&self, mut clearance: F) -> Result<Vec<AnySignal<C>>, ConfigError>
    where
        C: ClearanceSource,
        F: FnMut(usize) -> C,
    {
        self.validate()?;

        let signals: Vec<AnySignal<C>> = self
            .signals
            .iter()
            .enumerate()
            .map(|(index, config)| config.build(clearance(index)))
            .collect();

        tracing::info!(signals = signals.len(), "signal layout built");
        Ok(signals)
    }
}
