//! Signalbox: aspect decision logic for bus-controlled railway signals.
//!
//! An accessory bus delivers events as an `(address, active)` pair. Each
//! signal decides whether an event is one of its own commands and whether
//! it changes what the signal displays. The displayed state is rendered as
//! bits in a shared status word; every signal owns a disjoint span of that
//! word, so the caller can OR all signals together and drive the result to
//! the lamps.
//!
//! # Core Concepts
//!
//! - **Aspect**: the displayed state of a signal kind via the `Aspect` trait
//! - **Signal**: the `handle_event` / `current_state` contract
//! - **Guard**: pure predicates that gate transitions
//! - **Clearance**: the injected choice behind a random-proceed
//! - **Config**: validated, serializable layouts of many signals
//!
//! # Example
//!
//! ```rust
//! use signalbox::core::{Clearance, FixedClearance, Signal};
//! use signalbox::signals::{SubsidiarySignal, ThreeAspectAddresses, ThreeAspectSignal};
//!
//! let addresses = ThreeAspectAddresses { danger: 1, proceed: 2, caution: 3, random_proceed: 4 };
//! let mut home = ThreeAspectSignal::with_clearance(0, addresses, FixedClearance(Clearance::Proceed));
//! let mut calling_on = SubsidiarySignal::new(3, 10);
//!
//! // Proceed off is not a danger command
//! assert!(home.handle_event(2, true));
//! assert!(!home.handle_event(2, false));
//!
//! assert!(calling_on.handle_event(10, true));
//!
//! let word = home.current_state() | calling_on.current_state();
//! assert_eq!(word, 0b1100);
//! ```

pub mod config;
pub mod core;
pub mod signals;

// Re-export commonly used types
pub use config::{ConfigError, LayoutConfig, SignalConfig};
pub use crate::core::{Address, Aspect, Bitmask, Clearance, ClearanceSource, Signal};
pub use signals::{AnySignal, Feather, GroundSignal, SubsidiarySignal, ThreeAspectSignal};
