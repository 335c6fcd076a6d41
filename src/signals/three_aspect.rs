//! Running signal with danger, caution and proceed aspects.

use super::{log_change, SignalKind};
use crate::core::{
    Address, Aspect, Bitmask, ClearanceSource, Guard, RngClearance, Signal, ThreeAspect,
};
use serde::{Deserialize, Serialize};

/// Random-proceed only clears a signal that is currently at danger.
const RANDOM_PROCEED_GUARD: Guard<ThreeAspect> = Guard::from_danger();

/// Bus addresses a three-aspect signal responds to.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct ThreeAspectAddresses {
    pub danger: Address,
    pub proceed: Address,
    pub caution: Address,
    pub random_proceed: Address,
}

/// Running signal occupying three bits: danger, caution, proceed.
///
/// Aspects are selected by positive commands only. A command with
/// `active == false` is ignored, so switching proceed "off" never drops the
/// signal to danger; danger has its own address.
///
/// The random-proceed address clears the signal to caution or proceed, as
/// chosen by the injected [`ClearanceSource`], and only fires from danger.
///
/// # Example
///
/// ```rust
/// use signalbox::core::{Clearance, FixedClearance, Signal};
/// use signalbox::signals::{ThreeAspectAddresses, ThreeAspectSignal};
///
/// let addresses = ThreeAspectAddresses { danger: 1, proceed: 2, caution: 3, random_proceed: 4 };
/// let mut signal =
///     ThreeAspectSignal::with_clearance(0, addresses, FixedClearance(Clearance::Caution));
///
/// assert_eq!(signal.current_state(), 0b001);
/// assert!(signal.handle_event(2, true));
/// assert_eq!(signal.current_state(), 0b100);
/// assert!(!signal.handle_event(4, true));
///
/// assert!(signal.handle_event(1, true));
/// assert!(signal.handle_event(4, true));
/// assert_eq!(signal.current_state(), 0b010);
/// ```
#[derive(Clone, Debug)]
pub struct ThreeAspectSignal<C = RngClearance> {
    start_bit: u32,
    addresses: ThreeAspectAddresses,
    aspect: ThreeAspect,
    clearance: C,
}

impl ThreeAspectSignal {
    /// Signal whose random-proceed draws from an entropy-seeded generator.
    pub fn new(start_bit: u32, addresses: ThreeAspectAddresses) -> Self {
        Self::with_clearance(start_bit, addresses, RngClearance::from_entropy())
    }
}

impl<C: ClearanceSource> ThreeAspectSignal<C> {
    pub fn with_clearance(start_bit: u32, addresses: ThreeAspectAddresses, clearance: C) -> Self {
        Self {
            start_bit,
            addresses,
            aspect: ThreeAspect::Danger,
            clearance,
        }
    }

    pub fn aspect(&self) -> ThreeAspect {
        self.aspect
    }

    pub fn addresses(&self) -> &ThreeAspectAddresses {
        &self.addresses
    }

    fn target_for(&mut self, address: Address) -> Option<ThreeAspect> {
        let current = self.aspect;
        let a = &self.addresses;

        if address == a.danger && current != ThreeAspect::Danger {
            Some(ThreeAspect::Danger)
        } else if address == a.proceed && current != ThreeAspect::Proceed {
            Some(ThreeAspect::Proceed)
        } else if address == a.caution && current != ThreeAspect::Caution {
            Some(ThreeAspect::Caution)
        } else if address == a.random_proceed && RANDOM_PROCEED_GUARD.check(&current) {
            Some(self.clearance.choose().into())
        } else {
            None
        }
    }
}

impl<C: ClearanceSource> Signal for ThreeAspectSignal<C> {
    fn handle_event(&mut self, address: Address, active: bool) -> bool {
        if !active {
            tracing::trace!(start_bit = self.start_bit, address, "ignoring inactive command");
            return false;
        }

        let Some(target) = self.target_for(address) else {
            return false;
        };

        log_change(
            SignalKind::ThreeAspect,
            self.start_bit,
            address,
            self.aspect,
            target,
        );
        self.aspect = target;
        true
    }

    fn current_state(&self) -> Bitmask {
        self.aspect.mask(self.start_bit)
    }

    fn start_bit(&self) -> u32 {
        self.start_bit
    }

    fn span(&self) -> u32 {
        ThreeAspect::SPAN
    }
}
