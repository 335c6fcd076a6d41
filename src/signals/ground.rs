//! Two-aspect ground (shunting disc) signal.

use super::{log_change, SignalKind};
use crate::core::{Address, Aspect, Bitmask, GroundAspect, Signal};

/// Ground signal occupying two bits: danger then proceed.
///
/// Follows the same positive-only rule as the running signal but has no
/// random intermediate aspect.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GroundSignal {
    start_bit: u32,
    danger: Address,
    proceed: Address,
    aspect: GroundAspect,
}

impl GroundSignal {
    pub fn new(start_bit: u32, danger: Address, proceed: Address) -> Self {
        Self {
            start_bit,
            danger,
            proceed,
            aspect: GroundAspect::Danger,
        }
    }

    pub fn aspect(&self) -> GroundAspect {
        self.aspect
    }

    pub fn danger_address(&self) -> Address {
        self.danger
    }

    pub fn proceed_address(&self) -> Address {
        self.proceed
    }
}

impl Signal for GroundSignal {
    fn handle_event(&mut self, address: Address, active: bool) -> bool {
        if !active {
            tracing::trace!(start_bit = self.start_bit, address, "ignoring inactive command");
            return false;
        }

        let target = if address == self.danger && self.aspect != GroundAspect::Danger {
            GroundAspect::Danger
        } else if address == self.proceed && self.aspect != GroundAspect::Proceed {
            GroundAspect::Proceed
        } else {
            return false;
        };

        log_change(SignalKind::Ground, self.start_bit, address, self.aspect, target);
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
        GroundAspect::SPAN
    }
}
