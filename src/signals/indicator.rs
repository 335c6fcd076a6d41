//! Single-lamp indicators: subsidiary (calling-on) arms and route feathers.
//!
//! Both kinds show a literal on/off state, so unlike the aspect signals they
//! consume `active == false` as "turn off". A command that repeats the
//! current state is debounced.

use super::{log_change, SignalKind};
use crate::core::{Address, Aspect, Bitmask, Indication, Signal};

#[derive(Clone, Debug, PartialEq, Eq)]
struct Lamp {
    start_bit: u32,
    address: Address,
    indication: Indication,
}

impl Lamp {
    fn new(start_bit: u32, address: Address) -> Self {
        Self {
            start_bit,
            address,
            indication: Indication::Off,
        }
    }

    fn apply(&mut self, kind: SignalKind, address: Address, active: bool) -> bool {
        if address != self.address {
            return false;
        }

        let target = Indication::from_active(active);
        if target == self.indication {
            return false;
        }

        log_change(kind, self.start_bit, address, self.indication, target);
        self.indication = target;
        true
    }

    fn mask(&self) -> Bitmask {
        self.indication.mask(self.start_bit)
    }
}

/// Calling-on / subsidiary arm, one bit.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SubsidiarySignal {
    lamp: Lamp,
}

impl SubsidiarySignal {
    pub fn new(start_bit: u32, proceed: Address) -> Self {
        Self {
            lamp: Lamp::new(start_bit, proceed),
        }
    }

    pub fn indication(&self) -> Indication {
        self.lamp.indication
    }

    pub fn proceed_address(&self) -> Address {
        self.lamp.address
    }
}

impl Signal for SubsidiarySignal {
    fn handle_event(&mut self, address: Address, active: bool) -> bool {
        self.lamp.apply(SignalKind::Subsidiary, address, active)
    }

    fn current_state(&self) -> Bitmask {
        self.lamp.mask()
    }

    fn start_bit(&self) -> u32 {
        self.lamp.start_bit
    }

    fn span(&self) -> u32 {
        Indication::SPAN
    }
}

/// Route indicator (feather) lit when the route diverges, one bit.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Feather {
    lamp: Lamp,
}

impl Feather {
    pub fn new(start_bit: u32, diverge: Address) -> Self {
        Self {
            lamp: Lamp::new(start_bit, diverge),
        }
    }

    pub fn indication(&self) -> Indication {
        self.lamp.indication
    }

    pub fn diverge_address(&self) -> Address {
        self.lamp.address
    }
}

impl Signal for Feather {
    fn handle_event(&mut self, address: Address, active: bool) -> bool {
        self.lamp.apply(SignalKind::Feather, address, active)
    }

    fn current_state(&self) -> Bitmask {
        self.lamp.mask()
    }

    fn start_bit(&self) -> u32 {
        self.lamp.start_bit
    }

    fn span(&self) -> u32 {
        Indication::SPAN
    }
}
