//! Displayed aspects for each signal kind.
//!
//! An aspect is the logical state a signal shows. Every aspect knows how to
//! render itself into the shared status word given the signal's start bit,
//! so signals store the aspect and derive their bitmask on demand.

use super::Bitmask;
use serde::{Deserialize, Serialize};
use std::fmt::Debug;

/// Trait for the displayed states of a signal kind.
///
/// All methods are pure. Implementors are small `Copy` enums; the bit
/// pattern an aspect produces must lie within `[start_bit, start_bit + SPAN)`.
///
/// # Example
///
/// ```rust
/// use signalbox::core::{Aspect, ThreeAspect};
///
/// assert_eq!(ThreeAspect::Caution.mask(4), 0b10_0000);
/// assert!(ThreeAspect::Danger.is_danger());
/// assert_eq!(ThreeAspect::SPAN, 3);
/// ```
pub trait Aspect:
    Copy + PartialEq + Debug + Serialize + for<'de> Deserialize<'de> + Send + Sync
{
    /// Number of bits of the status word this kind occupies.
    const SPAN: u32;

    /// Get the aspect's name for display/logging.
    fn name(&self) -> &'static str;

    /// Bits set by this aspect for a signal starting at `start_bit`.
    fn mask(&self, start_bit: u32) -> Bitmask;

    /// Check if this aspect is the stop/danger indication.
    ///
    /// Default implementation returns `false`.
    fn is_danger(&self) -> bool {
        false
    }
}

/// Aspects of a running signal.
///
/// A random-proceed command never appears here: it resolves to either
/// `Caution` or `Proceed` at the moment it is applied.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
pub enum ThreeAspect {
    #[default]
    Danger,
    Caution,
    Proceed,
}

impl Aspect for ThreeAspect {
    const SPAN: u32 = 3;

    fn name(&self) -> &'static str {
        match self {
            Self::Danger => "Danger",
            Self::Caution => "Caution",
            Self::Proceed => "Proceed",
        }
    }

    fn mask(&self, start_bit: u32) -> Bitmask {
        let offset = match self {
            Self::Danger => 0,
            Self::Caution => 1,
            Self::Proceed => 2,
        };
        1 << (start_bit + offset)
    }

    fn is_danger(&self) -> bool {
        matches!(self, Self::Danger)
    }
}

/// Aspects of a ground (shunting disc) signal.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
pub enum GroundAspect {
    #[default]
    Danger,
    Proceed,
}

impl Aspect for GroundAspect {
    const SPAN: u32 = 2;

    fn name(&self) -> &'static str {
        match self {
            Self::Danger => "Danger",
            Self::Proceed => "Proceed",
        }
    }

    fn mask(&self, start_bit: u32) -> Bitmask {
        match self {
            Self::Danger => 1 << start_bit,
            Self::Proceed => 1 << (start_bit + 1),
        }
    }

    fn is_danger(&self) -> bool {
        matches!(self, Self::Danger)
    }
}

/// State of a single-lamp indicator (subsidiary arm, feather).
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
pub enum Indication {
    #[default]
    Off,
    On,
}

impl Indication {
    /// Indication matching a literal on/off command.
    pub fn from_active(active: bool) -> Self {
        if active {
            Self::On
        } else {
            Self::Off
        }
    }

    pub fn is_on(&self) -> bool {
        matches!(self, Self::On)
    }
}

impl Aspect for Indication {
    const SPAN: u32 = 1;

    fn name(&self) -> &'static str {
        match self {
            Self::Off => "Off",
            Self::On => "On",
        }
    }

    fn mask(&self, start_bit: u32) -> Bitmask {
        match self {
            Self::Off => 0,
            Self::On => 1 << start_bit,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn three_aspect_masks_follow_start_bit() {
        assert_eq!(ThreeAspect::Danger.mask(0), 0b001);
        assert_eq!(ThreeAspect::Caution.mask(0), 0b010);
        assert_eq!(ThreeAspect::Proceed.mask(0), 0b100);
        assert_eq!(ThreeAspect::Proceed.mask(8), 0b100 << 8);
    }

    #[test]
    fn ground_aspect_masks_follow_start_bit() {
        assert_eq!(GroundAspect::Danger.mask(3), 1 << 3);
        assert_eq!(GroundAspect::Proceed.mask(3), 1 << 4);
    }

    #[test]
    fn indication_off_sets_no_bits() {
        assert_eq!(Indication::Off.mask(5), 0);
        assert_eq!(Indication::On.mask(5), 1 << 5);
    }

    #[test]
    fn defaults_are_the_safe_state() {
        assert_eq!(ThreeAspect::default(), ThreeAspect::Danger);
        assert_eq!(GroundAspect::default(), GroundAspect::Danger);
        assert_eq!(Indication::default(), Indication::Off);
    }

    #[test]
    fn is_danger_identifies_stop_aspects() {
        assert!(ThreeAspect::Danger.is_danger());
        assert!(!ThreeAspect::Caution.is_danger());
        assert!(!ThreeAspect::Proceed.is_danger());
        assert!(GroundAspect::Danger.is_danger());
        assert!(!GroundAspect::Proceed.is_danger());
        assert!(!Indication::Off.is_danger());
    }

    #[test]
    fn every_mask_has_exactly_one_bit_for_aspect_kinds() {
        for aspect in [ThreeAspect::Danger, ThreeAspect::Caution, ThreeAspect::Proceed] {
            assert_eq!(aspect.mask(10).count_ones(), 1);
        }
        for aspect in [GroundAspect::Danger, GroundAspect::Proceed] {
            assert_eq!(aspect.mask(10).count_ones(), 1);
        }
    }

    #[test]
    fn indication_from_active() {
        assert_eq!(Indication::from_active(true), Indication::On);
        assert_eq!(Indication::from_active(false), Indication::Off);
        assert!(Indication::On.is_on());
    }

    #[test]
    fn aspect_names_are_stable() {
        assert_eq!(ThreeAspect::Caution.name(), "Caution");
        assert_eq!(GroundAspect::Proceed.name(), "Proceed");
        assert_eq!(Indication::On.name(), "On");
    }

    #[test]
    fn aspect_serializes_correctly() {
        let json = serde_json::to_string(&ThreeAspect::Proceed).unwrap();
        assert_eq!(json, "\"Proceed\"");
        let back: ThreeAspect = serde_json::from_str(&json).unwrap();
        assert_eq!(back, ThreeAspect::Proceed);
    }
}
