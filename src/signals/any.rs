//! Closed union over the signal kinds.

use super::{Feather, GroundSignal, SignalKind, SubsidiarySignal, ThreeAspectSignal};
use crate::core::{Address, Bitmask, ClearanceSource, RngClearance, Signal};

/// Any configured signal.
///
/// Dispatches `Signal` by match, so a mixed set of signals can live in one
/// `Vec` without trait objects.
///
/// # Example
///
/// ```rust
/// use signalbox::core::Signal;
/// use signalbox::signals::{AnySignal, Feather, GroundSignal};
///
/// let mut signals: Vec<AnySignal> = vec![
///     GroundSignal::new(0, 20, 21).into(),
///     Feather::new(2, 11).into(),
/// ];
///
/// let changed = signals
///     .iter_mut()
///     .fold(false, |changed, s| s.handle_event(21, true) | changed);
/// let word = signals.iter().fold(0, |word, s| word | s.current_state());
///
/// assert!(changed);
/// assert_eq!(word, 0b010);
/// ```
#[derive(Clone, Debug)]
pub enum AnySignal<C = RngClearance> {
    ThreeAspect(ThreeAspectSignal<C>),
    Ground(GroundSignal),
    Subsidiary(SubsidiarySignal),
    Feather(Feather),
}

impl<C> AnySignal<C> {
    pub fn kind(&self) -> SignalKind {
        match self {
            Self::ThreeAspect(_) => SignalKind::ThreeAspect,
            Self::Ground(_) => SignalKind::Ground,
            Self::Subsidiary(_) => SignalKind::Subsidiary,
            Self::Feather(_) => SignalKind::Feather,
        }
    }
}

impl<C: ClearanceSource> Signal for AnySignal<C> {
    fn handle_event(&mut self, address: Address, active: bool) -> bool {
        match self {
            Self::ThreeAspect(s) => s.handle_event(address, active),
            Self::Ground(s) => s.handle_event(address, active),
            Self::Subsidiary(s) => s.handle_event(address, active),
            Self::Feather(s) => s.handle_event(address, active),
        }
    }

    fn current_state(&self) -> Bitmask {
        match self {
            Self::ThreeAspect(s) => s.current_state(),
            Self::Ground(s) => s.current_state(),
            Self::Subsidiary(s) => s.current_state(),
            Self::Feather(s) => s.current_state(),
        }
    }

    fn start_bit(&self) -> u32 {
        match self {
            Self::ThreeAspect(s) => s.start_bit(),
            Self::Ground(s) => s.start_bit(),
            Self::Subsidiary(s) => s.start_bit(),
            Self::Feather(s) => s.start_bit(),
        }
    }

    fn span(&self) -> u32 {
        self.kind().span()
    }
}

impl<C> From<ThreeAspectSignal<C>> for AnySignal<C> {
    fn from(signal: ThreeAspectSignal<C>) -> Self {
        Self::ThreeAspect(signal)
    }
}

impl<C> From<GroundSignal> for AnySignal<C> {
    fn from(signal: GroundSignal) -> Self {
        Self::Ground(signal)
    }
}

impl<C> From<SubsidiarySignal> for AnySignal<C> {
    fn from(signal: SubsidiarySignal) -> Self {
        Self::Subsidiary(signal)
    }
}

impl<C> From<Feather> for AnySignal<C> {
    fn from(signal: Feather) -> Self {
        Self::Feather(signal)
    }
}
