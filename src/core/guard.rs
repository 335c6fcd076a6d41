//! Guard predicates for controlling aspect transitions.
//!
//! Guards are pure boolean functions over the current aspect that decide
//! whether a transition may fire at all, independent of which address
//! requested it.

use super::aspect::Aspect;
use std::fmt;

/// Pure predicate that determines if a transition can fire from an aspect.
///
/// Guards hold a plain function pointer so they can live in `const` items
/// and be copied freely; the predicate cannot capture state.
///
/// # Example
///
/// ```rust
/// use signalbox::core::{Aspect, Guard, ThreeAspect};
///
/// const FROM_DANGER: Guard<ThreeAspect> = Guard::new(|a| a.is_danger());
///
/// assert!(FROM_DANGER.check(&ThreeAspect::Danger));
/// assert!(!FROM_DANGER.check(&ThreeAspect::Caution));
/// ```
pub struct Guard<A: Aspect> {
    predicate: fn(&A) -> bool,
}

impl<A: Aspect> Guard<A> {
    /// Create a guard from a pure predicate function.
    pub const fn new(predicate: fn(&A) -> bool) -> Self {
        Guard { predicate }
    }

    /// Guard that only admits the danger aspect.
    pub const fn from_danger() -> Self {
        Guard::new(is_danger::<A>)
    }

    /// Check if the guard allows a transition from this aspect.
    pub fn check(&self, aspect: &A) -> bool {
        (self.predicate)(aspect)
    }
}

fn is_danger<A: Aspect>(aspect: &A) -> bool {
    aspect.is_danger()
}

impl<A: Aspect> Clone for Guard<A> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<A: Aspect> Copy for Guard<A> {}

impl<A: Aspect> fmt::Debug for Guard<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Guard").finish_non_exhaustive()
    }
}
