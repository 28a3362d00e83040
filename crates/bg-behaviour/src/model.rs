//! The `Behaviour` trait and its three optional capabilities.

use std::rc::Rc;

use crate::DeltaTime;

/// Reacts to the owning group starting, or to joining a group that is
/// already started.
pub trait StartBehaviour<B: ?Sized> {
    fn on_start(&self, blackboard: &B);
}

/// Reacts to the owning group stopping, or to leaving a group that is still
/// started.
pub trait StopBehaviour<B: ?Sized> {
    fn on_stop(&self, blackboard: &B);
}

/// Reacts to every update tick of a started group.
pub trait UpdateBehaviour<B: ?Sized> {
    fn on_update(&self, blackboard: &B, delta: DeltaTime);
}

/// A pluggable behaviour unit operating on a blackboard of type `B`.
///
/// A unit advertises which lifecycle hooks it wants through the three
/// capability queries.  All of them default to `None`, so an empty
/// `impl Behaviour<B> for T {}` is a legal marker unit that only ever takes
/// part in membership bookkeeping.
///
/// The answers must not change over the unit's lifetime: a group records
/// whether a unit is updatable when it joins.
///
/// # Example
///
/// ```rust
/// use std::cell::Cell;
/// use bg_behaviour::{Behaviour, DeltaTime, UpdateBehaviour};
///
/// struct Odometer { travelled: Cell<f32> }
///
/// impl Behaviour<()> for Odometer {
///     fn as_update(&self) -> Option<&dyn UpdateBehaviour<()>> {
///         Some(self)
///     }
/// }
///
/// impl UpdateBehaviour<()> for Odometer {
///     fn on_update(&self, _: &(), delta: DeltaTime) {
///         self.travelled.set(self.travelled.get() + delta.as_secs_f32());
///     }
/// }
/// ```
pub trait Behaviour<B: ?Sized> {
    /// Human-readable name used in log output.
    ///
    /// Default: the Rust type name.
    fn label(&self) -> &str {
        std::any::type_name::<Self>()
    }

    fn as_start(&self) -> Option<&dyn StartBehaviour<B>> {
        None
    }

    fn as_stop(&self) -> Option<&dyn StopBehaviour<B>> {
        None
    }

    fn as_update(&self) -> Option<&dyn UpdateBehaviour<B>> {
        None
    }
}

/// The handle form in which groups store units.
///
/// Identity is the allocation: two `Rc`s cloned from the same unit are the
/// same member, two separately allocated units with equal data are not.
pub type SharedBehaviour<'a, B> = Rc<dyn Behaviour<B> + 'a>;
