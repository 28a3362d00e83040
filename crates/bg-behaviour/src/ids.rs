//! Pointer identity for shared behaviour units.

use std::fmt;
use std::rc::Rc;

/// Identity of a unit allocation.
///
/// Derived from the data address of the `Rc`, so it is stable for as long as
/// any handle to the unit is alive and distinct between live allocations.
/// It carries no meaning once every handle has been dropped.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
pub struct BehaviourId(pub usize);

impl BehaviourId {
    /// Identity of the allocation behind `unit`, whether it is held as a
    /// concrete `Rc<T>` or as a [`SharedBehaviour`][crate::SharedBehaviour].
    #[inline]
    pub fn of<U: ?Sized>(unit: &Rc<U>) -> Self {
        BehaviourId(Rc::as_ptr(unit).cast::<()>() as usize)
    }
}

impl fmt::Display for BehaviourId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BehaviourId({:#x})", self.0)
    }
}
