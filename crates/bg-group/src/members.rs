//! Ordered membership list with an identity index.

use bg_behaviour::{BehaviourId, SharedBehaviour};

#[cfg(feature = "fx-hash")]
type IdSet = rustc_hash::FxHashSet<BehaviourId>;
#[cfg(not(feature = "fx-hash"))]
type IdSet = std::collections::HashSet<BehaviourId>;

/// Insertion-ordered units, at most once each by pointer identity.
pub(crate) struct Members<'a, B: ?Sized> {
    list: Vec<SharedBehaviour<'a, B>>,
    ids:  IdSet,
}

impl<'a, B: ?Sized> Members<'a, B> {
    pub(crate) fn new() -> Self {
        Self { list: Vec::new(), ids: IdSet::default() }
    }

    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.list.len()
    }

    #[inline]
    pub(crate) fn contains(&self, id: BehaviourId) -> bool {
        self.ids.contains(&id)
    }

    /// Append `unit`.  Returns `false` if it is already a member.
    pub(crate) fn push(&mut self, unit: SharedBehaviour<'a, B>) -> bool {
        if !self.ids.insert(BehaviourId::of(&unit)) {
            return false;
        }
        self.list.push(unit);
        true
    }

    /// Remove the member with identity `id`, keeping the order of the rest.
    pub(crate) fn remove(&mut self, id: BehaviourId) -> Option<SharedBehaviour<'a, B>> {
        if !self.ids.remove(&id) {
            return None;
        }
        let pos = self.list.iter().position(|u| BehaviourId::of(u) == id)?;
        Some(self.list.remove(pos))
    }

    /// Clone of the handle at `index`, so no borrow outlives the call.
    #[inline]
    pub(crate) fn get(&self, index: usize) -> Option<SharedBehaviour<'a, B>> {
        self.list.get(index).cloned()
    }

    #[inline]
    pub(crate) fn as_slice(&self) -> &[SharedBehaviour<'a, B>] {
        &self.list
    }
}
