//! The `BehaviourGroup` dispatcher.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use bg_behaviour::{Behaviour, BehaviourId, Capabilities, DeltaTime, SharedBehaviour};
use tracing::{debug, trace, warn};

use crate::members::Members;
use crate::{GroupConfig, GroupError, GroupResult, LifecycleIteration};

// ── BehaviourGroup ────────────────────────────────────────────────────────────

/// Lifecycle dispatcher for a set of behaviour units sharing one blackboard.
///
/// The group keeps two views over its members:
///
/// - the **membership list**: every unit, in insertion order, each at most
///   once by pointer identity;
/// - the **update subset**: exactly the updatable members, in the same
///   relative order, maintained incrementally on add and remove.
///
/// Its only state machine is `not-started ⇄ started`, driven externally by
/// [`start`][Self::start] and [`stop`][Self::stop], both idempotent.
///
/// # Re-entrancy
///
/// All methods take `&self`.  Internal borrows are always released before a
/// unit callback runs, so a callback may add or remove members of the group
/// that is dispatching it, itself included.
///
/// - [`update`][Self::update] iterates a snapshot of the update subset taken
///   at the start of the tick.  Membership changes made during the tick take
///   effect from the next tick.
/// - [`start`][Self::start] and [`stop`][Self::stop] walk the membership list
///   as configured by [`LifecycleIteration`].  The default `Live` mode walks
///   the live list by index, so changes made by a callback can affect the
///   rest of that same pass.
///
/// # Panics
///
/// A panicking unit callback is not contained: the panic unwinds through the
/// calling method and any later units of that pass are not visited.  No
/// internal borrow is held across a callback, so the group stays usable if
/// the caller catches the unwind.
pub struct BehaviourGroup<'a, B: ?Sized> {
    blackboard: &'a B,
    config:     GroupConfig,
    started:    Cell<bool>,
    members:    RefCell<Members<'a, B>>,
    updates:    RefCell<Vec<SharedBehaviour<'a, B>>>,
    /// Reused across ticks.  Moved out of the cell for the duration of a pass.
    snapshot:   RefCell<Vec<SharedBehaviour<'a, B>>>,
}

impl<'a, B: ?Sized> BehaviourGroup<'a, B> {
    /// Create an empty, not-started group over `blackboard`.
    pub fn new(blackboard: &'a B) -> Self {
        Self::with_config(blackboard, GroupConfig::default())
    }

    /// Create an empty, not-started group with explicit settings.
    ///
    /// The config is used as given; [`BehaviourGroupBuilder`][crate::BehaviourGroupBuilder]
    /// validates it first.
    pub fn with_config(blackboard: &'a B, config: GroupConfig) -> Self {
        let snapshot = Vec::with_capacity(config.snapshot_capacity);
        Self {
            blackboard,
            config,
            started:  Cell::new(false),
            members:  RefCell::new(Members::new()),
            updates:  RefCell::new(Vec::new()),
            snapshot: RefCell::new(snapshot),
        }
    }

    // ── Lifecycle ─────────────────────────────────────────────────────────

    /// Transition to started and call `on_start` on every startable member.
    ///
    /// No-op if already started.
    pub fn start(&self) {
        if self.started.get() {
            return;
        }
        self.started.set(true);
        debug!(group = %self.config.name, members = self.len(), "behaviour group started");

        self.for_each_member(|unit| {
            if let Some(s) = unit.as_start() {
                s.on_start(self.blackboard);
            }
        });
    }

    /// Call `on_stop` on every stoppable member, then transition to
    /// not-started.
    ///
    /// No-op if not started.  The group still reports started while the
    /// stop pass runs, so members removed during it get `on_stop` at once.
    pub fn stop(&self) {
        if !self.started.get() {
            return;
        }

        self.for_each_member(|unit| {
            if let Some(s) = unit.as_stop() {
                s.on_stop(self.blackboard);
            }
        });

        self.started.set(false);
        debug!(group = %self.config.name, members = self.len(), "behaviour group stopped");
    }

    /// Run one update tick over the updatable members.
    ///
    /// On a group that is not started this logs a warning and does nothing.
    pub fn update(&self, delta: DeltaTime) {
        if let Err(err) = self.try_update(delta) {
            warn!(group = %self.config.name, "update skipped: {err}");
        }
    }

    /// Like [`update`][Self::update], but reports a stopped group as
    /// [`GroupError::NotStarted`] instead of logging it.
    ///
    /// Returns the number of `on_update` calls made this tick.
    pub fn try_update(&self, delta: DeltaTime) -> GroupResult<usize> {
        if !self.started.get() {
            return Err(GroupError::NotStarted { group: self.config.name.clone() });
        }
        if self.updates.borrow().is_empty() {
            return Ok(0);
        }

        // Take the buffer out so a nested update() from a callback gets its
        // own buffer instead of clearing this one mid-pass.
        let mut snapshot = std::mem::take(&mut *self.snapshot.borrow_mut());
        snapshot.clear();
        snapshot.extend(self.updates.borrow().iter().cloned());

        let mut dispatched = 0;
        for unit in &snapshot {
            if let Some(u) = unit.as_update() {
                u.on_update(self.blackboard, delta);
                dispatched += 1;
            }
        }
        trace!(group = %self.config.name, dispatched, %delta, "update pass");

        // Drop the handles now; units removed this tick must not be kept
        // alive until the next one.
        snapshot.clear();
        *self.snapshot.borrow_mut() = snapshot;
        Ok(dispatched)
    }

    // ── Membership ────────────────────────────────────────────────────────

    /// Register `unit`.  Returns `false` if it is already a member.
    ///
    /// On a started group a startable unit gets `on_start` before this
    /// returns.
    pub fn add_behaviour(&self, unit: SharedBehaviour<'a, B>) -> bool {
        self.try_add_behaviour(unit).is_ok()
    }

    /// Unregister `unit`.  Returns `false` if it is not a member.
    ///
    /// On a started group a stoppable unit gets `on_stop` before this
    /// returns.
    pub fn remove_behaviour<U: ?Sized>(&self, unit: &Rc<U>) -> bool {
        self.try_remove_behaviour(unit).is_ok()
    }

    /// [`add_behaviour`][Self::add_behaviour] for callers holding an optional
    /// handle.  `None` returns `false`.
    pub fn add_opt(&self, unit: Option<SharedBehaviour<'a, B>>) -> bool {
        unit.ok_or(GroupError::MissingBehaviour)
            .and_then(|u| self.try_add_behaviour(u))
            .is_ok()
    }

    /// [`remove_behaviour`][Self::remove_behaviour] for callers holding an
    /// optional handle.  `None` returns `false`.
    pub fn remove_opt<U: ?Sized>(&self, unit: Option<&Rc<U>>) -> bool {
        unit.ok_or(GroupError::MissingBehaviour)
            .and_then(|u| self.try_remove_behaviour(u))
            .is_ok()
    }

    pub fn try_add_behaviour(&self, unit: SharedBehaviour<'a, B>) -> GroupResult<()> {
        let caps = Capabilities::of::<B, _>(&*unit);
        if !self.members.borrow_mut().push(Rc::clone(&unit)) {
            return Err(GroupError::AlreadyMember { label: unit.label().to_owned() });
        }
        // Joined the update subset before on_start runs, so a callback that
        // removes the unit again leaves both views consistent.
        if caps.update {
            self.updates.borrow_mut().push(Rc::clone(&unit));
        }
        trace!(
            group = %self.config.name,
            behaviour = unit.label(),
            capabilities = %caps,
            "behaviour added"
        );

        if self.started.get() {
            if let Some(s) = unit.as_start() {
                s.on_start(self.blackboard);
            }
        }
        Ok(())
    }

    pub fn try_remove_behaviour<U: ?Sized>(&self, unit: &Rc<U>) -> GroupResult<()> {
        let id = BehaviourId::of(unit);
        let removed = self.members.borrow_mut().remove(id);
        let Some(removed) = removed else {
            return Err(GroupError::NotMember(id));
        };
        if removed.as_update().is_some() {
            self.updates.borrow_mut().retain(|u| BehaviourId::of(u) != id);
        }
        trace!(group = %self.config.name, behaviour = removed.label(), "behaviour removed");

        if self.started.get() {
            if let Some(s) = removed.as_stop() {
                s.on_stop(self.blackboard);
            }
        }
        Ok(())
    }

    // ── Introspection ─────────────────────────────────────────────────────

    #[inline]
    pub fn is_started(&self) -> bool {
        self.started.get()
    }

    /// Copy of the membership list, in insertion order.
    pub fn behaviours(&self) -> Vec<SharedBehaviour<'a, B>> {
        self.members.borrow().as_slice().to_vec()
    }

    /// Copy of the update subset, in insertion order.
    pub fn update_behaviours(&self) -> Vec<SharedBehaviour<'a, B>> {
        self.updates.borrow().clone()
    }

    pub fn contains<U: ?Sized>(&self, unit: &Rc<U>) -> bool {
        self.members.borrow().contains(BehaviourId::of(unit))
    }

    pub fn len(&self) -> usize {
        self.members.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of members in the update subset.
    pub fn update_len(&self) -> usize {
        self.updates.borrow().len()
    }

    #[inline]
    pub fn blackboard(&self) -> &'a B {
        self.blackboard
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.config.name
    }

    #[inline]
    pub fn config(&self) -> &GroupConfig {
        &self.config
    }

    // ── Internals ─────────────────────────────────────────────────────────

    /// Visit members for a start or stop pass, per the configured iteration
    /// mode.  No borrow of the membership list is held while `visit` runs.
    fn for_each_member(&self, mut visit: impl FnMut(&dyn Behaviour<B>)) {
        match self.config.lifecycle_iteration {
            LifecycleIteration::Live => {
                let count = self.members.borrow().len();
                for index in 0..count {
                    let next = self.members.borrow().get(index);
                    let Some(unit) = next else { break };
                    visit(&*unit);
                }
            }
            LifecycleIteration::Snapshot => {
                let units = self.behaviours();
                for unit in &units {
                    visit(&**unit);
                }
            }
        }
    }
}
