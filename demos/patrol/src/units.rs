//! Behaviour units used by the demo.

use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

use bg_behaviour::{
    Behaviour, BehaviourError, BehaviourResult, DeltaTime, StartBehaviour, StopBehaviour,
    UpdateBehaviour,
};
use bg_group::BehaviourGroup;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use tracing::info;

use crate::world::WorldState;

pub type Group<'a> = BehaviourGroup<'a, WorldState>;

// ── Clock ─────────────────────────────────────────────────────────────────────

/// Advances `WorldState::clock`.  Registered first so every other unit sees
/// the current tick's time.
pub struct Clock;

impl Behaviour<WorldState> for Clock {
    fn label(&self) -> &str {
        "clock"
    }

    fn as_start(&self) -> Option<&dyn StartBehaviour<WorldState>> {
        Some(self)
    }

    fn as_update(&self) -> Option<&dyn UpdateBehaviour<WorldState>> {
        Some(self)
    }
}

impl StartBehaviour<WorldState> for Clock {
    fn on_start(&self, world: &WorldState) {
        world.clock.set(0.0);
    }
}

impl UpdateBehaviour<WorldState> for Clock {
    fn on_update(&self, world: &WorldState, delta: DeltaTime) {
        world.clock.set(world.clock.get() + delta.as_secs_f32());
    }
}

// ── Alarm ─────────────────────────────────────────────────────────────────────

/// Armed while the group runs.  Start/stop only.
pub struct Alarm;

impl Behaviour<WorldState> for Alarm {
    fn label(&self) -> &str {
        "alarm"
    }

    fn as_start(&self) -> Option<&dyn StartBehaviour<WorldState>> {
        Some(self)
    }

    fn as_stop(&self) -> Option<&dyn StopBehaviour<WorldState>> {
        Some(self)
    }
}

impl StartBehaviour<WorldState> for Alarm {
    fn on_start(&self, world: &WorldState) {
        world.alarm_armed.set(true);
        world.note("alarm armed");
    }
}

impl StopBehaviour<WorldState> for Alarm {
    fn on_stop(&self, world: &WorldState) {
        world.alarm_armed.set(false);
        world.note("alarm disarmed");
    }
}

// ── Patrol ────────────────────────────────────────────────────────────────────

/// Random-walks the guard at a fixed speed.
pub struct Patrol {
    speed: f32,
    rng:   RefCell<SmallRng>,
}

impl Patrol {
    /// `speed` is in units per second.
    pub fn new(speed: f32, seed: u64) -> BehaviourResult<Self> {
        if !speed.is_finite() || speed < 0.0 {
            return Err(BehaviourError::Config(format!("patrol speed must be finite and >= 0, got {speed}")));
        }
        Ok(Self { speed, rng: RefCell::new(SmallRng::seed_from_u64(seed)) })
    }
}

impl Behaviour<WorldState> for Patrol {
    fn label(&self) -> &str {
        "patrol"
    }

    fn as_update(&self) -> Option<&dyn UpdateBehaviour<WorldState>> {
        Some(self)
    }
}

impl UpdateBehaviour<WorldState> for Patrol {
    fn on_update(&self, world: &WorldState, delta: DeltaTime) {
        let heading: f32 = self.rng.borrow_mut().gen_range(0.0..std::f32::consts::TAU);
        let step = self.speed * delta.as_secs_f32();
        let (x, y) = world.guard_position.get();
        world.guard_position.set((x + step * heading.cos(), y + step * heading.sin()));
        world.guard_distance.set(world.guard_distance.get() + step);
    }
}

// ── Visitor ───────────────────────────────────────────────────────────────────

/// Stays for a while, then removes itself from the group.
pub struct Visitor<'a> {
    id:       u32,
    stay:     f32,
    elapsed:  Cell<f32>,
    group:    Weak<Group<'a>>,
    this:     Weak<Visitor<'a>>,
}

impl<'a> Visitor<'a> {
    pub fn new(id: u32, stay: f32, group: Weak<Group<'a>>) -> Rc<Self> {
        Rc::new_cyclic(|this| Visitor {
            id,
            stay,
            elapsed: Cell::new(0.0),
            group,
            this: this.clone(),
        })
    }
}

impl Behaviour<WorldState> for Visitor<'_> {
    fn label(&self) -> &str {
        "visitor"
    }

    fn as_start(&self) -> Option<&dyn StartBehaviour<WorldState>> {
        Some(self)
    }

    fn as_stop(&self) -> Option<&dyn StopBehaviour<WorldState>> {
        Some(self)
    }

    fn as_update(&self) -> Option<&dyn UpdateBehaviour<WorldState>> {
        Some(self)
    }
}

impl StartBehaviour<WorldState> for Visitor<'_> {
    fn on_start(&self, world: &WorldState) {
        world.visitors.set(world.visitors.get() + 1);
        world.visitors_seen.set(world.visitors_seen.get() + 1);
        world.note(format!("visitor {} arrived", self.id));
    }
}

impl StopBehaviour<WorldState> for Visitor<'_> {
    fn on_stop(&self, world: &WorldState) {
        world.visitors.set(world.visitors.get().saturating_sub(1));
        world.note(format!("visitor {} left", self.id));
    }
}

impl UpdateBehaviour<WorldState> for Visitor<'_> {
    fn on_update(&self, _world: &WorldState, delta: DeltaTime) {
        let elapsed = self.elapsed.get() + delta.as_secs_f32();
        self.elapsed.set(elapsed);
        if elapsed < self.stay {
            return;
        }
        if let (Some(group), Some(this)) = (self.group.upgrade(), self.this.upgrade()) {
            group.remove_behaviour(&this);
        }
    }
}

// ── Gate ──────────────────────────────────────────────────────────────────────

/// Lets a new visitor in every `interval` seconds while the alarm is armed.
pub struct Gate<'a> {
    interval: f32,
    stay:     f32,
    since:    Cell<f32>,
    admitted: Cell<u32>,
    group:    Weak<Group<'a>>,
}

impl<'a> Gate<'a> {
    pub fn new(interval: f32, stay: f32, group: Weak<Group<'a>>) -> BehaviourResult<Self> {
        if interval.is_nan() || interval <= 0.0 {
            return Err(BehaviourError::Config(format!("gate interval must be > 0, got {interval}")));
        }
        Ok(Self { interval, stay, since: Cell::new(0.0), admitted: Cell::new(0), group })
    }
}

impl<'a> Behaviour<WorldState> for Gate<'a> {
    fn label(&self) -> &str {
        "gate"
    }

    fn as_update(&self) -> Option<&dyn UpdateBehaviour<WorldState>> {
        Some(self)
    }
}

impl<'a> UpdateBehaviour<WorldState> for Gate<'a> {
    fn on_update(&self, world: &WorldState, delta: DeltaTime) {
        let since = self.since.get() + delta.as_secs_f32();
        if since < self.interval || !world.alarm_armed.get() {
            self.since.set(since);
            return;
        }
        self.since.set(0.0);

        let Some(group) = self.group.upgrade() else { return };
        let id = self.admitted.get();
        self.admitted.set(id + 1);
        // Joins a started group, so on_start runs now; its first update is
        // next tick.
        let visitor: Rc<Visitor<'a>> = Visitor::new(id, self.stay, Rc::downgrade(&group));
        if group.add_behaviour(visitor) {
            info!(visitor = id, members = group.len(), "gate admitted visitor");
        }
    }
}
