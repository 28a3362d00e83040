//! Unit tests for bg-behaviour.

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use crate::{
    Behaviour, BehaviourId, Capabilities, DeltaTime, NoopBehaviour, SharedBehaviour,
    StartBehaviour, StopBehaviour, UpdateBehaviour,
};

// ── Helpers ───────────────────────────────────────────────────────────────────

/// Blackboard that records every callback it is passed through.
type Log = RefCell<Vec<String>>;

/// Startable and updatable, but not stoppable.
struct Blinker;

impl Behaviour<Log> for Blinker {
    fn as_start(&self) -> Option<&dyn StartBehaviour<Log>> {
        Some(self)
    }

    fn as_update(&self) -> Option<&dyn UpdateBehaviour<Log>> {
        Some(self)
    }
}

impl StartBehaviour<Log> for Blinker {
    fn on_start(&self, log: &Log) {
        log.borrow_mut().push("start".into());
    }
}

impl UpdateBehaviour<Log> for Blinker {
    fn on_update(&self, log: &Log, delta: DeltaTime) {
        log.borrow_mut().push(format!("update {delta}"));
    }
}

/// Stop-only, with a custom label.
struct Janitor;

impl Behaviour<Log> for Janitor {
    fn label(&self) -> &str {
        "janitor"
    }

    fn as_stop(&self) -> Option<&dyn StopBehaviour<Log>> {
        Some(self)
    }
}

impl StopBehaviour<Log> for Janitor {
    fn on_stop(&self, log: &Log) {
        log.borrow_mut().push("stop".into());
    }
}

// ── Capabilities ──────────────────────────────────────────────────────────────

#[cfg(test)]
mod capability_tests {
    use super::*;

    #[test]
    fn queried_from_unit() {
        let caps = Capabilities::of::<Log, _>(&Blinker);
        assert!(caps.start);
        assert!(!caps.stop);
        assert!(caps.update);
        assert!(!caps.is_none());
    }

    #[test]
    fn noop_has_none() {
        let caps = Capabilities::of::<Log, _>(&NoopBehaviour);
        assert!(caps.is_none());
        assert_eq!(caps, Capabilities::NONE);
    }

    #[test]
    fn queried_through_trait_object() {
        let unit: SharedBehaviour<'_, Log> = Rc::new(Janitor);
        let caps = Capabilities::of::<Log, _>(&*unit);
        assert_eq!(caps, Capabilities { start: false, stop: true, update: false });
    }

    #[test]
    fn display() {
        assert_eq!(Capabilities::NONE.to_string(), "none");
        assert_eq!(Capabilities::of::<Log, _>(&Blinker).to_string(), "start|update");
        let all = Capabilities { start: true, stop: true, update: true };
        assert_eq!(all.to_string(), "start|stop|update");
    }
}

// ── Dispatch through capability queries ───────────────────────────────────────

#[cfg(test)]
mod model_tests {
    use super::*;

    #[test]
    fn callbacks_reach_blackboard() {
        let log = Log::default();
        let unit: SharedBehaviour<'_, Log> = Rc::new(Blinker);

        if let Some(s) = unit.as_start() {
            s.on_start(&log);
        }
        if let Some(u) = unit.as_update() {
            u.on_update(&log, DeltaTime(Duration::from_millis(500)));
        }
        assert!(unit.as_stop().is_none());
        assert_eq!(*log.borrow(), vec!["start".to_string(), "update 0.5000s".to_string()]);
    }

    #[test]
    fn default_label_is_type_name() {
        let unit: SharedBehaviour<'_, Log> = Rc::new(Blinker);
        assert!(unit.label().ends_with("Blinker"), "got {}", unit.label());
        assert_eq!(Behaviour::<Log>::label(&Janitor), "janitor");
        assert_eq!(Behaviour::<Log>::label(&NoopBehaviour), "noop");
    }
}

// ── BehaviourId ───────────────────────────────────────────────────────────────

#[cfg(test)]
mod id_tests {
    use super::*;

    #[test]
    fn clones_share_identity() {
        let a: SharedBehaviour<'_, Log> = Rc::new(NoopBehaviour);
        let b = Rc::clone(&a);
        assert_eq!(BehaviourId::of(&a), BehaviourId::of(&b));
    }

    #[test]
    fn equal_data_distinct_allocations_differ() {
        // Zero-sized units still get distinct Rc allocations.
        let a: SharedBehaviour<'_, Log> = Rc::new(NoopBehaviour);
        let b: SharedBehaviour<'_, Log> = Rc::new(NoopBehaviour);
        assert_ne!(BehaviourId::of(&a), BehaviourId::of(&b));
    }
}

// ── DeltaTime ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod time_tests {
    use super::*;

    #[test]
    fn from_secs() {
        let dt = DeltaTime::from_secs_f32(0.25);
        assert_eq!(dt.as_duration(), Duration::from_millis(250));
        assert!((dt.as_secs_f32() - 0.25).abs() < f32::EPSILON);
    }

    #[test]
    fn negative_and_nan_saturate_to_zero() {
        assert_eq!(DeltaTime::from_secs_f32(-1.0), DeltaTime::ZERO);
        assert_eq!(DeltaTime::from_secs_f32(f32::NAN), DeltaTime::ZERO);
    }

    #[test]
    fn infinity_saturates_to_max() {
        assert_eq!(DeltaTime::from_secs_f32(f32::INFINITY).as_duration(), Duration::MAX);
    }

    #[test]
    fn display() {
        assert_eq!(DeltaTime::from(Duration::from_millis(16)).to_string(), "0.0160s");
    }
}
