//! Fluent builder for constructing a [`BehaviourGroup`].

use bg_behaviour::SharedBehaviour;

use crate::{BehaviourGroup, GroupConfig, GroupResult, LifecycleIteration};

/// Fluent builder for [`BehaviourGroup<'a, B>`].
///
/// # Optional inputs (have defaults)
///
/// | Method                      | Default                  |
/// |-----------------------------|--------------------------|
/// | `.config(c)`                | `GroupConfig::default()` |
/// | `.name(s)`                  | `"behaviours"`           |
/// | `.lifecycle_iteration(m)`   | `LifecycleIteration::Live` |
/// | `.snapshot_capacity(n)`     | `0`                      |
/// | `.behaviour(u)`             | no initial members       |
///
/// Initial members are registered in order before the group is returned.
/// The group is not started yet, so no callbacks fire during `build`.
///
/// # Example
///
/// ```rust,ignore
/// let group = BehaviourGroupBuilder::new(&blackboard)
///     .name("sentry")
///     .lifecycle_iteration(LifecycleIteration::Snapshot)
///     .behaviour(alarm)
///     .behaviour(patrol)
///     .build()?;
/// ```
pub struct BehaviourGroupBuilder<'a, B: ?Sized> {
    blackboard: &'a B,
    config:     GroupConfig,
    initial:    Vec<SharedBehaviour<'a, B>>,
}

impl<'a, B: ?Sized> BehaviourGroupBuilder<'a, B> {
    pub fn new(blackboard: &'a B) -> Self {
        Self {
            blackboard,
            config:  GroupConfig::default(),
            initial: Vec::new(),
        }
    }

    /// Replace the whole config.  Later setter calls still apply on top.
    pub fn config(mut self, config: GroupConfig) -> Self {
        self.config = config;
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.config.name = name.into();
        self
    }

    pub fn lifecycle_iteration(mut self, mode: LifecycleIteration) -> Self {
        self.config.lifecycle_iteration = mode;
        self
    }

    pub fn snapshot_capacity(mut self, capacity: usize) -> Self {
        self.config.snapshot_capacity = capacity;
        self
    }

    pub fn behaviour(mut self, unit: SharedBehaviour<'a, B>) -> Self {
        self.initial.push(unit);
        self
    }

    pub fn behaviours(mut self, units: impl IntoIterator<Item = SharedBehaviour<'a, B>>) -> Self {
        self.initial.extend(units);
        self
    }

    /// Validate the config and register the initial members.
    ///
    /// # Errors
    ///
    /// - [`GroupError::Config`][crate::GroupError::Config] for an invalid config.
    /// - [`GroupError::AlreadyMember`][crate::GroupError::AlreadyMember] if the
    ///   same unit was supplied twice.
    pub fn build(self) -> GroupResult<BehaviourGroup<'a, B>> {
        self.config.validate()?;
        let group = BehaviourGroup::with_config(self.blackboard, self.config);
        for unit in self.initial {
            group.try_add_behaviour(unit)?;
        }
        Ok(group)
    }
}
