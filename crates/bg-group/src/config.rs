//! Group configuration.

use crate::{GroupError, GroupResult};

/// How `start` and `stop` walk the membership list.
///
/// `update` always iterates a snapshot; this only concerns the two
/// lifecycle passes.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum LifecycleIteration {
    /// Walk the live list by index, up to the member count captured when the
    /// pass began.
    ///
    /// Members removed by a callback shift later members down, so one
    /// unvisited member may be skipped.  Members appended by a callback lie
    /// beyond the captured count and are not visited by this pass.  The pass
    /// ends early if the list shrinks below the cursor.
    #[default]
    Live,

    /// Walk a copy of the list taken when the pass began.  Every member
    /// present at that moment is visited, even if a callback removed it.
    Snapshot,
}

/// Static settings of one [`BehaviourGroup`][crate::BehaviourGroup].
#[derive(Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GroupConfig {
    /// Attached as the `group` field to every log event.
    pub name: String,

    pub lifecycle_iteration: LifecycleIteration,

    /// Capacity reserved up front for the per-tick update snapshot.
    pub snapshot_capacity: usize,
}

impl GroupConfig {
    pub const DEFAULT_NAME: &'static str = "behaviours";

    pub fn validate(&self) -> GroupResult<()> {
        if self.name.trim().is_empty() {
            return Err(GroupError::Config("group name must not be empty".into()));
        }
        Ok(())
    }
}

impl Default for GroupConfig {
    fn default() -> Self {
        Self {
            name:                Self::DEFAULT_NAME.to_owned(),
            lifecycle_iteration: LifecycleIteration::Live,
            snapshot_capacity:   0,
        }
    }
}
