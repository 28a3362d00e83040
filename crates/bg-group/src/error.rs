use bg_behaviour::BehaviourId;
use thiserror::Error;

/// Why a group operation was refused.
///
/// None of these are fatal: the bool-returning group methods map every
/// variant to `false` and leave the group untouched.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GroupError {
    #[error("behaviour `{label}` is already a member of this group")]
    AlreadyMember { label: String },

    #[error("{0} is not a member of this group")]
    NotMember(BehaviourId),

    #[error("no behaviour supplied")]
    MissingBehaviour,

    #[error("behaviour group `{group}` is not started")]
    NotStarted { group: String },

    #[error("group configuration error: {0}")]
    Config(String),
}

pub type GroupResult<T> = Result<T, GroupError>;
