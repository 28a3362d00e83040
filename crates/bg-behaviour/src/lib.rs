//! `bg-behaviour` — the behaviour unit contract shared by every behaviour group.
//!
//! # Crate layout
//!
//! | Module         | Contents                                                        |
//! |----------------|-----------------------------------------------------------------|
//! | [`model`]      | `Behaviour` plus the `StartBehaviour` / `StopBehaviour` / `UpdateBehaviour` capabilities |
//! | [`capability`] | `Capabilities` — which of the three hooks a unit answers to     |
//! | [`ids`]        | `BehaviourId` — pointer identity of a shared unit               |
//! | [`time`]       | `DeltaTime` — non-negative per-tick duration                    |
//! | [`noop`]       | `NoopBehaviour` — marker unit with no capabilities              |
//! | [`error`]      | `BehaviourError`, `BehaviourResult<T>`                          |
//!
//! # Design notes
//!
//! A unit is a single value queried for capabilities at runtime, not a class
//! hierarchy.  Every callback takes `&self` and a shared `&B` blackboard, so
//! units and blackboards carry their own interior mutability.  That is what
//! lets a callback reach back into the group that is currently dispatching
//! it and add or remove members.

pub mod capability;
pub mod error;
pub mod ids;
pub mod model;
pub mod noop;
pub mod time;

#[cfg(test)]
mod tests;

pub use capability::Capabilities;
pub use error::{BehaviourError, BehaviourResult};
pub use ids::BehaviourId;
pub use model::{Behaviour, SharedBehaviour, StartBehaviour, StopBehaviour, UpdateBehaviour};
pub use noop::NoopBehaviour;
pub use time::DeltaTime;
