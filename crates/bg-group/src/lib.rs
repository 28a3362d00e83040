//! `bg-group` — lifecycle dispatcher for a group of behaviour units.
//!
//! # Lifecycle
//!
//! ```text
//! driver:  start() ── update(dt) × N ── stop()
//!
//!   start()      → not-started → started; on_start for every startable member
//!   update(dt)   → snapshot the updatable members, then on_update for each
//!   stop()       → on_stop for every stoppable member; started → not-started
//!
//!   add_behaviour(u)     while started → u.on_start immediately
//!   remove_behaviour(u)  while started → u.on_stop immediately
//! ```
//!
//! Every operation takes `&self` and runs to completion on the caller's
//! thread.  Unit callbacks may call back into the same group (usually through
//! a `Weak` handle) to add or remove members, including themselves.
//!
//! # Cargo features
//!
//! | Feature   | Effect                                                  |
//! |-----------|---------------------------------------------------------|
//! | `serde`   | `Serialize`/`Deserialize` on `GroupConfig`.             |
//! | `fx-hash` | FxHash for the membership identity index.               |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use bg_behaviour::DeltaTime;
//! use bg_group::BehaviourGroupBuilder;
//!
//! let blackboard = WorldState::default();
//! let group = BehaviourGroupBuilder::new(&blackboard)
//!     .name("guard")
//!     .behaviour(Rc::new(Patrol::new(1.5)?))
//!     .build()?;
//!
//! group.start();
//! for _ in 0..60 {
//!     group.update(DeltaTime::from_secs_f32(1.0 / 60.0));
//! }
//! group.stop();
//! ```

pub mod builder;
pub mod config;
pub mod error;
pub mod group;
mod members;


pub use builder::BehaviourGroupBuilder;
pub use config::{GroupConfig, LifecycleIteration};
pub use error::{GroupError, GroupResult};
pub use group::BehaviourGroup;
