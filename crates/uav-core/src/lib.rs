//! `uav-core`: foundational types for the uav patrol planner.
//!
//! This crate is a dependency of every other `uav-*` crate.  It intentionally
//! has no `uav-*` dependencies and minimal external ones (only `rand` and
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`ids`]         | `AgentId`, `BaseId`                                   |
//! | [`pos`]         | `Position`, Manhattan / Chebyshev distances           |
//! | [`time`]        | `Tick`                                                |
//! | [`rng`]         | `SearchRng` (seedable, owned by the search)           |
//! | [`error`]       | `CoreError`, `CoreResult`                             |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod error;
pub mod ids;
pub mod pos;
pub mod rng;
pub mod time;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{CoreError, CoreResult};
pub use ids::{AgentId, BaseId};
pub use pos::Position;
pub use rng::SearchRng;
pub use time::Tick;
