//! `uav-route`: turning visit orders into tick-by-tick trajectories.
//!
//! # Crate layout
//!
//! | Module         | Contents                                                     |
//! |----------------|--------------------------------------------------------------|
//! | [`assignment`] | `Assignment`: one visit sequence per agent                  |
//! | [`table`]      | `RouteTable`: per-agent, per-tick positions                 |
//! | [`timing`]     | `TargetTiming`: start/end tick of every visited target      |
//! | [`change`]     | `ChangeSet`: lowest touched sequence index per agent        |
//! | [`decode`]     | `decode`, `decode_with`: full tick-major simulation         |
//! | [`planner`]    | `RoutePlanner<P>`: incremental resimulation from an index   |
//! | [`error`]      | `RouteError`, `RouteResult<T>`                               |
//!
//! # Movement model
//!
//! Every agent starts at its base at tick 0.  On each later tick it asks the
//! [`PathFinder`][uav_grid::PathFinder] for a path from its current cell to
//! its next pending target and takes one step along it.  When the path has
//! fewer than two cells (already there, or unreachable) the agent stays put
//! for that tick and moves on to the next target.  Once its sequence is
//! exhausted it holds position until the horizon.
//!
//! # Feature flags
//!
//! | Flag       | Effect                                                    |
//! |------------|-----------------------------------------------------------|
//! | `parallel` | `RoutePlanner::build` simulates agents on the Rayon pool. |
//! | `serde`    | Derives `Serialize`/`Deserialize` on public types.        |

pub mod assignment;
pub mod change;
pub mod decode;
pub mod error;
pub mod planner;
pub mod table;
pub mod timing;

#[cfg(test)]
mod tests;

pub use assignment::Assignment;
pub use change::ChangeSet;
pub use decode::{decode, decode_with};
pub use error::{RouteError, RouteResult};
pub use planner::RoutePlanner;
pub use table::RouteTable;
pub use timing::TargetTiming;
