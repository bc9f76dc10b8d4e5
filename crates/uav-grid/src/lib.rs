//! `uav-grid`: static grid model, pathfinding, and instance loading.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                   |
//! |--------------|------------------------------------------------------------|
//! | [`grid`]     | `Grid`, `Cell`, `Base`, `GridBuilder`                      |
//! | [`pathfind`] | `PathFinder` trait, `GridPath`, `AStar`                    |
//! | [`loader`]   | `load_grid_file`, `load_grid_reader` (text instances)      |
//! | [`error`]    | `GridError`, `GridResult<T>`                               |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                       |
//! |---------|--------------------------------------------------------------|
//! | `serde` | Derives `Serialize`/`Deserialize` on public types.           |

pub mod error;
pub mod grid;
pub mod loader;
pub mod pathfind;

#[cfg(test)]
mod tests;

pub use error::{GridError, GridResult};
pub use grid::{Base, Cell, Grid, GridBuilder};
pub use loader::{load_grid_file, load_grid_reader};
pub use pathfind::{AStar, GridPath, PathFinder};
