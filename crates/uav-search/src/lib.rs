//! `uav-search`: collision-aware simulated annealing over visit orders.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                       |
//! |---------------|----------------------------------------------------------------|
//! | [`initial`]   | `round_robin`: urgency-sorted starting assignment             |
//! | [`insertion`] | cheapest-slot insertion cost used by donating moves            |
//! | [`moves`]     | `MoveKind` and the eight neighbourhood operators               |
//! | [`config`]    | `SearchConfig`: temperature, cooling, move probabilities      |
//! | [`search`]    | `AnnealingSearch`, `SearchOutcome`, `search`                   |
//! | [`builder`]   | `SearchBuilder`: fluent construction                          |
//! | [`observer`]  | `SearchObserver`, `NoopObserver`, `PhaseTimings`               |
//! | [`error`]     | `SearchError`, `SearchResult<T>`                               |
//!
//! # Cargo features
//!
//! | Feature    | Effect                                                     |
//! |------------|------------------------------------------------------------|
//! | `parallel` | Initial trajectories are built on Rayon's thread pool.     |
//! | `fx-hash`  | FxHash for per-tick occupancy counting.                    |
//! | `serde`    | `SearchConfig` and public data types (de)serialize.        |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use uav_grid::load_grid_file;
//! use uav_search::{NoopObserver, SearchBuilder};
//!
//! let grid = load_grid_file("instance.txt".as_ref())?;
//! let outcome = SearchBuilder::new(&grid, 3)
//!     .horizon(100)
//!     .iterations(10_000)
//!     .seed(7)
//!     .build()?
//!     .run(&mut NoopObserver)?;
//! println!("best score {}", outcome.best_score);
//! ```

pub mod builder;
pub mod config;
pub mod error;
pub mod initial;
pub mod insertion;
pub mod moves;
pub mod observer;
pub mod search;


pub use builder::SearchBuilder;
pub use config::SearchConfig;
pub use error::{SearchError, SearchResult};
pub use initial::round_robin;
pub use moves::MoveKind;
pub use observer::{IterationReport, NoopObserver, PhaseTimings, SearchObserver, SearchPhase};
pub use search::{search, AnnealingSearch, SearchOutcome};
