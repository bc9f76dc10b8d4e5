//! `uav-eval`: collision detection and urgency scoring.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                        |
//! |---------------|-----------------------------------------------------------------|
//! | [`collision`] | `has_collision`, `count_collisions`, `detect_collisions`        |
//! | [`urgency`]   | `UrgencyEvaluator`, `evaluate`, `evaluate_assignment`           |
//!
//! # Two views of a collision
//!
//! The score only asks *whether* a route table collides and charges one flat
//! penalty for it.  The search asks *how much* it collides (one unit per
//! excess occupant of a cell) to decide how hard to push its repair moves.
//! Both views live here and are kept distinct.
//!
//! # Feature flags
//!
//! | Flag      | Effect                                                      |
//! |-----------|-------------------------------------------------------------|
//! | `fx-hash` | FxHash instead of SipHash for per-tick occupancy counting.  |
//! | `serde`   | Derives `Serialize`/`Deserialize` on `CollisionRecord`.     |

pub mod collision;
pub mod urgency;


pub use collision::{
    count_collisions, detect_collisions, excess_occupants, first_departure, has_collision,
    CollisionRecord,
};
pub use urgency::{evaluate, evaluate_assignment, UrgencyEvaluator, DEFAULT_COLLISION_PENALTY};
