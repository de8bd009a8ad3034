//! Service layer for layout computation and planner state.
//!
//! The geometry engines are pure functions over the models; the sessions own
//! planner state and sequence recomputation on every change.

pub mod discas;
pub mod geometry;
pub mod interaction;
pub mod session;
pub mod videowall;

// Re-export commonly used types and functions
pub use discas::{distance_to_size, size_to_distance, ContentClass};
pub use geometry::{compute_elevation, ElevationInput, ElevationLayout, Rect};
pub use interaction::{DimensionAnchor, DragTarget, Point, Viewport};
pub use session::{ElevationSession, VideoWallSession};
pub use videowall::{compute_wall_layout, room_fit_warnings, WallDimensions, WallLayout};
