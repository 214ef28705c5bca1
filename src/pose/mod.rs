//! Pose module - landmark data and joint geometry
//!
//! Re-exports only. All logic in submodules.

mod geometry;
mod landmark;

#[doc(hidden)]
pub mod fixtures;

pub use geometry::{angle_at_vertex, deviation_from_vertical, midpoint};
pub use landmark::{
    Frame, Landmark, LANDMARK_COUNT,
    LEFT_SHOULDER, RIGHT_SHOULDER,
    LEFT_ELBOW, RIGHT_ELBOW,
    LEFT_WRIST, RIGHT_WRIST,
    LEFT_HIP, RIGHT_HIP,
    LEFT_KNEE, RIGHT_KNEE,
    LEFT_ANKLE, RIGHT_ANKLE,
    LEFT_FOOT_INDEX, RIGHT_FOOT_INDEX,
};
