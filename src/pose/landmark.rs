//! Landmark data and MediaPipe joint numbering
//!
//! The pose engine hands us 33 landmarks per detected body. The index of
//! each landmark is fixed by MediaPipe Pose and must not be renumbered.

use serde::Serialize;

// ============================================================================
// LANDMARK INDICES (MediaPipe Pose - 33 total)
// ============================================================================

/// Number of landmarks in a complete frame
pub const LANDMARK_COUNT: usize = 33;

pub const LEFT_SHOULDER: usize = 11;
pub const RIGHT_SHOULDER: usize = 12;
pub const LEFT_ELBOW: usize = 13;
pub const RIGHT_ELBOW: usize = 14;
pub const LEFT_WRIST: usize = 15;
pub const RIGHT_WRIST: usize = 16;
pub const LEFT_HIP: usize = 23;
pub const RIGHT_HIP: usize = 24;
pub const LEFT_KNEE: usize = 25;
pub const RIGHT_KNEE: usize = 26;
pub const LEFT_ANKLE: usize = 27;
pub const RIGHT_ANKLE: usize = 28;
pub const LEFT_FOOT_INDEX: usize = 31;
pub const RIGHT_FOOT_INDEX: usize = 32;

// ============================================================================
// LANDMARK DATA STRUCTURE
// ============================================================================

/// A single 3D landmark point (normalized coordinates)
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Landmark {
    pub x: f64, // 0-1 normalized
    pub y: f64, // 0-1 normalized, grows downward
    pub z: f64, // Relative depth
    #[serde(skip_serializing_if = "Option::is_none")]
    pub visibility: Option<f64>,
}

impl Landmark {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self {
            x,
            y,
            z,
            visibility: None,
        }
    }

    pub fn with_visibility(mut self, visibility: f64) -> Self {
        self.visibility = Some(visibility);
        self
    }
}

/// A frame that has been checked to carry the full skeleton.
///
/// Evaluator rules only ever see a `Frame`, so indexing any of the named
/// joints above cannot go out of bounds.
#[derive(Clone, Copy, Debug)]
pub struct Frame<'a> {
    landmarks: &'a [Landmark],
}

impl<'a> Frame<'a> {
    /// Returns `None` when fewer than 33 landmarks are present.
    /// Extra trailing landmarks are ignored.
    pub fn new(landmarks: &'a [Landmark]) -> Option<Self> {
        if landmarks.len() < LANDMARK_COUNT {
            return None;
        }
        Some(Self {
            landmarks: &landmarks[..LANDMARK_COUNT],
        })
    }

    pub fn get(&self, index: usize) -> Landmark {
        self.landmarks[index]
    }

    pub fn landmarks(&self) -> &'a [Landmark] {
        self.landmarks
    }
}
