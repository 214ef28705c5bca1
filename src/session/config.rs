//! Session configuration
//!
//! Only the orchestration knobs are configurable. Form-rule thresholds are
//! fixed constants in the evaluators.

use serde::{Deserialize, Serialize};

use crate::error::SessionError;
use crate::reps::DEFAULT_GOOD_FORM_FRAMES;

/// Default minimum spacing between accepted frames
pub const DEFAULT_THROTTLE_MS: f64 = 100.0;

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SessionConfig {
    /// Minimum milliseconds between accepted frames
    pub throttle_ms: f64,
    /// Consecutive good-form down frames before the bottom of a rep commits
    pub good_form_frames: u32,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            throttle_ms: DEFAULT_THROTTLE_MS,
            good_form_frames: DEFAULT_GOOD_FORM_FRAMES,
        }
    }
}

impl SessionConfig {
    pub fn validate(&self) -> Result<(), SessionError> {
        if !self.throttle_ms.is_finite() || self.throttle_ms <= 0.0 {
            return Err(SessionError::InvalidConfig(format!(
                "throttleMs must be a positive number, got {}",
                self.throttle_ms
            )));
        }
        if self.good_form_frames == 0 {
            return Err(SessionError::InvalidConfig(
                "goodFormFrames must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}
