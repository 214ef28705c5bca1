//! Error types
//!
//! Only session lifecycle and bridge decoding can fail. Evaluators and the
//! rep counter always return a value.

use thiserror::Error;
use wasm_bindgen::JsValue;

/// Errors raised when starting a session
#[derive(Debug, Error, Clone, PartialEq)]
pub enum SessionError {
    /// Camera or pose engine failed to initialise on the host side
    #[error("Pose engine unavailable: {reason}")]
    EngineUnavailable { reason: String },

    #[error("Unknown exercise '{0}' (expected 'squat' or 'pushup')")]
    UnknownExercise(String),

    #[error("Invalid session config: {0}")]
    InvalidConfig(String),
}

impl From<SessionError> for JsValue {
    fn from(err: SessionError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}

/// Errors raised when decoding a flat landmark buffer from the host
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum FrameError {
    #[error("Invalid landmark data length: {len} (expected a multiple of {stride})")]
    Misaligned { len: usize, stride: usize },
}
