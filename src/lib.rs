//! Form Coach Web - squat and push-up form checking over MediaPipe Pose
//!
//! The browser runs the camera and the pose engine; every detected frame is
//! pushed into an `ExerciseSession`, which:
//! - throttles frames to one per 100 ms
//! - checks form with the exercise's rules
//! - counts reps behind a good-form hysteresis gate
//! - publishes `{ repCount, displayPhase, evaluationResult }` for the UI
//!
//! Everything below the bridge is plain Rust and runs natively too.

pub mod bridge;
pub mod error;
pub mod evaluation;
pub mod overlay;
pub mod pose;
pub mod reps;
pub mod session;

use wasm_bindgen::prelude::*;

pub use bridge::ExerciseSession;
pub use error::{FrameError, SessionError};
pub use evaluation::{EvaluationResult, Exercise, FormEvaluator, Issue, Severity};
pub use pose::{Frame, Landmark};
pub use reps::{DisplayPhase, MotionPhase};
pub use session::{EngineStatus, Session, SessionConfig, SessionSummary, Snapshot};

// ============================================================================
// WASM ENTRY POINTS
// ============================================================================

/// Called automatically when WASM module loads
#[wasm_bindgen(start)]
pub fn init_panic_hook() {
    console_error_panic_hook::set_once();
}

/// Route `log` output to the browser console
///
/// Level is one of "trace", "debug", "info", "warn", "error"; anything else
/// falls back to "info".
#[wasm_bindgen(js_name = initLogging)]
pub fn init_logging(level: &str) {
    let log_level = match level.to_lowercase().as_str() {
        "trace" => log::Level::Trace,
        "debug" => log::Level::Debug,
        "warn" => log::Level::Warn,
        "error" => log::Level::Error,
        _ => log::Level::Info,
    };

    wasm_logger::init(wasm_logger::Config::new(log_level));
    log::info!("Form coach initialized with log level: {}", log_level);
}

#[wasm_bindgen(js_name = getVersion)]
pub fn get_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
