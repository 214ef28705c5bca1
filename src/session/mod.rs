//! Session module - throttled orchestration of evaluation and rep counting
//!
//! Re-exports only. All logic in submodules.

mod config;
mod orchestrator;
mod throttle;

pub use config::{SessionConfig, DEFAULT_THROTTLE_MS};
pub use orchestrator::{EngineStatus, Session, SessionSummary, Snapshot};
pub use throttle::Throttle;
