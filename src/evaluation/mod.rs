//! Evaluation module - per-exercise form rules
//!
//! Re-exports only. All logic in submodules.

mod exercise;
mod issue;
mod pushup;
mod squat;

pub use exercise::{Exercise, FormEvaluator};
pub use issue::{EvaluationResult, Issue, Severity};
pub use pushup::{PushUpEvaluator, PushUpMetrics};
pub use squat::{SquatEvaluator, SquatMetrics};
