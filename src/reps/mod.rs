//! Reps module - phase tracking and repetition counting
//!
//! Re-exports only. All logic in submodules.

mod counter;
mod phase;

pub use counter::{advance, RepCounterState, RepEvent, DEFAULT_GOOD_FORM_FRAMES};
pub use phase::{DisplayPhase, MotionPhase, PhaseSignal};
