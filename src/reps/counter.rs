//! Repetition counting with a good-form hysteresis gate
//!
//! A rep is one committed down → up cycle. Going down only commits after
//! `gate` consecutive down frames with correct form, so a single noisy
//! frame can neither start nor complete a rep.

use super::phase::{DisplayPhase, MotionPhase, PhaseSignal};

/// Default number of consecutive good-form down frames before committing
pub const DEFAULT_GOOD_FORM_FRAMES: u32 = 5;

/// What a single update did, for logging and callers that care
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RepEvent {
    /// Nothing changed
    None,
    /// Down signal seen, gate still open
    Descending { good_frames: u32 },
    /// Gate passed, bottom of the rep committed
    DownCommitted,
    /// Returned up from a committed bottom
    RepCompleted { rep_count: u32 },
    /// Returned up without a committed bottom
    Returned,
}

/// Per-session counting state
///
/// Only [`advance`] mutates it; a fresh session starts from
/// [`RepCounterState::new`].
#[derive(Clone, Debug, PartialEq)]
pub struct RepCounterState {
    rep_count: u32,
    motion_phase: MotionPhase,
    display_phase: DisplayPhase,
    consecutive_good_form_frames: u32,
    last_evaluation_ms: Option<f64>,
}

impl RepCounterState {
    pub fn new() -> Self {
        Self {
            rep_count: 0,
            motion_phase: MotionPhase::Up,
            display_phase: DisplayPhase::Initial,
            consecutive_good_form_frames: 0,
            last_evaluation_ms: None,
        }
    }

    pub fn rep_count(&self) -> u32 {
        self.rep_count
    }

    pub fn motion_phase(&self) -> MotionPhase {
        self.motion_phase
    }

    pub fn display_phase(&self) -> DisplayPhase {
        self.display_phase
    }

    pub fn consecutive_good_form_frames(&self) -> u32 {
        self.consecutive_good_form_frames
    }

    pub fn last_evaluation_ms(&self) -> Option<f64> {
        self.last_evaluation_ms
    }
}

impl Default for RepCounterState {
    fn default() -> Self {
        Self::new()
    }
}

/// Apply one accepted frame to the counting state
///
/// - `signal`: the exercise's phase signal for this frame
/// - `good_form`: whether the frame's evaluation had no issues
/// - `gate`: consecutive good-form down frames needed to commit
pub fn advance(
    state: &mut RepCounterState,
    signal: PhaseSignal,
    good_form: bool,
    gate: u32,
    timestamp_ms: f64,
) -> RepEvent {
    state.last_evaluation_ms = Some(timestamp_ms);

    match (signal, state.motion_phase) {
        (PhaseSignal::Down, MotionPhase::Down) => RepEvent::None,

        (PhaseSignal::Down, MotionPhase::Up | MotionPhase::Transitioning) => {
            state.motion_phase = MotionPhase::Transitioning;
            state.display_phase = DisplayPhase::Down;

            if !good_form {
                state.consecutive_good_form_frames = 0;
                return RepEvent::Descending { good_frames: 0 };
            }

            state.consecutive_good_form_frames += 1;
            if state.consecutive_good_form_frames >= gate {
                state.motion_phase = MotionPhase::Down;
                RepEvent::DownCommitted
            } else {
                RepEvent::Descending {
                    good_frames: state.consecutive_good_form_frames,
                }
            }
        }

        (PhaseSignal::Up, MotionPhase::Down) => {
            state.rep_count += 1;
            state.motion_phase = MotionPhase::Up;
            state.consecutive_good_form_frames = 0;
            state.display_phase = DisplayPhase::Up;
            RepEvent::RepCompleted {
                rep_count: state.rep_count,
            }
        }

        (PhaseSignal::Up, _) => {
            let was_up = state.motion_phase == MotionPhase::Up
                && state.display_phase == DisplayPhase::Up;
            state.motion_phase = MotionPhase::Up;
            state.display_phase = DisplayPhase::Up;
            if was_up {
                RepEvent::None
            } else {
                RepEvent::Returned
            }
        }
    }
}
