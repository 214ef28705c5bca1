//! Motion and display phases

use serde::Serialize;

/// Per-frame reading of where the body is in the movement
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PhaseSignal {
    Up,
    Down,
}

impl PhaseSignal {
    pub fn from_down(is_down: bool) -> Self {
        if is_down {
            PhaseSignal::Down
        } else {
            PhaseSignal::Up
        }
    }
}

/// Committed phase used for counting
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MotionPhase {
    Up,
    /// Down signal seen, waiting on the good-form gate
    Transitioning,
    Down,
}

/// Coarse phase shown to the user
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DisplayPhase {
    Initial,
    Up,
    Down,
    /// Reserved for a "hold position" cue; no transition sets it yet
    Hold,
}

impl DisplayPhase {
    pub fn as_str(&self) -> &'static str {
        match self {
            DisplayPhase::Initial => "initial",
            DisplayPhase::Up => "up",
            DisplayPhase::Down => "down",
            DisplayPhase::Hold => "hold",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_phase_names_match_serialized_form() {
        for phase in [
            DisplayPhase::Initial,
            DisplayPhase::Up,
            DisplayPhase::Down,
            DisplayPhase::Hold,
        ] {
            assert_eq!(serde_json::to_value(phase).unwrap(), phase.as_str());
        }
    }

    #[test]
    fn signal_from_down_flag() {
        assert_eq!(PhaseSignal::from_down(true), PhaseSignal::Down);
        assert_eq!(PhaseSignal::from_down(false), PhaseSignal::Up);
    }
}
