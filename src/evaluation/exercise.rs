//! Exercise selection and the evaluator contract

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use super::issue::{EvaluationResult, Issue};
use super::pushup::PushUpEvaluator;
use super::squat::SquatEvaluator;
use crate::error::SessionError;
use crate::pose::{Frame, Landmark};
use crate::reps::{DisplayPhase, PhaseSignal};

/// Supported exercises
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Exercise {
    Squat,
    PushUp,
}

impl Exercise {
    pub fn as_str(&self) -> &'static str {
        match self {
            Exercise::Squat => "squat",
            Exercise::PushUp => "pushup",
        }
    }

    /// Resolve the evaluator once at session start
    pub fn evaluator(&self) -> Box<dyn FormEvaluator> {
        match self {
            Exercise::Squat => Box::new(SquatEvaluator),
            Exercise::PushUp => Box::new(PushUpEvaluator),
        }
    }

    /// Text shown under the rep counter for each display phase
    pub fn phase_label(&self, phase: DisplayPhase) -> &'static str {
        match (self, phase) {
            (_, DisplayPhase::Initial) => "Get ready to start",
            (Exercise::Squat, DisplayPhase::Up) => "Standing position",
            (Exercise::PushUp, DisplayPhase::Up) => "Up position",
            (Exercise::Squat, DisplayPhase::Down) => "Squat position",
            (Exercise::PushUp, DisplayPhase::Down) => "Down position",
            (_, DisplayPhase::Hold) => "Hold this position",
        }
    }
}

impl fmt::Display for Exercise {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Exercise {
    type Err = SessionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "squat" => Ok(Exercise::Squat),
            "pushup" | "push-up" | "push_up" => Ok(Exercise::PushUp),
            _ => Err(SessionError::UnknownExercise(s.to_string())),
        }
    }
}

/// Per-exercise form rules and motion signal
///
/// Implementors only see complete frames; the length check and the degraded
/// result live in [`FormEvaluator::evaluate`].
pub trait FormEvaluator {
    fn exercise(&self) -> Exercise;

    /// Run every form rule; all triggered issues are returned in rule order
    fn check(&self, frame: &Frame) -> Vec<Issue>;

    /// Whether the body is currently in the bottom half of the movement
    fn phase_signal(&self, frame: &Frame) -> PhaseSignal;

    fn evaluate(&self, landmarks: &[Landmark]) -> EvaluationResult {
        match Frame::new(landmarks) {
            Some(frame) => {
                let issues = self.check(&frame);
                for issue in &issues {
                    log::trace!(
                        "{}: [{}] {}",
                        self.exercise(),
                        issue.severity.as_str(),
                        issue.message
                    );
                }
                EvaluationResult::from_issues(issues)
            }
            None => {
                log::debug!(
                    "{}: frame has {} landmarks, skipping form rules",
                    self.exercise(),
                    landmarks.len()
                );
                EvaluationResult::no_signal()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_exercise_names() {
        assert_eq!("squat".parse::<Exercise>(), Ok(Exercise::Squat));
        assert_eq!(" Push-Up ".parse::<Exercise>(), Ok(Exercise::PushUp));
        assert_eq!("push_up".parse::<Exercise>(), Ok(Exercise::PushUp));
        assert_eq!(
            "plank".parse::<Exercise>(),
            Err(SessionError::UnknownExercise("plank".into()))
        );
    }

    #[test]
    fn evaluator_matches_variant() {
        assert_eq!(Exercise::Squat.evaluator().exercise(), Exercise::Squat);
        assert_eq!(Exercise::PushUp.evaluator().exercise(), Exercise::PushUp);
    }

    #[test]
    fn short_frames_degrade_for_every_exercise() {
        let landmarks = vec![Landmark::default(); 12];
        for exercise in [Exercise::Squat, Exercise::PushUp] {
            let result = exercise.evaluator().evaluate(&landmarks);
            assert!(!result.is_correct_form());
            assert!(result.issues().is_empty());
        }
    }

    #[test]
    fn labels_depend_on_exercise() {
        assert_eq!(Exercise::Squat.phase_label(DisplayPhase::Down), "Squat position");
        assert_eq!(Exercise::PushUp.phase_label(DisplayPhase::Up), "Up position");
        assert_eq!(Exercise::PushUp.phase_label(DisplayPhase::Initial), "Get ready to start");
    }
}
