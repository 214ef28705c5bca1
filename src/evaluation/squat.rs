//! Squat form rules
//!
//! Three independent checks, each appending its own issue:
//! - knees caving in while at depth
//! - hips staying well above the knee line
//! - torso leaning too far from vertical

use super::exercise::{Exercise, FormEvaluator};
use super::issue::{Issue, Severity};
use crate::pose::{
    angle_at_vertex, deviation_from_vertical, midpoint, Frame, LEFT_ANKLE, LEFT_HIP, LEFT_KNEE,
    LEFT_SHOULDER, RIGHT_ANKLE, RIGHT_HIP, RIGHT_KNEE, RIGHT_SHOULDER,
};
use crate::reps::PhaseSignal;

/// Either knee below this angle is a candidate for caving
const KNEE_CAVE_ANGLE: f64 = 150.0;
/// Secondary knee bound, checked once at depth
const KNEE_CAVE_CONFIRM_ANGLE: f64 = 165.0;
/// Hips count as "at knee level" within this margin above the knees
const KNEE_CHECK_DEPTH_MARGIN: f64 = 0.1;
/// Hips this far above the knees mean the squat is too shallow
const SHALLOW_MARGIN: f64 = 0.15;
/// Maximum torso deviation from vertical
const MAX_BACK_ANGLE: f64 = 45.0;
/// Right hip within this margin above the right knee counts as "down"
const DOWN_MARGIN: f64 = 0.05;

/// Features the squat rules are based on
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SquatMetrics {
    pub left_knee_angle: f64,
    pub right_knee_angle: f64,
    /// Mean hip height (normalized, grows downward)
    pub hip_y: f64,
    /// Mean knee height
    pub knee_y: f64,
    /// Shoulder center vs hip center, degrees from vertical
    pub back_angle: f64,
}

impl SquatMetrics {
    pub fn measure(frame: &Frame) -> Self {
        let left_hip = frame.get(LEFT_HIP);
        let right_hip = frame.get(RIGHT_HIP);
        let left_knee = frame.get(LEFT_KNEE);
        let right_knee = frame.get(RIGHT_KNEE);

        let hips_center = midpoint(left_hip, right_hip);
        let shoulders_center = midpoint(frame.get(LEFT_SHOULDER), frame.get(RIGHT_SHOULDER));

        Self {
            left_knee_angle: angle_at_vertex(left_hip, left_knee, frame.get(LEFT_ANKLE)),
            right_knee_angle: angle_at_vertex(right_hip, right_knee, frame.get(RIGHT_ANKLE)),
            hip_y: hips_center.y,
            knee_y: (left_knee.y + right_knee.y) / 2.0,
            back_angle: deviation_from_vertical(shoulders_center, hips_center),
        }
    }

    fn either_knee_below(&self, angle: f64) -> bool {
        self.left_knee_angle < angle || self.right_knee_angle < angle
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub struct SquatEvaluator;

impl FormEvaluator for SquatEvaluator {
    fn exercise(&self) -> Exercise {
        Exercise::Squat
    }

    fn check(&self, frame: &Frame) -> Vec<Issue> {
        let m = SquatMetrics::measure(frame);
        let mut issues = Vec::new();

        // Knees are only judged once the hips reach knee level
        if m.either_knee_below(KNEE_CAVE_ANGLE)
            && m.hip_y > m.knee_y - KNEE_CHECK_DEPTH_MARGIN
            && m.either_knee_below(KNEE_CAVE_CONFIRM_ANGLE)
        {
            issues.push(Issue::new(
                "Knees are caving inward",
                Severity::High,
                &[LEFT_KNEE, RIGHT_KNEE],
            ));
        }

        if m.hip_y <= m.knee_y - SHALLOW_MARGIN {
            issues.push(Issue::new(
                "Squat deeper - hips should go below knee level",
                Severity::Medium,
                &[LEFT_HIP, RIGHT_HIP],
            ));
        }

        if m.back_angle > MAX_BACK_ANGLE {
            issues.push(Issue::new(
                "Keep your back more upright",
                Severity::High,
                &[LEFT_SHOULDER, RIGHT_SHOULDER, LEFT_HIP, RIGHT_HIP],
            ));
        }

        issues
    }

    fn phase_signal(&self, frame: &Frame) -> PhaseSignal {
        let hip_y = frame.get(RIGHT_HIP).y;
        let knee_y = frame.get(RIGHT_KNEE).y;
        PhaseSignal::from_down(hip_y > knee_y - DOWN_MARGIN)
    }
}
