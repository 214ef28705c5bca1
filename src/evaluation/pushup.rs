//! Push-up form rules
//!
//! Depth is judged from the mean elbow angle: under 90° is a good bottom
//! position, over 110° is flagged, and the band in between is accepted
//! without being treated as deep.

use super::exercise::{Exercise, FormEvaluator};
use super::issue::{Issue, Severity};
use crate::pose::{
    angle_at_vertex, midpoint, Frame, LEFT_ANKLE, LEFT_ELBOW, LEFT_HIP, LEFT_SHOULDER, LEFT_WRIST,
    RIGHT_ANKLE, RIGHT_ELBOW, RIGHT_HIP, RIGHT_SHOULDER, RIGHT_WRIST,
};
use crate::reps::PhaseSignal;

/// Mean elbow angle above this is not deep enough
const SHALLOW_ELBOW_ANGLE: f64 = 110.0;
/// Body line below this means sagging hips
const SAG_BODY_ANGLE: f64 = 160.0;
/// Body line above this means piking hips
const PIKE_BODY_ANGLE: f64 = 195.0;
/// Chest check only applies with elbows bent past this
const CHEST_CHECK_ELBOW_ANGLE: f64 = 120.0;
/// Shoulder-over-wrist gap that counts as "chest too high"
const CHEST_GAP: f64 = 0.15;
/// Allowed hand span relative to shoulder span
const HAND_SPAN_MIN_RATIO: f64 = 0.7;
const HAND_SPAN_MAX_RATIO: f64 = 1.5;
/// Right elbow below this angle counts as "down"
const DOWN_ELBOW_ANGLE: f64 = 110.0;

/// Features the push-up rules are based on
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PushUpMetrics {
    pub left_elbow_angle: f64,
    pub right_elbow_angle: f64,
    /// Ankle center - hip center - shoulder center, 180° = straight
    pub body_angle: f64,
    /// Mean shoulder y minus mean wrist y
    pub shoulder_wrist_gap: f64,
    pub shoulder_span: f64,
    pub hand_span: f64,
}

impl PushUpMetrics {
    pub fn measure(frame: &Frame) -> Self {
        let left_shoulder = frame.get(LEFT_SHOULDER);
        let right_shoulder = frame.get(RIGHT_SHOULDER);
        let left_wrist = frame.get(LEFT_WRIST);
        let right_wrist = frame.get(RIGHT_WRIST);

        let shoulders = midpoint(left_shoulder, right_shoulder);
        let hips = midpoint(frame.get(LEFT_HIP), frame.get(RIGHT_HIP));
        let ankles = midpoint(frame.get(LEFT_ANKLE), frame.get(RIGHT_ANKLE));

        Self {
            left_elbow_angle: angle_at_vertex(left_shoulder, frame.get(LEFT_ELBOW), left_wrist),
            right_elbow_angle: angle_at_vertex(right_shoulder, frame.get(RIGHT_ELBOW), right_wrist),
            body_angle: angle_at_vertex(ankles, hips, shoulders),
            shoulder_wrist_gap: shoulders.y - (left_wrist.y + right_wrist.y) / 2.0,
            shoulder_span: (left_shoulder.x - right_shoulder.x).abs(),
            hand_span: (left_wrist.x - right_wrist.x).abs(),
        }
    }

    pub fn mean_elbow_angle(&self) -> f64 {
        (self.left_elbow_angle + self.right_elbow_angle) / 2.0
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub struct PushUpEvaluator;

impl FormEvaluator for PushUpEvaluator {
    fn exercise(&self) -> Exercise {
        Exercise::PushUp
    }

    fn check(&self, frame: &Frame) -> Vec<Issue> {
        let m = PushUpMetrics::measure(frame);
        let elbow = m.mean_elbow_angle();
        let mut issues = Vec::new();

        if elbow > SHALLOW_ELBOW_ANGLE {
            issues.push(Issue::new(
                "Bend elbows more - go deeper",
                Severity::High,
                &[LEFT_ELBOW, RIGHT_ELBOW],
            ));
        }

        // Angles fold into [0, 180], so the pike branch cannot trigger today
        if m.body_angle < SAG_BODY_ANGLE {
            issues.push(Issue::new(
                "Keep your body in a straight line - your hips are sagging",
                Severity::High,
                &[LEFT_HIP, RIGHT_HIP],
            ));
        } else if m.body_angle > PIKE_BODY_ANGLE {
            issues.push(Issue::new(
                "Keep your body in a straight line - your hips are too high",
                Severity::High,
                &[LEFT_HIP, RIGHT_HIP],
            ));
        }

        if elbow < CHEST_CHECK_ELBOW_ANGLE && m.shoulder_wrist_gap > CHEST_GAP {
            issues.push(Issue::new(
                "Lower your chest closer to the ground",
                Severity::Medium,
                &[LEFT_SHOULDER, RIGHT_SHOULDER],
            ));
        }

        if m.hand_span < m.shoulder_span * HAND_SPAN_MIN_RATIO
            || m.hand_span > m.shoulder_span * HAND_SPAN_MAX_RATIO
        {
            issues.push(Issue::new(
                "Position hands approximately shoulder-width apart",
                Severity::Medium,
                &[LEFT_WRIST, RIGHT_WRIST],
            ));
        }

        issues
    }

    fn phase_signal(&self, frame: &Frame) -> PhaseSignal {
        let elbow_angle = angle_at_vertex(
            frame.get(RIGHT_SHOULDER),
            frame.get(RIGHT_ELBOW),
            frame.get(RIGHT_WRIST),
        );
        PhaseSignal::from_down(elbow_angle < DOWN_ELBOW_ANGLE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pose::fixtures::pushup_pose;
    use crate::pose::Landmark;
    use approx::assert_abs_diff_eq;

    fn messages(lm: &[Landmark]) -> Vec<&'static str> {
        PushUpEvaluator
            .evaluate(lm)
            .issues()
            .iter()
            .map(|i| i.message)
            .collect()
    }

    #[test]
    fn metrics_follow_pose() {
        let lm = pushup_pose(80.0, 170.0);
        let m = PushUpMetrics::measure(&Frame::new(&lm).unwrap());
        assert_abs_diff_eq!(m.mean_elbow_angle(), 80.0, epsilon = 1e-6);
        assert_abs_diff_eq!(m.body_angle, 170.0, epsilon = 1e-6);
        assert_abs_diff_eq!(m.hand_span, m.shoulder_span, epsilon = 1e-9);
        assert!(m.shoulder_wrist_gap < 0.0);
    }

    #[test]
    fn deep_straight_push_up_is_clean() {
        let result = PushUpEvaluator.evaluate(&pushup_pose(80.0, 175.0));
        assert!(result.is_correct_form());
    }

    #[test]
    fn shallow_elbows_flagged() {
        let result = PushUpEvaluator.evaluate(&pushup_pose(130.0, 175.0));
        assert_eq!(result.issues().len(), 1);
        let issue = &result.issues()[0];
        assert_eq!(issue.message, "Bend elbows more - go deeper");
        assert_eq!(issue.severity, Severity::High);
        assert_eq!(issue.affected_joints, vec![LEFT_ELBOW, RIGHT_ELBOW]);
    }

    #[test]
    fn neutral_elbow_band_is_not_flagged() {
        for angle in [90.0, 100.0, 109.0] {
            assert!(messages(&pushup_pose(angle, 175.0)).is_empty(), "angle {angle}");
        }
    }

    #[test]
    fn sagging_hips_flagged() {
        assert_eq!(
            messages(&pushup_pose(80.0, 140.0)),
            vec!["Keep your body in a straight line - your hips are sagging"]
        );
    }

    #[test]
    fn chest_high_above_hands_flagged() {
        let mut lm = pushup_pose(80.0, 175.0);
        // Hands 0.2 above the shoulders with the elbows bent at 90°
        for (shoulder, elbow, wrist) in [
            (LEFT_SHOULDER, LEFT_ELBOW, LEFT_WRIST),
            (RIGHT_SHOULDER, RIGHT_ELBOW, RIGHT_WRIST),
        ] {
            let s = lm[shoulder];
            lm[elbow] = Landmark::new(s.x + 0.1, s.y - 0.1, 0.0);
            lm[wrist] = Landmark::new(s.x, s.y - 0.2, 0.0);
        }

        let m = PushUpMetrics::measure(&Frame::new(&lm).unwrap());
        assert_abs_diff_eq!(m.mean_elbow_angle(), 90.0, epsilon = 1e-6);
        assert_abs_diff_eq!(m.shoulder_wrist_gap, 0.2, epsilon = 1e-9);
        assert_eq!(messages(&lm), vec!["Lower your chest closer to the ground"]);
    }

    #[test]
    fn hand_placement_flagged_outside_band() {
        let mut narrow = pushup_pose(80.0, 175.0);
        narrow[RIGHT_WRIST].x = narrow[LEFT_WRIST].x + 0.05;
        assert_eq!(
            messages(&narrow),
            vec!["Position hands approximately shoulder-width apart"]
        );

        let mut wide = pushup_pose(80.0, 175.0);
        wide[RIGHT_WRIST].x = wide[LEFT_WRIST].x + 0.2;
        assert!(messages(&wide).contains(&"Position hands approximately shoulder-width apart"));
    }

    #[test]
    fn phase_signal_uses_right_elbow() {
        let bent = pushup_pose(100.0, 175.0);
        let frame = Frame::new(&bent).unwrap();
        assert_eq!(PushUpEvaluator.phase_signal(&frame), PhaseSignal::Down);

        let straight = pushup_pose(150.0, 175.0);
        let frame = Frame::new(&straight).unwrap();
        assert_eq!(PushUpEvaluator.phase_signal(&frame), PhaseSignal::Up);

        // Only the right arm drives the signal
        let mut mixed = pushup_pose(150.0, 175.0);
        let deep = pushup_pose(80.0, 175.0);
        mixed[RIGHT_WRIST] = deep[RIGHT_WRIST];
        let frame = Frame::new(&mixed).unwrap();
        assert_eq!(PushUpEvaluator.phase_signal(&frame), PhaseSignal::Down);
    }
}
