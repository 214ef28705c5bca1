//! Skeleton overlay - joints, bones and issue labels for the renderer
//!
//! Nothing is drawn here. The host renderer receives positions already in
//! clip space plus a tint per element and only has to place them.

use serde::Serialize;

use crate::evaluation::{EvaluationResult, Severity};
use crate::pose::{
    Landmark, LEFT_ANKLE, LEFT_ELBOW, LEFT_FOOT_INDEX, LEFT_HIP, LEFT_KNEE, LEFT_SHOULDER,
    LEFT_WRIST, RIGHT_ANKLE, RIGHT_ELBOW, RIGHT_FOOT_INDEX, RIGHT_HIP, RIGHT_KNEE,
    RIGHT_SHOULDER, RIGHT_WRIST,
};

/// Body connections drawn as bones (pairs of landmark indices)
pub const BODY_SKELETON: [(usize, usize); 14] = [
    // Torso
    (LEFT_SHOULDER, RIGHT_SHOULDER),
    (RIGHT_SHOULDER, RIGHT_HIP),
    (RIGHT_HIP, LEFT_HIP),
    (LEFT_HIP, LEFT_SHOULDER),
    // Arms
    (LEFT_SHOULDER, LEFT_ELBOW),
    (LEFT_ELBOW, LEFT_WRIST),
    (RIGHT_SHOULDER, RIGHT_ELBOW),
    (RIGHT_ELBOW, RIGHT_WRIST),
    // Legs
    (LEFT_HIP, LEFT_KNEE),
    (LEFT_KNEE, LEFT_ANKLE),
    (LEFT_ANKLE, LEFT_FOOT_INDEX),
    (RIGHT_HIP, RIGHT_KNEE),
    (RIGHT_KNEE, RIGHT_ANKLE),
    (RIGHT_ANKLE, RIGHT_FOOT_INDEX),
];

/// Labels float this far above their anchor joint (clip space)
const LABEL_LIFT: f64 = 0.2;

/// Tint for a drawn element
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Tint {
    /// Joint or bone with no issue
    Ok,
    /// High-severity issue
    Error,
    /// Medium or low-severity issue
    Warning,
}

impl Tint {
    /// RGBA color for hosts that don't bring their own palette
    pub fn rgba(&self) -> [f32; 4] {
        match self {
            Tint::Ok => [0.2, 1.0, 0.4, 1.0],
            Tint::Error => [1.0, 0.2, 0.2, 1.0],
            Tint::Warning => [1.0, 0.9, 0.2, 1.0],
        }
    }

    fn for_severity(severity: Severity) -> Self {
        match severity {
            Severity::High => Tint::Error,
            Severity::Medium | Severity::Low => Tint::Warning,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OverlayJoint {
    pub index: usize,
    pub position: [f64; 3],
    pub flagged: bool,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OverlayBone {
    pub from: usize,
    pub to: usize,
    pub flagged: bool,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OverlayLabel {
    pub message: String,
    pub tint: Tint,
    /// `tint` resolved to RGBA for hosts without their own palette
    pub color: [f32; 4],
    pub position: [f64; 3],
}

/// Everything the renderer needs for one accepted frame
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OverlayFrame {
    pub joints: Vec<OverlayJoint>,
    pub bones: Vec<OverlayBone>,
    pub labels: Vec<OverlayLabel>,
}

impl OverlayFrame {
    pub fn is_empty(&self) -> bool {
        self.joints.is_empty()
    }
}

/// Convert normalized landmark (0-1) to clip space (-1 to 1), flip Y
pub fn to_clip_space(lm: &Landmark) -> [f64; 3] {
    [lm.x * 2.0 - 1.0, -(lm.y * 2.0 - 1.0), lm.z * 2.0]
}

/// Build the overlay for a frame and its evaluation
///
/// Joints are flagged when any issue lists them; bones when either end is
/// flagged. Each issue gets one label above its first affected joint.
pub fn build_overlay(landmarks: &[Landmark], result: &EvaluationResult) -> OverlayFrame {
    if landmarks.len() < crate::pose::LANDMARK_COUNT {
        return OverlayFrame::default();
    }

    let joints = landmarks
        .iter()
        .take(crate::pose::LANDMARK_COUNT)
        .enumerate()
        .map(|(index, lm)| OverlayJoint {
            index,
            position: to_clip_space(lm),
            flagged: result.flags_joint(index),
        })
        .collect();

    let bones = BODY_SKELETON
        .iter()
        .map(|&(from, to)| OverlayBone {
            from,
            to,
            flagged: result.flags_joint(from) || result.flags_joint(to),
        })
        .collect();

    let labels = result
        .issues()
        .iter()
        .filter_map(|issue| {
            let anchor = landmarks.get(*issue.affected_joints.first()?)?;
            let [x, y, z] = to_clip_space(anchor);
            let tint = Tint::for_severity(issue.severity);
            Some(OverlayLabel {
                message: issue.message.to_string(),
                tint,
                color: tint.rgba(),
                position: [x, y + LABEL_LIFT, z],
            })
        })
        .collect();

    OverlayFrame {
        joints,
        bones,
        labels,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::evaluation::Issue;
    use crate::pose::LANDMARK_COUNT;
    use approx::assert_abs_diff_eq;

    fn knee_cave() -> EvaluationResult {
        EvaluationResult::from_issues(vec![Issue::new(
            "Knees are caving inward",
            Severity::High,
            &[LEFT_KNEE, RIGHT_KNEE],
        )])
    }

    #[test]
    fn clip_space_flips_y() {
        let [x, y, z] = to_clip_space(&Landmark::new(0.25, 0.25, 0.1));
        assert_abs_diff_eq!(x, -0.5);
        assert_abs_diff_eq!(y, 0.5);
        assert_abs_diff_eq!(z, 0.2);
    }

    #[test]
    fn flags_joints_and_adjacent_bones() {
        let landmarks = vec![Landmark::new(0.5, 0.5, 0.0); LANDMARK_COUNT];
        let overlay = build_overlay(&landmarks, &knee_cave());

        assert_eq!(overlay.joints.len(), LANDMARK_COUNT);
        let flagged: Vec<usize> = overlay
            .joints
            .iter()
            .filter(|j| j.flagged)
            .map(|j| j.index)
            .collect();
        assert_eq!(flagged, vec![LEFT_KNEE, RIGHT_KNEE]);

        let flagged_bones = overlay.bones.iter().filter(|b| b.flagged).count();
        // hip-knee and knee-ankle on each leg
        assert_eq!(flagged_bones, 4);
    }

    #[test]
    fn one_label_per_issue_above_first_joint() {
        let mut landmarks = vec![Landmark::new(0.5, 0.5, 0.0); LANDMARK_COUNT];
        landmarks[LEFT_KNEE] = Landmark::new(0.4, 0.7, 0.0);
        let overlay = build_overlay(&landmarks, &knee_cave());

        assert_eq!(overlay.labels.len(), 1);
        let label = &overlay.labels[0];
        assert_eq!(label.tint, Tint::Error);
        assert_eq!(label.color, Tint::Error.rgba());
        assert_abs_diff_eq!(label.position[0], -0.2, epsilon = 1e-12);
        assert_abs_diff_eq!(label.position[1], -0.4 + LABEL_LIFT, epsilon = 1e-12);
    }

    #[test]
    fn extra_landmarks_are_ignored() {
        let landmarks = vec![Landmark::new(0.5, 0.5, 0.0); LANDMARK_COUNT + 5];
        let overlay = build_overlay(&landmarks, &knee_cave());
        assert_eq!(overlay.joints.len(), LANDMARK_COUNT);
        assert_eq!(overlay.joints.last().map(|j| j.index), Some(LANDMARK_COUNT - 1));
    }

    #[test]
    fn invalid_frame_has_empty_overlay() {
        let overlay = build_overlay(&[], &EvaluationResult::no_signal());
        assert!(overlay.is_empty());
        assert!(overlay.bones.is_empty());
    }
}
