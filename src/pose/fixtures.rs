//! Synthetic skeletons for tests and demos
//!
//! Poses are built from the joint angles the rules look at, so a test can
//! say "knee at 140°" instead of listing coordinates.

use super::landmark::*;

fn rotate(dir: (f64, f64), degrees: f64) -> (f64, f64) {
    let (sin, cos) = degrees.to_radians().sin_cos();
    (dir.0 * cos - dir.1 * sin, dir.0 * sin + dir.1 * cos)
}

fn unit(from: Landmark, to: Landmark) -> (f64, f64) {
    let (dx, dy) = (to.x - from.x, to.y - from.y);
    let len = (dx * dx + dy * dy).sqrt();
    (dx / len, dy / len)
}

/// Point `length` away from `vertex`, at `degrees` from the ray vertex→toward
fn limb(vertex: Landmark, toward: Landmark, degrees: f64, length: f64) -> Landmark {
    let dir = rotate(unit(vertex, toward), degrees);
    Landmark::new(vertex.x + dir.0 * length, vertex.y + dir.1 * length, 0.0)
}

fn blank() -> Vec<Landmark> {
    vec![Landmark::new(0.5, 0.5, 0.0).with_visibility(0.9); LANDMARK_COUNT]
}

/// Squat skeleton with both sides mirrored in height
///
/// - `hip_above_knee`: knee y minus hip y (negative = hips below knees)
/// - `knee_angle`: hip-knee-ankle angle on both legs
/// - `back_lean`: torso deviation from vertical
pub fn squat_pose(hip_above_knee: f64, knee_angle: f64, back_lean: f64) -> Vec<Landmark> {
    let mut lm = blank();
    let knee_y = 0.6;

    for (hip, knee, ankle, x) in [
        (LEFT_HIP, LEFT_KNEE, LEFT_ANKLE, 0.4),
        (RIGHT_HIP, RIGHT_KNEE, RIGHT_ANKLE, 0.6),
    ] {
        lm[knee] = Landmark::new(x, knee_y, 0.0);
        lm[hip] = Landmark::new(x - 0.15, knee_y - hip_above_knee, 0.0);
        lm[ankle] = limb(lm[knee], lm[hip], knee_angle, 0.35);
    }

    let hip_x = (lm[LEFT_HIP].x + lm[RIGHT_HIP].x) / 2.0;
    let hip_y = knee_y - hip_above_knee;
    let (dx, dy) = rotate((0.0, -1.0), back_lean);
    let center = (hip_x + dx * 0.3, hip_y + dy * 0.3);
    lm[LEFT_SHOULDER] = Landmark::new(center.0 - 0.1, center.1, 0.0);
    lm[RIGHT_SHOULDER] = Landmark::new(center.0 + 0.1, center.1, 0.0);

    lm
}

/// Side-on push-up skeleton
///
/// - `elbow_angle`: shoulder-elbow-wrist angle on both arms
/// - `body_angle`: ankle-hip-shoulder angle through the body centers
///
/// Hands land exactly shoulder-width apart and below the shoulders.
pub fn pushup_pose(elbow_angle: f64, body_angle: f64) -> Vec<Landmark> {
    let mut lm = blank();

    let shoulder_center = Landmark::new(0.3, 0.5, 0.0);
    let hip_center = Landmark::new(0.55, 0.5, 0.0);
    let ankle_center = limb(hip_center, shoulder_center, body_angle, 0.3);

    for (shoulder, elbow, wrist, hip, ankle, offset) in [
        (LEFT_SHOULDER, LEFT_ELBOW, LEFT_WRIST, LEFT_HIP, LEFT_ANKLE, -0.05),
        (RIGHT_SHOULDER, RIGHT_ELBOW, RIGHT_WRIST, RIGHT_HIP, RIGHT_ANKLE, 0.05),
    ] {
        lm[shoulder] = Landmark::new(shoulder_center.x + offset, shoulder_center.y, 0.0);
        lm[hip] = Landmark::new(hip_center.x + offset, hip_center.y, 0.0);
        lm[ankle] = Landmark::new(ankle_center.x + offset, ankle_center.y, 0.0);
        lm[elbow] = Landmark::new(lm[shoulder].x, lm[shoulder].y + 0.15, 0.0);
        lm[wrist] = limb(lm[elbow], lm[shoulder], elbow_angle, 0.15);
    }

    lm
}
