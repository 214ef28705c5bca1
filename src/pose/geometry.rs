//! Joint angle geometry
//!
//! All angles are computed in the image (x, y) plane and returned in
//! degrees. Depth (z) only travels along through `midpoint`.

use nalgebra::Vector2;

use super::landmark::Landmark;

/// Image "up" direction (normalized y grows downward)
fn image_up() -> Vector2<f64> {
    Vector2::new(0.0, -1.0)
}

fn planar(from: Landmark, to: Landmark) -> Vector2<f64> {
    Vector2::new(to.x - from.x, to.y - from.y)
}

/// Interior angle at vertex `b` between rays b→a and b→c, in degrees
///
/// Uses the difference of the two ray headings (atan2), then folds the
/// result into [0, 180]:
/// - 180° = straight (a, b, c collinear with b in the middle)
/// - 90° = right angle
///
/// Coincident points give a heading of 0, so the function is total.
pub fn angle_at_vertex(a: Landmark, b: Landmark, c: Landmark) -> f64 {
    let ba = planar(b, a);
    let bc = planar(b, c);

    let radians = bc.y.atan2(bc.x) - ba.y.atan2(ba.x);
    let angle = radians.to_degrees().abs();

    if angle > 180.0 {
        360.0 - angle
    } else {
        angle
    }
}

/// Component-wise average of two landmarks (e.g. hip center from both hips)
pub fn midpoint(p: Landmark, q: Landmark) -> Landmark {
    let visibility = match (p.visibility, q.visibility) {
        (Some(a), Some(b)) => Some((a + b) / 2.0),
        _ => None,
    };

    Landmark {
        x: (p.x + q.x) / 2.0,
        y: (p.y + q.y) / 2.0,
        z: (p.z + q.z) / 2.0,
        visibility,
    }
}

/// Angle in degrees between the vector bottom→top and true vertical
///
/// 0° = `top` directly above `bottom`, 90° = horizontal, 180° = upside down.
/// Coincident points give 0.
pub fn deviation_from_vertical(top: Landmark, bottom: Landmark) -> f64 {
    planar(bottom, top).angle(&image_up()).to_degrees()
}
