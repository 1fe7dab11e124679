use glam::{Quat, Vec2};
use std::f32::consts::PI;

// Drag headings use atan2(dx, dy), not atan2(dy, dx): the marker art faces
// "up" at zero rotation, so the angle is measured from the map's +Y axis.
// The remap below shifts the result into the renderer's clockwise screen
// rotation, where 0 degrees points along +X of the rendered map.

/// Screen rotation in degrees for a marker dragged by `delta` world units.
pub fn drag_heading_degrees(delta: Vec2) -> f32 {
    let theta = delta.x.atan2(delta.y).to_degrees();
    if (0.0..=180.0).contains(&theta) {
        theta + 270.0
    } else {
        theta - 90.0
    }
}

/// Same remap in radians, used when deriving the emitted pose.
pub fn drag_heading_radians(delta: Vec2) -> f32 {
    let theta = delta.x.atan2(delta.y);
    if (0.0..=PI).contains(&theta) {
        theta + 3.0 * PI / 2.0
    } else {
        theta - PI / 2.0
    }
}

/// Planar quaternion for a heading `theta` in radians (`x = y = 0`).
pub fn planar_orientation(theta: f32) -> Quat {
    Quat::from_xyzw(0.0, 0.0, (-theta / 2.0).sin(), (-theta / 2.0).cos())
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-5;

    #[test]
    fn diagonal_drag_remaps_into_upper_branch() {
        // atan2(1, 1) = 45 degrees, inside [0, 180] -> +270.
        let deg = drag_heading_degrees(Vec2::new(1.0, 1.0));
        assert!((deg - 315.0).abs() < EPS, "got {deg}");
        let rad = drag_heading_radians(Vec2::new(1.0, 1.0));
        assert!((rad - 7.0 * PI / 4.0).abs() < EPS, "got {rad}");
    }

    #[test]
    fn negative_angle_remaps_into_lower_branch() {
        // atan2(-1, 1) = -45 degrees -> -90.
        let deg = drag_heading_degrees(Vec2::new(-1.0, 1.0));
        assert!((deg - (-135.0)).abs() < EPS, "got {deg}");
        let rad = drag_heading_radians(Vec2::new(-1.0, 1.0));
        assert!((rad - (-3.0 * PI / 4.0)).abs() < EPS, "got {rad}");
    }

    #[test]
    fn straight_up_drag_is_boundary_of_upper_branch() {
        // atan2(0, 1) = 0 sits inside the inclusive [0, 180] branch.
        let deg = drag_heading_degrees(Vec2::new(0.0, 1.0));
        assert!((deg - 270.0).abs() < EPS, "got {deg}");
    }

    #[test]
    fn degree_and_radian_remaps_agree() {
        for (dx, dy) in [(1.0, 0.5), (-0.3, 2.0), (-1.0, -1.0), (0.7, -0.2)] {
            let delta = Vec2::new(dx, dy);
            let deg = drag_heading_degrees(delta);
            let rad = drag_heading_radians(delta);
            assert!((deg - rad.to_degrees()).abs() < 1e-3, "delta {delta:?}: {deg} vs {rad}");
        }
    }

    #[test]
    fn planar_orientation_has_no_tilt() {
        let q = planar_orientation(7.0 * PI / 4.0);
        assert_eq!(q.x, 0.0);
        assert_eq!(q.y, 0.0);
        assert!((q.z - (-7.0 * PI / 8.0).sin()).abs() < EPS);
        assert!((q.w - (-7.0 * PI / 8.0).cos()).abs() < EPS);
    }
}
