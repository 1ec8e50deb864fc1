/// Axis rotations and rotation state
use tracing::warn;

use crate::geometry::Vertex3;

/// Rotate a vertex around the X axis by `angle_degrees`
pub fn rotate_x(vertex: &Vertex3, angle_degrees: f32) -> Vertex3 {
    let (sin, cos) = angle_degrees.to_radians().sin_cos();
    let p = vertex.position;
    let y = p.y * cos - p.z * sin;
    let z = p.y * sin + p.z * cos;
    vertex.with_position(p.x, y, z)
}

/// Rotate a vertex around the Y axis by `angle_degrees`
pub fn rotate_y(vertex: &Vertex3, angle_degrees: f32) -> Vertex3 {
    let (sin, cos) = angle_degrees.to_radians().sin_cos();
    let p = vertex.position;
    let x = p.x * cos + p.z * sin;
    let z = -p.x * sin + p.z * cos;
    vertex.with_position(x, p.y, z)
}

/// Rotate a vertex around the Z axis by `angle_degrees`
pub fn rotate_z(vertex: &Vertex3, angle_degrees: f32) -> Vertex3 {
    let (sin, cos) = angle_degrees.to_radians().sin_cos();
    let p = vertex.position;
    let x = p.x * cos - p.y * sin;
    let y = p.x * sin + p.y * cos;
    vertex.with_position(x, y, p.z)
}

/// Apply the three axis rotations in the fixed order Y, then X, then Z.
///
/// Kept as three separate passes rather than one combined matrix so results
/// match the per-axis math bit for bit.
pub fn rotate_yxz(vertex: &Vertex3, rotation: &RotationState) -> Vertex3 {
    let rotated = rotate_y(vertex, rotation.y);
    let rotated = rotate_x(&rotated, rotation.x);
    rotate_z(&rotated, rotation.z)
}

/// Rotation angles around three axes (in degrees).
///
/// Also used for angular velocities, in degrees per second.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RotationState {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl RotationState {
    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    pub fn zero() -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            z: 0.0,
        }
    }

    /// Rotate by delta amounts (in degrees)
    pub fn rotate(&mut self, dx: f32, dy: f32, dz: f32) {
        self.x += dx;
        self.y += dy;
        self.z += dz;
    }

    /// Advance by `velocity` over `dt` seconds and wrap back into [0, 360)
    pub fn advance(&mut self, velocity: &RotationState, dt: f32) {
        self.rotate(velocity.x * dt, velocity.y * dt, velocity.z * dt);
        self.x = wrap_degrees(self.x);
        self.y = wrap_degrees(self.y);
        self.z = wrap_degrees(self.z);
    }
}

impl Default for RotationState {
    fn default() -> Self {
        Self::zero()
    }
}

/// Beyond this many degrees the add/subtract loop is replaced by `%`.
const WRAP_LOOP_LIMIT: f32 = 360.0 * 100.0;

/// Normalize an angle in degrees into [0, 360)
pub fn wrap_degrees(angle: f32) -> f32 {
    if !angle.is_finite() {
        warn!(angle, "non-finite rotation angle, resetting to 0");
        return 0.0;
    }

    let mut a = if angle.abs() > WRAP_LOOP_LIMIT {
        angle % 360.0
    } else {
        angle
    };
    while a >= 360.0 {
        a -= 360.0;
    }
    while a < 0.0 {
        a += 360.0;
    }
    // A tiny negative angle plus 360 can round to exactly 360
    if a >= 360.0 {
        a = 0.0;
    }
    a
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Color;
    use nalgebra::{Rotation3, Vector3};

    fn point(x: f32, y: f32, z: f32) -> Vertex3 {
        Vertex3::new(x, y, z, Color::new(12, 34, 56))
    }

    fn assert_close(a: &Vertex3, b: &Vertex3, tolerance: f32) {
        let d = (a.position - b.position).norm();
        assert!(d < tolerance, "{:?} != {:?} (distance {})", a, b, d);
    }

    #[test]
    fn test_rotation_state() {
        let mut state = RotationState::zero();
        assert_eq!(state.x, 0.0);
        assert_eq!(state.y, 0.0);
        assert_eq!(state.z, 0.0);

        state.rotate(10.0, 20.0, 30.0);
        assert!((state.x - 10.0).abs() < 1e-6);
        assert!((state.y - 20.0).abs() < 1e-6);
        assert!((state.z - 30.0).abs() < 1e-6);
    }

    #[test]
    fn test_rotations_preserve_length() {
        let p = point(1.5, -2.0, 0.75);
        for step in 0..72 {
            let angle = step as f32 * 17.5 - 300.0;
            for rotated in [rotate_x(&p, angle), rotate_y(&p, angle), rotate_z(&p, angle)] {
                assert!((rotated.length() - p.length()).abs() < 1e-5);
            }
        }
    }

    #[test]
    fn test_zero_rotation_is_identity() {
        let p = point(1.0, 2.0, 3.0);
        assert_eq!(rotate_x(&p, 0.0), p);
        assert_eq!(rotate_y(&p, 0.0), p);
        assert_eq!(rotate_z(&p, 0.0), p);
    }

    #[test]
    fn test_full_turn_returns_to_start() {
        let p = point(1.0, 2.0, 3.0);
        assert_close(&rotate_x(&p, 360.0), &p, 1e-4);
        assert_close(&rotate_y(&p, 360.0), &p, 1e-4);
        assert_close(&rotate_z(&p, 360.0), &p, 1e-4);
    }

    #[test]
    fn test_rotation_preserves_color() {
        let p = point(1.0, 0.0, 0.0);
        assert_eq!(rotate_x(&p, 33.0).color, p.color);
        assert_eq!(rotate_y(&p, 33.0).color, p.color);
        assert_eq!(rotate_z(&p, 33.0).color, p.color);
    }

    #[test]
    fn test_quarter_turns() {
        // Right-handed: X takes +Y to +Z, Y takes +Z to +X, Z takes +X to +Y
        assert_close(&rotate_x(&point(0.0, 1.0, 0.0), 90.0), &point(0.0, 0.0, 1.0), 1e-6);
        assert_close(&rotate_y(&point(0.0, 0.0, 1.0), 90.0), &point(1.0, 0.0, 0.0), 1e-6);
        assert_close(&rotate_z(&point(1.0, 0.0, 0.0), 90.0), &point(0.0, 1.0, 0.0), 1e-6);
    }

    #[test]
    fn test_composition_matches_matrix_product() {
        let p = point(1.0, 2.0, 3.0);
        let rotation = RotationState::new(20.0, 10.0, 30.0);

        let rx = Rotation3::from_axis_angle(&Vector3::x_axis(), 20f32.to_radians());
        let ry = Rotation3::from_axis_angle(&Vector3::y_axis(), 10f32.to_radians());
        let rz = Rotation3::from_axis_angle(&Vector3::z_axis(), 30f32.to_radians());
        let expected = rz * rx * ry * p.position;

        let composed = rotate_yxz(&p, &rotation);
        assert!((composed.position - expected).norm() < 1e-5);
    }

    #[test]
    fn test_composition_is_order_sensitive() {
        let p = point(1.0, 2.0, 3.0);
        let fixed = rotate_yxz(&p, &RotationState::new(20.0, 10.0, 30.0));

        let permuted = [
            rotate_z(&rotate_y(&rotate_x(&p, 20.0), 10.0), 30.0), // X, Y, Z
            rotate_y(&rotate_z(&rotate_x(&p, 20.0), 30.0), 10.0), // X, Z, Y
            rotate_x(&rotate_z(&rotate_y(&p, 10.0), 30.0), 20.0), // Y, Z, X
            rotate_x(&rotate_y(&rotate_z(&p, 30.0), 10.0), 20.0), // Z, Y, X
            rotate_y(&rotate_x(&rotate_z(&p, 30.0), 20.0), 10.0), // Z, X, Y
        ];
        for other in &permuted {
            assert!((other.position - fixed.position).norm() > 1e-3);
        }
    }

    #[test]
    fn test_wrap_degrees() {
        assert_eq!(wrap_degrees(0.0), 0.0);
        assert_eq!(wrap_degrees(360.0), 0.0);
        assert!((wrap_degrees(725.0) - 5.0).abs() < 1e-4);
        assert!((wrap_degrees(-10.0) - 350.0).abs() < 1e-4);
        assert!((wrap_degrees(-730.0) - 350.0).abs() < 1e-3);
    }

    #[test]
    fn test_wrap_degrees_edge_values() {
        let tiny = wrap_degrees(-1e-8);
        assert!((0.0..360.0).contains(&tiny));
        let huge = wrap_degrees(1.0e12);
        assert!((0.0..360.0).contains(&huge));
        assert_eq!(wrap_degrees(f32::NAN), 0.0);
        assert_eq!(wrap_degrees(f32::INFINITY), 0.0);
    }

    #[test]
    fn test_advance_handles_negative_velocity() {
        let mut angles = RotationState::zero();
        angles.advance(&RotationState::new(-25.0, 50.0, 0.0), 0.1);
        assert!((angles.x - 357.5).abs() < 1e-4);
        assert!((angles.y - 5.0).abs() < 1e-4);
        assert_eq!(angles.z, 0.0);
    }
}
