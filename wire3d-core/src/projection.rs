/// Camera parameters and perspective projection
use tracing::trace;

use crate::geometry::{Vertex2, Vertex3};

/// Smallest magnitude the projection denominator may take
pub const MIN_DENOMINATOR: f32 = 1e-3;

/// Camera configuration for perspective projection
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    /// Perspective scale factor; larger values enlarge the image
    pub focal_length: f32,
    /// Distance from the camera to the origin along Z
    pub viewer_distance: f32,
}

impl Camera {
    pub fn new(focal_length: f32, viewer_distance: f32) -> Self {
        Self {
            focal_length,
            viewer_distance,
        }
    }

    /// Project a vertex onto a `width` x `height` screen
    pub fn project(&self, vertex: &Vertex3, width: u32, height: u32) -> Vertex2 {
        project_point(
            vertex,
            self.focal_length,
            self.viewer_distance,
            width,
            height,
        )
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::new(100_000.0, 500.0)
    }
}

/// Perspective-project a 3D vertex into screen space.
///
/// The denominator is `viewer_distance + z`. When it gets closer to zero than
/// [`MIN_DENOMINATOR`] it is clamped to that magnitude, keeping its sign, so
/// the result stays finite. Screen Y grows downward, so world Y is flipped.
pub fn project_point(
    vertex: &Vertex3,
    focal_length: f32,
    viewer_distance: f32,
    screen_width: u32,
    screen_height: u32,
) -> Vertex2 {
    let p = vertex.position;
    let mut denominator = viewer_distance + p.z;
    if denominator.abs() < MIN_DENOMINATOR {
        trace!(denominator, "clamping projection denominator");
        denominator = if denominator >= 0.0 {
            MIN_DENOMINATOR
        } else {
            -MIN_DENOMINATOR
        };
    }

    let x = screen_width as f32 * 0.5 + focal_length * p.x / denominator;
    let y = screen_height as f32 * 0.5 - focal_length * p.y / denominator;
    Vertex2::new(x, y, vertex.color)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Color;

    #[test]
    fn test_camera_creation() {
        let camera = Camera::default();
        assert_eq!(camera.focal_length, 100_000.0);
        assert_eq!(camera.viewer_distance, 500.0);
    }

    #[test]
    fn test_origin_projects_to_center() {
        let v = Vertex3::new(0.0, 0.0, 0.0, Color::RED);
        let projected = project_point(&v, 1000.0, 500.0, 800, 600);
        assert_eq!(projected.position.x, 400.0);
        assert_eq!(projected.position.y, 300.0);
    }

    #[test]
    fn test_projection_flips_y() {
        let v = Vertex3::new(1.0, 1.0, 0.0, Color::RED);
        let projected = project_point(&v, 500.0, 500.0, 100, 100);
        assert!((projected.position.x - 51.0).abs() < 1e-4);
        assert!((projected.position.y - 49.0).abs() < 1e-4);
    }

    #[test]
    fn test_projection_preserves_color() {
        let color = Color::new(1, 2, 3);
        let v = Vertex3::new(0.5, -0.5, 2.0, color);
        assert_eq!(Camera::default().project(&v, 640, 480).color, color);
    }

    #[test]
    fn test_negative_near_zero_denominator_is_clamped() {
        // 500 + (-500.0005) is about -0.0005
        let v = Vertex3::new(1.0, 1.0, -500.0005, Color::RED);
        let projected = project_point(&v, 1.0, 500.0, 0, 0);
        assert!(projected.position.x.is_finite());
        assert!(projected.position.y.is_finite());
        assert!((projected.position.x - 1.0 / -MIN_DENOMINATOR).abs() < 1e-2);
        assert!((projected.position.y + 1.0 / -MIN_DENOMINATOR).abs() < 1e-2);
    }

    #[test]
    fn test_zero_denominator_is_clamped_positive() {
        let v = Vertex3::new(2.0, 0.0, -500.0, Color::RED);
        let projected = project_point(&v, 1.0, 500.0, 0, 0);
        assert!((projected.position.x - 2.0 / MIN_DENOMINATOR).abs() < 1e-2);
    }

    #[test]
    fn test_denominator_at_threshold_is_untouched() {
        let v = Vertex3::new(1.0, 0.0, 0.0, Color::RED);
        let projected = project_point(&v, 1.0, MIN_DENOMINATOR, 0, 0);
        assert!((projected.position.x - 1.0 / MIN_DENOMINATOR).abs() < 1e-2);
    }
}
