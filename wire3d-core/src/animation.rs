/// Animation state and the per-frame step that turns it into a draw list
use std::time::Instant;

use nalgebra::Point2;
use tracing::{debug, trace};

use crate::geometry::{Color, Mesh, Vertex2, Vertex3};
use crate::primitives::Primitive;
use crate::projection::Camera;
use crate::transform::{rotate_yxz, RotationState};

/// Longest time step a single tick may advance, in seconds
pub const MAX_FRAME_DELTA: f32 = 0.1;

/// A projected line segment with the color of the edge it came from
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub from: Point2<f32>,
    pub to: Point2<f32>,
    pub color: Color,
}

/// Everything the host needs to draw one frame, in draw order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DrawList {
    /// One point per mesh vertex, in vertex order
    pub points: Vec<Vertex2>,
    /// One segment per edge whose indices are in range, in edge order
    pub segments: Vec<Segment>,
}

impl DrawList {
    pub fn is_empty(&self) -> bool {
        self.points.is_empty() && self.segments.is_empty()
    }
}

/// Screen size in pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(800, 600)
    }
}

/// The capability a display host drives once per presented frame.
pub trait FrameStepper {
    /// Advance to `now` and produce the frame's draw list
    fn step(&mut self, now: Instant) -> DrawList;

    /// Whether the host should keep looping
    fn is_running(&self) -> bool;
}

/// Simulation state for a single spinning mesh.
///
/// Not thread-safe: exactly one loop owns it and ticks never overlap.
#[derive(Debug, Clone)]
pub struct AnimationState {
    mesh: Mesh,
    /// Current angles in degrees, each in [0, 360)
    pub rotation: RotationState,
    /// Angular velocity in degrees per second
    pub velocity: RotationState,
    pub camera: Camera,
    pub viewport: Viewport,
    last_update: Option<Instant>,
    running: bool,
}

impl AnimationState {
    pub fn new(mesh: Mesh) -> Self {
        Self {
            mesh,
            rotation: RotationState::zero(),
            velocity: RotationState::zero(),
            camera: Camera::default(),
            viewport: Viewport::default(),
            last_update: None,
            running: true,
        }
    }

    pub fn with_camera(mut self, camera: Camera) -> Self {
        self.camera = camera;
        self
    }

    pub fn with_velocity(mut self, velocity: RotationState) -> Self {
        self.velocity = velocity;
        self
    }

    pub fn with_viewport(mut self, viewport: Viewport) -> Self {
        self.viewport = viewport;
        self
    }

    pub fn mesh(&self) -> &Mesh {
        &self.mesh
    }

    /// Replace the mesh, dropping the old one
    pub fn set_mesh(&mut self, mesh: Mesh) {
        debug!(
            vertices = mesh.vertices().len(),
            edges = mesh.edges().len(),
            "replacing mesh"
        );
        self.mesh = mesh;
    }

    pub fn set_viewport(&mut self, width: u32, height: u32) {
        debug!(width, height, "viewport resized");
        self.viewport = Viewport::new(width, height);
    }

    pub fn stop(&mut self) {
        debug!("animation stopped");
        self.running = false;
    }

    pub fn last_update(&self) -> Option<Instant> {
        self.last_update
    }

    /// Seconds since the previous tick, clamped to [`MAX_FRAME_DELTA`].
    /// Zero on the first tick or if `now` is earlier than the last one.
    fn frame_delta(&self, now: Instant) -> f32 {
        match self.last_update {
            Some(last) => now
                .saturating_duration_since(last)
                .as_secs_f32()
                .min(MAX_FRAME_DELTA),
            None => 0.0,
        }
    }

    /// Rotate and project the current mesh without advancing time
    pub fn draw_list(&self) -> DrawList {
        let Viewport { width, height } = self.viewport;
        let points: Vec<Vertex2> = self
            .mesh
            .vertices()
            .iter()
            .map(|vertex| rotate_yxz(vertex, &self.rotation))
            .map(|rotated: Vertex3| self.camera.project(&rotated, width, height))
            .collect();

        let segments = self
            .mesh
            .edges()
            .iter()
            .filter_map(|edge| match edge.endpoints(&points) {
                Some((from, to)) => Some(Segment {
                    from: from.position,
                    to: to.position,
                    color: edge.color,
                }),
                None => {
                    trace!(?edge, vertices = points.len(), "skipping edge with out-of-range index");
                    None
                }
            })
            .collect();

        DrawList { points, segments }
    }
}

impl Default for AnimationState {
    fn default() -> Self {
        Self::new(Primitive::Cube.mesh())
    }
}

impl FrameStepper for AnimationState {
    fn step(&mut self, now: Instant) -> DrawList {
        let dt = self.frame_delta(now);
        self.last_update = Some(now);
        self.rotation.advance(&self.velocity, dt);
        self.draw_list()
    }

    fn is_running(&self) -> bool {
        self.running
    }
}
