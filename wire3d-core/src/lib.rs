/// wire3d Core Library - frame-update pipeline for a spinning wireframe
///
/// Builds primitive meshes, rotates and perspective-projects their vertices,
/// and steps the animation state once per frame into a draw list. Drawing
/// the list is left to the display host.

pub mod animation;
pub mod geometry;
pub mod primitives;
pub mod projection;
pub mod transform;

// Re-export commonly used types
pub use animation::{AnimationState, DrawList, FrameStepper, Segment, Viewport};
pub use geometry::{Color, Edge, Mesh, Vertex2, Vertex3};
pub use primitives::Primitive;
pub use projection::{project_point, Camera};
pub use transform::{rotate_x, rotate_y, rotate_yxz, rotate_z, RotationState};
