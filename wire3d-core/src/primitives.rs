/// Factory functions for the built-in wireframe primitives
use std::fmt;
use std::str::FromStr;

use crate::geometry::{Color, Edge, Mesh, Vertex3};

/// Build a cube centered at the origin with half-extent `size`
pub fn cube(size: f32, color: Color) -> Mesh {
    let s = size;
    let vertices = vec![
        Vertex3::new(-s, -s, -s, color), // 0
        Vertex3::new(s, -s, -s, color),  // 1
        Vertex3::new(s, s, -s, color),   // 2
        Vertex3::new(-s, s, -s, color),  // 3
        Vertex3::new(-s, -s, s, color),  // 4
        Vertex3::new(s, -s, s, color),   // 5
        Vertex3::new(s, s, s, color),    // 6
        Vertex3::new(-s, s, s, color),   // 7
    ];

    let edges = [
        (0, 1),
        (1, 2),
        (2, 3),
        (3, 0), // Back face
        (4, 5),
        (5, 6),
        (6, 7),
        (7, 4), // Front face
        (0, 4),
        (1, 5),
        (2, 6),
        (3, 7), // Connecting edges
    ]
    .iter()
    .map(|&(start, end)| Edge::new(start, end, color))
    .collect();

    Mesh::new(vertices, edges)
}

/// Build a square-based pyramid: base at `z = -size`, apex at `z = +size`
pub fn pyramid(size: f32, color: Color) -> Mesh {
    let s = size;
    let vertices = vec![
        Vertex3::new(-s, -s, -s, color),
        Vertex3::new(s, -s, -s, color),
        Vertex3::new(s, s, -s, color),
        Vertex3::new(-s, s, -s, color),
        Vertex3::new(0.0, 0.0, s, color), // Apex
    ];

    let edges = [
        (0, 1),
        (1, 2),
        (2, 3),
        (3, 0), // Base
        (0, 4),
        (1, 4),
        (2, 4),
        (3, 4), // Sides
    ]
    .iter()
    .map(|&(start, end)| Edge::new(start, end, color))
    .collect();

    Mesh::new(vertices, edges)
}

/// The selectable primitives
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Primitive {
    #[default]
    Cube,
    Pyramid,
}

impl Primitive {
    pub const DEFAULT_SIZE: f32 = 1.0;

    /// Default color used when switching to this primitive
    pub fn color(self) -> Color {
        match self {
            Primitive::Cube => Color::RED,
            Primitive::Pyramid => Color::BLUE,
        }
    }

    pub fn mesh(self) -> Mesh {
        self.mesh_with_size(Self::DEFAULT_SIZE)
    }

    pub fn mesh_with_size(self, size: f32) -> Mesh {
        match self {
            Primitive::Cube => cube(size, self.color()),
            Primitive::Pyramid => pyramid(size, self.color()),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Primitive::Cube => "cube",
            Primitive::Pyramid => "pyramid",
        }
    }
}

impl fmt::Display for Primitive {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Primitive {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "cube" => Ok(Primitive::Cube),
            "pyramid" => Ok(Primitive::Pyramid),
            other => Err(format!("unknown primitive '{}' (expected cube or pyramid)", other)),
        }
    }
}
