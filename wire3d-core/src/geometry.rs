/// Geometry primitives for wireframe rendering
use nalgebra::{Point2, Point3};

/// An RGB color with 8-bit channels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const RED: Color = Color::new(255, 0, 0);
    pub const BLUE: Color = Color::new(0, 0, 255);
    pub const WHITE: Color = Color::new(255, 255, 255);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// A 3D vertex with position and color
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vertex3 {
    pub position: Point3<f32>,
    pub color: Color,
}

impl Vertex3 {
    pub fn new(x: f32, y: f32, z: f32, color: Color) -> Self {
        Self {
            position: Point3::new(x, y, z),
            color,
        }
    }

    /// Same color, new position
    pub fn with_position(&self, x: f32, y: f32, z: f32) -> Self {
        Self::new(x, y, z, self.color)
    }

    /// Euclidean distance from the origin
    pub fn length(&self) -> f32 {
        self.position.coords.norm()
    }
}

/// A vertex projected to screen space, in pixels
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vertex2 {
    pub position: Point2<f32>,
    pub color: Color,
}

impl Vertex2 {
    pub fn new(x: f32, y: f32, color: Color) -> Self {
        Self {
            position: Point2::new(x, y),
            color,
        }
    }
}

/// A colored edge joining two vertices of a mesh by index.
///
/// Indices are not checked against any vertex list; an edge that points past
/// the end of the list it is rendered with is skipped at draw time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Edge {
    pub start: usize,
    pub end: usize,
    pub color: Color,
}

impl Edge {
    pub fn new(start: usize, end: usize, color: Color) -> Self {
        Self { start, end, color }
    }

    /// Resolve both endpoints in `items`, or `None` if either is out of range
    pub fn endpoints<'a, T>(&self, items: &'a [T]) -> Option<(&'a T, &'a T)> {
        Some((items.get(self.start)?, items.get(self.end)?))
    }
}

/// A wireframe mesh: base vertices plus edges indexing into them.
///
/// Vertices and edges are only ever set together, so a mesh can't be seen
/// with new vertices and stale edges.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Mesh {
    vertices: Vec<Vertex3>,
    edges: Vec<Edge>,
}

impl Mesh {
    pub fn new(vertices: Vec<Vertex3>, edges: Vec<Edge>) -> Self {
        Self { vertices, edges }
    }

    pub fn vertices(&self) -> &[Vertex3] {
        &self.vertices
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edge_endpoints_in_range() {
        let items = [10, 20, 30];
        let edge = Edge::new(0, 2, Color::WHITE);
        assert_eq!(edge.endpoints(&items), Some((&10, &30)));
    }

    #[test]
    fn test_edge_endpoints_out_of_range() {
        let items = [10, 20, 30];
        assert_eq!(Edge::new(3, 0, Color::WHITE).endpoints(&items), None);
        assert_eq!(Edge::new(0, 99, Color::WHITE).endpoints(&items), None);
    }

    #[test]
    fn test_vertex_length() {
        let v = Vertex3::new(3.0, 4.0, 0.0, Color::RED);
        assert!((v.length() - 5.0).abs() < 1e-6);
    }
}
