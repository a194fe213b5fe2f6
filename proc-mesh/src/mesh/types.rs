//! Core mesh container types

use glam::Vec3;

/// Coordinate axis for oriented primitives
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    /// X axis (left/right)
    X,
    /// Y axis (up/down)
    Y,
    /// Z axis (forward/back)
    Z,
}

impl Axis {
    /// Map a ring coordinate pair plus a distance along the axis to a point.
    ///
    /// `u` is the cosine component of the ring, `v` the sine component, and
    /// `along` the signed distance from `center` along this axis. The two
    /// remaining world axes carry `u` and `v` in fixed order (X before Y
    /// before Z), so rings keep a consistent winding for every orientation.
    pub fn point(self, center: Vec3, u: f32, v: f32, along: f32) -> Vec3 {
        match self {
            Axis::X => center + Vec3::new(along, u, v),
            Axis::Y => center + Vec3::new(u, along, v),
            Axis::Z => center + Vec3::new(u, v, along),
        }
    }
}

/// An indexed triangle mesh.
///
/// Vertices are positions in a local, unitless model space; faces are
/// triples of indices into the vertex list, wound counter-clockwise when
/// viewed from outside. The one invariant every producer maintains is that
/// each face index is below `vertices.len()`, and `merge` preserves it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Mesh {
    /// Vertex positions
    pub vertices: Vec<[f32; 3]>,
    /// Triangle indices (CCW from outside)
    pub faces: Vec<[u32; 3]>,
}

impl Mesh {
    /// Create an empty mesh
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty mesh with reserved capacity
    pub fn with_capacity(vertices: usize, faces: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(vertices),
            faces: Vec::with_capacity(faces),
        }
    }

    /// Append a vertex and return its index
    pub fn add_vertex(&mut self, position: Vec3) -> u32 {
        self.vertices.push([position.x, position.y, position.z]);
        (self.vertices.len() - 1) as u32
    }

    /// Append a triangle face
    pub fn add_face(&mut self, a: u32, b: u32, c: u32) {
        self.faces.push([a, b, c]);
    }

    /// Number of vertices
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Number of triangle faces
    pub fn face_count(&self) -> usize {
        self.faces.len()
    }

    /// Vertex position as a `Vec3`
    pub fn vertex(&self, index: u32) -> Vec3 {
        Vec3::from(self.vertices[index as usize])
    }

    /// True when every face index refers to an existing vertex
    pub fn indices_valid(&self) -> bool {
        let count = self.vertices.len() as u32;
        self.faces
            .iter()
            .all(|f| f.iter().all(|&idx| idx < count))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::vec3;

    #[test]
    fn test_add_vertex_returns_index() {
        let mut mesh = Mesh::new();
        assert_eq!(mesh.add_vertex(vec3(0.0, 0.0, 0.0)), 0);
        assert_eq!(mesh.add_vertex(vec3(1.0, 0.0, 0.0)), 1);
        assert_eq!(mesh.add_vertex(vec3(0.0, 1.0, 0.0)), 2);
        assert_eq!(mesh.vertex_count(), 3);
    }

    #[test]
    fn test_indices_valid() {
        let mut mesh = Mesh::new();
        mesh.add_vertex(vec3(0.0, 0.0, 0.0));
        mesh.add_vertex(vec3(1.0, 0.0, 0.0));
        mesh.add_vertex(vec3(0.0, 1.0, 0.0));
        mesh.add_face(0, 1, 2);
        assert!(mesh.indices_valid());

        mesh.add_face(0, 1, 3);
        assert!(!mesh.indices_valid());
    }

    #[test]
    fn test_axis_point_orientation() {
        let c = vec3(1.0, 2.0, 3.0);
        assert_eq!(Axis::Z.point(c, 0.5, 0.25, 2.0), vec3(1.5, 2.25, 5.0));
        assert_eq!(Axis::X.point(c, 0.5, 0.25, 2.0), vec3(3.0, 2.5, 3.25));
        assert_eq!(Axis::Y.point(c, 0.5, 0.25, 2.0), vec3(1.5, 4.0, 3.25));
    }
}
