//! Mesh modifiers for procedural geometry
//!
//! Modifiers operate on [`Mesh`] in place. Use the `MeshApply` extension
//! trait for method chaining:
//!
//! ```
//! use glam::Vec3;
//! use proc_mesh::mesh::*;
//!
//! let mut mesh = generate_sphere(Vec3::ZERO, 0.5, 8, 12);
//! mesh.apply(Transform::scale(1.0, 1.2, 0.8))
//!     .apply(Subdivide { iterations: 1 })
//!     .apply(Weld { threshold: 0.01 });
//! ```

use glam::{Mat4, Vec3};
use std::collections::HashMap;

use super::types::Mesh;

/// Trait for mesh modifiers
///
/// Implement this trait to create custom mesh modifiers that can be applied
/// to [`Mesh`] instances.
pub trait MeshModifier {
    /// Apply this modifier to a mesh, modifying it in place
    fn apply(&self, mesh: &mut Mesh);
}

/// Extension trait for fluent modifier application
pub trait MeshApply {
    /// Apply a modifier and return `&mut Self` for chaining
    fn apply<M: MeshModifier>(&mut self, modifier: M) -> &mut Self;
}

impl MeshApply for Mesh {
    fn apply<M: MeshModifier>(&mut self, modifier: M) -> &mut Self {
        modifier.apply(self);
        self
    }
}

/// Transform mesh vertices using a 4x4 matrix
///
/// # Example
/// ```
/// use glam::Vec3;
/// use proc_mesh::mesh::*;
///
/// let mut mesh = generate_sphere(Vec3::ZERO, 1.0, 8, 12);
///
/// // Scale non-uniformly, then rotate 45 degrees around Y
/// Transform::scale(2.0, 1.0, 1.0).apply(&mut mesh);
/// Transform::rotate_y(45.0).apply(&mut mesh);
/// ```
pub struct Transform {
    matrix: Mat4,
}

impl Transform {
    /// Create an identity transform (no change)
    pub fn identity() -> Self {
        Self {
            matrix: Mat4::IDENTITY,
        }
    }

    /// Create a translation transform
    pub fn translate(x: f32, y: f32, z: f32) -> Self {
        Self {
            matrix: Mat4::from_translation(Vec3::new(x, y, z)),
        }
    }

    /// Create a non-uniform scale transform
    pub fn scale(x: f32, y: f32, z: f32) -> Self {
        Self {
            matrix: Mat4::from_scale(Vec3::new(x, y, z)),
        }
    }

    /// Create a uniform scale transform
    pub fn scale_uniform(s: f32) -> Self {
        Self::scale(s, s, s)
    }

    /// Create a rotation around the X axis (in degrees)
    pub fn rotate_x(degrees: f32) -> Self {
        Self {
            matrix: Mat4::from_rotation_x(degrees.to_radians()),
        }
    }

    /// Create a rotation around the Y axis (in degrees)
    pub fn rotate_y(degrees: f32) -> Self {
        Self {
            matrix: Mat4::from_rotation_y(degrees.to_radians()),
        }
    }

    /// Create a rotation around the Z axis (in degrees)
    pub fn rotate_z(degrees: f32) -> Self {
        Self {
            matrix: Mat4::from_rotation_z(degrees.to_radians()),
        }
    }

    /// Create a transform from a custom 4x4 matrix
    pub fn from_matrix(matrix: Mat4) -> Self {
        Self { matrix }
    }
}

impl MeshModifier for Transform {
    fn apply(&self, mesh: &mut Mesh) {
        for pos in &mut mesh.vertices {
            let transformed = self.matrix.transform_point3(Vec3::from(*pos));
            *pos = [transformed.x, transformed.y, transformed.z];
        }
    }
}

/// Weld vertices closer than a distance threshold into one
///
/// Vertices are snapped onto a grid of `threshold`-sized cells; the first
/// vertex in each cell survives and later ones remap onto it. Faces that
/// collapse to fewer than three distinct vertices are dropped.
///
/// Merged seams (fallback metaball spheres, mirrored halves) become a
/// single connected surface this way.
pub struct Weld {
    /// Distance threshold below which vertices merge
    pub threshold: f32,
}

impl Default for Weld {
    fn default() -> Self {
        Self { threshold: 0.001 }
    }
}

impl MeshModifier for Weld {
    fn apply(&self, mesh: &mut Mesh) {
        if mesh.vertices.is_empty() || self.threshold <= 0.0 {
            return;
        }

        let inv = 1.0 / self.threshold;
        let mut cells: HashMap<[i64; 3], u32> = HashMap::new();
        let mut remap: Vec<u32> = Vec::with_capacity(mesh.vertices.len());
        let mut kept: Vec<[f32; 3]> = Vec::new();

        for pos in &mesh.vertices {
            let key = [
                (pos[0] * inv).round() as i64,
                (pos[1] * inv).round() as i64,
                (pos[2] * inv).round() as i64,
            ];
            let idx = *cells.entry(key).or_insert_with(|| {
                kept.push(*pos);
                (kept.len() - 1) as u32
            });
            remap.push(idx);
        }

        let faces = std::mem::take(&mut mesh.faces);
        mesh.faces = faces
            .into_iter()
            .map(|[a, b, c]| {
                [
                    remap[a as usize],
                    remap[b as usize],
                    remap[c as usize],
                ]
            })
            .filter(|&[a, b, c]| a != b && b != c && a != c)
            .collect();
        mesh.vertices = kept;
    }
}

/// Subdivide mesh using midpoint subdivision
///
/// Each triangle is split into 4 smaller triangles by adding a vertex at
/// the midpoint of each edge. Shared edges share their midpoint vertex, so
/// closed surfaces stay closed.
pub struct Subdivide {
    /// Number of subdivision iterations (1-4 recommended, higher = exponential growth)
    pub iterations: u32,
}

impl Default for Subdivide {
    fn default() -> Self {
        Self { iterations: 1 }
    }
}

impl MeshModifier for Subdivide {
    fn apply(&self, mesh: &mut Mesh) {
        for _ in 0..self.iterations {
            subdivide_once(mesh);
        }
    }
}

/// Perform a single subdivision pass
fn subdivide_once(mesh: &mut Mesh) {
    type EdgeKey = (u32, u32);
    fn make_edge_key(a: u32, b: u32) -> EdgeKey {
        if a < b { (a, b) } else { (b, a) }
    }

    let mut edge_midpoints: HashMap<EdgeKey, u32> = HashMap::new();
    let mut new_faces = Vec::with_capacity(mesh.faces.len() * 4);

    let faces = std::mem::take(&mut mesh.faces);

    let mut midpoint = |mesh: &mut Mesh,
                        edge_midpoints: &mut HashMap<EdgeKey, u32>,
                        a: u32,
                        b: u32|
     -> u32 {
        let key = make_edge_key(a, b);
        if let Some(&idx) = edge_midpoints.get(&key) {
            return idx;
        }
        let mid = (mesh.vertex(a) + mesh.vertex(b)) * 0.5;
        let idx = mesh.add_vertex(mid);
        edge_midpoints.insert(key, idx);
        idx
    };

    for [i0, i1, i2] in faces {
        let m01 = midpoint(mesh, &mut edge_midpoints, i0, i1);
        let m12 = midpoint(mesh, &mut edge_midpoints, i1, i2);
        let m20 = midpoint(mesh, &mut edge_midpoints, i2, i0);

        // Corner triangles keep the original winding, plus a center triangle
        new_faces.push([i0, m01, m20]);
        new_faces.push([m01, i1, m12]);
        new_faces.push([m20, m12, i2]);
        new_faces.push([m01, m12, m20]);
    }

    mesh.faces = new_faces;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mesh::primitives::generate_sphere;

    #[test]
    fn test_transform_translate() {
        let mut mesh = generate_sphere(Vec3::ZERO, 1.0, 4, 6);
        mesh.apply(Transform::translate(5.0, 0.0, 0.0));

        let avg_x: f32 =
            mesh.vertices.iter().map(|p| p[0]).sum::<f32>() / mesh.vertex_count() as f32;
        assert!((avg_x - 5.0).abs() < 0.01);
    }

    #[test]
    fn test_transform_scale() {
        let mut mesh = generate_sphere(Vec3::ZERO, 1.0, 8, 12);
        mesh.apply(Transform::scale(2.0, 1.0, 1.0));

        let max_x = mesh
            .vertices
            .iter()
            .map(|p| p[0].abs())
            .fold(0.0f32, f32::max);
        assert!((max_x - 2.0).abs() < 0.01);
    }

    #[test]
    fn test_weld_collapses_pole_rings() {
        // Pole rings carry coincident vertices with distinct indices.
        let mut mesh = generate_sphere(Vec3::ZERO, 1.0, 4, 8);
        let before = mesh.vertex_count();
        mesh.apply(Weld { threshold: 0.001 });

        assert!(mesh.vertex_count() < before);
        assert!(mesh.indices_valid());
        // Each pole collapses 8 coincident vertices to 1.
        assert_eq!(mesh.vertex_count(), before - 14);
    }

    #[test]
    fn test_weld_drops_degenerate_faces() {
        let mut mesh = Mesh::new();
        mesh.add_vertex(Vec3::new(0.0, 0.0, 0.0));
        mesh.add_vertex(Vec3::new(0.0005, 0.0, 0.0));
        mesh.add_vertex(Vec3::new(1.0, 0.0, 0.0));
        mesh.add_face(0, 1, 2);

        mesh.apply(Weld { threshold: 0.01 });
        assert_eq!(mesh.face_count(), 0);
    }

    #[test]
    fn test_subdivide_quadruples_faces() {
        let mut mesh = generate_sphere(Vec3::ZERO, 1.0, 4, 6);
        let original = mesh.face_count();

        mesh.apply(Subdivide { iterations: 1 });
        assert_eq!(mesh.face_count(), original * 4);
        assert!(mesh.indices_valid());

        mesh.apply(Subdivide { iterations: 1 });
        assert_eq!(mesh.face_count(), original * 16);
    }

    #[test]
    fn test_subdivide_preserves_bounds() {
        let mut mesh = generate_sphere(Vec3::ZERO, 1.0, 6, 8);
        mesh.apply(Subdivide { iterations: 1 });

        // Midpoint subdivision never leaves the convex hull.
        for v in &mesh.vertices {
            let r = (v[0] * v[0] + v[1] * v[1] + v[2] * v[2]).sqrt();
            assert!(r <= 1.0 + 1e-5);
        }
    }

    #[test]
    fn test_fluent_apply_chaining() {
        let mut mesh = generate_sphere(Vec3::ZERO, 1.0, 4, 6);
        let original = mesh.face_count();

        mesh.apply(Transform::scale_uniform(2.0))
            .apply(Subdivide { iterations: 1 });

        assert_eq!(mesh.face_count(), original * 4);
        let max = mesh
            .vertices
            .iter()
            .map(|p| p[2].abs())
            .fold(0.0f32, f32::max);
        assert!((max - 2.0).abs() < 0.01);
    }
}
