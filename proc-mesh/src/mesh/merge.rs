//! Mesh concatenation with index re-basing

use super::types::Mesh;

/// Merge multiple meshes into one.
///
/// Vertices are concatenated in input order; each mesh's face indices are
/// shifted by the running vertex offset so they keep pointing at the same
/// positions. Input order is preserved, so merging is associative up to
/// vertex/face ordering.
///
/// # Panics
/// Panics if the combined vertex count would overflow `u32` indices.
pub fn merge(meshes: &[&Mesh]) -> Mesh {
    let total_vertices: usize = meshes.iter().map(|m| m.vertex_count()).sum();
    let total_faces: usize = meshes.iter().map(|m| m.face_count()).sum();

    assert!(
        total_vertices <= u32::MAX as usize,
        "merged mesh exceeds u32 index space: {total_vertices} vertices"
    );

    let mut out = Mesh::with_capacity(total_vertices, total_faces);

    for mesh in meshes {
        let offset = out.vertices.len() as u32;
        out.vertices.extend_from_slice(&mesh.vertices);
        out.faces
            .extend(mesh.faces.iter().map(|&[a, b, c]| {
                [a + offset, b + offset, c + offset]
            }));
    }

    out
}
