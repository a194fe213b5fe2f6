//! Parametric surface generators
//!
//! Pure functions mapping (center, size parameters, segment counts) to a
//! fresh [`Mesh`]. All ring-stack generators share the same quad-cell
//! stitching, wound counter-clockwise when viewed from outside.

mod appendages;
mod quadric;
mod tubes;

pub use appendages::{
    generate_arm, generate_fin, generate_flipper, generate_fluke, generate_plume_filament,
    generate_tentacle, generate_tri_fin,
};
pub use quadric::{generate_ellipsoid, generate_hemisphere, generate_sphere};
pub use tubes::{generate_cone, generate_cylinder, generate_tapered_body, generate_tapered_tube};

use crate::mesh::types::Mesh;

/// Stitch `rows + 1` stacked rings of `ring_size` vertices into quad cells,
/// two triangles per cell, wrapping the ring seam with modulo.
///
/// `ascending` describes the stacking direction: `true` when successive rings
/// advance along the primary axis (+), `false` when they descend. The two
/// triangle orders differ so that either stacking stays CCW from outside.
pub(crate) fn stitch_rings(mesh: &mut Mesh, rows: u32, ring_size: u32, base: u32, ascending: bool) {
    for row in 0..rows {
        for i in 0..ring_size {
            let current = base + row * ring_size + i;
            let next = base + row * ring_size + (i + 1) % ring_size;
            let above = base + (row + 1) * ring_size + i;
            let above_next = base + (row + 1) * ring_size + (i + 1) % ring_size;

            if ascending {
                mesh.add_face(current, next, above_next);
                mesh.add_face(current, above_next, above);
            } else {
                mesh.add_face(current, above, above_next);
                mesh.add_face(current, above_next, next);
            }
        }
    }
}
