//! Quadric surface primitives: ellipsoid, sphere, hemisphere

use glam::Vec3;
use std::f32::consts::PI;
use tracing::warn;

use crate::mesh::types::Mesh;

/// Clamp per-axis radii to be non-negative, warning once per bad component.
fn sanitize_radii(name: &str, radii: Vec3) -> Vec3 {
    if radii.min_element() < 0.0 {
        warn!("{name}: radii must be >= 0.0, clamping to 0.0");
    }
    radii.max(Vec3::ZERO)
}

/// Generate a UV-tessellated ellipsoid.
///
/// Latitude rings run pole to pole; each of the `lat_segments + 1` rings
/// carries `lon_segments` vertices, so the pole rings collapse to coincident
/// points with distinct indices. Exact counts:
/// `(lat_segments + 1) * lon_segments` vertices and
/// `2 * lat_segments * lon_segments` faces.
///
/// # Arguments
/// * `center` - Ellipsoid center
/// * `radii` - Per-axis radii (x, y, z)
/// * `lat_segments` - Latitude divisions (min 1, max 256)
/// * `lon_segments` - Longitude divisions (min 3, max 256)
pub fn generate_ellipsoid(center: Vec3, radii: Vec3, lat_segments: u32, lon_segments: u32) -> Mesh {
    let radii = sanitize_radii("generate_ellipsoid", radii);
    let lat_segments = lat_segments.clamp(1, 256);
    let lon_segments = lon_segments.clamp(3, 256);

    let mut mesh = Mesh::with_capacity(
        ((lat_segments + 1) * lon_segments) as usize,
        (2 * lat_segments * lon_segments) as usize,
    );

    for lat in 0..=lat_segments {
        let theta = PI * lat as f32 / lat_segments as f32;
        let sin_theta = theta.sin();
        let cos_theta = theta.cos();

        for lon in 0..lon_segments {
            let phi = 2.0 * PI * lon as f32 / lon_segments as f32;
            mesh.add_vertex(Vec3::new(
                center.x + radii.x * sin_theta * phi.cos(),
                center.y + radii.y * sin_theta * phi.sin(),
                center.z + radii.z * cos_theta,
            ));
        }
    }

    super::stitch_rings(&mut mesh, lat_segments, lon_segments, 0, false);

    mesh
}

/// Generate a uniform-radius sphere (convenience over [`generate_ellipsoid`])
pub fn generate_sphere(center: Vec3, radius: f32, lat_segments: u32, lon_segments: u32) -> Mesh {
    generate_ellipsoid(center, Vec3::splat(radius), lat_segments, lon_segments)
}

/// Generate half an ellipsoid (dome shape).
///
/// Same tessellation as [`generate_ellipsoid`] restricted to the upper
/// (`top = true`) or lower half of the latitude range. The equator edge is
/// left open: dome shells are merged against a mating body, never capped.
pub fn generate_hemisphere(
    center: Vec3,
    radii: Vec3,
    lat_segments: u32,
    lon_segments: u32,
    top: bool,
) -> Mesh {
    let radii = sanitize_radii("generate_hemisphere", radii);
    let lat_segments = lat_segments.clamp(2, 256);
    let lon_segments = lon_segments.clamp(3, 256);

    let start_lat = if top { 0 } else { lat_segments / 2 };
    let end_lat = if top {
        lat_segments / 2 + 1
    } else {
        lat_segments + 1
    };

    let mut mesh = Mesh::new();

    for lat in start_lat..end_lat {
        let theta = PI * lat as f32 / lat_segments as f32;
        let sin_theta = theta.sin();
        let cos_theta = theta.cos();

        for lon in 0..lon_segments {
            let phi = 2.0 * PI * lon as f32 / lon_segments as f32;
            mesh.add_vertex(Vec3::new(
                center.x + radii.x * sin_theta * phi.cos(),
                center.y + radii.y * sin_theta * phi.sin(),
                center.z + radii.z * cos_theta,
            ));
        }
    }

    let rows = end_lat - start_lat - 1;
    super::stitch_rings(&mut mesh, rows, lon_segments, 0, false);

    mesh
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::vec3;

    #[test]
    fn test_ellipsoid_counts() {
        for (lat, lon) in [(1, 3), (2, 4), (8, 12), (10, 14), (16, 24)] {
            let mesh = generate_ellipsoid(Vec3::ZERO, Vec3::ONE, lat, lon);
            assert_eq!(mesh.vertex_count() as u32, (lat + 1) * lon);
            assert_eq!(mesh.face_count() as u32, 2 * lat * lon);
            assert!(mesh.indices_valid());
        }
    }

    #[test]
    fn test_unit_sphere_two_rings_four_segments() {
        // 3 rings x 4 = 12 vertices, 2*2*4 = 16 faces.
        let mesh = generate_ellipsoid(Vec3::ZERO, Vec3::ONE, 2, 4);
        assert_eq!(mesh.vertex_count(), 12);
        assert_eq!(mesh.face_count(), 16);

        // Top ring is collapsed at the +Z pole, bottom ring at -Z.
        for i in 0..4 {
            assert!((mesh.vertices[i][2] - 1.0).abs() < 1e-6);
            assert!((mesh.vertices[8 + i][2] + 1.0).abs() < 1e-6);
        }
        // Equator ring sits at z = 0 with unit distance from the axis.
        for i in 4..8 {
            let [x, y, z] = mesh.vertices[i];
            assert!(z.abs() < 1e-6);
            assert!(((x * x + y * y).sqrt() - 1.0).abs() < 1e-5);
        }
    }

    #[test]
    fn test_ellipsoid_respects_center_and_radii() {
        let mesh = generate_ellipsoid(vec3(1.0, 2.0, 3.0), vec3(2.0, 1.0, 0.5), 8, 12);
        for v in &mesh.vertices {
            assert!((v[0] - 1.0).abs() <= 2.0 + 1e-5);
            assert!((v[1] - 2.0).abs() <= 1.0 + 1e-5);
            assert!((v[2] - 3.0).abs() <= 0.5 + 1e-5);
        }
    }

    #[test]
    fn test_hemisphere_counts_and_open_equator() {
        let lat = 8;
        let lon = 12;
        let mesh = generate_hemisphere(Vec3::ZERO, Vec3::ONE, lat, lon, true);

        // Rings 0..=lat/2 inclusive.
        assert_eq!(mesh.vertex_count() as u32, (lat / 2 + 1) * lon);
        assert_eq!(mesh.face_count() as u32, 2 * (lat / 2) * lon);
        assert!(mesh.indices_valid());

        // Top hemisphere stays above (or on) the equator plane.
        for v in &mesh.vertices {
            assert!(v[2] >= -1e-6);
        }
    }

    #[test]
    fn test_bottom_hemisphere_below_equator() {
        let mesh = generate_hemisphere(Vec3::ZERO, Vec3::ONE, 10, 16, false);
        assert!(mesh.indices_valid());
        for v in &mesh.vertices {
            assert!(v[2] <= 1e-6);
        }
    }

    #[test]
    fn test_negative_radius_clamped() {
        let mesh = generate_ellipsoid(Vec3::ZERO, vec3(-1.0, 1.0, 1.0), 4, 6);
        for v in &mesh.vertices {
            assert_eq!(v[0], 0.0);
        }
    }
}
