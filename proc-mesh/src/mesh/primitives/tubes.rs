//! Tube-family primitives: cylinder, cone, tapered tube, tapered body

use glam::Vec3;
use std::f32::consts::PI;
use tracing::warn;

use super::stitch_rings;
use crate::mesh::types::{Axis, Mesh};

/// Generate a cylinder along the given axis.
///
/// Two rings of `segments` vertices at `-height/2` and `+height/2`, a
/// quad-strip wall between them, and optionally a center-vertex fan closing
/// each end.
///
/// # Arguments
/// * `center` - Cylinder center
/// * `radius` - Ring radius (>= 0.0)
/// * `height` - Total height (> 0.0)
/// * `segments` - Radial divisions (min 3, max 256)
/// * `axis` - Primary axis
/// * `caps` - Close both ends with triangle fans
pub fn generate_cylinder(
    center: Vec3,
    radius: f32,
    height: f32,
    segments: u32,
    axis: Axis,
    caps: bool,
) -> Mesh {
    let radius = if radius < 0.0 {
        warn!("generate_cylinder: radius must be >= 0.0, clamping to 0.0");
        0.0
    } else {
        radius
    };
    let height = if height <= 0.0 {
        warn!("generate_cylinder: height must be > 0.0, clamping to 0.001");
        0.001
    } else {
        height
    };
    let segments = segments.clamp(3, 256);

    let mut mesh = Mesh::new();
    let half = height * 0.5;

    // Bottom ring, then top ring
    for along in [-half, half] {
        for i in 0..segments {
            let angle = 2.0 * PI * i as f32 / segments as f32;
            mesh.add_vertex(axis.point(center, radius * angle.cos(), radius * angle.sin(), along));
        }
    }

    stitch_rings(&mut mesh, 1, segments, 0, true);

    if caps {
        let top_center = mesh.add_vertex(axis.point(center, 0.0, 0.0, half));
        let bot_center = mesh.add_vertex(axis.point(center, 0.0, 0.0, -half));

        for i in 0..segments {
            let next = (i + 1) % segments;
            mesh.add_face(top_center, segments + i, segments + next);
            mesh.add_face(bot_center, next, i);
        }
    }

    mesh
}

/// Generate a cone with its base ring at `center` and apex at
/// `center.z + height`.
///
/// `height` may be negative, pointing the apex down the axis (used for
/// rear-facing nozzles).
pub fn generate_cone(center: Vec3, radius: f32, height: f32, segments: u32) -> Mesh {
    let radius = if radius < 0.0 {
        warn!("generate_cone: radius must be >= 0.0, clamping to 0.0");
        0.0
    } else {
        radius
    };
    let segments = segments.clamp(3, 256);

    let mut mesh = Mesh::new();

    let apex = mesh.add_vertex(center + Vec3::new(0.0, 0.0, height));

    for i in 0..segments {
        let angle = 2.0 * PI * i as f32 / segments as f32;
        mesh.add_vertex(center + Vec3::new(radius * angle.cos(), radius * angle.sin(), 0.0));
    }

    for i in 0..segments {
        let current = i + 1;
        let next = (i + 1) % segments + 1;
        mesh.add_face(apex, current, next);
    }

    let base_center = mesh.add_vertex(center);
    for i in 0..segments {
        let current = i + 1;
        let next = (i + 1) % segments + 1;
        mesh.add_face(base_center, next, current);
    }

    mesh
}

/// Generate a tube whose cross-section radius interpolates linearly from
/// `radius_start` to `radius_end` along the axis.
///
/// `segments_len + 1` rings are placed from `-length/2` to `+length/2`
/// around `center`; ring `idx` has radius
/// `radius_start + t * (radius_end - radius_start)` with
/// `t = idx / segments_len`. Ends are open.
pub fn generate_tapered_tube(
    center: Vec3,
    radius_start: f32,
    radius_end: f32,
    length: f32,
    segments_len: u32,
    segments_circ: u32,
    axis: Axis,
) -> Mesh {
    if radius_start < 0.0 || radius_end < 0.0 {
        warn!("generate_tapered_tube: radii must be >= 0.0, clamping to 0.0");
    }
    let radius_start = radius_start.max(0.0);
    let radius_end = radius_end.max(0.0);
    let segments_len = segments_len.clamp(1, 256);
    let segments_circ = segments_circ.clamp(3, 256);

    let mut mesh = Mesh::new();

    for idx in 0..=segments_len {
        let t = idx as f32 / segments_len as f32;
        let along = -length * 0.5 + t * length;
        let radius = radius_start + t * (radius_end - radius_start);

        for c in 0..segments_circ {
            let angle = 2.0 * PI * c as f32 / segments_circ as f32;
            mesh.add_vertex(axis.point(center, radius * angle.cos(), radius * angle.sin(), along));
        }
    }

    stitch_rings(&mut mesh, segments_len, segments_circ, 0, true);

    mesh
}

/// Generate a whale-style body along the Z axis.
///
/// The cross-section radius eases in with a quarter sine over the nose
/// (`t < taper_start`), holds `max_radius` through the middle, and falls
/// off with a scaled quarter cosine toward the tail (`t > taper_end`).
/// The radius never drops below 0.05 so the tail keeps a stub to merge
/// flukes against.
pub fn generate_tapered_body(
    length: f32,
    max_radius: f32,
    taper_start: f32,
    taper_end: f32,
    segments_len: u32,
    segments_circ: u32,
) -> Mesh {
    let segments_len = segments_len.clamp(1, 256);
    let segments_circ = segments_circ.clamp(3, 256);

    let mut mesh = Mesh::new();

    for idx in 0..=segments_len {
        let t = idx as f32 / segments_len as f32;
        let z = -length * 0.5 + t * length;

        let radius = if t < taper_start {
            let local_t = t / taper_start;
            max_radius * (local_t * PI * 0.5).sin()
        } else if t > taper_end {
            let local_t = (t - taper_end) / (1.0 - taper_end);
            // Thin tail
            max_radius * (local_t * PI * 0.5).cos() * 0.3
        } else {
            max_radius
        };
        let radius = radius.max(0.05);

        for c in 0..segments_circ {
            let angle = 2.0 * PI * c as f32 / segments_circ as f32;
            mesh.add_vertex(Vec3::new(radius * angle.cos(), radius * angle.sin(), z));
        }
    }

    stitch_rings(&mut mesh, segments_len, segments_circ, 0, true);

    mesh
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::vec3;

    #[test]
    fn test_cylinder_counts() {
        let segments = 10;
        let capped = generate_cylinder(Vec3::ZERO, 0.5, 2.0, segments, Axis::Z, true);
        assert_eq!(capped.vertex_count() as u32, 2 * segments + 2);
        assert_eq!(capped.face_count() as u32, 4 * segments);
        assert!(capped.indices_valid());

        let open = generate_cylinder(Vec3::ZERO, 0.5, 2.0, segments, Axis::Z, false);
        assert_eq!(open.vertex_count() as u32, 2 * segments);
        assert_eq!(open.face_count() as u32, 2 * segments);
    }

    #[test]
    fn test_cylinder_axis_orientation() {
        let mesh = generate_cylinder(vec3(1.0, 2.0, 3.0), 0.5, 2.0, 8, Axis::X, false);
        for v in &mesh.vertices {
            // Rings lie at x = center.x +/- height/2.
            assert!((v[0] - 1.0).abs() > 0.99 && (v[0] - 1.0).abs() < 1.01);
            let dy = v[1] - 2.0;
            let dz = v[2] - 3.0;
            assert!(((dy * dy + dz * dz).sqrt() - 0.5).abs() < 1e-5);
        }
    }

    #[test]
    fn test_cone_counts_and_negative_height() {
        let mesh = generate_cone(Vec3::ZERO, 0.25, -0.3, 12);
        assert_eq!(mesh.vertex_count(), 14);
        assert_eq!(mesh.face_count(), 24);
        assert!(mesh.indices_valid());
        assert_eq!(mesh.vertices[0], [0.0, 0.0, -0.3]);
    }

    #[test]
    fn test_tapered_tube_boundary_radii() {
        let (r0, r1) = (0.4, 0.1);
        let segments_circ = 8;
        let mesh = generate_tapered_tube(Vec3::ZERO, r0, r1, 2.0, 10, segments_circ, Axis::Z);

        // First ring radius is exactly radius_start, last exactly radius_end.
        for c in 0..segments_circ as usize {
            let [x, y, _] = mesh.vertices[c];
            assert!(((x * x + y * y).sqrt() - r0).abs() < 1e-6);

            let last = mesh.vertex_count() - segments_circ as usize + c;
            let [x, y, _] = mesh.vertices[last];
            assert!(((x * x + y * y).sqrt() - r1).abs() < 1e-6);
        }
        assert!(mesh.indices_valid());
    }

    #[test]
    fn test_tapered_tube_axis_y() {
        let mesh = generate_tapered_tube(vec3(0.0, 1.0, 0.0), 0.2, 0.2, 1.0, 4, 6, Axis::Y);
        for v in &mesh.vertices {
            assert!(v[1] >= 0.5 - 1e-6 && v[1] <= 1.5 + 1e-6);
            assert!(((v[0] * v[0] + v[2] * v[2]).sqrt() - 0.2).abs() < 1e-5);
        }
    }

    #[test]
    fn test_tapered_body_plateau_and_floor() {
        let mesh = generate_tapered_body(10.0, 1.2, 0.15, 0.7, 24, 20);
        assert_eq!(mesh.vertex_count(), 25 * 20);
        assert_eq!(mesh.face_count(), 2 * 24 * 20);
        assert!(mesh.indices_valid());

        for v in &mesh.vertices {
            let r = (v[0] * v[0] + v[1] * v[1]).sqrt();
            assert!(r >= 0.05 - 1e-6);
            assert!(r <= 1.2 + 1e-5);
        }

        // Mid-body rings sit exactly at max_radius.
        let ring = 12 * 20;
        let [x, y, _] = mesh.vertices[ring];
        assert!(((x * x + y * y).sqrt() - 1.2).abs() < 1e-5);
    }
}
