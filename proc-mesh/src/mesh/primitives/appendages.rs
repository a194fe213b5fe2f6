//! Appendage primitives: tentacles, arms, fins, flippers, plume filaments
//!
//! These are the creature-specific generators: cross-section rings placed
//! along a parametric curve with a taper, plus a few thin blade shapes.
//! Wave, curl and taper coefficients are hand-tuned values carried over
//! from the asset set.

use glam::Vec3;
use std::f32::consts::PI;
use tracing::warn;

use super::stitch_rings;
use crate::mesh::merge::merge;
use crate::mesh::types::Mesh;

const TENTACLE_RING: u32 = 6;
const PLUME_RING: u32 = 5;
const PLUME_ROWS: u32 = 8;

/// Generate a wavy tentacle hanging in -Z from `start`.
///
/// Cross-sections taper to 30% of `thickness` at the tip. A sinusoidal
/// lateral offset `wave_amp * sin(t * wave_freq * 2PI)` sweeps the tube,
/// phased per segment so the wave spirals instead of swinging in a plane.
pub fn generate_tentacle(
    start: Vec3,
    length: f32,
    thickness: f32,
    segments: u32,
    wave_amp: f32,
    wave_freq: f32,
) -> Mesh {
    let segments = segments.clamp(1, 256);

    let mut mesh = Mesh::new();

    for seg in 0..=segments {
        let t = seg as f32 / segments as f32;
        let radius = thickness * (1.0 - t * 0.7);

        let z = start.z - t * length;
        let wave = wave_amp * (t * wave_freq * 2.0 * PI).sin();
        let x_offset = wave * (seg as f32 * 0.5).cos();
        let y_offset = wave * (seg as f32 * 0.5).sin();

        for c in 0..TENTACLE_RING {
            let angle = 2.0 * PI * c as f32 / TENTACLE_RING as f32;
            mesh.add_vertex(Vec3::new(
                start.x + x_offset + radius * angle.cos(),
                start.y + y_offset + radius * angle.sin(),
                z,
            ));
        }
    }

    stitch_rings(&mut mesh, segments, TENTACLE_RING, 0, false);

    mesh
}

/// Generate a curling octopus-style arm.
///
/// The arm descends from `start`, bending down by a quadratic curl
/// (`curl_amount * t^2`) while its horizontal anchor spreads outward by
/// `(1 + t * 0.3)`, so arms rooted off-center splay away from the body.
pub fn generate_arm(
    start: Vec3,
    length: f32,
    thickness: f32,
    segments: u32,
    curl_amount: f32,
) -> Mesh {
    let segments = segments.clamp(1, 256);

    let mut mesh = Mesh::new();

    for seg in 0..=segments {
        let t = seg as f32 / segments as f32;
        let radius = thickness * (1.0 - t * 0.6);

        let curl = curl_amount * t * t;
        let z = start.z - t * length * 0.8 - curl * length * 0.3;
        let x_offset = start.x * (1.0 + t * 0.3);
        let y_offset = start.y * (1.0 + t * 0.3);

        for c in 0..TENTACLE_RING {
            let angle = 2.0 * PI * c as f32 / TENTACLE_RING as f32;
            mesh.add_vertex(Vec3::new(
                x_offset + radius * angle.cos(),
                y_offset + radius * angle.sin(),
                z,
            ));
        }
    }

    stitch_rings(&mut mesh, segments, TENTACLE_RING, 0, false);

    mesh
}

/// Generate a feathery plume filament rising in +Z from `start`.
///
/// Used in bundles for tube-worm plumes; `curl_dir` scales and signs the
/// quadratic drift of the filament tip so neighbouring filaments fan out.
pub fn generate_plume_filament(start: Vec3, length: f32, thickness: f32, curl_dir: f32) -> Mesh {
    let mut mesh = Mesh::new();

    for seg in 0..=PLUME_ROWS {
        let t = seg as f32 / PLUME_ROWS as f32;
        let radius = thickness * (1.0 - t * 0.5);
        let curl = 0.03 * t * t * curl_dir;

        let z = start.z + t * length;
        let x = start.x + curl;
        let y = start.y + curl * 0.5;

        for c in 0..PLUME_RING {
            let angle = 2.0 * PI * c as f32 / PLUME_RING as f32;
            mesh.add_vertex(Vec3::new(
                x + radius * angle.cos(),
                y + radius * angle.sin(),
                z,
            ));
        }
    }

    stitch_rings(&mut mesh, PLUME_ROWS, PLUME_RING, 0, true);

    mesh
}

/// Generate a flat oval fin blade lying in the XZ plane.
///
/// Two 8-segment oval rings offset by `thickness` in Y, fan-capped top and
/// bottom, with side-wall quads closing the rim. `angle_y` flattens the
/// oval along X (a cheap foreshortening used for swept-back fins).
pub fn generate_fin(center: Vec3, width: f32, height: f32, thickness: f32, angle_y: f32) -> Mesh {
    const SEGMENTS: u32 = 8;

    if thickness < 0.0 {
        warn!("generate_fin: thickness must be >= 0.0");
    }
    let half = thickness.abs() * 0.5;

    let mut mesh = Mesh::new();

    // Top ring then bottom ring
    for offset in [half, -half] {
        for i in 0..SEGMENTS {
            let angle = 2.0 * PI * i as f32 / SEGMENTS as f32;
            mesh.add_vertex(Vec3::new(
                center.x + width * angle.cos() * angle_y.cos(),
                center.y + offset,
                center.z + height * angle.sin(),
            ));
        }
    }

    let top_center = mesh.add_vertex(Vec3::new(center.x, center.y + half, center.z));
    let bot_center = mesh.add_vertex(Vec3::new(center.x, center.y - half, center.z));

    for i in 0..SEGMENTS {
        let next = (i + 1) % SEGMENTS;
        mesh.add_face(top_center, next, i);
        mesh.add_face(bot_center, i + SEGMENTS, next + SEGMENTS);

        // Rim wall
        mesh.add_face(i, next + SEGMENTS, i + SEGMENTS);
        mesh.add_face(i, next, next + SEGMENTS);
    }

    mesh
}

/// Generate a triangular fin blade.
///
/// Four vertices (base front/back, top, tip) and four faces; the base sits
/// at `center` with the tip extending in local +X before the Y and Z
/// rotations are applied. Small-fish dorsal, anal and tail fins use this.
pub fn generate_tri_fin(
    center: Vec3,
    length: f32,
    height: f32,
    thickness: f32,
    rotation_y: f32,
    rotation_z: f32,
) -> Mesh {
    let points = [
        Vec3::new(0.0, 0.0, thickness * 0.5),
        Vec3::new(0.0, 0.0, -thickness * 0.5),
        Vec3::new(0.0, height, 0.0),
        Vec3::new(length, 0.0, 0.0),
    ];

    let (sin_y, cos_y) = rotation_y.sin_cos();
    let (sin_z, cos_z) = rotation_z.sin_cos();

    let mut mesh = Mesh::new();
    for p in points {
        // Rotate around Y, then Z
        let x1 = p.x * cos_y + p.z * sin_y;
        let z1 = -p.x * sin_y + p.z * cos_y;
        let x2 = x1 * cos_z - p.y * sin_z;
        let y2 = x1 * sin_z + p.y * cos_z;
        mesh.add_vertex(center + Vec3::new(x2, y2, z1));
    }

    mesh.add_face(0, 2, 3);
    mesh.add_face(1, 3, 2);
    mesh.add_face(0, 3, 1);
    mesh.add_face(0, 1, 2);

    mesh
}

/// Generate a whale flipper: a flattened ellipsoid rotated in the XY plane.
///
/// `length` spans X, `width` spans Z and `thickness` Y before `rotation`
/// (radians, about Z) sweeps the blade up or down.
pub fn generate_flipper(
    center: Vec3,
    length: f32,
    width: f32,
    thickness: f32,
    rotation: f32,
) -> Mesh {
    const LAT_SEGS: u32 = 8;
    const LON_SEGS: u32 = 12;

    let (sin_r, cos_r) = rotation.sin_cos();

    let mut mesh = Mesh::new();

    for lat in 0..=LAT_SEGS {
        let theta = PI * lat as f32 / LAT_SEGS as f32;
        let sin_theta = theta.sin();
        let cos_theta = theta.cos();

        for lon in 0..LON_SEGS {
            let phi = 2.0 * PI * lon as f32 / LON_SEGS as f32;
            let x = length * sin_theta * phi.cos();
            let y = thickness * sin_theta * phi.sin();
            let z = width * cos_theta;

            let (x, y) = (x * cos_r - y * sin_r, x * sin_r + y * cos_r);
            mesh.add_vertex(center + Vec3::new(x, y, z));
        }
    }

    stitch_rings(&mut mesh, LAT_SEGS, LON_SEGS, 0, false);

    mesh
}

/// Generate a pair of whale tail flukes.
///
/// Two mirrored flippers at `+/- span/3` from the centerline, swept
/// `+/- PI/6`, merged into one blade pair.
pub fn generate_fluke(center: Vec3, span: f32, chord: f32, thickness: f32) -> Mesh {
    let left = generate_flipper(
        center - Vec3::new(span / 3.0, 0.0, 0.0),
        chord,
        span / 2.5,
        thickness,
        PI / 6.0,
    );
    let right = generate_flipper(
        center + Vec3::new(span / 3.0, 0.0, 0.0),
        chord,
        span / 2.5,
        thickness,
        -PI / 6.0,
    );

    merge(&[&left, &right])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tentacle_counts_and_taper() {
        let segments = 12;
        let thickness = 0.05;
        let mesh = generate_tentacle(Vec3::ZERO, 0.5, thickness, segments, 0.05, 2.0);

        assert_eq!(mesh.vertex_count() as u32, (segments + 1) * TENTACLE_RING);
        assert_eq!(mesh.face_count() as u32, 2 * segments * TENTACLE_RING);
        assert!(mesh.indices_valid());

        // Tip ring radius is 30% of the base thickness.
        let tip_base = (segments * TENTACLE_RING) as usize;
        let tip = &mesh.vertices[tip_base..];
        let cx = tip.iter().map(|v| v[0]).sum::<f32>() / TENTACLE_RING as f32;
        let cy = tip.iter().map(|v| v[1]).sum::<f32>() / TENTACLE_RING as f32;
        let r = ((tip[0][0] - cx).powi(2) + (tip[0][1] - cy).powi(2)).sqrt();
        assert!((r - thickness * 0.3).abs() < 1e-5);
    }

    #[test]
    fn test_tentacle_reaches_length() {
        let mesh = generate_tentacle(Vec3::new(0.0, 0.0, 1.0), 0.5, 0.02, 8, 0.0, 1.0);
        let min_z = mesh.vertices.iter().map(|v| v[2]).fold(f32::MAX, f32::min);
        assert!((min_z - 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_arm_curls_below_start() {
        let start = Vec3::new(0.1, 0.0, -0.1);
        let mesh = generate_arm(start, 0.3, 0.03, 10, 0.4);
        assert!(mesh.indices_valid());

        // Tip ring: z = start.z - length*0.8 - curl*length*0.3 at t=1.
        let expected = -0.1 - 0.3 * 0.8 - 0.4 * 0.3 * 0.3;
        let tip_base = (10 * TENTACLE_RING) as usize;
        for v in &mesh.vertices[tip_base..] {
            assert!((v[2] - expected).abs() < 1e-5);
        }

        // Horizontal anchor spreads outward from the body axis.
        let tip_cx = mesh.vertices[tip_base..]
            .iter()
            .map(|v| v[0])
            .sum::<f32>()
            / TENTACLE_RING as f32;
        assert!((tip_cx - 0.13).abs() < 1e-5);
    }

    #[test]
    fn test_plume_filament_rises() {
        let mesh = generate_plume_filament(Vec3::ZERO, 0.12, 0.008, 1.0);
        assert_eq!(mesh.vertex_count() as u32, (PLUME_ROWS + 1) * PLUME_RING);
        assert!(mesh.indices_valid());
        let max_z = mesh.vertices.iter().map(|v| v[2]).fold(f32::MIN, f32::max);
        assert!((max_z - 0.12).abs() < 1e-6);
    }

    #[test]
    fn test_fin_counts() {
        let mesh = generate_fin(Vec3::ZERO, 0.2, 0.1, 0.02, 0.0);
        // 2 rings of 8, plus 2 fan centers; 2 fans + 2 wall triangles per segment.
        assert_eq!(mesh.vertex_count(), 18);
        assert_eq!(mesh.face_count(), 32);
        assert!(mesh.indices_valid());
    }

    #[test]
    fn test_tri_fin_shape() {
        let mesh = generate_tri_fin(Vec3::ZERO, 0.12, 0.08, 0.01, 0.0, 0.0);
        assert_eq!(mesh.vertex_count(), 4);
        assert_eq!(mesh.face_count(), 4);
        assert_eq!(mesh.vertices[2], [0.0, 0.08, 0.0]);
        assert_eq!(mesh.vertices[3], [0.12, 0.0, 0.0]);
    }

    #[test]
    fn test_fluke_is_two_flippers() {
        let one = generate_flipper(Vec3::ZERO, 0.8, 1.4, 0.12, PI / 6.0);
        let fluke = generate_fluke(Vec3::ZERO, 3.5, 0.8, 0.12);
        assert_eq!(fluke.vertex_count(), 2 * one.vertex_count());
        assert_eq!(fluke.face_count(), 2 * one.face_count());
        assert!(fluke.indices_valid());
    }
}
