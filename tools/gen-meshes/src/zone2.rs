//! Zone 2 (Twilight Realm) creatures: 200-1000m, bioluminescent
//!
//! - moon_jelly: bell jellyfish with trailing tentacles
//! - lanternfish: small fish with photophore rows
//! - siphonophore: colonial chain organism
//! - giant_squid: mantle, fins, eight arms, two feeding tentacles

use anyhow::Result;
use glam::{vec3, Vec3};
use std::f32::consts::PI;
use std::path::Path;

use proc_mesh::mesh::*;
use proc_mesh::style::StyleTokens;

use crate::mesh_helpers::write_mesh;

/// Moon jellyfish: double-walled bell, clover gonads, 24 marginal tentacles
pub fn moon_jelly(tokens: &StyleTokens) -> Mesh {
    let d = tokens.detail;

    // Bell dome with a slightly smaller inner wall for thickness
    let mut parts = vec![
        generate_hemisphere(
            Vec3::ZERO,
            vec3(0.4, 0.25, 0.4),
            d.segments(12),
            d.segments(16),
            true,
        ),
        generate_hemisphere(vec3(0.0, -0.02, 0.0), vec3(0.35, 0.2, 0.35), 10, 14, true),
    ];

    // Four-leaf clover gonad pattern showing through the bell
    for (gx, gy, gz) in [
        (0.12, -0.08, 0.12),
        (-0.12, -0.08, 0.12),
        (0.12, -0.08, -0.12),
        (-0.12, -0.08, -0.12),
    ] {
        parts.push(generate_ellipsoid(
            vec3(gx, gy, gz),
            vec3(0.08, 0.03, 0.08),
            6,
            8,
        ));
    }

    // Oral arms hanging from the bell center
    for i in 0..4 {
        let angle = i as f32 * PI / 2.0;
        parts.push(generate_cylinder(
            vec3(0.05 * angle.cos(), -0.35, 0.05 * angle.sin()),
            0.02,
            0.25,
            6,
            Axis::Y,
            true,
        ));
    }

    // Marginal tentacles around the bell edge
    let num_tentacles = 24;
    for i in 0..num_tentacles {
        let angle = 2.0 * PI * i as f32 / num_tentacles as f32;
        parts.push(generate_cylinder(
            vec3(0.38 * angle.cos(), -0.2, 0.38 * angle.sin()),
            0.008,
            0.15,
            4,
            Axis::Y,
            true,
        ));
    }

    let refs: Vec<&Mesh> = parts.iter().collect();
    merge(&refs)
}

/// Lanternfish: compressed body, oversized eyes, photophore rows
pub fn lanternfish(tokens: &StyleTokens) -> Mesh {
    let d = tokens.detail;

    let mut parts = vec![
        generate_ellipsoid(
            Vec3::ZERO,
            vec3(0.08, 0.05, 0.2),
            d.segments(8),
            d.segments(12),
        ),
        generate_ellipsoid(vec3(0.0, 0.01, 0.18), vec3(0.06, 0.05, 0.08), 6, 8),
        // Large eyes, characteristic of the species
        generate_ellipsoid(vec3(-0.05, 0.02, 0.2), vec3(0.025, 0.025, 0.02), 5, 6),
        generate_ellipsoid(vec3(0.05, 0.02, 0.2), vec3(0.025, 0.025, 0.02), 5, 6),
        // Dorsal, anal and fleshy adipose fins
        generate_tri_fin(vec3(0.0, 0.05, 0.0), 0.08, 0.04, 0.008, 0.0, 0.0),
        generate_tri_fin(vec3(0.0, -0.05, -0.05), 0.06, -0.03, 0.006, 0.0, PI),
        generate_ellipsoid(vec3(0.0, 0.04, -0.12), vec3(0.015, 0.02, 0.025), 4, 6),
        // Pectoral fins
        generate_tri_fin(vec3(-0.06, 0.0, 0.1), 0.05, 0.025, 0.004, PI / 3.0, PI / 6.0),
        generate_tri_fin(vec3(0.06, 0.0, 0.1), 0.05, 0.025, 0.004, -PI / 3.0, -PI / 6.0),
        // Forked tail
        generate_tri_fin(vec3(0.0, 0.015, -0.22), 0.06, 0.04, 0.004, PI, -PI / 6.0),
        generate_tri_fin(vec3(0.0, -0.015, -0.22), 0.06, -0.04, 0.004, PI, PI / 6.0),
    ];

    // Ventral photophore series along the belly
    let photophores = [
        (0.0, -0.04, 0.12),
        (0.0, -0.045, 0.06),
        (0.0, -0.045, 0.0),
        (0.0, -0.04, -0.06),
        (0.0, -0.035, -0.1),
    ];
    for (px, py, pz) in photophores {
        parts.push(generate_ellipsoid(
            vec3(px, py, pz),
            vec3(0.012, 0.008, 0.012),
            4,
            6,
        ));
    }

    // Lateral photophores in mirrored pairs
    for i in 0..4 {
        let offset = 0.1 - i as f32 * 0.06;
        for side in [-1.0f32, 1.0] {
            parts.push(generate_ellipsoid(
                vec3(side * 0.055, 0.0, offset),
                vec3(0.008, 0.006, 0.008),
                4,
                5,
            ));
        }
    }

    let refs: Vec<&Mesh> = parts.iter().collect();
    merge(&refs)
}

/// Siphonophore: float, swimming bells, and a long chain of polyps
pub fn siphonophore(tokens: &StyleTokens) -> Mesh {
    let d = tokens.detail;
    let bias = tokens.curvature_bias;

    let mut parts = Vec::new();

    // Pneumatophore (float at top)
    parts.push(generate_ellipsoid(
        vec3(0.0, 0.0, 0.5),
        vec3(0.08, 0.06, 0.12),
        d.segments(8),
        d.segments(10),
    ));

    // Nectosome: swimming bells below the float
    for i in 0..4 {
        let z = 0.35 - i as f32 * 0.1;
        parts.push(generate_hemisphere(
            vec3(0.0, 0.0, z),
            vec3(0.06, 0.06, 0.05),
            6,
            8,
            true,
        ));
    }

    // Siphosome stem
    parts.push(generate_cylinder(
        vec3(0.0, 0.0, -0.2),
        0.015,
        1.0,
        6,
        Axis::Z,
        true,
    ));

    // Gastrozooids (feeding polyps) with a tentacle each
    for gz in [-0.1, -0.25, -0.4, -0.55, -0.7] {
        parts.push(generate_ellipsoid(
            vec3(0.03, 0.0, gz),
            vec3(0.025, 0.02, 0.04),
            5,
            6,
        ));
        parts.push(generate_tentacle(
            vec3(0.05, 0.0, gz),
            0.15,
            0.008,
            8,
            0.03 * bias,
            2.0,
        ));
    }

    // Gonophores (reproductive units)
    for gz in [-0.17, -0.32, -0.47, -0.62] {
        parts.push(generate_ellipsoid(
            vec3(-0.025, 0.0, gz),
            vec3(0.02, 0.015, 0.025),
            5,
            6,
        ));
    }

    // Bracts (protective structures)
    for bz in [-0.05, -0.2, -0.35, -0.5, -0.65] {
        parts.push(generate_ellipsoid(
            vec3(0.0, 0.025, bz),
            vec3(0.03, 0.02, 0.03),
            4,
            6,
        ));
    }

    let refs: Vec<&Mesh> = parts.iter().collect();
    merge(&refs)
}

/// Giant squid: large mantle, rear fins, eight arms, two long tentacles
pub fn giant_squid(tokens: &StyleTokens) -> Mesh {
    let d = tokens.detail;
    let bias = tokens.curvature_bias;

    let mut parts = vec![
        generate_ellipsoid(
            Vec3::ZERO,
            vec3(0.25, 0.2, 0.7),
            d.segments(12),
            d.segments(16),
        ),
        // Diamond-shaped fins at the rear of the mantle
        generate_ellipsoid(vec3(-0.35, 0.0, -0.4), vec3(0.2, 0.02, 0.25), 6, 10),
        generate_ellipsoid(vec3(0.35, 0.0, -0.4), vec3(0.2, 0.02, 0.25), 6, 10),
        generate_ellipsoid(vec3(0.0, 0.0, 0.75), vec3(0.18, 0.15, 0.15), 8, 12),
        // Very large eyes
        generate_ellipsoid(vec3(-0.15, 0.05, 0.75), vec3(0.08, 0.08, 0.06), 6, 8),
        generate_ellipsoid(vec3(0.15, 0.05, 0.75), vec3(0.08, 0.08, 0.06), 6, 8),
    ];

    // Eight arms around the mouth, alternating lengths
    for i in 0..8 {
        let angle = i as f32 * PI / 4.0;
        let arm_length = 0.5 + (i % 2) as f32 * 0.1;
        parts.push(generate_tentacle(
            vec3(0.1 * angle.cos(), 0.1 * angle.sin(), 0.85),
            arm_length,
            0.03,
            10,
            0.04 * bias,
            1.5,
        ));
    }

    // Two long feeding tentacles with clubs
    for side in [-1.0f32, 1.0] {
        let tx = side * 0.12;
        parts.push(generate_tentacle(
            vec3(tx, 0.0, 0.85),
            1.2,
            0.025,
            16,
            0.08 * bias,
            2.5,
        ));
        parts.push(generate_ellipsoid(
            vec3(tx + side * 0.1, 0.0, 0.85 - 1.2),
            vec3(0.05, 0.03, 0.08),
            5,
            6,
        ));
    }

    // Siphon (jet propulsion)
    parts.push(generate_cylinder(
        vec3(0.0, -0.15, 0.6),
        0.05,
        0.15,
        8,
        Axis::Z,
        true,
    ));

    let refs: Vec<&Mesh> = parts.iter().collect();
    merge(&refs)
}

/// Generate and write every Zone 2 creature
pub fn generate_all(tokens: &StyleTokens, output_dir: &Path) -> Result<()> {
    write_mesh(&moon_jelly(tokens), "moon_jelly", output_dir)?;
    write_mesh(&lanternfish(tokens), "lanternfish", output_dir)?;
    write_mesh(&siphonophore(tokens), "siphonophore", output_dir)?;
    write_mesh(&giant_squid(tokens), "giant_squid", output_dir)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zone2_creatures_are_valid() {
        let tokens = StyleTokens::default();
        for mesh in [
            moon_jelly(&tokens),
            lanternfish(&tokens),
            siphonophore(&tokens),
            giant_squid(&tokens),
        ] {
            assert!(mesh.vertex_count() > 0);
            assert!(mesh.indices_valid());
        }
    }

    #[test]
    fn test_moon_jelly_bell_and_fringe() {
        let mesh = moon_jelly(&StyleTokens::default());

        // Bell dome peaks at the 0.4 vertical radius.
        let max_z = mesh.vertices.iter().map(|v| v[2]).fold(f32::MIN, f32::max);
        assert!((max_z - 0.4).abs() < 1e-5);

        // Oral arms hang from y -0.35 down half their 0.25 height.
        let min_y = mesh.vertices.iter().map(|v| v[1]).fold(f32::MAX, f32::min);
        assert!((min_y + 0.475).abs() < 1e-5);
    }

    #[test]
    fn test_lanternfish_photophore_belly() {
        let mesh = lanternfish(&StyleTokens::default());

        // The deepest point is a ventral photophore at y -0.045 minus its
        // 0.008 radius, below the 0.05 body radius.
        let min_y = mesh.vertices.iter().map(|v| v[1]).fold(f32::MAX, f32::min);
        assert!((min_y + 0.053).abs() < 1e-5);
    }
}
