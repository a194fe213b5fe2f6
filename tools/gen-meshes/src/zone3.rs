//! Zone 3 (Midnight Abyss) creatures: 1000-4000m, no light
//!
//! - anglerfish: lure-bearing ambush predator
//! - gulper_eel: enormous hinged mouth, whip tail
//! - dumbo_octopus: ear-finned octopus with webbed arms
//! - vampire_squid: cloak webbing, cirri, sensory filaments

use anyhow::Result;
use glam::{vec3, Vec3};
use std::f32::consts::PI;
use std::path::Path;

use proc_mesh::mesh::*;
use proc_mesh::style::StyleTokens;

use crate::mesh_helpers::write_mesh;

/// Anglerfish: bulbous body, toothed jaws, glowing esca on an illicium stalk
pub fn anglerfish(tokens: &StyleTokens) -> Mesh {
    let d = tokens.detail;

    let mut parts = vec![
        generate_ellipsoid(
            Vec3::ZERO,
            vec3(0.2, 0.18, 0.25),
            d.segments(10),
            d.segments(14),
        ),
        // Massive head and hinged lower jaw
        generate_ellipsoid(vec3(0.0, 0.02, 0.22), vec3(0.18, 0.16, 0.15), 8, 12),
        generate_ellipsoid(vec3(0.0, -0.08, 0.25), vec3(0.14, 0.08, 0.12), 6, 10),
    ];

    // Curved rows of needle teeth, upper then lower
    let num_upper = 8;
    for i in 0..num_upper {
        let angle = PI * 0.3 + PI * 0.4 * i as f32 / (num_upper - 1) as f32;
        parts.push(generate_cylinder(
            vec3(0.12 * angle.cos(), -0.02, 0.32 + 0.04 * angle.sin()),
            0.01,
            0.04,
            4,
            Axis::Y,
            true,
        ));
    }
    for i in 0..6 {
        let angle = PI * 0.35 + PI * 0.3 * i as f32 / 5.0;
        parts.push(generate_cylinder(
            vec3(0.1 * angle.cos(), -0.12, 0.3 + 0.03 * angle.sin()),
            0.008,
            0.03,
            4,
            Axis::Y,
            true,
        ));
    }

    // Illicium (the fishing-rod spine) and esca (the glowing lure)
    parts.push(generate_cylinder(
        vec3(0.0, 0.12, 0.2),
        0.012,
        0.2,
        6,
        Axis::Y,
        true,
    ));
    parts.push(generate_ellipsoid(
        vec3(0.0, 0.35, 0.22),
        vec3(0.035, 0.04, 0.035),
        6,
        8,
    ));

    // Tiny eyes; anglerfish hunt by lure, not sight
    parts.push(generate_ellipsoid(
        vec3(-0.12, 0.08, 0.25),
        vec3(0.025, 0.02, 0.02),
        4,
        6,
    ));
    parts.push(generate_ellipsoid(
        vec3(0.12, 0.08, 0.25),
        vec3(0.025, 0.02, 0.02),
        4,
        6,
    ));

    // Arm-like pectoral fins, then dorsal and anal fins set far back
    parts.push(generate_tri_fin(
        vec3(-0.18, -0.05, 0.0),
        0.08,
        0.04,
        0.015,
        PI / 2.5,
        PI / 4.0,
    ));
    parts.push(generate_tri_fin(
        vec3(0.18, -0.05, 0.0),
        0.08,
        0.04,
        0.015,
        -PI / 2.5,
        -PI / 4.0,
    ));
    parts.push(generate_tri_fin(vec3(0.0, 0.15, -0.1), 0.06, 0.04, 0.01, 0.0, 0.0));
    parts.push(generate_tri_fin(
        vec3(0.0, -0.15, -0.1),
        0.05,
        -0.03,
        0.008,
        0.0,
        PI,
    ));

    // Small rounded tail
    parts.push(generate_ellipsoid(
        vec3(0.0, 0.0, -0.28),
        vec3(0.06, 0.08, 0.06),
        6,
        8,
    ));

    let refs: Vec<&Mesh> = parts.iter().collect();
    merge(&refs)
}

/// Gulper eel: expandable jaw pouches and a dramatically tapering body
pub fn gulper_eel(tokens: &StyleTokens) -> Mesh {
    let d = tokens.detail;

    let mut parts = vec![
        // The enormous mouth pouches are the defining feature
        generate_ellipsoid(
            vec3(0.0, 0.1, 0.2),
            vec3(0.25, 0.15, 0.25),
            d.segments(10),
            d.segments(14),
        ),
        generate_ellipsoid(
            vec3(0.0, -0.15, 0.15),
            vec3(0.3, 0.25, 0.3),
            d.segments(10),
            d.segments(14),
        ),
        generate_ellipsoid(vec3(0.0, 0.05, -0.05), vec3(0.12, 0.1, 0.15), 8, 10),
        // Tiny eyes near the jaw hinge
        generate_ellipsoid(vec3(-0.1, 0.15, 0.05), vec3(0.015, 0.015, 0.012), 4, 5),
        generate_ellipsoid(vec3(0.1, 0.15, 0.05), vec3(0.015, 0.015, 0.012), 4, 5),
    ];

    // Whip body: overlapping segments tapering dramatically
    let body_segments = [
        (-0.15, 0.1, 0.08),
        (-0.4, 0.07, 0.06),
        (-0.7, 0.05, 0.04),
        (-1.0, 0.035, 0.03),
        (-1.3, 0.025, 0.02),
        (-1.6, 0.015, 0.012),
    ];
    for (cz, rx, ry) in body_segments {
        parts.push(generate_ellipsoid(
            vec3(0.0, 0.0, cz),
            vec3(rx, ry, 0.15),
            6,
            8,
        ));
    }

    // Final ultra-thin whip and bioluminescent tail organ
    parts.push(generate_tapered_tube(
        vec3(0.0, 0.0, -1.85),
        0.012,
        0.003,
        0.4,
        10,
        6,
        Axis::Z,
    ));
    parts.push(generate_ellipsoid(
        vec3(0.0, 0.0, -2.1),
        vec3(0.02, 0.02, 0.025),
        5,
        6,
    ));

    // Low dorsal fin running along the body
    for i in 0..5 {
        let i_f = i as f32;
        parts.push(generate_ellipsoid(
            vec3(0.0, 0.08 - i_f * 0.01, -0.2 - i_f * 0.25),
            vec3(0.01, 0.04 - i_f * 0.005, 0.06),
            4,
            5,
        ));
    }

    // Tiny pectoral fins
    parts.push(generate_ellipsoid(
        vec3(-0.12, 0.0, -0.1),
        vec3(0.05, 0.015, 0.03),
        4,
        5,
    ));
    parts.push(generate_ellipsoid(
        vec3(0.12, 0.0, -0.1),
        vec3(0.05, 0.015, 0.03),
        4,
        5,
    ));

    let refs: Vec<&Mesh> = parts.iter().collect();
    merge(&refs)
}

/// Dumbo octopus: bell mantle, ear fins, eight webbed stubby arms
pub fn dumbo_octopus(tokens: &StyleTokens) -> Mesh {
    let d = tokens.detail;
    let bias = tokens.curvature_bias;

    let mut parts = vec![
        generate_ellipsoid(
            vec3(0.0, 0.0, 0.15),
            vec3(0.2, 0.18, 0.25),
            d.segments(10),
            d.segments(14),
        ),
        generate_ellipsoid(vec3(0.0, 0.0, -0.08), vec3(0.18, 0.16, 0.12), 8, 12),
        // The namesake ear fins
        generate_ellipsoid(vec3(-0.28, 0.05, 0.1), vec3(0.12, 0.03, 0.15), 6, 8),
        generate_ellipsoid(vec3(0.28, 0.05, 0.1), vec3(0.12, 0.03, 0.15), 6, 8),
        // Large eyes with pupils
        generate_ellipsoid(vec3(-0.1, 0.08, -0.05), vec3(0.05, 0.05, 0.04), 6, 8),
        generate_ellipsoid(vec3(0.1, 0.08, -0.05), vec3(0.05, 0.05, 0.04), 6, 8),
        generate_ellipsoid(vec3(-0.1, 0.12, -0.05), vec3(0.025, 0.025, 0.02), 4, 5),
        generate_ellipsoid(vec3(0.1, 0.12, -0.05), vec3(0.025, 0.025, 0.02), 4, 5),
    ];

    // Eight short arms
    for i in 0..8 {
        let angle = i as f32 * PI / 4.0;
        parts.push(generate_arm(
            vec3(0.12 * angle.cos(), 0.12 * angle.sin(), -0.15),
            0.25,
            0.03,
            8,
            0.4 * bias,
        ));
    }

    // Webbing between the arms, a flaring skirt
    parts.push(generate_tapered_tube(
        vec3(0.0, 0.0, -0.22),
        0.15,
        0.22,
        0.12,
        4,
        16,
        Axis::Z,
    ));

    // Siphon underneath
    parts.push(generate_cylinder(
        vec3(0.0, -0.12, -0.05),
        0.025,
        0.06,
        6,
        Axis::Z,
        true,
    ));

    let refs: Vec<&Mesh> = parts.iter().collect();
    merge(&refs)
}

/// Vampire squid: cloak webbing, cirri spines, filaments, photophores
pub fn vampire_squid(tokens: &StyleTokens) -> Mesh {
    let d = tokens.detail;
    let bias = tokens.curvature_bias;

    let mut parts = vec![
        generate_ellipsoid(
            vec3(0.0, 0.0, 0.1),
            vec3(0.18, 0.15, 0.22),
            d.segments(10),
            d.segments(14),
        ),
        generate_ellipsoid(vec3(0.0, 0.0, -0.1), vec3(0.16, 0.14, 0.1), 8, 12),
        // Proportionally huge eyes
        generate_ellipsoid(vec3(-0.12, 0.06, -0.08), vec3(0.06, 0.06, 0.05), 6, 8),
        generate_ellipsoid(vec3(0.12, 0.06, -0.08), vec3(0.06, 0.06, 0.05), 6, 8),
        // Small mantle fins
        generate_ellipsoid(vec3(-0.22, 0.02, 0.05), vec3(0.08, 0.02, 0.1), 5, 6),
        generate_ellipsoid(vec3(0.22, 0.02, 0.05), vec3(0.08, 0.02, 0.1), 5, 6),
    ];

    // Eight arms, each with four cirri spines along it
    for i in 0..8 {
        let angle = i as f32 * PI / 4.0;
        let ax = 0.1 * angle.cos();
        let ay = 0.1 * angle.sin();
        parts.push(generate_arm(
            vec3(ax, ay, -0.18),
            0.35,
            0.025,
            10,
            0.3 * bias,
        ));

        for j in 0..4 {
            let t = (j + 1) as f32 / 5.0;
            parts.push(generate_tapered_tube(
                vec3(ax * (1.0 + t * 0.3), ay * (1.0 + t * 0.3), -0.18 - t * 0.28),
                0.008,
                0.002,
                0.04,
                3,
                4,
                Axis::Z,
            ));
        }
    }

    // The cloak: a large membrane flaring between the arms
    parts.push(generate_tapered_tube(
        vec3(0.0, 0.0, -0.28),
        0.12,
        0.28,
        0.2,
        5,
        16,
        Axis::Z,
    ));

    // Two retractable sensory filaments
    parts.push(generate_tentacle(
        vec3(-0.08, 0.08, -0.15),
        0.5,
        0.008,
        12,
        0.03 * bias,
        1.0,
    ));
    parts.push(generate_tentacle(
        vec3(0.08, 0.08, -0.15),
        0.5,
        0.008,
        12,
        0.03 * bias,
        1.0,
    ));

    // Photophores on the body and arm tips
    let photophores = [
        (0.0, 0.15, 0.05),
        (-0.1, 0.12, 0.0),
        (0.1, 0.12, 0.0),
        (0.0, 0.14, -0.05),
        (-0.15, -0.15, -0.45),
        (0.15, -0.15, -0.45),
        (0.0, -0.2, -0.45),
        (-0.18, 0.0, -0.4),
        (0.18, 0.0, -0.4),
    ];
    for (px, py, pz) in photophores {
        parts.push(generate_ellipsoid(
            vec3(px, py, pz),
            vec3(0.012, 0.012, 0.01),
            4,
            5,
        ));
    }

    let refs: Vec<&Mesh> = parts.iter().collect();
    merge(&refs)
}

/// Generate and write every Zone 3 creature
pub fn generate_all(tokens: &StyleTokens, output_dir: &Path) -> Result<()> {
    write_mesh(&anglerfish(tokens), "anglerfish", output_dir)?;
    write_mesh(&gulper_eel(tokens), "gulper_eel", output_dir)?;
    write_mesh(&dumbo_octopus(tokens), "dumbo_octopus", output_dir)?;
    write_mesh(&vampire_squid(tokens), "vampire_squid", output_dir)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zone3_creatures_are_valid() {
        let tokens = StyleTokens::default();
        for mesh in [
            anglerfish(&tokens),
            gulper_eel(&tokens),
            dumbo_octopus(&tokens),
            vampire_squid(&tokens),
        ] {
            assert!(mesh.vertex_count() > 0);
            assert!(mesh.indices_valid());
        }
    }

    #[test]
    fn test_anglerfish_esca_tops_the_silhouette() {
        let mesh = anglerfish(&StyleTokens::default());

        // Lure bulb at y 0.35 plus its 0.04 radius is the highest point,
        // above the illicium tip and the dorsal fin.
        let max_y = mesh.vertices.iter().map(|v| v[1]).fold(f32::MIN, f32::max);
        assert!((max_y - 0.39).abs() < 1e-5);
    }

    #[test]
    fn test_anglerfish_tooth_rows() {
        // Body 154 + head 108 + jaw 70 + 14 teeth of 10 + illicium 14 +
        // esca 56 + eyes 60 + four fins 16 + tail 56.
        let mesh = anglerfish(&StyleTokens::default());
        assert_eq!(mesh.vertex_count(), 674);
    }

    #[test]
    fn test_gulper_eel_tail_extends_far() {
        let mesh = gulper_eel(&StyleTokens::default());
        let min_z = mesh.vertices.iter().map(|v| v[2]).fold(f32::MAX, f32::min);
        assert!(min_z < -2.0);
    }
}
