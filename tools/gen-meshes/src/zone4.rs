//! Zone 4 (Hydrothermal Vents) creatures: 4000-5000m, volcanic warmth
//!
//! - tube_worms: chemosynthetic worm cluster with red plumes
//! - vent_shrimp: eyeless shrimp with a dorsal heat-sensing organ
//! - ghost_fish: pale eelpout-like vent fish
//! - vent_octopus: heat-tolerant octopus with webbed arms

use anyhow::Result;
use glam::{vec3, Vec3};
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use std::f32::consts::PI;
use std::path::Path;

use proc_mesh::mesh::*;
use proc_mesh::style::StyleTokens;

use crate::mesh_helpers::write_mesh;

/// Fixed seed so the worm cluster is identical across runs
const TUBE_WORM_SEED: u64 = 42;

/// Tube worms: a seeded cluster of eight chitinous tubes with red plumes,
/// rooted in a basalt substrate mound
pub fn tube_worms(tokens: &StyleTokens) -> Mesh {
    let d = tokens.detail;
    let mut rng = Pcg32::seed_from_u64(TUBE_WORM_SEED);

    let mut parts = Vec::new();

    let num_worms = 8;
    for i in 0..num_worms {
        // Jittered placement within the cluster
        let angle = 2.0 * PI * i as f32 / num_worms as f32 + rng.random_range(-0.3..0.3);
        let radius = rng.random_range(0.05..0.2);
        let wx = radius * angle.cos();
        let wz = radius * angle.sin();

        let tube_height = rng.random_range(0.4..0.8);
        let tube_radius = rng.random_range(0.025..0.04);

        // White chitinous tube with a slightly wider rim at the opening
        parts.push(generate_cylinder(
            vec3(wx, tube_height / 2.0, wz),
            tube_radius,
            tube_height,
            d.segments(8),
            Axis::Y,
            true,
        ));
        parts.push(generate_cylinder(
            vec3(wx, tube_height, wz),
            tube_radius * 1.2,
            0.02,
            d.segments(8),
            Axis::Y,
            true,
        ));

        // Red plume: a gill core ringed by radiating filaments
        let plume_y = tube_height + 0.02;
        parts.push(generate_hemisphere(
            vec3(wx, plume_y, wz),
            vec3(tube_radius * 1.5, tube_radius * 2.0, tube_radius * 1.5),
            6,
            8,
            true,
        ));

        let num_filaments = 12;
        for j in 0..num_filaments {
            let f_angle = 2.0 * PI * j as f32 / num_filaments as f32;
            let f_radius = tube_radius * 0.8;
            parts.push(generate_cylinder(
                vec3(
                    wx + f_radius * f_angle.cos(),
                    plume_y + 0.03,
                    wz + f_radius * f_angle.sin(),
                ),
                0.005,
                0.06,
                4,
                Axis::Y,
                true,
            ));
        }
    }

    // Basalt substrate the cluster grows from
    parts.push(generate_ellipsoid(
        vec3(0.0, -0.05, 0.0),
        vec3(0.35, 0.08, 0.35),
        6,
        10,
    ));

    let refs: Vec<&Mesh> = parts.iter().collect();
    merge(&refs)
}

/// Vent shrimp: carapace, curled segmented abdomen, long antennae, no eyes
pub fn vent_shrimp(tokens: &StyleTokens) -> Mesh {
    let d = tokens.detail;
    let bias = tokens.curvature_bias;

    let mut parts = vec![generate_ellipsoid(
        Vec3::ZERO,
        vec3(0.06, 0.04, 0.12),
        d.segments(8),
        d.segments(10),
    )];

    // Abdomen curling downward
    let abdomen_segments = [
        (0.0, -0.01, -0.1, 0.04, 0.035, 0.04),
        (0.0, -0.025, -0.14, 0.035, 0.03, 0.03),
        (0.0, -0.04, -0.17, 0.03, 0.025, 0.025),
        (0.0, -0.055, -0.195, 0.025, 0.02, 0.02),
        (0.0, -0.07, -0.215, 0.02, 0.015, 0.018),
    ];
    for (sx, sy, sz, rx, ry, rz) in abdomen_segments {
        parts.push(generate_ellipsoid(vec3(sx, sy, sz), vec3(rx, ry, rz), 5, 6));
    }

    // Tail fan: telson and uropods
    parts.push(generate_ellipsoid(
        vec3(0.0, -0.08, -0.24),
        vec3(0.025, 0.008, 0.03),
        4,
        6,
    ));
    parts.push(generate_ellipsoid(
        vec3(-0.025, -0.075, -0.235),
        vec3(0.02, 0.006, 0.025),
        4,
        5,
    ));
    parts.push(generate_ellipsoid(
        vec3(0.025, -0.075, -0.235),
        vec3(0.02, 0.006, 0.025),
        4,
        5,
    ));

    // Head and pointed rostrum
    parts.push(generate_ellipsoid(
        vec3(0.0, 0.01, 0.1),
        vec3(0.04, 0.035, 0.04),
        6,
        8,
    ));
    parts.push(generate_tapered_tube(
        vec3(0.0, 0.015, 0.16),
        0.015,
        0.005,
        0.08,
        5,
        6,
        Axis::Z,
    ));

    // Heat-sensing dorsal organ in place of eyes
    parts.push(generate_ellipsoid(
        vec3(0.0, 0.045, 0.02),
        vec3(0.025, 0.012, 0.04),
        5,
        6,
    ));

    // Long antennae and shorter antennules
    for side in [-1.0f32, 1.0] {
        parts.push(generate_tentacle(
            vec3(side * 0.03, 0.02, 0.12),
            0.25,
            0.004,
            10,
            0.02 * bias,
            1.5,
        ));
        parts.push(generate_tentacle(
            vec3(side * 0.02, 0.025, 0.13),
            0.1,
            0.003,
            6,
            0.01 * bias,
            2.0,
        ));
    }

    // Five pairs of walking legs
    for i in 0..5 {
        let z_pos = 0.06 - i as f32 * 0.035;
        for side in [-1.0f32, 1.0] {
            parts.push(generate_tentacle(
                vec3(side * 0.05, -0.02, z_pos),
                0.08,
                0.006,
                6,
                0.01 * bias,
                1.0,
            ));
        }
    }

    // Swimmerets under the abdomen
    for i in 0..4 {
        let i_f = i as f32;
        let z_pos = -0.11 - i_f * 0.025;
        for side in [-1.0f32, 1.0] {
            parts.push(generate_ellipsoid(
                vec3(side * 0.015, -0.04 - i_f * 0.01, z_pos),
                vec3(0.012, 0.004, 0.01),
                3,
                4,
            ));
        }
    }

    let refs: Vec<&Mesh> = parts.iter().collect();
    merge(&refs)
}

/// Ghost fish: pale eel-like body, blunt sensory head, continuous fins
pub fn ghost_fish(tokens: &StyleTokens) -> Mesh {
    let d = tokens.detail;

    let mut parts = vec![
        generate_ellipsoid(
            Vec3::ZERO,
            vec3(0.05, 0.045, 0.2),
            d.segments(8),
            d.segments(10),
        ),
        generate_ellipsoid(vec3(0.0, 0.01, 0.18), vec3(0.055, 0.05, 0.08), 7, 10),
        generate_ellipsoid(vec3(0.0, 0.015, 0.26), vec3(0.035, 0.03, 0.04), 5, 6),
        // Reduced but present eyes
        generate_ellipsoid(vec3(-0.04, 0.04, 0.22), vec3(0.015, 0.015, 0.012), 4, 5),
        generate_ellipsoid(vec3(0.04, 0.04, 0.22), vec3(0.015, 0.015, 0.012), 4, 5),
    ];

    // Sharply tapering tail
    let tail_sections = [
        (0.0, -0.005, -0.18, 0.04, 0.035),
        (0.0, -0.008, -0.28, 0.03, 0.025),
        (0.0, -0.01, -0.36, 0.02, 0.015),
        (0.0, -0.01, -0.42, 0.012, 0.01),
    ];
    for (tx, ty, tz, rx, ry) in tail_sections {
        parts.push(generate_ellipsoid(vec3(tx, ty, tz), vec3(rx, ry, 0.06), 5, 6));
    }

    // Continuous dorsal fin along the back
    for i in 0..8 {
        let i_f = i as f32;
        parts.push(generate_ellipsoid(
            vec3(0.0, 0.04 - i_f * 0.003, 0.1 - i_f * 0.07),
            vec3(0.008, 0.025 - i_f * 0.002, 0.04),
            4,
            5,
        ));
    }

    // Continuous anal fin along the belly
    for i in 0..6 {
        let i_f = i as f32;
        parts.push(generate_ellipsoid(
            vec3(0.0, -0.035 + i_f * 0.003, -0.05 - i_f * 0.06),
            vec3(0.006, 0.02 - i_f * 0.002, 0.035),
            4,
            5,
        ));
    }

    // Rounded tail fin
    parts.push(generate_ellipsoid(
        vec3(0.0, -0.01, -0.48),
        vec3(0.015, 0.03, 0.04),
        5,
        6,
    ));

    // Paddle pectorals for hovering near vents
    parts.push(generate_ellipsoid(
        vec3(-0.06, -0.01, 0.1),
        vec3(0.04, 0.008, 0.025),
        4,
        5,
    ));
    parts.push(generate_ellipsoid(
        vec3(0.06, -0.01, 0.1),
        vec3(0.04, 0.008, 0.025),
        4,
        5,
    ));

    // Lateral-line sensory pores
    for i in 0..6 {
        let pz = 0.15 - i as f32 * 0.08;
        for side in [-1.0f32, 1.0] {
            parts.push(generate_ellipsoid(
                vec3(side * 0.04, 0.01, pz),
                Vec3::splat(0.006),
                3,
                4,
            ));
        }
    }

    let refs: Vec<&Mesh> = parts.iter().collect();
    merge(&refs)
}

/// Vent octopus: egg mantle, big eyes, stubby sucker-lined arms, webbing
pub fn vent_octopus(tokens: &StyleTokens) -> Mesh {
    let d = tokens.detail;
    let bias = tokens.curvature_bias;

    let mut parts = vec![
        generate_ellipsoid(
            vec3(0.0, 0.0, 0.1),
            vec3(0.12, 0.1, 0.18),
            d.segments(10),
            d.segments(12),
        ),
        generate_ellipsoid(vec3(0.0, 0.0, -0.06), vec3(0.11, 0.1, 0.08), 8, 10),
        // Large functional eyes with pupils
        generate_ellipsoid(vec3(-0.09, 0.04, -0.04), vec3(0.04, 0.04, 0.035), 6, 8),
        generate_ellipsoid(vec3(0.09, 0.04, -0.04), vec3(0.04, 0.04, 0.035), 6, 8),
        generate_ellipsoid(vec3(-0.09, 0.07, -0.04), vec3(0.02, 0.02, 0.015), 4, 5),
        generate_ellipsoid(vec3(0.09, 0.07, -0.04), vec3(0.02, 0.02, 0.015), 4, 5),
    ];

    // Eight stubby arms with sucker bumps
    for i in 0..8 {
        let angle = i as f32 * PI / 4.0;
        let ax = 0.08 * angle.cos();
        let ay = 0.08 * angle.sin();
        let arm_length = 0.22 + 0.03 * (i as f32 * 1.5).sin();
        parts.push(generate_arm(
            vec3(ax, ay, -0.12),
            arm_length,
            0.025,
            8,
            0.35 * bias,
        ));

        for j in 0..4 {
            let t = (j + 1) as f32 / 5.0;
            parts.push(generate_ellipsoid(
                vec3(
                    ax * (1.0 + t * 0.3),
                    ay * (1.0 + t * 0.3),
                    -0.12 - t * arm_length * 0.6,
                ),
                vec3(0.008, 0.008, 0.006),
                3,
                4,
            ));
        }
    }

    // Partial umbrella webbing between the arms
    parts.push(generate_tapered_tube(
        vec3(0.0, 0.0, -0.18),
        0.08,
        0.15,
        0.1,
        4,
        16,
        Axis::Z,
    ));

    // Siphon and small ear-like fins
    parts.push(generate_cylinder(
        vec3(0.0, -0.08, -0.02),
        0.02,
        0.05,
        6,
        Axis::Z,
        true,
    ));
    parts.push(generate_ellipsoid(
        vec3(-0.14, 0.02, 0.05),
        vec3(0.04, 0.01, 0.06),
        4,
        5,
    ));
    parts.push(generate_ellipsoid(
        vec3(0.14, 0.02, 0.05),
        vec3(0.04, 0.01, 0.06),
        4,
        5,
    ));

    let refs: Vec<&Mesh> = parts.iter().collect();
    merge(&refs)
}

/// Generate and write every Zone 4 creature
pub fn generate_all(tokens: &StyleTokens, output_dir: &Path) -> Result<()> {
    write_mesh(&tube_worms(tokens), "tube_worms", output_dir)?;
    write_mesh(&vent_shrimp(tokens), "vent_shrimp", output_dir)?;
    write_mesh(&ghost_fish(tokens), "ghost_fish", output_dir)?;
    write_mesh(&vent_octopus(tokens), "vent_octopus", output_dir)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zone4_creatures_are_valid() {
        let tokens = StyleTokens::default();
        for mesh in [
            tube_worms(&tokens),
            vent_shrimp(&tokens),
            ghost_fish(&tokens),
            vent_octopus(&tokens),
        ] {
            assert!(mesh.vertex_count() > 0);
            assert!(mesh.indices_valid());
        }
    }

    #[test]
    fn test_tube_worms_cluster_layout() {
        let mesh = tube_worms(&StyleTokens::default());

        // 8 worms of tube (18) + rim (18) + plume core (32) + 12 filaments
        // (10 each), plus the 70-vertex substrate mound.
        assert_eq!(mesh.vertex_count(), 8 * (18 + 18 + 32 + 120) + 70);

        // Tube heights are drawn from [0.4, 0.8); filaments top out at most
        // 0.08 above the tallest tube.
        let max_y = mesh.vertices.iter().map(|v| v[1]).fold(f32::MIN, f32::max);
        assert!(max_y > 0.4 && max_y < 0.9);
    }

    #[test]
    fn test_tube_worms_seeded_cluster_is_stable() {
        let tokens = StyleTokens::default();
        assert_eq!(tube_worms(&tokens), tube_worms(&tokens));
    }
}
