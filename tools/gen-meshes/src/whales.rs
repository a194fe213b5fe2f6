//! Epic encounter creatures
//!
//! - blue_whale: smooth tapered giant, Zone 1 at 180m
//! - sperm_whale: blocky spermaceti head, Zone 3 at 2500m
//! - giant_isopod: armored scavenger, built as a metaball creature

use anyhow::Result;
use glam::{vec3, Vec3};
use std::path::Path;

use proc_mesh::mesh::*;
use proc_mesh::metaball::MetaballCreature;
use proc_mesh::style::StyleTokens;

use crate::mesh_helpers::write_mesh;

/// Blue whale: 12-unit tapered body, long flippers, paired tail flukes
pub fn blue_whale(tokens: &StyleTokens) -> Mesh {
    let d = tokens.detail;

    let body = generate_tapered_body(12.0, 1.2, 0.15, 0.85, d.segments(24), d.segments(16));
    let head = generate_ellipsoid(vec3(0.0, 0.2, 5.5), vec3(0.9, 0.8, 1.0), 10, 14);
    let jaw = generate_ellipsoid(vec3(0.0, -0.3, 5.0), vec3(0.7, 0.4, 1.2), 8, 12);

    let flipper_l = generate_flipper(vec3(-1.0, -0.3, 2.0), 2.0, 0.6, 0.15, -0.3);
    let flipper_r = generate_flipper(vec3(1.0, -0.3, 2.0), 2.0, 0.6, 0.15, 0.3);

    // Small dorsal ridge far back on the body
    let dorsal = generate_ellipsoid(vec3(0.0, 1.0, -3.0), vec3(0.1, 0.4, 0.6), 6, 8);

    let fluke_l = generate_flipper(vec3(-1.5, 0.0, -5.8), 1.8, 0.8, 0.1, -0.5);
    let fluke_r = generate_flipper(vec3(1.5, 0.0, -5.8), 1.8, 0.8, 0.1, 0.5);

    merge(&[
        &body, &head, &jaw, &flipper_l, &flipper_r, &dorsal, &fluke_l, &fluke_r,
    ])
}

/// Sperm whale: stockier body, massive blocky head, dorsal humps
pub fn sperm_whale(tokens: &StyleTokens) -> Mesh {
    let d = tokens.detail;

    let mut parts = vec![
        generate_tapered_body(8.0, 1.0, 0.25, 0.8, d.segments(20), d.segments(14)),
        // The spermaceti organ dominates the silhouette
        generate_ellipsoid(vec3(0.0, 0.3, 3.5), vec3(1.3, 1.2, 2.5), 12, 16),
        generate_ellipsoid(vec3(0.0, -0.6, 2.8), vec3(0.3, 0.25, 1.8), 6, 8),
        generate_flipper(vec3(-0.9, -0.4, 1.5), 1.2, 0.4, 0.12, -0.4),
        generate_flipper(vec3(0.9, -0.4, 1.5), 1.2, 0.4, 0.12, 0.4),
    ];

    // A run of dorsal humps rather than a true fin
    for i in 0..3 {
        let i_f = i as f32;
        parts.push(generate_ellipsoid(
            vec3(0.0, 0.8 - i_f * 0.15, -2.0 - i_f * 0.5),
            vec3(0.15, 0.3, 0.3),
            5,
            6,
        ));
    }

    parts.push(generate_flipper(vec3(-1.2, 0.0, -3.8), 1.4, 0.6, 0.08, -0.6));
    parts.push(generate_flipper(vec3(1.2, 0.0, -3.8), 1.4, 0.6, 0.08, 0.6));

    let refs: Vec<&Mesh> = parts.iter().collect();
    merge(&refs)
}

/// Giant isopod: segmented shell plates, antennae, seven leg pairs.
///
/// Assembled as a metaball creature and meshed through the sphere
/// fallback path.
pub fn giant_isopod() -> Mesh {
    isopod_creature().to_mesh(None)
}

fn isopod_creature() -> MetaballCreature {
    let mut creature = MetaballCreature::with_resolution("giant_isopod", 0.05);

    // Segmented armored body, oval cross-section
    for i in 0..7 {
        let t = i as f32 / 6.0;
        let z = -0.2 + t * 0.4;
        creature.add_ellipsoid(vec3(0.0, 0.0, z), 0.08, vec3(1.0, 0.6, 0.7), 1.8, Vec3::ZERO);
    }

    // Head and compound eyes
    creature.add_ball(vec3(0.0, 0.0, 0.25), 0.07, 2.0);
    for side in [-1.0f32, 1.0] {
        creature.add_ball(vec3(side * 0.04, 0.02, 0.28), 0.025, 3.5);
    }

    // Antennae
    for side in [-1.0f32, 1.0] {
        creature.add_chain(
            vec3(side * 0.03, 0.01, 0.3),
            vec3(side * 0.08, 0.02, 0.4),
            3,
            0.01,
            0.005,
            4.0,
        );
    }

    // Telson
    creature.add_ellipsoid(
        vec3(0.0, 0.0, -0.28),
        0.06,
        vec3(1.0, 0.5, 0.8),
        2.5,
        Vec3::ZERO,
    );

    // Seven leg pairs
    for i in 0..7 {
        let z = -0.15 + i as f32 * 0.05;
        for side in [-1.0f32, 1.0] {
            creature.add_chain(
                vec3(side * 0.06, -0.02, z),
                vec3(side * 0.12, -0.08, z),
                2,
                0.012,
                0.008,
                4.0,
            );
        }
    }

    creature
}

/// Generate and write the epic encounter set
pub fn generate_all(tokens: &StyleTokens, output_dir: &Path) -> Result<()> {
    write_mesh(&blue_whale(tokens), "blue_whale", output_dir)?;
    write_mesh(&sperm_whale(tokens), "sperm_whale", output_dir)?;
    write_mesh(&giant_isopod(), "giant_isopod", output_dir)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_epics_are_valid() {
        let tokens = StyleTokens::default();
        for mesh in [blue_whale(&tokens), sperm_whale(&tokens), giant_isopod()] {
            assert!(mesh.vertex_count() > 0);
            assert!(mesh.indices_valid());
        }
    }

    #[test]
    fn test_blue_whale_head_caps_the_nose() {
        let mesh = blue_whale(&StyleTokens::default());
        let max_z = mesh.vertices.iter().map(|v| v[2]).fold(f32::MIN, f32::max);
        let min_z = mesh.vertices.iter().map(|v| v[2]).fold(f32::MAX, f32::min);

        // Head bulge at z 5.5 with a 1.0 radius tops the 12-unit body.
        assert!((max_z - 6.5).abs() < 1e-4);
        assert!(max_z - min_z > 12.0);
    }

    #[test]
    fn test_sperm_whale_head_leads() {
        let mesh = sperm_whale(&StyleTokens::default());
        let max_z = mesh.vertices.iter().map(|v| v[2]).fold(f32::MIN, f32::max);
        // Spermaceti organ at z 3.5 with a 2.5 radius reaches past the body nose.
        assert!((max_z - 6.0).abs() < 1e-4);
    }

    #[test]
    fn test_isopod_element_table() {
        let creature = isopod_creature();
        // 7 shell plates + head + 2 eyes + 2 antennae of 3 + telson + 14 legs of 2.
        assert_eq!(creature.elements.len(), 7 + 1 + 2 + 6 + 1 + 28);
        assert!((creature.resolution - 0.05).abs() < 1e-6);
    }
}
