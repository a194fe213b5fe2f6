//! Metaball creature presets
//!
//! Each preset is a flat authored parameter table: ball positions, radii
//! and stiffness values tuned by eye. Treat the constants as creative
//! data, not derived quantities.

use glam::{vec3, Vec3};
use std::f32::consts::PI;

use super::MetaballCreature;

/// Names of all available presets, in catalog order
pub const PRESET_NAMES: [&str; 8] = [
    "jellyfish",
    "fish",
    "octopus",
    "turtle",
    "manta_ray",
    "anglerfish",
    "squid",
    "crab",
];

/// Look up a preset builder by name
pub fn preset(name: &str, size: f32) -> Option<MetaballCreature> {
    match name {
        "jellyfish" => Some(jellyfish(size)),
        "fish" => Some(fish(size, 1.5)),
        "octopus" => Some(octopus(size)),
        "turtle" => Some(turtle(size)),
        "manta_ray" => Some(manta_ray(size)),
        "anglerfish" => Some(anglerfish(size)),
        "squid" => Some(squid(size)),
        "crab" => Some(crab(size)),
        _ => None,
    }
}

/// Jellyfish: layered bell dome, four oral arms, eight trailing tentacles
pub fn jellyfish(size: f32) -> MetaballCreature {
    let mut creature = MetaballCreature::with_resolution("jellyfish", 0.06);

    // Bell dome, layered for shape
    creature
        .add_ball(vec3(0.0, 0.0, 0.0), 0.3 * size, 1.5)
        .add_ball(vec3(0.0, 0.0, 0.1 * size), 0.25 * size, 2.0)
        .add_ball(vec3(0.0, 0.0, -0.15 * size), 0.2 * size, 2.5);

    // Oral arms (4 main ones)
    for i in 0..4 {
        let angle = (PI / 2.0) * i as f32;
        let x = 0.08 * size * angle.cos();
        let y = 0.08 * size * angle.sin();
        creature.add_chain(
            vec3(x, y, -0.2 * size),
            vec3(x * 2.0, y * 2.0, -0.6 * size),
            4,
            0.05 * size,
            0.02 * size,
            3.0,
        );
    }

    // Trailing tentacles (8 of them)
    for i in 0..8 {
        let angle = (PI / 4.0) * i as f32;
        let x = 0.2 * size * angle.cos();
        let y = 0.2 * size * angle.sin();
        creature.add_chain(
            vec3(x, y, -0.15 * size),
            vec3(x * 1.5, y * 1.5, -0.9 * size),
            6,
            0.03 * size,
            0.01 * size,
            4.0,
        );
    }

    creature
}

/// Fish: tapered ball chain body with dorsal, tail and pectoral fins
pub fn fish(size: f32, elongation: f32) -> MetaballCreature {
    let mut creature = MetaballCreature::with_resolution("fish", 0.05);

    // Body: elongated shape from overlapping balls, tapered at head and tail
    let body_length = 0.4 * size * elongation;
    for i in 0..5 {
        let t = i as f32 / 4.0;
        let z = -body_length / 2.0 + t * body_length;
        let radius = 0.15 * size * (1.0 - 0.7 * (t - 0.4).abs());
        creature.add_ball(vec3(0.0, 0.0, z), radius, 1.5);
    }

    // Head
    creature.add_ball(
        vec3(0.0, 0.0, body_length / 2.0 + 0.05 * size),
        0.1 * size,
        2.0,
    );

    // Dorsal fin
    creature.add_ellipsoid(
        vec3(0.0, 0.1 * size, 0.0),
        0.08 * size,
        vec3(0.2, 1.5, 1.0),
        3.5,
        Vec3::ZERO,
    );

    // Tail fin
    creature.add_ellipsoid(
        vec3(0.0, 0.0, -body_length / 2.0 - 0.1 * size),
        0.12 * size,
        vec3(0.15, 2.0, 1.0),
        3.0,
        Vec3::ZERO,
    );

    // Pectoral fins
    for side in [-1.0f32, 1.0] {
        creature.add_ellipsoid(
            vec3(side * 0.12 * size, 0.0, 0.1 * size),
            0.06 * size,
            vec3(0.3, 1.5, 0.5),
            4.0,
            Vec3::ZERO,
        );
    }

    creature
}

/// Octopus: three-ball mantle with eight curving tentacle chains
pub fn octopus(size: f32) -> MetaballCreature {
    let mut creature = MetaballCreature::with_resolution("octopus", 0.06);

    // Mantle
    creature
        .add_ball(vec3(0.0, 0.0, 0.1 * size), 0.2 * size, 1.5)
        .add_ball(vec3(0.0, 0.0, 0.25 * size), 0.15 * size, 2.0)
        .add_ball(vec3(0.0, 0.0, 0.0), 0.18 * size, 1.8);

    // Eight tentacles curving outward and down
    for i in 0..8 {
        let angle = (PI / 4.0) * i as f32;
        let x = 0.12 * size * angle.cos();
        let y = 0.12 * size * angle.sin();
        creature.add_chain(
            vec3(x, y, -0.05 * size),
            vec3(x * 4.0, y * 4.0, -0.5 * size),
            8,
            0.05 * size,
            0.015 * size,
            2.5,
        );
    }

    creature
}

/// Sea turtle: domed carapace, flat plastron, head, four flippers, tail
pub fn turtle(size: f32) -> MetaballCreature {
    let mut creature = MetaballCreature::with_resolution("turtle", 0.06);

    // Carapace dome
    creature.add_ellipsoid(
        Vec3::ZERO,
        0.3 * size,
        vec3(1.0, 0.6, 1.3),
        1.2,
        Vec3::ZERO,
    );

    // Plastron, flatter
    creature.add_ellipsoid(
        vec3(0.0, -0.08 * size, 0.0),
        0.25 * size,
        vec3(1.0, 0.3, 1.2),
        1.5,
        Vec3::ZERO,
    );

    // Head
    creature
        .add_ball(vec3(0.0, 0.0, 0.35 * size), 0.1 * size, 2.0)
        .add_ball(vec3(0.0, 0.02 * size, 0.42 * size), 0.06 * size, 2.5);

    // Front flippers
    for side in [-1.0f32, 1.0] {
        creature.add_ellipsoid(
            vec3(side * 0.25 * size, -0.05 * size, 0.15 * size),
            0.15 * size,
            vec3(2.0, 0.3, 0.8),
            2.5,
            Vec3::ZERO,
        );
    }

    // Rear flippers, smaller
    for side in [-1.0f32, 1.0] {
        creature.add_ellipsoid(
            vec3(side * 0.2 * size, -0.05 * size, -0.25 * size),
            0.08 * size,
            vec3(1.5, 0.25, 0.6),
            3.0,
            Vec3::ZERO,
        );
    }

    // Tail
    creature.add_chain(
        vec3(0.0, -0.02 * size, -0.35 * size),
        vec3(0.0, -0.02 * size, -0.5 * size),
        3,
        0.04 * size,
        0.015 * size,
        3.0,
    );

    creature
}

/// Manta ray: flat body, wide wings, cephalic fins, trailing tail
pub fn manta_ray(size: f32) -> MetaballCreature {
    let mut creature = MetaballCreature::with_resolution("manta_ray", 0.06);

    // Body center
    creature.add_ellipsoid(
        Vec3::ZERO,
        0.2 * size,
        vec3(0.8, 0.3, 1.0),
        1.5,
        Vec3::ZERO,
    );

    // Wings, wide and flat
    for side in [-1.0f32, 1.0] {
        creature.add_ellipsoid(
            vec3(side * 0.3 * size, 0.0, 0.0),
            0.15 * size,
            vec3(1.5, 0.2, 1.0),
            1.8,
            Vec3::ZERO,
        );
        creature.add_ellipsoid(
            vec3(side * 0.6 * size, 0.0, -0.1 * size),
            0.1 * size,
            vec3(1.2, 0.15, 0.8),
            2.5,
            Vec3::ZERO,
        );
    }

    // Head
    creature.add_ball(vec3(0.0, 0.02 * size, 0.25 * size), 0.12 * size, 2.0);

    // Cephalic fins
    for side in [-1.0f32, 1.0] {
        creature.add_chain(
            vec3(side * 0.08 * size, 0.02 * size, 0.2 * size),
            vec3(side * 0.15 * size, 0.08 * size, 0.35 * size),
            3,
            0.04 * size,
            0.02 * size,
            3.0,
        );
    }

    // Tail
    creature.add_chain(
        vec3(0.0, 0.0, -0.2 * size),
        vec3(0.0, 0.0, -0.7 * size),
        5,
        0.06 * size,
        0.02 * size,
        2.5,
    );

    creature
}

/// Anglerfish: oversized head and jaw, small body, illicium with esca
pub fn anglerfish(size: f32) -> MetaballCreature {
    let mut creature = MetaballCreature::with_resolution("anglerfish", 0.06);

    // Large head
    creature
        .add_ball(vec3(0.0, 0.0, 0.1 * size), 0.25 * size, 1.5)
        .add_ball(vec3(0.0, 0.05 * size, 0.2 * size), 0.18 * size, 2.0);

    // Lower jaw
    creature.add_ellipsoid(
        vec3(0.0, -0.1 * size, 0.2 * size),
        0.15 * size,
        vec3(1.0, 0.4, 0.6),
        2.5,
        Vec3::ZERO,
    );

    // Small body
    creature
        .add_ball(vec3(0.0, 0.0, -0.1 * size), 0.15 * size, 2.0)
        .add_ball(vec3(0.0, 0.0, -0.25 * size), 0.1 * size, 2.5);

    // Tail
    creature.add_ellipsoid(
        vec3(0.0, 0.0, -0.4 * size),
        0.08 * size,
        vec3(0.3, 1.5, 0.8),
        3.0,
        Vec3::ZERO,
    );

    // Illicium (lure stalk)
    creature.add_chain(
        vec3(0.0, 0.15 * size, 0.25 * size),
        vec3(0.0, 0.35 * size, 0.35 * size),
        4,
        0.02 * size,
        0.015 * size,
        4.0,
    );

    // Esca (lure bulb at tip)
    creature.add_ball(vec3(0.0, 0.38 * size, 0.38 * size), 0.04 * size, 3.0);

    // Dorsal fin
    creature.add_ellipsoid(
        vec3(0.0, 0.08 * size, -0.15 * size),
        0.06 * size,
        vec3(0.2, 1.2, 0.8),
        3.5,
        Vec3::ZERO,
    );

    // Pectoral fins
    for side in [-1.0f32, 1.0] {
        creature.add_ellipsoid(
            vec3(side * 0.15 * size, -0.05 * size, 0.0),
            0.05 * size,
            vec3(0.3, 1.0, 0.5),
            4.0,
            Vec3::ZERO,
        );
    }

    creature
}

/// Squid: torpedo mantle, rear fins, eight arms and two long tentacles
pub fn squid(size: f32) -> MetaballCreature {
    let mut creature = MetaballCreature::with_resolution("squid", 0.06);

    // Mantle, tapered at both ends
    for i in 0..4 {
        let t = i as f32 / 3.0;
        let z = -0.1 * size + t * 0.5 * size;
        let radius = 0.12 * size * (1.0 - 0.5 * (t - 0.5).abs());
        creature.add_ball(vec3(0.0, 0.0, z), radius, 1.8);
    }

    // Mantle tip
    creature.add_ball(vec3(0.0, 0.0, 0.45 * size), 0.06 * size, 2.5);

    // Fins at the rear of the mantle
    for side in [-1.0f32, 1.0] {
        creature.add_ellipsoid(
            vec3(side * 0.1 * size, 0.0, 0.25 * size),
            0.08 * size,
            vec3(0.3, 1.5, 1.0),
            3.0,
            Vec3::ZERO,
        );
    }

    // Head between mantle and arms
    creature.add_ball(vec3(0.0, 0.0, -0.2 * size), 0.1 * size, 2.0);

    // Arms (8 shorter ones)
    for i in 0..8 {
        let angle = (PI / 4.0) * i as f32;
        let x = 0.06 * size * angle.cos();
        let y = 0.06 * size * angle.sin();
        creature.add_chain(
            vec3(x, y, -0.25 * size),
            vec3(x * 3.0, y * 3.0, -0.5 * size),
            4,
            0.03 * size,
            0.012 * size,
            3.0,
        );
    }

    // Tentacles (2 longer ones)
    for angle in [0.0, PI] {
        let x = 0.05 * size * angle.cos();
        let y = 0.05 * size * angle.sin();
        creature.add_chain(
            vec3(x, y, -0.25 * size),
            vec3(x * 5.0, y * 5.0, -0.7 * size),
            6,
            0.025 * size,
            0.02 * size,
            3.5,
        );
    }

    creature
}

/// Crab: wide carapace, eye stalks, claw arms with pincers, four leg pairs
pub fn crab(size: f32) -> MetaballCreature {
    let mut creature = MetaballCreature::with_resolution("crab", 0.06);

    // Carapace
    creature.add_ellipsoid(
        Vec3::ZERO,
        0.2 * size,
        vec3(1.3, 0.5, 1.0),
        1.2,
        Vec3::ZERO,
    );

    // Eyes on stalks
    for side in [-1.0f32, 1.0] {
        creature.add_chain(
            vec3(side * 0.08 * size, 0.08 * size, 0.15 * size),
            vec3(side * 0.1 * size, 0.15 * size, 0.2 * size),
            2,
            0.02 * size,
            0.025 * size,
            4.0,
        );
    }

    // Claws
    for side in [-1.0f32, 1.0] {
        creature.add_chain(
            vec3(side * 0.2 * size, 0.0, 0.1 * size),
            vec3(side * 0.4 * size, 0.0, 0.2 * size),
            3,
            0.04 * size,
            0.05 * size,
            2.5,
        );
        creature
            .add_ball(vec3(side * 0.45 * size, 0.0, 0.22 * size), 0.06 * size, 2.0)
            .add_ball(
                vec3(side * 0.48 * size, 0.03 * size, 0.25 * size),
                0.03 * size,
                3.0,
            )
            .add_ball(
                vec3(side * 0.48 * size, -0.02 * size, 0.25 * size),
                0.025 * size,
                3.0,
            );
    }

    // Walking legs (4 pairs)
    let leg_angles = [(0.7, 0.1), (0.9, -0.05), (1.1, -0.15), (1.3, -0.2)];
    for side in [-1.0f32, 1.0] {
        for (angle_mult, z_offset) in leg_angles {
            let x = side * 0.18 * size * angle_mult;
            creature.add_chain(
                vec3(x * 0.6, -0.02 * size, z_offset * size),
                vec3(x, -0.12 * size, z_offset * size * 1.2),
                3,
                0.025 * size,
                0.012 * size,
                3.5,
            );
        }
    }

    creature
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_presets_resolve() {
        for name in PRESET_NAMES {
            let creature = preset(name, 1.0).unwrap();
            assert_eq!(creature.name, name);
            assert!(!creature.elements.is_empty());
        }
        assert!(preset("kraken", 1.0).is_none());
    }

    #[test]
    fn test_jellyfish_element_count() {
        // 3 dome balls + 4 arms of 4 + 8 tentacles of 6.
        let creature = jellyfish(1.0);
        assert_eq!(creature.elements.len(), 3 + 16 + 48);
        assert!((creature.resolution - 0.06).abs() < 1e-6);
    }

    #[test]
    fn test_fish_body_taper() {
        let creature = fish(1.0, 1.5);
        // Thickest body ball is near t=0.4.
        let body: Vec<f32> = creature.elements[..5].iter().map(|e| e.radius).collect();
        let max = body.iter().cloned().fold(0.0f32, f32::max);
        assert!((body[2] - max).abs() < 0.02);
        assert!(body[0] < max && body[4] < max);
    }

    #[test]
    fn test_presets_mesh_via_fallback() {
        for name in ["jellyfish", "crab"] {
            let mesh = preset(name, 1.0).unwrap().to_mesh(None);
            assert!(mesh.face_count() > 0);
            assert!(mesh.indices_valid());
        }
    }
}
