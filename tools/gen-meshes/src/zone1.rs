//! Zone 1 (Sunlit Waters) creatures: 0-200m, bright reef life
//!
//! - reef_fish: small tropical schooling fish
//! - sea_turtle: graceful swimmer with dome shell
//! - manta_ray: flat diamond glider
//! - coral_crab: hard-shelled crustacean

use anyhow::Result;
use glam::{vec3, Mat4, Vec3};
use std::f32::consts::PI;
use std::path::Path;

use proc_mesh::mesh::*;
use proc_mesh::style::StyleTokens;

use crate::mesh_helpers::write_mesh;

/// Reef fish: laterally compressed body, paired fins, forked tail
pub fn reef_fish(tokens: &StyleTokens) -> Mesh {
    let d = tokens.detail;

    let body = generate_ellipsoid(
        Vec3::ZERO,
        vec3(0.15, 0.08, 0.25),
        d.segments(8),
        d.segments(12),
    );
    let head = generate_ellipsoid(vec3(0.0, 0.01, 0.2), vec3(0.08, 0.06, 0.1), 6, 8);

    let dorsal = generate_tri_fin(vec3(0.0, 0.08, 0.0), 0.12, 0.08, 0.01, 0.0, 0.0);
    let anal = generate_tri_fin(vec3(0.0, -0.08, -0.05), 0.08, -0.05, 0.01, 0.0, PI);

    let pec_left = generate_tri_fin(
        vec3(-0.1, 0.0, 0.05),
        0.08,
        0.04,
        0.005,
        PI / 3.0,
        PI / 6.0,
    );
    let pec_right = generate_tri_fin(
        vec3(0.1, 0.0, 0.05),
        0.08,
        0.04,
        0.005,
        -PI / 3.0,
        -PI / 6.0,
    );

    // Forked tail: two mirrored lobes
    let tail_top = generate_tri_fin(vec3(0.0, 0.02, -0.3), 0.1, 0.06, 0.005, PI, -PI / 6.0);
    let tail_bot = generate_tri_fin(vec3(0.0, -0.02, -0.3), 0.1, -0.06, 0.005, PI, PI / 6.0);

    merge(&[
        &body, &head, &dorsal, &anal, &pec_left, &pec_right, &tail_top, &tail_bot,
    ])
}

/// Sea turtle: dome carapace, flat plastron, four flippers
pub fn sea_turtle(tokens: &StyleTokens) -> Mesh {
    let d = tokens.detail;

    let shell = generate_hemisphere(
        vec3(0.0, 0.05, 0.0),
        vec3(0.4, 0.25, 0.5),
        d.segments(10),
        d.segments(14),
        true,
    );
    let plastron = generate_ellipsoid(vec3(0.0, -0.02, 0.0), vec3(0.35, 0.08, 0.45), 6, 12);

    let head = generate_ellipsoid(vec3(0.0, 0.05, 0.5), vec3(0.12, 0.1, 0.15), 8, 10);
    let neck = generate_cylinder(vec3(0.0, 0.02, 0.4), 0.08, 0.15, 8, Axis::Z, true);

    let flipper_fl = generate_ellipsoid(vec3(-0.35, -0.02, 0.15), vec3(0.3, 0.03, 0.12), 6, 10);
    let flipper_fr = generate_ellipsoid(vec3(0.35, -0.02, 0.15), vec3(0.3, 0.03, 0.12), 6, 10);
    let flipper_rl = generate_ellipsoid(vec3(-0.25, -0.02, -0.35), vec3(0.15, 0.02, 0.08), 5, 8);
    let flipper_rr = generate_ellipsoid(vec3(0.25, -0.02, -0.35), vec3(0.15, 0.02, 0.08), 5, 8);

    let tail = generate_ellipsoid(vec3(0.0, -0.02, -0.55), vec3(0.04, 0.03, 0.1), 5, 6);

    merge(&[
        &shell,
        &plastron,
        &head,
        &neck,
        &flipper_fl,
        &flipper_fr,
        &flipper_rl,
        &flipper_rr,
        &tail,
    ])
}

/// Manta ray: very flat body disc, wing tips, cephalic fins, whip tail
pub fn manta_ray(tokens: &StyleTokens) -> Mesh {
    let d = tokens.detail;

    let body = generate_ellipsoid(
        Vec3::ZERO,
        vec3(1.2, 0.08, 0.6),
        d.segments(8),
        d.segments(20),
    );

    let wing_l = generate_ellipsoid(vec3(-1.3, 0.0, 0.1), vec3(0.4, 0.03, 0.25), 6, 10);
    let wing_r = generate_ellipsoid(vec3(1.3, 0.0, 0.1), vec3(0.4, 0.03, 0.25), 6, 10);

    let head = generate_ellipsoid(vec3(0.0, 0.03, 0.55), vec3(0.25, 0.1, 0.15), 6, 10);

    // Cephalic fins (horn-like feeding fins)
    let ceph_l = generate_ellipsoid(vec3(-0.2, 0.02, 0.7), vec3(0.06, 0.04, 0.15), 5, 6);
    let ceph_r = generate_ellipsoid(vec3(0.2, 0.02, 0.7), vec3(0.06, 0.04, 0.15), 5, 6);

    let tail = generate_cylinder(vec3(0.0, 0.0, -0.9), 0.03, 0.8, 6, Axis::Z, true);
    let tail_tip = generate_ellipsoid(vec3(0.0, 0.0, -1.35), vec3(0.02, 0.02, 0.08), 4, 6);

    let mut parts = vec![
        body, wing_l, wing_r, head, ceph_l, ceph_r, tail, tail_tip,
    ];

    // Gill slits: small bumps on the underside
    for i in 0..5 {
        let offset = -0.15 + i as f32 * 0.08;
        parts.push(generate_ellipsoid(
            vec3(offset, -0.06, 0.2),
            vec3(0.02, 0.01, 0.08),
            4,
            6,
        ));
    }

    let refs: Vec<&Mesh> = parts.iter().collect();
    merge(&refs)
}

/// Coral crab: rounded carapace, asymmetric claws, eight walking legs
pub fn coral_crab(tokens: &StyleTokens) -> Mesh {
    let d = tokens.detail;

    let mut parts = Vec::new();

    parts.push(generate_ellipsoid(
        Vec3::ZERO,
        vec3(0.15, 0.08, 0.12),
        d.segments(8),
        d.segments(12),
    ));

    // Eye stalks and eyeballs
    for side in [-1.0f32, 1.0] {
        parts.push(generate_cylinder(
            vec3(side * 0.06, 0.06, 0.1),
            0.015,
            0.06,
            6,
            Axis::Y,
            true,
        ));
        parts.push(generate_ellipsoid(
            vec3(side * 0.06, 0.1, 0.1),
            Vec3::splat(0.02),
            5,
            6,
        ));
    }

    // Left claw is larger (asymmetric like real crabs)
    parts.push(generate_cylinder(
        vec3(-0.18, 0.0, 0.08),
        0.025,
        0.1,
        6,
        Axis::X,
        true,
    ));
    parts.push(generate_ellipsoid(
        vec3(-0.28, 0.0, 0.08),
        vec3(0.06, 0.04, 0.03),
        6,
        8,
    ));
    parts.push(generate_cylinder(
        vec3(0.16, 0.0, 0.08),
        0.02,
        0.08,
        6,
        Axis::X,
        true,
    ));
    parts.push(generate_ellipsoid(
        vec3(0.24, 0.0, 0.08),
        vec3(0.045, 0.03, 0.025),
        6,
        8,
    ));

    // Walking legs: (base x, base y, base z, splay angle)
    let leg_positions = [
        (-0.12, -0.02, 0.05, -0.4),
        (0.12, -0.02, 0.05, 0.4),
        (-0.13, -0.02, 0.0, -0.5),
        (0.13, -0.02, 0.0, 0.5),
        (-0.12, -0.02, -0.05, -0.6),
        (0.12, -0.02, -0.05, 0.6),
        (-0.1, -0.02, -0.08, -0.7),
        (0.1, -0.02, -0.08, 0.7),
    ];

    for (lx, ly, lz, angle) in leg_positions {
        let mut leg = generate_cylinder(vec3(lx, ly, lz), 0.012, 0.1, 5, Axis::X, true);
        // Splay around the leg base and lower slightly.
        let pivot = Mat4::from_translation(vec3(lx, -0.03, lz))
            * Mat4::from_rotation_y(-angle)
            * Mat4::from_translation(vec3(-lx, 0.0, -lz));
        leg.apply(Transform::from_matrix(pivot));
        parts.push(leg);
    }

    let refs: Vec<&Mesh> = parts.iter().collect();
    merge(&refs)
}

/// Generate and write every Zone 1 creature
pub fn generate_all(tokens: &StyleTokens, output_dir: &Path) -> Result<()> {
    write_mesh(&reef_fish(tokens), "reef_fish", output_dir)?;
    write_mesh(&sea_turtle(tokens), "sea_turtle", output_dir)?;
    write_mesh(&manta_ray(tokens), "manta_ray", output_dir)?;
    write_mesh(&coral_crab(tokens), "coral_crab", output_dir)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zone1_creatures_are_valid() {
        let tokens = StyleTokens::default();
        for mesh in [
            reef_fish(&tokens),
            sea_turtle(&tokens),
            manta_ray(&tokens),
            coral_crab(&tokens),
        ] {
            assert!(mesh.vertex_count() > 0);
            assert!(mesh.indices_valid());
        }
    }

    #[test]
    fn test_detail_scales_body() {
        use proc_mesh::style::DetailLevel;
        let low = reef_fish(&StyleTokens::with_detail(DetailLevel::Low));
        let high = reef_fish(&StyleTokens::with_detail(DetailLevel::High));
        assert!(low.vertex_count() < high.vertex_count());
    }
}
