//! Player submersible: industrial hull, glass canopy, visible thrusters

use anyhow::Result;
use glam::vec3;
use std::path::Path;

use proc_mesh::mesh::*;
use proc_mesh::style::StyleTokens;

use crate::mesh_helpers::write_mesh;

/// Assemble the full submersible from hull, canopy, and fittings
pub fn submersible(tokens: &StyleTokens) -> Mesh {
    let d = tokens.detail;

    let hull = generate_cylinder(vec3(0.0, 0.0, 0.0), 0.4, 2.0, d.segments(20), Axis::Z, true);

    // Glass observation canopy at the bow
    let canopy = generate_sphere(vec3(0.0, 0.0, 1.2), 0.5, d.segments(10), d.segments(16));

    // Main thruster housing and its rearward-opening nozzle
    let thruster = generate_cylinder(vec3(0.0, 0.0, -1.3), 0.3, 0.5, 12, Axis::Z, true);
    let nozzle = generate_cone(vec3(0.0, 0.0, -1.55), 0.25, -0.3, 12);

    let fin_l = generate_cylinder(vec3(-0.6, 0.0, -0.5), 0.08, 0.8, 8, Axis::Z, true);
    let fin_r = generate_cylinder(vec3(0.6, 0.0, -0.5), 0.08, 0.8, 8, Axis::Z, true);
    let dorsal = generate_cylinder(vec3(0.0, 0.5, -0.3), 0.06, 0.6, 8, Axis::Z, true);

    // Landing skid under the hull
    let skid = generate_cylinder(vec3(0.0, -0.45, 0.0), 0.1, 1.5, 8, Axis::Z, true);

    // Maneuvering thruster pods
    let pod_l = generate_sphere(vec3(-0.55, -0.2, -0.8), 0.15, 8, 10);
    let pod_r = generate_sphere(vec3(0.55, -0.2, -0.8), 0.15, 8, 10);

    let headlight = generate_cylinder(vec3(0.0, -0.35, 0.9), 0.12, 0.15, 10, Axis::Z, true);

    merge(&[
        &hull, &canopy, &thruster, &nozzle, &fin_l, &fin_r, &dorsal, &skid, &pod_l, &pod_r,
        &headlight,
    ])
}

/// Generate and write the submersible
pub fn generate_all(tokens: &StyleTokens, output_dir: &Path) -> Result<()> {
    write_mesh(&submersible(tokens), "submersible", output_dir)
}
