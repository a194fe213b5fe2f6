//! Shared mesh output helpers

use anyhow::{Context, Result};
use proc_mesh::mesh::{write_obj, Mesh};
use std::path::Path;
use tracing::info;

/// Write a mesh to `{output_dir}/{name}.obj` and log the counts.
pub fn write_mesh(mesh: &Mesh, name: &str, output_dir: &Path) -> Result<()> {
    let path = output_dir.join(format!("{name}.obj"));
    write_obj(mesh, &path, name).with_context(|| format!("failed to generate {name}"))?;

    info!(
        "{} -> {} ({} verts, {} tris)",
        name,
        path.display(),
        mesh.vertex_count(),
        mesh.face_count()
    );
    Ok(())
}
