//! Soft-form metaball creature variants

use anyhow::{bail, Result};
use std::path::Path;

use proc_mesh::metaball::presets::{preset, PRESET_NAMES};
use proc_mesh::style::StyleTokens;

use crate::mesh_helpers::write_mesh;

/// Generate every metaball preset at unit size.
///
/// No iso-surface evaluator is wired up here, so each creature takes the
/// sphere-approximation path with weld and subdivision smoothing.
pub fn generate_all(_tokens: &StyleTokens, output_dir: &Path) -> Result<()> {
    for name in PRESET_NAMES {
        let Some(creature) = preset(name, 1.0) else {
            bail!("unknown metaball preset {name}");
        };
        let mesh = creature.to_mesh(None);
        write_mesh(&mesh, &format!("{name}_soft"), output_dir)?;
    }
    Ok(())
}
