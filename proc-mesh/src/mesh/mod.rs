//! Mesh generation and modification

pub mod export;
pub mod merge;
pub mod modifiers;
pub mod primitives;
pub mod types;

// Convenience re-exports
pub use export::{write_obj, ExportError};
pub use merge::merge;
pub use modifiers::{MeshApply, MeshModifier, Subdivide, Transform, Weld};
pub use primitives::{
    generate_arm, generate_cone, generate_cylinder, generate_ellipsoid, generate_fin,
    generate_flipper, generate_fluke, generate_hemisphere, generate_plume_filament,
    generate_sphere, generate_tapered_body, generate_tapered_tube, generate_tentacle,
    generate_tri_fin,
};
pub use types::{Axis, Mesh};
