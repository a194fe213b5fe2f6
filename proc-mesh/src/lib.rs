//! Procedural creature and vehicle mesh generation
//!
//! This library synthesizes 3D assets from parametric surface generators:
//! ellipsoids, hemispheres, tapered tubes and appendage shapes composed
//! into articulated creatures via rigid transforms and mesh merging, plus
//! a metaball layer for soft organic forms.
//!
//! # Mesh Example
//! ```
//! use glam::Vec3;
//! use proc_mesh::mesh::*;
//!
//! // Generate a base mesh
//! let mut mesh = generate_ellipsoid(Vec3::ZERO, Vec3::new(0.5, 0.3, 0.3), 10, 14);
//!
//! // Apply modifiers
//! mesh.apply(Transform::scale(1.0, 1.2, 0.8))
//!     .apply(Subdivide { iterations: 1 });
//!
//! // Merge with a fin and export to OBJ
//! let fin = generate_tri_fin(Vec3::new(0.0, 0.3, 0.0), 0.2, 0.15, 0.02, 0.0, 0.0);
//! let body = merge(&[&mesh, &fin]);
//! # let dir = std::env::temp_dir();
//! write_obj(&body, &dir.join("fish.obj"), "fish")?;
//! # Ok::<(), proc_mesh::mesh::ExportError>(())
//! ```
//!
//! # Metaball Example
//! ```
//! use glam::Vec3;
//! use proc_mesh::metaball::MetaballCreature;
//!
//! let mut blob = MetaballCreature::new("blob");
//! blob.add_ball(Vec3::ZERO, 0.3, 1.5)
//!     .add_ball(Vec3::new(0.0, 0.0, 0.2), 0.2, 2.0);
//!
//! // No iso-surface evaluator here: the sphere fallback path is taken.
//! let mesh = blob.to_mesh(None);
//! assert!(mesh.face_count() > 0);
//! ```

pub mod mesh;
pub mod metaball;
pub mod style;
