//! Metaball-based soft-body creature modeling
//!
//! A [`MetaballCreature`] is an append-only collection of influence volumes
//! rather than explicit polygons. Organic forms (jellyfish, octopus) look
//! too segmented when assembled from discrete primitives; soft-blended
//! volumes merge naturally.
//!
//! Meshing takes one of two paths. When an [`IsoSurfaceEvaluator`] is
//! available the elements are handed to it at the configured resolution and
//! threshold. When it is not, each element becomes a fixed-tessellation UV
//! sphere, the spheres are merged, welded, and subdivided once. The
//! fallback loses the soft blending but never fails; it is the designed
//! degradation path for batch runs without a host evaluator.

pub mod presets;

use glam::{EulerRot, Mat4, Vec3};
use thiserror::Error;
use tracing::warn;

use crate::mesh::modifiers::{MeshApply, Subdivide, Transform, Weld};
use crate::mesh::primitives::{generate_ellipsoid, generate_sphere};
use crate::mesh::{merge, Mesh};

/// Fallback sphere tessellation (matches a 12-segment, 8-ring UV sphere)
const FALLBACK_LAT: u32 = 8;
const FALLBACK_LON: u32 = 12;

/// Weld threshold applied after merging fallback spheres
const FALLBACK_WELD: f32 = 0.01;

/// Shape of a single metaball element
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MetaShape {
    /// Isotropic ball
    Ball,
    /// Cylinder with rounded ends, extending along local X
    Capsule {
        /// Half-length of the straight section
        length: f32,
    },
    /// Anisotropic ball with per-axis size factors
    Ellipsoid {
        /// Per-axis scale on `radius`
        size: Vec3,
    },
    /// Cube influence volume
    Cube,
    /// Planar influence volume
    Plane,
}

/// A single metaball element
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MetaElement {
    /// Element center
    pub center: Vec3,
    /// Influence radius
    pub radius: f32,
    /// Shape of the influence volume
    pub shape: MetaShape,
    /// How quickly this element blends with neighbors (0.5-10)
    pub stiffness: f32,
    /// Euler rotation in radians (XYZ order)
    pub rotation: Vec3,
}

/// Errors an iso-surface evaluator can report
#[derive(Debug, Error)]
pub enum EvalError {
    /// The evaluator cannot run in the current execution mode
    #[error("iso-surface evaluator unavailable: {0}")]
    Unavailable(String),
    /// Evaluation ran but produced no polygons
    #[error("iso-surface evaluation produced an empty surface")]
    EmptySurface,
}

/// Host-tool seam for metaball meshing.
///
/// Implementations polygonize the blended scalar field of a creature's
/// elements at its `resolution` and `threshold`. None ships with this
/// crate; the fallback path covers its absence.
pub trait IsoSurfaceEvaluator {
    /// Polygonize the creature's blended field into a mesh
    fn evaluate(&self, creature: &MetaballCreature) -> Result<Mesh, EvalError>;
}

/// Collection of metaball elements forming a creature.
///
/// Append-only during construction via the `add_*` methods, read-only
/// during evaluation. Mutation stays local to the building function; a
/// finished creature is never modified.
#[derive(Debug, Clone)]
pub struct MetaballCreature {
    /// Asset name (also used for export headers)
    pub name: String,
    /// Ordered element list
    pub elements: Vec<MetaElement>,
    /// Evaluator cell size; lower = smoother but more polys
    pub resolution: f32,
    /// Surface threshold
    pub threshold: f32,
}

impl MetaballCreature {
    /// Create an empty creature with the default resolution (0.08)
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_resolution(name, 0.08)
    }

    /// Create an empty creature with an explicit evaluator resolution
    pub fn with_resolution(name: impl Into<String>, resolution: f32) -> Self {
        Self {
            name: name.into(),
            elements: Vec::new(),
            resolution,
            threshold: 0.0,
        }
    }

    /// Append a spherical element
    pub fn add_ball(&mut self, center: Vec3, radius: f32, stiffness: f32) -> &mut Self {
        self.elements.push(MetaElement {
            center,
            radius,
            shape: MetaShape::Ball,
            stiffness,
            rotation: Vec3::ZERO,
        });
        self
    }

    /// Append an ellipsoid element with per-axis size factors
    pub fn add_ellipsoid(
        &mut self,
        center: Vec3,
        radius: f32,
        size: Vec3,
        stiffness: f32,
        rotation: Vec3,
    ) -> &mut Self {
        self.elements.push(MetaElement {
            center,
            radius,
            shape: MetaShape::Ellipsoid { size },
            stiffness,
            rotation,
        });
        self
    }

    /// Append a capsule element extending along its rotated local X axis
    pub fn add_capsule(
        &mut self,
        center: Vec3,
        radius: f32,
        length: f32,
        stiffness: f32,
        rotation: Vec3,
    ) -> &mut Self {
        self.elements.push(MetaElement {
            center,
            radius,
            shape: MetaShape::Capsule { length },
            stiffness,
            rotation,
        });
        self
    }

    /// Append `count` balls evenly spaced from `start` to `end`, linearly
    /// interpolating radius. The workhorse for tentacles and tails.
    pub fn add_chain(
        &mut self,
        start: Vec3,
        end: Vec3,
        count: u32,
        radius_start: f32,
        radius_end: f32,
        stiffness: f32,
    ) -> &mut Self {
        for i in 0..count {
            let t = if count > 1 {
                i as f32 / (count - 1) as f32
            } else {
                0.0
            };
            let center = start + t * (end - start);
            let radius = radius_start + t * (radius_end - radius_start);
            self.add_ball(center, radius, stiffness);
        }
        self
    }

    /// Append `count` balls arranged evenly around a circle in the XY
    /// plane, offset by `z_offset` (good for spines and leg roots).
    pub fn add_radial(
        &mut self,
        center: Vec3,
        count: u32,
        orbit_radius: f32,
        ball_radius: f32,
        z_offset: f32,
        stiffness: f32,
    ) -> &mut Self {
        for i in 0..count {
            let angle = 2.0 * std::f32::consts::PI * i as f32 / count as f32;
            self.add_ball(
                Vec3::new(
                    center.x + orbit_radius * angle.cos(),
                    center.y + orbit_radius * angle.sin(),
                    center.z + z_offset,
                ),
                ball_radius,
                stiffness,
            );
        }
        self
    }

    /// Mesh this creature.
    ///
    /// Uses `evaluator` when one is given and it succeeds with a non-empty
    /// surface; otherwise takes the sphere fallback path with a warning.
    pub fn to_mesh(&self, evaluator: Option<&dyn IsoSurfaceEvaluator>) -> Mesh {
        if let Some(evaluator) = evaluator {
            match evaluator.evaluate(self) {
                Ok(mesh) if mesh.face_count() > 0 => return mesh,
                Ok(_) => {
                    warn!(name = %self.name, "evaluator returned an empty surface, using sphere fallback");
                }
                Err(err) => {
                    warn!(name = %self.name, %err, "iso-surface evaluation failed, using sphere fallback");
                }
            }
        }

        let mut mesh = self.fallback_spheres();
        mesh.apply(Weld {
            threshold: FALLBACK_WELD,
        })
        .apply(Subdivide { iterations: 1 });
        mesh
    }

    /// Instantiate every element as a UV sphere and merge, without welding.
    ///
    /// Stiffness is ignored; blending cannot be approximated per element.
    /// Capsules become three overlapping balls along their rotated axis;
    /// cubes and planes degrade to a ball and a flattened ellipsoid.
    fn fallback_spheres(&self) -> Mesh {
        let parts: Vec<Mesh> = self
            .elements
            .iter()
            .map(|elem| fallback_element(elem))
            .collect();
        let refs: Vec<&Mesh> = parts.iter().collect();
        merge(&refs)
    }
}

fn fallback_element(elem: &MetaElement) -> Mesh {
    match elem.shape {
        MetaShape::Ball | MetaShape::Cube => {
            generate_sphere(elem.center, elem.radius, FALLBACK_LAT, FALLBACK_LON)
        }
        MetaShape::Ellipsoid { size } => {
            let mut mesh =
                generate_ellipsoid(Vec3::ZERO, elem.radius * size, FALLBACK_LAT, FALLBACK_LON);
            let matrix = Mat4::from_translation(elem.center)
                * Mat4::from_euler(
                    EulerRot::XYZ,
                    elem.rotation.x,
                    elem.rotation.y,
                    elem.rotation.z,
                );
            mesh.apply(Transform::from_matrix(matrix));
            mesh
        }
        MetaShape::Capsule { length } => {
            let axis = Mat4::from_euler(
                EulerRot::XYZ,
                elem.rotation.x,
                elem.rotation.y,
                elem.rotation.z,
            )
            .transform_vector3(Vec3::X);
            let offsets = [-length * 0.5, 0.0, length * 0.5];
            let balls: Vec<Mesh> = offsets
                .iter()
                .map(|&o| {
                    generate_sphere(
                        elem.center + axis * o,
                        elem.radius,
                        FALLBACK_LAT,
                        FALLBACK_LON,
                    )
                })
                .collect();
            let refs: Vec<&Mesh> = balls.iter().collect();
            merge(&refs)
        }
        MetaShape::Plane => generate_ellipsoid(
            elem.center,
            Vec3::new(elem.radius, elem.radius, elem.radius * 0.25),
            FALLBACK_LAT,
            FALLBACK_LON,
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::vec3;

    struct FailingEvaluator;
    impl IsoSurfaceEvaluator for FailingEvaluator {
        fn evaluate(&self, _creature: &MetaballCreature) -> Result<Mesh, EvalError> {
            Err(EvalError::Unavailable("headless mode".into()))
        }
    }

    struct FixedEvaluator(Mesh);
    impl IsoSurfaceEvaluator for FixedEvaluator {
        fn evaluate(&self, _creature: &MetaballCreature) -> Result<Mesh, EvalError> {
            Ok(self.0.clone())
        }
    }

    fn three_ball_creature() -> MetaballCreature {
        let mut creature = MetaballCreature::new("blob");
        creature
            .add_ball(vec3(0.0, 0.0, 0.0), 0.3, 1.5)
            .add_ball(vec3(0.0, 0.0, 0.4), 0.2, 2.0)
            .add_ball(vec3(0.0, 0.0, -0.4), 0.2, 2.0);
        creature
    }

    #[test]
    fn test_fallback_sphere_counts() {
        let creature = three_ball_creature();
        let merged = creature.fallback_spheres();

        // Each fallback sphere is (8+1)*12 = 108 vertices.
        assert_eq!(merged.vertex_count(), 3 * 108);
        assert!(merged.indices_valid());

        // Welding collapses each sphere's duplicated pole rings.
        let mut welded = merged.clone();
        welded.apply(Weld {
            threshold: FALLBACK_WELD,
        });
        assert!(welded.vertex_count() < merged.vertex_count());

        // The full path adds one subdivision pass on top of the weld.
        let smoothed = creature.to_mesh(None);
        assert!(smoothed.indices_valid());
        assert_eq!(smoothed.face_count(), 4 * welded.face_count());
    }

    #[test]
    fn test_failed_evaluator_falls_back() {
        let creature = three_ball_creature();
        let via_fallback = creature.to_mesh(None);
        let via_failure = creature.to_mesh(Some(&FailingEvaluator));
        assert_eq!(via_fallback, via_failure);
    }

    #[test]
    fn test_successful_evaluator_wins() {
        let mut surface = Mesh::new();
        surface.add_vertex(vec3(0.0, 0.0, 0.0));
        surface.add_vertex(vec3(1.0, 0.0, 0.0));
        surface.add_vertex(vec3(0.0, 1.0, 0.0));
        surface.add_face(0, 1, 2);

        let creature = three_ball_creature();
        let mesh = creature.to_mesh(Some(&FixedEvaluator(surface.clone())));
        assert_eq!(mesh, surface);
    }

    #[test]
    fn test_empty_evaluator_surface_falls_back() {
        let creature = three_ball_creature();
        let mesh = creature.to_mesh(Some(&FixedEvaluator(Mesh::new())));
        assert!(mesh.face_count() > 0);
    }

    #[test]
    fn test_add_chain_interpolates() {
        let mut creature = MetaballCreature::new("chain");
        creature.add_chain(
            vec3(0.0, 0.0, 0.0),
            vec3(1.0, 0.0, 0.0),
            5,
            0.1,
            0.02,
            2.0,
        );

        assert_eq!(creature.elements.len(), 5);
        assert_eq!(creature.elements[0].center, vec3(0.0, 0.0, 0.0));
        assert_eq!(creature.elements[4].center, vec3(1.0, 0.0, 0.0));
        assert!((creature.elements[0].radius - 0.1).abs() < 1e-6);
        assert!((creature.elements[4].radius - 0.02).abs() < 1e-6);
        // Midpoint ball sits halfway in position and radius.
        assert_eq!(creature.elements[2].center, vec3(0.5, 0.0, 0.0));
        assert!((creature.elements[2].radius - 0.06).abs() < 1e-6);
    }

    #[test]
    fn test_add_chain_single_ball() {
        let mut creature = MetaballCreature::new("chain");
        creature.add_chain(vec3(1.0, 2.0, 3.0), vec3(9.0, 9.0, 9.0), 1, 0.1, 0.02, 2.0);
        assert_eq!(creature.elements.len(), 1);
        assert_eq!(creature.elements[0].center, vec3(1.0, 2.0, 3.0));
    }

    #[test]
    fn test_add_radial_placement() {
        let mut creature = MetaballCreature::new("radial");
        creature.add_radial(vec3(0.0, 0.0, 1.0), 4, 0.5, 0.05, 0.2, 2.0);

        assert_eq!(creature.elements.len(), 4);
        for elem in &creature.elements {
            let r = (elem.center.x.powi(2) + elem.center.y.powi(2)).sqrt();
            assert!((r - 0.5).abs() < 1e-6);
            assert!((elem.center.z - 1.2).abs() < 1e-6);
        }
    }
}
