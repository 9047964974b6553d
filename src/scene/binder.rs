use crate::bodies::{LockedAxes, RigidBody};
use crate::config::{AnchorConfig, SceneConfig};
use crate::constraints::PointToPointConstraint;
use crate::core::RigidBodyWorld;
use crate::math::Vector3;
use crate::motion::{MotionState, ObjectPose};
use crate::scene::{object_id_for_mesh, DraggableObject, LoadedModel, MeshNode, ObjectId, ObjectRegistry};
use crate::shapes::Compound;
use crate::Result;

/// Tethers each draggable object to a static anchor behind it
///
/// Per object this creates a dynamic body (a compound of spheres, rotation locked), a
/// static anchor `anchor_offset` behind the rest position, and a point-to-point
/// constraint whose anchor-side pivot is `-anchor_offset`. The pivots coincide at the
/// rest position, so a released object relaxes back to rest through the solver alone.
#[derive(Debug, Clone)]
pub struct AnchorBinder {
    anchors: AnchorConfig,
    stiffness: f32,
    mesh_names: Vec<String>,
    strict_mesh_names: bool,
}

/// Everything needed to create one object, resolved before the world is touched
struct BindPlan<'a> {
    id: ObjectId,
    mesh: &'a MeshNode,
}

impl AnchorBinder {
    /// Creates a binder from the scene configuration
    pub fn new(config: &SceneConfig) -> Self {
        Self {
            anchors: config.anchors.clone(),
            stiffness: config.simulation.constraint_stiffness,
            mesh_names: config.mesh_names.to_vec(),
            strict_mesh_names: config.strict_mesh_names,
        }
    }

    /// Binds every mesh of a loaded model and commits them to world and registry
    ///
    /// All names are resolved first, so an error leaves both untouched. Meshes whose id is
    /// already taken are skipped with a warning. Returns the ids that were bound.
    pub fn bind(
        &self,
        model: &LoadedModel,
        world: &mut RigidBodyWorld,
        registry: &mut ObjectRegistry,
    ) -> Result<Vec<ObjectId>> {
        let mut plans: Vec<BindPlan> = Vec::new();
        for mesh in model.meshes() {
            let id = object_id_for_mesh(&mesh.name, &self.mesh_names, self.strict_mesh_names)?;
            if registry.contains(id) || plans.iter().any(|plan| plan.id == id) {
                log::warn!("mesh {:?} maps to object {} which is already bound, skipping", mesh.name, id);
                continue;
            }
            plans.push(BindPlan { id, mesh });
        }

        let mut bound = Vec::with_capacity(plans.len());
        for plan in plans {
            let (object, motion) = self.build_object(plan, world);
            let id = object.id;
            registry.insert(object, motion)?;
            bound.push(id);
        }
        registry.mark_model_committed();

        log::info!(
            "bound {} objects ({} bodies, {} constraints in world)",
            bound.len(),
            world.body_count(),
            world.constraint_count()
        );
        Ok(bound)
    }

    fn build_object(&self, plan: BindPlan, world: &mut RigidBodyWorld) -> (DraggableObject, MotionState) {
        let rest = plan.mesh.position;
        let silhouette = Compound::along_extent(plan.mesh.half_extents, self.anchors.silhouette_spheres);

        let body = world.add_body(
            RigidBody::new_dynamic(silhouette.clone(), rest, self.anchors.body_mass)
                .with_locked_axes(LockedAxes::ALL_ROTATIONS),
        );

        let anchor_position = rest + Vector3::new(0.0, 0.0, self.anchors.anchor_offset);
        let anchor = world.add_body(RigidBody::new_static(Compound::new(), anchor_position));

        let constraint = world.add_constraint(Box::new(
            PointToPointConstraint::new(
                body,
                anchor,
                Vector3::zero(),
                Vector3::new(0.0, 0.0, -self.anchors.anchor_offset),
            )
            .with_stiffness(self.stiffness),
        ));

        log::debug!("object {} ({:?}) anchored at {}", plan.id, plan.mesh.name, anchor_position);

        let object = DraggableObject {
            id: plan.id,
            transform: plan.mesh.transform,
            body,
            anchor,
            constraint,
            draggable: true,
            silhouette,
        };
        (object, MotionState::at_rest(ObjectPose::at(rest)))
    }
}
