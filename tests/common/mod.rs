#![allow(dead_code)]

use tether_scene::config::SceneConfig;
use tether_scene::math::Vector3;
use tether_scene::scene::{AnchorBinder, LoadedModel, MeshNode, ObjectRegistry, SceneNode, TransformHandle};
use tether_scene::RigidBodyWorld;

pub const REST_DEPTH: f32 = -2.0;

/// Horizontal rest position of each letter
pub const REST_X: [f32; 5] = [-3.0, -1.5, 0.0, 1.5, 3.0];

pub fn mesh(name: &str, handle: u64, x: f32) -> SceneNode {
    SceneNode::Mesh(MeshNode {
        name: name.to_string(),
        transform: TransformHandle(handle),
        position: Vector3::new(x, 0.0, REST_DEPTH),
        half_extents: Vector3::new(0.3, 0.5, 0.05),
    })
}

/// The five letters of the default name set, nested the way a model loader delivers them
pub fn block_model() -> LoadedModel {
    LoadedModel::new(vec![
        SceneNode::Other {
            name: "Light".to_string(),
        },
        SceneNode::Group {
            name: "Letters".to_string(),
            children: ["B", "L", "O", "C", "K"]
                .iter()
                .enumerate()
                .map(|(i, name)| mesh(name, 100 + i as u64, REST_X[i]))
                .collect(),
        },
    ])
}

/// A world and registry with the block model bound
pub fn bound_scene(config: &SceneConfig) -> (RigidBodyWorld, ObjectRegistry) {
    let mut world = RigidBodyWorld::with_config(config.simulation.clone());
    let mut registry = ObjectRegistry::new(config.expected_models);
    AnchorBinder::new(config)
        .bind(&block_model(), &mut world, &mut registry)
        .expect("block model binds");
    (world, registry)
}
