use crate::error::SceneError;
use crate::math::Vector3;
use crate::scene::{ObjectId, TransformHandle};
use crate::Result;

/// A mesh delivered by the asset loader
#[derive(Debug, Clone, PartialEq)]
pub struct MeshNode {
    pub name: String,
    pub transform: TransformHandle,

    /// Rest position in world space
    pub position: Vector3,

    /// Half size of the mesh bounding box
    pub half_extents: Vector3,
}

/// A node of a loaded model, tagged by kind so the core never inspects types
#[derive(Debug, Clone, PartialEq)]
pub enum SceneNode {
    Mesh(MeshNode),
    Group { name: String, children: Vec<SceneNode> },

    /// Anything that is neither a mesh nor a group (lights, cameras, helpers)
    Other { name: String },
}

/// One completed model load
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LoadedModel {
    pub nodes: Vec<SceneNode>,
}

impl LoadedModel {
    /// Creates a model from its top-level nodes
    pub fn new(nodes: Vec<SceneNode>) -> Self {
        Self { nodes }
    }

    /// Collects every mesh in depth-first order
    pub fn meshes(&self) -> Vec<&MeshNode> {
        fn walk<'a>(nodes: &'a [SceneNode], out: &mut Vec<&'a MeshNode>) {
            for node in nodes {
                match node {
                    SceneNode::Mesh(mesh) => out.push(mesh),
                    SceneNode::Group { children, .. } => walk(children, out),
                    SceneNode::Other { .. } => {}
                }
            }
        }

        let mut out = Vec::new();
        walk(&self.nodes, &mut out);
        out
    }
}

/// Maps a mesh name to its object id
///
/// Recognized names map to their position in `names`. Anything else maps to the last
/// object, unless `strict` is set, in which case it is rejected.
pub fn object_id_for_mesh(name: &str, names: &[String], strict: bool) -> Result<ObjectId> {
    if let Some(index) = names.iter().position(|n| n == name) {
        return Ok(ObjectId(index));
    }

    if strict || names.is_empty() {
        return Err(SceneError::UnknownMeshName(name.to_string()));
    }

    log::warn!(
        "mesh {:?} is not one of {:?}, treating it as object {}",
        name,
        names,
        names.len() - 1
    );
    Ok(ObjectId(names.len() - 1))
}
