mod assets;
mod binder;
mod inbox;
mod registry;

pub use self::assets::{object_id_for_mesh, LoadedModel, MeshNode, SceneNode};
pub use self::binder::AnchorBinder;
pub use self::inbox::{AssetInbox, AssetSender};
pub use self::registry::{DraggableObject, ObjectId, ObjectRegistry, SceneObject, TransformHandle};
