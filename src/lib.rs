pub mod math;
pub mod core;
pub mod bodies;
pub mod shapes;
pub mod constraints;
pub mod config;
pub mod scene;
pub mod interaction;
pub mod motion;
pub mod camera;
pub mod frame;

/// Re-export common types for easier usage
pub use crate::core::{RigidBodyWorld, SimulationConfig};
pub use crate::bodies::{RigidBody, RigidBodyType, RigidBodyHandle, LockedAxes};
pub use crate::config::SceneConfig;
pub use crate::scene::{AnchorBinder, DraggableObject, ObjectId, ObjectRegistry};
pub use crate::interaction::{DragController, PickResult, PickingController, PointerInput};
pub use crate::motion::{MotionBlender, MotionState, ObjectPose, StaticOscillator};
pub use crate::camera::ScrollCameraRig;
pub use crate::frame::FrameScheduler;
pub use crate::math::Vector3;

/// Error types for scene construction
pub mod error {
    use thiserror::Error;

    #[derive(Error, Debug, Clone, PartialEq)]
    pub enum SceneError {
        #[error("Invalid parameter: {0}")]
        InvalidParameter(String),

        #[error("Resource not found: {0}")]
        ResourceNotFound(String),

        #[error("Unrecognized mesh name: {0}")]
        UnknownMeshName(String),

        #[error("Object {0} is already bound")]
        DuplicateObject(usize),
    }
}

/// Result type for scene operations
pub type Result<T> = std::result::Result<T, error::SceneError>;

/// Crate version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
