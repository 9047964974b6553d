pub mod world;
pub mod config;
pub mod storage;

pub use self::world::RigidBodyWorld;
pub use self::config::SimulationConfig;
pub use self::storage::{BodyStorage, ConstraintStorage, IndexedStorage, Storage, StorageHandle};

/// A unique identifier for a body in the world
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BodyHandle(pub(crate) u32);

/// A unique identifier for a constraint in the world
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ConstraintHandle(pub(crate) u32);
