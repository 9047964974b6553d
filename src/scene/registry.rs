use std::collections::BTreeMap;
use std::fmt;

use crate::core::{BodyHandle, ConstraintHandle};
use crate::error::SceneError;
use crate::motion::MotionState;
use crate::shapes::Compound;
use crate::Result;

/// Small stable id of a draggable object (0..5)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ObjectId(pub usize);

impl fmt::Display for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Opaque handle to a visual transform owned by the renderer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TransformHandle(pub u64);

/// A pickable, movable object backed by one dynamic body, one anchor and one tether
#[derive(Debug, Clone)]
pub struct DraggableObject {
    pub id: ObjectId,
    pub transform: TransformHandle,
    pub body: BodyHandle,
    pub anchor: BodyHandle,
    pub constraint: ConstraintHandle,

    /// Whether a pointer-down on this object starts a drag
    pub draggable: bool,

    /// Silhouette used by the proxy ray-caster
    pub silhouette: Compound,
}

/// A registry entry; an object is only ever visible together with its motion state
#[derive(Debug, Clone)]
pub struct SceneObject {
    pub object: DraggableObject,
    pub motion: MotionState,
}

/// Owning registry of every bound draggable object, keyed by id
#[derive(Debug, Default)]
pub struct ObjectRegistry {
    entries: BTreeMap<ObjectId, SceneObject>,
    committed_models: usize,
    expected_models: usize,
}

impl ObjectRegistry {
    /// Creates an empty registry that reports loaded after `expected_models` commits
    pub fn new(expected_models: usize) -> Self {
        Self {
            entries: BTreeMap::new(),
            committed_models: 0,
            expected_models,
        }
    }

    /// Returns true once every expected model has been committed
    pub fn is_loaded(&self) -> bool {
        self.committed_models >= self.expected_models && !self.entries.is_empty()
    }

    /// Returns whether an object with this id is bound
    pub fn contains(&self, id: ObjectId) -> bool {
        self.entries.contains_key(&id)
    }

    /// Inserts a fully constructed object
    pub fn insert(&mut self, object: DraggableObject, motion: MotionState) -> Result<()> {
        if self.entries.contains_key(&object.id) {
            return Err(SceneError::DuplicateObject(object.id.0));
        }
        self.entries.insert(object.id, SceneObject { object, motion });
        Ok(())
    }

    /// Records that one model finished binding
    pub fn mark_model_committed(&mut self) {
        self.committed_models += 1;
    }

    /// Gets an object by id
    pub fn get(&self, id: ObjectId) -> Option<&SceneObject> {
        self.entries.get(&id)
    }

    /// Gets a mutable object by id
    pub fn get_mut(&mut self, id: ObjectId) -> Option<&mut SceneObject> {
        self.entries.get_mut(&id)
    }

    /// Returns the motion state of an object
    pub fn motion(&self, id: ObjectId) -> Option<&MotionState> {
        self.entries.get(&id).map(|entry| &entry.motion)
    }

    /// Returns the motion state of an object for writing
    pub fn motion_mut(&mut self, id: ObjectId) -> Option<&mut MotionState> {
        self.entries.get_mut(&id).map(|entry| &mut entry.motion)
    }

    /// Iterates over all objects in id order
    pub fn iter(&self) -> impl Iterator<Item = &SceneObject> + '_ {
        self.entries.values()
    }

    /// Iterates mutably over all objects in id order
    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut SceneObject> + '_ {
        self.entries.values_mut()
    }

    /// Returns the number of bound objects
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns whether no object is bound
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
