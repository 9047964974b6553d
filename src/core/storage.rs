use std::marker::PhantomData;

use crate::core::{BodyHandle, ConstraintHandle};
use crate::error::SceneError;
use crate::Result;

/// Handle types that index into a [`Storage`]
pub trait StorageHandle: Copy + std::fmt::Debug {
    /// Builds a handle from a slot index
    fn from_index(index: usize) -> Self;

    /// Returns the slot index of the handle
    fn index(self) -> usize;
}

impl StorageHandle for BodyHandle {
    fn from_index(index: usize) -> Self {
        BodyHandle(index as u32)
    }

    fn index(self) -> usize {
        self.0 as usize
    }
}

impl StorageHandle for ConstraintHandle {
    fn from_index(index: usize) -> Self {
        ConstraintHandle(index as u32)
    }

    fn index(self) -> usize {
        self.0 as usize
    }
}

/// Generic storage trait for solver objects
///
/// Items are only ever appended: the scene is fixed-size once built, so there is no removal.
pub trait Storage<T, H> {
    /// Creates a new empty storage
    fn new() -> Self;

    /// Adds an item to the storage and returns its handle
    fn add(&mut self, item: T) -> H;

    /// Gets a reference to an item by its handle
    fn get(&self, handle: H) -> Option<&T>;

    /// Gets a mutable reference to an item by its handle
    fn get_mut(&mut self, handle: H) -> Option<&mut T>;

    /// Returns the number of items in the storage
    fn len(&self) -> usize;

    /// Returns whether the storage is empty
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns an iterator over all items, in insertion order
    fn iter<'a>(&'a self) -> impl Iterator<Item = (H, &'a T)> + 'a
    where
        T: 'a;

    /// Returns a mutable iterator over all items, in insertion order
    fn iter_mut<'a>(&'a mut self) -> impl Iterator<Item = (H, &'a mut T)> + 'a
    where
        T: 'a;
}

/// Append-only storage addressed by dense handles
#[derive(Debug, Clone)]
pub struct IndexedStorage<H, T> {
    items: Vec<T>,
    _handle: PhantomData<H>,
}

impl<H: StorageHandle, T> Storage<T, H> for IndexedStorage<H, T> {
    fn new() -> Self {
        Self {
            items: Vec::new(),
            _handle: PhantomData,
        }
    }

    fn add(&mut self, item: T) -> H {
        let handle = H::from_index(self.items.len());
        self.items.push(item);
        handle
    }

    fn get(&self, handle: H) -> Option<&T> {
        self.items.get(handle.index())
    }

    fn get_mut(&mut self, handle: H) -> Option<&mut T> {
        self.items.get_mut(handle.index())
    }

    fn len(&self) -> usize {
        self.items.len()
    }

    fn iter<'a>(&'a self) -> impl Iterator<Item = (H, &'a T)> + 'a
    where
        T: 'a,
    {
        self.items
            .iter()
            .enumerate()
            .map(|(i, item)| (H::from_index(i), item))
    }

    fn iter_mut<'a>(&'a mut self) -> impl Iterator<Item = (H, &'a mut T)> + 'a
    where
        T: 'a,
    {
        self.items
            .iter_mut()
            .enumerate()
            .map(|(i, item)| (H::from_index(i), item))
    }
}

/// Storage for rigid bodies
pub type BodyStorage<T> = IndexedStorage<BodyHandle, T>;

/// Storage for constraints
pub type ConstraintStorage<T> = IndexedStorage<ConstraintHandle, T>;

impl<T> IndexedStorage<BodyHandle, T> {
    /// Gets a body by its handle, returning an error if not found
    pub fn get_body(&self, handle: BodyHandle) -> Result<&T> {
        self.get(handle)
            .ok_or_else(|| SceneError::ResourceNotFound(format!("Body with handle {:?} not found", handle)))
    }

    /// Gets a mutable reference to a body by its handle, returning an error if not found
    pub fn get_body_mut(&mut self, handle: BodyHandle) -> Result<&mut T> {
        self.get_mut(handle)
            .ok_or_else(|| SceneError::ResourceNotFound(format!("Body with handle {:?} not found", handle)))
    }
}

impl<T> IndexedStorage<ConstraintHandle, T> {
    /// Gets a constraint by its handle, returning an error if not found
    pub fn get_constraint(&self, handle: ConstraintHandle) -> Result<&T> {
        self.get(handle).ok_or_else(|| {
            SceneError::ResourceNotFound(format!("Constraint with handle {:?} not found", handle))
        })
    }
}
