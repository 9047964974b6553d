use crate::bodies::RigidBody;
use crate::core::{BodyHandle, BodyStorage};
use std::fmt::Debug;

/// Base trait for solver constraints
pub trait Constraint: Send + Sync + Debug + 'static {
    /// Returns the bodies involved in the constraint
    fn get_bodies(&self) -> &[BodyHandle];

    /// Runs one relaxation pass, moving the bodies toward satisfying the constraint
    fn solve_position(&mut self, bodies: &mut BodyStorage<RigidBody>);

    /// Returns the current violation of the constraint, or `None` if a body is missing
    fn error(&self, bodies: &BodyStorage<RigidBody>) -> Option<f32>;
}
