use crate::math::{Ray, Vector3};
use std::fmt::Debug;

/// Base trait for collision shapes
///
/// Shapes are evaluated at a body position only. Bodies in this crate keep their
/// rotational degrees of freedom locked, so orientation never enters hit-testing.
pub trait Shape: Send + Sync + Debug + 'static {
    /// Returns the nearest hit distance of a ray against the shape placed at `position`
    fn intersects_ray(&self, ray: &Ray, position: Vector3, max_distance: f32) -> Option<f32>;
}
