use crate::math::{Ray, Vector3};
use crate::shapes::Shape;

/// A spherical collision shape
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sphere {
    /// The radius of the sphere
    radius: f32,
}

impl Sphere {
    /// Creates a new sphere with the given radius
    pub fn new(radius: f32) -> Self {
        Self {
            radius: radius.max(0.0),
        }
    }
}

impl Shape for Sphere {
    fn intersects_ray(&self, ray: &Ray, position: Vector3, max_distance: f32) -> Option<f32> {
        ray.intersect_sphere(position, self.radius)
            .filter(|&t| t <= max_distance)
    }
}
