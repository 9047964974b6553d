use crate::math::Vector3;

#[cfg(feature = "serialize")]
use serde::{Deserialize, Serialize};

/// Ray used for pointer picking and drag-plane projection
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct Ray {
    /// Origin of the ray
    pub origin: Vector3,

    /// Direction of the ray (normalized on construction)
    pub direction: Vector3,
}

impl Ray {
    /// Creates a new ray, normalizing the direction
    #[inline]
    pub fn new(origin: Vector3, direction: Vector3) -> Self {
        Self {
            origin,
            direction: direction.normalize(),
        }
    }

    /// Returns the point at a given distance along the ray
    #[inline]
    pub fn point_at(&self, t: f32) -> Vector3 {
        self.origin + self.direction * t
    }

    /// Intersects the ray with a sphere, returning the nearest non-negative hit distance
    pub fn intersect_sphere(&self, center: Vector3, radius: f32) -> Option<f32> {
        let to_origin = self.origin - center;
        let a = self.direction.length_squared();
        if a <= crate::math::EPSILON {
            return None;
        }
        let b = 2.0 * to_origin.dot(&self.direction);
        let c = to_origin.length_squared() - radius * radius;

        let discriminant = b * b - 4.0 * a * c;
        if discriminant < 0.0 {
            return None;
        }

        let root = discriminant.sqrt();
        let t1 = (-b - root) / (2.0 * a);
        let t2 = (-b + root) / (2.0 * a);

        // Origin inside the sphere counts as a hit at the exit point
        if t1 >= 0.0 {
            Some(t1)
        } else if t2 >= 0.0 {
            Some(t2)
        } else {
            None
        }
    }

    /// Intersects the ray with the plane `z = depth`
    ///
    /// Returns `None` when the ray is parallel to the plane or the plane lies behind the origin.
    pub fn intersect_depth_plane(&self, depth: f32) -> Option<Vector3> {
        if crate::math::approx_zero(self.direction.z) {
            return None;
        }
        let t = (depth - self.origin.z) / self.direction.z;
        if t < 0.0 {
            return None;
        }
        Some(self.point_at(t))
    }
}
