use crate::math::{Ray, Vector3};
use crate::shapes::{Shape, Sphere};

/// A compound shape made of spheres at local offsets
///
/// Used to approximate the silhouette of a draggable object with a handful of spheres.
#[derive(Debug, Clone, Default)]
pub struct Compound {
    /// The spheres that make up the compound shape, with their local offsets
    spheres: Vec<(Sphere, Vector3)>,
}

impl Compound {
    /// Creates a new empty compound shape
    pub fn new() -> Self {
        Self::default()
    }

    /// Lays out `count` equal spheres along the widest horizontal axis of a box
    /// with the given half extents
    pub fn along_extent(half_extents: Vector3, count: usize) -> Self {
        let count = count.max(1);
        let horizontal = half_extents.x >= half_extents.y;
        let (long, short) = if horizontal {
            (half_extents.x, half_extents.y)
        } else {
            (half_extents.y, half_extents.x)
        };
        let radius = short.max(half_extents.z).max(crate::math::EPSILON);

        let mut compound = Self::new();
        for i in 0..count {
            let offset = if count == 1 {
                0.0
            } else {
                // Evenly spaced from one end to the other
                -long + 2.0 * long * i as f32 / (count - 1) as f32
            };
            let local = if horizontal {
                Vector3::new(offset, 0.0, 0.0)
            } else {
                Vector3::new(0.0, offset, 0.0)
            };
            compound.add_sphere(Sphere::new(radius), local);
        }
        compound
    }

    /// Adds a sphere at the given local offset
    pub fn add_sphere(&mut self, sphere: Sphere, offset: Vector3) {
        self.spheres.push((sphere, offset));
    }

    /// Returns the number of spheres in the compound shape
    pub fn shape_count(&self) -> usize {
        self.spheres.len()
    }
}

impl Shape for Compound {
    fn intersects_ray(&self, ray: &Ray, position: Vector3, max_distance: f32) -> Option<f32> {
        self.spheres
            .iter()
            .filter_map(|(sphere, offset)| sphere.intersects_ray(ray, position + *offset, max_distance))
            .min_by(f32::total_cmp)
    }
}
