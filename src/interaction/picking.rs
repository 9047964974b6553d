use crate::camera::PerspectiveCamera;
use crate::interaction::Ndc;
use crate::math::Ray;
use crate::scene::{ObjectId, ObjectRegistry};
use crate::shapes::Shape;

/// One ray hit against a draggable object
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PickHit {
    pub object: ObjectId,
    pub distance: f32,
}

/// Hits ordered nearest first; empty when nothing was hit or the scene is not loaded
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PickResult {
    hits: Vec<PickHit>,
}

impl PickResult {
    /// An empty result
    pub fn empty() -> Self {
        Self::default()
    }

    /// Builds a result from unordered hits, dropping non-finite distances
    pub fn from_hits(mut hits: Vec<PickHit>) -> Self {
        hits.retain(|hit| hit.distance.is_finite());
        hits.sort_by(|a, b| a.distance.total_cmp(&b.distance));
        Self { hits }
    }

    /// The closest hit
    pub fn nearest(&self) -> Option<PickHit> {
        self.hits.first().copied()
    }

    /// All hits, nearest first
    pub fn hits(&self) -> &[PickHit] {
        &self.hits
    }

    /// True when nothing was hit
    pub fn is_empty(&self) -> bool {
        self.hits.is_empty()
    }
}

/// Ray-casts against the meshes of the draggable objects
pub trait Raycaster {
    /// Returns every object hit by `ray` within `max_distance`, in any order
    fn cast(&self, ray: &Ray, max_distance: f32, objects: &ObjectRegistry) -> Vec<PickHit>;
}

/// Ray-caster that tests each object's sphere silhouette at its rendered position
#[derive(Debug, Clone, Copy, Default)]
pub struct ProxyRaycaster;

impl Raycaster for ProxyRaycaster {
    fn cast(&self, ray: &Ray, max_distance: f32, objects: &ObjectRegistry) -> Vec<PickHit> {
        objects
            .iter()
            .filter_map(|entry| {
                let position = entry.motion.current.position();
                entry
                    .object
                    .silhouette
                    .intersects_ray(ray, position, max_distance)
                    .map(|distance| PickHit {
                        object: entry.object.id,
                        distance,
                    })
            })
            .collect()
    }
}

/// Turns a pointer position into a distance-sorted [`PickResult`]
#[derive(Debug, Clone)]
pub struct PickingController {
    max_distance: f32,
}

impl PickingController {
    /// Ignores hits further than `max_distance` from the camera
    pub fn new(max_distance: f32) -> Self {
        Self { max_distance }
    }

    /// Casts from the camera through `ndc`
    ///
    /// Always empty until the registry reports every object loaded.
    pub fn pick(
        &self,
        ndc: Ndc,
        camera: &PerspectiveCamera,
        objects: &ObjectRegistry,
        raycaster: &dyn Raycaster,
    ) -> PickResult {
        if !objects.is_loaded() {
            return PickResult::empty();
        }

        let ray = camera.ray_through(ndc);
        let hits = raycaster
            .cast(&ray, self.max_distance, objects)
            .into_iter()
            .filter(|hit| objects.contains(hit.object))
            .collect();
        PickResult::from_hits(hits)
    }
}
