use nalgebra::{Perspective3, Point3};

use crate::config::CameraConfig;
use crate::interaction::{Ndc, Viewport};
use crate::math::{Ray, Vector3};

/// A camera looking down the negative z axis from `position`
#[derive(Debug, Clone)]
pub struct PerspectiveCamera {
    pub position: Vector3,
    projection: Perspective3<f32>,
}

impl PerspectiveCamera {
    /// Creates a camera at the origin for the given viewport
    pub fn new(config: &CameraConfig, viewport: Viewport) -> Self {
        Self {
            position: Vector3::zero(),
            projection: Perspective3::new(
                viewport.aspect(),
                config.fov_y_degrees.to_radians(),
                config.near,
                config.far,
            ),
        }
    }

    /// Follows a viewport resize
    pub fn set_viewport(&mut self, viewport: Viewport) {
        let aspect = viewport.aspect();
        if (self.projection.aspect() - aspect).abs() > crate::math::EPSILON {
            self.projection.set_aspect(aspect);
        }
    }

    /// Returns the aspect ratio in use
    pub fn aspect(&self) -> f32 {
        self.projection.aspect()
    }

    /// Builds the world-space ray from the camera through a point in normalized device coordinates
    pub fn ray_through(&self, ndc: Ndc) -> Ray {
        let near = self.projection.unproject_point(&Point3::new(ndc.x, ndc.y, -1.0));
        let far = self.projection.unproject_point(&Point3::new(ndc.x, ndc.y, 1.0));
        let direction = Vector3::from_point(&far) - Vector3::from_point(&near);
        Ray::new(self.position, direction)
    }

    /// Projects a point in normalized device coordinates onto the plane `z = depth`
    pub fn project_to_depth(&self, ndc: Ndc, depth: f32) -> Option<Vector3> {
        self.ray_through(ndc).intersect_depth_plane(depth)
    }
}

/// Maps scroll progress to camera depth; a companion element follows the same depth
#[derive(Debug, Clone, PartialEq)]
pub struct ScrollCameraRig {
    scene_depth: f32,
    camera_z: f32,
    companion_z: f32,
}

impl ScrollCameraRig {
    /// Creates a rig at progress 0
    pub fn new(scene_depth: f32) -> Self {
        Self {
            scene_depth,
            camera_z: 0.0,
            companion_z: 0.0,
        }
    }

    /// Camera depth for a scroll progress, clamped to [0, 1]
    pub fn depth_for(&self, progress: f32) -> f32 {
        let progress = if progress.is_finite() { progress.clamp(0.0, 1.0) } else { 0.0 };
        progress * self.scene_depth
    }

    /// Applies the latest scroll progress and returns the camera depth
    pub fn update(&mut self, progress: f32) -> f32 {
        self.camera_z = self.depth_for(progress);
        self.companion_z = self.camera_z;
        self.camera_z
    }

    /// Current camera depth
    pub fn camera_z(&self) -> f32 {
        self.camera_z
    }

    /// Depth of the element tracking the camera
    pub fn companion_z(&self) -> f32 {
        self.companion_z
    }
}
