use std::collections::HashMap;

use crate::math::Vector3;
use crate::scene::TransformHandle;

/// Receives the per-frame output of the scene
pub trait RenderSink {
    /// Updates one object's visual transform
    fn set_transform(&mut self, handle: TransformHandle, position: Vector3, z_rotation: f32);

    /// Updates the camera depth and the depth of the element following it
    fn set_camera_depth(&mut self, camera_z: f32, companion_z: f32);

    /// Asks for the frame to be drawn
    fn request_render(&mut self);
}

/// Sink that keeps the latest values in memory, for headless hosts
#[derive(Debug, Clone, Default)]
pub struct RecordingSink {
    pub transforms: HashMap<TransformHandle, (Vector3, f32)>,
    pub camera_z: f32,
    pub companion_z: f32,
    pub renders: usize,
}

impl RenderSink for RecordingSink {
    fn set_transform(&mut self, handle: TransformHandle, position: Vector3, z_rotation: f32) {
        self.transforms.insert(handle, (position, z_rotation));
    }

    fn set_camera_depth(&mut self, camera_z: f32, companion_z: f32) {
        self.camera_z = camera_z;
        self.companion_z = companion_z;
    }

    fn request_render(&mut self) {
        self.renders += 1;
    }
}
