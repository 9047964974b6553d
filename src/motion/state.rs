use approx::{AbsDiffEq, RelativeEq};

use crate::math::Vector3;

/// A rendered transform: position plus rotation about the view axis
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ObjectPose {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub z_rotation: f32,
}

impl ObjectPose {
    /// Creates a pose at `position` with no rotation
    pub fn at(position: Vector3) -> Self {
        Self {
            x: position.x,
            y: position.y,
            z: position.z,
            z_rotation: 0.0,
        }
    }

    /// Returns the position part of the pose
    pub fn position(&self) -> Vector3 {
        Vector3::new(self.x, self.y, self.z)
    }

    /// Overwrites the position part of the pose, keeping the rotation
    pub fn set_position(&mut self, position: Vector3) {
        self.x = position.x;
        self.y = position.y;
        self.z = position.z;
    }

    /// Returns true if every component is finite
    pub fn is_finite(&self) -> bool {
        self.position().is_finite() && self.z_rotation.is_finite()
    }
}

impl AbsDiffEq for ObjectPose {
    type Epsilon = f32;

    fn default_epsilon() -> f32 {
        f32::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: f32) -> bool {
        self.position().abs_diff_eq(&other.position(), epsilon)
            && self.z_rotation.abs_diff_eq(&other.z_rotation, epsilon)
    }
}

impl RelativeEq for ObjectPose {
    fn default_max_relative() -> f32 {
        f32::default_max_relative()
    }

    fn relative_eq(&self, other: &Self, epsilon: f32, max_relative: f32) -> bool {
        self.position().relative_eq(&other.position(), epsilon, max_relative)
            && self.z_rotation.relative_eq(&other.z_rotation, epsilon, max_relative)
    }
}

/// Rendered (`current`) and desired (`target`) pose of one draggable object
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MotionState {
    pub current: ObjectPose,
    pub target: ObjectPose,
}

impl MotionState {
    /// Starts at rest: current and target both equal the rest pose
    pub fn at_rest(rest: ObjectPose) -> Self {
        Self {
            current: rest,
            target: rest,
        }
    }
}

/// The shared smoothing rate; one value for all objects
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SmoothingRate {
    /// Responsive blending while a drag is in progress
    Fast,

    /// Gentle blending while objects settle
    #[default]
    Slow,
}
