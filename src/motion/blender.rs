use crate::config::InteractionConfig;
use crate::core::RigidBodyWorld;
use crate::math::lerp;
use crate::motion::{ObjectPose, SmoothingRate};
use crate::scene::{ObjectId, ObjectRegistry};

/// Exponentially smooths every object's rendered pose toward its target
///
/// Targets of objects that are not being dragged follow their simulated body. The dragged
/// object's body is written back from its blended pose so the solver resumes from where
/// the object is drawn.
#[derive(Debug, Clone)]
pub struct MotionBlender {
    fast: f32,
    slow: f32,
}

impl MotionBlender {
    /// Reads both smoothing factors from the interaction settings
    pub fn new(config: &InteractionConfig) -> Self {
        Self {
            fast: sanitize_factor(config.fast_smoothing),
            slow: sanitize_factor(config.slow_smoothing),
        }
    }

    /// The smoothing factor for a rate
    pub fn factor(&self, rate: SmoothingRate) -> f32 {
        match rate {
            SmoothingRate::Fast => self.fast,
            SmoothingRate::Slow => self.slow,
        }
    }

    /// Runs one blending pass over every object
    pub fn apply(
        &self,
        world: &mut RigidBodyWorld,
        objects: &mut ObjectRegistry,
        active: Option<ObjectId>,
        rate: SmoothingRate,
    ) {
        let factor = self.factor(rate);

        for entry in objects.iter_mut() {
            let dragged = active == Some(entry.object.id);

            if !dragged {
                if let Ok(position) = world.body_position(entry.object.body) {
                    if position.is_finite() {
                        entry.motion.target.set_position(position);
                    }
                }
            }

            entry.motion.current = blend_pose(entry.motion.current, entry.motion.target, factor);

            if dragged {
                if let Err(err) = world.set_body_position(entry.object.body, entry.motion.current.position()) {
                    log::warn!("cannot write back dragged object {}: {}", entry.object.id, err);
                }
            }
        }
    }
}

/// One exponential smoothing step per axis and for rotation
///
/// Returns `current` unchanged if the result would not be finite.
pub fn blend_pose(current: ObjectPose, target: ObjectPose, factor: f32) -> ObjectPose {
    let factor = sanitize_factor(factor);
    let blended = ObjectPose {
        x: lerp(current.x, target.x, factor),
        y: lerp(current.y, target.y, factor),
        z: lerp(current.z, target.z, factor),
        z_rotation: lerp(current.z_rotation, target.z_rotation, factor),
    };

    if blended.is_finite() {
        blended
    } else {
        current
    }
}

fn sanitize_factor(factor: f32) -> f32 {
    if factor.is_finite() {
        factor.clamp(crate::math::EPSILON, 1.0)
    } else {
        1.0
    }
}
