use crate::config::{OscillatorConfig, OBJECT_COUNT};
use crate::scene::ObjectRegistry;

/// Idle wobble: every object's target rotation follows `amplitude * sin(t * speed)`
///
/// Runs after blending and always overwrites `target.z_rotation`, dragged or not.
#[derive(Debug, Clone)]
pub struct StaticOscillator {
    amplitude: f32,
    speeds: [f32; OBJECT_COUNT],
}

impl StaticOscillator {
    /// Creates an oscillator with the configured amplitude and per-object speeds
    pub fn new(config: &OscillatorConfig) -> Self {
        Self {
            amplitude: config.amplitude,
            speeds: config.speeds,
        }
    }

    /// Angular speed of an object; ids past the table reuse the last speed
    pub fn speed(&self, index: usize) -> f32 {
        self.speeds[index.min(OBJECT_COUNT - 1)]
    }

    /// Rotation for an object at `elapsed` seconds
    pub fn rotation_at(&self, index: usize, elapsed: f64) -> f32 {
        let angle = elapsed * f64::from(self.speed(index));
        let rotation = (f64::from(self.amplitude) * angle.sin()) as f32;
        if rotation.is_finite() {
            rotation
        } else {
            0.0
        }
    }

    /// Writes the rotation target of every object
    pub fn apply(&self, objects: &mut ObjectRegistry, elapsed: f64) {
        for entry in objects.iter_mut() {
            entry.motion.target.z_rotation = self.rotation_at(entry.object.id.0, elapsed);
        }
    }
}
