mod blender;
mod oscillator;
mod state;

pub use self::blender::{blend_pose, MotionBlender};
pub use self::oscillator::StaticOscillator;
pub use self::state::{MotionState, ObjectPose, SmoothingRate};
