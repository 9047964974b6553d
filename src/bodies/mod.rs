mod rigid_body;
mod body_type;

pub use self::rigid_body::{RigidBody, RigidBodyHandle};
pub use self::body_type::RigidBodyType;
pub use self::body_flags::LockedAxes;

/// Flags for controlling body behavior
pub mod body_flags {
    use bitflags::bitflags;

    bitflags! {
        /// Degrees of freedom a body is not allowed to move along
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
        pub struct LockedAxes: u8 {
            /// Rotation about the x axis is locked
            const ROTATION_X = 0x01;

            /// Rotation about the y axis is locked
            const ROTATION_Y = 0x02;

            /// Rotation about the z axis is locked
            const ROTATION_Z = 0x04;

            /// Every rotational degree of freedom is locked, only translation is simulated
            const ALL_ROTATIONS = Self::ROTATION_X.bits() | Self::ROTATION_Y.bits() | Self::ROTATION_Z.bits();
        }
    }
}
