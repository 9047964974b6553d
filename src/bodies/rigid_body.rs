use crate::bodies::{LockedAxes, RigidBodyType};
use crate::core::BodyHandle;
use crate::math::Vector3;
use crate::shapes::Compound;

/// Type alias for a handle to a rigid body
pub type RigidBodyHandle = BodyHandle;

/// A rigid body for the constraint solver
#[derive(Debug, Clone)]
pub struct RigidBody {
    /// The body's position in world space
    position: Vector3,

    /// The body's linear velocity
    linear_velocity: Vector3,

    /// The body's angular velocity
    angular_velocity: Vector3,

    /// Sphere offsets approximating the body's silhouette
    shape: Compound,

    /// The body's type, derived from its mass
    body_type: RigidBodyType,

    /// The body's mass, zero for static bodies
    mass: f32,

    /// Inverse of the body's mass (for efficiency)
    inv_mass: f32,

    /// Rotational degrees of freedom that are not simulated
    locked_axes: LockedAxes,
}

impl RigidBody {
    /// Creates a new rigid body; a mass of zero makes it static
    pub fn new(shape: Compound, position: Vector3, mass: f32) -> Self {
        let body_type = RigidBodyType::from_mass(mass);
        let (mass, inv_mass) = match body_type {
            RigidBodyType::Dynamic => (mass, 1.0 / mass),
            RigidBodyType::Static => (0.0, 0.0),
        };

        Self {
            position,
            linear_velocity: Vector3::zero(),
            angular_velocity: Vector3::zero(),
            shape,
            body_type,
            mass,
            inv_mass,
            locked_axes: LockedAxes::empty(),
        }
    }

    /// Creates a new dynamic rigid body with the given shape, position and mass
    pub fn new_dynamic(shape: Compound, position: Vector3, mass: f32) -> Self {
        Self::new(shape, position, mass.max(crate::math::EPSILON))
    }

    /// Creates a new static rigid body with the given shape and position
    pub fn new_static(shape: Compound, position: Vector3) -> Self {
        Self::new(shape, position, 0.0)
    }

    /// Builder-style variant of [`RigidBody::set_locked_axes`]
    pub fn with_locked_axes(mut self, locked: LockedAxes) -> Self {
        self.set_locked_axes(locked);
        self
    }

    /// Returns the body's position
    pub fn get_position(&self) -> Vector3 {
        self.position
    }

    /// Sets the body's position
    pub fn set_position(&mut self, position: Vector3) {
        self.position = position;
    }

    /// Returns the body's linear velocity
    pub fn get_linear_velocity(&self) -> Vector3 {
        self.linear_velocity
    }

    /// Sets the body's linear velocity
    pub fn set_linear_velocity(&mut self, velocity: Vector3) {
        self.linear_velocity = velocity;
    }

    /// Returns the body's angular velocity
    pub fn get_angular_velocity(&self) -> Vector3 {
        self.angular_velocity
    }

    /// Sets the body's angular velocity, dropping components along locked axes
    pub fn set_angular_velocity(&mut self, velocity: Vector3) {
        self.angular_velocity = self.mask_angular(velocity);
    }

    /// Returns the rotational degrees of freedom that are locked
    pub fn locked_axes(&self) -> LockedAxes {
        self.locked_axes
    }

    /// Locks rotational degrees of freedom
    pub fn set_locked_axes(&mut self, locked: LockedAxes) {
        self.locked_axes = locked;
        self.angular_velocity = self.mask_angular(self.angular_velocity);
    }

    /// Returns a reference to the body's shape
    pub fn get_shape(&self) -> &Compound {
        &self.shape
    }

    /// Returns the body's mass
    pub fn get_mass(&self) -> f32 {
        self.mass
    }

    /// Returns the body's inverse mass
    pub fn get_inverse_mass(&self) -> f32 {
        self.inv_mass
    }

    /// Returns the body type
    pub fn get_body_type(&self) -> RigidBodyType {
        self.body_type
    }

    /// Returns whether the body is simulated
    pub fn is_dynamic(&self) -> bool {
        self.body_type == RigidBodyType::Dynamic
    }

    /// Converts a point in body-local space to world space
    ///
    /// Bodies never rotate, so this is a translation by the body position.
    pub fn local_to_world(&self, local: Vector3) -> Vector3 {
        self.position + local
    }

    /// Moves the body to `position` and stops all of its motion
    pub fn teleport(&mut self, position: Vector3) {
        self.position = position;
        self.linear_velocity = Vector3::zero();
        self.angular_velocity = Vector3::zero();
    }

    /// Applies gravity and damping to the velocities
    pub fn integrate_forces(&mut self, gravity: Vector3, world_damping: f32, dt: f32) {
        if !self.is_dynamic() {
            return;
        }

        self.linear_velocity += gravity * dt;

        let damping_factor = 1.0 - world_damping.clamp(0.0, 1.0);
        self.linear_velocity *= damping_factor;
        self.angular_velocity *= damping_factor;
    }

    /// Integrates the linear velocity into the position
    pub fn integrate_velocity(&mut self, dt: f32) {
        if !self.is_dynamic() {
            return;
        }

        self.position += self.linear_velocity * dt;
    }

    fn mask_angular(&self, mut velocity: Vector3) -> Vector3 {
        if self.locked_axes.contains(LockedAxes::ROTATION_X) {
            velocity.x = 0.0;
        }
        if self.locked_axes.contains(LockedAxes::ROTATION_Y) {
            velocity.y = 0.0;
        }
        if self.locked_axes.contains(LockedAxes::ROTATION_Z) {
            velocity.z = 0.0;
        }
        velocity
    }
}
