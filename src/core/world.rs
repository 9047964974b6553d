use crate::bodies::RigidBody;
use crate::constraints::Constraint;
use crate::core::storage::Storage;
use crate::core::{BodyHandle, BodyStorage, ConstraintHandle, ConstraintStorage, SimulationConfig};
use crate::math::Vector3;
use crate::Result;

/// Owns every rigid body and constraint and steps the constraint solver
///
/// Bodies and constraints are registered while the scene is built and never removed.
#[derive(Debug)]
pub struct RigidBodyWorld {
    /// All rigid bodies in the world
    bodies: BodyStorage<RigidBody>,

    /// All constraints in the world
    constraints: ConstraintStorage<Box<dyn Constraint>>,

    /// Configuration for the solver
    config: SimulationConfig,

    /// Positions at the start of the current sub-step, reused between steps
    previous_positions: Vec<Vector3>,

    /// The total elapsed simulation time
    time: f32,
}

impl Default for RigidBodyWorld {
    fn default() -> Self {
        Self::new()
    }
}

impl RigidBodyWorld {
    /// Creates a new world with default settings
    pub fn new() -> Self {
        Self::with_config(SimulationConfig::default())
    }

    /// Creates a new world with the given configuration
    pub fn with_config(config: SimulationConfig) -> Self {
        Self {
            bodies: BodyStorage::new(),
            constraints: ConstraintStorage::new(),
            config,
            previous_positions: Vec::new(),
            time: 0.0,
        }
    }

    /// Returns the current simulation time
    pub fn get_time(&self) -> f32 {
        self.time
    }

    /// Returns a reference to the solver configuration
    pub fn get_config(&self) -> &SimulationConfig {
        &self.config
    }

    /// Adds a rigid body to the world and returns its handle
    pub fn add_body(&mut self, body: RigidBody) -> BodyHandle {
        self.bodies.add(body)
    }

    /// Gets a reference to a rigid body by its handle
    pub fn get_body(&self, handle: BodyHandle) -> Result<&RigidBody> {
        self.bodies.get_body(handle)
    }

    /// Gets a mutable reference to a rigid body by its handle
    pub fn get_body_mut(&mut self, handle: BodyHandle) -> Result<&mut RigidBody> {
        self.bodies.get_body_mut(handle)
    }

    /// Returns the position of a body
    pub fn body_position(&self, handle: BodyHandle) -> Result<Vector3> {
        Ok(self.bodies.get_body(handle)?.get_position())
    }

    /// Moves a body to `position` and zeroes its linear and angular velocity
    pub fn set_body_position(&mut self, handle: BodyHandle, position: Vector3) -> Result<()> {
        self.bodies.get_body_mut(handle)?.teleport(position);
        Ok(())
    }

    /// Adds a constraint to the world and returns its handle
    pub fn add_constraint(&mut self, constraint: Box<dyn Constraint>) -> ConstraintHandle {
        self.constraints.add(constraint)
    }

    /// Gets a reference to a constraint by its handle
    pub fn get_constraint(&self, handle: ConstraintHandle) -> Result<&dyn Constraint> {
        Ok(self.constraints.get_constraint(handle)?.as_ref())
    }

    /// Returns the current pivot separation of a constraint
    pub fn constraint_error(&self, handle: ConstraintHandle) -> Result<f32> {
        let constraint = self.constraints.get_constraint(handle)?;
        Ok(constraint.error(&self.bodies).unwrap_or(0.0))
    }

    /// Advances the solver by `time_step`, clamped to the configured maximum step
    pub fn step(&mut self, time_step: f32) {
        // The configured maximum may be NaN or negative
        let clamped = if time_step.is_finite() {
            time_step.max(0.0).min(self.config.max_step)
        } else {
            0.0
        };

        if clamped <= crate::math::EPSILON {
            return;
        }

        // Equal sub-steps, none meaningfully longer than the fixed step
        let max_substeps = self.config.max_substeps.max(1) as usize;
        let substeps = ((clamped / self.config.time_step - 1.0e-3).ceil() as usize).clamp(1, max_substeps);
        let dt = clamped / substeps as f32;

        for _ in 0..substeps {
            self.step_simulation(dt);
        }

        self.time += clamped;
    }

    /// Performs a single sub-step: predict, relax constraints, derive velocities
    fn step_simulation(&mut self, dt: f32) {
        self.previous_positions.clear();
        self.previous_positions
            .extend(self.bodies.iter().map(|(_, body)| body.get_position()));

        for (_, body) in self.bodies.iter_mut() {
            body.integrate_forces(self.config.gravity, self.config.linear_damping, dt);
            body.integrate_velocity(dt);
        }

        for _ in 0..self.config.solver_iterations {
            for (_, constraint) in self.constraints.iter_mut() {
                constraint.solve_position(&mut self.bodies);
            }
        }

        for ((_, body), previous) in self.bodies.iter_mut().zip(&self.previous_positions) {
            if body.is_dynamic() {
                body.set_linear_velocity((body.get_position() - *previous) / dt);
            }
        }
    }

    /// Returns an iterator over all bodies
    pub fn bodies(&self) -> impl Iterator<Item = (BodyHandle, &RigidBody)> + '_ {
        self.bodies.iter()
    }

    /// Returns the number of bodies in the world
    pub fn body_count(&self) -> usize {
        self.bodies.len()
    }

    /// Returns the number of constraints in the world
    pub fn constraint_count(&self) -> usize {
        self.constraints.len()
    }
}
