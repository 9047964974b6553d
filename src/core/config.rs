use crate::math::Vector3;

#[cfg(feature = "serialize")]
use serde::{Deserialize, Serialize};

/// Configuration parameters for the constraint solver
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct SimulationConfig {
    /// The fixed sub-step length
    pub time_step: f32,

    /// The longest frame delta the solver accepts; longer deltas are clamped to it
    pub max_step: f32,

    /// The maximum number of sub-steps per call to `step`
    pub max_substeps: u32,

    /// The number of relaxation passes over all constraints per sub-step
    pub solver_iterations: u32,

    /// Fraction of the pivot separation removed by one relaxation pass, in (0, 1]
    pub constraint_stiffness: f32,

    /// Global damping factor for linear velocity, applied once per sub-step
    pub linear_damping: f32,

    /// Gravity acceleration; zero because motion is purely constraint-driven
    pub gravity: Vector3,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            time_step: 1.0 / 60.0,
            max_step: 0.1,
            max_substeps: 10,
            solver_iterations: 4,
            constraint_stiffness: 0.05,
            linear_damping: 0.02,
            gravity: Vector3::zero(),
        }
    }
}
