use crate::bodies::RigidBody;
use crate::constraints::Constraint;
use crate::core::{BodyHandle, BodyStorage};
use crate::math::Vector3;

/// A point-to-point constraint holding a pivot on each body coincident
///
/// Solved by relaxation: every pass removes `stiffness` of the pivot separation,
/// split between the bodies by inverse mass. It never reports divergence; an unsatisfied
/// constraint simply keeps relaxing on later passes.
#[derive(Debug, Clone)]
pub struct PointToPointConstraint {
    /// The first body in the constraint
    body_a: BodyHandle,

    /// The second body in the constraint
    body_b: BodyHandle,

    /// The pivot on the first body (in local space)
    pivot_a: Vector3,

    /// The pivot on the second body (in local space)
    pivot_b: Vector3,

    /// The bodies involved in the constraint (cached for quick lookup)
    bodies: [BodyHandle; 2],

    /// Fraction of the separation removed per pass
    stiffness: f32,
}

impl PointToPointConstraint {
    /// Creates a new point-to-point constraint with full stiffness
    pub fn new(body_a: BodyHandle, body_b: BodyHandle, pivot_a: Vector3, pivot_b: Vector3) -> Self {
        Self {
            body_a,
            body_b,
            pivot_a,
            pivot_b,
            bodies: [body_a, body_b],
            stiffness: 1.0,
        }
    }

    /// Sets the stiffness, clamped to (0, 1]
    pub fn with_stiffness(mut self, stiffness: f32) -> Self {
        self.stiffness = if stiffness.is_finite() {
            stiffness.clamp(crate::math::EPSILON, 1.0)
        } else {
            1.0
        };
        self
    }

    /// Returns the world positions of both pivots
    pub fn world_pivots(&self, bodies: &BodyStorage<RigidBody>) -> Option<(Vector3, Vector3)> {
        let body_a = bodies.get_body(self.body_a).ok()?;
        let body_b = bodies.get_body(self.body_b).ok()?;
        Some((
            body_a.local_to_world(self.pivot_a),
            body_b.local_to_world(self.pivot_b),
        ))
    }
}

impl Constraint for PointToPointConstraint {
    fn get_bodies(&self) -> &[BodyHandle] {
        &self.bodies
    }

    fn solve_position(&mut self, bodies: &mut BodyStorage<RigidBody>) {
        let (pivot_a_world, pivot_b_world) = match self.world_pivots(bodies) {
            Some(pivots) => pivots,
            None => return,
        };

        let (inv_mass_a, inv_mass_b) = match (bodies.get_body(self.body_a), bodies.get_body(self.body_b)) {
            (Ok(a), Ok(b)) => (a.get_inverse_mass(), b.get_inverse_mass()),
            _ => return,
        };

        let mass_sum = inv_mass_a + inv_mass_b;
        if mass_sum <= crate::math::EPSILON {
            return;
        }

        let separation = pivot_b_world - pivot_a_world;
        let tolerance = crate::math::EPSILON * crate::math::EPSILON;
        if !separation.is_finite() || separation.length_squared() <= tolerance {
            return;
        }

        let correction = separation * (self.stiffness / mass_sum);

        if let Ok(body_a) = bodies.get_body_mut(self.body_a) {
            let position = body_a.get_position() + correction * inv_mass_a;
            body_a.set_position(position);
        }

        if let Ok(body_b) = bodies.get_body_mut(self.body_b) {
            let position = body_b.get_position() - correction * inv_mass_b;
            body_b.set_position(position);
        }
    }

    fn error(&self, bodies: &BodyStorage<RigidBody>) -> Option<f32> {
        self.world_pivots(bodies)
            .map(|(a, b)| a.distance(&b))
    }
}
