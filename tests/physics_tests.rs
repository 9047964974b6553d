use approx::{assert_abs_diff_eq, assert_relative_eq};
use tether_scene::constraints::PointToPointConstraint;
use tether_scene::error::SceneError;
use tether_scene::math::Vector3;
use tether_scene::shapes::{Compound, Sphere};
use tether_scene::{LockedAxes, RigidBody, RigidBodyType, RigidBodyWorld, SimulationConfig};

fn ball() -> Compound {
    let mut shape = Compound::new();
    shape.add_sphere(Sphere::new(0.5), Vector3::zero());
    shape
}

/// A dynamic body tethered to an anchor one unit behind `rest`
fn tethered(world: &mut RigidBodyWorld, rest: Vector3, start: Vector3) -> (
    tether_scene::RigidBodyHandle,
    tether_scene::core::ConstraintHandle,
) {
    let body = world.add_body(
        RigidBody::new_dynamic(ball(), start, 1.0).with_locked_axes(LockedAxes::ALL_ROTATIONS),
    );
    let anchor = world.add_body(RigidBody::new_static(Compound::new(), rest + Vector3::new(0.0, 0.0, -1.0)));
    let constraint = world.add_constraint(Box::new(
        PointToPointConstraint::new(body, anchor, Vector3::zero(), Vector3::new(0.0, 0.0, 1.0))
            .with_stiffness(world.get_config().constraint_stiffness),
    ));
    (body, constraint)
}

#[test]
fn test_rigid_body_creation() {
    let body = RigidBody::new_dynamic(ball(), Vector3::new(0.0, 1.0, 0.0), 2.0);
    assert_eq!(body.get_body_type(), RigidBodyType::Dynamic);
    assert_relative_eq!(body.get_inverse_mass(), 0.5);
    assert!(body.get_linear_velocity().is_zero());

    let anchor = RigidBody::new_static(Compound::new(), Vector3::zero());
    assert_eq!(anchor.get_body_type(), RigidBodyType::Static);
    assert_eq!(anchor.get_inverse_mass(), 0.0);
}

#[test]
fn test_locked_rotation_drops_angular_velocity() {
    let mut body = RigidBody::new_dynamic(ball(), Vector3::zero(), 1.0).with_locked_axes(LockedAxes::ALL_ROTATIONS);
    body.set_angular_velocity(Vector3::new(1.0, 2.0, 3.0));
    assert!(body.get_angular_velocity().is_zero());

    let mut partly = RigidBody::new_dynamic(ball(), Vector3::zero(), 1.0).with_locked_axes(LockedAxes::ROTATION_Z);
    partly.set_angular_velocity(Vector3::new(1.0, 2.0, 3.0));
    assert_eq!(partly.get_angular_velocity(), Vector3::new(1.0, 2.0, 0.0));
}

#[test]
fn test_no_gravity_drift() {
    let mut world = RigidBodyWorld::new();
    let free = world.add_body(RigidBody::new_dynamic(ball(), Vector3::new(1.0, 2.0, 3.0), 1.0));

    for _ in 0..120 {
        world.step(1.0 / 60.0);
    }

    assert_eq!(world.body_position(free).unwrap(), Vector3::new(1.0, 2.0, 3.0));
}

#[test]
fn test_static_body_never_moves() {
    let mut world = RigidBodyWorld::new();
    let rest = Vector3::new(0.0, 0.0, -2.0);
    let (_, _) = tethered(&mut world, rest, rest + Vector3::new(1.0, 1.0, 0.0));
    let anchor_position = Vector3::new(0.0, 0.0, -3.0);

    for _ in 0..60 {
        world.step(1.0 / 60.0);
    }

    let anchor = world
        .bodies()
        .find(|(_, body)| body.get_body_type() == RigidBodyType::Static)
        .map(|(_, body)| body.get_position())
        .unwrap();
    assert_eq!(anchor, anchor_position);
}

#[test]
fn test_tethered_body_converges_to_rest_pose() {
    let mut world = RigidBodyWorld::new();
    let rest = Vector3::new(0.5, -0.25, -2.0);
    let (body, constraint) = tethered(&mut world, rest, rest + Vector3::new(1.0, -0.5, 0.8));

    let initial_error = world.constraint_error(constraint).unwrap();
    assert!(initial_error > 1.0);

    for _ in 0..600 {
        world.step(1.0 / 60.0);
    }

    assert!(world.constraint_error(constraint).unwrap() < 1e-3);
    assert_abs_diff_eq!(world.body_position(body).unwrap(), rest, epsilon = 1e-3);
    assert!(world.get_body(body).unwrap().get_linear_velocity().length() < 1e-2);
}

#[test]
fn test_step_clamps_long_frames() {
    let mut world = RigidBodyWorld::new();
    let rest = Vector3::zero();
    let (body, _) = tethered(&mut world, rest, Vector3::new(2.0, 0.0, 0.0));

    world.step(5.0);
    assert_relative_eq!(world.get_time(), world.get_config().max_step);

    // A hitch is simulated as one bounded step, so the body cannot be flung further out
    let x = world.body_position(body).unwrap().x;
    assert!(x.abs() < 2.0);
}

#[test]
fn test_step_ignores_invalid_deltas() {
    let mut world = RigidBodyWorld::new();
    let (body, _) = tethered(&mut world, Vector3::zero(), Vector3::new(1.0, 0.0, 0.0));

    world.step(f32::NAN);
    world.step(-1.0);
    world.step(0.0);

    assert_eq!(world.get_time(), 0.0);
    assert_eq!(world.body_position(body).unwrap(), Vector3::new(1.0, 0.0, 0.0));
}

#[test]
fn test_set_body_position_zeroes_velocity() {
    let mut world = RigidBodyWorld::new();
    let (body, _) = tethered(&mut world, Vector3::zero(), Vector3::new(1.0, 0.0, 0.0));

    for _ in 0..5 {
        world.step(1.0 / 60.0);
    }
    assert!(!world.get_body(body).unwrap().get_linear_velocity().is_zero());

    world.set_body_position(body, Vector3::new(0.3, 0.2, 0.1)).unwrap();
    let moved = world.get_body(body).unwrap();
    assert_eq!(moved.get_position(), Vector3::new(0.3, 0.2, 0.1));
    assert!(moved.get_linear_velocity().is_zero());
    assert!(moved.get_angular_velocity().is_zero());
}

#[test]
fn test_unknown_handle_is_resource_not_found() {
    let mut big = RigidBodyWorld::new();
    big.add_body(RigidBody::new_static(Compound::new(), Vector3::zero()));
    let foreign = big.add_body(RigidBody::new_static(Compound::new(), Vector3::zero()));

    let world = RigidBodyWorld::new();
    assert!(matches!(world.get_body(foreign), Err(SceneError::ResourceNotFound(_))));
}

#[test]
fn test_custom_gravity_is_integrated() {
    let config = SimulationConfig {
        gravity: Vector3::new(0.0, -9.81, 0.0),
        linear_damping: 0.0,
        ..SimulationConfig::default()
    };
    let mut world = RigidBodyWorld::with_config(config);
    let body = world.add_body(RigidBody::new_dynamic(ball(), Vector3::zero(), 1.0));

    world.step(0.1);
    assert!(world.body_position(body).unwrap().y < 0.0);
}

#[test]
fn test_unvalidated_max_step_never_panics() {
    let negative = SimulationConfig {
        max_step: -0.1,
        ..SimulationConfig::default()
    };
    let mut world = RigidBodyWorld::with_config(negative);
    let (body, _) = tethered(&mut world, Vector3::zero(), Vector3::new(1.0, 0.0, 0.0));
    world.step(1.0 / 60.0);
    assert_eq!(world.get_time(), 0.0);
    assert_eq!(world.body_position(body).unwrap(), Vector3::new(1.0, 0.0, 0.0));

    let unbounded = SimulationConfig {
        max_step: f32::NAN,
        ..SimulationConfig::default()
    };
    let mut world = RigidBodyWorld::with_config(unbounded);
    let (body, _) = tethered(&mut world, Vector3::zero(), Vector3::new(1.0, 0.0, 0.0));
    world.step(1.0 / 60.0);
    assert_relative_eq!(world.get_time(), 1.0 / 60.0);
    assert!(world.body_position(body).unwrap().x < 1.0);
}
