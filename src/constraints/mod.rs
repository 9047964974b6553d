mod constraint;
mod point_to_point;

pub use self::constraint::Constraint;
pub use self::point_to_point::PointToPointConstraint;
