mod shape;
mod sphere;
mod compound;

pub use self::shape::Shape;
pub use self::sphere::Sphere;
pub use self::compound::Compound;
