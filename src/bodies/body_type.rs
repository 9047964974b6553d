/// Type of rigid body, determining how it behaves in the simulation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RigidBodyType {
    /// Dynamic bodies are integrated and moved by constraint relaxation
    Dynamic,

    /// Static bodies have infinite mass and never move on their own
    Static,
}

impl RigidBodyType {
    /// Derives the body type from a mass, where zero mass means static
    pub fn from_mass(mass: f32) -> Self {
        if mass > 0.0 {
            Self::Dynamic
        } else {
            Self::Static
        }
    }
}
