use crate::core::SimulationConfig;
use crate::error::SceneError;
use crate::Result;

#[cfg(feature = "serialize")]
use serde::{Deserialize, Serialize};

/// Number of draggable objects the scene is built around
pub const OBJECT_COUNT: usize = 5;

/// How each draggable object is tethered to its anchor
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct AnchorConfig {
    /// Depth of the anchor relative to the object's rest position (negative is behind)
    pub anchor_offset: f32,

    /// Mass of each dynamic body
    pub body_mass: f32,

    /// Number of spheres approximating each object's silhouette
    pub silhouette_spheres: usize,
}

impl Default for AnchorConfig {
    fn default() -> Self {
        Self {
            anchor_offset: -1.0,
            body_mass: 1.0,
            silhouette_spheres: 3,
        }
    }
}

/// Pointer interaction settings
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct InteractionConfig {
    /// Depth of the plane dragged objects move on
    pub drag_plane_depth: f32,

    /// Seconds after release before the smoothing rate falls back to slow
    pub cooldown: f64,

    /// Smoothing factor while a drag is active
    pub fast_smoothing: f32,

    /// Smoothing factor while settling
    pub slow_smoothing: f32,

    /// Hits further than this from the camera are ignored
    pub max_pick_distance: f32,
}

impl Default for InteractionConfig {
    fn default() -> Self {
        Self {
            drag_plane_depth: -2.0,
            cooldown: 1.0,
            fast_smoothing: 0.25,
            slow_smoothing: 0.08,
            max_pick_distance: 100.0,
        }
    }
}

/// Idle rotational wobble settings
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct OscillatorConfig {
    /// Peak z rotation in radians
    pub amplitude: f32,

    /// Angular speed per object, indexed by object id
    pub speeds: [f32; OBJECT_COUNT],
}

impl Default for OscillatorConfig {
    fn default() -> Self {
        Self {
            amplitude: 0.1,
            speeds: [1.0, 1.3, 0.7, 1.6, 0.9],
        }
    }
}

/// Perspective camera settings
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct CameraConfig {
    /// Vertical field of view in degrees
    pub fov_y_degrees: f32,

    /// Near clipping plane
    pub near: f32,

    /// Far clipping plane
    pub far: f32,

    /// Camera depth reached at full scroll progress
    pub scene_depth: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            fov_y_degrees: 70.0,
            near: 0.01,
            far: 100.0,
            scene_depth: -10.0,
        }
    }
}

/// Every tunable of the scene
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct SceneConfig {
    pub simulation: SimulationConfig,
    pub anchors: AnchorConfig,
    pub interaction: InteractionConfig,
    pub oscillator: OscillatorConfig,
    pub camera: CameraConfig,

    /// Recognized mesh names, mapped to object ids 0..5 in order
    pub mesh_names: [String; OBJECT_COUNT],

    /// Reject unrecognized mesh names instead of mapping them to the last object
    pub strict_mesh_names: bool,

    /// Model loads to wait for before picking is enabled
    pub expected_models: usize,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            simulation: SimulationConfig::default(),
            anchors: AnchorConfig::default(),
            interaction: InteractionConfig::default(),
            oscillator: OscillatorConfig::default(),
            camera: CameraConfig::default(),
            mesh_names: ["B", "L", "O", "C", "K"].map(String::from),
            strict_mesh_names: false,
            expected_models: 1,
        }
    }
}

impl SceneConfig {
    /// Checks that every tunable is in its usable range
    pub fn validate(&self) -> Result<()> {
        let sim = &self.simulation;
        if !(sim.time_step > 0.0) || !(sim.max_step > 0.0) {
            return Err(SceneError::InvalidParameter(format!(
                "time_step ({}) and max_step ({}) must be positive",
                sim.time_step, sim.max_step
            )));
        }
        if !(sim.constraint_stiffness > 0.0 && sim.constraint_stiffness <= 1.0) {
            return Err(SceneError::InvalidParameter(format!(
                "constraint_stiffness {} outside (0, 1]",
                sim.constraint_stiffness
            )));
        }

        for (name, value) in [
            ("fast_smoothing", self.interaction.fast_smoothing),
            ("slow_smoothing", self.interaction.slow_smoothing),
        ] {
            if !(value > 0.0 && value <= 1.0) {
                return Err(SceneError::InvalidParameter(format!("{name} {value} outside (0, 1]")));
            }
        }

        let camera = &self.camera;
        if !(camera.near > 0.0 && camera.far > camera.near) {
            return Err(SceneError::InvalidParameter(format!(
                "clip planes near {} far {} must satisfy 0 < near < far",
                camera.near, camera.far
            )));
        }
        if !(camera.fov_y_degrees > 0.0 && camera.fov_y_degrees < 180.0) {
            return Err(SceneError::InvalidParameter(format!(
                "fov_y_degrees {} outside (0, 180)",
                camera.fov_y_degrees
            )));
        }

        if self.expected_models == 0 {
            return Err(SceneError::InvalidParameter("expected_models must be at least 1".into()));
        }

        if self.anchors.body_mass <= 0.0 {
            return Err(SceneError::InvalidParameter("body_mass must be positive".into()));
        }

        for (i, name) in self.mesh_names.iter().enumerate() {
            if name.is_empty() || self.mesh_names[..i].contains(name) {
                return Err(SceneError::InvalidParameter(format!(
                    "mesh name {name:?} is empty or repeated"
                )));
            }
        }

        Ok(())
    }
}
