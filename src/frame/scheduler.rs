use crate::camera::{PerspectiveCamera, ScrollCameraRig};
use crate::config::SceneConfig;
use crate::core::RigidBodyWorld;
use crate::frame::{Clock, RenderSink};
use crate::interaction::{
    DragController, Ndc, PickResult, PickingController, PointerSnapshot, ProxyRaycaster, Raycaster, Viewport,
};
use crate::motion::{MotionBlender, SmoothingRate, StaticOscillator};
use crate::scene::{AnchorBinder, AssetInbox, LoadedModel, ObjectId, ObjectRegistry};
use crate::Result;

/// Everything the host hands over for one frame
#[derive(Debug, Clone, Copy, Default)]
pub struct FrameInput {
    pub pointer: PointerSnapshot,
    pub viewport: Viewport,

    /// Smoothed scroll progress in [0, 1]
    pub scroll_progress: f32,
}

/// Summary of one tick
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameReport {
    /// Clamped frame delta the solver was stepped with
    pub delta: f32,
    pub active_drag: Option<ObjectId>,
    pub smoothing_rate: SmoothingRate,
    pub camera_z: f32,
    pub objects: usize,
}

/// Runs the per-frame pipeline in a fixed order
///
/// 1. bind models delivered through the inbox
/// 2. clamp the frame delta
/// 3. step the world
/// 4. resolve pointer intent (pick, drag)
/// 5. blend motion, writing the dragged body back
/// 6. oscillate rotations
/// 7. move the camera from scroll progress
/// 8. hand transforms to the renderer
///
/// Physics must precede blending, and blending must precede oscillation.
pub struct FrameScheduler {
    config: SceneConfig,
    world: RigidBodyWorld,
    objects: ObjectRegistry,
    binder: AnchorBinder,
    picking: PickingController,
    drag: DragController,
    blender: MotionBlender,
    oscillator: StaticOscillator,
    rig: ScrollCameraRig,
    camera: PerspectiveCamera,
    raycaster: Box<dyn Raycaster>,
    clock: Box<dyn Clock>,
    inbox: Option<AssetInbox>,
    start_time: f64,
    last_time: Option<f64>,
}

impl FrameScheduler {
    /// Creates a scheduler that waits for `config.expected_models` loads, picking against sphere proxies
    pub fn new(config: SceneConfig, clock: Box<dyn Clock>) -> Result<Self> {
        Self::with_raycaster(config, clock, Box::new(ProxyRaycaster))
    }

    /// Creates a scheduler that picks through the given ray-caster
    pub fn with_raycaster(config: SceneConfig, clock: Box<dyn Clock>, raycaster: Box<dyn Raycaster>) -> Result<Self> {
        config.validate()?;

        let start_time = clock.now();
        Ok(Self {
            world: RigidBodyWorld::with_config(config.simulation.clone()),
            objects: ObjectRegistry::new(config.expected_models),
            binder: AnchorBinder::new(&config),
            picking: PickingController::new(config.interaction.max_pick_distance),
            drag: DragController::new(&config.interaction),
            blender: MotionBlender::new(&config.interaction),
            oscillator: StaticOscillator::new(&config.oscillator),
            rig: ScrollCameraRig::new(config.camera.scene_depth),
            camera: PerspectiveCamera::new(&config.camera, Viewport::default()),
            raycaster,
            clock,
            inbox: None,
            start_time,
            last_time: None,
            config,
        })
    }

    /// Drains this inbox at the start of every tick
    pub fn attach_inbox(&mut self, inbox: AssetInbox) {
        self.inbox = Some(inbox);
    }

    /// Binds a loaded model right away
    pub fn load_model(&mut self, model: &LoadedModel) -> Result<Vec<ObjectId>> {
        self.binder.bind(model, &mut self.world, &mut self.objects)
    }

    /// Runs one frame
    pub fn tick(&mut self, input: &FrameInput, sink: &mut dyn RenderSink) -> FrameReport {
        let now = self.clock.now();
        self.commit_pending_models();

        let delta = self.frame_delta(now);
        self.last_time = Some(now);

        self.world.step(delta);

        self.camera.set_viewport(input.viewport);
        self.camera.position.z = self.rig.camera_z();
        self.resolve_pointer(&input.pointer, input.viewport, now);

        self.blender.apply(
            &mut self.world,
            &mut self.objects,
            self.drag.active(),
            self.drag.smoothing_rate(),
        );

        self.oscillator.apply(&mut self.objects, now - self.start_time);

        let camera_z = self.rig.update(input.scroll_progress);
        self.camera.position.z = camera_z;

        for entry in self.objects.iter() {
            let pose = entry.motion.current;
            sink.set_transform(entry.object.transform, pose.position(), pose.z_rotation);
        }
        sink.set_camera_depth(camera_z, self.rig.companion_z());
        sink.request_render();

        FrameReport {
            delta,
            active_drag: self.drag.active(),
            smoothing_rate: self.drag.smoothing_rate(),
            camera_z,
            objects: self.objects.len(),
        }
    }

    fn commit_pending_models(&mut self) {
        let models = match &self.inbox {
            Some(inbox) => inbox.drain(),
            None => return,
        };

        for model in models {
            if let Err(err) = self.binder.bind(&model, &mut self.world, &mut self.objects) {
                log::warn!("discarding loaded model: {}", err);
            }
        }
    }

    fn frame_delta(&self, now: f64) -> f32 {
        let raw = match self.last_time {
            Some(last) => (now - last).max(0.0) as f32,
            None => 0.0,
        };
        let max_step = self.config.simulation.max_step;
        if raw > max_step {
            log::trace!("frame delta {:.3}s clamped to {:.3}s", raw, max_step);
            max_step
        } else {
            raw
        }
    }

    fn resolve_pointer(&mut self, pointer: &PointerSnapshot, viewport: Viewport, now: f64) {
        // A release followed by a new press ends the old drag before the new one starts
        let release_first = pointer.released && pointer.press_after_release;
        if release_first {
            self.drag.pointer_up(now);
        }

        if pointer.pressed {
            let pick = match pointer.press_position.or(pointer.position) {
                Some(point) => self.pick(Ndc::from_client(point, viewport)),
                None => PickResult::empty(),
            };
            self.drag.pointer_down(&pick, &self.objects);
        }

        if pointer.moved {
            if let Some(point) = pointer.position {
                self.drag
                    .pointer_move(Ndc::from_client(point, viewport), &self.camera, &mut self.objects);
            }
        }

        if pointer.released && !release_first {
            self.drag.pointer_up(now);
        }

        self.drag.update(now);
    }

    /// Picks through the current camera
    pub fn pick(&self, ndc: Ndc) -> PickResult {
        self.picking
            .pick(ndc, &self.camera, &self.objects, self.raycaster.as_ref())
    }

    /// The physics world
    pub fn world(&self) -> &RigidBodyWorld {
        &self.world
    }

    /// Every bound object with its motion state
    pub fn objects(&self) -> &ObjectRegistry {
        &self.objects
    }

    /// The drag state machine
    pub fn drag(&self) -> &DragController {
        &self.drag
    }

    /// The camera used for picking
    pub fn camera(&self) -> &PerspectiveCamera {
        &self.camera
    }

    /// The scroll-driven camera rig
    pub fn rig(&self) -> &ScrollCameraRig {
        &self.rig
    }

    /// The configuration the scheduler was built with
    pub fn config(&self) -> &SceneConfig {
        &self.config
    }
}
