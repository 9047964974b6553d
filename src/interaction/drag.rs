use crate::camera::PerspectiveCamera;
use crate::config::InteractionConfig;
use crate::interaction::{Ndc, PickResult};
use crate::motion::SmoothingRate;
use crate::scene::{ObjectId, ObjectRegistry};

/// Drag state: at most one object is dragged at a time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DragState {
    #[default]
    Idle,
    Dragging(ObjectId),
}

/// Turns picks and pointer moves into a single active drag session
///
/// Releasing clears the active drag at once. The smoothing rate only falls back to
/// [`SmoothingRate::Slow`] once the frame clock passes the unlock time set on release.
#[derive(Debug, Clone)]
pub struct DragController {
    state: DragState,
    rate: SmoothingRate,
    unlock_at: Option<f64>,
    cooldown: f64,
    drag_plane_depth: f32,
}

impl DragController {
    /// Creates an idle controller on the slow rate
    pub fn new(config: &InteractionConfig) -> Self {
        Self {
            state: DragState::Idle,
            rate: SmoothingRate::Slow,
            unlock_at: None,
            cooldown: config.cooldown.max(0.0),
            drag_plane_depth: config.drag_plane_depth,
        }
    }

    /// Current drag state
    pub fn state(&self) -> DragState {
        self.state
    }

    /// The object being dragged, if any
    pub fn active(&self) -> Option<ObjectId> {
        match self.state {
            DragState::Dragging(id) => Some(id),
            DragState::Idle => None,
        }
    }

    /// The shared smoothing rate requested by the drag state
    pub fn smoothing_rate(&self) -> SmoothingRate {
        self.rate
    }

    /// Pending time at which the rate falls back to slow
    pub fn unlock_at(&self) -> Option<f64> {
        self.unlock_at
    }

    /// Starts a drag on the nearest hit if it is draggable
    ///
    /// Ignored while a drag is already active. Returns true if a drag started.
    pub fn pointer_down(&mut self, pick: &PickResult, objects: &ObjectRegistry) -> bool {
        if self.active().is_some() {
            return false;
        }

        let id = match pick.nearest() {
            Some(hit) => hit.object,
            None => return false,
        };

        let draggable = objects
            .get(id)
            .map(|entry| entry.object.draggable)
            .unwrap_or(false);
        if !draggable {
            return false;
        }

        self.state = DragState::Dragging(id);
        self.unlock_at = None;
        if self.rate != SmoothingRate::Fast {
            log::debug!("smoothing rate -> fast");
        }
        self.rate = SmoothingRate::Fast;
        log::debug!("drag start on object {}", id);
        true
    }

    /// Moves the dragged object's target to the pointer projected on the drag plane
    pub fn pointer_move(&mut self, ndc: Ndc, camera: &PerspectiveCamera, objects: &mut ObjectRegistry) {
        let id = match self.active() {
            Some(id) => id,
            None => return,
        };

        // The plane can end up behind the camera once it has scrolled past it
        let point = match camera.project_to_depth(ndc, self.drag_plane_depth) {
            Some(point) if point.is_finite() => point,
            _ => return,
        };

        if let Some(motion) = objects.motion_mut(id) {
            motion.target.x = point.x;
            motion.target.y = point.y;
        }
    }

    /// Ends the active drag and arms the cooldown
    pub fn pointer_up(&mut self, now: f64) {
        if let DragState::Dragging(id) = self.state {
            self.state = DragState::Idle;
            self.unlock_at = Some(now + self.cooldown);
            log::debug!("drag end on object {}", id);
        }
    }

    /// Applies an expired cooldown; call once per frame
    pub fn update(&mut self, now: f64) {
        if let Some(unlock_at) = self.unlock_at {
            if self.active().is_none() && now >= unlock_at {
                self.unlock_at = None;
                self.rate = SmoothingRate::Slow;
                log::debug!("smoothing rate -> slow");
            }
        }
    }
}
