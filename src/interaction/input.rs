/// Size of the render surface in client pixels
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    /// Creates a viewport; degenerate sizes are raised to one pixel
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width: sanitize(width),
            height: sanitize(height),
        }
    }

    /// Width over height
    pub fn aspect(&self) -> f32 {
        sanitize(self.width) / sanitize(self.height)
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(1280.0, 720.0)
    }
}

fn sanitize(extent: f32) -> f32 {
    if extent.is_finite() {
        extent.max(1.0)
    } else {
        1.0
    }
}

/// A pointer position in client pixels, origin top-left, y growing downward
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClientPoint {
    pub x: f32,
    pub y: f32,
}

/// Normalized device coordinates in [-1, 1] x [-1, 1], y growing upward
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ndc {
    pub x: f32,
    pub y: f32,
}

impl Ndc {
    /// Wraps already normalized coordinates
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Converts a client position, flipping the vertical axis
    pub fn from_client(point: ClientPoint, viewport: Viewport) -> Self {
        let viewport = Viewport::new(viewport.width, viewport.height);
        Self {
            x: (point.x / viewport.width) * 2.0 - 1.0,
            y: -(point.y / viewport.height) * 2.0 + 1.0,
        }
    }
}

/// Pointer events gathered between two frames
///
/// The host feeds events as they arrive; the frame loop calls [`PointerInput::take`] once
/// per tick. Moves are last-value-wins, presses and releases are latched until taken
/// together with whether the latest press followed the latest release.
#[derive(Debug, Clone, Default)]
pub struct PointerInput {
    position: Option<ClientPoint>,
    press_position: Option<ClientPoint>,
    pressed: bool,
    released: bool,
    press_after_release: bool,
    moved: bool,
}

/// What happened to the pointer since the previous frame
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PointerSnapshot {
    /// Latest known pointer position
    pub position: Option<ClientPoint>,

    /// Where the press that decides this frame's drag happened
    pub press_position: Option<ClientPoint>,

    /// A pointer-down was seen
    pub pressed: bool,

    /// A pointer-up was seen
    pub released: bool,

    /// The latest pointer-down came after the latest pointer-up
    pub press_after_release: bool,

    /// The pointer moved
    pub moved: bool,
}

impl PointerInput {
    /// Creates an input with nothing gathered
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a pointer-down
    pub fn pointer_down(&mut self, x: f32, y: f32) {
        let point = ClientPoint { x, y };
        if !self.pressed || self.released {
            self.press_position = Some(point);
        }
        self.press_after_release = self.released;
        self.position = Some(point);
        self.pressed = true;
    }

    /// Records a pointer-move; only the latest position is kept
    pub fn pointer_move(&mut self, x: f32, y: f32) {
        self.position = Some(ClientPoint { x, y });
        self.moved = true;
    }

    /// Records a pointer-up
    pub fn pointer_up(&mut self) {
        self.released = true;
        self.press_after_release = false;
    }

    /// Returns everything gathered since the last call and clears the latched edges
    pub fn take(&mut self) -> PointerSnapshot {
        let snapshot = PointerSnapshot {
            position: self.position,
            press_position: self.press_position,
            pressed: self.pressed,
            released: self.released,
            press_after_release: self.press_after_release,
            moved: self.moved,
        };
        self.press_position = None;
        self.pressed = false;
        self.released = false;
        self.press_after_release = false;
        self.moved = false;
        snapshot
    }
}
