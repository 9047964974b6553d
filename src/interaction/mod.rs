mod drag;
mod input;
mod picking;

pub use self::drag::{DragController, DragState};
pub use self::input::{ClientPoint, Ndc, PointerInput, PointerSnapshot, Viewport};
pub use self::picking::{PickHit, PickResult, PickingController, ProxyRaycaster, Raycaster};
