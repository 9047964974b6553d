mod clock;
mod scheduler;
mod sink;

pub use self::clock::{Clock, ManualClock, SystemClock};
pub use self::scheduler::{FrameInput, FrameReport, FrameScheduler};
pub use self::sink::{RecordingSink, RenderSink};
