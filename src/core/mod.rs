mod canvas;
mod clock;
mod frame;
mod host;
mod input_adapter;
mod pointer;
mod presenter;
mod scene;
mod surface;
mod ticker;
mod timer;

pub use canvas::{Canvas, DrawOp, Stroke};
pub use clock::{AnimationClock, WallClock, FRAME_STEP};
pub use frame::Frame;
pub use host::RenderHost;
pub use input_adapter::{HostInput, WindowAdapter};
pub use pointer::PointerState;
pub use presenter::{PresentError, Presenter};
pub use scene::SceneGenerator;
pub use surface::{OffscreenTarget, Surface, SurfaceTarget, MAX_LOGICAL_EDGE, MAX_PHYSICAL_EDGE};
pub use ticker::{FixedRateTicker, RefreshTicker, Ticker, MAX_CATCH_UP_FRAMES};
pub use timer::{Accumulator, Countdown};
