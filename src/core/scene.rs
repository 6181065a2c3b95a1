use super::canvas::Canvas;
use super::frame::Frame;

/// Per-frame procedural painter.
///
/// `draw` queues operations on the canvas for one frame; the host flushes
/// them. Implementations must tolerate zero-sized frames and must not block.
pub trait SceneGenerator {
    fn draw(&mut self, canvas: &mut Canvas, frame: &Frame);

    /// Scene name for logging
    fn name(&self) -> &str {
        "Scene"
    }
}

impl<S: SceneGenerator + ?Sized> SceneGenerator for Box<S> {
    fn draw(&mut self, canvas: &mut Canvas, frame: &Frame) {
        (**self).draw(canvas, frame)
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}
