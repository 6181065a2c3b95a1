use std::any::Any;
use std::panic::{self, AssertUnwindSafe};

use glam::Vec2;

use crate::core::{Canvas, DrawOp, Frame, SceneGenerator};
use crate::math::Color;

const PANEL_BACKGROUND: Color = Color::hex(0x050508);
const PANEL_ACCENT: Color = Color::hex(0xff4444);

/// A caught rendering failure
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Failure {
    /// Name of the scene that failed
    pub scene: String,
    pub message: String,
}

impl std::fmt::Display for Failure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "scene '{}' failed: {}", self.scene, self.message)
    }
}

impl std::error::Error for Failure {}

/// Run `f`, turning a panic into a [`Failure`] labelled with `scene`
pub fn guard<T>(scene: &str, f: impl FnOnce() -> T) -> Result<T, Failure> {
    panic::catch_unwind(AssertUnwindSafe(f)).map_err(|payload| Failure {
        scene: scene.to_string(),
        message: panic_message(payload.as_ref()),
    })
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        message.to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "unknown panic".to_string()
    }
}

/// Error boundary around a scene.
///
/// The wrapped scene's `draw` and the raster of what it queued both run
/// inside the boundary. The first panic in either is caught and logged.
/// From then on the wrapped scene is never called again and every frame
/// shows the static error panel instead.
pub struct SupervisedScene<S> {
    inner: S,
    failure: Option<Failure>,
}

impl<S: SceneGenerator> SupervisedScene<S> {
    pub fn new(inner: S) -> Self {
        Self { inner, failure: None }
    }

    /// The caught failure, if any
    pub fn failure(&self) -> Option<&Failure> {
        self.failure.as_ref()
    }

    pub fn inner(&self) -> &S {
        &self.inner
    }
}

impl<S: SceneGenerator> SceneGenerator for SupervisedScene<S> {
    fn draw(&mut self, canvas: &mut Canvas, frame: &Frame) {
        if self.failure.is_none() {
            let inner = &mut self.inner;
            let name = inner.name().to_string();
            let drawn = guard(&name, || {
                inner.draw(canvas, frame);
                canvas.flush();
            });
            match drawn {
                Ok(()) => return,
                Err(failure) => {
                    log::error!("{}", failure);
                    canvas.discard_pending();
                    self.failure = Some(failure);
                }
            }
        }
        error_panel(canvas, frame);
    }

    fn name(&self) -> &str {
        self.inner.name()
    }
}

/// Static fallback: dark page, red frame and a red bar across the middle
pub fn error_panel(canvas: &mut Canvas, frame: &Frame) {
    let (w, h) = (frame.width, frame.height);
    canvas.push(DrawOp::Fill(PANEL_BACKGROUND));

    let margin = 20.0;
    let border = [
        Vec2::new(margin, margin),
        Vec2::new(w - margin, margin),
        Vec2::new(w - margin, h - margin),
        Vec2::new(margin, h - margin),
    ];
    canvas.push(DrawOp::Polygon {
        points: border.to_vec(),
        fill: None,
        stroke: Some(crate::core::Stroke::new(PANEL_ACCENT, 2.0)),
    });

    let bar_width = (w - 4.0 * margin).clamp(0.0, 600.0);
    canvas.push(DrawOp::Rect {
        x: (w - bar_width) / 2.0,
        y: h / 2.0 - 4.0,
        width: bar_width,
        height: 8.0,
        color: PANEL_ACCENT,
    });
}
