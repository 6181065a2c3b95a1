use glam::Vec2;

use super::clock::AnimationClock;
use super::frame::Frame;
use super::pointer::PointerState;
use super::scene::SceneGenerator;
use super::surface::{Surface, SurfaceTarget};
use super::ticker::Ticker;

/// Owns one surface, one clock and one pointer state, and drives the active
/// scene generator once per due frame.
///
/// Platform events reach the host through [`RenderHost::resize`] and
/// [`RenderHost::pointer_moved`]; frames are produced by
/// [`RenderHost::advance`] (ticker-driven) or [`RenderHost::frame`]
/// (single step). After [`RenderHost::unmount`] every entry point is inert.
pub struct RenderHost {
    surface: Surface,
    clock: AnimationClock,
    pointer: PointerState,
    scene: Box<dyn SceneGenerator>,
    ticker: Box<dyn Ticker>,
    pending_resize: Option<(Vec2, f32)>,
    surface_offset: Vec2,
    mounted: bool,
    frames_drawn: u64,
}

impl RenderHost {
    /// Acquire the target's surface and start driving `scene`.
    ///
    /// Returns None, without error, when the target has no drawing context.
    pub fn mount(
        target: &dyn SurfaceTarget,
        scene: Box<dyn SceneGenerator>,
        ticker: Box<dyn Ticker>,
    ) -> Option<Self> {
        let Some(surface) = Surface::acquire(target) else {
            log::debug!("No drawing context for '{}', animation disabled", scene.name());
            return None;
        };

        let pointer = PointerState::centered(surface.width(), surface.height());
        log::debug!(
            "Mounted '{}' at {}x{} (density {})",
            scene.name(),
            surface.width(),
            surface.height(),
            surface.scale()
        );

        Some(Self {
            surface,
            clock: AnimationClock::new(),
            pointer,
            scene,
            ticker,
            pending_resize: None,
            surface_offset: target.offset(),
            mounted: true,
            frames_drawn: 0,
        })
    }

    /// Stop producing frames and ignore further input
    pub fn unmount(&mut self) {
        if self.mounted {
            self.mounted = false;
            self.pending_resize = None;
            log::debug!(
                "Unmounted '{}' after {} frames",
                self.scene.name(),
                self.frames_drawn
            );
        }
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    /// Viewport changed - re-acquire the buffer before the next draw
    pub fn resize(&mut self, target: &dyn SurfaceTarget) {
        if !self.mounted {
            return;
        }
        self.surface_offset = target.offset();
        self.pending_resize = Some((target.viewport_size(), target.scale_factor()));
    }

    /// Pointer moved to a viewport-relative position
    pub fn pointer_moved(&mut self, viewport: Vec2) {
        if self.mounted {
            self.pointer.move_to(viewport, self.surface_offset);
        }
    }

    /// Replace the active scene (visible section changed); returns the old one
    pub fn swap_scene(&mut self, scene: Box<dyn SceneGenerator>) -> Box<dyn SceneGenerator> {
        log::debug!("Scene '{}' -> '{}'", self.scene.name(), scene.name());
        std::mem::replace(&mut self.scene, scene)
    }

    /// Run every frame the ticker says is due after `delta` seconds.
    /// Returns the number of frames drawn.
    pub fn advance(&mut self, delta: f32) -> u32 {
        if !self.mounted {
            return 0;
        }
        let due = self.ticker.due(delta);
        (0..due).filter(|_| self.frame()).count() as u32
    }

    /// Draw exactly one frame. False once unmounted.
    pub fn frame(&mut self) -> bool {
        if !self.mounted {
            return false;
        }

        if let Some((size, scale)) = self.pending_resize.take() {
            self.surface.resize(size, scale);
            self.pointer.recenter(self.surface.width(), self.surface.height());
            log::debug!(
                "Resized '{}' to {}x{} (density {})",
                self.scene.name(),
                self.surface.width(),
                self.surface.height(),
                self.surface.scale()
            );
        }

        let time = self.clock.tick();
        let frame = Frame::new(
            self.frames_drawn,
            self.surface.width(),
            self.surface.height(),
            time,
            self.pointer.position(),
        );

        let canvas = self.surface.canvas_mut();
        self.scene.draw(canvas, &frame);
        canvas.flush();

        self.frames_drawn += 1;
        log::trace!("'{}' frame {} t={:.2}", self.scene.name(), frame.number, time);
        true
    }

    pub fn surface(&self) -> &Surface {
        &self.surface
    }

    pub fn pointer(&self) -> PointerState {
        self.pointer
    }

    pub fn time(&self) -> f32 {
        self.clock.time()
    }

    pub fn frames_drawn(&self) -> u64 {
        self.frames_drawn
    }

    pub fn scene_name(&self) -> &str {
        self.scene.name()
    }

    pub fn target_hz(&self) -> Option<f32> {
        self.ticker.target_hz()
    }
}

impl Drop for RenderHost {
    fn drop(&mut self) {
        self.unmount();
    }
}
