use glam::Vec2;

use super::canvas::Canvas;

/// Largest physical edge the surface will allocate
pub const MAX_PHYSICAL_EDGE: u32 = 16_384;

/// Largest logical edge handed to scenes; bounds per-frame work
pub const MAX_LOGICAL_EDGE: f32 = 8_192.0;

/// Where a surface lives - the window or element a host draws into
pub trait SurfaceTarget {
    /// Viewport size in logical (device-independent) units
    fn viewport_size(&self) -> Vec2;

    /// Device pixel density
    fn scale_factor(&self) -> f32;

    /// Top-left of the surface on screen, in viewport units
    fn offset(&self) -> Vec2 {
        Vec2::ZERO
    }

    /// Whether a drawing context can be acquired at all
    fn has_context(&self) -> bool {
        true
    }
}

/// Drawing target with a logical size decoupled from its physical buffer
/// by a density scale
#[derive(Clone)]
pub struct Surface {
    size: Vec2,
    scale: f32,
    canvas: Canvas,
}

impl Surface {
    /// Acquire a surface for the target. None when no context is available.
    pub fn acquire(target: &dyn SurfaceTarget) -> Option<Self> {
        if !target.has_context() {
            return None;
        }
        let mut surface = Self {
            size: Vec2::ZERO,
            scale: 1.0,
            canvas: Canvas::new(0, 0),
        };
        surface.resize(target.viewport_size(), target.scale_factor());
        Some(surface)
    }

    /// Re-acquire the physical buffer for a new logical size and density.
    /// Previous contents are discarded.
    ///
    /// Oversized viewports are clamped to [`MAX_LOGICAL_EDGE`], and the
    /// density is lowered until the buffer fits [`MAX_PHYSICAL_EDGE`], so
    /// the physical buffer always covers the whole logical surface.
    pub fn resize(&mut self, size: Vec2, scale: f32) {
        let size = Vec2::new(sanitize_extent(size.x), sanitize_extent(size.y));
        let scale = if scale.is_finite() && scale > 0.0 { scale } else { 1.0 };
        let scale = fit_scale(size, scale);

        let physical_w = physical_extent(size.x, scale);
        let physical_h = physical_extent(size.y, scale);

        self.size = size;
        self.scale = scale;
        self.canvas = Canvas::with_scale(physical_w, physical_h, scale);
    }

    pub fn width(&self) -> f32 {
        self.size.x
    }

    pub fn height(&self) -> f32 {
        self.size.y
    }

    pub fn size(&self) -> Vec2 {
        self.size
    }

    pub fn scale(&self) -> f32 {
        self.scale
    }

    pub fn physical_size(&self) -> (u32, u32) {
        self.canvas.dimensions()
    }

    pub fn canvas(&self) -> &Canvas {
        &self.canvas
    }

    pub fn canvas_mut(&mut self) -> &mut Canvas {
        &mut self.canvas
    }
}

fn sanitize_extent(value: f32) -> f32 {
    if value.is_finite() && value > 0.0 {
        value.min(MAX_LOGICAL_EDGE)
    } else {
        0.0
    }
}

/// Highest density not exceeding `scale` at which `size` fits the buffer cap
fn fit_scale(size: Vec2, scale: f32) -> f32 {
    let longest = size.x.max(size.y);
    if longest <= 0.0 {
        return scale;
    }
    scale.min(MAX_PHYSICAL_EDGE as f32 / longest)
}

fn physical_extent(logical: f32, scale: f32) -> u32 {
    (logical * scale).ceil().clamp(0.0, MAX_PHYSICAL_EDGE as f32) as u32
}

/// In-memory target for headless runs and tests
#[derive(Debug, Clone, Copy)]
pub struct OffscreenTarget {
    pub size: Vec2,
    pub scale: f32,
    pub offset: Vec2,
    pub has_context: bool,
}

impl OffscreenTarget {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            size: Vec2::new(width, height),
            scale: 1.0,
            offset: Vec2::ZERO,
            has_context: true,
        }
    }

    pub fn with_scale(mut self, scale: f32) -> Self {
        self.scale = scale;
        self
    }

    pub fn with_offset(mut self, offset: Vec2) -> Self {
        self.offset = offset;
        self
    }

    /// A target whose drawing context cannot be acquired
    pub fn without_context(mut self) -> Self {
        self.has_context = false;
        self
    }
}

impl SurfaceTarget for OffscreenTarget {
    fn viewport_size(&self) -> Vec2 {
        self.size
    }

    fn scale_factor(&self) -> f32 {
        self.scale
    }

    fn offset(&self) -> Vec2 {
        self.offset
    }

    fn has_context(&self) -> bool {
        self.has_context
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn acquire_scales_physical_buffer() {
        let target = OffscreenTarget::new(100.0, 50.0).with_scale(2.0);
        let surface = Surface::acquire(&target).unwrap();

        assert_eq!(surface.size(), Vec2::new(100.0, 50.0));
        assert_eq!(surface.physical_size(), (200, 100));
        assert_eq!(surface.canvas().scale(), 2.0);
    }

    #[test]
    fn acquire_fails_without_context() {
        let target = OffscreenTarget::new(100.0, 50.0).without_context();
        assert!(Surface::acquire(&target).is_none());
    }

    #[test]
    fn fractional_density_rounds_up() {
        let target = OffscreenTarget::new(101.0, 33.0).with_scale(1.5);
        let surface = Surface::acquire(&target).unwrap();
        assert_eq!(surface.physical_size(), (152, 50));
    }

    #[test]
    fn resize_reacquires_buffer() {
        let target = OffscreenTarget::new(10.0, 10.0);
        let mut surface = Surface::acquire(&target).unwrap();
        surface.canvas_mut().push(crate::core::DrawOp::Fill(crate::math::Color::WHITE));
        surface.canvas_mut().flush();

        surface.resize(Vec2::new(20.0, 5.0), 3.0);
        assert_eq!(surface.physical_size(), (60, 15));
        assert_eq!(surface.canvas().scale(), 3.0);
        assert!(surface.canvas().pixels().iter().all(|&b| b == 0));
    }

    #[test]
    fn oversized_viewport_keeps_density_rule() {
        let target = OffscreenTarget::new(12_000.0, 200.0).with_scale(2.0);
        let surface = Surface::acquire(&target).unwrap();

        assert_eq!(surface.size(), Vec2::new(MAX_LOGICAL_EDGE, 200.0));
        assert_eq!(surface.scale(), 2.0);
        assert_eq!(surface.physical_size(), (16_384, 400));
    }

    #[test]
    fn density_lowered_to_fit_buffer_cap() {
        let target = OffscreenTarget::new(6_000.0, 100.0).with_scale(4.0);
        let surface = Surface::acquire(&target).unwrap();

        let scale = surface.canvas().scale();
        assert!(scale < 4.0);
        let (w, h) = surface.physical_size();
        assert!(w <= MAX_PHYSICAL_EDGE);
        // within one pixel of the density rule, float rounding aside
        assert!((w as f32 - (6_000.0 * scale).ceil()).abs() <= 1.0);
        assert!((h as f32 - (100.0 * scale).ceil()).abs() <= 1.0);
    }

    #[test]
    fn degenerate_sizes_collapse_to_zero() {
        let mut surface = Surface::acquire(&OffscreenTarget::new(0.0, 0.0)).unwrap();
        assert_eq!(surface.physical_size(), (0, 0));

        surface.resize(Vec2::new(-5.0, f32::NAN), f32::INFINITY);
        assert_eq!(surface.size(), Vec2::ZERO);
        assert_eq!(surface.scale(), 1.0);
    }
}
