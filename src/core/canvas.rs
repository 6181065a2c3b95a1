use glam::Vec2;

use crate::math::Color;

/// Outline style for polygons
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stroke {
    pub color: Color,
    pub width: f32,
}

impl Stroke {
    pub fn new(color: Color, width: f32) -> Self {
        Self { color, width }
    }
}

/// 2D drawing operations, in logical (device-independent) units
#[derive(Debug, Clone, PartialEq)]
pub enum DrawOp {
    /// Blend a colour over the whole surface
    Fill(Color),

    /// Filled axis-aligned rectangle
    Rect { x: f32, y: f32, width: f32, height: f32, color: Color },

    /// Filled disc
    Circle { cx: f32, cy: f32, radius: f32, color: Color },

    /// Straight segment with a stroke width
    Line { from: Vec2, to: Vec2, width: f32, color: Color },

    /// Open chain of segments
    Polyline { points: Vec<Vec2>, width: f32, color: Color },

    /// Closed polygon, even-odd fill plus optional outline
    Polygon { points: Vec<Vec2>, fill: Option<Color>, stroke: Option<Stroke> },

    /// Rectangle whose alpha follows a left-to-right gradient.
    /// `stops` are `(offset, alpha)` pairs with offsets in [0, 1], ascending.
    HGradient { x: f32, y: f32, width: f32, height: f32, color: Color, stops: Vec<(f32, f32)> },

    /// Shift the origin for the following operations
    Translate(Vec2),

    /// Drop any translation
    ResetTransform,
}

/// Software raster surface - RGBA8 physical buffer plus a density scale.
///
/// Operations are queued with [`Canvas::draw`] / [`Canvas::push`] and applied
/// by [`Canvas::flush`]. Logical coordinates map to physical pixels through
/// `(p + translation) * scale`. Every operation is clipped to the buffer and
/// operations with non-finite geometry are skipped, so no input can panic or
/// write outside the buffer.
#[derive(Clone)]
pub struct Canvas {
    /// RGBA pixel buffer (straight alpha)
    pixels: Vec<u8>,
    /// Pending draw operations
    operations: Vec<DrawOp>,
    /// Physical dimensions
    width: u32,
    height: u32,
    /// Device pixel density
    scale: f32,
    translation: Vec2,
}

impl Canvas {
    /// Create a transparent canvas with physical dimensions and scale 1
    pub fn new(width: u32, height: u32) -> Self {
        Self::with_scale(width, height, 1.0)
    }

    /// Create a transparent canvas with a density transform applied
    pub fn with_scale(width: u32, height: u32, scale: f32) -> Self {
        let size = width as usize * height as usize * 4;

        Self {
            pixels: vec![0; size],
            operations: Vec::new(),
            width,
            height,
            scale: sanitize_scale(scale),
            translation: Vec2::ZERO,
        }
    }

    /// Add draw operation - functional style
    pub fn draw(mut self, op: DrawOp) -> Self {
        self.operations.push(op);
        self
    }

    /// Queue a draw operation
    pub fn push(&mut self, op: DrawOp) {
        self.operations.push(op);
    }

    /// Operations queued since the last flush
    pub fn pending(&self) -> &[DrawOp] {
        &self.operations
    }

    /// Drop queued operations without drawing them
    pub fn discard_pending(&mut self) {
        self.operations.clear();
        self.translation = Vec2::ZERO;
    }

    /// Execute all pending operations and return the canvas
    pub fn execute_ops(mut self) -> Self {
        self.flush();
        self
    }

    /// Execute all pending operations in place. Translation is per flush.
    pub fn flush(&mut self) {
        let operations = std::mem::take(&mut self.operations);
        for op in &operations {
            self.execute_op(op);
        }
        self.translation = Vec2::ZERO;
    }

    pub fn scale(&self) -> f32 {
        self.scale
    }

    /// Get pixel buffer
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// RGBA value of a physical pixel
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let idx = (y as usize * self.width as usize + x as usize) * 4;
        Some([
            self.pixels[idx],
            self.pixels[idx + 1],
            self.pixels[idx + 2],
            self.pixels[idx + 3],
        ])
    }

    /// Get physical dimensions
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    fn execute_op(&mut self, op: &DrawOp) {
        match op {
            DrawOp::Fill(color) => self.fill(*color),
            DrawOp::Rect { x, y, width, height, color } => {
                self.fill_rect(Vec2::new(*x, *y), Vec2::new(*width, *height), *color)
            }
            DrawOp::Circle { cx, cy, radius, color } => {
                self.fill_circle(Vec2::new(*cx, *cy), *radius, *color)
            }
            DrawOp::Line { from, to, width, color } => self.stroke_line(*from, *to, *width, *color),
            DrawOp::Polyline { points, width, color } => {
                for pair in points.windows(2) {
                    self.stroke_line(pair[0], pair[1], *width, *color);
                }
            }
            DrawOp::Polygon { points, fill, stroke } => self.polygon(points, *fill, *stroke),
            DrawOp::HGradient { x, y, width, height, color, stops } => {
                self.gradient_rect(Vec2::new(*x, *y), Vec2::new(*width, *height), *color, stops)
            }
            DrawOp::Translate(offset) => {
                if offset.is_finite() {
                    self.translation += *offset;
                }
            }
            DrawOp::ResetTransform => self.translation = Vec2::ZERO,
        }
    }

    fn to_physical(&self, p: Vec2) -> Vec2 {
        (p + self.translation) * self.scale
    }

    /// Source-over blend of one physical pixel
    fn blend(&mut self, x: i64, y: i64, color: Color, coverage: f32) {
        if x < 0 || y < 0 || x >= self.width as i64 || y >= self.height as i64 {
            return;
        }

        let src_a = color.opacity() * coverage.clamp(0.0, 1.0);
        if !(src_a > 0.0) {
            return;
        }

        let idx = (y as usize * self.width as usize + x as usize) * 4;
        let px = &mut self.pixels[idx..idx + 4];

        let dst_a = px[3] as f32 / 255.0;
        let out_a = src_a + dst_a * (1.0 - src_a);
        let mix = |src: u8, dst: u8| {
            let value = (src as f32 * src_a + dst as f32 * dst_a * (1.0 - src_a)) / out_a;
            to_channel(value)
        };

        px[0] = mix(color.r, px[0]);
        px[1] = mix(color.g, px[1]);
        px[2] = mix(color.b, px[2]);
        px[3] = to_channel(out_a * 255.0);
    }

    fn fill(&mut self, color: Color) {
        for y in 0..self.height as i64 {
            for x in 0..self.width as i64 {
                self.blend(x, y, color, 1.0);
            }
        }
    }

    fn fill_rect(&mut self, origin: Vec2, size: Vec2, color: Color) {
        if !origin.is_finite() || !size.is_finite() {
            return;
        }
        let a = self.to_physical(origin);
        let b = self.to_physical(origin + size);
        let (x0, x1) = self.span_x(a.x.min(b.x), a.x.max(b.x));
        let (y0, y1) = self.span_y(a.y.min(b.y), a.y.max(b.y));

        for y in y0..y1 {
            for x in x0..x1 {
                self.blend(x, y, color, 1.0);
            }
        }
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Color) {
        if !center.is_finite() || !radius.is_finite() || radius <= 0.0 {
            return;
        }
        let c = self.to_physical(center);
        let r = radius * self.scale;
        let r_sq = r * r;

        let (x0, x1) = self.span_x(c.x - r - 1.0, c.x + r + 1.0);
        let (y0, y1) = self.span_y(c.y - r - 1.0, c.y + r + 1.0);

        let mut covered = false;
        for y in y0..y1 {
            for x in x0..x1 {
                let dx = x as f32 + 0.5 - c.x;
                let dy = y as f32 + 0.5 - c.y;
                if dx * dx + dy * dy <= r_sq {
                    covered = true;
                    self.blend(x, y, color, 1.0);
                }
            }
        }

        // Sub-pixel disc: fade the containing pixel by area
        if !covered {
            let area = std::f32::consts::PI * r_sq;
            self.blend(c.x.floor() as i64, c.y.floor() as i64, color, area);
        }
    }

    fn stroke_line(&mut self, from: Vec2, to: Vec2, width: f32, color: Color) {
        if !from.is_finite() || !to.is_finite() || !width.is_finite() || width <= 0.0 {
            return;
        }
        let width = width * self.scale;
        let margin = width + 1.0;
        let Some((a, b)) = clip_segment(
            self.to_physical(from),
            self.to_physical(to),
            Vec2::splat(-margin),
            Vec2::new(self.width as f32 + margin, self.height as f32 + margin),
        ) else {
            return;
        };

        let delta = b - a;
        let steps = delta.x.abs().max(delta.y.abs()).ceil().max(1.0) as i64;
        let coverage = width.min(1.0);
        let half = (width.round() as i64 - 1).max(0) / 2;

        for i in 0..=steps {
            let p = a + delta * (i as f32 / steps as f32);
            let (px, py) = (p.x.floor() as i64, p.y.floor() as i64);
            for oy in -half..=half {
                for ox in -half..=half {
                    self.blend(px + ox, py + oy, color, coverage);
                }
            }
        }
    }

    fn polygon(&mut self, points: &[Vec2], fill: Option<Color>, stroke: Option<Stroke>) {
        if points.len() < 2 || points.iter().any(|p| !p.is_finite()) {
            return;
        }

        if let Some(color) = fill {
            self.fill_polygon(points, color);
        }

        if let Some(stroke) = stroke {
            for (i, p) in points.iter().enumerate() {
                let next = points[(i + 1) % points.len()];
                self.stroke_line(*p, next, stroke.width, stroke.color);
            }
        }
    }

    /// Even-odd scanline fill sampled at pixel centres
    fn fill_polygon(&mut self, points: &[Vec2], color: Color) {
        let physical: Vec<Vec2> = points.iter().map(|p| self.to_physical(*p)).collect();
        let min_y = physical.iter().map(|p| p.y).fold(f32::INFINITY, f32::min);
        let max_y = physical.iter().map(|p| p.y).fold(f32::NEG_INFINITY, f32::max);
        let (y0, y1) = self.span_y(min_y, max_y);

        let mut crossings = Vec::with_capacity(physical.len());
        for y in y0..y1 {
            let yc = y as f32 + 0.5;
            crossings.clear();

            for i in 0..physical.len() {
                let a = physical[i];
                let b = physical[(i + 1) % physical.len()];
                if (a.y > yc) != (b.y > yc) {
                    crossings.push(a.x + (yc - a.y) * (b.x - a.x) / (b.y - a.y));
                }
            }
            crossings.sort_by(f32::total_cmp);

            for pair in crossings.chunks_exact(2) {
                let (x0, x1) = self.span_x(pair[0], pair[1]);
                for x in x0..x1 {
                    self.blend(x, y, color, 1.0);
                }
            }
        }
    }

    fn gradient_rect(&mut self, origin: Vec2, size: Vec2, color: Color, stops: &[(f32, f32)]) {
        if !origin.is_finite() || !size.is_finite() || size.x <= 0.0 || stops.is_empty() {
            return;
        }
        let a = self.to_physical(origin);
        let b = self.to_physical(origin + size);
        let (x0, x1) = self.span_x(a.x, b.x);
        let (y0, y1) = self.span_y(a.y.min(b.y), a.y.max(b.y));
        let span = (b.x - a.x).max(f32::EPSILON);

        for x in x0..x1 {
            let t = ((x as f32 + 0.5 - a.x) / span).clamp(0.0, 1.0);
            let alpha = gradient_alpha(stops, t);
            for y in y0..y1 {
                self.blend(x, y, color, alpha);
            }
        }
    }

    /// Pixel columns whose centres fall in [from, to), clamped to the buffer
    fn span_x(&self, from: f32, to: f32) -> (i64, i64) {
        pixel_span(from, to, self.width)
    }

    fn span_y(&self, from: f32, to: f32) -> (i64, i64) {
        pixel_span(from, to, self.height)
    }
}

fn sanitize_scale(scale: f32) -> f32 {
    if scale.is_finite() && scale > 0.0 {
        scale
    } else {
        1.0
    }
}

fn to_channel(value: f32) -> u8 {
    value.round().clamp(0.0, 255.0) as u8
}

fn pixel_span(from: f32, to: f32, limit: u32) -> (i64, i64) {
    if !from.is_finite() || !to.is_finite() {
        return (0, 0);
    }
    let limit = limit as f32;
    let start = (from - 0.5).ceil().clamp(0.0, limit);
    let end = (to - 0.5).ceil().clamp(0.0, limit);
    (start as i64, end as i64)
}

fn gradient_alpha(stops: &[(f32, f32)], t: f32) -> f32 {
    let first = stops[0];
    if t <= first.0 {
        return first.1;
    }
    for pair in stops.windows(2) {
        let ((o0, a0), (o1, a1)) = (pair[0], pair[1]);
        if t <= o1 {
            let span = (o1 - o0).max(f32::EPSILON);
            return a0 + (a1 - a0) * ((t - o0) / span);
        }
    }
    stops[stops.len() - 1].1
}

/// Liang-Barsky clip of a segment against an axis-aligned box.
/// Runs in f64 so far-off endpoints keep their on-screen precision.
fn clip_segment(a: Vec2, b: Vec2, min: Vec2, max: Vec2) -> Option<(Vec2, Vec2)> {
    let (a, b, min, max) = (a.as_dvec2(), b.as_dvec2(), min.as_dvec2(), max.as_dvec2());
    let d = b - a;
    let mut t0 = 0.0f64;
    let mut t1 = 1.0f64;

    let checks = [
        (-d.x, a.x - min.x),
        (d.x, max.x - a.x),
        (-d.y, a.y - min.y),
        (d.y, max.y - a.y),
    ];

    for (p, q) in checks {
        if p == 0.0 {
            if q < 0.0 {
                return None;
            }
        } else {
            let r = q / p;
            if p < 0.0 {
                t0 = t0.max(r);
            } else {
                t1 = t1.min(r);
            }
        }
    }

    if t0 > t1 {
        None
    } else {
        Some(((a + d * t0).as_vec2(), (a + d * t1).as_vec2()))
    }
}
