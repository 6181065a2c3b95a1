use super::NEON;
use crate::core::{Canvas, DrawOp, Frame, SceneGenerator, MAX_LOGICAL_EDGE};
use crate::math::Color;

const SPACING: f32 = 50.0;
const REACH: f32 = 300.0;
const SCAN_SPEED: f32 = 100.0;
const SCAN_OVERSHOOT: f32 = 100.0;
const BACKGROUND: Color = Color::hex(0x020205);

/// Dot `(radius, alpha)` for a grid dot `distance` units from the pointer,
/// before breathing is applied
pub fn dot_style(distance: f32) -> (f32, f32) {
    if distance < REACH {
        let k = 1.0 - distance / REACH;
        (1.5 + 2.0 * k, 0.1 + 0.6 * k)
    } else {
        (1.5, 0.1)
    }
}

/// Vertical centre of the scanline; starts above the top edge and wraps
/// once it has passed below the bottom
pub fn scanline_y(time: f32, height: f32) -> f32 {
    (time * SCAN_SPEED) % (height + 2.0 * SCAN_OVERSHOOT) - SCAN_OVERSHOOT
}

/// Map background: pointer-reactive dot grid with a sweeping scanline
pub struct TerrainScene;

impl SceneGenerator for TerrainScene {
    fn draw(&mut self, canvas: &mut Canvas, frame: &Frame) {
        canvas.push(DrawOp::Fill(BACKGROUND));

        let rows = (frame.height.min(MAX_LOGICAL_EDGE) / SPACING).ceil().max(0.0) as u32;
        let cols = (frame.width.min(MAX_LOGICAL_EDGE) / SPACING).ceil().max(0.0) as u32;

        for r in 0..=rows {
            for c in 0..=cols {
                let x = c as f32 * SPACING;
                let y = r as f32 * SPACING;
                let distance = glam::Vec2::new(x, y).distance(frame.pointer);
                let breathe = (frame.time * 2.0 + (x + y) * 0.01).sin() * 0.3 + 0.5;
                let (radius, alpha) = dot_style(distance);

                canvas.push(DrawOp::Circle {
                    cx: x,
                    cy: y,
                    radius,
                    color: NEON.with_alpha(alpha * breathe),
                });
            }
        }

        let scan = scanline_y(frame.time, frame.height);
        canvas.push(DrawOp::HGradient {
            x: 0.0,
            y: scan - 2.0,
            width: frame.width,
            height: 4.0,
            color: NEON,
            stops: vec![(0.0, 0.0), (0.5, 0.15), (1.0, 0.0)],
        });
    }

    fn name(&self) -> &str {
        "Terrain"
    }
}
