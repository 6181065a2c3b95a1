use super::NEON;
use crate::core::{Canvas, DrawOp, Frame, SceneGenerator};
use crate::math::{polar_to_cartesian, Color};

const POINT_COUNT: u32 = 100;
const POINTER_PULL: f32 = 0.1;
const TRAIL: Color = Color::rgba(5, 5, 8, 0.3);

/// Contact background: an expanding spiral around a pointer-attracted centre
pub struct VortexScene;

impl SceneGenerator for VortexScene {
    fn draw(&mut self, canvas: &mut Canvas, frame: &Frame) {
        canvas.push(DrawOp::Fill(TRAIL));

        let center = frame.center();
        canvas.push(DrawOp::Translate(center + (frame.pointer - center) * POINTER_PULL));

        let bound = frame.width.max(frame.height) / 1.5;
        for i in 0..POINT_COUNT {
            let index = i as f32;
            let angle = index * 0.5 + frame.time * 0.5;
            let radius = (index * 5.0 + frame.time * 50.0) % bound;
            let p = polar_to_cartesian(angle, radius);

            canvas.push(DrawOp::Circle {
                cx: p.x,
                cy: p.y,
                radius: (radius * 0.01).max(0.5),
                color: if i % 3 == 0 { Color::WHITE } else { NEON },
            });
        }

        canvas.push(DrawOp::ResetTransform);
    }

    fn name(&self) -> &str {
        "Vortex"
    }
}
