use std::f32::consts::TAU;

use glam::Vec2;
use rand::{rngs::StdRng, Rng, SeedableRng};

use super::NEON;
use crate::core::{Canvas, DrawOp, Frame, SceneGenerator};
use crate::math::{polar_to_cartesian, Color};

const RING_COUNT: u32 = 5;
const RING_SQUASH: f32 = 0.4;
const ANGLE_STEP: f32 = 0.05;
const PARTICLE_COUNT: u32 = 50;
const PARALLAX: f32 = 0.05;

const TRAIL: Color = Color::rgba(5, 5, 8, 0.2);
const RING: Color = Color::rgba(0, 247, 255, 0.1);
const DEEP_BLUE: Color = Color::hex(0x0066FF);

/// Hero background: five breathing elliptical rings plus orbiting particles
pub struct OrbitalScene {
    rng: StdRng,
}

impl OrbitalScene {
    pub fn new(seed: u64) -> Self {
        Self { rng: StdRng::seed_from_u64(seed) }
    }

    /// Ellipse samples for one ring, already rotated and shifted
    fn ring(center: Vec2, radius: f32, rotation: f32) -> Vec<Vec2> {
        let steps = (TAU / ANGLE_STEP) as usize;
        (0..=steps)
            .map(|k| {
                let p = polar_to_cartesian(k as f32 * ANGLE_STEP + rotation, radius);
                center + Vec2::new(p.x, p.y * RING_SQUASH)
            })
            .collect()
    }
}

impl SceneGenerator for OrbitalScene {
    fn draw(&mut self, canvas: &mut Canvas, frame: &Frame) {
        let t = frame.time;
        let center = frame.center();
        let parallax = (frame.pointer - center) * PARALLAX;

        canvas.push(DrawOp::Fill(TRAIL));

        for i in 1..=RING_COUNT {
            let i = i as f32;
            let radius = 100.0 * i + (t * 0.5).sin() * 20.0;
            let rotation = t * (0.1 / i);
            let offset = parallax * (i * 0.5);

            canvas.push(DrawOp::Polyline {
                points: Self::ring(center - offset, radius, rotation),
                width: 1.0,
                color: RING,
            });
        }

        for i in 0..PARTICLE_COUNT {
            let i = i as f32;
            let angle = i + t * 0.2;
            let radius = (200.0 + i * 10.0) % (frame.width / 2.0);
            let position = center
                + Vec2::new((angle * 0.5).cos() * radius, (angle * 0.3).sin() * radius)
                - parallax;

            let base = if i as u32 % 2 == 0 { NEON } else { DEEP_BLUE };
            let alpha = 0.5 + (t + i).sin() * 0.5;

            canvas.push(DrawOp::Circle {
                cx: position.x,
                cy: position.y,
                radius: self.rng.gen::<f32>() * 2.0,
                color: base.with_alpha(alpha),
            });
        }
    }

    fn name(&self) -> &str {
        "Orbital"
    }
}
