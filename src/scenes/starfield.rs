use glam::{Vec2, Vec3};
use rand::{rngs::StdRng, Rng, SeedableRng};

use crate::core::{Canvas, DrawOp, Frame, SceneGenerator};
use crate::math::{perspective_project, Color};

pub const STAR_COUNT: usize = 800;
const SPEED: f32 = 2.0;
const FOCAL_LENGTH: f32 = 128.0;
const TRAIL: Color = Color::rgba(10, 10, 15, 0.4);

/// Star in a centred frame; `z` is depth, shrinking toward the viewer
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Star {
    pub position: Vec3,
}

/// Global backdrop: stars flying toward the viewer.
///
/// The far plane is the current logical width. Stars are spawned on the
/// first frame and recycled in place, never added or removed.
pub struct StarfieldScene {
    stars: Vec<Star>,
    rng: StdRng,
}

impl StarfieldScene {
    pub fn new(seed: u64) -> Self {
        Self { stars: Vec::new(), rng: StdRng::seed_from_u64(seed) }
    }

    pub fn stars(&self) -> &[Star] {
        &self.stars
    }

    fn spawn_xy(rng: &mut StdRng, width: f32, height: f32) -> (f32, f32) {
        ((rng.gen::<f32>() - 0.5) * width, (rng.gen::<f32>() - 0.5) * height)
    }

    /// Move every star one step closer; stars reaching the viewer are
    /// respawned at the far plane
    pub fn step(&mut self, frame: &Frame) {
        let far = frame.width;
        let rng = &mut self.rng;

        if self.stars.is_empty() {
            self.stars = (0..STAR_COUNT)
                .map(|_| {
                    let (x, y) = Self::spawn_xy(rng, frame.width, frame.height);
                    Star { position: Vec3::new(x, y, rng.gen::<f32>() * far) }
                })
                .collect();
        }

        for star in &mut self.stars {
            let z = star.position.z - SPEED;
            if z <= 0.0 {
                let (x, y) = Self::spawn_xy(rng, frame.width, frame.height);
                star.position = Vec3::new(x, y, far);
            } else {
                star.position.z = z;
            }
        }
    }

    /// Screen position of a star, only when it lands on the surface
    pub fn project(star: &Star, frame: &Frame) -> Option<Vec2> {
        let p = perspective_project(star.position, FOCAL_LENGTH, frame.center());
        let on_surface = p.x >= 0.0 && p.x < frame.width && p.y >= 0.0 && p.y < frame.height;
        on_surface.then_some(p)
    }
}

impl SceneGenerator for StarfieldScene {
    fn draw(&mut self, canvas: &mut Canvas, frame: &Frame) {
        canvas.push(DrawOp::Fill(TRAIL));
        self.step(frame);

        let far = frame.width;
        for star in &self.stars {
            let Some(p) = Self::project(star, frame) else {
                continue;
            };
            let nearness = 1.0 - star.position.z / far;
            canvas.push(DrawOp::Circle {
                cx: p.x,
                cy: p.y,
                radius: (nearness * 2.5).max(0.1),
                color: Color::WHITE.with_alpha(nearness.clamp(0.0, 1.0)),
            });
        }
    }

    fn name(&self) -> &str {
        "Starfield"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frame(width: f32, height: f32) -> Frame {
        Frame::new(0, width, height, 0.0, Vec2::new(width / 2.0, height / 2.0))
    }

    #[test]
    fn stars_spawn_within_centered_frame() {
        let mut scene = StarfieldScene::new(5);
        scene.step(&frame(800.0, 600.0));

        assert_eq!(scene.stars().len(), STAR_COUNT);
        for star in scene.stars() {
            assert!(star.position.x >= -400.0 && star.position.x < 400.0);
            assert!(star.position.y >= -300.0 && star.position.y < 300.0);
            assert!(star.position.z <= 800.0);
        }
    }

    #[test]
    fn stars_reset_exactly_when_crossing_viewer() {
        let mut scene = StarfieldScene::new(9);
        let frame = frame(400.0, 300.0);
        scene.step(&frame);

        for _ in 0..300 {
            let before: Vec<f32> = scene.stars().iter().map(|s| s.position.z).collect();
            scene.step(&frame);
            for (z, star) in before.iter().zip(scene.stars()) {
                if z - SPEED <= 0.0 {
                    assert_eq!(star.position.z, 400.0);
                } else {
                    assert_eq!(star.position.z, z - SPEED);
                }
            }
            assert_eq!(scene.stars().len(), STAR_COUNT);
        }
    }

    #[test]
    fn only_on_surface_stars_are_drawn() {
        let mut scene = StarfieldScene::new(2);
        let frame = frame(320.0, 200.0);
        let mut canvas = Canvas::new(320, 200);
        scene.draw(&mut canvas, &frame);

        let drawn: Vec<_> = canvas
            .pending()
            .iter()
            .filter_map(|op| match op {
                DrawOp::Circle { cx, cy, .. } => Some((*cx, *cy)),
                _ => None,
            })
            .collect();
        assert!(!drawn.is_empty());
        for (x, y) in drawn {
            assert!((0.0..320.0).contains(&x));
            assert!((0.0..200.0).contains(&y));
        }
    }

    #[test]
    fn degenerate_projection_is_skipped() {
        let star = Star { position: Vec3::new(10.0, 10.0, 0.0) };
        assert_eq!(StarfieldScene::project(&star, &frame(100.0, 100.0)), None);
    }
}
