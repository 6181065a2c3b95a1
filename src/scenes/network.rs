use glam::Vec2;
use rand::{rngs::StdRng, Rng, SeedableRng};

use super::{BACKDROP, NEON};
use crate::core::{Canvas, DrawOp, Frame, SceneGenerator};

pub const NODE_COUNT: usize = 60;
const INTERACTION_RADIUS: f32 = 200.0;
const POINTER_STRENGTH: f32 = 0.05;
const LINK_DISTANCE: f32 = 150.0;
const MAX_SPEED: f32 = 0.25;

/// One constellation point
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Node {
    pub position: Vec2,
    pub velocity: Vec2,
}

/// Philosophy background: drifting nodes linked when close, pushed away
/// from the pointer.
///
/// The node set is created on the first frame from the surface size at that
/// moment and is never resized afterwards.
pub struct NetworkScene {
    nodes: Option<[Node; NODE_COUNT]>,
    rng: StdRng,
}

impl NetworkScene {
    pub fn new(seed: u64) -> Self {
        Self { nodes: None, rng: StdRng::seed_from_u64(seed) }
    }

    /// Current node set; empty until the first frame
    pub fn nodes(&self) -> &[Node] {
        self.nodes.as_ref().map_or(&[], |nodes| nodes.as_slice())
    }

    /// Advance the simulation by one frame without drawing
    pub fn step(&mut self, frame: &Frame) {
        let bounds = Vec2::new(frame.width, frame.height);
        let rng = &mut self.rng;
        let nodes = self.nodes.get_or_insert_with(|| {
            std::array::from_fn(|_| Node {
                position: Vec2::new(rng.gen::<f32>() * bounds.x, rng.gen::<f32>() * bounds.y),
                velocity: Vec2::new(
                    rng.gen_range(-MAX_SPEED..MAX_SPEED),
                    rng.gen_range(-MAX_SPEED..MAX_SPEED),
                ),
            })
        });

        for node in nodes.iter_mut() {
            node.position += node.velocity;

            let delta = frame.pointer - node.position;
            let distance = delta.length();
            if distance < INTERACTION_RADIUS {
                let force = (INTERACTION_RADIUS - distance) / INTERACTION_RADIUS;
                node.position -= delta * force * POINTER_STRENGTH;
            }

            reflect(&mut node.position.x, &mut node.velocity.x, bounds.x);
            reflect(&mut node.position.y, &mut node.velocity.y, bounds.y);
        }
    }
}

/// Mirror a coordinate back into `[0, max]` and point its velocity inward
fn reflect(position: &mut f32, velocity: &mut f32, max: f32) {
    if *position < 0.0 {
        *position = -*position;
        *velocity = velocity.abs();
    } else if *position > max {
        *position = 2.0 * max - *position;
        *velocity = -velocity.abs();
    }
    *position = position.clamp(0.0, max.max(0.0));
}

impl SceneGenerator for NetworkScene {
    fn draw(&mut self, canvas: &mut Canvas, frame: &Frame) {
        canvas.push(DrawOp::Fill(BACKDROP));
        self.step(frame);

        let pulse = (frame.time * 2.0).sin() * 0.5 + 0.5;
        let node_color = NEON.with_alpha(0.8 + pulse * 0.2);
        let nodes = self.nodes();

        for (i, node) in nodes.iter().enumerate() {
            canvas.push(DrawOp::Circle {
                cx: node.position.x,
                cy: node.position.y,
                radius: 2.0 + pulse,
                color: node_color,
            });

            for other in &nodes[i + 1..] {
                let distance = node.position.distance(other.position);
                if distance < LINK_DISTANCE {
                    canvas.push(DrawOp::Line {
                        from: node.position,
                        to: other.position,
                        width: 0.5,
                        color: NEON.with_alpha(1.0 - distance / LINK_DISTANCE),
                    });
                }
            }
        }
    }

    fn name(&self) -> &str {
        "Network"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frame(number: u64, width: f32, height: f32, pointer: Vec2) -> Frame {
        Frame::new(number, width, height, number as f32 * 0.01, pointer)
    }

    #[test]
    fn nodes_created_lazily() {
        let mut scene = NetworkScene::new(3);
        assert!(scene.nodes().is_empty());

        scene.step(&frame(0, 800.0, 600.0, Vec2::new(400.0, 300.0)));
        assert_eq!(scene.nodes().len(), NODE_COUNT);
        for node in scene.nodes() {
            assert!(node.velocity.x.abs() <= MAX_SPEED);
            assert!(node.velocity.y.abs() <= MAX_SPEED);
        }
    }

    #[test]
    fn reflect_mirrors_and_turns_inward() {
        let (mut p, mut v) = (-3.0, -1.0);
        reflect(&mut p, &mut v, 100.0);
        assert_eq!((p, v), (3.0, 1.0));

        let (mut p, mut v) = (104.0, 2.0);
        reflect(&mut p, &mut v, 100.0);
        assert_eq!((p, v), (96.0, -2.0));

        let (mut p, mut v) = (5.0, 1.0);
        reflect(&mut p, &mut v, 0.0);
        assert_eq!(p, 0.0);
    }

    #[test]
    fn pointer_pushes_nearby_nodes_away() {
        let mut scene = NetworkScene::new(3);
        scene.step(&frame(0, 800.0, 600.0, Vec2::new(-1000.0, -1000.0)));

        let index = scene
            .nodes()
            .iter()
            .position(|n| (100.0..700.0).contains(&n.position.x))
            .unwrap();
        let before = scene.nodes()[index];
        let pointer = before.position + Vec2::new(50.0, 0.0);
        scene.step(&frame(1, 800.0, 600.0, pointer));
        let after = scene.nodes()[index];

        let expected = before.position + before.velocity;
        assert!(after.position.x < expected.x - 1.0);
    }

    #[test]
    fn links_only_between_close_nodes() {
        let mut scene = NetworkScene::new(11);
        let mut canvas = Canvas::new(200, 200);
        scene.draw(&mut canvas, &frame(0, 200.0, 200.0, Vec2::new(100.0, 100.0)));

        for op in canvas.pending() {
            if let DrawOp::Line { from, to, color, .. } = op {
                assert!(from.distance(*to) < LINK_DISTANCE);
                assert!(color.a > 0.0 && color.a <= 1.0);
            }
        }
        let circles = canvas.pending().iter().filter(|op| matches!(op, DrawOp::Circle { .. }));
        assert_eq!(circles.count(), NODE_COUNT);
    }
}
