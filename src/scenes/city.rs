use glam::Vec2;

use super::BACKDROP;
use crate::core::{Canvas, DrawOp, Frame, SceneGenerator, Stroke};
use crate::math::{iso_project, Color};

const GRID_SIZE: i32 = 14;
const TILE: Vec2 = Vec2::new(50.0, 25.0);
const PROXIMITY_RADIUS: f32 = 400.0;
const PROXIMITY_BOOST: f32 = 0.6;
const AMPLITUDE: f32 = 70.0;
const BASELINE: f32 = 60.0;

/// Height of the block at `grid` (centred grid coordinates) whose base sits
/// at `screen`. Rises linearly as the pointer closes within 400 units.
pub fn building_height(grid: Vec2, screen: Vec2, pointer: Vec2, time: f32) -> f32 {
    let wave = (grid.length() * 0.3 - time * 1.2).sin() * AMPLITUDE + BASELINE;
    let reach = screen.distance(pointer);
    if reach < PROXIMITY_RADIUS {
        wave + (PROXIMITY_RADIUS - reach) * PROXIMITY_BOOST
    } else {
        wave
    }
}

/// Projects background: a 14x14 isometric skyline
pub struct DigitalCityScene;

impl DigitalCityScene {
    fn block(canvas: &mut Canvas, base: Vec2, height: f32) {
        let hue = 180.0 + height * 0.5;
        let stroke = Some(Stroke::new(Color::hsla(hue, 1.0, 0.7, 0.3), 1.5));

        let lift = Vec2::new(0.0, height);
        let apex = base - lift;
        let right = base + Vec2::new(TILE.x, TILE.y);
        let front = base + Vec2::new(0.0, TILE.y * 2.0);
        let left = base + Vec2::new(-TILE.x, TILE.y);

        canvas.push(DrawOp::Polygon {
            points: vec![apex, right - lift, front - lift, left - lift],
            fill: Some(Color::hsla(hue, 1.0, 0.5, 0.15)),
            stroke,
        });
        canvas.push(DrawOp::Polygon {
            points: vec![right - lift, front - lift, front, right],
            fill: Some(Color::hsla(hue, 1.0, 0.3, 0.1)),
            stroke,
        });
        canvas.push(DrawOp::Polygon {
            points: vec![left - lift, front - lift, front, left],
            fill: Some(Color::hsla(hue, 1.0, 0.4, 0.1)),
            stroke,
        });
    }
}

impl SceneGenerator for DigitalCityScene {
    fn draw(&mut self, canvas: &mut Canvas, frame: &Frame) {
        canvas.push(DrawOp::Fill(BACKDROP));

        let origin = Vec2::new(frame.width / 2.0, frame.height * 0.6);
        let half = GRID_SIZE / 2;

        for i in 0..GRID_SIZE {
            for j in 0..GRID_SIZE {
                let grid = Vec2::new((i - half) as f32, (j - half) as f32);
                let base = origin + iso_project(grid, TILE);
                let height = building_height(grid, base, frame.pointer, frame.time);
                Self::block(canvas, base, height);
            }
        }
    }

    fn name(&self) -> &str {
        "Digital City"
    }
}
