use glam::{Vec2, Vec3};

/// Isometric projection of a grid cell: `((x - y) * tw, (x + y) * th)`
pub fn iso_project(grid: Vec2, tile: Vec2) -> Vec2 {
    Vec2::new((grid.x - grid.y) * tile.x, (grid.x + grid.y) * tile.y)
}

/// Perspective divide of a point in a centred frame (z is depth toward the
/// viewer). Returns non-finite coordinates for z == 0; callers bounds-check.
pub fn perspective_project(point: Vec3, focal: f32, center: Vec2) -> Vec2 {
    let k = focal / point.z;
    Vec2::new(point.x * k + center.x, point.y * k + center.y)
}

pub fn polar_to_cartesian(angle: f32, radius: f32) -> Vec2 {
    Vec2::new(angle.cos() * radius, angle.sin() * radius)
}
