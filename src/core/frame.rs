use glam::Vec2;

/// Per-frame input handed to a scene generator
#[derive(Debug, Clone, Copy)]
pub struct Frame {
    pub number: u64,
    /// Logical surface width
    pub width: f32,
    /// Logical surface height
    pub height: f32,
    /// Animation time (fixed step per frame)
    pub time: f32,
    /// Latest pointer position, surface-local
    pub pointer: Vec2,
}

impl Frame {
    pub fn new(number: u64, width: f32, height: f32, time: f32, pointer: Vec2) -> Self {
        Self { number, width, height, time, pointer }
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }
}
