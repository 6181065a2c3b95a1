use std::time::Instant;

/// Time added to the animation clock on every frame
pub const FRAME_STEP: f32 = 0.01;

/// Animation clock - advances by a fixed step per frame, not by wall time.
/// Visual speed therefore follows the achieved frame rate.
#[derive(Debug, Clone, Copy)]
pub struct AnimationClock {
    time: f32,
    step: f32,
    frames: u64,
}

impl AnimationClock {
    pub fn new() -> Self {
        Self::with_step(FRAME_STEP)
    }

    pub fn with_step(step: f32) -> Self {
        Self {
            time: 0.0,
            step,
            frames: 0,
        }
    }

    /// Advance one frame and return the new animation time
    pub fn tick(&mut self) -> f32 {
        self.time += self.step;
        self.frames += 1;
        self.time
    }

    pub fn time(&self) -> f32 {
        self.time
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }
}

impl Default for AnimationClock {
    fn default() -> Self {
        Self::new()
    }
}

/// Wall clock - tracks delta time between ticks, feeds tickers
#[derive(Debug)]
pub struct WallClock {
    last_tick: Instant,
}

impl WallClock {
    /// Create new clock starting now
    pub fn new() -> Self {
        Self {
            last_tick: Instant::now(),
        }
    }

    /// Get delta time since last tick and advance clock
    /// Returns delta in seconds
    pub fn tick(&mut self) -> f32 {
        let now = Instant::now();
        let delta = now.duration_since(self.last_tick).as_secs_f32();
        self.last_tick = now;
        delta
    }

    /// Reset clock to current time
    pub fn reset(&mut self) {
        self.last_tick = Instant::now();
    }
}

impl Default for WallClock {
    fn default() -> Self {
        Self::new()
    }
}
