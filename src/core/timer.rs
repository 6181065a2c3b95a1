/// Self-contained timers - manage internal state, fed with wall-clock deltas

/// Fixed-cadence accumulator - yields the number of whole intervals elapsed
#[derive(Debug, Clone)]
pub struct Accumulator {
    timestep: f32,
    accumulator: f32,
    max_steps: u8,
}

impl Accumulator {
    /// Create accumulator firing at `hz`, catching up at most `max_steps`
    /// intervals per update
    pub fn new(hz: f32, max_steps: u8) -> Self {
        Self {
            timestep: 1.0 / hz,
            accumulator: 0.0,
            max_steps,
        }
    }

    /// Update with delta, returns iterator of fixed timesteps to execute
    pub fn tick(&mut self, delta: f32) -> impl Iterator<Item = f32> {
        if delta.is_finite() && delta > 0.0 {
            self.accumulator += delta;
        }

        let steps = (self.accumulator / self.timestep).min(self.max_steps as f32) as usize;

        self.accumulator -= steps as f32 * self.timestep;
        // Drop backlog beyond the catch-up limit
        if steps == self.max_steps as usize {
            self.accumulator = self.accumulator.min(self.timestep);
        }

        std::iter::repeat(self.timestep).take(steps)
    }

    pub fn timestep(&self) -> f32 {
        self.timestep
    }

    /// Get interpolation alpha between steps
    pub fn alpha(&self) -> f32 {
        self.accumulator / self.timestep
    }
}

/// Countdown timer - fires once after duration
#[derive(Debug, Clone, Copy)]
pub struct Countdown {
    duration: f32,
    elapsed: f32,
    active: bool,
}

impl Countdown {
    /// Create inactive countdown
    pub fn new(duration: f32) -> Self {
        Self {
            duration,
            elapsed: 0.0,
            active: false,
        }
    }

    /// Start (or restart) countdown
    pub fn start(&mut self) {
        self.elapsed = 0.0;
        self.active = true;
    }

    /// Stop without firing
    pub fn cancel(&mut self) {
        self.active = false;
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Tick with delta, returns true if completed
    pub fn tick(&mut self, delta: f32) -> bool {
        if !self.active {
            return false;
        }

        self.elapsed += delta;

        if self.elapsed >= self.duration {
            self.active = false;
            true
        } else {
            false
        }
    }

    /// Get progress [0, 1]
    pub fn progress(&self) -> f32 {
        (self.elapsed / self.duration).min(1.0)
    }
}
