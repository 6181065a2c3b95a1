use super::timer::Accumulator;

/// Most frames a fixed-rate ticker replays after a stall
pub const MAX_CATCH_UP_FRAMES: u8 = 4;

/// Frame scheduling source. The host asks how many frames are due after a
/// wall-clock interval and runs exactly that many.
pub trait Ticker {
    /// Frames due after `delta` seconds
    fn due(&mut self, delta: f32) -> u32;

    /// Target cadence in Hz, if the ticker has one
    fn target_hz(&self) -> Option<f32> {
        None
    }
}

/// One frame per refresh signal, whatever the elapsed time. Matches a
/// display-synchronised redraw and lets tests single-step.
#[derive(Debug, Clone, Copy, Default)]
pub struct RefreshTicker;

impl Ticker for RefreshTicker {
    fn due(&mut self, _delta: f32) -> u32 {
        1
    }
}

/// Frames at a fixed target cadence measured against wall time
#[derive(Debug, Clone)]
pub struct FixedRateTicker {
    accumulator: Accumulator,
}

impl FixedRateTicker {
    pub fn new(hz: f32) -> Self {
        Self {
            accumulator: Accumulator::new(hz, MAX_CATCH_UP_FRAMES),
        }
    }
}

impl Ticker for FixedRateTicker {
    fn due(&mut self, delta: f32) -> u32 {
        self.accumulator.tick(delta).count() as u32
    }

    fn target_hz(&self) -> Option<f32> {
        Some(1.0 / self.accumulator.timestep())
    }
}
