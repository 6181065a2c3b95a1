use glam::Vec2;

/// Last observed cursor position in surface-local coordinates.
/// Latest value wins; there is no buffering.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerState {
    position: Vec2,
    observed: bool,
}

impl PointerState {
    /// Pointer parked at the surface centre
    pub fn centered(width: f32, height: f32) -> Self {
        Self {
            position: Vec2::new(width / 2.0, height / 2.0),
            observed: false,
        }
    }

    pub fn position(&self) -> Vec2 {
        self.position
    }

    /// Whether any real pointer motion has been seen
    pub fn has_moved(&self) -> bool {
        self.observed
    }

    /// Record a viewport-relative position, converting to surface-local
    /// coordinates by subtracting the surface's on-screen offset
    pub fn move_to(&mut self, viewport: Vec2, surface_offset: Vec2) {
        if !viewport.is_finite() {
            return;
        }
        self.position = viewport - surface_offset;
        self.observed = true;
    }

    /// Follow a surface resize while no motion has been observed
    pub fn recenter(&mut self, width: f32, height: f32) {
        if !self.observed {
            self.position = Vec2::new(width / 2.0, height / 2.0);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_at_center() {
        let pointer = PointerState::centered(800.0, 600.0);
        assert_eq!(pointer.position(), Vec2::new(400.0, 300.0));
        assert!(!pointer.has_moved());
    }

    #[test]
    fn subtracts_surface_offset() {
        let mut pointer = PointerState::centered(800.0, 600.0);
        pointer.move_to(Vec2::new(150.0, 90.0), Vec2::new(100.0, 40.0));
        assert_eq!(pointer.position(), Vec2::new(50.0, 50.0));
        assert!(pointer.has_moved());
    }

    #[test]
    fn recenter_only_before_motion() {
        let mut pointer = PointerState::centered(800.0, 600.0);
        pointer.recenter(1000.0, 500.0);
        assert_eq!(pointer.position(), Vec2::new(500.0, 250.0));

        pointer.move_to(Vec2::new(10.0, 10.0), Vec2::ZERO);
        pointer.recenter(200.0, 200.0);
        assert_eq!(pointer.position(), Vec2::new(10.0, 10.0));
    }

    #[test]
    fn ignores_non_finite_motion() {
        let mut pointer = PointerState::centered(100.0, 100.0);
        pointer.move_to(Vec2::new(f32::NAN, 3.0), Vec2::ZERO);
        assert_eq!(pointer.position(), Vec2::new(50.0, 50.0));
        assert!(!pointer.has_moved());
    }
}
