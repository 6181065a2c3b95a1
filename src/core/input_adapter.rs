use glam::Vec2;
use winit::dpi::{PhysicalPosition, PhysicalSize};
use winit::event::{ElementState, WindowEvent};
use winit::keyboard::{KeyCode, PhysicalKey};

use super::surface::SurfaceTarget;
use crate::scenes::SceneKind;

/// Host-level meaning of a window event
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum HostInput {
    /// Cursor moved; logical, window-relative
    Pointer(Vec2),
    /// Viewport size or density changed
    Resized,
    /// Switch the background scene
    Select(SceneKind),
    Exit,
}

/// Bridges winit window events to the render host and tracks the window's
/// viewport so it can stand in as the host's [`SurfaceTarget`]
#[derive(Debug, Clone)]
pub struct WindowAdapter {
    /// Inner size in physical pixels
    physical_size: PhysicalSize<u32>,
    scale_factor: f64,
}

impl WindowAdapter {
    pub fn new(physical_size: PhysicalSize<u32>, scale_factor: f64) -> Self {
        Self { physical_size, scale_factor: sanitize_scale_factor(scale_factor) }
    }

    /// Process a winit WindowEvent and return what the host should do
    pub fn translate(&mut self, event: &WindowEvent) -> Option<HostInput> {
        match event {
            WindowEvent::CloseRequested => Some(HostInput::Exit),
            WindowEvent::Resized(size) => {
                self.physical_size = *size;
                Some(HostInput::Resized)
            }
            WindowEvent::ScaleFactorChanged { scale_factor, .. } => {
                self.scale_factor = sanitize_scale_factor(*scale_factor);
                Some(HostInput::Resized)
            }
            WindowEvent::CursorMoved { position, .. } => {
                Some(HostInput::Pointer(self.to_logical(*position)))
            }
            WindowEvent::KeyboardInput { event, .. } if event.state == ElementState::Pressed => {
                match event.physical_key {
                    PhysicalKey::Code(KeyCode::Escape) => Some(HostInput::Exit),
                    PhysicalKey::Code(code) => Self::keycode_to_scene(code).map(HostInput::Select),
                    _ => None,
                }
            }
            _ => None,
        }
    }

    pub fn physical_size(&self) -> PhysicalSize<u32> {
        self.physical_size
    }

    fn to_logical(&self, position: PhysicalPosition<f64>) -> Vec2 {
        let logical = position.to_logical::<f64>(self.scale_factor);
        Vec2::new(logical.x as f32, logical.y as f32)
    }

    /// Digits 1-6 pick a scene in keyboard order
    fn keycode_to_scene(keycode: KeyCode) -> Option<SceneKind> {
        let index = match keycode {
            KeyCode::Digit1 | KeyCode::Numpad1 => 1,
            KeyCode::Digit2 | KeyCode::Numpad2 => 2,
            KeyCode::Digit3 | KeyCode::Numpad3 => 3,
            KeyCode::Digit4 | KeyCode::Numpad4 => 4,
            KeyCode::Digit5 | KeyCode::Numpad5 => 5,
            KeyCode::Digit6 | KeyCode::Numpad6 => 6,
            _ => return None,
        };
        SceneKind::from_key(index)
    }
}

fn sanitize_scale_factor(scale_factor: f64) -> f64 {
    if scale_factor.is_finite() && scale_factor > 0.0 {
        scale_factor
    } else {
        1.0
    }
}

impl SurfaceTarget for WindowAdapter {
    fn viewport_size(&self) -> Vec2 {
        let logical = self.physical_size.to_logical::<f64>(self.scale_factor);
        Vec2::new(logical.width as f32, logical.height as f32)
    }

    fn scale_factor(&self) -> f32 {
        self.scale_factor as f32
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use winit::event::DeviceId;

    // KeyEvent carries platform-private fields, so keyboard handling is
    // covered through keycode_to_scene

    #[test]
    fn viewport_is_logical() {
        let adapter = WindowAdapter::new(PhysicalSize::new(1600, 1200), 2.0);
        assert_eq!(adapter.viewport_size(), Vec2::new(800.0, 600.0));
        assert_eq!(adapter.scale_factor(), 2.0);
        assert_eq!(adapter.offset(), Vec2::ZERO);
    }

    #[test]
    fn cursor_converted_to_logical() {
        let mut adapter = WindowAdapter::new(PhysicalSize::new(1600, 1200), 2.0);
        let event = WindowEvent::CursorMoved {
            device_id: DeviceId::dummy(),
            position: PhysicalPosition::new(300.0, 500.0),
        };
        assert_eq!(adapter.translate(&event), Some(HostInput::Pointer(Vec2::new(150.0, 250.0))));
    }

    #[test]
    fn resize_updates_viewport() {
        let mut adapter = WindowAdapter::new(PhysicalSize::new(100, 100), 1.0);
        let event = WindowEvent::Resized(PhysicalSize::new(640, 480));
        assert_eq!(adapter.translate(&event), Some(HostInput::Resized));
        assert_eq!(adapter.viewport_size(), Vec2::new(640.0, 480.0));
    }

    #[test]
    fn close_requests_exit() {
        let mut adapter = WindowAdapter::new(PhysicalSize::new(100, 100), 1.0);
        assert_eq!(adapter.translate(&WindowEvent::CloseRequested), Some(HostInput::Exit));
        assert_eq!(adapter.translate(&WindowEvent::Focused(true)), None);
    }

    #[test]
    fn digit_keys_select_scenes() {
        assert_eq!(WindowAdapter::keycode_to_scene(KeyCode::Digit1), Some(SceneKind::Orbital));
        assert_eq!(WindowAdapter::keycode_to_scene(KeyCode::Numpad3), Some(SceneKind::City));
        assert_eq!(WindowAdapter::keycode_to_scene(KeyCode::Digit6), Some(SceneKind::Starfield));
        assert_eq!(WindowAdapter::keycode_to_scene(KeyCode::Digit7), None);
        assert_eq!(WindowAdapter::keycode_to_scene(KeyCode::KeyW), None);
    }

    #[test]
    fn bad_scale_factor_falls_back() {
        let adapter = WindowAdapter::new(PhysicalSize::new(10, 10), f64::NAN);
        assert_eq!(adapter.scale_factor(), 1.0);
    }
}
