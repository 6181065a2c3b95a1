use cosmic_backdrop::core::{FixedRateTicker, OffscreenTarget, RefreshTicker, RenderHost};
use cosmic_backdrop::scenes::{SceneKind, Section};
use cosmic_backdrop::supervisor::SupervisedScene;
use cosmic_backdrop::{Canvas, Frame, SceneGenerator};
use glam::Vec2;
use std::cell::RefCell;
use std::rc::Rc;

/// Captures the pointer it is handed each frame
struct PointerProbe {
    seen: Rc<RefCell<Vec<Vec2>>>,
}

impl SceneGenerator for PointerProbe {
    fn draw(&mut self, _canvas: &mut Canvas, frame: &Frame) {
        self.seen.borrow_mut().push(frame.pointer);
    }
}

/// Panics on its third frame
struct Crashing {
    frames: u32,
}

impl SceneGenerator for Crashing {
    fn draw(&mut self, _canvas: &mut Canvas, _frame: &Frame) {
        self.frames += 1;
        assert!(self.frames < 3, "lost track of frame {}", self.frames);
    }

    fn name(&self) -> &str {
        "crashing"
    }
}

// ============================================================================
// Pointer defaults
// ============================================================================

#[test]
fn test_pointer_defaults_to_center_for_any_size() {
    for (w, h) in [(0.0, 0.0), (1.0, 3.0), (1920.0, 1080.0), (333.3, 77.7)] {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut host = RenderHost::mount(
            &OffscreenTarget::new(w, h),
            Box::new(PointerProbe { seen: seen.clone() }),
            Box::new(RefreshTicker),
        )
        .unwrap();
        host.frame();
        assert_eq!(seen.borrow()[0], Vec2::new(w / 2.0, h / 2.0));
    }
}

#[test]
fn test_pointer_keeps_last_value_across_resize() {
    let seen = Rc::new(RefCell::new(Vec::new()));
    let mut host = RenderHost::mount(
        &OffscreenTarget::new(800.0, 600.0),
        Box::new(PointerProbe { seen: seen.clone() }),
        Box::new(RefreshTicker),
    )
    .unwrap();

    host.pointer_moved(Vec2::new(10.0, 20.0));
    host.pointer_moved(Vec2::new(30.0, 40.0));
    host.resize(&OffscreenTarget::new(400.0, 300.0));
    host.frame();

    assert_eq!(seen.borrow()[0], Vec2::new(30.0, 40.0));
}

// ============================================================================
// Scheduling
// ============================================================================

#[test]
fn test_fixed_rate_host_catches_up_bounded() {
    let mut host = RenderHost::mount(
        &OffscreenTarget::new(50.0, 50.0),
        SceneKind::Vortex.create(0),
        Box::new(FixedRateTicker::new(60.0)),
    )
    .unwrap();

    // a long stall replays at most a few frames
    let drawn = host.advance(10.0);
    assert!(drawn >= 1 && drawn <= 4, "drew {}", drawn);
    assert_eq!(host.frames_drawn(), drawn as u64);
}

#[test]
fn test_section_switch_keeps_time() {
    let mut host = RenderHost::mount(
        &OffscreenTarget::new(200.0, 120.0),
        Section::Hero.scene().create(1),
        Box::new(RefreshTicker),
    )
    .unwrap();

    for section in Section::ALL {
        host.swap_scene(section.scene().create(1));
        host.frame();
    }
    assert_eq!(host.frames_drawn(), 5);
    assert_eq!(host.scene_name(), "Terrain");
    assert!((host.time() - 0.05).abs() < 1e-5);
}

// ============================================================================
// Supervision
// ============================================================================

#[test]
fn test_supervised_crash_paints_error_panel() {
    let mut host = RenderHost::mount(
        &OffscreenTarget::new(120.0, 80.0),
        Box::new(SupervisedScene::new(Crashing { frames: 0 })),
        Box::new(RefreshTicker),
    )
    .unwrap();

    for _ in 0..5 {
        assert!(host.frame());
    }

    let canvas = host.surface().canvas();
    // panel background in the corner, red bar in the middle
    assert_eq!(canvas.pixel(2, 2), Some([0x05, 0x05, 0x08, 255]));
    assert_eq!(canvas.pixel(60, 40), Some([0xff, 0x44, 0x44, 255]));
}

#[test]
fn test_supervised_failure_detail_is_exposed() {
    let mut scene = SupervisedScene::new(Crashing { frames: 0 });
    let mut canvas = Canvas::new(10, 10);
    let frame = Frame::new(0, 10.0, 10.0, 0.01, Vec2::new(5.0, 5.0));

    for _ in 0..4 {
        scene.draw(&mut canvas, &frame);
        canvas.flush();
    }

    let failure = scene.failure().expect("third frame panics");
    assert_eq!(failure.scene, "crashing");
    assert!(failure.message.contains("lost track of frame 3"));
    assert_eq!(scene.inner().frames, 3);
}
