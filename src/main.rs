use std::path::Path;
use std::sync::Arc;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use winit::{
    application::ApplicationHandler,
    event::WindowEvent,
    event_loop::{ActiveEventLoop, EventLoop},
    window::{Window, WindowId},
};

use cosmic_backdrop::cli::Cli;
use cosmic_backdrop::core::{HostInput, OffscreenTarget, Presenter, RefreshTicker, RenderHost, SceneGenerator, WallClock, WindowAdapter};
use cosmic_backdrop::math::Color;
use cosmic_backdrop::overlay::{resolve_camera, Project};
use cosmic_backdrop::scenes::SceneKind;
use cosmic_backdrop::supervisor::SupervisedScene;

const PAGE_BACKDROP: Color = Color::hex(0x050508);
const STATS_INTERVAL: f32 = 5.0;

fn supervised(kind: SceneKind, seed: u64) -> Box<dyn SceneGenerator> {
    Box::new(SupervisedScene::new(kind.create(seed)))
}

// === Application ===

struct App {
    cli: Cli,
    window: Option<Arc<Window>>,
    presenter: Option<Presenter>,
    adapter: Option<WindowAdapter>,
    host: Option<RenderHost>,
    clock: WallClock,
    stats_timer: f32,
    error: Option<anyhow::Error>,
}

impl App {
    fn new(cli: Cli) -> Self {
        Self {
            cli,
            window: None,
            presenter: None,
            adapter: None,
            host: None,
            clock: WallClock::new(),
            stats_timer: 0.0,
            error: None,
        }
    }

    fn init(&mut self, event_loop: &ActiveEventLoop) -> Result<()> {
        let window = event_loop
            .create_window(
                Window::default_attributes()
                    .with_title("Cosmic Backdrop")
                    .with_inner_size(winit::dpi::LogicalSize::new(self.cli.width, self.cli.height)),
            )
            .map(Arc::new)
            .context("failed to create window")?;

        let presenter = Presenter::new(window.clone(), PAGE_BACKDROP)?;
        let adapter = WindowAdapter::new(window.inner_size(), window.scale_factor());
        let kind = self.cli.scene_kind();
        self.host = RenderHost::mount(&adapter, supervised(kind, self.cli.seed), self.cli.ticker());

        log::info!("Showing {:?}; keys 1-6 switch scene, Escape quits", kind);
        self.clock.reset();
        self.window = Some(window);
        self.presenter = Some(presenter);
        self.adapter = Some(adapter);
        Ok(())
    }

    fn redraw(&mut self) {
        let delta = self.clock.tick();
        let (Some(host), Some(presenter)) = (&mut self.host, &mut self.presenter) else {
            return;
        };

        if host.advance(delta) > 0 {
            if let Err(e) = presenter.present(host.surface().canvas()) {
                log::error!("Present failed: {}", e);
            }
        }

        self.stats_timer += delta;
        if self.stats_timer >= STATS_INTERVAL {
            log::debug!("'{}' {} frames, t={:.2}", host.scene_name(), host.frames_drawn(), host.time());
            self.stats_timer = 0.0;
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_none() {
            if let Err(e) = self.init(event_loop) {
                self.error = Some(e);
                event_loop.exit();
            }
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _window_id: WindowId, event: WindowEvent) {
        if let WindowEvent::RedrawRequested = event {
            self.redraw();
            return;
        }

        let Some(adapter) = &mut self.adapter else {
            return;
        };
        let Some(input) = adapter.translate(&event) else {
            return;
        };

        match input {
            HostInput::Exit => event_loop.exit(),
            HostInput::Pointer(position) => {
                if let Some(host) = &mut self.host {
                    host.pointer_moved(position);
                }
            }
            HostInput::Resized => {
                let size = adapter.physical_size();
                if let Some(presenter) = &mut self.presenter {
                    presenter.resize(size.width, size.height);
                }
                if let Some(host) = &mut self.host {
                    host.resize(&*adapter);
                }
            }
            HostInput::Select(kind) => {
                if let Some(host) = &mut self.host {
                    host.swap_scene(supervised(kind, self.cli.seed));
                }
            }
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }
}

/// Run frames against an in-memory surface and report timing
fn run_headless(cli: &Cli, frames: u64) -> Result<()> {
    let target = OffscreenTarget::new(cli.width as f32, cli.height as f32).with_scale(cli.scale);
    let kind = cli.scene_kind();
    let mut host = RenderHost::mount(&target, supervised(kind, cli.seed), Box::new(RefreshTicker))
        .context("offscreen target has no drawing context")?;

    let start = Instant::now();
    for _ in 0..frames {
        host.frame();
    }
    let elapsed = start.elapsed().as_secs_f64();

    let (w, h) = host.surface().physical_size();
    log::info!(
        "{:?}: {} frames at {}x{} in {:.3}s ({:.2} ms/frame)",
        kind,
        host.frames_drawn(),
        w,
        h,
        elapsed,
        elapsed * 1000.0 / frames.max(1) as f64
    );
    Ok(())
}

fn report_projects(path: &Path, viewport_width: f32) -> Result<()> {
    let projects = Project::load_file(path)?;
    for project in &projects {
        let camera = resolve_camera(project, viewport_width);
        log::info!(
            "{} ({}): camera [{:.6}, {:.6}] zoom {:.2}",
            project.title,
            project.region,
            camera.center.lat,
            camera.center.lon,
            camera.zoom
        );
    }
    Ok(())
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    if let Some(path) = &cli.projects {
        report_projects(path, cli.width as f32)?;
    }

    if let Some(frames) = cli.headless_frames {
        return run_headless(&cli, frames);
    }

    let event_loop = EventLoop::new()?;
    let mut app = App::new(cli);
    event_loop.run_app(&mut app)?;

    match app.error.take() {
        Some(e) => Err(e),
        None => Ok(()),
    }
}
