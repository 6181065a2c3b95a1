// cli.rs - Command-line interface configuration
use std::path::PathBuf;

use clap::Parser;

use crate::core::{FixedRateTicker, RefreshTicker, Ticker};
use crate::scenes::{SceneKind, Section};

#[derive(Parser, Debug, Clone)]
#[command(name = "cosmic-backdrop")]
#[command(about = "Procedural animated page backgrounds", long_about = None)]
pub struct Cli {
    /// Background scene to show
    #[arg(long, value_enum, conflicts_with = "section")]
    pub scene: Option<SceneKind>,

    /// Page section whose background to show
    #[arg(long, value_enum)]
    pub section: Option<Section>,

    /// Logical surface width
    #[arg(long, default_value_t = 1280)]
    pub width: u32,

    /// Logical surface height
    #[arg(long, default_value_t = 720)]
    pub height: u32,

    /// Device pixel density for headless runs
    #[arg(long, default_value_t = 1.0)]
    pub scale: f32,

    /// Render this many frames offscreen and exit instead of opening a window
    #[arg(long)]
    pub headless_frames: Option<u64>,

    /// Seed for scenes with random placement
    #[arg(long, default_value_t = 42)]
    pub seed: u64,

    /// Target frame rate; 0 draws once per display refresh
    #[arg(long, default_value_t = 0.0)]
    pub fps: f32,

    /// Project JSON file; each project's map camera is logged at startup
    #[arg(long)]
    pub projects: Option<PathBuf>,
}

impl Cli {
    /// Scene picked by `--scene`, else by `--section`, else the hero scene
    pub fn scene_kind(&self) -> SceneKind {
        self.scene
            .or_else(|| self.section.map(Section::scene))
            .unwrap_or(SceneKind::Orbital)
    }

    pub fn ticker(&self) -> Box<dyn Ticker> {
        if self.fps > 0.0 && self.fps.is_finite() {
            Box::new(FixedRateTicker::new(self.fps))
        } else {
            Box::new(RefreshTicker)
        }
    }
}
