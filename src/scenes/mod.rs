mod city;
mod network;
mod orbital;
mod starfield;
mod terrain;
mod vortex;

pub use city::{building_height, DigitalCityScene};
pub use network::{NetworkScene, Node, NODE_COUNT};
pub use orbital::OrbitalScene;
pub use starfield::{Star, StarfieldScene, STAR_COUNT};
pub use terrain::{dot_style, scanline_y, TerrainScene};
pub use vortex::VortexScene;

pub use crate::core::SceneGenerator;

use crate::math::Color;

/// Accent used by most scenes
pub(crate) const NEON: Color = Color::hex(0x00F7FF);
/// Near-black page background
pub(crate) const BACKDROP: Color = Color::hex(0x050508);

/// Every drawable background
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, clap::ValueEnum)]
pub enum SceneKind {
    Orbital,
    Network,
    City,
    Vortex,
    Terrain,
    Starfield,
}

impl SceneKind {
    /// Keyboard order: keys 1-6 select these
    pub const ALL: [SceneKind; 6] = [
        SceneKind::Orbital,
        SceneKind::Network,
        SceneKind::City,
        SceneKind::Vortex,
        SceneKind::Terrain,
        SceneKind::Starfield,
    ];

    /// Build a fresh generator. `seed` feeds the scenes that use randomness.
    pub fn create(self, seed: u64) -> Box<dyn SceneGenerator> {
        match self {
            SceneKind::Orbital => Box::new(OrbitalScene::new(seed)),
            SceneKind::Network => Box::new(NetworkScene::new(seed)),
            SceneKind::City => Box::new(DigitalCityScene),
            SceneKind::Vortex => Box::new(VortexScene),
            SceneKind::Terrain => Box::new(TerrainScene),
            SceneKind::Starfield => Box::new(StarfieldScene::new(seed)),
        }
    }

    /// 1-based key index
    pub fn from_key(index: usize) -> Option<Self> {
        index.checked_sub(1).and_then(|i| Self::ALL.get(i).copied())
    }
}

/// Page sections; each one owns a background scene
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, clap::ValueEnum)]
pub enum Section {
    Hero,
    Philosophy,
    Projects,
    Contact,
    Map,
}

impl Section {
    pub const ALL: [Section; 5] = [
        Section::Hero,
        Section::Philosophy,
        Section::Projects,
        Section::Contact,
        Section::Map,
    ];

    pub fn scene(self) -> SceneKind {
        match self {
            Section::Hero => SceneKind::Orbital,
            Section::Philosophy => SceneKind::Network,
            Section::Projects => SceneKind::City,
            Section::Contact => SceneKind::Vortex,
            Section::Map => SceneKind::Terrain,
        }
    }
}
