pub mod cli;
pub mod core;
pub mod math;
pub mod overlay;
pub mod scenes;
pub mod supervisor;

pub use crate::core::{Canvas, DrawOp, Frame, RenderHost, SceneGenerator, SurfaceTarget};
pub use scenes::{SceneKind, Section};
pub use supervisor::SupervisedScene;
