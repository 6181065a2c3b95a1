mod color;
mod projection;

pub use color::{hsl_to_rgb, Color};
pub use projection::{iso_project, perspective_project, polar_to_cartesian};
