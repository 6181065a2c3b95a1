//! Boundary to the interactive map widget: project records, feature
//! ingestion, camera resolution, click-to-action translation and the
//! highlighted-region pulse.

mod actions;
mod camera;
mod geo;
mod highlight;
mod map;
mod preview;
mod project;

pub use actions::{resolve_action, ActionDispatcher, ActionPayload, Resolution, SubscriptionId};
pub use camera::{resolve_camera, Camera, DEFAULT_ZOOM, FALLBACK_MARKER, MIN_ZOOM, MOBILE_BREAKPOINT, PAN_MS, RECENTER_MS};
pub use geo::{ingest_features, point_in_polygon, swap_coordinates, Feature, FeatureId, FeatureProperties, GeoPoint, Geometry};
pub use highlight::{pulse_style, PulseStyle, RegionColors, DEFAULT_REGION_COLOR};
pub use map::{GeoOverlay, LoadState, MapEvent, MapWidget};
pub use preview::{DocumentPreview, PreviewPanels, PreviewTarget, VideoPreview, PREVIEW_LOADING_TIMEOUT};
pub use project::{load_projects, CameraConfig, MapPercent, Project, ProjectStats, ProjectStatus};

#[derive(Debug, thiserror::Error)]
pub enum OverlayError {
    #[error("invalid project data: {0}")]
    Projects(#[from] serde_json::Error),
    #[error("failed to read {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed feature collection: {0}")]
    Features(String),
}
