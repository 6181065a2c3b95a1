use std::path::Path;

use serde::{Deserialize, Serialize};

use super::geo::GeoPoint;
use super::OverlayError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProjectStatus {
    Completed,
    InProgress,
    Planned,
}

/// Position on the legacy illustrated map, in percent
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct MapPercent {
    pub x: f64,
    pub y: f64,
}

/// Camera override; each missing field falls back on its own
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct CameraConfig {
    #[serde(default)]
    pub center: Option<GeoPoint>,
    #[serde(default)]
    pub zoom: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ProjectStats {
    pub area: String,
    pub units: u32,
    pub completion: f64,
}

/// One portfolio entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: String,
    pub order: u32,
    pub title: String,
    pub region: String,
    pub status: ProjectStatus,
    pub description: String,
    pub image: String,
    #[serde(default)]
    pub gallery: Vec<String>,
    #[serde(default)]
    pub coordinates: MapPercent,
    /// Marker location
    #[serde(default)]
    pub geo_coordinates: Option<GeoPoint>,
    #[serde(default)]
    pub map_view: Option<CameraConfig>,
    /// Used below the mobile breakpoint
    #[serde(default)]
    pub mobile_map_view: Option<CameraConfig>,
    /// Raw feature collection, `(lon, lat)` ordered
    #[serde(default)]
    pub geo_json: Option<serde_json::Value>,
    pub stats: ProjectStats,
    #[serde(default)]
    pub features: Vec<String>,
}

/// Parse a JSON array of projects, sorted by `order`
pub fn load_projects(json: &str) -> Result<Vec<Project>, OverlayError> {
    let mut projects: Vec<Project> = serde_json::from_str(json)?;
    projects.sort_by_key(|p| p.order);
    log::debug!("Loaded {} projects", projects.len());
    Ok(projects)
}

impl Project {
    pub fn load_file(path: impl AsRef<Path>) -> Result<Vec<Project>, OverlayError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| OverlayError::Read {
            path: path.display().to_string(),
            source,
        })?;
        load_projects(&text)
    }
}
