use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::OverlayError;

/// Geographic position, latitude first. Serialized as `[lat, lon]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f64; 2]", into = "[f64; 2]")]
pub struct GeoPoint {
    pub lat: f64,
    pub lon: f64,
}

impl GeoPoint {
    pub const fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }
}

impl From<[f64; 2]> for GeoPoint {
    fn from([lat, lon]: [f64; 2]) -> Self {
        Self { lat, lon }
    }
}

impl From<GeoPoint> for [f64; 2] {
    fn from(p: GeoPoint) -> Self {
        [p.lat, p.lon]
    }
}

/// Feature identifiers come as numbers or strings
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FeatureId {
    Number(i64),
    Text(String),
}

impl std::fmt::Display for FeatureId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FeatureId::Number(n) => write!(f, "{}", n),
            FeatureId::Text(s) => f.write_str(s),
        }
    }
}

/// Per-feature properties as authored in the map constructor
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FeatureProperties {
    pub icon_caption: Option<String>,
    pub description: Option<String>,
    pub action_id: Option<String>,
    pub file_url: Option<String>,
    pub video_url: Option<String>,
    pub button_text: Option<String>,
    pub video_button_text: Option<String>,
    pub fill: Option<String>,
    pub stroke: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Geometry {
    Point(GeoPoint),
    /// Rings; the first is the outer boundary
    Polygon(Vec<Vec<GeoPoint>>),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Feature {
    pub id: FeatureId,
    pub geometry: Geometry,
    pub properties: FeatureProperties,
}

/// Swap every `[a, b]` number pair, at any depth, to `[b, a]`
pub fn swap_coordinates(coords: &Value) -> Value {
    match coords {
        Value::Array(items) if items.len() == 2 && items[0].is_number() => {
            Value::Array(vec![items[1].clone(), items[0].clone()])
        }
        Value::Array(items) => Value::Array(items.iter().map(swap_coordinates).collect()),
        other => other.clone(),
    }
}

#[derive(Deserialize)]
struct RawCollection {
    features: Vec<RawFeature>,
}

#[derive(Deserialize)]
struct RawFeature {
    #[serde(default)]
    id: Option<FeatureId>,
    geometry: RawGeometry,
    #[serde(default)]
    properties: FeatureProperties,
}

#[derive(Deserialize)]
struct RawGeometry {
    #[serde(rename = "type")]
    kind: String,
    coordinates: Value,
}

/// Convert a `(lon, lat)` feature collection into overlay features.
///
/// Points and polygons are kept; other geometry types are skipped with a
/// warning. Features without an id get their index.
pub fn ingest_features(collection: &Value) -> Result<Vec<Feature>, OverlayError> {
    let raw: RawCollection = serde_json::from_value(collection.clone())
        .map_err(|e| OverlayError::Features(e.to_string()))?;

    let mut features = Vec::with_capacity(raw.features.len());
    for (index, feature) in raw.features.into_iter().enumerate() {
        let coordinates = swap_coordinates(&feature.geometry.coordinates);
        let parse_error = |e: serde_json::Error| OverlayError::Features(format!("feature {}: {}", index, e));

        let geometry = match feature.geometry.kind.as_str() {
            "Point" => Geometry::Point(serde_json::from_value(coordinates).map_err(parse_error)?),
            "Polygon" => Geometry::Polygon(serde_json::from_value(coordinates).map_err(parse_error)?),
            other => {
                log::warn!("Skipping feature {} with unsupported geometry '{}'", index, other);
                continue;
            }
        };

        features.push(Feature {
            id: feature.id.unwrap_or(FeatureId::Number(index as i64)),
            geometry,
            properties: feature.properties,
        });
    }
    Ok(features)
}

/// Even-odd ray cast of `point` against a ring (latitude as x)
pub fn point_in_polygon(point: GeoPoint, ring: &[GeoPoint]) -> bool {
    let (x, y) = (point.lat, point.lon);
    let mut inside = false;
    let mut j = ring.len().wrapping_sub(1);
    for (i, pi) in ring.iter().enumerate() {
        let pj = ring[j];
        let crosses = (pi.lon > y) != (pj.lon > y)
            && x < (pj.lat - pi.lat) * (y - pi.lon) / (pj.lon - pi.lon) + pi.lat;
        if crosses {
            inside = !inside;
        }
        j = i;
    }
    inside
}
