use super::geo::GeoPoint;
use super::project::{CameraConfig, Project};

pub const DEFAULT_ZOOM: f64 = 14.0;
pub const MIN_ZOOM: f64 = 2.0;
/// Viewports narrower than this use the mobile camera
pub const MOBILE_BREAKPOINT: f32 = 768.0;
pub const FALLBACK_MARKER: GeoPoint = GeoPoint::new(55.75, 37.62);
/// Camera transition when a different project is shown
pub const RECENTER_MS: u32 = 800;
/// Pan to a clicked marker
pub const PAN_MS: u32 = 600;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    pub center: GeoPoint,
    pub zoom: f64,
}

/// Starting camera for a project at the given viewport width
pub fn resolve_camera(project: &Project, viewport_width: f32) -> Camera {
    let marker = project.geo_coordinates.unwrap_or(FALLBACK_MARKER);
    let fallback = Camera { center: marker, zoom: DEFAULT_ZOOM };

    let config = match (&project.mobile_map_view, &project.map_view) {
        (Some(mobile), _) if viewport_width < MOBILE_BREAKPOINT => Some(mobile),
        (_, Some(desktop)) => Some(desktop),
        _ => None,
    };

    config.map_or(fallback, |config| apply(config, fallback))
}

fn apply(config: &CameraConfig, fallback: Camera) -> Camera {
    Camera {
        center: config.center.unwrap_or(fallback.center),
        // zero zoom counts as unset
        zoom: config
            .zoom
            .filter(|z| z.is_finite() && *z != 0.0)
            .unwrap_or(fallback.zoom),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::overlay::project::{MapPercent, ProjectStats, ProjectStatus};

    fn project() -> Project {
        Project {
            id: "p".into(),
            order: 0,
            title: "P".into(),
            region: "R".into(),
            status: ProjectStatus::Completed,
            description: String::new(),
            image: String::new(),
            gallery: vec![],
            coordinates: MapPercent::default(),
            geo_coordinates: Some(GeoPoint::new(50.0, 30.0)),
            map_view: None,
            mobile_map_view: None,
            geo_json: None,
            stats: ProjectStats::default(),
            features: vec![],
        }
    }

    #[test]
    fn defaults_to_marker() {
        let camera = resolve_camera(&project(), 1200.0);
        assert_eq!(camera, Camera { center: GeoPoint::new(50.0, 30.0), zoom: 14.0 });
    }

    #[test]
    fn missing_marker_uses_fallback() {
        let mut p = project();
        p.geo_coordinates = None;
        assert_eq!(resolve_camera(&p, 1200.0).center, FALLBACK_MARKER);
    }

    #[test]
    fn mobile_view_below_breakpoint() {
        let mut p = project();
        p.map_view = Some(CameraConfig { center: Some(GeoPoint::new(1.0, 2.0)), zoom: Some(16.0) });
        p.mobile_map_view = Some(CameraConfig { center: None, zoom: Some(11.0) });

        let mobile = resolve_camera(&p, 767.0);
        assert_eq!(mobile, Camera { center: GeoPoint::new(50.0, 30.0), zoom: 11.0 });

        let desktop = resolve_camera(&p, 768.0);
        assert_eq!(desktop, Camera { center: GeoPoint::new(1.0, 2.0), zoom: 16.0 });
    }

    #[test]
    fn narrow_viewport_without_mobile_view_uses_desktop() {
        let mut p = project();
        p.map_view = Some(CameraConfig { center: None, zoom: Some(0.0) });
        assert_eq!(resolve_camera(&p, 320.0).zoom, DEFAULT_ZOOM);
    }
}
