use super::actions::{ActionDispatcher, ActionPayload};
use super::camera::{resolve_camera, Camera, MIN_ZOOM, PAN_MS, RECENTER_MS};
use super::geo::{ingest_features, point_in_polygon, FeatureId, FeatureProperties, GeoPoint, Geometry};
use super::highlight::{pulse_style, PulseStyle, RegionColors};
use super::project::Project;

/// The map provider, driven by [`GeoOverlay`]
pub trait MapWidget {
    /// First display: build the map at `camera`
    fn create(&mut self, camera: Camera, min_zoom: f64);
    /// Animated camera move
    fn set_center(&mut self, camera: Camera, duration_ms: u32);
    fn pan_to(&mut self, target: GeoPoint, duration_ms: u32);
    /// Remove every marker and region
    fn clear(&mut self);
    fn add_marker(&mut self, id: &FeatureId, at: GeoPoint, properties: &FeatureProperties);
    fn add_region(&mut self, id: &FeatureId, rings: &[Vec<GeoPoint>], style: PulseStyle);
    fn set_region_style(&mut self, id: &FeatureId, style: PulseStyle);
    fn close_info_panel(&mut self);
}

/// Events reported by the widget
#[derive(Debug, Clone, PartialEq)]
pub enum MapEvent {
    /// Provider finished loading
    Ready,
    MarkerClicked(FeatureId),
    /// Click on the map background
    MapClicked,
    BoundsChanged { center: GeoPoint, zoom: f64 },
    /// Main button of a marker's info panel
    MainButton(FeatureId),
    /// Video button of a marker's info panel
    VideoButton(FeatureId),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadState {
    /// Until the provider reports ready; there is no failure state
    Loading,
    Ready,
}

struct Marker {
    id: FeatureId,
    at: GeoPoint,
    properties: FeatureProperties,
}

struct Region {
    id: FeatureId,
    outer: Vec<GeoPoint>,
    colors: RegionColors,
}

/// Controller between a project and the map widget.
///
/// Shows a project's camera and features, turns marker clicks into a
/// highlighted region and info panel buttons into dispatched actions.
pub struct GeoOverlay<W> {
    widget: W,
    state: LoadState,
    project: Option<Project>,
    viewport_width: f32,
    camera_created: bool,
    markers: Vec<Marker>,
    regions: Vec<Region>,
    highlighted: Option<FeatureId>,
    view: Option<Camera>,
    dispatcher: ActionDispatcher,
}

impl<W: MapWidget> GeoOverlay<W> {
    pub fn new(widget: W) -> Self {
        Self {
            widget,
            state: LoadState::Loading,
            project: None,
            viewport_width: 0.0,
            camera_created: false,
            markers: Vec::new(),
            regions: Vec::new(),
            highlighted: None,
            view: None,
            dispatcher: ActionDispatcher::new(),
        }
    }

    /// Display `project`. Applied immediately once the widget is ready,
    /// otherwise as soon as it reports ready.
    pub fn show(&mut self, project: Project, viewport_width: f32) {
        self.project = Some(project);
        self.viewport_width = viewport_width;
        if self.state == LoadState::Ready {
            self.apply();
        }
    }

    fn apply(&mut self) {
        let Some(project) = &self.project else {
            return;
        };

        let camera = resolve_camera(project, self.viewport_width);
        if self.camera_created {
            self.widget.set_center(camera, RECENTER_MS);
        } else {
            self.widget.create(camera, MIN_ZOOM);
            self.camera_created = true;
        }
        self.view = Some(camera);

        self.widget.clear();
        self.markers.clear();
        self.regions.clear();
        self.highlighted = None;

        let Some(geo_json) = &project.geo_json else {
            return;
        };
        let features = match ingest_features(geo_json) {
            Ok(features) => features,
            Err(e) => {
                log::error!("Project '{}': {}", project.id, e);
                return;
            }
        };

        for feature in features {
            match feature.geometry {
                Geometry::Point(at) => {
                    self.widget.add_marker(&feature.id, at, &feature.properties);
                    self.markers.push(Marker { id: feature.id, at, properties: feature.properties });
                }
                Geometry::Polygon(rings) => {
                    let colors = RegionColors::from_hex(
                        feature.properties.fill.as_deref(),
                        feature.properties.stroke.as_deref(),
                    );
                    self.widget.add_region(&feature.id, &rings, pulse_style(false, 0.0, colors));
                    let outer = rings.into_iter().next().unwrap_or_default();
                    self.regions.push(Region { id: feature.id, outer, colors });
                }
            }
        }
        log::debug!(
            "Project '{}': {} markers, {} regions",
            project.id,
            self.markers.len(),
            self.regions.len()
        );
    }

    pub fn handle(&mut self, event: MapEvent) {
        match event {
            MapEvent::Ready => {
                if self.state == LoadState::Loading {
                    self.state = LoadState::Ready;
                    self.apply();
                }
            }
            MapEvent::MarkerClicked(id) => {
                let Some(at) = self.marker(&id).map(|m| m.at) else {
                    return;
                };
                self.highlighted = self
                    .regions
                    .iter()
                    .filter(|region| point_in_polygon(at, &region.outer))
                    .last()
                    .map(|region| region.id.clone());
                self.widget.pan_to(at, PAN_MS);
            }
            MapEvent::MapClicked => {
                self.highlighted = None;
                self.widget.close_info_panel();
            }
            MapEvent::BoundsChanged { center, zoom } => {
                self.view = Some(Camera { center, zoom });
            }
            MapEvent::MainButton(id) => {
                if let Some(marker) = self.marker(&id) {
                    let payload = ActionPayload::from_properties(&marker.properties);
                    self.dispatcher.dispatch(&payload);
                }
            }
            MapEvent::VideoButton(id) => {
                let payload = self
                    .marker(&id)
                    .filter(|m| m.properties.video_url.is_some())
                    .map(|m| ActionPayload::video_from_properties(&m.properties));
                if let Some(payload) = payload {
                    self.dispatcher.dispatch(&payload);
                }
            }
        }
    }

    /// Restyle every region for `time` seconds
    pub fn animate(&mut self, time: f64) {
        for region in &self.regions {
            let active = self.highlighted.as_ref() == Some(&region.id);
            self.widget.set_region_style(&region.id, pulse_style(active, time, region.colors));
        }
    }

    fn marker(&self, id: &FeatureId) -> Option<&Marker> {
        self.markers.iter().find(|m| &m.id == id)
    }

    pub fn load_state(&self) -> LoadState {
        self.state
    }

    pub fn highlighted(&self) -> Option<&FeatureId> {
        self.highlighted.as_ref()
    }

    pub fn markers(&self) -> impl Iterator<Item = (&FeatureId, GeoPoint)> {
        self.markers.iter().map(|m| (&m.id, m.at))
    }

    /// Last known camera
    pub fn view(&self) -> Option<Camera> {
        self.view
    }

    /// Current camera as a `mapView` block to paste into project data
    pub fn camera_snippet(&self) -> Option<String> {
        self.view.map(|camera| {
            format!(
                "mapView: {{\n    center: [{:.6}, {:.6}],\n    zoom: {:.2}\n}},",
                camera.center.lat, camera.center.lon, camera.zoom
            )
        })
    }

    pub fn dispatcher_mut(&mut self) -> &mut ActionDispatcher {
        &mut self.dispatcher
    }

    pub fn widget(&self) -> &W {
        &self.widget
    }
}
