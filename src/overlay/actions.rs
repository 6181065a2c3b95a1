use serde::{Deserialize, Serialize};

use super::geo::FeatureProperties;

const DEFAULT_DOCUMENT_TITLE: &str = "Document";
const DEFAULT_VIDEO_TITLE: &str = "Video presentation";

/// Action emitted by a feature's info panel
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ActionPayload {
    pub action_id: Option<String>,
    /// Feature label
    #[serde(alias = "label")]
    pub icon_caption: Option<String>,
    pub description: Option<String>,
    pub file_url: Option<String>,
    pub video_url: Option<String>,
}

impl ActionPayload {
    /// Payload of the info panel's main button
    pub fn from_properties(properties: &FeatureProperties) -> Self {
        Self {
            action_id: properties.action_id.clone(),
            icon_caption: properties.icon_caption.clone(),
            description: properties.description.clone(),
            file_url: properties.file_url.clone(),
            video_url: properties.video_url.clone(),
        }
    }

    /// Payload of the video button: same properties, action forced to video
    pub fn video_from_properties(properties: &FeatureProperties) -> Self {
        Self { action_id: Some("play_video".to_string()), ..Self::from_properties(properties) }
    }

    fn label(&self) -> &str {
        self.icon_caption.as_deref().unwrap_or_default()
    }
}

/// What the application should do for an action
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    ReservationPrompt { label: String },
    DocumentPreview { url: String, title: String },
    MissingDocument { label: String },
    VideoPreview { url: String, title: String },
    MissingVideo { label: String },
    Tour3d { label: String },
    Notice { label: String, description: String },
}

impl Resolution {
    /// Text for prompt-style resolutions
    pub fn message(&self) -> Option<String> {
        match self {
            Resolution::ReservationPrompt { label } => Some(format!("Reservation request: {}", label)),
            Resolution::MissingDocument { label } => Some(format!("No downloadable file for: {}", label)),
            Resolution::MissingVideo { label } => Some(format!("Video not found: {}", label)),
            Resolution::Tour3d { label } => Some(format!("Starting 3D tour: {}", label)),
            Resolution::Notice { label, description } => Some(format!("Action for: {}\n{}", label, description)),
            Resolution::DocumentPreview { .. } | Resolution::VideoPreview { .. } => None,
        }
    }
}

fn title_or(caption: &Option<String>, default: &str) -> String {
    caption
        .as_deref()
        .filter(|c| !c.is_empty())
        .unwrap_or(default)
        .to_string()
}

pub fn resolve_action(payload: &ActionPayload) -> Resolution {
    let label = payload.label().to_string();
    match payload.action_id.as_deref() {
        Some("reserve") => Resolution::ReservationPrompt { label },
        Some("download_plan") => match &payload.file_url {
            Some(url) => Resolution::DocumentPreview {
                url: url.clone(),
                title: title_or(&payload.icon_caption, DEFAULT_DOCUMENT_TITLE),
            },
            None => Resolution::MissingDocument { label },
        },
        Some("play_video") => match &payload.video_url {
            Some(url) => Resolution::VideoPreview {
                url: url.clone(),
                title: title_or(&payload.icon_caption, DEFAULT_VIDEO_TITLE),
            },
            None => Resolution::MissingVideo { label },
        },
        Some("view_3d") => Resolution::Tour3d { label },
        _ => Resolution::Notice {
            label,
            description: payload.description.clone().unwrap_or_default(),
        },
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Listener = Box<dyn FnMut(&ActionPayload)>;

/// Delivers feature actions to registered listeners in subscription order
#[derive(Default)]
pub struct ActionDispatcher {
    listeners: Vec<(SubscriptionId, Listener)>,
    next_id: u64,
}

impl ActionDispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&mut self, listener: impl FnMut(&ActionPayload) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// False when `id` was not subscribed
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(existing, _)| *existing != id);
        self.listeners.len() != before
    }

    /// Returns how many listeners received the payload
    pub fn dispatch(&mut self, payload: &ActionPayload) -> usize {
        log::debug!("Action {:?} for {:?}", payload.action_id, payload.icon_caption);
        for (_, listener) in &mut self.listeners {
            listener(payload);
        }
        self.listeners.len()
    }

    pub fn len(&self) -> usize {
        self.listeners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn payload(json: &str) -> ActionPayload {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn download_plan_opens_document() {
        let p = payload(r#"{"actionId":"download_plan","fileUrl":"https://x/doc.pdf","iconCaption":"Plan A"}"#);
        assert_eq!(
            resolve_action(&p),
            Resolution::DocumentPreview { url: "https://x/doc.pdf".into(), title: "Plan A".into() }
        );
    }

    #[test]
    fn missing_urls_and_default_titles() {
        let no_file = payload(r#"{"actionId":"download_plan","iconCaption":"Lot 3"}"#);
        assert_eq!(resolve_action(&no_file), Resolution::MissingDocument { label: "Lot 3".into() });

        let untitled = payload(r#"{"actionId":"download_plan","fileUrl":"f.pdf"}"#);
        assert_eq!(
            resolve_action(&untitled),
            Resolution::DocumentPreview { url: "f.pdf".into(), title: "Document".into() }
        );

        let video = payload(r#"{"actionId":"play_video","videoUrl":"v.mp4"}"#);
        assert_eq!(
            resolve_action(&video),
            Resolution::VideoPreview { url: "v.mp4".into(), title: "Video presentation".into() }
        );
    }

    #[test]
    fn reserve_and_unknown_actions() {
        let reserve = resolve_action(&payload(r#"{"actionId":"reserve","iconCaption":"Unit 5"}"#));
        assert_eq!(reserve, Resolution::ReservationPrompt { label: "Unit 5".into() });
        assert!(reserve.message().unwrap().contains("Unit 5"));

        let other = resolve_action(&payload(r#"{"actionId":"wave","label":"Dock","description":"Pier"}"#));
        assert_eq!(other, Resolution::Notice { label: "Dock".into(), description: "Pier".into() });
        assert_eq!(resolve_action(&ActionPayload::default()).message().unwrap(), "Action for: \n");
    }

    #[test]
    fn video_button_overrides_action() {
        let properties = FeatureProperties {
            action_id: Some("reserve".into()),
            video_url: Some("v.mp4".into()),
            ..Default::default()
        };
        assert_eq!(ActionPayload::from_properties(&properties).action_id.as_deref(), Some("reserve"));
        let video = ActionPayload::video_from_properties(&properties);
        assert_eq!(video.action_id.as_deref(), Some("play_video"));
        assert_eq!(video.video_url.as_deref(), Some("v.mp4"));
    }

    #[test]
    fn dispatcher_subscribe_unsubscribe() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut dispatcher = ActionDispatcher::new();

        let sink = seen.clone();
        let id = dispatcher.subscribe(move |p| sink.borrow_mut().push(p.action_id.clone()));
        assert_eq!(dispatcher.dispatch(&payload(r#"{"actionId":"reserve"}"#)), 1);

        assert!(dispatcher.unsubscribe(id));
        assert!(!dispatcher.unsubscribe(id));
        assert_eq!(dispatcher.dispatch(&ActionPayload::default()), 0);
        assert_eq!(*seen.borrow(), vec![Some("reserve".to_string())]);
    }
}
