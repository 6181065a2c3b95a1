use super::actions::{resolve_action, ActionPayload, Resolution};
use crate::core::Countdown;

/// Seconds before the loading indicator is dropped without a load signal
pub const PREVIEW_LOADING_TIMEOUT: f32 = 3.0;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewTarget {
    pub url: String,
    pub title: String,
}

/// Document viewer state.
///
/// A slow load and a failed load look the same: the indicator clears on the
/// load signal or after the timeout, whichever comes first.
#[derive(Debug, Clone)]
pub struct DocumentPreview {
    target: Option<PreviewTarget>,
    loading: bool,
    timeout: Countdown,
}

impl DocumentPreview {
    pub fn new() -> Self {
        Self { target: None, loading: false, timeout: Countdown::new(PREVIEW_LOADING_TIMEOUT) }
    }

    pub fn open(&mut self, target: PreviewTarget) {
        log::debug!("Opening document '{}'", target.title);
        self.target = Some(target);
        self.loading = true;
        self.timeout.start();
    }

    pub fn close(&mut self) {
        self.target = None;
        self.loading = false;
        self.timeout.cancel();
    }

    /// The embedded viewer reported a successful load
    pub fn loaded(&mut self) {
        self.loading = false;
        self.timeout.cancel();
    }

    pub fn tick(&mut self, delta: f32) {
        if self.timeout.tick(delta) {
            self.loading = false;
        }
    }

    pub fn current(&self) -> Option<&PreviewTarget> {
        self.target.as_ref()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }
}

impl Default for DocumentPreview {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone, Default)]
pub struct VideoPreview {
    target: Option<PreviewTarget>,
}

impl VideoPreview {
    pub fn open(&mut self, target: PreviewTarget) {
        self.target = Some(target);
    }

    pub fn close(&mut self) {
        self.target = None;
    }

    pub fn current(&self) -> Option<&PreviewTarget> {
        self.target.as_ref()
    }
}

/// Application side of feature actions: preview panels plus prompts
#[derive(Debug, Clone, Default)]
pub struct PreviewPanels {
    pub document: DocumentPreview,
    pub video: VideoPreview,
    /// Prompts shown to the user, oldest first
    pub prompts: Vec<String>,
}

impl PreviewPanels {
    pub fn handle(&mut self, payload: &ActionPayload) -> Resolution {
        let resolution = resolve_action(payload);
        match &resolution {
            Resolution::DocumentPreview { url, title } => self.document.open(PreviewTarget {
                url: url.clone(),
                title: title.clone(),
            }),
            Resolution::VideoPreview { url, title } => self.video.open(PreviewTarget {
                url: url.clone(),
                title: title.clone(),
            }),
            other => {
                if let Some(message) = other.message() {
                    log::info!("{}", message);
                    self.prompts.push(message);
                }
            }
        }
        resolution
    }
}
