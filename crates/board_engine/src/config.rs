use std::time::Duration;

use board_core::{
    Messages, ALERT_LIFETIME_MS, MIN_QUERY_CHARS, NOTIFICATION_POLL_MS, SEARCH_DEBOUNCE_MS,
};
use serde::{Deserialize, Serialize};

/// Where the page keeps the regions the handlers touch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Selectors {
    pub alert_container: String,
    /// Alerts go here when the page has no alert container.
    pub alert_fallback: String,
    pub notification_badge: String,
    pub search_input: String,
    pub search_results: String,
    pub image_preview: String,
    pub load_more: String,
    pub ajax_form: String,
}

impl Default for Selectors {
    fn default() -> Self {
        Self {
            alert_container: ".alert-container".to_string(),
            alert_fallback: "body".to_string(),
            notification_badge: ".notification-badge".to_string(),
            search_input: "#search-input".to_string(),
            search_results: "#search-results".to_string(),
            image_preview: "#image-preview".to_string(),
            load_more: ".load-more-btn".to_string(),
            ajax_form: ".ajax-form".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoardSettings {
    pub base_url: String,
    pub csrf_cookie: String,
    pub csrf_header: String,
    pub debounce_ms: u64,
    pub min_query_chars: usize,
    pub poll_interval_ms: u64,
    pub alert_lifetime_ms: u64,
    pub connect_timeout_ms: u64,
    pub request_timeout_ms: u64,
    pub max_fragment_bytes: u64,
    pub selectors: Selectors,
    pub messages: Messages,
}

impl Default for BoardSettings {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:8000".to_string(),
            csrf_cookie: "csrftoken".to_string(),
            csrf_header: "X-CSRFToken".to_string(),
            debounce_ms: SEARCH_DEBOUNCE_MS,
            min_query_chars: MIN_QUERY_CHARS,
            poll_interval_ms: NOTIFICATION_POLL_MS,
            alert_lifetime_ms: ALERT_LIFETIME_MS,
            connect_timeout_ms: 10_000,
            request_timeout_ms: 30_000,
            max_fragment_bytes: 2 * 1024 * 1024,
            selectors: Selectors::default(),
            messages: Messages::default(),
        }
    }
}

impl BoardSettings {
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }

    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }

    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.poll_interval_ms)
    }

    pub fn alert_lifetime(&self) -> Duration {
        Duration::from_millis(self.alert_lifetime_ms)
    }

    pub fn connect_timeout(&self) -> Duration {
        Duration::from_millis(self.connect_timeout_ms)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_millis(self.request_timeout_ms)
    }
}
