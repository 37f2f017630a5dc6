use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

use board_core::{Alert, AlertId, Severity};
use board_logging::board_trace;

use crate::Document;

/// Renders dismissible alerts that remove themselves after a fixed lifetime.
///
/// Must be used inside a tokio runtime: every alert spawns its own expiry.
#[derive(Clone)]
pub struct AlertPresenter {
    doc: Arc<dyn Document>,
    container: String,
    fallback: String,
    lifetime: Duration,
    next_id: Arc<AtomicU64>,
}

impl AlertPresenter {
    pub fn new(
        doc: Arc<dyn Document>,
        container: impl Into<String>,
        fallback: impl Into<String>,
        lifetime: Duration,
    ) -> Self {
        Self {
            doc,
            container: container.into(),
            fallback: fallback.into(),
            lifetime,
            next_id: Arc::new(AtomicU64::new(1)),
        }
    }

    pub fn show(&self, severity: Severity, message: impl Into<String>) -> AlertId {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        let alert = Alert::new(id, severity, message);
        let container = if self.doc.exists(&self.container) {
            self.container.as_str()
        } else {
            self.fallback.as_str()
        };
        self.doc.insert_alert(container, &alert);
        board_trace!("alert {} ({}) shown in {}", id, alert.severity, container);
        self.expire_later(id);
        id
    }

    pub fn success(&self, message: impl Into<String>) -> AlertId {
        self.show(Severity::Success, message)
    }

    pub fn danger(&self, message: impl Into<String>) -> AlertId {
        self.show(Severity::Danger, message)
    }

    /// Close button. Dismissing an alert that already expired is a no-op.
    pub fn dismiss(&self, id: AlertId) -> bool {
        self.doc.remove_alert(id)
    }

    /// Schedules removal of an alert rendered by someone else, such as the
    /// server-side page template.
    pub fn expire_later(&self, id: AlertId) {
        let doc = self.doc.clone();
        let lifetime = self.lifetime;
        tokio::spawn(async move {
            tokio::time::sleep(lifetime).await;
            if doc.remove_alert(id) {
                board_trace!("alert {} expired", id);
            }
        });
    }

    /// Ids handed out by this presenter start above any id already present
    /// in the document.
    pub(crate) fn reserve_ids_above(&self, ids: &[AlertId]) {
        if let Some(max) = ids.iter().max() {
            self.next_id.fetch_max(max + 1, Ordering::Relaxed);
        }
    }
}
