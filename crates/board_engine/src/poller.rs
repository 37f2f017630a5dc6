use std::sync::Arc;
use std::time::Duration;

use board_core::{badge_for_count, endpoints, CountReply, PendingAction};
use board_logging::{board_debug, board_error};
use tokio::time::MissedTickBehavior;
use tokio_util::sync::CancellationToken;

use crate::{Document, Transport};

/// Re-queries the unread count and mirrors it into the badge element.
#[derive(Clone)]
pub struct BadgeRefresher {
    doc: Arc<dyn Document>,
    transport: Arc<dyn Transport>,
    badge: String,
}

impl BadgeRefresher {
    pub fn new(doc: Arc<dyn Document>, transport: Arc<dyn Transport>, badge: impl Into<String>) -> Self {
        Self {
            doc,
            transport,
            badge: badge.into(),
        }
    }

    /// Returns the count that was applied. Pages without a badge are not
    /// queried at all; failures are logged and leave the badge as it was.
    pub async fn refresh(&self) -> Option<i64> {
        if !self.doc.exists(&self.badge) {
            return None;
        }
        let request = PendingAction::get_json(endpoints::NOTIFICATION_COUNT);
        let reply = match self
            .transport
            .send(&request)
            .await
            .and_then(|reply| reply.json::<CountReply>())
        {
            Ok(reply) => reply,
            Err(err) => {
                board_error!("Error updating notification count: {}", err);
                return None;
            }
        };

        self.apply_count(reply.count);
        Some(reply.count)
    }

    /// Mirrors a count the caller already has. Returns `false` when the page
    /// has no badge.
    pub fn apply_count(&self, count: i64) -> bool {
        if !self.doc.exists(&self.badge) {
            return false;
        }
        let view = badge_for_count(count);
        if let Some(text) = view.text.as_deref() {
            self.doc.set_content(&self.badge, text);
        }
        self.doc.set_visible(&self.badge, view.visible);
        board_debug!("unread count {}", count);
        true
    }
}

/// Repeating unread-count refresh, owned by whoever started it.
pub struct BadgePoller {
    refresher: BadgeRefresher,
    interval: Duration,
    cancel: Option<CancellationToken>,
}

impl BadgePoller {
    pub fn new(refresher: BadgeRefresher, interval: Duration) -> Self {
        Self {
            refresher,
            interval: interval.max(Duration::from_millis(1)),
            cancel: None,
        }
    }

    /// Refreshes immediately, then once per interval until stopped. Starting a
    /// running poller does nothing.
    pub fn start(&mut self) {
        if self.cancel.is_some() {
            return;
        }
        let token = CancellationToken::new();
        let cancelled = token.clone();
        let refresher = self.refresher.clone();
        let period = self.interval;
        tokio::spawn(async move {
            let mut ticker = tokio::time::interval(period);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                tokio::select! {
                    _ = cancelled.cancelled() => break,
                    _ = async {
                        ticker.tick().await;
                        refresher.refresh().await;
                    } => {}
                }
            }
        });
        self.cancel = Some(token);
    }

    pub fn stop(&mut self) {
        if let Some(token) = self.cancel.take() {
            token.cancel();
        }
    }

    pub fn is_running(&self) -> bool {
        self.cancel.is_some()
    }
}

impl Drop for BadgePoller {
    fn drop(&mut self) {
        self.stop();
    }
}
