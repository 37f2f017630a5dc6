use std::sync::Arc;

use board_core::{Outcome, PendingAction};
use board_logging::{board_debug, board_error, board_warn};

use crate::guard::ControlGuard;
use crate::{AlertPresenter, BoardSettings, Document, Transport};

const URL_ATTRIBUTE: &str = "data-url";
const CONTAINER_ATTRIBUTE: &str = "data-container";

/// "Load more": appends the next server-rendered page of a list.
#[derive(Clone)]
pub struct ListLoader {
    doc: Arc<dyn Document>,
    transport: Arc<dyn Transport>,
    alerts: AlertPresenter,
    settings: Arc<BoardSettings>,
}

impl ListLoader {
    pub fn new(
        doc: Arc<dyn Document>,
        transport: Arc<dyn Transport>,
        alerts: AlertPresenter,
        settings: Arc<BoardSettings>,
    ) -> Self {
        Self {
            doc,
            transport,
            alerts,
            settings,
        }
    }

    /// On success the trigger is removed; a following page brings its own
    /// trigger inside the fragment. On failure the trigger stays, enabled and
    /// with its original label, so the user can retry. Clicks on a trigger that
    /// is still loading are ignored.
    pub async fn load_more(&self, trigger: &str) -> Outcome {
        let messages = &self.settings.messages;
        let url = self.doc.attribute(trigger, URL_ATTRIBUTE);
        let container = self.doc.attribute(trigger, CONTAINER_ATTRIBUTE);
        let (Some(url), Some(container)) = (url, container) else {
            board_warn!("trigger {} lacks {} or {}", trigger, URL_ATTRIBUTE, CONTAINER_ATTRIBUTE);
            return self.fail(messages.load_failed.clone());
        };

        let Some(busy) = ControlGuard::acquire(self.doc.clone(), trigger, &messages.loading_label)
        else {
            board_debug!("{} is still loading; ignoring", trigger);
            return Outcome::Busy {
                control: trigger.to_string(),
            };
        };
        let request = PendingAction::get_html(url.as_str());
        match self.transport.send(&request).await {
            Ok(reply) => {
                if !self.doc.exists(&container) {
                    board_warn!("container {} not on page", container);
                    return self.fail(messages.load_failed.clone());
                }
                // The old trigger goes first; the fragment may carry its successor.
                self.doc.remove(trigger);
                busy.forget_removed();
                self.doc.append_html(&container, &reply.body);
                board_debug!("appended {} bytes from {} into {}", reply.body.len(), url, container);
                Outcome::Appended { container }
            }
            Err(err) => {
                board_error!("Error loading {}: {}", url, err);
                self.fail(messages.load_failed.clone())
            }
        }
    }

    fn fail(&self, message: String) -> Outcome {
        self.alerts.danger(message.clone());
        Outcome::Failed { message }
    }
}
