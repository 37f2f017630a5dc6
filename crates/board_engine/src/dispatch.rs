use std::sync::Arc;

use board_core::{
    read_cookie, resolve, resolve_transport_failure, Action, ActionReply, Outcome, ResponseStatus,
};
use board_logging::{board_debug, board_error, board_warn};

use crate::guard::ControlGuard;
use crate::{AlertPresenter, BadgeRefresher, BoardSettings, Document, Transport};

/// Runs state-changing actions: one request carrying the anti-forgery token,
/// one outcome applied to the page.
#[derive(Clone)]
pub struct ActionDispatcher {
    doc: Arc<dyn Document>,
    transport: Arc<dyn Transport>,
    alerts: AlertPresenter,
    badge: BadgeRefresher,
    settings: Arc<BoardSettings>,
}

impl ActionDispatcher {
    pub fn new(
        doc: Arc<dyn Document>,
        transport: Arc<dyn Transport>,
        alerts: AlertPresenter,
        badge: BadgeRefresher,
        settings: Arc<BoardSettings>,
    ) -> Self {
        Self {
            doc,
            transport,
            alerts,
            badge,
            settings,
        }
    }

    pub async fn toggle_post_status(&self, post_id: u64) -> Outcome {
        self.dispatch(Action::TogglePostStatus { post_id }).await
    }

    pub async fn toggle_response_status(&self, response_id: u64, status: ResponseStatus) -> Outcome {
        self.dispatch(Action::ToggleResponseStatus {
            response_id,
            status,
        })
        .await
    }

    pub async fn mark_notification_read(&self, notification_id: u64) -> Outcome {
        self.dispatch(Action::MarkNotificationRead { notification_id })
            .await
    }

    pub async fn mark_all_notifications_read(&self) -> Outcome {
        self.dispatch(Action::MarkAllNotificationsRead).await
    }

    /// Submits the form at `form` as multipart data. Its submit button is busy
    /// for the duration of the request and restored however the request
    /// settles. Submitting again while busy sends nothing.
    pub async fn submit_form(&self, form: &str) -> Outcome {
        let Some(data) = self.doc.form_data(form) else {
            board_warn!("form {} not found", form);
            let outcome = Outcome::Failed {
                message: self.settings.messages.form_failed.clone(),
            };
            self.apply(&outcome).await;
            return outcome;
        };
        let submit = format!("{form} button[type=\"submit\"]");
        let Some(_busy) = ControlGuard::acquire(
            self.doc.clone(),
            &submit,
            &self.settings.messages.submitting_label,
        ) else {
            board_debug!("form {} is still submitting; ignoring", form);
            return Outcome::Busy { control: submit };
        };
        self.dispatch(Action::SubmitForm { form: data }).await
    }

    pub async fn dispatch(&self, action: Action) -> Outcome {
        let request = action.pending(self.csrf_token());
        let messages = &self.settings.messages;
        let outcome = match self
            .transport
            .send(&request)
            .await
            .and_then(|reply| reply.json::<ActionReply>())
        {
            Ok(reply) => resolve(&action, &reply, messages),
            Err(err) => {
                board_error!("{} failed: {}", action.name(), err);
                resolve_transport_failure(&action, messages)
            }
        };
        board_debug!("{} settled: {:?}", action.name(), outcome);
        self.apply(&outcome).await;
        outcome
    }

    fn csrf_token(&self) -> Option<String> {
        let token = read_cookie(&self.doc.cookie(), &self.settings.csrf_cookie);
        if token.is_none() {
            board_warn!(
                "cookie {} missing; request goes out without anti-forgery token",
                self.settings.csrf_cookie
            );
        }
        token
    }

    async fn apply(&self, outcome: &Outcome) {
        match outcome {
            Outcome::Navigate { url } => self.doc.navigate(url),
            Outcome::StatusChanged {
                badge,
                text,
                class,
                message,
            } => {
                if self.doc.set_content(badge, text) {
                    self.doc.set_class(badge, class);
                } else {
                    board_warn!("status badge {} not on page", badge);
                }
                self.alerts.success(message.clone());
            }
            Outcome::CountRefreshed { message, unread } => {
                match unread {
                    Some(count) => {
                        self.badge.apply_count(*count);
                    }
                    None => {
                        self.badge.refresh().await;
                    }
                }
                self.alerts.success(message.clone());
            }
            Outcome::Acknowledged { message } => {
                self.alerts.success(message.clone());
            }
            Outcome::Appended { .. } | Outcome::Busy { .. } => {}
            Outcome::Failed { message } => {
                self.alerts.danger(message.clone());
            }
        }
    }
}
