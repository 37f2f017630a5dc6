use crate::action::{status_badge_selector, Action, StatusTarget};
use crate::{ActionReply, Messages, Outcome};

/// Pure reply resolution: maps a parsed reply for `action` to the single
/// outcome the page should apply.
pub fn resolve(action: &Action, reply: &ActionReply, messages: &Messages) -> Outcome {
    if !reply.success {
        let message = non_blank(reply.error.as_deref())
            .or_else(|| non_blank(reply.message.as_deref()))
            .unwrap_or_else(|| application_failure_message(action, messages));
        return Outcome::Failed {
            message: message.to_string(),
        };
    }

    match action {
        Action::TogglePostStatus { post_id } => status_changed(
            StatusTarget::Post,
            *post_id,
            reply,
            &messages.post_status_changed,
        ),
        Action::ToggleResponseStatus { response_id, .. } => status_changed(
            StatusTarget::Response,
            *response_id,
            reply,
            &messages.response_status_changed,
        ),
        Action::MarkNotificationRead { .. } => Outcome::CountRefreshed {
            message: reply_message(reply, &messages.notification_marked),
            unread: reply.unread_count,
        },
        Action::MarkAllNotificationsRead => Outcome::CountRefreshed {
            message: reply_message(reply, &messages.notifications_marked),
            unread: reply.unread_count,
        },
        Action::SubmitForm { .. } => match reply.redirect.as_deref().map(str::trim) {
            Some(url) if !url.is_empty() => Outcome::Navigate {
                url: url.to_string(),
            },
            _ => Outcome::Acknowledged {
                message: reply_message(reply, &messages.form_success),
            },
        },
    }
}

/// Outcome for a request that never produced a usable reply (network error,
/// unparseable body).
pub fn resolve_transport_failure(action: &Action, messages: &Messages) -> Outcome {
    let message = match action {
        Action::TogglePostStatus { .. } | Action::ToggleResponseStatus { .. } => {
            &messages.status_change_failed
        }
        Action::MarkNotificationRead { .. } | Action::MarkAllNotificationsRead => {
            &messages.notification_failed
        }
        Action::SubmitForm { .. } => &messages.form_transport_failed,
    };
    Outcome::Failed {
        message: message.clone(),
    }
}

fn application_failure_message<'a>(action: &Action, messages: &'a Messages) -> &'a str {
    match action {
        Action::TogglePostStatus { .. } | Action::ToggleResponseStatus { .. } => {
            &messages.status_change_failed
        }
        Action::MarkNotificationRead { .. } | Action::MarkAllNotificationsRead => {
            &messages.notification_failed
        }
        Action::SubmitForm { .. } => &messages.form_failed,
    }
}

fn non_blank(text: Option<&str>) -> Option<&str> {
    text.filter(|text| !text.trim().is_empty())
}

fn reply_message(reply: &ActionReply, fallback: &str) -> String {
    non_blank(reply.message.as_deref())
        .unwrap_or(fallback)
        .to_string()
}

fn status_changed(target: StatusTarget, id: u64, reply: &ActionReply, message: &str) -> Outcome {
    let status = reply.status.as_deref().unwrap_or_default();
    let text = reply
        .status_display
        .clone()
        .unwrap_or_else(|| status.to_string());
    Outcome::StatusChanged {
        badge: status_badge_selector(target, id),
        text,
        class: target.badge_class(status).to_string(),
        message: message.to_string(),
    }
}
