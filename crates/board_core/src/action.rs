use std::fmt;

use crate::request::{endpoints, FormData, Payload, PendingAction};

pub const ACTIVE_BADGE_CLASS: &str = "badge bg-success";
pub const INACTIVE_BADGE_CLASS: &str = "badge bg-danger";

/// Target status a post author can give a pending response.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseStatus {
    Pending,
    Accepted,
    Rejected,
}

impl ResponseStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            ResponseStatus::Pending => "pending",
            ResponseStatus::Accepted => "accepted",
            ResponseStatus::Rejected => "rejected",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "pending" => Some(ResponseStatus::Pending),
            "accepted" => Some(ResponseStatus::Accepted),
            "rejected" => Some(ResponseStatus::Rejected),
            _ => None,
        }
    }
}

impl fmt::Display for ResponseStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which list row a status badge belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusTarget {
    Post,
    Response,
}

impl StatusTarget {
    fn data_attribute(self) -> &'static str {
        match self {
            StatusTarget::Post => "data-post-id",
            StatusTarget::Response => "data-response-id",
        }
    }

    /// Class for the badge after the server reported `status`.
    pub fn badge_class(self, status: &str) -> &'static str {
        let positive = match self {
            StatusTarget::Post => "active",
            StatusTarget::Response => "accepted",
        };
        if status == positive {
            ACTIVE_BADGE_CLASS
        } else {
            INACTIVE_BADGE_CLASS
        }
    }
}

pub fn status_badge_selector(target: StatusTarget, id: u64) -> String {
    format!("[{}=\"{id}\"] .status-badge", target.data_attribute())
}

/// A state-changing user action. Which outcome a successful reply maps to is
/// decided by the variant, never by the reply body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    TogglePostStatus {
        post_id: u64,
    },
    ToggleResponseStatus {
        response_id: u64,
        status: ResponseStatus,
    },
    MarkNotificationRead {
        notification_id: u64,
    },
    MarkAllNotificationsRead,
    SubmitForm {
        form: FormData,
    },
}

impl Action {
    pub fn pending(&self, csrf_token: Option<String>) -> PendingAction {
        match self {
            Action::TogglePostStatus { post_id } => PendingAction::post_json(
                endpoints::toggle_post_status(*post_id),
                Payload::None,
                csrf_token,
            ),
            Action::ToggleResponseStatus {
                response_id,
                status,
            } => PendingAction::post_json(
                endpoints::toggle_response_status(*response_id),
                Payload::Form(vec![("status".to_string(), status.as_str().to_string())]),
                csrf_token,
            ),
            Action::MarkNotificationRead { notification_id } => PendingAction::post_json(
                endpoints::mark_read(*notification_id),
                Payload::None,
                csrf_token,
            ),
            Action::MarkAllNotificationsRead => {
                PendingAction::post_json(endpoints::MARK_ALL_READ, Payload::None, csrf_token)
            }
            Action::SubmitForm { form } => PendingAction::post_json(
                form.action.clone(),
                Payload::Multipart(form.fields.clone()),
                csrf_token,
            ),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Action::TogglePostStatus { .. } => "toggle-post-status",
            Action::ToggleResponseStatus { .. } => "toggle-response-status",
            Action::MarkNotificationRead { .. } => "mark-notification-read",
            Action::MarkAllNotificationsRead => "mark-all-notifications-read",
            Action::SubmitForm { .. } => "submit-form",
        }
    }
}
