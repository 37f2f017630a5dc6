//! Pending requests: what one handler sends for one round-trip.

pub const XHR_HEADER: &str = "X-Requested-With";
pub const XHR_HEADER_VALUE: &str = "XMLHttpRequest";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
}

/// What the handler expects back: a JSON object with a success flag, or a
/// raw HTML fragment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseShape {
    Json,
    Html,
}

/// A file picked through a file input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedFile {
    pub file_name: String,
    pub mime_type: String,
    pub bytes: Vec<u8>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormField {
    Text(String),
    File(SelectedFile),
}

/// Snapshot of a form's `action` target and its current field values.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FormData {
    pub action: String,
    pub fields: Vec<(String, FormField)>,
}

impl FormData {
    pub fn new(action: impl Into<String>) -> Self {
        Self {
            action: action.into(),
            fields: Vec::new(),
        }
    }

    pub fn with_text(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.fields
            .push((name.into(), FormField::Text(value.into())));
        self
    }

    pub fn with_file(mut self, name: impl Into<String>, file: SelectedFile) -> Self {
        self.fields.push((name.into(), FormField::File(file)));
        self
    }

    pub fn text(&self, name: &str) -> Option<&str> {
        self.fields.iter().find_map(|(field, value)| match value {
            FormField::Text(text) if field == name => Some(text.as_str()),
            _ => None,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Payload {
    None,
    Form(Vec<(String, String)>),
    Multipart(Vec<(String, FormField)>),
}

/// One network round-trip owned by the handler that created it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingAction {
    pub method: Method,
    pub path: String,
    pub payload: Payload,
    pub csrf_token: Option<String>,
    pub expect: ResponseShape,
}

impl PendingAction {
    /// Read-only JSON query; never carries the anti-forgery token.
    pub fn get_json(path: impl Into<String>) -> Self {
        Self {
            method: Method::Get,
            path: path.into(),
            payload: Payload::None,
            csrf_token: None,
            expect: ResponseShape::Json,
        }
    }

    /// Read-only HTML fragment fetch.
    pub fn get_html(path: impl Into<String>) -> Self {
        Self {
            method: Method::Get,
            path: path.into(),
            payload: Payload::None,
            csrf_token: None,
            expect: ResponseShape::Html,
        }
    }

    pub fn post_json(path: impl Into<String>, payload: Payload, csrf_token: Option<String>) -> Self {
        Self {
            method: Method::Post,
            path: path.into(),
            payload,
            csrf_token,
            expect: ResponseShape::Json,
        }
    }

    pub fn is_state_changing(&self) -> bool {
        self.method == Method::Post
    }
}

/// Backend paths the page talks to.
pub mod endpoints {
    pub const NOTIFICATION_COUNT: &str = "/notifications/api/count/";
    pub const MARK_ALL_READ: &str = "/notifications/api/mark-all-read/";

    pub fn mark_read(notification_id: u64) -> String {
        format!("/notifications/api/{notification_id}/mark-read/")
    }

    pub fn toggle_post_status(post_id: u64) -> String {
        format!("/api/post/{post_id}/toggle-status/")
    }

    pub fn toggle_response_status(response_id: u64) -> String {
        format!("/api/response/{response_id}/toggle-status/")
    }

    pub fn search(query: &str) -> String {
        let encoded = url::form_urlencoded::Serializer::new(String::new())
            .append_pair("q", query)
            .finish();
        format!("/search/?{encoded}")
    }
}
