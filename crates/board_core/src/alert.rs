use std::fmt;

/// Alerts remove themselves after this many milliseconds unless dismissed first.
pub const ALERT_LIFETIME_MS: u64 = 5_000;

pub type AlertId = u64;

/// Alert severity. `Success` and `Danger` are the ones the page raises itself;
/// anything else is carried through verbatim into the rendered class.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Severity {
    Success,
    Danger,
    Other(String),
}

impl Severity {
    pub fn as_str(&self) -> &str {
        match self {
            Severity::Success => "success",
            Severity::Danger => "danger",
            Severity::Other(name) => name,
        }
    }
}

impl From<&str> for Severity {
    fn from(value: &str) -> Self {
        match value {
            "success" => Severity::Success,
            "danger" => Severity::Danger,
            other => Severity::Other(other.to_string()),
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One user-visible notice. Alerts are never deduplicated: two identical
/// messages get two ids.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alert {
    pub id: AlertId,
    pub severity: Severity,
    pub message: String,
}

impl Alert {
    pub fn new(id: AlertId, severity: Severity, message: impl Into<String>) -> Self {
        Self {
            id,
            severity,
            message: message.into(),
        }
    }

    pub fn class_name(&self) -> String {
        format!("alert alert-{} alert-dismissible fade show", self.severity)
    }
}
