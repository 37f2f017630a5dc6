/// What the page did in response to one settled action. Every dispatched
/// action produces exactly one of these.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Browser sent to a server-supplied location.
    Navigate { url: String },
    /// A status badge was rewritten and a success alert shown.
    StatusChanged {
        badge: String,
        text: String,
        class: String,
        message: String,
    },
    /// The unread badge was brought up to date and a success alert shown.
    /// `unread` is the count the server sent along, if any; without it the
    /// count is re-queried.
    CountRefreshed { message: String, unread: Option<i64> },
    /// A form was accepted without a redirect; a success alert was shown.
    Acknowledged { message: String },
    /// A fragment was appended to `container` and its trigger removed.
    Appended { container: String },
    /// A danger alert was shown; nothing else changed.
    Failed { message: String },
    /// The control was still busy with an earlier request; nothing was sent.
    Busy { control: String },
}

impl Outcome {
    pub fn is_failure(&self) -> bool {
        matches!(self, Outcome::Failed { .. })
    }
}
