use crate::{AlertId, ResponseStatus, SelectedFile};

/// Everything the page reacts to after load. Selectors name the element the
/// event came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageEvent {
    /// The search box changed.
    SearchInput(String),
    /// An AJAX form was submitted.
    FormSubmitted { form: String },
    /// A "load more" control was clicked.
    LoadMoreClicked { trigger: String },
    /// The close button of an alert was clicked.
    AlertDismissed(AlertId),
    /// The image file input changed.
    ImageSelected(Option<SelectedFile>),
    TogglePost {
        post_id: u64,
    },
    ToggleResponse {
        response_id: u64,
        status: ResponseStatus,
    },
    MarkRead {
        notification_id: u64,
    },
    MarkAllRead,
    RefreshCount,
    /// Fallback for unrecognized input.
    NoOp,
}
