//! Board core: pure page-interaction logic with no I/O, timers or DOM access.
mod action;
mod alert;
mod cookie;
mod messages;
mod msg;
mod outcome;
mod reply;
mod request;
mod search;
mod text;
mod update;
mod view_model;

pub use action::{
    status_badge_selector, Action, ResponseStatus, StatusTarget, ACTIVE_BADGE_CLASS,
    INACTIVE_BADGE_CLASS,
};
pub use alert::{Alert, AlertId, Severity, ALERT_LIFETIME_MS};
pub use cookie::read_cookie;
pub use messages::Messages;
pub use msg::PageEvent;
pub use outcome::Outcome;
pub use reply::{ActionReply, CountReply};
pub use request::{
    endpoints, FormData, FormField, Method, Payload, PendingAction, ResponseShape, SelectedFile,
    XHR_HEADER, XHR_HEADER_VALUE,
};
pub use search::{should_search, SearchSequence, SearchTicket, MIN_QUERY_CHARS, SEARCH_DEBOUNCE_MS};
pub use text::{format_date, format_datetime, loading_markup, truncate_text, DateFormatError};
pub use update::{resolve, resolve_transport_failure};
pub use view_model::{badge_for_count, BadgeView, NOTIFICATION_POLL_MS};
