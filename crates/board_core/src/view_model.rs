/// Interval between unread-count refreshes.
pub const NOTIFICATION_POLL_MS: u64 = 30_000;

/// How the unread badge should look after a count reply. `text: None` leaves
/// the current text alone.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BadgeView {
    pub text: Option<String>,
    pub visible: bool,
}

pub fn badge_for_count(count: i64) -> BadgeView {
    if count > 0 {
        BadgeView {
            text: Some(count.to_string()),
            visible: true,
        }
    } else {
        BadgeView {
            text: None,
            visible: false,
        }
    }
}
