use serde::Deserialize;

/// JSON body returned by every state-changing endpoint. Fields the endpoint
/// does not send stay `None`; a missing `success` counts as failure.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(default)]
pub struct ActionReply {
    pub success: bool,
    pub message: Option<String>,
    pub error: Option<String>,
    pub redirect: Option<String>,
    pub status: Option<String>,
    pub status_display: Option<String>,
    pub unread_count: Option<i64>,
}

/// Body of the unread-count query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct CountReply {
    pub count: i64,
    #[serde(default)]
    pub has_unread: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::{ActionReply, CountReply};

    #[test]
    fn missing_success_flag_is_failure() {
        let reply: ActionReply = serde_json::from_str(r#"{"message":"hi"}"#).unwrap();
        assert!(!reply.success);
        assert_eq!(reply.message.as_deref(), Some("hi"));
    }

    #[test]
    fn count_reply_tolerates_missing_has_unread() {
        let reply: CountReply = serde_json::from_str(r#"{"count":3}"#).unwrap();
        assert_eq!(reply.count, 3);
        assert_eq!(reply.has_unread, None);
    }

    #[test]
    fn count_reply_requires_count() {
        assert!(serde_json::from_str::<CountReply>(r#"{"has_unread":true}"#).is_err());
    }
}
