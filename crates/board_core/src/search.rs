/// Quiet interval before a typed query is sent.
pub const SEARCH_DEBOUNCE_MS: u64 = 300;
/// Shorter queries are never sent.
pub const MIN_QUERY_CHARS: usize = 2;

pub type SearchTicket = u64;

pub fn should_search(query: &str, min_chars: usize) -> bool {
    query.chars().count() >= min_chars
}

/// Orders search replies. Every sent query takes a ticket; a reply is applied
/// only if no newer reply has been applied already, so a slow stale reply
/// cannot overwrite fresher results.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchSequence {
    issued: SearchTicket,
    applied: SearchTicket,
}

impl SearchSequence {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn issue(&mut self) -> SearchTicket {
        self.issued += 1;
        self.issued
    }

    pub fn accept(&mut self, ticket: SearchTicket) -> bool {
        if ticket > self.applied {
            self.applied = ticket;
            true
        } else {
            false
        }
    }

    pub fn issued(&self) -> SearchTicket {
        self.issued
    }

    pub fn applied(&self) -> SearchTicket {
        self.applied
    }
}

#[cfg(test)]
mod tests {
    use super::{should_search, SearchSequence, MIN_QUERY_CHARS};

    #[test]
    fn short_queries_are_not_searched() {
        assert!(!should_search("", MIN_QUERY_CHARS));
        assert!(!should_search("м", MIN_QUERY_CHARS));
        assert!(should_search("ме", MIN_QUERY_CHARS));
    }

    #[test]
    fn stale_ticket_is_rejected_after_newer_applied() {
        let mut seq = SearchSequence::new();
        let first = seq.issue();
        let second = seq.issue();
        assert!(seq.accept(second));
        assert!(!seq.accept(first));
        assert_eq!(seq.applied(), second);
    }

    #[test]
    fn in_order_replies_are_all_applied() {
        let mut seq = SearchSequence::new();
        let first = seq.issue();
        assert!(seq.accept(first));
        let second = seq.issue();
        assert!(seq.accept(second));
        assert_eq!(seq.issued(), 2);
    }
}
