use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use board_core::{endpoints, should_search, PendingAction, SearchSequence};
use board_logging::{board_debug, board_error};
use tokio::task::JoinHandle;

use crate::{BoardSettings, Document, Transport};

struct SearchRunner {
    doc: Arc<dyn Document>,
    transport: Arc<dyn Transport>,
    results: String,
    sequence: Mutex<SearchSequence>,
}

impl SearchRunner {
    fn sequence(&self) -> MutexGuard<'_, SearchSequence> {
        self.sequence.lock().unwrap_or_else(PoisonError::into_inner)
    }

    async fn perform(&self, query: String) {
        let ticket = self.sequence().issue();
        let request = PendingAction::get_html(endpoints::search(&query));
        match self.transport.send(&request).await {
            Ok(reply) => {
                if !self.sequence().accept(ticket) {
                    board_debug!("discarding stale results for {:?}", query);
                    return;
                }
                if !self.doc.set_content(&self.results, &reply.body) {
                    board_debug!("results region {} not on page", self.results);
                }
            }
            Err(err) => board_error!("Error performing search: {}", err),
        }
    }
}

/// Search-as-you-type. At most one query waits for the quiet interval at a
/// time; once sent, a query is never cancelled.
pub struct DebouncedSearch {
    runner: Arc<SearchRunner>,
    delay: Duration,
    min_chars: usize,
    pending: Mutex<Option<JoinHandle<()>>>,
}

impl DebouncedSearch {
    pub fn new(
        doc: Arc<dyn Document>,
        transport: Arc<dyn Transport>,
        settings: &BoardSettings,
    ) -> Self {
        Self {
            runner: Arc::new(SearchRunner {
                doc,
                transport,
                results: settings.selectors.search_results.clone(),
                sequence: Mutex::new(SearchSequence::new()),
            }),
            delay: settings.debounce(),
            min_chars: settings.min_query_chars,
            pending: Mutex::new(None),
        }
    }

    fn pending(&self) -> MutexGuard<'_, Option<JoinHandle<()>>> {
        self.pending.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Replaces any waiting query with `query`. Returns whether a query was
    /// scheduled; too-short input only cancels.
    pub fn input(&self, query: &str) -> bool {
        self.reset();
        if !should_search(query, self.min_chars) {
            return false;
        }
        let runner = self.runner.clone();
        let query = query.to_string();
        let delay = self.delay;
        let timer = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            // Detached so a later reset cannot cancel the request itself.
            tokio::spawn(async move { runner.perform(query).await });
        });
        *self.pending() = Some(timer);
        true
    }

    /// Drops the waiting query, if any.
    pub fn reset(&self) {
        if let Some(timer) = self.pending().take() {
            timer.abort();
        }
    }

    pub fn is_pending(&self) -> bool {
        self.pending()
            .as_ref()
            .is_some_and(|timer| !timer.is_finished())
    }
}

impl Drop for DebouncedSearch {
    fn drop(&mut self) {
        self.reset();
    }
}
