#![allow(dead_code)]

use std::sync::{Arc, Mutex, Once};
use std::time::Duration;

use board_core::{FormData, PendingAction};
use board_engine::{
    BoardSettings, Document, Element, FailureKind, MemoryDocument, Reply, RequestError, Transport,
};

pub fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(board_logging::initialize_for_tests);
}

#[derive(Clone)]
struct Route {
    path: String,
    delay: Duration,
    result: Result<Reply, RequestError>,
}

/// Transport double: answers by exact path and records every request.
#[derive(Default)]
pub struct ScriptedTransport {
    requests: Mutex<Vec<PendingAction>>,
    routes: Mutex<Vec<Route>>,
}

impl ScriptedTransport {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn respond(&self, path: &str, status: u16, body: &str) {
        self.respond_after(path, Duration::ZERO, status, body);
    }

    pub fn respond_after(&self, path: &str, delay: Duration, status: u16, body: &str) {
        self.routes.lock().unwrap().push(Route {
            path: path.to_string(),
            delay,
            result: Ok(Reply::new(status, body)),
        });
    }

    pub fn fail(&self, path: &str, kind: FailureKind) {
        self.routes.lock().unwrap().push(Route {
            path: path.to_string(),
            delay: Duration::ZERO,
            result: Err(RequestError::new(kind, "scripted failure")),
        });
    }

    pub fn requests(&self) -> Vec<PendingAction> {
        self.requests.lock().unwrap().clone()
    }

    pub fn paths(&self) -> Vec<String> {
        self.requests()
            .into_iter()
            .map(|request| request.path)
            .collect()
    }

    pub fn count_to(&self, path: &str) -> usize {
        self.paths().iter().filter(|sent| sent.as_str() == path).count()
    }
}

#[async_trait::async_trait]
impl Transport for ScriptedTransport {
    async fn send(&self, request: &PendingAction) -> Result<Reply, RequestError> {
        self.requests.lock().unwrap().push(request.clone());
        let route = self
            .routes
            .lock()
            .unwrap()
            .iter()
            .rev()
            .find(|route| route.path == request.path)
            .cloned();
        match route {
            Some(route) => {
                if !route.delay.is_zero() {
                    tokio::time::sleep(route.delay).await;
                }
                route.result
            }
            None => Err(RequestError::new(FailureKind::Network, "connection refused")),
        }
    }
}

pub const BADGE: &str = ".notification-badge";
pub const ALERTS: &str = ".alert-container";
pub const RESULTS: &str = "#search-results";
pub const SEARCH: &str = "#search-input";
pub const FORM: &str = "#post-form";
pub const SUBMIT: &str = "#post-form button[type=\"submit\"]";
pub const MORE: &str = ".load-more-btn";

/// A page with every region the handlers touch.
pub fn full_page() -> Arc<MemoryDocument> {
    Arc::new(
        MemoryDocument::new()
            .with_cookie("sessionid=s1; csrftoken=tok%3D1")
            .with_element(ALERTS, Element::new(""))
            .with_element(BADGE, Element::new("").hidden())
            .with_element(SEARCH, Element::new(""))
            .with_element(RESULTS, Element::new(""))
            .with_element(
                "[data-post-id=\"7\"] .status-badge",
                Element::new("Активно").with_class("badge bg-success"),
            )
            .with_element(SUBMIT, Element::new("Опубликовать"))
            .with_form(
                FORM,
                FormData::new("/post/create/")
                    .with_text("title", "Ищу хила")
                    .with_text("category", "healers"),
            )
            .with_element("#posts", Element::new("<li>1</li>"))
            .with_element(
                MORE,
                Element::new("Загрузить еще")
                    .with_attribute("data-url", "/posts/?page=2")
                    .with_attribute("data-container", "#posts"),
            ),
    )
}

pub fn settings() -> BoardSettings {
    BoardSettings::default()
}

pub fn as_document(doc: &Arc<MemoryDocument>) -> Arc<dyn Document> {
    doc.clone()
}
