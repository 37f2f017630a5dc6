use std::sync::Arc;

use board_core::{AlertId, Outcome, PageEvent, ResponseStatus, SelectedFile, Severity};
use board_logging::{board_debug, board_info};

use crate::preview::preview_image;
use crate::{
    ActionDispatcher, AlertPresenter, BadgePoller, BadgeRefresher, BoardSettings, DebouncedSearch,
    Document, ListLoader, Transport,
};

/// Asks before a destructive action. `None` uses the catalog prompt.
pub fn confirm_delete(doc: &dyn Document, message: Option<&str>, fallback: &str) -> bool {
    doc.confirm(message.unwrap_or(fallback))
}

/// The page's public surface. Built once per page by [`Board::attach`]; every
/// collaborator is injected, nothing is read from globals.
pub struct Board {
    doc: Arc<dyn Document>,
    settings: Arc<BoardSettings>,
    alerts: AlertPresenter,
    badge: BadgeRefresher,
    dispatcher: ActionDispatcher,
    loader: ListLoader,
    poller: BadgePoller,
    search: Option<DebouncedSearch>,
}

impl Board {
    /// Page-load initialization: server-rendered alerts get the same lifetime
    /// as client ones, the unread badge starts polling, and search is wired
    /// when the page has a search box. Requires a tokio runtime.
    pub fn attach(
        doc: Arc<dyn Document>,
        transport: Arc<dyn Transport>,
        settings: BoardSettings,
    ) -> Self {
        let settings = Arc::new(settings);
        let selectors = &settings.selectors;

        let alerts = AlertPresenter::new(
            doc.clone(),
            selectors.alert_container.clone(),
            selectors.alert_fallback.clone(),
            settings.alert_lifetime(),
        );
        let rendered = doc.alert_ids();
        alerts.reserve_ids_above(&rendered);
        for id in rendered {
            alerts.expire_later(id);
        }

        let badge = BadgeRefresher::new(
            doc.clone(),
            transport.clone(),
            selectors.notification_badge.clone(),
        );
        let mut poller = BadgePoller::new(badge.clone(), settings.poll_interval());
        poller.start();

        let search = doc
            .exists(&selectors.search_input)
            .then(|| DebouncedSearch::new(doc.clone(), transport.clone(), &settings));

        let dispatcher = ActionDispatcher::new(
            doc.clone(),
            transport.clone(),
            alerts.clone(),
            badge.clone(),
            settings.clone(),
        );
        let loader = ListLoader::new(doc.clone(), transport, alerts.clone(), settings.clone());

        board_info!(
            "board attached to {} (search {})",
            settings.base_url,
            if search.is_some() { "on" } else { "off" }
        );

        Self {
            doc,
            settings,
            alerts,
            badge,
            dispatcher,
            loader,
            poller,
            search,
        }
    }

    pub fn settings(&self) -> &BoardSettings {
        &self.settings
    }

    pub fn poller_mut(&mut self) -> &mut BadgePoller {
        &mut self.poller
    }

    pub fn show_alert(&self, severity: Severity, message: impl Into<String>) -> AlertId {
        self.alerts.show(severity, message)
    }

    pub fn dismiss_alert(&self, id: AlertId) -> bool {
        self.alerts.dismiss(id)
    }

    pub async fn update_notification_count(&self) -> Option<i64> {
        self.badge.refresh().await
    }

    pub async fn mark_notification_read(&self, notification_id: u64) -> Outcome {
        self.dispatcher.mark_notification_read(notification_id).await
    }

    pub async fn mark_all_notifications_read(&self) -> Outcome {
        self.dispatcher.mark_all_notifications_read().await
    }

    pub async fn toggle_post_status(&self, post_id: u64) -> Outcome {
        self.dispatcher.toggle_post_status(post_id).await
    }

    pub async fn toggle_response_status(&self, response_id: u64, status: ResponseStatus) -> Outcome {
        self.dispatcher
            .toggle_response_status(response_id, status)
            .await
    }

    pub async fn submit_form(&self, form: &str) -> Outcome {
        self.dispatcher.submit_form(form).await
    }

    pub async fn load_more(&self, trigger: &str) -> Outcome {
        self.loader.load_more(trigger).await
    }

    /// Returns whether a query was scheduled.
    pub fn search_input(&self, query: &str) -> bool {
        match &self.search {
            Some(search) => search.input(query),
            None => false,
        }
    }

    pub fn preview_image(&self, file: Option<&SelectedFile>) -> bool {
        preview_image(
            self.doc.as_ref(),
            &self.settings.selectors.image_preview,
            file,
        )
    }

    pub fn confirm_delete(&self, message: Option<&str>) -> bool {
        confirm_delete(
            self.doc.as_ref(),
            message,
            &self.settings.messages.confirm_delete,
        )
    }

    /// Routes one page event. Actions report their outcome; everything else
    /// returns `None`.
    pub async fn handle(&self, event: PageEvent) -> Option<Outcome> {
        board_debug!("page event {:?}", event);
        match event {
            PageEvent::SearchInput(query) => {
                self.search_input(&query);
                None
            }
            PageEvent::FormSubmitted { form } => Some(self.submit_form(&form).await),
            PageEvent::LoadMoreClicked { trigger } => Some(self.load_more(&trigger).await),
            PageEvent::AlertDismissed(id) => {
                self.dismiss_alert(id);
                None
            }
            PageEvent::ImageSelected(file) => {
                self.preview_image(file.as_ref());
                None
            }
            PageEvent::TogglePost { post_id } => Some(self.toggle_post_status(post_id).await),
            PageEvent::ToggleResponse {
                response_id,
                status,
            } => Some(self.toggle_response_status(response_id, status).await),
            PageEvent::MarkRead { notification_id } => {
                Some(self.mark_notification_read(notification_id).await)
            }
            PageEvent::MarkAllRead => Some(self.mark_all_notifications_read().await),
            PageEvent::RefreshCount => {
                self.update_notification_count().await;
                None
            }
            PageEvent::NoOp => None,
        }
    }
}
