use board_engine::{BoardSettings, Element, MemoryDocument};

use crate::config::ClientConfig;

const DEFAULT_SUBMIT_LABEL: &str = "Submit";
const DEFAULT_MORE_LABEL: &str = "Load more";

/// The page the client drives: every region the handlers touch, plus the
/// forms and lists named in the config.
pub fn seeded_document(config: &ClientConfig) -> MemoryDocument {
    let selectors = &config.board.selectors;
    let mut doc = MemoryDocument::new()
        .with_cookie(config.cookie.clone())
        .with_element(selectors.alert_fallback.clone(), Element::new(""))
        .with_element(selectors.alert_container.clone(), Element::new(""))
        .with_element(selectors.notification_badge.clone(), Element::new("").hidden())
        .with_element(selectors.search_input.clone(), Element::new(""))
        .with_element(selectors.search_results.clone(), Element::new(""))
        .with_element(selectors.image_preview.clone(), Element::new("").hidden());

    for form in &config.forms {
        doc = doc
            .with_form(form.selector.clone(), form.form_data())
            .with_element(submit_selector(&form.selector), Element::new(DEFAULT_SUBMIT_LABEL));
    }
    for list in &config.lists {
        doc = doc
            .with_element(list.container.clone(), Element::new(""))
            .with_element(
                list.trigger.clone(),
                Element::new(DEFAULT_MORE_LABEL)
                    .with_attribute("data-url", list.url.clone())
                    .with_attribute("data-container", list.container.clone()),
            );
    }
    doc
}

fn submit_selector(form: &str) -> String {
    format!("{form} button[type=\"submit\"]")
}

/// One line per alert on the page, for the `alerts` command.
pub fn describe_alerts(doc: &MemoryDocument, settings: &BoardSettings) -> Vec<String> {
    let selectors = &settings.selectors;
    [&selectors.alert_container, &selectors.alert_fallback]
        .into_iter()
        .flat_map(|container| doc.alerts_in(container))
        .map(|alert| format!("#{} [{}] {}", alert.id, alert.severity, alert.message))
        .collect()
}
