//! The document seam. Handlers never reach for ambient globals; they get a
//! `Document` and address elements by selector.

use std::collections::BTreeMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

use board_core::{Alert, AlertId, FormData};
use scraper::{Html, Selector};

pub trait Document: Send + Sync {
    fn exists(&self, selector: &str) -> bool;
    fn content(&self, selector: &str) -> Option<String>;
    /// Replaces the element's content (text or markup). Returns `false` if the
    /// element is missing.
    fn set_content(&self, selector: &str, content: &str) -> bool;
    /// Inserts markup at the end of the element.
    fn append_html(&self, selector: &str, html: &str) -> bool;
    fn set_class(&self, selector: &str, class: &str) -> bool;
    fn set_visible(&self, selector: &str, visible: bool) -> bool;
    fn set_disabled(&self, selector: &str, disabled: bool) -> bool;
    fn is_disabled(&self, selector: &str) -> Option<bool>;
    /// Disables the element in one step. Returns `false` only when it was
    /// already disabled; a missing element has nothing to hold.
    fn try_disable(&self, selector: &str) -> bool;
    fn attribute(&self, selector: &str, name: &str) -> Option<String>;
    fn set_attribute(&self, selector: &str, name: &str, value: &str) -> bool;
    fn remove(&self, selector: &str) -> bool;
    fn insert_alert(&self, container: &str, alert: &Alert);
    /// Returns `false` if the alert was already gone.
    fn remove_alert(&self, id: AlertId) -> bool;
    fn alert_ids(&self) -> Vec<AlertId>;
    fn form_data(&self, form: &str) -> Option<FormData>;
    /// The raw cookie string, `name=value; name=value`.
    fn cookie(&self) -> String;
    fn navigate(&self, url: &str);
    /// Blocking yes/no question to the user.
    fn confirm(&self, message: &str) -> bool;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    pub content: String,
    pub class: String,
    pub visible: bool,
    pub disabled: bool,
    pub attributes: BTreeMap<String, String>,
}

impl Default for Element {
    fn default() -> Self {
        Self {
            content: String::new(),
            class: String::new(),
            visible: true,
            disabled: false,
            attributes: BTreeMap::new(),
        }
    }
}

impl Element {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            ..Self::default()
        }
    }

    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        self.class = class.into();
        self
    }

    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(name.into(), value.into());
        self
    }

    pub fn hidden(mut self) -> Self {
        self.visible = false;
        self
    }
}

#[derive(Debug, Default)]
struct Page {
    elements: BTreeMap<String, Element>,
    forms: BTreeMap<String, FormData>,
    alerts: Vec<(String, Alert)>,
    cookie: String,
    navigations: Vec<String>,
    confirm_answer: bool,
    confirm_prompts: Vec<String>,
}

/// In-process document used by the headless driver and the tests.
#[derive(Debug, Default)]
pub struct MemoryDocument {
    page: Mutex<Page>,
}

impl MemoryDocument {
    pub fn new() -> Self {
        Self::default()
    }

    fn page(&self) -> MutexGuard<'_, Page> {
        self.page.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn with_element(self, selector: impl Into<String>, element: Element) -> Self {
        self.insert_element(selector, element);
        self
    }

    pub fn with_form(self, selector: impl Into<String>, form: FormData) -> Self {
        self.page().forms.insert(selector.into(), form);
        self
    }

    pub fn with_cookie(self, cookie: impl Into<String>) -> Self {
        self.page().cookie = cookie.into();
        self
    }

    pub fn insert_element(&self, selector: impl Into<String>, element: Element) {
        self.page().elements.insert(selector.into(), element);
    }

    pub fn element(&self, selector: &str) -> Option<Element> {
        self.page().elements.get(selector).cloned()
    }

    pub fn alerts(&self) -> Vec<Alert> {
        self.page()
            .alerts
            .iter()
            .map(|(_, alert)| alert.clone())
            .collect()
    }

    pub fn alerts_in(&self, container: &str) -> Vec<Alert> {
        self.page()
            .alerts
            .iter()
            .filter(|(owner, _)| owner == container)
            .map(|(_, alert)| alert.clone())
            .collect()
    }

    pub fn navigations(&self) -> Vec<String> {
        self.page().navigations.clone()
    }

    pub fn set_confirm_answer(&self, answer: bool) {
        self.page().confirm_answer = answer;
    }

    pub fn confirm_prompts(&self) -> Vec<String> {
        self.page().confirm_prompts.clone()
    }

    fn update(&self, selector: &str, apply: impl FnOnce(&mut Element)) -> bool {
        match self.page().elements.get_mut(selector) {
            Some(element) => {
                apply(element);
                true
            }
            None => false,
        }
    }
}

impl Document for MemoryDocument {
    fn exists(&self, selector: &str) -> bool {
        self.page().elements.contains_key(selector)
    }

    fn content(&self, selector: &str) -> Option<String> {
        self.page()
            .elements
            .get(selector)
            .map(|element| element.content.clone())
    }

    fn set_content(&self, selector: &str, content: &str) -> bool {
        self.update(selector, |element| element.content = content.to_string())
    }

    fn append_html(&self, selector: &str, html: &str) -> bool {
        if !self.update(selector, |element| element.content.push_str(html)) {
            return false;
        }
        let discovered = index_fragment(html);
        let mut page = self.page();
        for (key, element) in discovered {
            page.elements.entry(key).or_insert(element);
        }
        true
    }

    fn set_class(&self, selector: &str, class: &str) -> bool {
        self.update(selector, |element| element.class = class.to_string())
    }

    fn set_visible(&self, selector: &str, visible: bool) -> bool {
        self.update(selector, |element| element.visible = visible)
    }

    fn set_disabled(&self, selector: &str, disabled: bool) -> bool {
        self.update(selector, |element| element.disabled = disabled)
    }

    fn is_disabled(&self, selector: &str) -> Option<bool> {
        self.page()
            .elements
            .get(selector)
            .map(|element| element.disabled)
    }

    fn try_disable(&self, selector: &str) -> bool {
        match self.page().elements.get_mut(selector) {
            Some(element) if element.disabled => false,
            Some(element) => {
                element.disabled = true;
                true
            }
            None => true,
        }
    }

    fn attribute(&self, selector: &str, name: &str) -> Option<String> {
        self.page()
            .elements
            .get(selector)
            .and_then(|element| element.attributes.get(name).cloned())
    }

    fn set_attribute(&self, selector: &str, name: &str, value: &str) -> bool {
        self.update(selector, |element| {
            element
                .attributes
                .insert(name.to_string(), value.to_string());
        })
    }

    fn remove(&self, selector: &str) -> bool {
        self.page().elements.remove(selector).is_some()
    }

    fn insert_alert(&self, container: &str, alert: &Alert) {
        self.page()
            .alerts
            .push((container.to_string(), alert.clone()));
    }

    fn remove_alert(&self, id: AlertId) -> bool {
        let mut page = self.page();
        let before = page.alerts.len();
        page.alerts.retain(|(_, alert)| alert.id != id);
        page.alerts.len() != before
    }

    fn alert_ids(&self) -> Vec<AlertId> {
        self.page().alerts.iter().map(|(_, alert)| alert.id).collect()
    }

    fn form_data(&self, form: &str) -> Option<FormData> {
        self.page().forms.get(form).cloned()
    }

    fn cookie(&self) -> String {
        self.page().cookie.clone()
    }

    fn navigate(&self, url: &str) {
        self.page().navigations.push(url.to_string());
    }

    fn confirm(&self, message: &str) -> bool {
        let mut page = self.page();
        page.confirm_prompts.push(message.to_string());
        page.confirm_answer
    }
}

/// Elements inside appended markup become addressable by `#id` and by each of
/// their `.class` names; the first element wins a shared class.
fn index_fragment(html: &str) -> Vec<(String, Element)> {
    let Ok(any) = Selector::parse("*") else {
        return Vec::new();
    };
    let fragment = Html::parse_fragment(html);
    let mut found = Vec::new();
    for node in fragment.select(&any) {
        let value = node.value();
        if matches!(value.name(), "html" | "head" | "body") {
            continue;
        }
        let element = Element {
            content: node.inner_html(),
            class: value.attr("class").unwrap_or_default().to_string(),
            visible: true,
            disabled: value.attr("disabled").is_some(),
            attributes: value
                .attrs()
                .map(|(name, val)| (name.to_string(), val.to_string()))
                .collect(),
        };
        if let Some(id) = value.id() {
            found.push((format!("#{id}"), element.clone()));
        }
        for class in value.classes() {
            if !found.iter().any(|(key, _)| key == &format!(".{class}")) {
                found.push((format!(".{class}"), element.clone()));
            }
        }
    }
    found
}

#[cfg(test)]
mod tests {
    use super::{Document, Element, MemoryDocument};

    #[test]
    fn appended_fragment_exposes_next_trigger() {
        let doc = MemoryDocument::new().with_element("#posts", Element::new("<li>1</li>"));
        let fragment = r##"<li id="post-2">2</li><button class="btn load-more-btn" data-url="/?page=3" data-container="#posts">More</button>"##;

        assert!(doc.append_html("#posts", fragment));

        assert!(doc.content("#posts").unwrap().ends_with(fragment));
        assert!(doc.exists("#post-2"));
        assert_eq!(
            doc.attribute(".load-more-btn", "data-url").as_deref(),
            Some("/?page=3")
        );
        assert_eq!(doc.content(".load-more-btn").as_deref(), Some("More"));
    }

    #[test]
    fn indexing_does_not_replace_existing_elements() {
        let doc = MemoryDocument::new()
            .with_element("#posts", Element::new(""))
            .with_element(".badge", Element::new("old"));
        doc.append_html("#posts", r#"<span class="badge">new</span>"#);
        assert_eq!(doc.content(".badge").as_deref(), Some("old"));
    }

    #[test]
    fn append_to_missing_container_fails() {
        let doc = MemoryDocument::new();
        assert!(!doc.append_html("#nowhere", "<p>x</p>"));
        assert!(!doc.exists("p"));
    }

    #[test]
    fn disabled_element_cannot_be_disabled_again() {
        let doc = MemoryDocument::new().with_element("#send", Element::new("Отправить"));
        assert!(doc.try_disable("#send"));
        assert!(!doc.try_disable("#send"));
        assert_eq!(doc.is_disabled("#send"), Some(true));
        assert!(doc.try_disable("#missing"));
    }

    #[test]
    fn confirm_records_prompt() {
        let doc = MemoryDocument::new();
        doc.set_confirm_answer(true);
        assert!(doc.confirm("Удалить?"));
        assert_eq!(doc.confirm_prompts(), vec!["Удалить?".to_string()]);
    }
}
