use std::sync::Arc;

use board_core::loading_markup;

use crate::Document;

/// Holds a control in its busy state: disabled, with a spinner label.
/// Dropping the guard restores the original label and re-enables the control,
/// so every exit path of the owning handler restores it exactly once. A control
/// that is already busy cannot be acquired a second time.
pub struct ControlGuard {
    doc: Arc<dyn Document>,
    selector: String,
    original: Option<String>,
    armed: bool,
}

impl ControlGuard {
    /// Returns `None` while an earlier guard still holds the control.
    pub fn acquire(doc: Arc<dyn Document>, selector: &str, busy_label: &str) -> Option<Self> {
        if !doc.try_disable(selector) {
            return None;
        }
        let original = doc.content(selector);
        doc.set_content(selector, &loading_markup(busy_label));
        Some(Self {
            doc,
            selector: selector.to_string(),
            original,
            armed: true,
        })
    }

    /// The handler removed the control itself; there is nothing to restore.
    pub fn forget_removed(mut self) {
        self.armed = false;
    }
}

impl Drop for ControlGuard {
    fn drop(&mut self) {
        if !self.armed {
            return;
        }
        self.armed = false;
        if let Some(original) = self.original.take() {
            self.doc.set_content(&self.selector, &original);
        }
        self.doc.set_disabled(&self.selector, false);
    }
}
