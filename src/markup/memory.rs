//! In-memory page for headless use and tests.

use super::{Markup, NewElement};
use crate::config::FormElements;
use crate::error::{MarkupError, MarkupResult};
use crate::form::Field;
use std::collections::{BTreeSet, HashMap};
use std::sync::{Mutex, MutexGuard, PoisonError};

/// Snapshot of one element in a [`MemoryDocument`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ElementState {
    pub value: String,
    pub text: String,
    pub classes: BTreeSet<String>,
    pub disabled: bool,
    pub parent: Option<String>,
}

#[derive(Debug, Default)]
struct DocumentState {
    /// Ids in document order
    order: Vec<String>,
    elements: HashMap<String, ElementState>,
    focused: Option<String>,
    opened: Vec<String>,
}

impl DocumentState {
    fn element_mut(&mut self, id: &str) -> MarkupResult<&mut ElementState> {
        self.elements
            .get_mut(id)
            .ok_or_else(|| MarkupError::MissingElement(id.to_string()))
    }

    fn element(&self, id: &str) -> MarkupResult<&ElementState> {
        self.elements
            .get(id)
            .ok_or_else(|| MarkupError::MissingElement(id.to_string()))
    }

    fn insert(&mut self, id: &str, element: ElementState) {
        if self.elements.insert(id.to_string(), element).is_none() {
            self.order.push(id.to_string());
        }
    }
}

/// A flat, thread-safe element store implementing [`Markup`].
///
/// Elements live in insertion order, which stands in for document order.
/// Links opened through [`Markup::open_in_new_context`] are recorded rather
/// than followed.
#[derive(Debug, Default)]
pub struct MemoryDocument {
    state: Mutex<DocumentState>,
}

impl MemoryDocument {
    /// An empty page.
    pub fn new() -> Self {
        Self::default()
    }

    /// A page with every element the contact form expects, using default ids.
    pub fn contact_page() -> Self {
        Self::contact_page_with(&FormElements::default())
    }

    /// A page with every element the contact form expects.
    ///
    /// Inputs carry the `form-control` class and the submit button reads
    /// "Send Message".
    pub fn contact_page_with(elements: &FormElements) -> Self {
        let doc = Self::new().with_element(&elements.form);

        for field in Field::ALL {
            doc.insert_child(&elements.form, field.input_id(), "form-control");
            if let Some(error_id) = field.error_id() {
                doc.insert_child(&elements.form, error_id, "error-message");
            }
        }
        doc.insert_child(&elements.form, &elements.submit_button, "btn");
        let _ = doc.set_text(&elements.submit_button, "Send Message");

        doc
    }

    /// Builder: add an empty top-level element.
    pub fn with_element(self, id: &str) -> Self {
        self.lock().insert(id, ElementState::default());
        self
    }

    /// Type a value into a field, replacing what was there.
    pub fn fill(&self, field: Field, value: &str) {
        let _ = self.set_value(field.input_id(), value);
    }

    /// Snapshot of an element, if present.
    pub fn element(&self, id: &str) -> Option<ElementState> {
        self.lock().elements.get(id).cloned()
    }

    /// Id of the element holding focus.
    pub fn focused(&self) -> Option<String> {
        self.lock().focused.clone()
    }

    /// Every link opened so far, oldest first.
    pub fn opened_links(&self) -> Vec<String> {
        self.lock().opened.clone()
    }

    fn insert_child(&self, parent: &str, id: &str, class: &str) {
        let mut classes = BTreeSet::new();
        classes.insert(class.to_string());
        self.lock().insert(
            id,
            ElementState {
                classes,
                parent: Some(parent.to_string()),
                ..Default::default()
            },
        );
    }

    fn lock(&self) -> MutexGuard<'_, DocumentState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Markup for MemoryDocument {
    fn contains(&self, id: &str) -> bool {
        self.lock().elements.contains_key(id)
    }

    fn find_by_class(&self, class: &str) -> Vec<String> {
        let state = self.lock();
        state
            .order
            .iter()
            .filter(|id| {
                state
                    .elements
                    .get(id.as_str())
                    .is_some_and(|el| el.classes.contains(class))
            })
            .cloned()
            .collect()
    }

    fn value(&self, id: &str) -> MarkupResult<String> {
        Ok(self.lock().element(id)?.value.clone())
    }

    fn set_value(&self, id: &str, value: &str) -> MarkupResult<()> {
        self.lock().element_mut(id)?.value = value.to_string();
        Ok(())
    }

    fn text(&self, id: &str) -> MarkupResult<String> {
        Ok(self.lock().element(id)?.text.clone())
    }

    fn set_text(&self, id: &str, text: &str) -> MarkupResult<()> {
        self.lock().element_mut(id)?.text = text.to_string();
        Ok(())
    }

    fn has_class(&self, id: &str, class: &str) -> MarkupResult<bool> {
        Ok(self.lock().element(id)?.classes.contains(class))
    }

    fn add_class(&self, id: &str, class: &str) -> MarkupResult<()> {
        self.lock().element_mut(id)?.classes.insert(class.to_string());
        Ok(())
    }

    fn remove_class(&self, id: &str, class: &str) -> MarkupResult<()> {
        self.lock().element_mut(id)?.classes.remove(class);
        Ok(())
    }

    fn focus(&self, id: &str) -> MarkupResult<()> {
        let mut state = self.lock();
        state.element(id)?;
        state.focused = Some(id.to_string());
        Ok(())
    }

    fn set_disabled(&self, id: &str, disabled: bool) -> MarkupResult<()> {
        self.lock().element_mut(id)?.disabled = disabled;
        Ok(())
    }

    fn append_element(&self, parent: &str, element: NewElement) -> MarkupResult<()> {
        let NewElement { id, class, text } = element;
        let mut state = self.lock();
        state.element(parent)?;

        let classes = class.split_whitespace().map(str::to_string).collect();

        // Re-inserting an existing id moves it to the end, as appendChild does
        state.order.retain(|existing| existing != &id);
        state.elements.remove(&id);
        state.insert(
            &id,
            ElementState {
                text,
                classes,
                parent: Some(parent.to_string()),
                ..Default::default()
            },
        );
        Ok(())
    }

    fn remove_element(&self, id: &str) -> MarkupResult<()> {
        let mut state = self.lock();
        state.element(id)?;

        let mut doomed = vec![id.to_string()];
        let mut cursor = 0;
        while cursor < doomed.len() {
            let current = doomed[cursor].clone();
            for (child, el) in &state.elements {
                if el.parent.as_deref() == Some(current.as_str()) && !doomed.contains(child) {
                    doomed.push(child.clone());
                }
            }
            cursor += 1;
        }

        for gone in &doomed {
            state.elements.remove(gone);
            if state.focused.as_deref() == Some(gone.as_str()) {
                state.focused = None;
            }
        }
        state.order.retain(|existing| !doomed.contains(existing));
        Ok(())
    }

    fn open_in_new_context(&self, uri: &str) -> MarkupResult<()> {
        self.lock().opened.push(uri.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contact_page_has_form_contract() {
        let doc = MemoryDocument::contact_page();
        for id in [
            "contactForm",
            "name",
            "email",
            "phone",
            "message",
            "nameError",
            "emailError",
            "phoneError",
            "contactSubmit",
        ] {
            assert!(doc.contains(id), "missing #{}", id);
        }
        assert!(!doc.contains("messageError"));
        assert_eq!(doc.text("contactSubmit").unwrap(), "Send Message");
    }

    #[test]
    fn test_missing_element_errors() {
        let doc = MemoryDocument::new();
        assert_eq!(
            doc.value("name"),
            Err(MarkupError::MissingElement("name".to_string()))
        );
        assert!(doc.focus("name").is_err());
        assert!(doc.focused().is_none());
    }

    #[test]
    fn test_classes_and_find_by_class_in_document_order() {
        let doc = MemoryDocument::contact_page();
        doc.add_class("phone", "error").unwrap();
        doc.add_class("name", "error").unwrap();

        assert_eq!(doc.find_by_class("error"), vec!["name", "phone"]);
        assert!(doc.has_class("name", "form-control").unwrap());

        doc.remove_class("name", "error").unwrap();
        assert_eq!(doc.find_by_class("error"), vec!["phone"]);
    }

    #[test]
    fn test_append_and_remove_element() {
        let doc = MemoryDocument::contact_page();
        doc.append_element(
            "contactForm",
            NewElement {
                id: "notice".to_string(),
                class: "success-message fade".to_string(),
                text: "Done".to_string(),
            },
        )
        .unwrap();

        let notice = doc.element("notice").unwrap();
        assert_eq!(notice.parent.as_deref(), Some("contactForm"));
        assert!(notice.classes.contains("fade"));

        doc.remove_element("notice").unwrap();
        assert!(!doc.contains("notice"));
        assert!(doc.remove_element("notice").is_err());
    }

    #[test]
    fn test_remove_element_removes_children() {
        let doc = MemoryDocument::contact_page();
        doc.focus("email").unwrap();

        doc.remove_element("contactForm").unwrap();
        assert!(!doc.contains("email"));
        assert!(doc.find_by_class("form-control").is_empty());
        assert!(doc.focused().is_none());
    }

    #[test]
    fn test_open_in_new_context_is_recorded() {
        let doc = MemoryDocument::new();
        doc.open_in_new_context("https://wa.me/?text=hi").unwrap();
        assert_eq!(doc.opened_links(), vec!["https://wa.me/?text=hi"]);
    }
}
