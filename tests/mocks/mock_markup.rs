use contact_handoff::error::{MarkupError, MarkupResult};
use contact_handoff::{Markup, MemoryDocument, NewElement};
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

/// Markup mock backed by a real in-memory page.
///
/// Tracks how often each operation is called and can be told to refuse
/// opening links, the way a popup blocker would.
#[allow(dead_code)]
#[derive(Clone)]
pub struct MockMarkup {
    page: Arc<MemoryDocument>,
    call_counts: Arc<Mutex<HashMap<String, usize>>>,
    block_popups: Arc<AtomicBool>,
}

#[allow(dead_code)]
impl MockMarkup {
    pub fn new() -> Self {
        Self {
            page: Arc::new(MemoryDocument::contact_page()),
            call_counts: Arc::new(Mutex::new(HashMap::new())),
            block_popups: Arc::new(AtomicBool::new(false)),
        }
    }

    pub fn page(&self) -> &MemoryDocument {
        &self.page
    }

    pub fn block_popups(&self, blocked: bool) {
        self.block_popups.store(blocked, Ordering::SeqCst);
    }

    pub fn get_call_count(&self, method: &str) -> usize {
        let counts = self.call_counts.lock().unwrap();
        *counts.get(method).unwrap_or(&0)
    }

    pub fn reset_call_counts(&self) {
        let mut counts = self.call_counts.lock().unwrap();
        counts.clear();
    }

    fn track_call(&self, method: &str) {
        let mut counts = self.call_counts.lock().unwrap();
        *counts.entry(method.to_string()).or_insert(0) += 1;
    }
}

impl Default for MockMarkup {
    fn default() -> Self {
        Self::new()
    }
}

impl Markup for MockMarkup {
    fn contains(&self, id: &str) -> bool {
        self.track_call("contains");
        self.page.contains(id)
    }

    fn find_by_class(&self, class: &str) -> Vec<String> {
        self.track_call("find_by_class");
        self.page.find_by_class(class)
    }

    fn value(&self, id: &str) -> MarkupResult<String> {
        self.track_call("value");
        self.page.value(id)
    }

    fn set_value(&self, id: &str, value: &str) -> MarkupResult<()> {
        self.track_call("set_value");
        self.page.set_value(id, value)
    }

    fn text(&self, id: &str) -> MarkupResult<String> {
        self.track_call("text");
        self.page.text(id)
    }

    fn set_text(&self, id: &str, text: &str) -> MarkupResult<()> {
        self.track_call("set_text");
        self.page.set_text(id, text)
    }

    fn has_class(&self, id: &str, class: &str) -> MarkupResult<bool> {
        self.track_call("has_class");
        self.page.has_class(id, class)
    }

    fn add_class(&self, id: &str, class: &str) -> MarkupResult<()> {
        self.track_call("add_class");
        self.page.add_class(id, class)
    }

    fn remove_class(&self, id: &str, class: &str) -> MarkupResult<()> {
        self.track_call("remove_class");
        self.page.remove_class(id, class)
    }

    fn focus(&self, id: &str) -> MarkupResult<()> {
        self.track_call("focus");
        self.page.focus(id)
    }

    fn set_disabled(&self, id: &str, disabled: bool) -> MarkupResult<()> {
        self.track_call("set_disabled");
        self.page.set_disabled(id, disabled)
    }

    fn append_element(&self, parent: &str, element: NewElement) -> MarkupResult<()> {
        self.track_call("append_element");
        self.page.append_element(parent, element)
    }

    fn remove_element(&self, id: &str) -> MarkupResult<()> {
        self.track_call("remove_element");
        self.page.remove_element(id)
    }

    fn open_in_new_context(&self, uri: &str) -> MarkupResult<()> {
        self.track_call("open_in_new_context");
        if self.block_popups.load(Ordering::SeqCst) {
            return Err(MarkupError::Refused("popup blocked".to_string()));
        }
        self.page.open_in_new_context(uri)
    }
}
