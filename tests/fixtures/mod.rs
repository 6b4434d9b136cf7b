//! Shared setup for contact form integration tests.

use contact_handoff::{Config, ContactForm, ContactRequest, Field, ManualScheduler, MemoryDocument};
use std::sync::Arc;

pub struct Harness {
    pub page: Arc<MemoryDocument>,
    pub clock: Arc<ManualScheduler>,
    pub form: ContactForm,
}

/// A contact page with default ids, a manual clock and a bound form.
#[allow(dead_code)]
pub fn setup() -> Harness {
    setup_with(&Config::default())
}

#[allow(dead_code)]
pub fn setup_with(config: &Config) -> Harness {
    let page = Arc::new(MemoryDocument::contact_page_with(&config.elements));
    let clock = Arc::new(ManualScheduler::new());
    let form = ContactForm::init(page.clone(), clock.clone(), config)
        .expect("contact page fixture should satisfy the form contract");
    Harness { page, clock, form }
}

/// Type every field of `request` into the page.
#[allow(dead_code)]
pub fn fill(page: &MemoryDocument, request: &ContactRequest) {
    for field in Field::ALL {
        page.fill(field, request.value(field));
    }
}

/// Decode the `text` parameter of a hand-off link.
#[allow(dead_code)]
pub fn decoded_text(uri: &str) -> String {
    let (_, encoded) = uri
        .split_once("?text=")
        .expect("hand-off link has a text parameter");
    urlencoding::decode(encoded)
        .expect("hand-off text is valid UTF-8")
        .into_owned()
}
