//! Access to the page markup.
//!
//! The form controller never touches a rendering environment directly; it
//! goes through the [`Markup`] trait, which a browser binding or the
//! in-memory [`MemoryDocument`] implements.

mod memory;

pub use memory::{ElementState, MemoryDocument};

use crate::error::MarkupResult;

/// An element to be inserted into the page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewElement {
    pub id: String,
    pub class: String,
    pub text: String,
}

/// Element-level operations the contact form needs from a page.
///
/// Elements are addressed by id. Every call on an id that is not present
/// fails with [`crate::error::MarkupError::MissingElement`].
pub trait Markup: Send + Sync {
    /// Whether an element with this id exists.
    fn contains(&self, id: &str) -> bool;

    /// Ids of all elements carrying `class`, in document order.
    fn find_by_class(&self, class: &str) -> Vec<String>;

    /// Current value of an input.
    fn value(&self, id: &str) -> MarkupResult<String>;

    fn set_value(&self, id: &str, value: &str) -> MarkupResult<()>;

    /// Text content of an element.
    fn text(&self, id: &str) -> MarkupResult<String>;

    fn set_text(&self, id: &str, text: &str) -> MarkupResult<()>;

    fn has_class(&self, id: &str, class: &str) -> MarkupResult<bool>;

    fn add_class(&self, id: &str, class: &str) -> MarkupResult<()>;

    fn remove_class(&self, id: &str, class: &str) -> MarkupResult<()>;

    /// Move keyboard focus to an element.
    fn focus(&self, id: &str) -> MarkupResult<()>;

    fn set_disabled(&self, id: &str, disabled: bool) -> MarkupResult<()>;

    /// Append a new element as the last child of `parent`.
    fn append_element(&self, parent: &str, element: NewElement) -> MarkupResult<()>;

    /// Remove an element and everything inside it.
    fn remove_element(&self, id: &str) -> MarkupResult<()>;

    /// Open a link in a new browsing context (tab or window).
    fn open_in_new_context(&self, uri: &str) -> MarkupResult<()>;
}
