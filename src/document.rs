//! Document access needed by the theme controller.
//!
//! DESIGN
//! ======
//! The controller only ever touches the root element's theme attribute and
//! a handful of elements looked up by id. Narrowing the DOM to this trait
//! keeps the controller testable natively; `web::WebDocument` is the
//! browser implementation.

use std::cell::RefCell;
use std::collections::HashMap;

use crate::error::ThemeError;

#[cfg(test)]
#[path = "document_test.rs"]
mod document_test;

pub trait ThemeDocument {
    /// Value of `name` on the root (`<html>`) element.
    fn root_attribute(&self, name: &str) -> Option<String>;

    /// Set `name` on the root element.
    fn set_root_attribute(&self, name: &str, value: &str) -> Result<(), ThemeError>;

    /// Whether an element with `id` exists.
    fn has_element(&self, id: &str) -> bool;

    /// Replace the text content of element `id`. Returns `Ok(false)` when
    /// the element does not exist.
    fn set_element_text(&self, id: &str, text: &str) -> Result<bool, ThemeError>;

    /// Set attribute `name` on element `id`. Returns `Ok(false)` when the
    /// element does not exist.
    fn set_element_attribute(&self, id: &str, name: &str, value: &str) -> Result<bool, ThemeError>;

    /// Whether the host reports `prefers-color-scheme: dark`.
    fn prefers_dark(&self) -> bool {
        false
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
struct MemoryElement {
    text: String,
    attributes: HashMap<String, String>,
}

/// In-memory [`ThemeDocument`] with a root element and id-addressed children.
#[derive(Debug, Default)]
pub struct MemoryDocument {
    root: RefCell<HashMap<String, String>>,
    elements: RefCell<HashMap<String, MemoryElement>>,
    prefers_dark: bool,
}

impl MemoryDocument {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Document containing empty elements with the given ids.
    #[must_use]
    pub fn with_elements(ids: &[&str]) -> Self {
        let doc = Self::new();
        for id in ids {
            doc.insert_element(id);
        }
        doc
    }

    /// Report a dark system color scheme from [`ThemeDocument::prefers_dark`].
    #[must_use]
    pub fn preferring_dark(mut self) -> Self {
        self.prefers_dark = true;
        self
    }

    pub fn insert_element(&self, id: &str) {
        self.elements.borrow_mut().entry(id.to_owned()).or_default();
    }

    pub fn remove_element(&self, id: &str) {
        self.elements.borrow_mut().remove(id);
    }

    /// Text content of element `id`, if it exists.
    #[must_use]
    pub fn text(&self, id: &str) -> Option<String> {
        self.elements.borrow().get(id).map(|el| el.text.clone())
    }

    /// Attribute `name` of element `id`, if both exist.
    #[must_use]
    pub fn element_attribute(&self, id: &str, name: &str) -> Option<String> {
        self.elements.borrow().get(id).and_then(|el| el.attributes.get(name).cloned())
    }
}

impl ThemeDocument for MemoryDocument {
    fn root_attribute(&self, name: &str) -> Option<String> {
        self.root.borrow().get(name).cloned()
    }

    fn set_root_attribute(&self, name: &str, value: &str) -> Result<(), ThemeError> {
        self.root.borrow_mut().insert(name.to_owned(), value.to_owned());
        Ok(())
    }

    fn has_element(&self, id: &str) -> bool {
        self.elements.borrow().contains_key(id)
    }

    fn set_element_text(&self, id: &str, text: &str) -> Result<bool, ThemeError> {
        let mut elements = self.elements.borrow_mut();
        let Some(el) = elements.get_mut(id) else {
            return Ok(false);
        };
        text.clone_into(&mut el.text);
        Ok(true)
    }

    fn set_element_attribute(&self, id: &str, name: &str, value: &str) -> Result<bool, ThemeError> {
        let mut elements = self.elements.borrow_mut();
        let Some(el) = elements.get_mut(id) else {
            return Ok(false);
        };
        el.attributes.insert(name.to_owned(), value.to_owned());
        Ok(true)
    }

    fn prefers_dark(&self) -> bool {
        self.prefers_dark
    }
}
