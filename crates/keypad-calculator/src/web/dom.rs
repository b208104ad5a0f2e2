//! Mock DOM
//!
//! A small element tree standing in for the browser DOM, so the web view can
//! be rendered and clicked without a browser.

use std::collections::BTreeMap;

use serde::Serialize;

/// A DOM element
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DomElement {
    /// Element id, empty when unset
    pub id: String,
    /// Tag name
    pub tag: String,
    /// Text content
    pub text_content: String,
    /// Attributes
    pub attributes: BTreeMap<String, String>,
    /// CSS classes
    pub classes: Vec<String>,
    /// Child elements
    pub children: Vec<DomElement>,
}

impl Default for DomElement {
    fn default() -> Self {
        Self::new("div")
    }
}

impl DomElement {
    /// Creates an element with the given tag
    #[must_use]
    pub fn new(tag: &str) -> Self {
        Self {
            id: String::new(),
            tag: tag.to_string(),
            text_content: String::new(),
            attributes: BTreeMap::new(),
            classes: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Sets the id
    #[must_use]
    pub fn with_id(mut self, id: &str) -> Self {
        self.id = id.to_string();
        self
    }

    /// Sets the text content
    #[must_use]
    pub fn with_text(mut self, text: &str) -> Self {
        self.text_content = text.to_string();
        self
    }

    /// Adds a class
    #[must_use]
    pub fn with_class(mut self, class: &str) -> Self {
        self.add_class(class);
        self
    }

    /// Sets an attribute
    #[must_use]
    pub fn with_attr(mut self, key: &str, value: &str) -> Self {
        self.set_attr(key, value);
        self
    }

    /// Adds a child
    #[must_use]
    pub fn with_child(mut self, child: DomElement) -> Self {
        self.children.push(child);
        self
    }

    /// Sets text content
    pub fn set_text(&mut self, text: &str) {
        self.text_content = text.to_string();
    }

    /// Sets an attribute
    pub fn set_attr(&mut self, key: &str, value: &str) {
        self.attributes.insert(key.to_string(), value.to_string());
    }

    /// Gets an attribute value
    #[must_use]
    pub fn get_attr(&self, key: &str) -> Option<&str> {
        self.attributes.get(key).map(String::as_str)
    }

    /// Adds a class if not already present
    pub fn add_class(&mut self, class: &str) {
        if !self.has_class(class) {
            self.classes.push(class.to_string());
        }
    }

    /// Checks for a class
    #[must_use]
    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    /// Depth-first search for an element by id
    #[must_use]
    pub fn find(&self, id: &str) -> Option<&DomElement> {
        if self.id == id {
            return Some(self);
        }
        self.children.iter().find_map(|child| child.find(id))
    }

    /// Depth-first search for an element by id, mutably
    pub fn find_mut(&mut self, id: &str) -> Option<&mut DomElement> {
        if self.id == id {
            return Some(self);
        }
        self.children.iter_mut().find_map(|child| child.find_mut(id))
    }

    /// Removes the direct child with the given id, returning it
    pub fn remove_child(&mut self, id: &str) -> Option<DomElement> {
        let index = self.children.iter().position(|c| c.id == id)?;
        Some(self.children.remove(index))
    }

}

/// DOM events the web view reacts to
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum DomEvent {
    /// Click on an element
    Click {
        /// Id of the clicked element
        element_id: String,
    },
}

impl DomEvent {
    /// Creates a click event
    #[must_use]
    pub fn click(element_id: &str) -> Self {
        Self::Click {
            element_id: element_id.to_string(),
        }
    }
}

/// Most events the log keeps; older ones are dropped first
pub const MAX_EVENT_HISTORY: usize = 256;

/// Mock document: one root element plus a bounded event log
#[derive(Debug, Clone)]
pub struct MockDom {
    /// Root element
    pub root: DomElement,
    event_history: Vec<DomEvent>,
}

impl Default for MockDom {
    fn default() -> Self {
        Self::new(DomElement::new("div").with_id("root"))
    }
}

impl MockDom {
    /// Creates a document around a root element
    #[must_use]
    pub fn new(root: DomElement) -> Self {
        Self {
            root,
            event_history: Vec::new(),
        }
    }

    /// Gets an element by id
    #[must_use]
    pub fn get_element(&self, id: &str) -> Option<&DomElement> {
        self.root.find(id)
    }

    /// Gets an element by id, mutably
    pub fn get_element_mut(&mut self, id: &str) -> Option<&mut DomElement> {
        self.root.find_mut(id)
    }

    /// Gets element text by id
    #[must_use]
    pub fn get_element_text(&self, id: &str) -> Option<&str> {
        self.get_element(id).map(|e| e.text_content.as_str())
    }

    /// Records an event, dropping the oldest once the log is full
    pub fn dispatch_event(&mut self, event: DomEvent) {
        if self.event_history.len() >= MAX_EVENT_HISTORY {
            self.event_history.remove(0);
        }
        self.event_history.push(event);
    }

    /// The most recent dispatched events, oldest first
    #[must_use]
    pub fn event_history(&self) -> &[DomEvent] {
        &self.event_history
    }
}
