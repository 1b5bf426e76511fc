//! Page node
//!
//! A node carries exactly what the controllers read and write: element id,
//! class list, attributes, text content and a layout box. No render tree,
//! no styles.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::geometry::Rect;

/// Handle to a node inside a [`crate::Document`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    pub fn index(&self) -> usize {
        self.0
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Node {
    /// Tag name ("div", "code", "form", ...)
    pub tag: String,
    /// `id` attribute if present
    pub element_id: Option<String>,
    /// Class list, insertion-ordered, no duplicates
    pub classes: Vec<String>,
    /// data-* and other attributes
    pub attrs: HashMap<String, String>,
    /// Text content
    pub text: String,
    /// Layout box in document coordinates
    pub bounds: Rect,
    /// Parent node, `None` only for the body
    pub parent: Option<NodeId>,
}

impl Node {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            element_id: None,
            classes: Vec::new(),
            attrs: HashMap::new(),
            text: String::new(),
            bounds: Rect::default(),
            parent: None,
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.element_id = Some(id.into());
        self
    }

    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        self.add_class(&class.into());
        self
    }

    pub fn with_attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.insert(name.into(), value.into());
        self
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    pub fn with_bounds(mut self, bounds: Rect) -> Self {
        self.bounds = bounds;
        self
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    pub fn add_class(&mut self, class: &str) {
        if !self.has_class(class) {
            self.classes.push(class.to_string());
        }
    }

    pub fn remove_class(&mut self, class: &str) {
        self.classes.retain(|c| c != class);
    }

    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs.get(name).map(String::as_str)
    }
}
