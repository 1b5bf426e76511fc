//! Document
//!
//! Flat node store with parent links, plus the window-level state the
//! coordinator needs: scroll position, viewport height and the body
//! scroll lock.

use serde::{Deserialize, Serialize};

use crate::error::PageError;
use crate::geometry::Viewport;
use crate::node::{Node, NodeId};
use crate::Result;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Document {
    nodes: Vec<Node>,
    scroll_y: f64,
    viewport_height: f64,
    page_height: f64,
    /// Body overflow suppressed (modal open)
    scroll_locked: bool,
}

impl Document {
    /// Create a document containing only the body node.
    pub fn new(viewport_height: f64, page_height: f64) -> Self {
        Self {
            nodes: vec![Node::new("body")],
            scroll_y: 0.0,
            viewport_height,
            page_height,
            scroll_locked: false,
        }
    }

    /// The body node, always present at index 0.
    pub fn body(&self) -> NodeId {
        NodeId(0)
    }

    /// Append a node under `parent` and return its handle.
    pub fn append(&mut self, parent: NodeId, mut node: Node) -> NodeId {
        node.parent = Some(parent);
        let id = NodeId(self.nodes.len());
        self.nodes.push(node);
        id
    }

    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.0]
    }

    /// Fallible lookup for handles that may come from a snapshot of a
    /// since-replaced document.
    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.0)
    }

    pub fn node_mut(&mut self, id: NodeId) -> &mut Node {
        &mut self.nodes[id.0]
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.nodes[id.0].parent
    }

    pub fn children(&self, id: NodeId) -> Vec<NodeId> {
        self.nodes
            .iter()
            .enumerate()
            .filter(|(_, n)| n.parent == Some(id))
            .map(|(i, _)| NodeId(i))
            .collect()
    }

    /// First child of `id` with the given tag name.
    pub fn child_by_tag(&self, id: NodeId, tag: &str) -> Option<NodeId> {
        self.children(id)
            .into_iter()
            .find(|c| self.nodes[c.0].tag == tag)
    }

    /// Look a node up by its `id` attribute.
    pub fn by_id(&self, element_id: &str) -> Option<NodeId> {
        self.nodes
            .iter()
            .position(|n| n.element_id.as_deref() == Some(element_id))
            .map(NodeId)
    }

    /// Like [`Self::by_id`] but missing nodes become a typed error.
    pub fn require_id(&self, element_id: &str) -> Result<NodeId> {
        self.by_id(element_id)
            .ok_or_else(|| PageError::MissingNode(format!("#{element_id}")))
    }

    /// All nodes carrying `class`, in document order.
    pub fn by_class(&self, class: &str) -> Vec<NodeId> {
        self.nodes
            .iter()
            .enumerate()
            .filter(|(_, n)| n.has_class(class))
            .map(|(i, _)| NodeId(i))
            .collect()
    }

    /// Read a required attribute off a node.
    pub fn require_attr(&self, id: NodeId, attribute: &str) -> Result<String> {
        let node = self.node(id);
        node.attr(attribute)
            .map(str::to_string)
            .ok_or_else(|| PageError::MissingAttribute {
                selector: node
                    .element_id
                    .clone()
                    .map(|e| format!("#{e}"))
                    .unwrap_or_else(|| node.tag.clone()),
                attribute: attribute.to_string(),
            })
    }

    // === Class mutation helpers ===

    pub fn add_class(&mut self, id: NodeId, class: &str) {
        self.nodes[id.0].add_class(class);
    }

    pub fn remove_class(&mut self, id: NodeId, class: &str) {
        self.nodes[id.0].remove_class(class);
    }

    pub fn has_class(&self, id: NodeId, class: &str) -> bool {
        self.nodes[id.0].has_class(class)
    }

    pub fn set_text(&mut self, id: NodeId, text: impl Into<String>) {
        self.nodes[id.0].text = text.into();
    }

    // === Window state ===

    pub fn viewport(&self) -> Viewport {
        Viewport::new(self.scroll_y, self.viewport_height)
    }

    pub fn scroll_y(&self) -> f64 {
        self.scroll_y
    }

    pub fn page_height(&self) -> f64 {
        self.page_height
    }

    pub fn viewport_height(&self) -> f64 {
        self.viewport_height
    }

    /// Record a new scroll offset, clamped to the scrollable range.
    pub fn set_scroll(&mut self, y: f64) {
        let max = (self.page_height - self.viewport_height).max(0.0);
        self.scroll_y = y.clamp(0.0, max);
    }

    pub fn scroll_locked(&self) -> bool {
        self.scroll_locked
    }

    pub fn set_scroll_locked(&mut self, locked: bool) {
        self.scroll_locked = locked;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Rect;

    #[test]
    fn test_queries() {
        let mut doc = Document::new(800.0, 3000.0);
        let body = doc.body();
        let section = doc.append(body, Node::new("section").with_id("pricing"));
        doc.append(section, Node::new("button").with_class("tab-button"));
        doc.append(section, Node::new("button").with_class("tab-button"));

        assert_eq!(doc.by_id("pricing"), Some(section));
        assert_eq!(doc.by_id("missing"), None);
        assert!(doc.require_id("missing").is_err());
        assert_eq!(doc.by_class("tab-button").len(), 2);
        assert_eq!(doc.children(section).len(), 2);

        assert!(doc.get(section).is_some());
        assert!(doc.get(NodeId(99)).is_none());
    }

    #[test]
    fn test_child_by_tag() {
        let mut doc = Document::new(800.0, 3000.0);
        let body = doc.body();
        let block = doc.append(body, Node::new("div").with_class("code-block"));
        let code = doc.append(block, Node::new("code").with_text("cargo run"));

        assert_eq!(doc.child_by_tag(block, "code"), Some(code));
        assert_eq!(doc.child_by_tag(block, "pre"), None);
        assert_eq!(doc.node(code).text, "cargo run");
    }

    #[test]
    fn test_scroll_clamped() {
        let mut doc = Document::new(800.0, 3000.0);
        doc.set_scroll(-50.0);
        assert_eq!(doc.scroll_y(), 0.0);
        doc.set_scroll(10_000.0);
        assert_eq!(doc.scroll_y(), 2200.0);
    }

    #[test]
    fn test_round_trip() {
        let mut doc = Document::new(800.0, 3000.0);
        let body = doc.body();
        doc.append(
            body,
            Node::new("div")
                .with_class("stat-number")
                .with_attr("data-target", "500")
                .with_bounds(Rect::new(1200.0, 0.0, 100.0, 40.0)),
        );

        let json = serde_json::to_string(&doc).unwrap();
        let restored: Document = serde_json::from_str(&json).unwrap();
        assert_eq!(restored.by_class("stat-number").len(), 1);
    }
}
