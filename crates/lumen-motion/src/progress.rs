//! Scroll progress bar
//!
//! Reflects how far down the page the viewport sits, as a width percentage
//! on the progress node.

use lumen_page::{Document, NodeId};

pub struct ScrollProgress {
    node: NodeId,
}

impl ScrollProgress {
    pub fn new(node: NodeId) -> Self {
        Self { node }
    }

    /// Scrolled fraction of the page in `[0, 1]`. A page that cannot scroll
    /// reports 0.
    pub fn ratio(doc: &Document) -> f64 {
        let range = doc.page_height() - doc.viewport_height();
        if range <= 0.0 {
            return 0.0;
        }
        (doc.scroll_y() / range).clamp(0.0, 1.0)
    }

    /// Recompute and write the bar width. Returns the new ratio.
    pub fn update(&self, doc: &mut Document) -> f64 {
        let ratio = Self::ratio(doc);
        doc.node_mut(self.node)
            .attrs
            .insert("style".to_string(), format!("width: {:.1}%", ratio * 100.0));
        ratio
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lumen_page::Node;

    #[test]
    fn test_ratio_tracks_scroll() {
        let mut doc = Document::new(800.0, 2800.0);
        let body = doc.body();
        let bar = doc.append(body, Node::new("div").with_id("scroll-progress"));
        let progress = ScrollProgress::new(bar);

        assert_eq!(progress.update(&mut doc), 0.0);

        doc.set_scroll(1000.0);
        assert_eq!(progress.update(&mut doc), 0.5);
        assert_eq!(doc.node(bar).attr("style"), Some("width: 50.0%"));

        doc.set_scroll(9999.0);
        assert_eq!(progress.update(&mut doc), 1.0);
    }

    #[test]
    fn test_unscrollable_page() {
        let mut doc = Document::new(800.0, 600.0);
        let body = doc.body();
        let bar = doc.append(body, Node::new("div").with_id("scroll-progress"));
        let progress = ScrollProgress::new(bar);

        assert_eq!(progress.update(&mut doc), 0.0);
    }
}
