//! Anchor navigation
//!
//! Resolves an in-page anchor click into either a smooth-scroll target
//! (offset-corrected for the sticky header) or a pass-through to default
//! behavior. Only real fragment links are intercepted: bare `#` and `#!`
//! placeholders and links whose target does not exist are left alone.

use lumen_page::{Document, NodeId};
use serde::Serialize;

/// Result of resolving an anchor href
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ScrollResolution {
    /// Intercept the click and smooth-scroll to this position
    Smooth(ScrollTarget),
    /// Leave the click to default browser behavior
    PassThrough,
}

#[derive(Debug, Clone, Serialize)]
pub struct ScrollTarget {
    pub node: NodeId,
    pub element_id: String,
    /// Destination scroll offset, already corrected for header and margin
    pub y: f64,
}

pub struct ScrollNavigator {
    /// Fixed visual margin below the sticky header, in pixels
    margin: f64,
}

impl ScrollNavigator {
    pub fn new(margin: f64) -> Self {
        Self { margin }
    }

    /// Resolve an href into a scroll action.
    pub fn resolve(&self, href: &str, doc: &Document) -> ScrollResolution {
        let fragment = match href.strip_prefix('#') {
            Some(rest) => rest,
            None => return ScrollResolution::PassThrough,
        };

        // Placeholder links are not navigation
        if fragment.is_empty() || fragment == "!" {
            return ScrollResolution::PassThrough;
        }

        let node = match doc.by_id(fragment) {
            Some(node) => node,
            None => {
                tracing::debug!(href, "Anchor target not found, leaving default behavior");
                return ScrollResolution::PassThrough;
            }
        };

        let header_height = self.header_height(doc);
        let y = (doc.node(node).bounds.top - header_height - self.margin).max(0.0);

        tracing::debug!(href, y, "Resolved anchor scroll");

        ScrollResolution::Smooth(ScrollTarget {
            node,
            element_id: fragment.to_string(),
            y,
        })
    }

    /// Height of the sticky header, zero when the page has none.
    fn header_height(&self, doc: &Document) -> f64 {
        doc.by_class("header")
            .first()
            .map(|id| doc.node(*id).bounds.height)
            .unwrap_or(0.0)
    }
}
