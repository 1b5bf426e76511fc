//! Visibility Animator
//!
//! One-shot reveal per element:
//!
//! ```text
//! Pending
//!   ↓ observer attached at init
//! Watching
//!   ↓ first intersection at >= threshold
//! Revealed    (terminal - the target is never evaluated again)
//! ```
//!
//! The target set is static: nodes are collected once at initialization.

use parking_lot::RwLock;
use std::sync::Arc;

use lumen_page::{Document, NodeId};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealPhase {
    /// Registered, observer not yet attached
    Pending,
    /// Being evaluated against the viewport on every scroll report
    Watching,
    /// Fired; permanently unsubscribed
    Revealed,
}

#[derive(Debug, Clone)]
pub struct RevealTarget {
    pub node: NodeId,
    pub phase: RevealPhase,
}

pub struct RevealObserver {
    targets: Arc<RwLock<Vec<RevealTarget>>>,
    /// Minimum visible fraction to trigger
    threshold: f64,
    /// Effective viewport shrink at the bottom edge (negative rootMargin)
    bottom_margin: f64,
    /// Class applied on reveal
    reveal_class: String,
}

impl RevealObserver {
    pub fn new(threshold: f64, bottom_margin: f64, reveal_class: impl Into<String>) -> Self {
        Self {
            targets: Arc::new(RwLock::new(Vec::new())),
            threshold,
            bottom_margin,
            reveal_class: reveal_class.into(),
        }
    }

    /// Register a node for observation.
    pub fn observe(&self, node: NodeId) {
        self.targets.write().push(RevealTarget {
            node,
            phase: RevealPhase::Pending,
        });
    }

    /// Attach the observer: all pending targets start being watched.
    pub fn attach(&self) {
        for target in self.targets.write().iter_mut() {
            if target.phase == RevealPhase::Pending {
                target.phase = RevealPhase::Watching;
            }
        }
    }

    /// Evaluate watched targets against the current viewport. Newly revealed
    /// nodes get the reveal class and are unsubscribed; the returned list
    /// holds only this round's transitions.
    pub fn process(&self, doc: &mut Document) -> Vec<NodeId> {
        let viewport = doc.viewport();
        let mut revealed = Vec::new();

        for target in self.targets.write().iter_mut() {
            if target.phase != RevealPhase::Watching {
                continue;
            }

            let ratio = viewport.visible_ratio(&doc.node(target.node).bounds, self.bottom_margin);
            if ratio >= self.threshold {
                target.phase = RevealPhase::Revealed;
                doc.add_class(target.node, &self.reveal_class);
                revealed.push(target.node);
            }
        }

        if !revealed.is_empty() {
            tracing::debug!(count = revealed.len(), "Revealed elements");
        }

        revealed
    }

    pub fn targets(&self) -> Vec<RevealTarget> {
        self.targets.read().clone()
    }

    pub fn revealed_count(&self) -> usize {
        self.targets
            .read()
            .iter()
            .filter(|t| t.phase == RevealPhase::Revealed)
            .count()
    }
}

impl Clone for RevealObserver {
    fn clone(&self) -> Self {
        Self {
            targets: Arc::clone(&self.targets),
            threshold: self.threshold,
            bottom_margin: self.bottom_margin,
            reveal_class: self.reveal_class.clone(),
        }
    }
}
