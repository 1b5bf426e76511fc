//! Counter Animator
//!
//! Stat counters run from 0 to their `data-target` value in fixed-interval
//! increments once the element is half visible, and land exactly on the
//! target: the final tick clamps away floating-point drift.
//!
//! ```text
//! Armed
//!   ↓ first time >= 50% visible
//! Counting
//!   ↓ value reaches target
//! Done    (terminal - never re-arms)
//! ```

use parking_lot::RwLock;
use std::sync::Arc;
use std::time::Duration;

use lumen_page::{Document, NodeId};

use crate::error::MotionError;
use crate::Result;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CounterPhase {
    /// Waiting to become visible
    Armed,
    /// Incrementing every tick
    Counting,
    /// Landed on the target
    Done,
}

#[derive(Debug, Clone)]
pub struct Counter {
    pub node: NodeId,
    pub target: u64,
    pub phase: CounterPhase,
    value: f64,
    step: f64,
}

impl Counter {
    pub fn new(node: NodeId, target: u64) -> Self {
        Self {
            node,
            target,
            phase: CounterPhase::Armed,
            value: 0.0,
            step: 0.0,
        }
    }

    /// Displayed integer: floor while counting, exact target once done.
    pub fn display_value(&self) -> u64 {
        match self.phase {
            CounterPhase::Done => self.target,
            _ => self.value.floor() as u64,
        }
    }

    fn start(&mut self, steps: u32) {
        self.step = self.target as f64 / steps.max(1) as f64;
        self.phase = CounterPhase::Counting;
    }

    /// One animation tick. Returns true while still counting.
    fn advance(&mut self) -> bool {
        self.value += self.step;
        if self.value >= self.target as f64 {
            self.value = self.target as f64;
            self.phase = CounterPhase::Done;
            return false;
        }
        true
    }
}

pub struct CounterAnimator {
    counters: Arc<RwLock<Vec<Counter>>>,
    /// Visibility fraction that starts a counter (coarser than reveals)
    threshold: f64,
    /// Total animation length
    duration: Duration,
    /// Interval between increments
    tick: Duration,
}

impl CounterAnimator {
    pub fn new(threshold: f64, duration: Duration, tick: Duration) -> Self {
        Self {
            counters: Arc::new(RwLock::new(Vec::new())),
            threshold,
            duration,
            tick,
        }
    }

    /// Parse a `data-target` attribute value.
    pub fn parse_target(value: &str) -> Result<u64> {
        value
            .trim()
            .parse::<u64>()
            .map_err(|_| MotionError::InvalidTarget(value.to_string()))
    }

    /// Register a stat node with its numeric target.
    pub fn observe(&self, node: NodeId, target: u64) {
        self.counters.write().push(Counter::new(node, target));
    }

    /// Start any armed counter that is now sufficiently visible. A counter
    /// leaves `Armed` exactly once; scrolling away and back cannot restart
    /// it.
    pub fn process(&self, doc: &Document) -> Vec<NodeId> {
        let viewport = doc.viewport();
        let steps = (self.duration.as_millis() / self.tick.as_millis().max(1)).max(1) as u32;
        let mut started = Vec::new();

        for counter in self.counters.write().iter_mut() {
            if counter.phase != CounterPhase::Armed {
                continue;
            }

            let ratio = viewport.visible_ratio(&doc.node(counter.node).bounds, 0.0);
            if ratio >= self.threshold {
                counter.start(steps);
                started.push(counter.node);
                tracing::debug!(target = counter.target, "Started counter");
            }
        }

        started
    }

    /// Advance every running counter by one increment and write the
    /// displayed values into the page. Returns true while any counter is
    /// still running.
    pub fn tick(&self, doc: &mut Document) -> bool {
        let mut any_running = false;

        for counter in self.counters.write().iter_mut() {
            if counter.phase != CounterPhase::Counting {
                continue;
            }

            any_running |= counter.advance();
            doc.set_text(counter.node, counter.display_value().to_string());
        }

        any_running
    }

    pub fn tick_interval(&self) -> Duration {
        self.tick
    }

    pub fn counters(&self) -> Vec<Counter> {
        self.counters.read().clone()
    }

    pub fn any_counting(&self) -> bool {
        self.counters
            .read()
            .iter()
            .any(|c| c.phase == CounterPhase::Counting)
    }

    pub fn all_done(&self) -> bool {
        self.counters
            .read()
            .iter()
            .all(|c| c.phase == CounterPhase::Done)
    }
}

impl Clone for CounterAnimator {
    fn clone(&self) -> Self {
        Self {
            counters: Arc::clone(&self.counters),
            threshold: self.threshold,
            duration: self.duration,
            tick: self.tick,
        }
    }
}
