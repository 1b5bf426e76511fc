//! Tab Set
//!
//! Ordered collection of tabs keyed by panel identifier. Invariant: after
//! initialization exactly one tab is selected, and selecting any tab
//! deselects all others.

use parking_lot::RwLock;
use std::sync::Arc;

use crate::error::TabError;
use crate::state::PanelState;
use crate::tab::Tab;
use crate::Result;

pub struct TabSet {
    /// Tabs in document order
    tabs: Arc<RwLock<Vec<Tab>>>,
}

impl TabSet {
    pub fn new() -> Self {
        Self {
            tabs: Arc::new(RwLock::new(Vec::new())),
        }
    }

    /// Register a tab for `panel_key` at the end of the set.
    pub fn register(&self, panel_key: impl Into<String>) -> Result<Tab> {
        let panel_key = panel_key.into();

        let mut tabs = self.tabs.write();
        if tabs.iter().any(|t| t.panel_key == panel_key) {
            return Err(TabError::DuplicatePanel(panel_key));
        }

        let tab = Tab::new(panel_key)?;
        tabs.push(tab.clone());
        Ok(tab)
    }

    /// Select the first tab in document order, the deterministic default.
    ///
    /// Returns `None` when the set is empty (a page without tabs is fine).
    pub fn initialize(&self) -> Result<Option<Tab>> {
        let first_key = match self.tabs.read().first() {
            Some(tab) => tab.panel_key.clone(),
            None => return Ok(None),
        };

        let tab = self.select(&first_key)?;

        tracing::info!(panel = %tab.panel_key, "Selected default tab");

        Ok(Some(tab))
    }

    /// Select `panel_key`, deselecting every other tab.
    ///
    /// Re-selecting the current tab restarts its entry animation, matching
    /// the deselect-all-then-select order of the trigger click handler.
    pub fn select(&self, panel_key: &str) -> Result<Tab> {
        let mut tabs = self.tabs.write();

        let index = tabs
            .iter()
            .position(|t| t.panel_key == panel_key)
            .ok_or_else(|| TabError::UnknownPanel(panel_key.to_string()))?;

        for tab in tabs.iter_mut() {
            tab.deselect()?;
        }
        tabs[index].select()?;

        tracing::debug!(panel = %panel_key, "Selected tab");

        Ok(tabs[index].clone())
    }

    /// Mark the selected panel's entry animation as finished.
    pub fn settle(&self, panel_key: &str) -> Result<Tab> {
        let mut tabs = self.tabs.write();

        let tab = tabs
            .iter_mut()
            .find(|t| t.panel_key == panel_key)
            .ok_or_else(|| TabError::UnknownPanel(panel_key.to_string()))?;

        tab.settle()?;
        Ok(tab.clone())
    }

    /// The currently selected tab, if any.
    pub fn selected(&self) -> Option<Tab> {
        self.tabs.read().iter().find(|t| t.is_selected()).cloned()
    }

    /// Number of tabs whose state is not `Inactive`.
    pub fn selected_count(&self) -> usize {
        self.tabs.read().iter().filter(|t| t.is_selected()).count()
    }

    pub fn tabs(&self) -> Vec<Tab> {
        self.tabs.read().clone()
    }

    pub fn len(&self) -> usize {
        self.tabs.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.tabs.read().is_empty()
    }
}

impl Default for TabSet {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for TabSet {
    fn clone(&self) -> Self {
        Self {
            tabs: Arc::clone(&self.tabs),
        }
    }
}
