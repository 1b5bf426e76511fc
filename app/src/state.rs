//! Application state management
use lumen_core::{Config, Coordinator, CoreError, Document, Result};
use parking_lot::RwLock;
use std::sync::Arc;

/// Thread-safe application state wrapper
pub struct AppState {
    coordinator: Arc<RwLock<Option<Arc<Coordinator>>>>,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            coordinator: Arc::new(RwLock::new(None)),
        }
    }

    /// Build and wire the coordinator against a page. Replaces any
    /// previous coordinator (a full page reload).
    pub fn initialize(&self, document: Document, config: Config) -> Result<()> {
        let mut coordinator = Coordinator::new(document, config);
        coordinator.initialize()?;
        *self.coordinator.write() = Some(Arc::new(coordinator));
        Ok(())
    }

    pub fn with_coordinator<F, T>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&Coordinator) -> Result<T>,
    {
        let guard = self.coordinator.read();
        match guard.as_ref() {
            Some(coordinator) => f(coordinator),
            None => Err(CoreError::NotInitialized),
        }
    }

    /// Owned handle for commands that spawn work outliving the call.
    pub fn coordinator(&self) -> Result<Arc<Coordinator>> {
        self.coordinator
            .read()
            .as_ref()
            .cloned()
            .ok_or(CoreError::NotInitialized)
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
