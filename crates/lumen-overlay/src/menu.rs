//! Mobile navigation menu state
//!
//! The menu's open state, its toggle button's active state and the body
//! lock class move in lockstep. This struct is the single source of truth;
//! the three rendered states all derive from `open`.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MobileMenu {
    open: bool,
}

impl MobileMenu {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flip the menu and return the new open state.
    pub fn toggle(&mut self) -> bool {
        self.open = !self.open;
        self.open
    }

    /// Idempotent explicit close. Returns true if the state changed.
    pub fn close(&mut self) -> bool {
        let was_open = self.open;
        self.open = false;
        was_open
    }

    pub fn is_open(&self) -> bool {
        self.open
    }
}
