//! Modal dialog state
//!
//! One dialog, one binary state. Close converges here from three inputs
//! (backdrop click, Escape, explicit call) and must be safe to repeat.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModalState {
    Closed,
    Open,
}

impl ModalState {
    pub fn as_str(&self) -> &'static str {
        match self {
            ModalState::Closed => "closed",
            ModalState::Open => "open",
        }
    }
}

impl std::fmt::Display for ModalState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Modal {
    /// `id` attribute of the dialog element
    pub element_id: String,
    pub state: ModalState,
}

impl Modal {
    pub fn new(element_id: impl Into<String>) -> Self {
        Self {
            element_id: element_id.into(),
            state: ModalState::Closed,
        }
    }

    /// Returns true if the state changed.
    pub fn open(&mut self) -> bool {
        if self.state == ModalState::Open {
            return false;
        }
        self.state = ModalState::Open;
        true
    }

    /// Idempotent: closing a closed modal is a no-op. Returns true if the
    /// state changed.
    pub fn close(&mut self) -> bool {
        if self.state == ModalState::Closed {
            return false;
        }
        self.state = ModalState::Closed;
        true
    }

    pub fn is_open(&self) -> bool {
        self.state == ModalState::Open
    }
}
