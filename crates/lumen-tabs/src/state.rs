//! Panel State Machine
//!
//! ```text
//! Inactive
//!   ↓ select
//! Entering   (entry animation class applied)
//!   ↓ animation settled
//! Active
//! ```
//!
//! Deselection drops a panel back to `Inactive` from either live state.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PanelState {
    /// Panel is hidden
    Inactive,
    /// Panel just became active, entry animation still running
    Entering,
    /// Panel is the settled, visible selection
    Active,
}

impl PanelState {
    /// Check if transition to another state is valid
    pub fn can_transition_to(&self, target: PanelState) -> bool {
        match (self, target) {
            // Selection always starts the entry animation
            (PanelState::Inactive, PanelState::Entering) => true,
            // Entry animation settles into Active
            (PanelState::Entering, PanelState::Active) => true,
            // Deselection is valid mid-animation or settled
            (PanelState::Entering, PanelState::Inactive) => true,
            (PanelState::Active, PanelState::Inactive) => true,
            // Same state is always valid (no-op)
            (a, b) if *a == b => true,
            // Cannot skip the entry animation
            _ => false,
        }
    }

    /// True while the panel counts as the current selection
    pub fn is_selected(&self) -> bool {
        matches!(self, PanelState::Entering | PanelState::Active)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PanelState::Inactive => "inactive",
            PanelState::Entering => "entering",
            PanelState::Active => "active",
        }
    }
}

impl std::fmt::Display for PanelState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for PanelState {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "inactive" => Ok(PanelState::Inactive),
            "entering" => Ok(PanelState::Entering),
            "active" => Ok(PanelState::Active),
            _ => Err(format!("Unknown panel state: {}", s)),
        }
    }
}
