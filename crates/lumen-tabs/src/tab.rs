//! Tab data structure
//!
//! A tab couples a trigger to the panel it reveals. The panel key is the
//! shared identifier between the two (the trigger's `data-tab` value).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::TabError;
use crate::state::PanelState;
use crate::Result;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tab {
    /// Unique identifier
    pub id: String,
    /// Identifier shared by trigger and panel
    pub panel_key: String,
    /// Current state in the state machine
    pub state: PanelState,
    /// When the tab was registered
    pub created_at: DateTime<Utc>,
    /// Last time this tab became the selection
    pub selected_at: Option<DateTime<Utc>>,
}

impl Tab {
    pub fn new(panel_key: String) -> Result<Self> {
        if panel_key.trim().is_empty() {
            return Err(TabError::EmptyKey);
        }

        Ok(Self {
            id: Uuid::new_v4().to_string(),
            panel_key,
            state: PanelState::Inactive,
            created_at: Utc::now(),
            selected_at: None,
        })
    }

    /// Attempt to transition to a new state
    pub fn transition_to(&mut self, new_state: PanelState) -> Result<()> {
        if !self.state.can_transition_to(new_state) {
            return Err(TabError::InvalidTransition {
                from: self.state.to_string(),
                to: new_state.to_string(),
            });
        }

        tracing::debug!(
            panel = %self.panel_key,
            from = %self.state,
            to = %new_state,
            "Panel state transition"
        );

        self.state = new_state;

        if new_state == PanelState::Entering {
            self.selected_at = Some(Utc::now());
        }

        Ok(())
    }

    /// Make this tab the selection (starts the entry animation)
    pub fn select(&mut self) -> Result<()> {
        if self.state == PanelState::Inactive {
            self.transition_to(PanelState::Entering)
        } else {
            Ok(()) // Already selected
        }
    }

    /// Entry animation finished
    pub fn settle(&mut self) -> Result<()> {
        if self.state == PanelState::Entering {
            self.transition_to(PanelState::Active)
        } else {
            Ok(()) // Nothing animating
        }
    }

    /// Drop the tab out of the selection
    pub fn deselect(&mut self) -> Result<()> {
        if self.state.is_selected() {
            self.transition_to(PanelState::Inactive)
        } else {
            Ok(()) // Already inactive
        }
    }

    pub fn is_selected(&self) -> bool {
        self.state.is_selected()
    }
}
