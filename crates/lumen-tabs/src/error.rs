//! Tab error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum TabError {
    #[error("No tab targets panel: {0}")]
    UnknownPanel(String),

    #[error("Panel already registered: {0}")]
    DuplicatePanel(String),

    #[error("Invalid state transition: {from} -> {to}")]
    InvalidTransition { from: String, to: String },

    #[error("Panel key cannot be empty")]
    EmptyKey,
}
