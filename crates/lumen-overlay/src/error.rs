//! Overlay error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum OverlayError {
    #[error("Modal element not present: #{0}")]
    ModalNotFound(String),
}
