//! Notification error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum NotifyError {
    #[error("Unknown notification kind: {0}")]
    UnknownKind(String),
}
