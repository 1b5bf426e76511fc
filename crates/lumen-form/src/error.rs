//! Form error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum FormError {
    #[error("Required fields are blank: {}", .0.join(", "))]
    MissingFields(Vec<String>),

    #[error("Submission failed: {0}")]
    Gateway(String),
}
