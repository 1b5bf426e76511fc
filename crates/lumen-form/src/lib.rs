//! Lumen Form Handler
//!
//! Required-field validation in front of a simulated network submission.
//! Validation failures never reach the gateway; the busy state is released
//! on every exit path, success or not.

mod error;
mod gateway;
mod handler;
mod payload;

pub use error::FormError;
pub use gateway::SimulatedGateway;
pub use handler::{FormHandler, SubmissionOutcome, SubmitPhase};
pub use payload::{FormPayload, REQUIRED_FIELDS};

pub type Result<T> = std::result::Result<T, FormError>;
