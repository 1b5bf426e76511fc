//! Motion error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum MotionError {
    #[error("Counter target is not a number: {0}")]
    InvalidTarget(String),
}
