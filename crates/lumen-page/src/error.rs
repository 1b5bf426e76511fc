//! Page model error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum PageError {
    #[error("No node matches selector: {0}")]
    MissingNode(String),

    #[error("Node has no `{attribute}` attribute: {selector}")]
    MissingAttribute {
        selector: String,
        attribute: String,
    },
}
