//! Lumen Tab Controller
//!
//! Exclusive selection over a named set of panels: exactly one panel is
//! active at any time after initialization, and selecting a tab deactivates
//! every other one.

mod error;
mod manager;
mod state;
mod tab;

pub use error::TabError;
pub use manager::TabSet;
pub use state::PanelState;
pub use tab::Tab;

pub type Result<T> = std::result::Result<T, TabError>;
