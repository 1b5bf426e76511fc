//! Lumen Overlay Layer
//!
//! The two page-covering surfaces: the demo modal and the mobile navigation
//! menu. One manager owns both so the body scroll lock always agrees with
//! what is actually covering the page.

mod error;
mod manager;
mod menu;
mod modal;

pub use error::OverlayError;
pub use manager::OverlayManager;
pub use menu::MobileMenu;
pub use modal::{Modal, ModalState};

pub type Result<T> = std::result::Result<T, OverlayError>;
