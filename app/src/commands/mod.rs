//! View-layer commands
//!
//! These commands bridge the rendered page to the Rust core. The view layer
//! forwards raw input events and repaints from the returned state; it keeps
//! none of its own.

pub mod clipboard;
pub mod forms;
pub mod notifications;
pub mod overlay;
pub mod scroll;
pub mod tabs;
