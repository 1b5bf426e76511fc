//! Lumen Page Model
//!
//! The in-memory page every controller operates on. The view layer is a
//! stateless renderer: it forwards input events and paints whatever classes,
//! attributes and text live here. Rust owns all state.

mod document;
mod error;
mod geometry;
mod node;

pub use document::Document;
pub use error::PageError;
pub use geometry::{Rect, Viewport};
pub use node::{Node, NodeId};

pub type Result<T> = std::result::Result<T, PageError>;
