//! Lumen Notification System
//!
//! At most one notification is ever visible: showing a new one replaces the
//! current one immediately. Removal is animated (a leave phase, then a short
//! deferred finalize) and both the close control and the auto-dismiss timer
//! funnel through the same idempotent path.

mod center;
mod error;
mod notification;

pub use center::{DismissTicket, NotificationCenter};
pub use error::NotifyError;
pub use notification::{Notification, NotificationKind, NotificationState};

pub type Result<T> = std::result::Result<T, NotifyError>;
