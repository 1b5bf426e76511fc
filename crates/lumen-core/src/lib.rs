//! Lumen Core
//!
//! Central coordination layer for the Lumen landing page. The native core
//! owns all page state; the view layer is a stateless renderer.

mod config;
mod coordinator;
mod error;

pub use config::Config;
pub use coordinator::{Coordinator, ScrollReport};
pub use error::CoreError;

// Re-export core components
pub use lumen_form::{
    FormError, FormHandler, FormPayload, SimulatedGateway, SubmissionOutcome, SubmitPhase,
};
pub use lumen_motion::{
    Counter, CounterAnimator, CounterPhase, MotionError, RevealObserver, RevealPhase,
    ScrollNavigator, ScrollProgress, ScrollResolution, ScrollTarget,
};
pub use lumen_notify::{
    DismissTicket, Notification, NotificationCenter, NotificationKind, NotificationState,
    NotifyError,
};
pub use lumen_overlay::{MobileMenu, Modal, ModalState, OverlayError, OverlayManager};
pub use lumen_page::{Document, Node, NodeId, PageError, Rect, Viewport};
pub use lumen_tabs::{PanelState, Tab, TabError, TabSet};

pub type Result<T> = std::result::Result<T, CoreError>;

/// Initialize logging
pub fn init_logging() {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    fmt().with_env_filter(filter).with_target(true).init();
}
