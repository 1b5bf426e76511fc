//! Lumen Motion
//!
//! Everything the page does in response to scrolling: anchor navigation with
//! offset correction, one-shot reveal animations, the stat counters, and the
//! scroll progress bar.

mod counter;
mod error;
mod progress;
mod reveal;
mod scroll;

pub use counter::{Counter, CounterAnimator, CounterPhase};
pub use error::MotionError;
pub use progress::ScrollProgress;
pub use reveal::{RevealObserver, RevealPhase, RevealTarget};
pub use scroll::{ScrollNavigator, ScrollResolution, ScrollTarget};

pub type Result<T> = std::result::Result<T, MotionError>;
