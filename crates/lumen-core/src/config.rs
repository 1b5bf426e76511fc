//! Coordinator configuration
//!
//! Defaults are the constants the landing page ships with.

use serde::{Deserialize, Serialize};
use std::time::Duration;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Visual margin below the sticky header for anchor scrolls, px
    pub scroll_margin: f64,
    /// Visible fraction that triggers a reveal
    pub reveal_threshold: f64,
    /// Viewport shrink at the bottom edge for reveals, px
    pub reveal_bottom_margin: f64,
    /// Class applied to revealed elements
    pub reveal_class: String,
    /// Visible fraction that starts a counter
    pub counter_threshold: f64,
    /// Counter animation length, ms
    pub counter_duration_ms: u64,
    /// Counter increment interval, ms
    pub counter_tick_ms: u64,
    /// Notification display time before auto-dismiss, ms
    pub notification_timeout_ms: u64,
    /// Notification exit animation length, ms
    pub notification_exit_ms: u64,
    /// Simulated network delay for form submission, ms
    pub submit_delay_ms: u64,
}

impl Config {
    pub fn counter_duration(&self) -> Duration {
        Duration::from_millis(self.counter_duration_ms)
    }

    pub fn counter_tick(&self) -> Duration {
        Duration::from_millis(self.counter_tick_ms)
    }

    pub fn notification_timeout(&self) -> Duration {
        Duration::from_millis(self.notification_timeout_ms)
    }

    pub fn notification_exit(&self) -> Duration {
        Duration::from_millis(self.notification_exit_ms)
    }

    pub fn submit_delay(&self) -> Duration {
        Duration::from_millis(self.submit_delay_ms)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            scroll_margin: 20.0,
            reveal_threshold: 0.1,
            reveal_bottom_margin: 50.0,
            reveal_class: "visible".to_string(),
            counter_threshold: 0.5,
            counter_duration_ms: 2000,
            counter_tick_ms: 16,
            notification_timeout_ms: 5000,
            notification_exit_ms: 300,
            submit_delay_ms: 1500,
        }
    }
}
