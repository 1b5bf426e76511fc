//! Notification data structure
//!
//! ```text
//! Visible
//!   ↓ dismiss / timeout
//! Leaving    (exit animation class applied)
//!   ↓ finalize after the transition delay
//! Removed
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::NotifyError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    Info,
    Success,
    Error,
}

impl NotificationKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            NotificationKind::Info => "info",
            NotificationKind::Success => "success",
            NotificationKind::Error => "error",
        }
    }
}

impl std::fmt::Display for NotificationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for NotificationKind {
    type Err = NotifyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "info" => Ok(NotificationKind::Info),
            "success" => Ok(NotificationKind::Success),
            "error" => Ok(NotificationKind::Error),
            _ => Err(NotifyError::UnknownKind(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationState {
    /// On screen
    Visible,
    /// Exit animation running, DOM removal pending
    Leaving,
    /// Gone
    Removed,
}

impl NotificationState {
    pub fn as_str(&self) -> &'static str {
        match self {
            NotificationState::Visible => "visible",
            NotificationState::Leaving => "leaving",
            NotificationState::Removed => "removed",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Notification {
    pub id: String,
    pub message: String,
    pub kind: NotificationKind,
    pub state: NotificationState,
    pub created_at: DateTime<Utc>,
}

impl Notification {
    pub fn new(message: impl Into<String>, kind: NotificationKind) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            message: message.into(),
            kind,
            state: NotificationState::Visible,
            created_at: Utc::now(),
        }
    }

    /// Start the exit animation. Returns true if the state changed.
    pub fn begin_leave(&mut self) -> bool {
        if self.state != NotificationState::Visible {
            return false;
        }
        self.state = NotificationState::Leaving;
        true
    }

    pub fn is_leaving(&self) -> bool {
        self.state == NotificationState::Leaving
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_kind_round_trip() {
        for kind in [
            NotificationKind::Info,
            NotificationKind::Success,
            NotificationKind::Error,
        ] {
            assert_eq!(NotificationKind::from_str(kind.as_str()).unwrap(), kind);
        }
        assert!(NotificationKind::from_str("fatal").is_err());
    }

    #[test]
    fn test_begin_leave_once() {
        let mut n = Notification::new("Saved", NotificationKind::Success);
        assert!(n.begin_leave());
        assert!(!n.begin_leave());
        assert_eq!(n.state, NotificationState::Leaving);
    }
}
