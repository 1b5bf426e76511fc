//! Notification Center
//!
//! Owns the single-notification invariant. Each `show` bumps an epoch and
//! hands back a ticket; the auto-dismiss timer presents its ticket when it
//! fires, so a timer armed for an already-replaced notification is a no-op
//! instead of removing its successor.

use parking_lot::RwLock;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

use crate::notification::{Notification, NotificationKind};

/// Proof of which `show` call a pending timer belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DismissTicket {
    epoch: u64,
}

pub struct NotificationCenter {
    current: Arc<RwLock<Option<Notification>>>,
    epoch: Arc<AtomicU64>,
    /// Delay before automatic dismissal
    timeout: Duration,
    /// Exit animation length, removal is deferred this long
    exit_delay: Duration,
}

impl NotificationCenter {
    pub fn new(timeout: Duration, exit_delay: Duration) -> Self {
        Self {
            current: Arc::new(RwLock::new(None)),
            epoch: Arc::new(AtomicU64::new(0)),
            timeout,
            exit_delay,
        }
    }

    /// Display a notification, replacing any current one immediately.
    ///
    /// No stacking: the previous notification is dropped without its exit
    /// animation, exactly like the DOM element being removed outright.
    pub fn show(&self, message: impl Into<String>, kind: NotificationKind) -> DismissTicket {
        let notification = Notification::new(message, kind);
        let epoch = self.epoch.fetch_add(1, Ordering::SeqCst) + 1;

        tracing::info!(
            kind = %notification.kind,
            message = %notification.message,
            "Showing notification"
        );

        *self.current.write() = Some(notification);
        DismissTicket { epoch }
    }

    /// Manual dismissal via the close control. Starts the exit animation.
    /// Returns true if anything changed (idempotent otherwise).
    pub fn dismiss(&self) -> bool {
        let mut slot = self.current.write();
        match slot.as_mut() {
            Some(n) => {
                let changed = n.begin_leave();
                if changed {
                    tracing::debug!(id = %n.id, "Dismissed notification");
                }
                changed
            }
            None => false,
        }
    }

    /// Timer-driven dismissal. Only acts if `ticket` still names the
    /// current notification.
    pub fn expire(&self, ticket: DismissTicket) -> bool {
        if self.epoch.load(Ordering::SeqCst) != ticket.epoch {
            return false;
        }
        self.dismiss()
    }

    /// Remove the notification once its exit animation has played out.
    /// A second call, or a call after a replacement `show`, is a no-op.
    pub fn finalize_leaving(&self) -> bool {
        let mut slot = self.current.write();
        if slot.as_ref().is_some_and(Notification::is_leaving) {
            *slot = None;
            true
        } else {
            false
        }
    }

    /// Full auto-dismiss flow for one notification: wait out the display
    /// timeout, start the exit animation (unless already replaced or
    /// manually dismissed), then finalize after the transition delay.
    pub async fn run_auto_dismiss(&self, ticket: DismissTicket) {
        tokio::time::sleep(self.timeout).await;
        if self.expire(ticket) {
            tokio::time::sleep(self.exit_delay).await;
            self.finalize_leaving();
        }
    }

    pub fn current(&self) -> Option<Notification> {
        self.current.read().clone()
    }

    pub fn has_notification(&self) -> bool {
        self.current.read().is_some()
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    pub fn exit_delay(&self) -> Duration {
        self.exit_delay
    }
}

impl Clone for NotificationCenter {
    fn clone(&self) -> Self {
        Self {
            current: Arc::clone(&self.current),
            epoch: Arc::clone(&self.epoch),
            timeout: self.timeout,
            exit_delay: self.exit_delay,
        }
    }
}
