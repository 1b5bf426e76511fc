//! Notification commands
use serde::Serialize;

use super::tabs::CommandResult;
use crate::state::AppState;
use lumen_core::{Coordinator, DismissTicket, Notification, NotificationKind};

#[derive(Debug, Serialize)]
pub struct NotificationInfo {
    pub id: String,
    pub message: String,
    pub kind: String,
    pub state: String,
}

impl From<Notification> for NotificationInfo {
    fn from(n: Notification) -> Self {
        Self {
            id: n.id,
            message: n.message,
            kind: n.kind.to_string(),
            state: n.state.as_str().to_string(),
        }
    }
}

/// Arm the auto-dismiss timer for a freshly shown notification.
pub(crate) fn schedule_auto_dismiss(coordinator: &Coordinator, ticket: DismissTicket) {
    let center = coordinator.notifications().clone();
    tokio::spawn(async move {
        center.run_auto_dismiss(ticket).await;
    });
}

pub async fn show_notification(
    state: &AppState,
    message: String,
    kind: String,
) -> CommandResult<NotificationInfo> {
    let coordinator = match state.coordinator() {
        Ok(c) => c,
        Err(e) => return CommandResult::err(e.to_string()),
    };

    let kind: NotificationKind = match kind.parse() {
        Ok(kind) => kind,
        Err(e) => return CommandResult::err(format!("{e}")),
    };

    let ticket = coordinator.notify(&message, kind);
    schedule_auto_dismiss(&coordinator, ticket);

    match coordinator.notifications().current() {
        Some(n) => CommandResult::ok(n.into()),
        None => CommandResult::err("Notification vanished".to_string()),
    }
}

/// Close-control click. The exit animation runs before removal.
pub async fn dismiss_notification(state: &AppState) -> CommandResult<bool> {
    let coordinator = match state.coordinator() {
        Ok(c) => c,
        Err(e) => return CommandResult::err(e.to_string()),
    };

    let changed = coordinator.dismiss_notification();
    if changed {
        let center = coordinator.notifications().clone();
        tokio::spawn(async move {
            tokio::time::sleep(center.exit_delay()).await;
            center.finalize_leaving();
        });
    }

    CommandResult::ok(changed)
}

pub fn current_notification(state: &AppState) -> CommandResult<Option<NotificationInfo>> {
    match state.with_coordinator(|c| Ok(c.notifications().current())) {
        Ok(current) => CommandResult::ok(current.map(Into::into)),
        Err(e) => CommandResult::err(e.to_string()),
    }
}
