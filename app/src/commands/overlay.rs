//! Modal and mobile menu commands
use serde::Serialize;

use super::notifications::schedule_auto_dismiss;
use super::tabs::CommandResult;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct OverlayInfo {
    pub modal_open: bool,
    pub menu_open: bool,
    pub scroll_locked: bool,
}

fn overlay_info(state: &AppState) -> lumen_core::Result<OverlayInfo> {
    state.with_coordinator(|c| {
        Ok(OverlayInfo {
            modal_open: c.overlay().modal_open(),
            menu_open: c.overlay().menu_open(),
            scroll_locked: c.overlay().scroll_locked(),
        })
    })
}

pub fn open_modal(state: &AppState) -> CommandResult<OverlayInfo> {
    match state.with_coordinator(|c| {
        c.open_modal();
        Ok(())
    }) {
        Ok(()) => report(state),
        Err(e) => CommandResult::err(e.to_string()),
    }
}

pub fn close_modal(state: &AppState) -> CommandResult<OverlayInfo> {
    match state.with_coordinator(|c| {
        c.close_modal();
        Ok(())
    }) {
        Ok(()) => report(state),
        Err(e) => CommandResult::err(e.to_string()),
    }
}

/// Escape key pressed anywhere on the page.
pub fn handle_escape(state: &AppState) -> CommandResult<OverlayInfo> {
    match state.with_coordinator(|c| {
        c.handle_escape();
        Ok(())
    }) {
        Ok(()) => report(state),
        Err(e) => CommandResult::err(e.to_string()),
    }
}

pub fn toggle_menu(state: &AppState) -> CommandResult<OverlayInfo> {
    match state.with_coordinator(|c| {
        c.toggle_menu();
        Ok(())
    }) {
        Ok(()) => report(state),
        Err(e) => CommandResult::err(e.to_string()),
    }
}

/// Hero demo button: opens the modal and raises an info notification.
pub async fn play_demo_video(state: &AppState) -> CommandResult<OverlayInfo> {
    let coordinator = match state.coordinator() {
        Ok(c) => c,
        Err(e) => return CommandResult::err(e.to_string()),
    };

    let ticket = coordinator.play_demo_video();
    schedule_auto_dismiss(&coordinator, ticket);

    report(state)
}

fn report(state: &AppState) -> CommandResult<OverlayInfo> {
    match overlay_info(state) {
        Ok(info) => CommandResult::ok(info),
        Err(e) => CommandResult::err(e.to_string()),
    }
}
