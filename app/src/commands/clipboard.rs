//! Clipboard commands
use super::notifications::schedule_auto_dismiss;
use super::tabs::CommandResult;
use crate::state::AppState;
use lumen_core::NotificationKind;

/// Copy-button click on a code block. Copies the block's code text and
/// reports the result as a notification either way.
pub async fn copy_code(state: &AppState, block_id: String) -> CommandResult<String> {
    let coordinator = match state.coordinator() {
        Ok(c) => c,
        Err(e) => return CommandResult::err(e.to_string()),
    };

    let text = match coordinator.code_block_text(&block_id) {
        Ok(text) => text,
        Err(e) => return CommandResult::err(e.to_string()),
    };

    let copy_result = arboard::Clipboard::new().and_then(|mut clipboard| {
        clipboard.set_text(text.clone())
    });

    match copy_result {
        Ok(()) => {
            let ticket = coordinator.notify("Copied to clipboard!", NotificationKind::Success);
            schedule_auto_dismiss(&coordinator, ticket);
            CommandResult::ok(text)
        }
        Err(e) => {
            tracing::warn!(error = %e, "Clipboard write failed");
            let ticket = coordinator.notify(
                "Couldn't copy to clipboard. Select the text manually.",
                NotificationKind::Error,
            );
            schedule_auto_dismiss(&coordinator, ticket);
            CommandResult::err(e.to_string())
        }
    }
}
