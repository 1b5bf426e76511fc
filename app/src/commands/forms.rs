//! Form submission commands
use serde::Serialize;
use std::collections::BTreeMap;

use super::tabs::CommandResult;
use crate::state::AppState;
use lumen_core::{FormPayload, SubmissionOutcome};

#[derive(Debug, Serialize)]
pub struct SubmitResult {
    /// "accepted" | "rejected" | "failed" | "pending" | "ignored"
    pub outcome: String,
    pub missing_fields: Vec<String>,
    pub error: Option<String>,
}

impl SubmitResult {
    fn ignored() -> Self {
        Self {
            outcome: "ignored".to_string(),
            missing_fields: Vec::new(),
            error: None,
        }
    }
}

impl From<SubmissionOutcome> for SubmitResult {
    fn from(outcome: SubmissionOutcome) -> Self {
        match outcome {
            SubmissionOutcome::Accepted => Self {
                outcome: "accepted".to_string(),
                missing_fields: Vec::new(),
                error: None,
            },
            SubmissionOutcome::Rejected(missing) => Self {
                outcome: "rejected".to_string(),
                missing_fields: missing,
                error: None,
            },
            SubmissionOutcome::Failed(reason) => Self {
                outcome: "failed".to_string(),
                missing_fields: Vec::new(),
                error: Some(reason),
            },
            SubmissionOutcome::AlreadyPending => Self {
                outcome: "pending".to_string(),
                missing_fields: Vec::new(),
                error: None,
            },
        }
    }
}

/// Submit event from a form. Field values arrive as the view layer read
/// them; trimming and validation happen in the core.
pub async fn submit_form(
    state: &AppState,
    form_id: String,
    fields: BTreeMap<String, String>,
) -> CommandResult<SubmitResult> {
    let coordinator = match state.coordinator() {
        Ok(c) => c,
        Err(e) => return CommandResult::err(e.to_string()),
    };

    let form = {
        let page = coordinator.page();
        match page.require_id(&form_id) {
            Ok(node) => node,
            Err(e) => return CommandResult::err(e.to_string()),
        }
    };

    let payload: FormPayload = fields.into_iter().collect();

    match coordinator.submit_form(form, &payload).await {
        Ok(Some(outcome)) => CommandResult::ok(outcome.into()),
        Ok(None) => CommandResult::ok(SubmitResult::ignored()),
        Err(e) => CommandResult::err(e.to_string()),
    }
}
