//! Form submission handler
//!
//! Orchestrates one attempt: validate, take the busy guard, await the
//! gateway, release the guard. The guard release is unconditional and
//! happens before the outcome is even inspected, so no exit path can leave
//! the submit control disabled.

use parking_lot::RwLock;
use std::sync::Arc;

use crate::error::FormError;
use crate::gateway::SimulatedGateway;
use crate::payload::FormPayload;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitPhase {
    Idle,
    Submitting,
}

impl SubmitPhase {
    pub fn as_str(&self) -> &'static str {
        match self {
            SubmitPhase::Idle => "idle",
            SubmitPhase::Submitting => "submitting",
        }
    }
}

/// Terminal result of one submission attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionOutcome {
    /// Gateway accepted; the form should be reset
    Accepted,
    /// Validation failed; the gateway was never contacted
    Rejected(Vec<String>),
    /// Gateway rejected after the attempt was made
    Failed(String),
    /// Another submission is in flight; this one was dropped
    AlreadyPending,
}

pub struct FormHandler {
    phase: Arc<RwLock<SubmitPhase>>,
    gateway: SimulatedGateway,
}

impl FormHandler {
    pub fn new(gateway: SimulatedGateway) -> Self {
        Self {
            phase: Arc::new(RwLock::new(SubmitPhase::Idle)),
            gateway,
        }
    }

    pub fn phase(&self) -> SubmitPhase {
        *self.phase.read()
    }

    pub fn gateway(&self) -> &SimulatedGateway {
        &self.gateway
    }

    /// Run one submission attempt end to end.
    pub async fn submit(&self, payload: &FormPayload) -> SubmissionOutcome {
        if let Err(FormError::MissingFields(missing)) = payload.validate() {
            tracing::debug!(missing = ?missing, "Form validation failed");
            return SubmissionOutcome::Rejected(missing);
        }

        // Busy guard: the disabled submit control, held for the whole wait
        {
            let mut phase = self.phase.write();
            if *phase == SubmitPhase::Submitting {
                tracing::debug!("Dropped duplicate submission");
                return SubmissionOutcome::AlreadyPending;
            }
            *phase = SubmitPhase::Submitting;
        }

        let result = self.gateway.send(payload).await;

        // Always restore, before looking at the result
        *self.phase.write() = SubmitPhase::Idle;

        match result {
            Ok(()) => {
                tracing::info!("Form submission accepted");
                SubmissionOutcome::Accepted
            }
            Err(e) => SubmissionOutcome::Failed(e.to_string()),
        }
    }
}

impl Clone for FormHandler {
    fn clone(&self) -> Self {
        Self {
            phase: Arc::clone(&self.phase),
            gateway: self.gateway.clone(),
        }
    }
}
