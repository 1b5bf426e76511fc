//! Simulated submission gateway
//!
//! A fixed-delay resolution standing in for the real endpoint. The delay
//! and the next outcome are configurable so both exit paths of the handler
//! stay exercisable.

use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

use crate::error::FormError;
use crate::payload::FormPayload;
use crate::Result;

pub struct SimulatedGateway {
    delay: Duration,
    fail_next: Arc<AtomicBool>,
    sent: Arc<AtomicU64>,
}

impl SimulatedGateway {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            fail_next: Arc::new(AtomicBool::new(false)),
            sent: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Make the next `send` reject, then revert to succeeding.
    pub fn fail_next(&self) {
        self.fail_next.store(true, Ordering::SeqCst);
    }

    /// How many submissions have reached the gateway.
    pub fn sent_count(&self) -> u64 {
        self.sent.load(Ordering::SeqCst)
    }

    pub async fn send(&self, payload: &FormPayload) -> Result<()> {
        self.sent.fetch_add(1, Ordering::SeqCst);

        tracing::debug!(fields = payload.fields().len(), "Submitting form payload");
        tokio::time::sleep(self.delay).await;

        if self.fail_next.swap(false, Ordering::SeqCst) {
            tracing::warn!("Simulated gateway rejected submission");
            return Err(FormError::Gateway("simulated rejection".to_string()));
        }

        Ok(())
    }
}

impl Clone for SimulatedGateway {
    fn clone(&self) -> Self {
        Self {
            delay: self.delay,
            fail_next: Arc::clone(&self.fail_next),
            sent: Arc::clone(&self.sent),
        }
    }
}
