//! Scroll and click commands
use serde::Serialize;
use std::sync::Arc;

use super::tabs::CommandResult;
use crate::state::AppState;
use lumen_core::{Coordinator, NodeId, ScrollReport, ScrollTarget};

#[derive(Debug, Serialize)]
pub struct ScrollSummary {
    pub revealed: usize,
    pub counters_started: usize,
    pub progress: f64,
}

impl From<ScrollReport> for ScrollSummary {
    fn from(report: ScrollReport) -> Self {
        Self {
            revealed: report.revealed.len(),
            counters_started: report.counters_started.len(),
            progress: report.progress,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ScrollTargetInfo {
    pub element_id: String,
    pub y: f64,
}

impl From<ScrollTarget> for ScrollTargetInfo {
    fn from(target: ScrollTarget) -> Self {
        Self {
            element_id: target.element_id,
            y: target.y,
        }
    }
}

fn spawn_counters(coordinator: &Arc<Coordinator>, report: &ScrollReport) {
    if report.counters_started.is_empty() {
        return;
    }
    let coordinator = Arc::clone(coordinator);
    tokio::spawn(async move {
        coordinator.run_counters().await;
    });
}

/// New scroll position from the view layer. Runs reveals, counters and the
/// progress bar; starts the counter ticker when a counter arms.
pub async fn report_scroll(state: &AppState, y: f64) -> CommandResult<ScrollSummary> {
    let coordinator = match state.coordinator() {
        Ok(c) => c,
        Err(e) => return CommandResult::err(e.to_string()),
    };

    let report = coordinator.report_scroll(y);
    spawn_counters(&coordinator, &report);

    CommandResult::ok(report.into())
}

/// A click anywhere on the page, routed by the core.
pub async fn handle_click(state: &AppState, node: NodeId) -> CommandResult<Option<ScrollTargetInfo>> {
    let coordinator = match state.coordinator() {
        Ok(c) => c,
        Err(e) => return CommandResult::err(e.to_string()),
    };

    match coordinator.handle_click(node) {
        Ok(target) => CommandResult::ok(target.map(Into::into)),
        Err(e) => CommandResult::err(e.to_string()),
    }
}

/// Direct anchor navigation (deep link, keyboard activation).
pub async fn navigate_anchor(state: &AppState, href: String) -> CommandResult<Option<ScrollTargetInfo>> {
    let coordinator = match state.coordinator() {
        Ok(c) => c,
        Err(e) => return CommandResult::err(e.to_string()),
    };

    CommandResult::ok(coordinator.navigate_anchor(&href).map(Into::into))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::page;
    use lumen_core::Config;
    use std::time::Duration;

    fn state() -> AppState {
        let mut config = Config::default();
        // Counter runs in a handful of ticks so tests stay quick
        config.counter_duration_ms = 10;
        config.counter_tick_ms = 1;

        let state = AppState::new();
        state.initialize(page::landing_page(), config).unwrap();
        state
    }

    #[tokio::test]
    async fn test_scrolling_into_stats_starts_and_finishes_counters() {
        let state = state();

        let summary = report_scroll(&state, 1800.0).await.data.unwrap();
        assert_eq!(summary.counters_started, 3);

        // The spawned ticker drives every counter to its exact target
        tokio::time::sleep(Duration::from_millis(100)).await;
        let done = state
            .with_coordinator(|c| {
                let page = c.page();
                Ok(page
                    .by_class("stat-number")
                    .iter()
                    .map(|n| page.node(*n).text.clone())
                    .collect::<Vec<_>>())
            })
            .unwrap();
        assert_eq!(done, vec!["12000", "98", "340"]);
    }

    #[tokio::test]
    async fn test_anchor_navigation_reports_offset_target() {
        let state = state();

        let target = navigate_anchor(&state, "#pricing".to_string())
            .await
            .data
            .unwrap()
            .unwrap();
        assert_eq!(target.element_id, "pricing");
        // 4160 - 72 (header) - 20 (margin)
        assert_eq!(target.y, 4068.0);

        let missing = navigate_anchor(&state, "#nowhere".to_string())
            .await
            .data
            .unwrap();
        assert!(missing.is_none());
    }

    #[tokio::test]
    async fn test_progress_reaches_one_at_page_end() {
        let state = state();
        let summary = report_scroll(&state, 10_000.0).await.data.unwrap();
        assert_eq!(summary.progress, 1.0);
    }
}
