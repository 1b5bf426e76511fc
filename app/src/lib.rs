//! Lumen landing page application
//!
//! Native state core behind the page: the view layer renders and forwards
//! events, Rust owns all state.

pub mod commands;
pub mod page;
pub mod state;

use state::AppState;

/// Boot the coordinator against the landing page and walk it through a
/// short scripted session, logging what each interaction does.
pub async fn run() -> anyhow::Result<()> {
    lumen_core::init_logging();

    let state = AppState::new();
    state.initialize(page::landing_page(), lumen_core::Config::default())?;

    // Reader lands, scrolls through the page
    for y in [600.0, 1400.0, 2000.0, 3000.0, 4200.0] {
        let result = commands::scroll::report_scroll(&state, y).await;
        if let Some(summary) = result.data {
            tracing::info!(
                y,
                revealed = summary.revealed,
                counters = summary.counters_started,
                progress = summary.progress,
                "Scroll"
            );
        }
    }

    // Flips through the feature tabs
    for key in ["orchestrate", "optimize", "observe"] {
        commands::tabs::select_tab(&state, key.to_string());
        commands::tabs::settle_tab(&state, key.to_string());
    }

    // Jumps to pricing from the nav
    commands::scroll::navigate_anchor(&state, "#pricing".to_string()).await;

    // Opens the demo, closes it with Escape
    commands::overlay::play_demo_video(&state).await;
    commands::overlay::handle_escape(&state);

    // Requests a demo
    let fields = std::collections::BTreeMap::from([
        ("name".to_string(), "Ada Lovelace".to_string()),
        ("email".to_string(), "ada@analytical.engines".to_string()),
        ("company".to_string(), "Analytical Engines".to_string()),
    ]);
    let result = commands::forms::submit_form(&state, "demo-request".to_string(), fields).await;
    if let Some(submit) = result.data {
        tracing::info!(outcome = %submit.outcome, "Demo request");
    }

    // Let counters and notification timers drain
    let timeout = state.with_coordinator(|c| Ok(c.notifications().timeout()))?;
    tokio::time::sleep(timeout + std::time::Duration::from_millis(500)).await;

    Ok(())
}
