//! Tab commands
use serde::{Deserialize, Serialize};

use crate::state::AppState;

#[derive(Debug, Serialize, Deserialize)]
pub struct TabInfo {
    pub id: String,
    pub panel_key: String,
    pub state: String,
    pub selected: bool,
}

impl From<lumen_core::Tab> for TabInfo {
    fn from(tab: lumen_core::Tab) -> Self {
        let selected = tab.is_selected();
        Self {
            id: tab.id,
            panel_key: tab.panel_key,
            state: tab.state.as_str().to_string(),
            selected,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct CommandResult<T> {
    pub success: bool,
    pub data: Option<T>,
    pub error: Option<String>,
}

impl<T> CommandResult<T> {
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    pub fn err(error: String) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(error),
        }
    }
}

pub fn select_tab(state: &AppState, panel_key: String) -> CommandResult<Vec<TabInfo>> {
    match state.with_coordinator(|c| {
        c.select_tab(&panel_key)?;
        Ok(c.tabs().tabs())
    }) {
        Ok(tabs) => CommandResult::ok(tabs.into_iter().map(Into::into).collect()),
        Err(e) => CommandResult::err(e.to_string()),
    }
}

/// Entry animation for the selected panel finished.
pub fn settle_tab(state: &AppState, panel_key: String) -> CommandResult<Vec<TabInfo>> {
    match state.with_coordinator(|c| {
        c.settle_tab(&panel_key)?;
        Ok(c.tabs().tabs())
    }) {
        Ok(tabs) => CommandResult::ok(tabs.into_iter().map(Into::into).collect()),
        Err(e) => CommandResult::err(e.to_string()),
    }
}

pub fn list_tabs(state: &AppState) -> CommandResult<Vec<TabInfo>> {
    match state.with_coordinator(|c| Ok(c.tabs().tabs())) {
        Ok(tabs) => CommandResult::ok(tabs.into_iter().map(Into::into).collect()),
        Err(e) => CommandResult::err(e.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::page;
    use lumen_core::Config;

    fn state() -> AppState {
        let state = AppState::new();
        state
            .initialize(page::landing_page(), Config::default())
            .unwrap();
        state
    }

    #[test]
    fn test_select_keeps_one_selected() {
        let state = state();

        let result = select_tab(&state, "optimize".to_string());
        assert!(result.success);
        let tabs = result.data.unwrap();
        let selected: Vec<_> = tabs.iter().filter(|t| t.selected).collect();
        assert_eq!(selected.len(), 1);
        assert_eq!(selected[0].panel_key, "optimize");
    }

    #[test]
    fn test_unknown_panel_reports_error() {
        let state = state();

        let result = select_tab(&state, "enterprise".to_string());
        assert!(!result.success);
        assert!(result.error.unwrap().contains("enterprise"));
    }
}
