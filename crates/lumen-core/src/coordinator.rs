//! Main coordinator state container
//!
//! Central state for the whole page: every controller hangs off this and
//! operates on the one shared document. The view layer is purely a renderer;
//! it forwards clicks, key presses and scroll reports here and paints the
//! classes, attributes and text that come out.

use parking_lot::RwLock;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use lumen_form::{FormHandler, FormPayload, SimulatedGateway, SubmissionOutcome, SubmitPhase};
use lumen_motion::{
    CounterAnimator, RevealObserver, ScrollNavigator, ScrollProgress, ScrollResolution,
    ScrollTarget,
};
use lumen_notify::{DismissTicket, NotificationCenter, NotificationKind};
use lumen_overlay::OverlayManager;
use lumen_page::{Document, NodeId, PageError};
use lumen_tabs::{PanelState, TabSet};

use crate::config::Config;
use crate::Result;

// Page vocabulary: the structural conventions the markup follows.
const TAB_TRIGGER_CLASS: &str = "tab-button";
const TAB_TARGET_ATTR: &str = "data-tab";
const ACTIVE_CLASS: &str = "active";
const ENTER_CLASS: &str = "fade-in";
const MENU_TOGGLE_ID: &str = "mobile-menu-toggle";
const MENU_ID: &str = "mobile-menu";
const MENU_OPEN_CLASS: &str = "open";
const BODY_MENU_CLASS: &str = "menu-open";
const MODAL_ID: &str = "demo-modal";
const PROGRESS_ID: &str = "scroll-progress";
const STAT_CLASS: &str = "stat-number";
const STAT_TARGET_ATTR: &str = "data-target";
const REVEAL_CLASS: &str = "animate-on-scroll";
const VALIDATE_ATTR: &str = "data-validate";
const BUSY_LABEL: &str = "Sending...";

/// What one scroll report changed
#[derive(Debug, Clone)]
pub struct ScrollReport {
    pub revealed: Vec<NodeId>,
    pub counters_started: Vec<NodeId>,
    pub progress: f64,
}

/// Main coordinator instance
///
/// All five sub-behaviors are initialized independently against the shared
/// document and share no other state.
pub struct Coordinator {
    config: Config,
    document: Arc<RwLock<Document>>,
    tabs: TabSet,
    overlay: OverlayManager,
    notifications: NotificationCenter,
    navigator: ScrollNavigator,
    reveals: RevealObserver,
    counters: CounterAnimator,
    progress: Option<ScrollProgress>,
    form: FormHandler,
    /// Exactly one ticker loop drives the counters at a time
    ticker_running: AtomicBool,
}

impl Coordinator {
    pub fn new(document: Document, config: Config) -> Self {
        let navigator = ScrollNavigator::new(config.scroll_margin);
        let reveals = RevealObserver::new(
            config.reveal_threshold,
            config.reveal_bottom_margin,
            config.reveal_class.clone(),
        );
        let counters = CounterAnimator::new(
            config.counter_threshold,
            config.counter_duration(),
            config.counter_tick(),
        );
        let notifications =
            NotificationCenter::new(config.notification_timeout(), config.notification_exit());
        let form = FormHandler::new(SimulatedGateway::new(config.submit_delay()));

        Self {
            config,
            document: Arc::new(RwLock::new(document)),
            tabs: TabSet::new(),
            overlay: OverlayManager::new(MODAL_ID),
            notifications,
            navigator,
            reveals,
            counters,
            progress: None,
            form,
            ticker_running: AtomicBool::new(false),
        }
    }

    /// Wire every controller to the current document. Unresolvable targets
    /// are a tolerated configuration mismatch: logged at DEBUG, skipped.
    pub fn initialize(&mut self) -> Result<()> {
        // Tab triggers, in document order
        let triggers: Vec<(NodeId, Option<String>)> = {
            let doc = self.document.read();
            doc.by_class(TAB_TRIGGER_CLASS)
                .into_iter()
                .map(|n| (n, doc.node(n).attr(TAB_TARGET_ATTR).map(str::to_string)))
                .collect()
        };
        for (node, key) in triggers {
            match key {
                Some(key) => {
                    if let Err(e) = self.tabs.register(&key) {
                        tracing::debug!(?node, error = %e, "Skipped tab trigger");
                    }
                }
                None => tracing::debug!(?node, "Tab trigger without data-tab, skipped"),
            }
        }
        self.tabs.initialize()?;
        self.apply_tab_classes();

        // Reveal targets: static set, collected once
        for node in self.document.read().by_class(REVEAL_CLASS) {
            self.reveals.observe(node);
        }
        self.reveals.attach();

        // Stat counters
        let stats: Vec<(NodeId, Option<String>)> = {
            let doc = self.document.read();
            doc.by_class(STAT_CLASS)
                .into_iter()
                .map(|n| (n, doc.node(n).attr(STAT_TARGET_ATTR).map(str::to_string)))
                .collect()
        };
        for (node, raw) in stats {
            match raw.as_deref().map(CounterAnimator::parse_target) {
                Some(Ok(target)) => self.counters.observe(node, target),
                Some(Err(e)) => tracing::debug!(?node, error = %e, "Skipped stat counter"),
                None => tracing::debug!(?node, "Stat without data-target, skipped"),
            }
        }

        // Scroll progress bar
        self.progress = self.document.read().by_id(PROGRESS_ID).map(ScrollProgress::new);
        if self.progress.is_none() {
            tracing::debug!("No scroll progress element");
        }

        // Evaluate everything once against the initial viewport
        let y = self.document.read().scroll_y();
        self.report_scroll(y);

        tracing::info!(
            tabs = self.tabs.len(),
            reveals = self.reveals.targets().len(),
            counters = self.counters.counters().len(),
            "Coordinator initialized"
        );

        Ok(())
    }

    // === Click routing ===

    /// Route a click to the controller that owns the clicked node. Returns
    /// a scroll target when the click was an intercepted anchor.
    pub fn handle_click(&self, node: NodeId) -> Result<Option<ScrollTarget>> {
        let (element_id, is_tab_trigger, tab_key, href) = {
            let doc = self.document.read();
            let n = match doc.get(node) {
                Some(n) => n,
                // Handle minted against a replaced document
                None => {
                    tracing::debug!(?node, "Click on unknown node, ignored");
                    return Ok(None);
                }
            };
            (
                n.element_id.clone(),
                n.has_class(TAB_TRIGGER_CLASS),
                n.attr(TAB_TARGET_ATTR).map(str::to_string),
                n.attr("href").map(str::to_string),
            )
        };

        if is_tab_trigger {
            match tab_key {
                Some(key) => self.select_tab(&key)?,
                None => tracing::debug!(?node, "Tab trigger without data-tab"),
            }
            return Ok(None);
        }

        if element_id.as_deref() == Some(MENU_TOGGLE_ID) {
            self.toggle_menu();
            return Ok(None);
        }

        // Backdrop click: the target is the modal container itself, not a child
        if self.overlay.modal_open() && element_id.as_deref() == Some(MODAL_ID) {
            self.close_modal();
            return Ok(None);
        }

        if let Some(href) = href {
            if href.starts_with('#') {
                return Ok(self.navigate_anchor(&href));
            }
        }

        Ok(None)
    }

    // === Tabs ===

    /// Select a panel, deselecting all others, and repaint the classes.
    pub fn select_tab(&self, panel_key: &str) -> Result<()> {
        self.tabs.select(panel_key)?;
        self.apply_tab_classes();
        Ok(())
    }

    /// The selected panel's entry animation finished.
    pub fn settle_tab(&self, panel_key: &str) -> Result<()> {
        self.tabs.settle(panel_key)?;
        self.apply_tab_classes();
        Ok(())
    }

    fn apply_tab_classes(&self) {
        let mut doc = self.document.write();

        let trigger_nodes: Vec<(NodeId, Option<String>)> = doc
            .by_class(TAB_TRIGGER_CLASS)
            .into_iter()
            .map(|n| (n, doc.node(n).attr(TAB_TARGET_ATTR).map(str::to_string)))
            .collect();

        for tab in self.tabs.tabs() {
            for (node, key) in &trigger_nodes {
                if key.as_deref() == Some(tab.panel_key.as_str()) {
                    if tab.is_selected() {
                        doc.add_class(*node, ACTIVE_CLASS);
                    } else {
                        doc.remove_class(*node, ACTIVE_CLASS);
                    }
                }
            }

            match doc.by_id(&tab.panel_key) {
                Some(panel) => match tab.state {
                    PanelState::Entering => {
                        doc.add_class(panel, ACTIVE_CLASS);
                        doc.add_class(panel, ENTER_CLASS);
                    }
                    PanelState::Active => {
                        doc.add_class(panel, ACTIVE_CLASS);
                        doc.remove_class(panel, ENTER_CLASS);
                    }
                    PanelState::Inactive => {
                        doc.remove_class(panel, ACTIVE_CLASS);
                        doc.remove_class(panel, ENTER_CLASS);
                    }
                },
                // Tolerated: a trigger may point at a panel that never shipped
                None => tracing::debug!(panel = %tab.panel_key, "No panel for tab, skipped"),
            }
        }
    }

    // === Modal ===

    pub fn open_modal(&self) -> bool {
        let changed = self.overlay.open_modal();
        if changed {
            self.apply_modal_state();
        }
        changed
    }

    /// Idempotent: closing an already-closed modal changes nothing.
    pub fn close_modal(&self) -> bool {
        let changed = self.overlay.close_modal();
        if changed {
            self.apply_modal_state();
        }
        changed
    }

    /// Escape closes the modal when open, otherwise it is a no-op.
    pub fn handle_escape(&self) -> bool {
        let changed = self.overlay.handle_escape();
        if changed {
            self.apply_modal_state();
        }
        changed
    }

    fn apply_modal_state(&self) {
        let open = self.overlay.modal_open();
        let mut doc = self.document.write();

        // Scroll lock tracks the modal exactly
        doc.set_scroll_locked(open);

        match doc.by_id(MODAL_ID) {
            Some(modal) => {
                if open {
                    doc.add_class(modal, ACTIVE_CLASS);
                } else {
                    doc.remove_class(modal, ACTIVE_CLASS);
                }
            }
            None => tracing::debug!("No modal element, state change not painted"),
        }
    }

    /// Demo video entry point: there is no player, the demo modal opens and
    /// an info notification says so.
    pub fn play_demo_video(&self) -> DismissTicket {
        self.open_modal();
        self.notify("Demo video coming soon. Book a live walkthrough instead!", NotificationKind::Info)
    }

    // === Mobile menu ===

    /// Toggle the menu. Its three rendered states (menu class, toggle button
    /// class, body lock class) all derive from the returned open flag.
    pub fn toggle_menu(&self) -> bool {
        let open = self.overlay.toggle_menu();
        self.apply_menu_state(open);
        open
    }

    /// Explicit close, also the anchor-navigation side effect. Idempotent.
    pub fn close_menu(&self) -> bool {
        let changed = self.overlay.close_menu();
        if changed {
            self.apply_menu_state(false);
        }
        changed
    }

    fn apply_menu_state(&self, open: bool) {
        let mut doc = self.document.write();
        let body = doc.body();

        for (element_id, class) in [(MENU_ID, MENU_OPEN_CLASS), (MENU_TOGGLE_ID, ACTIVE_CLASS)] {
            match doc.by_id(element_id) {
                Some(node) => {
                    if open {
                        doc.add_class(node, class);
                    } else {
                        doc.remove_class(node, class);
                    }
                }
                None => tracing::debug!(element_id, "No menu element, skipped"),
            }
        }

        if open {
            doc.add_class(body, BODY_MENU_CLASS);
        } else {
            doc.remove_class(body, BODY_MENU_CLASS);
        }
    }

    // === Scrolling ===

    /// Resolve an anchor href. When intercepted, the mobile menu closes and
    /// the document scrolls to the corrected offset.
    pub fn navigate_anchor(&self, href: &str) -> Option<ScrollTarget> {
        let resolution = {
            let doc = self.document.read();
            self.navigator.resolve(href, &doc)
        };

        match resolution {
            ScrollResolution::Smooth(target) => {
                self.close_menu();
                self.report_scroll(target.y);
                Some(target)
            }
            ScrollResolution::PassThrough => None,
        }
    }

    /// Record a new scroll position and run every scroll-driven behavior.
    pub fn report_scroll(&self, y: f64) -> ScrollReport {
        let mut doc = self.document.write();
        doc.set_scroll(y);

        let revealed = self.reveals.process(&mut doc);
        let counters_started = self.counters.process(&doc);
        let progress = match &self.progress {
            Some(bar) => bar.update(&mut doc),
            None => ScrollProgress::ratio(&doc),
        };

        ScrollReport {
            revealed,
            counters_started,
            progress,
        }
    }

    /// Advance running counters by one increment. Returns true while any is
    /// still counting.
    pub fn tick_counters(&self) -> bool {
        let mut doc = self.document.write();
        self.counters.tick(&mut doc)
    }

    /// Drive the counter animation to completion at the configured tick
    /// rate. Spawn this after a scroll report starts counters; concurrent
    /// calls yield to the loop already running, so counters always advance
    /// at single pace.
    pub async fn run_counters(&self) {
        loop {
            if self.ticker_running.swap(true, Ordering::SeqCst) {
                return;
            }
            loop {
                tokio::time::sleep(self.counters.tick_interval()).await;
                if !self.tick_counters() {
                    break;
                }
            }
            self.ticker_running.store(false, Ordering::SeqCst);
            // A counter armed between the final tick and the release would
            // stall without this re-check
            if !self.counters.any_counting() {
                return;
            }
        }
    }

    // === Notifications ===

    /// Show a notification (replacing any current one). The caller owns
    /// scheduling of the auto-dismiss timer via
    /// [`NotificationCenter::run_auto_dismiss`].
    pub fn notify(&self, message: &str, kind: NotificationKind) -> DismissTicket {
        self.notifications.show(message, kind)
    }

    /// Manual dismissal from the close control.
    pub fn dismiss_notification(&self) -> bool {
        self.notifications.dismiss()
    }

    // === Form submission ===

    /// Run a submission attempt for a form node. Forms not marked with
    /// `data-validate` are not intercepted and yield `None`.
    ///
    /// Must run inside a tokio runtime: notification timers are spawned.
    pub async fn submit_form(
        &self,
        form: NodeId,
        payload: &FormPayload,
    ) -> Result<Option<SubmissionOutcome>> {
        let intercepted = {
            let doc = self.document.read();
            doc.node(form).attr(VALIDATE_ATTR).is_some()
        };
        if !intercepted {
            return Ok(None);
        }

        // Validation gates everything: no busy state, no gateway traffic
        if payload.validate().is_err() {
            let outcome = self.form.submit(payload).await;
            self.notify_timed("Please fill in all required fields.", NotificationKind::Error);
            return Ok(Some(outcome));
        }

        // The in-flight attempt owns the busy control; a duplicate must not
        // repaint or restore it.
        if self.form.phase() == SubmitPhase::Submitting {
            return Ok(Some(self.form.submit(payload).await));
        }

        let control = self.document.read().child_by_tag(form, "button");
        let original_label = self.set_busy(control);

        let outcome = self.form.submit(payload).await;

        // Unconditional restore on every exit path
        self.restore_control(control, original_label);

        match &outcome {
            SubmissionOutcome::Accepted => {
                self.reset_form(form);
                self.notify_timed(
                    "Thanks! Our team will reach out within one business day.",
                    NotificationKind::Success,
                );
            }
            SubmissionOutcome::Failed(_) => {
                self.notify_timed(
                    "Something went wrong. Please try again.",
                    NotificationKind::Error,
                );
            }
            SubmissionOutcome::Rejected(_) => {
                self.notify_timed("Please fill in all required fields.", NotificationKind::Error);
            }
            SubmissionOutcome::AlreadyPending => {}
        }

        Ok(Some(outcome))
    }

    fn set_busy(&self, control: Option<NodeId>) -> Option<String> {
        let control = control?;
        let mut doc = self.document.write();
        let original = doc.node(control).text.clone();
        doc.node_mut(control)
            .attrs
            .insert("disabled".to_string(), "true".to_string());
        doc.set_text(control, BUSY_LABEL);
        Some(original)
    }

    fn restore_control(&self, control: Option<NodeId>, original_label: Option<String>) {
        if let Some(control) = control {
            let mut doc = self.document.write();
            doc.node_mut(control).attrs.remove("disabled");
            doc.set_text(control, original_label.unwrap_or_default());
        }
    }

    fn reset_form(&self, form: NodeId) {
        let mut doc = self.document.write();
        for child in doc.children(form) {
            let tag = doc.node(child).tag.clone();
            if matches!(tag.as_str(), "input" | "textarea" | "select") {
                doc.node_mut(child).attrs.remove("value");
            }
        }
    }

    fn notify_timed(&self, message: &str, kind: NotificationKind) {
        let ticket = self.notifications.show(message, kind);
        let center = self.notifications.clone();
        tokio::spawn(async move {
            center.run_auto_dismiss(ticket).await;
        });
    }

    // === Clipboard support ===

    /// Text of a code block's `code` child, for the copy button.
    pub fn code_block_text(&self, block_id: &str) -> Result<String> {
        let doc = self.document.read();
        let block = doc.require_id(block_id)?;
        let code = doc
            .child_by_tag(block, "code")
            .ok_or_else(|| PageError::MissingNode(format!("#{block_id} code")))?;
        Ok(doc.node(code).text.clone())
    }

    // === Accessors ===

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn tabs(&self) -> &TabSet {
        &self.tabs
    }

    pub fn overlay(&self) -> &OverlayManager {
        &self.overlay
    }

    pub fn notifications(&self) -> &NotificationCenter {
        &self.notifications
    }

    pub fn form(&self) -> &FormHandler {
        &self.form
    }

    /// Snapshot of the current page state, for renderers and assertions.
    pub fn page(&self) -> Document {
        self.document.read().clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lumen_notify::NotificationState;
    use lumen_page::{Node, Rect};
    use std::time::Duration;

    /// A miniature of the landing page with every convention present.
    fn landing_page() -> Document {
        let mut doc = Document::new(800.0, 5000.0);
        let body = doc.body();

        doc.append(
            body,
            Node::new("header")
                .with_class("header")
                .with_bounds(Rect::new(0.0, 0.0, 1200.0, 64.0)),
        );

        for key in ["overview", "pipelines", "ghost"] {
            doc.append(
                body,
                Node::new("button")
                    .with_class(TAB_TRIGGER_CLASS)
                    .with_attr(TAB_TARGET_ATTR, key),
            );
        }
        // Panels: "ghost" deliberately has none
        doc.append(body, Node::new("section").with_id("overview"));
        doc.append(body, Node::new("section").with_id("pipelines"));

        doc.append(body, Node::new("button").with_id(MENU_TOGGLE_ID));
        doc.append(body, Node::new("nav").with_id(MENU_ID));

        let modal = doc.append(body, Node::new("div").with_id(MODAL_ID));
        doc.append(modal, Node::new("div").with_class("modal-content"));

        doc.append(
            body,
            Node::new("a")
                .with_attr("href", "#pricing")
                .with_text("Pricing"),
        );
        doc.append(
            body,
            Node::new("section")
                .with_id("pricing")
                .with_bounds(Rect::new(2000.0, 0.0, 1200.0, 600.0)),
        );

        doc.append(body, Node::new("div").with_id(PROGRESS_ID));
        doc.append(
            body,
            Node::new("div")
                .with_class(STAT_CLASS)
                .with_attr(STAT_TARGET_ATTR, "120")
                .with_bounds(Rect::new(1500.0, 0.0, 100.0, 40.0)),
        );
        doc.append(
            body,
            Node::new("div")
                .with_class(REVEAL_CLASS)
                .with_bounds(Rect::new(1800.0, 0.0, 400.0, 200.0)),
        );

        let block = doc.append(body, Node::new("div").with_class("code-block").with_id("install"));
        doc.append(block, Node::new("code").with_text("cargo install lumen"));

        let form = doc.append(
            body,
            Node::new("form").with_id("demo-form").with_attr(VALIDATE_ATTR, "true"),
        );
        doc.append(form, Node::new("input").with_attr("name", "name"));
        doc.append(form, Node::new("input").with_attr("name", "email"));
        doc.append(form, Node::new("input").with_attr("name", "company"));
        doc.append(form, Node::new("button").with_text("Request demo"));

        doc
    }

    fn coordinator() -> Coordinator {
        let mut config = Config::default();
        // Keep async tests fast
        config.submit_delay_ms = 5;
        config.notification_timeout_ms = 20;
        config.notification_exit_ms = 2;

        let mut c = Coordinator::new(landing_page(), config);
        c.initialize().unwrap();
        c
    }

    fn active_panels(c: &Coordinator) -> Vec<String> {
        let page = c.page();
        ["overview", "pipelines"]
            .iter()
            .filter(|id| {
                page.by_id(id)
                    .map(|n| page.has_class(n, ACTIVE_CLASS))
                    .unwrap_or(false)
            })
            .map(|s| s.to_string())
            .collect()
    }

    #[test]
    fn test_first_tab_selected_on_init() {
        let c = coordinator();
        assert_eq!(c.tabs().selected().unwrap().panel_key, "overview");
        assert_eq!(c.tabs().selected_count(), 1);
        assert_eq!(active_panels(&c), vec!["overview"]);
    }

    #[test]
    fn test_click_on_trigger_switches_panels() {
        let c = coordinator();
        let page = c.page();
        let trigger = page
            .by_class(TAB_TRIGGER_CLASS)
            .into_iter()
            .find(|n| page.node(*n).attr(TAB_TARGET_ATTR) == Some("pipelines"))
            .unwrap();

        c.handle_click(trigger).unwrap();

        assert_eq!(c.tabs().selected().unwrap().panel_key, "pipelines");
        assert_eq!(active_panels(&c), vec!["pipelines"]);

        let page = c.page();
        let panel = page.by_id("pipelines").unwrap();
        assert!(page.has_class(panel, ENTER_CLASS));

        c.settle_tab("pipelines").unwrap();
        let page = c.page();
        assert!(!page.has_class(panel, ENTER_CLASS));
        assert!(page.has_class(panel, ACTIVE_CLASS));
    }

    #[test]
    fn test_missing_panel_is_tolerated() {
        let c = coordinator();
        // "ghost" has a trigger but no panel: selection succeeds silently
        c.select_tab("ghost").unwrap();
        assert_eq!(c.tabs().selected().unwrap().panel_key, "ghost");
        assert_eq!(c.tabs().selected_count(), 1);
        assert!(active_panels(&c).is_empty());
    }

    #[test]
    fn test_modal_backdrop_vs_content_click() {
        let c = coordinator();
        c.open_modal();
        let page = c.page();
        let modal = page.by_id(MODAL_ID).unwrap();
        let content = page.by_class("modal-content")[0];

        // Click inside the dialog: stays open
        c.handle_click(content).unwrap();
        assert!(c.overlay().modal_open());

        // Click the backdrop (the container itself): closes
        c.handle_click(modal).unwrap();
        assert!(!c.overlay().modal_open());
        assert!(!c.page().scroll_locked());
    }

    #[test]
    fn test_escape_close_is_idempotent() {
        let c = coordinator();
        c.open_modal();
        assert!(c.page().scroll_locked());

        assert!(c.handle_escape());
        assert!(!c.handle_escape());
        assert!(!c.overlay().modal_open());
        assert!(!c.page().scroll_locked());

        // Double explicit close: no error, no state change
        assert!(!c.close_modal());
    }

    #[test]
    fn test_menu_states_move_in_lockstep() {
        let c = coordinator();
        let page = c.page();
        let toggle = page.by_id(MENU_TOGGLE_ID).unwrap();

        c.handle_click(toggle).unwrap();
        let page = c.page();
        assert!(page.has_class(page.by_id(MENU_ID).unwrap(), MENU_OPEN_CLASS));
        assert!(page.has_class(toggle, ACTIVE_CLASS));
        assert!(page.has_class(page.body(), BODY_MENU_CLASS));

        c.handle_click(toggle).unwrap();
        let page = c.page();
        assert!(!page.has_class(page.by_id(MENU_ID).unwrap(), MENU_OPEN_CLASS));
        assert!(!page.has_class(toggle, ACTIVE_CLASS));
        assert!(!page.has_class(page.body(), BODY_MENU_CLASS));
    }

    #[test]
    fn test_anchor_click_scrolls_and_closes_menu() {
        let c = coordinator();
        c.toggle_menu();

        // Route through the click handler, as the view layer would
        let page = c.page();
        let anchor = page
            .children(page.body())
            .into_iter()
            .find(|n| page.node(*n).attr("href") == Some("#pricing"))
            .unwrap();

        let target = c.handle_click(anchor).unwrap().unwrap();
        // 2000 - 64 (header) - 20 (margin)
        assert_eq!(target.y, 1916.0);
        assert_eq!(c.page().scroll_y(), 1916.0);
        assert!(!c.overlay().menu_open());
    }

    #[test]
    fn test_unresolvable_anchor_passes_through() {
        let c = coordinator();
        assert!(c.navigate_anchor("#missing").is_none());
        assert!(c.navigate_anchor("#").is_none());
        assert!(c.navigate_anchor("#!").is_none());
        assert_eq!(c.page().scroll_y(), 0.0);
    }

    #[test]
    fn test_scroll_report_drives_reveal_and_progress() {
        let c = coordinator();
        let report = c.report_scroll(1400.0);

        assert_eq!(report.revealed.len(), 1);
        assert_eq!(report.counters_started.len(), 1);
        assert!(report.progress > 0.0);

        // Same scroll again: one-shots do not re-fire
        let report = c.report_scroll(1400.0);
        assert!(report.revealed.is_empty());
        assert!(report.counters_started.is_empty());
    }

    #[test]
    fn test_counters_land_exactly() {
        let c = coordinator();
        c.report_scroll(1400.0);
        while c.tick_counters() {}

        let page = c.page();
        let stat = page.by_class(STAT_CLASS)[0];
        assert_eq!(page.node(stat).text, "120");
    }

    #[test]
    fn test_code_block_text() {
        let c = coordinator();
        assert_eq!(c.code_block_text("install").unwrap(), "cargo install lumen");
        assert!(c.code_block_text("missing").is_err());
    }

    #[test]
    fn test_play_demo_video() {
        let c = coordinator();
        c.play_demo_video();
        assert!(c.overlay().modal_open());
        let current = c.notifications().current().unwrap();
        assert_eq!(current.kind, NotificationKind::Info);
    }

    #[tokio::test]
    async fn test_invalid_submission_never_reaches_gateway() {
        let c = coordinator();
        let form = c.page().by_id("demo-form").unwrap();
        let payload = FormPayload::new()
            .with("name", "Ada")
            .with("email", "")
            .with("company", "Acme");

        let outcome = c.submit_form(form, &payload).await.unwrap().unwrap();
        assert!(matches!(outcome, SubmissionOutcome::Rejected(_)));
        assert_eq!(c.form().gateway().sent_count(), 0);

        let current = c.notifications().current().unwrap();
        assert_eq!(current.kind, NotificationKind::Error);
    }

    #[tokio::test]
    async fn test_successful_submission_round_trip() {
        let c = coordinator();
        let page = c.page();
        let form = page.by_id("demo-form").unwrap();
        let button = page.child_by_tag(form, "button").unwrap();
        let payload = FormPayload::new()
            .with("name", "Ada")
            .with("email", "ada@acme.io")
            .with("company", "Acme");

        let outcome = c.submit_form(form, &payload).await.unwrap().unwrap();
        assert_eq!(outcome, SubmissionOutcome::Accepted);

        let page = c.page();
        // Control restored: enabled, original label back
        assert_eq!(page.node(button).attr("disabled"), None);
        assert_eq!(page.node(button).text, "Request demo");
        // Success notification shown
        assert_eq!(
            c.notifications().current().unwrap().kind,
            NotificationKind::Success
        );
        assert_eq!(c.form().gateway().sent_count(), 1);
    }

    #[tokio::test]
    async fn test_failed_submission_still_restores_control() {
        let c = coordinator();
        let page = c.page();
        let form = page.by_id("demo-form").unwrap();
        let button = page.child_by_tag(form, "button").unwrap();
        c.form().gateway().fail_next();

        let payload = FormPayload::new()
            .with("name", "Ada")
            .with("email", "ada@acme.io")
            .with("company", "Acme");
        let outcome = c.submit_form(form, &payload).await.unwrap().unwrap();

        assert!(matches!(outcome, SubmissionOutcome::Failed(_)));
        let page = c.page();
        assert_eq!(page.node(button).attr("disabled"), None);
        assert_eq!(page.node(button).text, "Request demo");
        assert_eq!(
            c.notifications().current().unwrap().kind,
            NotificationKind::Error
        );
    }

    #[tokio::test]
    async fn test_duplicate_submission_leaves_control_untouched() {
        let mut config = Config::default();
        config.submit_delay_ms = 80;
        config.notification_timeout_ms = 20;
        config.notification_exit_ms = 2;

        let mut c = Coordinator::new(landing_page(), config);
        c.initialize().unwrap();
        let c = Arc::new(c);

        let page = c.page();
        let form = page.by_id("demo-form").unwrap();
        let button = page.child_by_tag(form, "button").unwrap();
        let payload = FormPayload::new()
            .with("name", "Ada")
            .with("email", "ada@acme.io")
            .with("company", "Acme");

        let first = {
            let c = Arc::clone(&c);
            let payload = payload.clone();
            tokio::spawn(async move { c.submit_form(form, &payload).await })
        };

        // Give the first attempt time to take the guard and paint busy
        tokio::time::sleep(Duration::from_millis(20)).await;
        let second = c.submit_form(form, &payload).await.unwrap().unwrap();
        assert_eq!(second, SubmissionOutcome::AlreadyPending);

        // The in-flight attempt still owns the control
        let page = c.page();
        assert_eq!(page.node(button).attr("disabled"), Some("true"));
        assert_eq!(page.node(button).text, BUSY_LABEL);

        let first = first.await.unwrap().unwrap().unwrap();
        assert_eq!(first, SubmissionOutcome::Accepted);

        let page = c.page();
        assert_eq!(page.node(button).attr("disabled"), None);
        assert_eq!(page.node(button).text, "Request demo");
        assert_eq!(c.form().gateway().sent_count(), 1);
    }

    #[tokio::test]
    async fn test_concurrent_tickers_keep_single_pace() {
        let mut config = Config::default();
        config.counter_duration_ms = 200;
        config.counter_tick_ms = 20;

        let mut c = Coordinator::new(landing_page(), config);
        c.initialize().unwrap();
        let c = Arc::new(c);
        c.report_scroll(1400.0);

        let first = {
            let c = Arc::clone(&c);
            tokio::spawn(async move { c.run_counters().await })
        };
        let second = {
            let c = Arc::clone(&c);
            tokio::spawn(async move { c.run_counters().await })
        };

        // Halfway through the configured duration the counter must not have
        // landed; two loops ticking at once would have finished it by now
        tokio::time::sleep(Duration::from_millis(100)).await;
        let page = c.page();
        let stat = page.by_class(STAT_CLASS)[0];
        let shown: u64 = page.node(stat).text.parse().unwrap_or(0);
        assert!(shown < 120, "counter ran ahead of its duration: {shown}");

        first.await.unwrap();
        second.await.unwrap();
        assert_eq!(c.page().node(stat).text, "120");
    }

    #[test]
    fn test_click_from_stale_snapshot_ignored() {
        let c = coordinator();

        // Handle minted against a larger, since-replaced document
        let mut other = landing_page();
        let body = other.body();
        for _ in 0..40 {
            other.append(body, Node::new("div"));
        }
        let stale = other.append(body, Node::new("a").with_attr("href", "#pricing"));

        assert!(c.handle_click(stale).unwrap().is_none());
        assert_eq!(c.page().scroll_y(), 0.0);
    }

    #[tokio::test]
    async fn test_unmarked_form_not_intercepted() {
        let mut doc = landing_page();
        let body = doc.body();
        let plain = doc.append(body, Node::new("form").with_id("newsletter"));

        let mut c = Coordinator::new(doc, Config::default());
        c.initialize().unwrap();

        let outcome = c.submit_form(plain, &FormPayload::new()).await.unwrap();
        assert!(outcome.is_none());
    }

    #[test]
    fn test_notification_replacement_and_dismissal() {
        let c = coordinator();
        c.notify("first", NotificationKind::Info);
        c.notify("second", NotificationKind::Success);

        let current = c.notifications().current().unwrap();
        assert_eq!(current.message, "second");

        assert!(c.dismiss_notification());
        assert_eq!(
            c.notifications().current().unwrap().state,
            NotificationState::Leaving
        );
        assert!(!c.dismiss_notification());
    }
}
