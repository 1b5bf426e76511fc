//! Overlay Manager
//!
//! Owns the modal, the mobile menu, and the body scroll lock that must
//! track them. The lock invariant: body scroll is suppressed if and only if
//! the modal is open.

use parking_lot::RwLock;
use std::sync::Arc;

use crate::menu::MobileMenu;
use crate::modal::Modal;

pub struct OverlayManager {
    modal: Arc<RwLock<Modal>>,
    menu: Arc<RwLock<MobileMenu>>,
}

impl OverlayManager {
    pub fn new(modal_element_id: impl Into<String>) -> Self {
        Self {
            modal: Arc::new(RwLock::new(Modal::new(modal_element_id))),
            menu: Arc::new(RwLock::new(MobileMenu::new())),
        }
    }

    // === Modal ===

    /// Open the modal. Returns true if the state changed.
    pub fn open_modal(&self) -> bool {
        let changed = self.modal.write().open();
        if changed {
            tracing::info!("Opened modal");
        }
        changed
    }

    /// Close the modal from any of its close paths. Idempotent.
    pub fn close_modal(&self) -> bool {
        let changed = self.modal.write().close();
        if changed {
            tracing::info!("Closed modal");
        }
        changed
    }

    /// Escape closes the modal when open; otherwise nothing happens.
    pub fn handle_escape(&self) -> bool {
        if self.modal_open() {
            self.close_modal()
        } else {
            false
        }
    }

    pub fn modal_open(&self) -> bool {
        self.modal.read().is_open()
    }

    pub fn modal_element_id(&self) -> String {
        self.modal.read().element_id.clone()
    }

    // === Mobile menu ===

    /// Toggle the menu and return the new open state. The caller renders
    /// the menu class, the toggle button class and the body lock class from
    /// this one value so the three can never drift apart.
    pub fn toggle_menu(&self) -> bool {
        let open = self.menu.write().toggle();
        tracing::debug!(open, "Toggled mobile menu");
        open
    }

    /// Explicit close, used by the scroll navigator as a side effect.
    /// Idempotent. Returns true if the state changed.
    pub fn close_menu(&self) -> bool {
        self.menu.write().close()
    }

    pub fn menu_open(&self) -> bool {
        self.menu.read().is_open()
    }

    // === Scroll lock ===

    /// Body scroll lock state: active iff the modal is open.
    pub fn scroll_locked(&self) -> bool {
        self.modal_open()
    }
}

impl Clone for OverlayManager {
    fn clone(&self) -> Self {
        Self {
            modal: Arc::clone(&self.modal),
            menu: Arc::clone(&self.menu),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scroll_lock_tracks_modal() {
        let overlay = OverlayManager::new("demo-modal");
        assert!(!overlay.scroll_locked());

        overlay.open_modal();
        assert!(overlay.scroll_locked());

        overlay.close_modal();
        assert!(!overlay.scroll_locked());
    }

    #[test]
    fn test_close_modal_idempotent() {
        let overlay = OverlayManager::new("demo-modal");
        overlay.open_modal();

        assert!(overlay.close_modal());
        assert!(!overlay.close_modal());
        assert!(!overlay.modal_open());
    }

    #[test]
    fn test_escape_only_acts_on_open_modal() {
        let overlay = OverlayManager::new("demo-modal");

        // Closed modal: Escape is a no-op
        assert!(!overlay.handle_escape());

        overlay.open_modal();
        assert!(overlay.handle_escape());
        assert!(!overlay.modal_open());

        // Second press: still a no-op, no error
        assert!(!overlay.handle_escape());
    }

    #[test]
    fn test_menu_toggle_and_forced_close() {
        let overlay = OverlayManager::new("demo-modal");

        assert!(overlay.toggle_menu());
        assert!(overlay.menu_open());

        // Anchor navigation closes the menu whether or not it was open
        assert!(overlay.close_menu());
        assert!(!overlay.close_menu());
        assert!(!overlay.menu_open());
    }
}
