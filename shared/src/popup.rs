//! Visibility rules for the contact pop-up on the menu page.

use std::time::Duration;

use log::debug;

use crate::storage::{KeyValueStore, MODAL_SHOWN_KEY};

/// Delay before the pop-up opens on its own
pub const AUTO_OPEN_DELAY_MS: u64 = 5000;

#[derive(Debug)]
pub struct ContactPopup<S> {
    store: S,
    visible: bool,
    auto_opened: bool,
}

impl<S: KeyValueStore> ContactPopup<S> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            visible: false,
            auto_opened: false,
        }
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn was_dismissed(&self) -> bool {
        self.store.get(MODAL_SHOWN_KEY).is_some()
    }

    /// `None` when the visitor already dismissed the pop-up this session
    pub fn auto_open_delay(&self) -> Option<Duration> {
        if self.was_dismissed() {
            None
        } else {
            Some(Duration::from_millis(AUTO_OPEN_DELAY_MS))
        }
    }

    /// Timer-driven open. Returns whether the pop-up became visible.
    pub fn auto_open(&mut self) -> bool {
        if self.auto_opened || self.visible || self.was_dismissed() {
            debug!("Contact pop-up auto-open skipped");
            return false;
        }
        self.auto_opened = true;
        self.visible = true;
        true
    }

    pub fn open_manual(&mut self) {
        self.visible = true;
    }

    pub fn close(&mut self) {
        self.visible = false;
        self.store.set(MODAL_SHOWN_KEY, "true");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    #[test]
    fn test_auto_open_after_delay_when_not_dismissed() {
        let mut popup = ContactPopup::new(MemoryStore::new());

        assert_eq!(popup.auto_open_delay(), Some(Duration::from_millis(5000)));
        assert!(!popup.is_visible());
        assert!(popup.auto_open());
        assert!(popup.is_visible());
    }

    #[test]
    fn test_flag_suppresses_auto_open() {
        let store = MemoryStore::new();
        store.set(MODAL_SHOWN_KEY, "true");
        let mut popup = ContactPopup::new(store);

        assert_eq!(popup.auto_open_delay(), None);
        assert!(!popup.auto_open());
        assert!(!popup.is_visible());
    }

    #[test]
    fn test_close_persists_flag() {
        let store = MemoryStore::new();
        let mut popup = ContactPopup::new(store.clone());

        popup.auto_open();
        popup.close();

        assert!(!popup.is_visible());
        assert_eq!(store.get(MODAL_SHOWN_KEY), Some("true".to_string()));
        assert_eq!(ContactPopup::new(store).auto_open_delay(), None);
    }

    #[test]
    fn test_auto_open_happens_once() {
        let mut popup = ContactPopup::new(MemoryStore::new());

        assert!(popup.auto_open());
        popup.visible = false;
        assert!(!popup.auto_open());
    }

    #[test]
    fn test_manual_open_ignores_flag() {
        let store = MemoryStore::new();
        store.set(MODAL_SHOWN_KEY, "true");
        let mut popup = ContactPopup::new(store);

        popup.open_manual();
        assert!(popup.is_visible());
    }
}
