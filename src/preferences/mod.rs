//! Dark-mode preference store
//!
//! The store is a reactive boolean cell handed to page rendering as context.
//! The layout load hook seeds it from the cookie value resolved for the
//! request; afterwards it may change independently of the cookie, which is
//! only written through the theme endpoint.

use std::sync::Arc;

use tokio::sync::watch;

/// Reactive dark-mode flag
#[derive(Debug, Clone)]
pub struct PreferenceStore {
    dark_mode: Arc<watch::Sender<bool>>,
}

impl PreferenceStore {
    pub fn new(dark_mode: bool) -> Self {
        let (tx, _) = watch::channel(dark_mode);
        Self {
            dark_mode: Arc::new(tx),
        }
    }

    /// Current value
    pub fn get(&self) -> bool {
        *self.dark_mode.borrow()
    }

    /// Replace the value, notifying subscribers if it changed
    pub fn set(&self, dark_mode: bool) {
        self.dark_mode.send_if_modified(|current| {
            let changed = *current != dark_mode;
            *current = dark_mode;
            changed
        });
    }

    /// Watch for changes
    pub fn subscribe(&self) -> watch::Receiver<bool> {
        self.dark_mode.subscribe()
    }
}

impl Default for PreferenceStore {
    fn default() -> Self {
        Self::new(false)
    }
}
