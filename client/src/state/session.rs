//! Mock login session for the current browser.
//!
//! SYSTEM CONTEXT
//! ==============
//! The durable part is a single `localStorage` flag (`isLoggedIn` = `"true"`).
//! `SessionState` is the in-memory view of it, shared through context so the
//! header, the login page and the logout action all observe one value. Writes
//! go through `log_in` / `log_out`, which update memory and storage together.
//!
//! There is no cross-tab coordination: another tab changing the flag is only
//! seen on the next `restore`.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use crate::config::AUTH_FLAG_KEY;
use crate::routes::Page;
use crate::util::storage::KeyValueStore;

/// Where the user lands after logging out.
pub const LOGOUT_LANDING: Page = Page::Login;

/// Whether the mock auth flag is set.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SessionStatus {
    #[default]
    LoggedOut,
    LoggedIn,
}

/// Session state tracking login status and whether storage has been read.
///
/// `restored` is false during SSR and the first client render; the header
/// renders nothing until then so hydration markup matches.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SessionState {
    pub status: SessionStatus,
    pub restored: bool,
}

/// Interpret a raw flag value. Only the exact string `"true"` counts.
#[must_use]
pub fn flag_is_set(raw: Option<&str>) -> bool {
    raw == Some("true")
}

impl SessionState {
    /// Read the flag from `store`.
    #[must_use]
    pub fn restore(store: &impl KeyValueStore) -> Self {
        let status = if flag_is_set(store.get(AUTH_FLAG_KEY).as_deref()) {
            SessionStatus::LoggedIn
        } else {
            SessionStatus::LoggedOut
        };
        Self {
            status,
            restored: true,
        }
    }

    #[must_use]
    pub fn is_logged_in(&self) -> bool {
        self.status == SessionStatus::LoggedIn
    }

    /// Set the flag.
    pub fn log_in(&mut self, store: &impl KeyValueStore) {
        store.set(AUTH_FLAG_KEY, "true");
        self.status = SessionStatus::LoggedIn;
        self.restored = true;
    }

    /// Clear the flag and return where the user should land.
    pub fn log_out(&mut self, store: &impl KeyValueStore) -> Page {
        store.remove(AUTH_FLAG_KEY);
        self.status = SessionStatus::LoggedOut;
        self.restored = true;
        LOGOUT_LANDING
    }

    /// Flip between logged in and out. Debug-build header control.
    pub fn toggle(&mut self, store: &impl KeyValueStore) {
        if self.is_logged_in() {
            self.log_out(store);
        } else {
            self.log_in(store);
        }
    }

    /// Brand-link target: the dashboard when logged in, otherwise login.
    #[must_use]
    pub fn home(&self) -> Page {
        if self.is_logged_in() {
            Page::Dashboard
        } else {
            Page::Login
        }
    }
}
