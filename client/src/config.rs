//! Mock-backend tuning and browser storage keys.
//!
//! DESIGN
//! ======
//! `MockConfig` is `Copy` and provided through Leptos context so pages read
//! one shared set of latencies, and tests can swap in [`MockConfig::instant`].

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::time::Duration;

/// `localStorage` key holding the mock auth flag.
pub const AUTH_FLAG_KEY: &str = "isLoggedIn";

/// `localStorage` key holding the dashboard quick-notes draft.
pub const DASHBOARD_NOTES_KEY: &str = "authsecure.dashboardNotes";

/// Settings for the in-browser mock backend.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MockConfig {
    /// The single email accepted by the mock login.
    pub demo_email: &'static str,
    /// The single password accepted by the mock login.
    pub demo_password: &'static str,
    /// Simulated network latency before a mock call resolves.
    pub submit_latency: Duration,
    /// Pause between the forgot-password success toast and the redirect.
    pub forgot_redirect_delay: Duration,
    /// Pause between the registration success toast and the redirect.
    pub registration_redirect_delay: Duration,
    /// How long a toast stays on screen before auto-dismissal.
    pub toast_ttl: Duration,
}

impl Default for MockConfig {
    fn default() -> Self {
        Self {
            demo_email: "user@example.com",
            demo_password: "password123",
            submit_latency: Duration::from_millis(1000),
            forgot_redirect_delay: Duration::from_millis(2000),
            registration_redirect_delay: Duration::from_millis(1500),
            toast_ttl: Duration::from_millis(4000),
        }
    }
}

impl MockConfig {
    /// Same credentials as the default, with every delay zeroed.
    #[must_use]
    pub fn instant() -> Self {
        Self {
            submit_latency: Duration::ZERO,
            forgot_redirect_delay: Duration::ZERO,
            registration_redirect_delay: Duration::ZERO,
            toast_ttl: Duration::ZERO,
            ..Self::default()
        }
    }
}
