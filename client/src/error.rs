//! Errors surfaced by the mock auth backend.
//!
//! ERROR HANDLING
//! ==============
//! Field-level problems never reach this type; they stay in
//! [`crate::forms::FieldErrors`] and block submission. `AuthError` covers the
//! page-level cases, and its `Display` text is exactly what the banner shows.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use crate::net::types::SocialProvider;
use crate::state::form::Banner;

/// Page-level failure of a mock auth action. Never fatal; the user may retry.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum AuthError {
    /// The submitted credentials did not match the demo pair.
    #[error("Invalid email or password. Please try again.")]
    InvalidCredentials,
    /// The requested sign-in method has no implementation.
    #[error("Social login with {0} is not yet implemented.")]
    NotImplemented(SocialProvider),
}

impl AuthError {
    /// Banner title on the login card.
    pub const BANNER_TITLE: &'static str = "Login Failed";

    /// Render this error as the login card's banner.
    #[must_use]
    pub fn banner(&self) -> Banner {
        self.banner_titled(Self::BANNER_TITLE)
    }

    /// Render this error as a banner under another page's title.
    #[must_use]
    pub fn banner_titled(&self, title: &'static str) -> Banner {
        Banner::new(title, self.to_string())
    }
}
