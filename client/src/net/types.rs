//! Payloads exchanged with the mock backend.
//!
//! DESIGN
//! ======
//! These are produced only by a passing [`crate::forms::Schema`] and live
//! for the duration of one submit. None of them is persisted.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use std::fmt;

use serde::{Deserialize, Serialize};

/// Login payload.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Credentials {
    pub email: String,
    pub password: String,
    #[serde(default)]
    pub remember_me: bool,
}

/// Account creation payload. Only built when both passwords match and the
/// terms were accepted.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationInput {
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub terms_accepted: bool,
}

/// Forgot-password payload.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PasswordResetRequest {
    pub email: String,
}

/// New-password payload. `token` is the `?token=` value from the reset link.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResetInput {
    pub password: String,
    pub confirm_password: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
}

/// Third-party sign-in providers offered on the login page.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SocialProvider {
    Google,
    GitHub,
}

impl SocialProvider {
    /// Buttons in display order.
    pub const ALL: [SocialProvider; 2] = [SocialProvider::Google, SocialProvider::GitHub];

    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            SocialProvider::Google => "Google",
            SocialProvider::GitHub => "GitHub",
        }
    }
}

impl fmt::Display for SocialProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}
