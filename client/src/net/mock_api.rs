//! In-process mock of the auth backend.
//!
//! Every call awaits [`crate::util::latency::simulate`] first so the UI sees
//! a realistic in-flight period, then resolves deterministically:
//!
//! - `login` accepts only the configured demo pair;
//! - `request_password_reset` accepts any address and never reveals whether
//!   an account exists;
//! - `reset_password` accepts any token, or none;
//! - `register` accepts any valid input and stores nothing;
//! - `social_login` is not implemented for any provider.
//!
//! ERROR HANDLING
//! ==============
//! Failures come back as [`AuthError`]; nothing here panics or retries.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "mock_api_test.rs"]
mod mock_api_test;

use super::types::{Credentials, PasswordResetRequest, RegistrationInput, ResetInput, SocialProvider};
use crate::config::MockConfig;
use crate::error::AuthError;
use crate::util::latency;

/// Compare credentials against the demo pair. Exact, case-sensitive match.
///
/// # Errors
///
/// Returns [`AuthError::InvalidCredentials`] on any mismatch.
pub fn check_credentials(config: &MockConfig, credentials: &Credentials) -> Result<(), AuthError> {
    if credentials.email == config.demo_email && credentials.password == config.demo_password {
        Ok(())
    } else {
        Err(AuthError::InvalidCredentials)
    }
}

/// Simulated `POST /login`.
///
/// # Errors
///
/// Returns [`AuthError::InvalidCredentials`] unless the demo pair was given.
pub async fn login(config: &MockConfig, credentials: &Credentials) -> Result<(), AuthError> {
    latency::simulate(config.submit_latency).await;
    check_credentials(config, credentials)
}

/// Simulated account creation. Resolves without delay; the page delays the
/// redirect instead.
///
/// # Errors
///
/// Never fails; the signature leaves room for a real backend.
pub async fn register(_config: &MockConfig, input: &RegistrationInput) -> Result<(), AuthError> {
    log::debug!("mock register accepted for {}", input.email);
    Ok(())
}

/// Simulated reset-link request.
///
/// # Errors
///
/// Never fails.
pub async fn request_password_reset(
    config: &MockConfig,
    request: &PasswordResetRequest,
) -> Result<(), AuthError> {
    latency::simulate(config.submit_latency).await;
    log::debug!("mock reset link requested for {}", request.email);
    Ok(())
}

/// Simulated new-password submission.
///
/// # Errors
///
/// Never fails.
pub async fn reset_password(config: &MockConfig, input: &ResetInput) -> Result<(), AuthError> {
    latency::simulate(config.submit_latency).await;
    log::debug!("mock password reset (token present: {})", input.token.is_some());
    Ok(())
}

/// Third-party sign-in.
///
/// # Errors
///
/// Always returns [`AuthError::NotImplemented`].
pub fn social_login(provider: SocialProvider) -> Result<(), AuthError> {
    Err(AuthError::NotImplemented(provider))
}
