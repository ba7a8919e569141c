//! Forgot-password form values and rules.

#[cfg(test)]
#[path = "forgot_test.rs"]
mod forgot_test;

use super::email::is_valid_email;
use super::{Field, FieldErrors, Schema};
use crate::net::types::PasswordResetRequest;

pub const INVALID_EMAIL: &str = "Please enter a valid email address.";

/// Current contents of the forgot-password input.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ForgotPasswordForm {
    pub email: String,
}

impl Schema for ForgotPasswordForm {
    type Output = PasswordResetRequest;

    fn validate(&self) -> Result<PasswordResetRequest, FieldErrors> {
        let mut errors = FieldErrors::new();
        errors.check(is_valid_email(&self.email), Field::Email, INVALID_EMAIL);
        errors.into_result(|| PasswordResetRequest {
            email: self.email.clone(),
        })
    }
}
