//! Reset-password form values and rules.

#[cfg(test)]
#[path = "reset_test.rs"]
mod reset_test;

use super::{Field, FieldErrors, NEW_PASSWORD_MIN, Schema, char_len};
use crate::net::types::ResetInput;

pub const PASSWORD_TOO_SHORT: &str = "Password must be at least 8 characters.";
pub const PASSWORDS_DO_NOT_MATCH: &str = "Passwords do not match.";

/// Current contents of the reset-password inputs plus the link token, if any.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ResetPasswordForm {
    pub password: String,
    pub confirm_password: String,
    pub token: Option<String>,
}

impl Schema for ResetPasswordForm {
    type Output = ResetInput;

    fn validate(&self) -> Result<ResetInput, FieldErrors> {
        let mut errors = FieldErrors::new();
        errors.check(
            char_len(&self.password) >= NEW_PASSWORD_MIN,
            Field::Password,
            PASSWORD_TOO_SHORT,
        );
        // Mismatch outranks the length rule on the confirmation field.
        errors.check(
            self.password == self.confirm_password,
            Field::ConfirmPassword,
            PASSWORDS_DO_NOT_MATCH,
        );
        errors.check(
            char_len(&self.confirm_password) >= NEW_PASSWORD_MIN,
            Field::ConfirmPassword,
            PASSWORD_TOO_SHORT,
        );
        errors.into_result(|| ResetInput {
            password: self.password.clone(),
            confirm_password: self.confirm_password.clone(),
            token: self.token.clone(),
        })
    }
}
