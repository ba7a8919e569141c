//! Registration form values and rules.

#[cfg(test)]
#[path = "registration_test.rs"]
mod registration_test;

use super::email::is_valid_email;
use super::{Field, FieldErrors, NEW_PASSWORD_MIN, Schema, char_len};
use crate::net::types::RegistrationInput;

pub const INVALID_EMAIL: &str = "Invalid email address.";
pub const PASSWORD_TOO_SHORT: &str = "Password must be at least 8 characters.";
pub const PASSWORDS_DO_NOT_MATCH: &str = "Passwords do not match.";
pub const TERMS_REQUIRED: &str = "You must accept the terms and conditions.";

/// Current contents of the registration inputs.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RegistrationForm {
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub terms_accepted: bool,
}

impl Schema for RegistrationForm {
    type Output = RegistrationInput;

    fn validate(&self) -> Result<RegistrationInput, FieldErrors> {
        let mut errors = FieldErrors::new();
        errors.check(is_valid_email(&self.email), Field::Email, INVALID_EMAIL);
        errors.check(
            char_len(&self.password) >= NEW_PASSWORD_MIN,
            Field::Password,
            PASSWORD_TOO_SHORT,
        );
        errors.check(
            self.password == self.confirm_password,
            Field::ConfirmPassword,
            PASSWORDS_DO_NOT_MATCH,
        );
        errors.check(self.terms_accepted, Field::TermsAccepted, TERMS_REQUIRED);
        errors.into_result(|| RegistrationInput {
            email: self.email.clone(),
            password: self.password.clone(),
            confirm_password: self.confirm_password.clone(),
            terms_accepted: self.terms_accepted,
        })
    }
}
