//! Login form values and rules.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use super::email::is_valid_email;
use super::{Field, FieldErrors, LOGIN_PASSWORD_MIN, Schema, char_len};
use crate::net::types::Credentials;

pub const INVALID_EMAIL: &str = "Invalid email address.";
pub const PASSWORD_TOO_SHORT: &str = "Password must be at least 6 characters.";

/// Current contents of the login inputs.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
    pub remember_me: bool,
}

impl Schema for LoginForm {
    type Output = Credentials;

    fn validate(&self) -> Result<Credentials, FieldErrors> {
        let mut errors = FieldErrors::new();
        errors.check(is_valid_email(&self.email), Field::Email, INVALID_EMAIL);
        errors.check(
            char_len(&self.password) >= LOGIN_PASSWORD_MIN,
            Field::Password,
            PASSWORD_TOO_SHORT,
        );
        errors.into_result(|| Credentials {
            email: self.email.clone(),
            password: self.password.clone(),
            remember_me: self.remember_me,
        })
    }
}
