//! Declarative form schemas.
//!
//! DESIGN
//! ======
//! Each page owns a plain value struct (what the inputs currently hold) that
//! implements [`Schema`]. Validation is synchronous and total: it either
//! produces the typed payload for the mock backend or a [`FieldErrors`] map
//! keyed by field. Only the first failing rule per field is kept, which is
//! what the inline error slot under each input can show.

pub mod email;
pub mod forgot;
pub mod login;
pub mod registration;
pub mod reset;


use std::collections::BTreeMap;

pub use forgot::ForgotPasswordForm;
pub use login::LoginForm;
pub use registration::RegistrationForm;
pub use reset::ResetPasswordForm;

/// Minimum password length on the login form.
pub const LOGIN_PASSWORD_MIN: usize = 6;

/// Minimum password length when choosing a new password.
pub const NEW_PASSWORD_MIN: usize = 8;

/// Form fields that can carry an inline error.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    Email,
    Password,
    ConfirmPassword,
    TermsAccepted,
}

impl Field {
    /// Field name as used in the markup (`name` / `id` attributes).
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Field::Email => "email",
            Field::Password => "password",
            Field::ConfirmPassword => "confirmPassword",
            Field::TermsAccepted => "termsAccepted",
        }
    }
}

/// Per-field validation messages. Empty means the form is acceptable.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FieldErrors(BTreeMap<Field, String>);

impl FieldErrors {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `message` for `field` unless the field already has one.
    pub fn insert(&mut self, field: Field, message: impl Into<String>) {
        self.0.entry(field).or_insert_with(|| message.into());
    }

    /// Record `message` only when `ok` is false.
    pub fn check(&mut self, ok: bool, field: Field, message: &str) {
        if !ok {
            self.insert(field, message);
        }
    }

    #[must_use]
    pub fn get(&self, field: Field) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    #[must_use]
    pub fn contains(&self, field: Field) -> bool {
        self.0.contains_key(&field)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// `Ok(value)` when no errors were recorded, otherwise `Err(self)`.
    ///
    /// # Errors
    ///
    /// Returns the collected errors if any field failed.
    pub fn into_result<T>(self, value: impl FnOnce() -> T) -> Result<T, FieldErrors> {
        if self.is_empty() { Ok(value()) } else { Err(self) }
    }
}

/// A set of form values with synchronous validation rules.
pub trait Schema {
    /// Typed payload produced when every rule passes.
    type Output;

    /// Run every rule against the current values.
    ///
    /// # Errors
    ///
    /// Returns the per-field messages when any rule fails.
    fn validate(&self) -> Result<Self::Output, FieldErrors>;
}

/// Length in Unicode scalar values, the unit password minimums are stated in.
pub(crate) fn char_len(value: &str) -> usize {
    value.chars().count()
}
