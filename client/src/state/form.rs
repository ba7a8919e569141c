//! Per-page form controller.
//!
//! DESIGN
//! ======
//! Validation runs on submit; once a submit has been attempted, every edit
//! re-runs the schema so inline errors clear as the user fixes them.
//! `submitting` guards against a second submit while a mock call is in
//! flight, mirroring the disabled submit button.

#[cfg(test)]
#[path = "form_test.rs"]
mod form_test;

use crate::forms::{Field, FieldErrors, Schema};

/// Page-level message shown above a form (auth rejection, not-implemented).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Banner {
    pub title: &'static str,
    pub message: String,
}

impl Banner {
    #[must_use]
    pub fn new(title: &'static str, message: impl Into<String>) -> Self {
        Self {
            title,
            message: message.into(),
        }
    }
}

/// Field values, inline errors, and submission status for one form.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormState<V> {
    pub values: V,
    pub errors: FieldErrors,
    pub submitting: bool,
    pub attempted: bool,
    pub banner: Option<Banner>,
}

impl<V: Schema> FormState<V> {
    #[must_use]
    pub fn new(values: V) -> Self {
        Self {
            values,
            errors: FieldErrors::new(),
            submitting: false,
            attempted: false,
            banner: None,
        }
    }

    /// Apply an input change.
    pub fn edit(&mut self, change: impl FnOnce(&mut V)) {
        change(&mut self.values);
        if self.attempted {
            self.errors = self.values.validate().err().unwrap_or_default();
        }
    }

    /// Start a submit. Returns the validated payload, or `None` when a submit
    /// is already running or a rule failed (errors are recorded).
    pub fn begin_submit(&mut self) -> Option<V::Output> {
        if self.submitting {
            return None;
        }
        self.attempted = true;
        match self.values.validate() {
            Ok(output) => {
                self.errors = FieldErrors::new();
                self.banner = None;
                self.submitting = true;
                Some(output)
            }
            Err(errors) => {
                self.errors = errors;
                None
            }
        }
    }

    pub fn finish_submit(&mut self) {
        self.submitting = false;
    }

    pub fn set_banner(&mut self, banner: Banner) {
        self.banner = Some(banner);
    }

    /// Inline error for `field`, if any.
    #[must_use]
    pub fn field_error(&self, field: Field) -> Option<String> {
        self.errors.get(field).map(str::to_owned)
    }
}
