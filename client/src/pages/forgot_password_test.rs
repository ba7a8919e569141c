use std::time::Duration;

use futures::executor::block_on;

use super::*;
use crate::forms::forgot::INVALID_EMAIL;

fn outcome_for(email: &str) -> (SubmitOutcome, ToastState) {
    let mut form = FormState::new(ForgotPasswordForm {
        email: email.to_owned(),
    });
    let request = form.begin_submit().expect("valid email");
    let result = block_on(mock_api::request_password_reset(&MockConfig::instant(), &request));
    let mut toasts = ToastState::default();
    let outcome = forgot_outcome(result, &MockConfig::default(), &mut toasts);
    (outcome, toasts)
}

#[test]
fn request_toasts_and_redirects_to_login_after_two_seconds() {
    let (outcome, toasts) = outcome_for("someone@example.com");
    assert_eq!(
        outcome,
        SubmitOutcome::Redirect {
            to: Page::Login,
            delay: Duration::from_millis(2000),
        }
    );
    assert_eq!(toasts.items[0].title, SENT_TITLE);
    assert_eq!(toasts.items[0].description.as_deref(), Some(SENT_DESCRIPTION));
}

#[test]
fn response_does_not_depend_on_whether_the_account_exists() {
    let (known, known_toasts) = outcome_for("user@example.com");
    let (unknown, unknown_toasts) = outcome_for("nobody@example.org");
    assert_eq!(known, unknown);
    assert_eq!(known_toasts.items[0].title, unknown_toasts.items[0].title);
}

#[test]
fn malformed_email_shows_inline_error() {
    let mut form = FormState::new(ForgotPasswordForm {
        email: "not-an-email".to_owned(),
    });
    assert!(form.begin_submit().is_none());
    assert_eq!(form.field_error(Field::Email).as_deref(), Some(INVALID_EMAIL));
}

#[test]
fn submit_label_reflects_in_flight_state() {
    assert_eq!(submit_label(false), "Send Reset Link");
    assert_eq!(submit_label(true), "Sending...");
}

#[test]
fn failure_banner_uses_this_page_title() {
    let mut toasts = ToastState::default();
    let outcome = forgot_outcome(Err(AuthError::InvalidCredentials), &MockConfig::instant(), &mut toasts);
    let SubmitOutcome::Stay(banner) = outcome else {
        panic!("failure must not navigate");
    };
    assert_eq!(banner.title, FAILED_TITLE);
    assert_ne!(banner.title, AuthError::BANNER_TITLE);
    assert!(toasts.items.is_empty());
}
