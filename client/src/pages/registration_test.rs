use std::time::Duration;

use futures::executor::block_on;

use super::*;
use crate::forms::registration::{PASSWORDS_DO_NOT_MATCH, TERMS_REQUIRED};
use crate::state::toast::ToastKind;

fn filled() -> RegistrationForm {
    RegistrationForm {
        email: "new@example.com".to_owned(),
        password: "longenough".to_owned(),
        confirm_password: "longenough".to_owned(),
        terms_accepted: true,
    }
}

#[test]
fn valid_registration_toasts_then_redirects_to_login_after_delay() {
    let config = MockConfig::default();
    let mut form = FormState::new(filled());
    let input = form.begin_submit().expect("valid registration");
    let result = block_on(mock_api::register(&MockConfig::instant(), &input));

    let mut toasts = ToastState::default();
    let outcome = registration_outcome(result, &config, &mut toasts);

    assert_eq!(
        outcome,
        SubmitOutcome::Redirect {
            to: Page::Login,
            delay: Duration::from_millis(1500),
        }
    );
    assert_eq!(toasts.items.len(), 1);
    let toast = &toasts.items[0];
    assert_eq!(toast.kind, ToastKind::Success);
    assert_eq!(toast.title, SUCCESS_TITLE);
    assert_eq!(toast.description.as_deref(), Some(SUCCESS_DESCRIPTION));
}

#[test]
fn unticked_terms_blocks_submit_with_inline_error() {
    let mut form = FormState::new(RegistrationForm {
        terms_accepted: false,
        ..filled()
    });
    assert!(form.begin_submit().is_none());
    assert_eq!(form.field_error(Field::TermsAccepted).as_deref(), Some(TERMS_REQUIRED));
    assert!(!form.submitting);
}

#[test]
fn mismatch_error_clears_once_confirmation_is_fixed() {
    let mut form = FormState::new(RegistrationForm {
        confirm_password: "different1".to_owned(),
        ..filled()
    });
    assert!(form.begin_submit().is_none());
    assert_eq!(
        form.field_error(Field::ConfirmPassword).as_deref(),
        Some(PASSWORDS_DO_NOT_MATCH)
    );

    form.edit(|v| v.confirm_password = "longenough".to_owned());
    assert_eq!(form.field_error(Field::ConfirmPassword), None);
}

#[test]
fn submit_label_reflects_in_flight_state() {
    assert_eq!(submit_label(false), "Create Account");
    assert_eq!(submit_label(true), "Creating Account...");
}

#[test]
fn failure_banner_uses_this_page_title() {
    let mut toasts = ToastState::default();
    let outcome = registration_outcome(Err(AuthError::InvalidCredentials), &MockConfig::instant(), &mut toasts);
    let SubmitOutcome::Stay(banner) = outcome else {
        panic!("failure must not navigate");
    };
    assert_eq!(banner.title, FAILED_TITLE);
    assert_ne!(banner.title, AuthError::BANNER_TITLE);
    assert!(toasts.items.is_empty());
}
