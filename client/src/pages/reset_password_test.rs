use futures::executor::block_on;

use super::*;
use crate::forms::reset::{PASSWORD_TOO_SHORT, PASSWORDS_DO_NOT_MATCH};

fn form(password: &str, confirm: &str, token: Option<&str>) -> FormState<ResetPasswordForm> {
    FormState::new(ResetPasswordForm {
        password: password.to_owned(),
        confirm_password: confirm.to_owned(),
        token: token.map(str::to_owned),
    })
}

#[test]
fn matching_passwords_reset_and_return_to_login_immediately() {
    let mut form = form("brandnew1", "brandnew1", Some("abc123"));
    let input = form.begin_submit().expect("valid reset");
    assert_eq!(input.token.as_deref(), Some("abc123"));

    let result = block_on(mock_api::reset_password(&MockConfig::instant(), &input));
    let mut toasts = ToastState::default();
    let outcome = reset_outcome(result, &mut toasts);

    assert_eq!(outcome, SubmitOutcome::redirect_now(Page::Login));
    assert_eq!(toasts.items.len(), 1);
    assert_eq!(toasts.items[0].title, RESET_TITLE);
}

#[test]
fn missing_token_is_still_accepted() {
    let mut form = form("brandnew1", "brandnew1", None);
    let input = form.begin_submit().expect("valid reset");
    let result = block_on(mock_api::reset_password(&MockConfig::instant(), &input));
    assert!(result.is_ok());
}

#[test]
fn mismatch_is_reported_on_confirmation_even_when_short() {
    let mut form = form("brandnew1", "short", None);
    assert!(form.begin_submit().is_none());
    assert_eq!(
        form.field_error(Field::ConfirmPassword).as_deref(),
        Some(PASSWORDS_DO_NOT_MATCH)
    );
    assert_eq!(form.field_error(Field::Password), None);
}

#[test]
fn short_matching_passwords_fail_length_rule() {
    let mut form = form("short", "short", None);
    assert!(form.begin_submit().is_none());
    assert_eq!(form.field_error(Field::Password).as_deref(), Some(PASSWORD_TOO_SHORT));
}

#[test]
fn blank_token_query_is_absent() {
    assert_eq!(reset_token(Some("  ".to_owned())), None);
    assert_eq!(reset_token(None), None);
    assert_eq!(reset_token(Some("tok".to_owned())).as_deref(), Some("tok"));
}

#[test]
fn submit_label_reflects_in_flight_state() {
    assert_eq!(submit_label(false), "Reset Password");
    assert_eq!(submit_label(true), "Resetting Password...");
}

#[test]
fn failure_banner_uses_this_page_title() {
    let mut toasts = ToastState::default();
    let outcome = reset_outcome(Err(AuthError::InvalidCredentials), &mut toasts);
    let SubmitOutcome::Stay(banner) = outcome else {
        panic!("failure must not navigate");
    };
    assert_eq!(banner.title, FAILED_TITLE);
    assert_ne!(banner.title, AuthError::BANNER_TITLE);
    assert!(toasts.items.is_empty());
}
