use futures::executor::block_on;

use super::*;
use crate::config::AUTH_FLAG_KEY;
use crate::net::types::Credentials;
use crate::pages::settle;
use crate::util::storage::MemoryStorage;

fn submit_form(
    email: &str,
    password: &str,
    store: &MemoryStorage,
) -> (SubmitOutcome, SessionState, FormState<LoginForm>) {
    let mut form = FormState::new(LoginForm {
        email: email.to_owned(),
        password: password.to_owned(),
        remember_me: false,
    });
    let mut session = SessionState::restore(store);
    let credentials: Credentials = form.begin_submit().expect("valid-shaped credentials");
    let result = block_on(mock_api::login(&MockConfig::instant(), &credentials));
    let outcome = login_outcome(result, &mut session, store);
    settle(&mut form, &outcome);
    (outcome, session, form)
}

fn submit(email: &str, password: &str, store: &MemoryStorage) -> (SubmitOutcome, SessionState) {
    let (outcome, session, _) = submit_form(email, password, store);
    (outcome, session)
}

#[test]
fn demo_credentials_navigate_to_dashboard_and_set_flag() {
    let store = MemoryStorage::new();
    let (outcome, session) = submit("user@example.com", "password123", &store);
    assert_eq!(outcome, SubmitOutcome::redirect_now(Page::Dashboard));
    assert_eq!(outcome.destination().map(Page::path), Some("/dashboard"));
    assert!(session.is_logged_in());
    assert_eq!(store.get(AUTH_FLAG_KEY).as_deref(), Some("true"));
}

#[test]
fn other_credentials_show_banner_and_leave_flag_unset() {
    for (email, password) in [
        ("user@example.com", "wrong-password"),
        ("someone@example.com", "password123"),
    ] {
        let store = MemoryStorage::new();
        let (outcome, session) = submit(email, password, &store);
        let SubmitOutcome::Stay(banner) = outcome else {
            panic!("expected rejection for {email}");
        };
        assert!(banner.message.contains("Invalid email or password"));
        assert_eq!(banner.title, "Login Failed");
        assert!(!session.is_logged_in());
        assert_eq!(store.get(AUTH_FLAG_KEY), None);
    }
}

#[test]
fn rejection_allows_another_attempt() {
    let store = MemoryStorage::new();
    let (first, _) = submit("user@example.com", "wrong-password", &store);
    assert!(first.destination().is_none());
    let (second, _) = submit("user@example.com", "password123", &store);
    assert_eq!(second.destination(), Some(Page::Dashboard));
}

#[test]
fn malformed_email_never_reaches_the_backend() {
    let mut form = FormState::new(LoginForm {
        email: "user-at-example.com".to_owned(),
        password: "password123".to_owned(),
        remember_me: false,
    });
    assert!(form.begin_submit().is_none());
    assert!(form.field_error(Field::Email).is_some());
}

#[test]
fn social_login_banner_names_provider() {
    let err = mock_api::social_login(SocialProvider::Google).unwrap_err();
    assert_eq!(
        err.banner().message,
        "Social login with Google is not yet implemented."
    );
}

#[test]
fn submit_label_reflects_in_flight_state() {
    assert_eq!(submit_label(false), "Login");
    assert_eq!(submit_label(true), "Logging in...");
}

#[test]
fn rejection_reenables_submit_and_shows_banner() {
    let (_, _, form) = submit_form("user@example.com", "wrong-password", &MemoryStorage::new());
    assert!(!form.submitting);
    assert_eq!(form.banner.map(|b| b.title), Some(AuthError::BANNER_TITLE));
}

#[test]
fn success_keeps_submit_disabled_until_navigation() {
    let (_, _, form) = submit_form("user@example.com", "password123", &MemoryStorage::new());
    assert!(form.submitting);
    assert!(form.banner.is_none());
}
