use super::*;

fn form(email: &str, password: &str) -> LoginForm {
    LoginForm {
        email: email.to_owned(),
        password: password.to_owned(),
        remember_me: false,
    }
}

#[test]
fn valid_input_produces_credentials() {
    let mut values = form("user@example.com", "password123");
    values.remember_me = true;
    let credentials = values.validate().expect("valid login form");
    assert_eq!(credentials.email, "user@example.com");
    assert_eq!(credentials.password, "password123");
    assert!(credentials.remember_me);
}

#[test]
fn malformed_email_reports_email_error() {
    let errors = form("not-an-email", "password123").validate().unwrap_err();
    assert_eq!(errors.get(Field::Email), Some(INVALID_EMAIL));
    assert!(!errors.contains(Field::Password));
}

#[test]
fn six_character_password_is_enough() {
    assert!(form("user@example.com", "abcdef").validate().is_ok());
}

#[test]
fn five_character_password_is_rejected() {
    let errors = form("user@example.com", "abcde").validate().unwrap_err();
    assert_eq!(errors.get(Field::Password), Some(PASSWORD_TOO_SHORT));
}

#[test]
fn empty_form_reports_both_fields() {
    let errors = LoginForm::default().validate().unwrap_err();
    assert_eq!(errors.len(), 2);
}
