use super::*;

fn valid() -> RegistrationForm {
    RegistrationForm {
        email: "new@example.com".to_owned(),
        password: "longenough".to_owned(),
        confirm_password: "longenough".to_owned(),
        terms_accepted: true,
    }
}

#[test]
fn valid_input_is_accepted() {
    let input = valid().validate().expect("valid registration");
    assert_eq!(input.email, "new@example.com");
    assert!(input.terms_accepted);
}

#[test]
fn mismatched_confirmation_reports_on_confirm_field() {
    for (password, confirm) in [
        ("longenough", "longenougH"),
        ("longenough", ""),
        ("short", "shorter"),
        ("", "anything-else"),
    ] {
        let form = RegistrationForm {
            password: password.to_owned(),
            confirm_password: confirm.to_owned(),
            ..valid()
        };
        let errors = form.validate().unwrap_err();
        assert_eq!(
            errors.get(Field::ConfirmPassword),
            Some(PASSWORDS_DO_NOT_MATCH),
            "pair {password:?}/{confirm:?}"
        );
        assert_ne!(errors.get(Field::Password), Some(PASSWORDS_DO_NOT_MATCH));
    }
}

#[test]
fn mismatch_is_reported_alongside_other_field_errors() {
    let form = RegistrationForm {
        email: "bad".to_owned(),
        confirm_password: "different".to_owned(),
        ..valid()
    };
    let errors = form.validate().unwrap_err();
    assert!(errors.contains(Field::Email));
    assert!(errors.contains(Field::ConfirmPassword));
}

#[test]
fn seven_character_password_is_rejected() {
    let form = RegistrationForm {
        password: "1234567".to_owned(),
        confirm_password: "1234567".to_owned(),
        ..valid()
    };
    let errors = form.validate().unwrap_err();
    assert_eq!(errors.get(Field::Password), Some(PASSWORD_TOO_SHORT));
    assert!(!errors.contains(Field::ConfirmPassword));
}

#[test]
fn terms_must_be_accepted() {
    let form = RegistrationForm {
        terms_accepted: false,
        ..valid()
    };
    let errors = form.validate().unwrap_err();
    assert_eq!(errors.get(Field::TermsAccepted), Some(TERMS_REQUIRED));
    assert_eq!(errors.len(), 1);
}
