use super::*;

#[test]
fn credentials_use_camel_case_keys() {
    let credentials = Credentials {
        email: "user@example.com".to_owned(),
        password: "password123".to_owned(),
        remember_me: true,
    };
    let json = serde_json::to_value(&credentials).unwrap();
    assert_eq!(json["rememberMe"], serde_json::json!(true));
}

#[test]
fn credentials_remember_me_defaults_to_false() {
    let credentials: Credentials =
        serde_json::from_str(r#"{"email":"a@b.co","password":"secret1"}"#).unwrap();
    assert!(!credentials.remember_me);
}

#[test]
fn reset_input_omits_missing_token() {
    let input = ResetInput {
        password: "new-secret".to_owned(),
        confirm_password: "new-secret".to_owned(),
        token: None,
    };
    let json = serde_json::to_value(&input).unwrap();
    assert!(json.get("token").is_none());
    assert_eq!(json["confirmPassword"], serde_json::json!("new-secret"));
}

#[test]
fn providers_display_in_button_order() {
    let names: Vec<String> = SocialProvider::ALL.iter().map(ToString::to_string).collect();
    assert_eq!(names, vec!["Google", "GitHub"]);
}
