use super::*;

#[test]
fn hidden_password_uses_password_input_type() {
    assert_eq!(input_type(false), "password");
    assert_eq!(toggle_label(false), "Show password");
}

#[test]
fn visible_password_uses_text_input_type() {
    assert_eq!(input_type(true), "text");
    assert_eq!(toggle_label(true), "Hide password");
}
