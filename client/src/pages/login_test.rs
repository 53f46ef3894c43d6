use super::*;

#[test]
fn validate_login_input_trims_username() {
    assert_eq!(validate_login_input("  admin  ", "secret"), Ok(("admin".to_owned(), "secret".to_owned())));
}

#[test]
fn validate_login_input_keeps_password_whitespace() {
    assert_eq!(validate_login_input("admin", " pw "), Ok(("admin".to_owned(), " pw ".to_owned())));
}

#[test]
fn validate_login_input_requires_both_fields() {
    assert_eq!(validate_login_input("   ", "secret"), Err(MISSING_FIELDS));
    assert_eq!(validate_login_input("admin", ""), Err(MISSING_FIELDS));
}
