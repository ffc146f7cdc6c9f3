use super::*;

#[test]
fn validate_login_input_trims_email() {
    assert_eq!(
        validate_login_input("  ada@example.com ", "hunter22"),
        Ok(Credentials { email: "ada@example.com".to_owned(), password: "hunter22".to_owned() })
    );
}

#[test]
fn validate_login_input_keeps_password_verbatim() {
    let creds = validate_login_input("ada@example.com", " spaced pass ").unwrap();
    assert_eq!(creds.password, " spaced pass ");
}

#[test]
fn validate_login_input_requires_both_fields() {
    assert_eq!(validate_login_input("   ", "secret"), Err("Enter both email and password."));
    assert_eq!(validate_login_input("ada@example.com", ""), Err("Enter both email and password."));
}

#[test]
fn validate_login_input_requires_at_sign() {
    assert_eq!(validate_login_input("ada.example.com", "secret"), Err("Enter a valid email address."));
}
