use super::*;

// =============================================================
// Password policy
// =============================================================

#[test]
fn strong_password_passes() {
    assert_eq!(password_policy_error("Str0ng!pass"), None);
}

#[test]
fn short_password_fails() {
    assert!(password_policy_error("S1!a").is_some());
}

#[test]
fn missing_uppercase_fails() {
    assert!(password_policy_error("weak1!pass").is_some());
}

#[test]
fn missing_lowercase_fails() {
    assert!(password_policy_error("WEAK1!PASS").is_some());
}

#[test]
fn missing_digit_fails() {
    assert!(password_policy_error("Weakest!pass").is_some());
}

#[test]
fn missing_special_character_fails() {
    assert!(password_policy_error("Weak1pass").is_some());
}

// =============================================================
// Form validation + error mapping
// =============================================================

#[test]
fn validate_signup_input_requires_both_fields() {
    assert_eq!(
        validate_signup_input(" ada ", " ada@example.com "),
        Ok(("ada".to_owned(), "ada@example.com".to_owned()))
    );
    assert_eq!(
        validate_signup_input("", "ada@example.com"),
        Err("Enter both username and email.")
    );
}

#[test]
fn conflict_maps_to_already_registered() {
    let err = ApiError::Api {
        status: 409,
        message: "conflict".to_owned(),
    };
    assert_eq!(signup_error_message(&err), "Email is already registered");
}

#[test]
fn other_failures_surface_server_message() {
    let err = ApiError::Api {
        status: 500,
        message: "mailer offline".to_owned(),
    };
    assert_eq!(signup_error_message(&err), "mailer offline");
}
