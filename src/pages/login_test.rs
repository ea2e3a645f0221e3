use super::*;

#[test]
fn validate_login_input_trims_email_and_requires_both() {
    assert_eq!(
        validate_login_input("  user@example.com ", "hunter2!"),
        Ok(("user@example.com".to_owned(), "hunter2!".to_owned()))
    );
    assert_eq!(
        validate_login_input("   ", "hunter2!"),
        Err("Enter both email and password.")
    );
    assert_eq!(
        validate_login_input("user@example.com", ""),
        Err("Enter both email and password.")
    );
}

#[test]
fn unknown_user_gets_signup_hint() {
    let err = ApiError::Api {
        status: 404,
        message: "not found".to_owned(),
    };
    assert_eq!(
        login_error_message(&err),
        "User not found. Please sign up first or check your email/password."
    );
}

#[test]
fn other_api_failures_surface_server_message() {
    let err = ApiError::Api {
        status: 500,
        message: "database down".to_owned(),
    };
    assert_eq!(login_error_message(&err), "database down");
}

#[test]
fn transport_failures_surface_generic_message() {
    let err = ApiError::Transport("offline".to_owned());
    assert_eq!(login_error_message(&err), crate::net::error::GENERIC_FAILURE);
}
