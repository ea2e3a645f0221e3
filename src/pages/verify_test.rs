use super::*;

fn api_err(status: u16) -> ApiError {
    ApiError::Api {
        status,
        message: "server text".to_owned(),
    }
}

#[test]
fn invalid_otp_keeps_the_form_up() {
    assert_eq!(
        verify_error_action(&api_err(400)),
        VerifyAction::ShowMessage("Invalid OTP. Please try again.".to_owned())
    );
}

#[test]
fn unknown_user_keeps_the_form_up() {
    assert_eq!(
        verify_error_action(&api_err(404)),
        VerifyAction::ShowMessage("User not found. Please register again.".to_owned())
    );
}

#[test]
fn too_many_attempts_restarts_signup() {
    assert_eq!(
        verify_error_action(&api_err(429)),
        VerifyAction::RestartSignup("Too many attempts. Signup Again.".to_owned())
    );
}

#[test]
fn other_statuses_surface_server_message() {
    assert_eq!(
        verify_error_action(&api_err(500)),
        VerifyAction::ShowMessage("server text".to_owned())
    );
}

#[test]
fn transport_failure_surfaces_generic_message() {
    let err = ApiError::Transport("offline".to_owned());
    assert_eq!(
        verify_error_action(&err),
        VerifyAction::ShowMessage(crate::net::error::GENERIC_FAILURE.to_owned())
    );
}
