use super::*;

// =============================================================
// error_message extraction
// =============================================================

#[test]
fn error_message_reads_server_message_field() {
    assert_eq!(error_message(r#"{"message":"Bot not found"}"#), "Bot not found");
}

#[test]
fn error_message_falls_back_on_missing_field() {
    assert_eq!(error_message(r#"{"status":"error"}"#), GENERIC_FAILURE);
}

#[test]
fn error_message_falls_back_on_unparseable_body() {
    assert_eq!(error_message("<html>502</html>"), GENERIC_FAILURE);
}

#[test]
fn error_message_falls_back_on_empty_message() {
    assert_eq!(error_message(r#"{"message":""}"#), GENERIC_FAILURE);
}

// =============================================================
// error_for_status mapping
// =============================================================

#[test]
fn unauthorized_statuses_map_to_unauthenticated() {
    assert_eq!(error_for_status(401, "{}"), ApiError::Unauthenticated);
    assert_eq!(error_for_status(403, "{}"), ApiError::Unauthenticated);
}

#[test]
fn other_statuses_keep_server_message() {
    assert_eq!(
        error_for_status(409, r#"{"message":"Email is already registered"}"#),
        ApiError::Api {
            status: 409,
            message: "Email is already registered".to_owned(),
        }
    );
}

#[test]
fn user_message_prefers_server_text() {
    let err = ApiError::Api {
        status: 500,
        message: "backend exploded".to_owned(),
    };
    assert_eq!(err.user_message(), "backend exploded");
}

#[test]
fn transport_user_message_is_generic() {
    let err = ApiError::Transport("dns failure".to_owned());
    assert_eq!(err.user_message(), GENERIC_FAILURE);
}

#[test]
fn validation_user_message_is_the_local_notice() {
    let err = ApiError::Validation("Enter a bot name first.".to_owned());
    assert_eq!(err.user_message(), "Enter a bot name first.");
}

#[test]
fn status_accessor_only_reports_api_failures() {
    assert_eq!(error_for_status(404, "{}").status(), Some(404));
    assert_eq!(ApiError::Unauthenticated.status(), None);
}
