use super::*;

const NOW: f64 = 1_700_000_000_000.0;

// =============================================================
// Issue + freshness
// =============================================================

#[test]
fn issue_attaches_one_hour_expiry() {
    let session = Session::issue("tok", NOW);
    assert_eq!(session.token, "tok");
    assert_eq!(session.expires_at, NOW + SESSION_TTL_MS);
}

#[test]
fn fresh_until_and_including_expiry_instant() {
    let session = Session::issue("tok", NOW);
    assert!(session.is_fresh(NOW));
    assert!(session.is_fresh(NOW + SESSION_TTL_MS));
    assert!(!session.is_fresh(NOW + SESSION_TTL_MS + 1.0));
}

// =============================================================
// parse_stored: absent / malformed / stale all read as None
// =============================================================

#[test]
fn parse_stored_round_trips_fresh_record() {
    let stored = serde_json::to_string(&Session::issue("tok", NOW)).unwrap();
    let session = parse_stored(&stored, NOW + 1_000.0).unwrap();
    assert_eq!(session.token, "tok");
}

#[test]
fn parse_stored_rejects_malformed_json() {
    assert_eq!(parse_stored("{not json", NOW), None);
    assert_eq!(parse_stored(r#"{"token":"tok"}"#, NOW), None);
}

#[test]
fn parse_stored_rejects_stale_record() {
    let stored = serde_json::to_string(&Session::issue("tok", NOW)).unwrap();
    assert_eq!(parse_stored(&stored, NOW + SESSION_TTL_MS + 1.0), None);
}

#[test]
fn stored_shape_uses_camel_case_expiry_key() {
    let raw = serde_json::to_value(Session::issue("tok", NOW)).unwrap();
    assert!(raw.get("expiresAt").is_some());
    assert!(raw.get("expires_at").is_none());
}
