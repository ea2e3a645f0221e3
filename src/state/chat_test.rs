use super::*;

// =============================================================
// Local validation
// =============================================================

#[test]
fn whitespace_only_query_is_rejected_locally() {
    let state = ChatState::default();
    assert_eq!(state.prepare_query("   \t  "), None);
    assert!(state.transcript.is_empty());
}

#[test]
fn query_is_trimmed_before_submission() {
    let state = ChatState::default();
    assert_eq!(state.prepare_query("  what is this?  "), Some("what is this?".to_owned()));
}

#[test]
fn ask_while_searching_is_ignored() {
    // One-in-flight-at-a-time is a deliberate choice over the upstream
    // behavior of letting overlapping queries race in resolution order.
    let mut state = ChatState::default();
    state.begin();
    assert_eq!(state.prepare_query("second question"), None);
}

// =============================================================
// Transcript accumulation
// =============================================================

#[test]
fn success_appends_in_order_and_clears_flag() {
    let mut state = ChatState::default();
    state.begin();
    state.push_exchange("first".to_owned(), &serde_json::json!({ "response": "one" }));
    state.begin();
    state.push_exchange("second".to_owned(), &serde_json::json!({ "response": "two" }));

    assert!(!state.searching);
    let queries: Vec<&str> = state.transcript.iter().map(|e| e.query.as_str()).collect();
    assert_eq!(queries, ["first", "second"]);
}

#[test]
fn failure_leaves_transcript_untouched() {
    let mut state = ChatState::default();
    state.begin();
    state.push_exchange("kept".to_owned(), &serde_json::json!({ "response": "yes" }));
    state.begin();
    state.fail();

    assert!(!state.searching);
    assert_eq!(state.transcript.len(), 1);
}

// =============================================================
// Response normalization
// =============================================================

#[test]
fn normalize_converts_literal_newline_escapes() {
    assert_eq!(normalize_response("line one\\nline two"), "line one\nline two");
}

#[test]
fn normalize_is_idempotent_on_real_newlines() {
    assert_eq!(normalize_response("already\nsplit"), "already\nsplit");
}

#[test]
fn response_text_normalizes_string_responses() {
    let result = serde_json::json!({ "response": "a\\nb" });
    assert_eq!(response_text(&result), "a\nb");
}

#[test]
fn response_text_falls_back_to_json_for_non_string_shapes() {
    let result = serde_json::json!({ "response": { "parts": [1, 2] } });
    let text = response_text(&result);
    assert!(text.contains("parts"));
}

#[test]
fn response_text_falls_back_when_field_is_missing() {
    let result = serde_json::json!({ "answer": "elsewhere" });
    assert_eq!(response_text(&result), r#"{"answer":"elsewhere"}"#);
}
