use super::*;

fn identity() -> BotIdentity {
    BotIdentity {
        id: "b42".to_owned(),
        name: "Support".to_owned(),
    }
}

// =============================================================
// Single in-flight submission guard
// =============================================================

#[test]
fn try_begin_claims_the_slot_once() {
    let mut state = IngestState::default();
    assert!(state.try_begin());
    assert!(!state.try_begin());
    state.finish();
    assert!(state.try_begin());
}

// =============================================================
// Payload shaping
// =============================================================

#[test]
fn raw_text_only_submission_sends_one_entry_and_empty_kinds() {
    let payload = sources_payload("some pasted text", "", "");
    assert_eq!(payload["rawText"], serde_json::json!(["some pasted text"]));
    assert_eq!(payload["urls"], serde_json::json!([]));
    assert_eq!(payload["files"], serde_json::json!([]));
}

#[test]
fn each_kind_is_independent() {
    let payload = sources_payload("", "https://example.com", "https://cdn.example.com/a.pdf");
    assert_eq!(payload["rawText"], serde_json::json!([]));
    assert_eq!(payload["urls"], serde_json::json!(["https://example.com"]));
    assert_eq!(payload["files"], serde_json::json!(["https://cdn.example.com/a.pdf"]));
}

#[test]
fn whitespace_only_source_counts_as_empty() {
    let payload = sources_payload("   ", "\t", "");
    assert_eq!(payload["rawText"], serde_json::json!([]));
    assert_eq!(payload["urls"], serde_json::json!([]));
}

#[test]
fn non_empty_source_is_sent_untrimmed() {
    let payload = sources_payload("  padded text  ", "", "");
    assert_eq!(payload["rawText"], serde_json::json!(["  padded text  "]));
}

#[test]
fn full_payload_carries_identity_and_name() {
    let payload = add_content_payload(&identity(), "FAQ", "text", "", "");
    assert_eq!(payload["botId"], "b42");
    assert_eq!(payload["botName"], "Support");
    assert_eq!(payload["name"], "FAQ");
    assert_eq!(payload["sources"]["rawText"], serde_json::json!(["text"]));
}
