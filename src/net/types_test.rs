use super::*;

fn doc(source: &str) -> Document {
    Document {
        document_id: "d1".to_owned(),
        name: "notes.txt".to_owned(),
        source: source.to_owned(),
    }
}

// =============================================================
// Envelope
// =============================================================

#[test]
fn envelope_deserializes_data_and_message() {
    let envelope: Envelope<TokenData> =
        serde_json::from_str(r#"{"data":{"token":"abc"},"message":"ok","success":true}"#).unwrap();
    assert_eq!(envelope.data.unwrap().token, "abc");
    assert_eq!(envelope.message.as_deref(), Some("ok"));
    assert_eq!(envelope.success, Some(true));
}

#[test]
fn envelope_tolerates_missing_optional_fields() {
    let envelope: Envelope<BotsData> = serde_json::from_str(r#"{"data":{"bots":[]}}"#).unwrap();
    assert!(envelope.data.unwrap().bots.is_empty());
    assert_eq!(envelope.message, None);
    assert_eq!(envelope.success, None);
}

// =============================================================
// Bot / Document wire shapes
// =============================================================

#[test]
fn bot_uses_camel_case_keys() {
    let bot: Bot = serde_json::from_str(r#"{"botId":"b1","botName":"Support"}"#).unwrap();
    assert_eq!(bot.bot_id, "b1");
    assert_eq!(bot.bot_name, "Support");

    let round_trip = serde_json::to_value(&bot).unwrap();
    assert_eq!(round_trip["botId"], "b1");
    assert_eq!(round_trip["botName"], "Support");
}

#[test]
fn documents_data_defaults_to_empty_page() {
    let data: DocumentsData = serde_json::from_str("{}").unwrap();
    assert!(data.document_data.is_empty());
}

#[test]
fn document_distinguishes_uploaded_from_linked() {
    assert!(doc(UPLOADED_SOURCE).is_uploaded());
    assert!(!doc("https://example.com/faq").is_uploaded());
}

// =============================================================
// Config / query payloads
// =============================================================

#[test]
fn bot_config_data_reads_absent_config_as_none() {
    let data: BotConfigData = serde_json::from_str(r#"{"botConfig":null}"#).unwrap();
    assert_eq!(data.bot_config, None);
}

#[test]
fn bot_config_fields_stay_textual() {
    let data: BotConfigData = serde_json::from_str(
        r#"{"botConfig":{"model_name":"gpt","model_provider":"openai","api_key":"x","temperature":"0.5"}}"#,
    )
    .unwrap();
    let config = data.bot_config.unwrap();
    assert_eq!(config.temperature, "0.5");
}

#[test]
fn query_data_handles_nested_query_result() {
    let data: QueryData =
        serde_json::from_str(r#"{"data":{"queryResult":{"response":"hi"}}}"#).unwrap();
    assert_eq!(
        data.data.query_result.unwrap()["response"],
        serde_json::json!("hi")
    );
}

#[test]
fn query_data_tolerates_missing_query_result() {
    let data: QueryData = serde_json::from_str(r#"{"data":{}}"#).unwrap();
    assert_eq!(data.data.query_result, None);
}
