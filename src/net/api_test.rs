use super::*;

fn identity() -> BotIdentity {
    BotIdentity {
        id: "b42".to_owned(),
        name: "Support Bot".to_owned(),
    }
}

#[test]
fn endpoint_passes_paths_through_without_base_url() {
    assert_eq!(endpoint("/api/bot/getBots"), "/api/bot/getBots");
}

#[test]
fn create_bot_path_encodes_the_name() {
    assert_eq!(create_bot_path("My Bot"), "/api/bot/createBot?name=My%20Bot");
}

#[test]
fn documents_payload_carries_identity_page_and_limit() {
    let payload = documents_payload(&identity(), 3);
    assert_eq!(payload["botId"], "b42");
    assert_eq!(payload["botName"], "Support Bot");
    assert_eq!(payload["page"], 3);
    assert_eq!(payload["limit"], 10);
}

#[test]
fn config_request_payload_uses_name_key() {
    let payload = config_request_payload(&identity());
    assert_eq!(payload["botId"], "b42");
    assert_eq!(payload["name"], "Support Bot");
}

#[test]
fn save_config_payload_flattens_config_beside_identity() {
    let config = BotConfig {
        model_name: "gpt".to_owned(),
        model_provider: "openai".to_owned(),
        api_key: "x".to_owned(),
        temperature: "0.5".to_owned(),
    };
    let payload = save_config_payload(&identity(), &config);
    assert_eq!(payload["model_name"], "gpt");
    assert_eq!(payload["temperature"], "0.5");
    assert_eq!(payload["botId"], "b42");
    assert_eq!(payload["botName"], "Support Bot");
}

#[test]
fn delete_bot_payload_uses_name_key() {
    let payload = delete_bot_payload("b1", "Helper");
    assert_eq!(payload["botId"], "b1");
    assert_eq!(payload["name"], "Helper");
}

#[test]
fn delete_document_payload_names_both_doc_fields() {
    let payload = delete_document_payload(&identity(), "d7", "faq.pdf");
    assert_eq!(payload["docId"], "d7");
    assert_eq!(payload["docName"], "faq.pdf");
    assert_eq!(payload["botId"], "b42");
    assert_eq!(payload["botName"], "Support Bot");
}

#[test]
fn query_payload_omits_bot_name() {
    let payload = query_payload(&identity(), "what is this?");
    assert_eq!(payload["botId"], "b42");
    assert_eq!(payload["query"], "what is this?");
    assert!(payload.get("botName").is_none());
}
