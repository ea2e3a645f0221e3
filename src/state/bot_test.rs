use super::*;

#[test]
fn parses_well_formed_composite_token() {
    let identity = BotIdentity::from_route_token("Support__b42");
    assert_eq!(identity.id, "b42");
    assert_eq!(identity.name, "Support");
}

#[test]
fn decodes_percent_encoded_name() {
    let identity = BotIdentity::from_route_token("Support%20Bot__b42");
    assert_eq!(identity.name, "Support Bot");
    assert_eq!(identity.id, "b42");
}

#[test]
fn falls_back_when_token_has_no_separator() {
    let identity = BotIdentity::from_route_token("b42");
    assert_eq!(identity.id, "b42");
    assert_eq!(identity.name, FALLBACK_BOT_NAME);
}

#[test]
fn falls_back_when_name_contains_underscores() {
    // "my_bot__b42" splits into four parts, not three.
    let identity = BotIdentity::from_route_token("my_bot__b42");
    assert_eq!(identity.id, "my_bot__b42");
    assert_eq!(identity.name, FALLBACK_BOT_NAME);
}

#[test]
fn route_token_round_trips_simple_names() {
    let token = BotIdentity::route_token("Support", "b42");
    assert_eq!(token, "Support__b42");
    let identity = BotIdentity::from_route_token(&token);
    assert_eq!(identity.id, "b42");
    assert_eq!(identity.name, "Support");
}

#[test]
fn route_token_encodes_spaces_for_round_trip() {
    let token = BotIdentity::route_token("Support Bot", "b42");
    assert_eq!(token, "Support%20Bot__b42");
    let identity = BotIdentity::from_route_token(&token);
    assert_eq!(identity.name, "Support Bot");
}
