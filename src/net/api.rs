//! REST API client for the bot service.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): the calls are compiled out; pages only issue them from
//! browser-side task spawns.
//!
//! ERROR HANDLING
//! ==============
//! Every function resolves to `Result<_, ApiError>`. Authenticated calls fail
//! fast with `Unauthenticated` before touching the network when no fresh
//! session exists, and a server-side 401/403 is folded into the same variant
//! (clearing the stored session) so callers route back to login either way.
//! Pre-session flows (login, signup, OTP verify) keep their raw statuses so
//! pages can map them to specific notices. Nothing here retries.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

#[cfg(any(test, feature = "hydrate"))]
use crate::net::types::BotConfig;
#[cfg(any(test, feature = "hydrate"))]
use crate::state::bot::BotIdentity;

#[cfg(feature = "hydrate")]
use crate::net::error::{ApiError, error_for_status, error_message};
#[cfg(feature = "hydrate")]
use crate::net::types::{Bot, BotConfigData, BotsData, Document, DocumentsData, Envelope, QueryData, TokenData};
#[cfg(feature = "hydrate")]
use crate::state::session::{self, AUTH_TOKEN_KEY};

/// Documents fetched per page.
pub const PAGE_LIMIT: usize = 10;

/// Resolve a request path against the configured API base URL.
///
/// With no `API_BASE_URL` baked in at build time, paths stay same-origin.
#[must_use]
pub fn endpoint(path: &str) -> String {
    match option_env!("API_BASE_URL") {
        Some(base) => format!("{base}{path}"),
        None => path.to_owned(),
    }
}

#[cfg(any(test, feature = "hydrate"))]
fn create_bot_path(name: &str) -> String {
    format!("/api/bot/createBot?name={}", urlencoding::encode(name))
}

#[cfg(any(test, feature = "hydrate"))]
fn documents_payload(identity: &BotIdentity, page: u32) -> serde_json::Value {
    serde_json::json!({
        "botId": identity.id,
        "botName": identity.name,
        "page": page,
        "limit": PAGE_LIMIT,
    })
}

#[cfg(any(test, feature = "hydrate"))]
fn config_request_payload(identity: &BotIdentity) -> serde_json::Value {
    serde_json::json!({ "botId": identity.id, "name": identity.name })
}

#[cfg(any(test, feature = "hydrate"))]
fn save_config_payload(identity: &BotIdentity, config: &BotConfig) -> serde_json::Value {
    let mut payload = serde_json::to_value(config).unwrap_or_else(|_| serde_json::json!({}));
    payload["botId"] = serde_json::Value::String(identity.id.clone());
    payload["botName"] = serde_json::Value::String(identity.name.clone());
    payload
}

#[cfg(any(test, feature = "hydrate"))]
fn delete_bot_payload(bot_id: &str, bot_name: &str) -> serde_json::Value {
    serde_json::json!({ "botId": bot_id, "name": bot_name })
}

#[cfg(any(test, feature = "hydrate"))]
fn delete_document_payload(identity: &BotIdentity, document_id: &str, document_name: &str) -> serde_json::Value {
    serde_json::json!({
        "botId": identity.id,
        "botName": identity.name,
        "docId": document_id,
        "docName": document_name,
    })
}

#[cfg(any(test, feature = "hydrate"))]
fn query_payload(identity: &BotIdentity, query: &str) -> serde_json::Value {
    serde_json::json!({ "botId": identity.id, "query": query })
}

#[cfg(feature = "hydrate")]
fn transport(err: gloo_net::Error) -> ApiError {
    leptos::logging::warn!("transport failure: {err}");
    ApiError::Transport(err.to_string())
}

#[cfg(feature = "hydrate")]
fn bearer(token: &str) -> String {
    format!("Bearer {token}")
}

/// Convert a non-2xx response to an error, purging the session on an auth
/// rejection so the advisory client expiry catches up with server truth.
#[cfg(feature = "hydrate")]
async fn authed_failure(resp: gloo_net::http::Response) -> ApiError {
    let status = resp.status();
    let body = resp.text().await.unwrap_or_default();
    let err = error_for_status(status, &body);
    if err == ApiError::Unauthenticated {
        session::clear(AUTH_TOKEN_KEY);
    }
    err
}

#[cfg(feature = "hydrate")]
async fn plain_failure(resp: gloo_net::http::Response) -> ApiError {
    let status = resp.status();
    let body = resp.text().await.unwrap_or_default();
    ApiError::Api {
        status,
        message: error_message(&body),
    }
}

#[cfg(feature = "hydrate")]
async fn parse_envelope<T: serde::de::DeserializeOwned>(resp: gloo_net::http::Response) -> Result<Envelope<T>, ApiError> {
    resp.json::<Envelope<T>>().await.map_err(transport)
}

#[cfg(feature = "hydrate")]
async fn get_authed(path: &str) -> Result<gloo_net::http::Response, ApiError> {
    let token = session::current_token().ok_or(ApiError::Unauthenticated)?;
    gloo_net::http::Request::get(&endpoint(path))
        .header("Authorization", &bearer(&token))
        .send()
        .await
        .map_err(transport)
}

#[cfg(feature = "hydrate")]
async fn post_authed(path: &str, body: &serde_json::Value) -> Result<gloo_net::http::Response, ApiError> {
    let token = session::current_token().ok_or(ApiError::Unauthenticated)?;
    gloo_net::http::Request::post(&endpoint(path))
        .header("Authorization", &bearer(&token))
        .json(body)
        .map_err(transport)?
        .send()
        .await
        .map_err(transport)
}

#[cfg(feature = "hydrate")]
async fn delete_authed(path: &str, body: &serde_json::Value) -> Result<gloo_net::http::Response, ApiError> {
    let token = session::current_token().ok_or(ApiError::Unauthenticated)?;
    gloo_net::http::Request::delete(&endpoint(path))
        .header("Authorization", &bearer(&token))
        .json(body)
        .map_err(transport)?
        .send()
        .await
        .map_err(transport)
}

/// Log in with email + password, returning the bare bearer token.
///
/// # Errors
///
/// `Api` with the raw status (404 means unknown user) or `Transport`.
#[cfg(feature = "hydrate")]
pub async fn login(email: &str, password: &str) -> Result<String, ApiError> {
    let payload = serde_json::json!({ "email": email, "password": password });
    let resp = gloo_net::http::Request::post(&endpoint("/api/user/login"))
        .json(&payload)
        .map_err(transport)?
        .send()
        .await
        .map_err(transport)?;
    if !resp.ok() {
        return Err(plain_failure(resp).await);
    }
    let envelope: Envelope<TokenData> = parse_envelope(resp).await?;
    envelope
        .data
        .map(|data| data.token)
        .ok_or_else(|| ApiError::Transport("login response missing token".to_owned()))
}

/// Register a new account, returning the pre-verification token.
///
/// # Errors
///
/// `Api` with the raw status (409 means the email is taken) or `Transport`.
#[cfg(feature = "hydrate")]
pub async fn signup(username: &str, email: &str, password: &str) -> Result<String, ApiError> {
    let payload = serde_json::json!({ "username": username, "email": email, "password": password });
    let resp = gloo_net::http::Request::post(&endpoint("/api/user/signup"))
        .json(&payload)
        .map_err(transport)?
        .send()
        .await
        .map_err(transport)?;
    if !resp.ok() {
        return Err(plain_failure(resp).await);
    }
    let envelope: Envelope<TokenData> = parse_envelope(resp).await?;
    envelope
        .data
        .map(|data| data.token)
        .ok_or_else(|| ApiError::Transport("signup response missing token".to_owned()))
}

/// Verify the signup OTP using the pre-verification bearer token.
///
/// # Errors
///
/// `Api` with the raw status; pages map 400/404/429 to specific flows.
#[cfg(feature = "hydrate")]
pub async fn verify_otp(verify_token: &str, otp: &str) -> Result<(), ApiError> {
    let payload = serde_json::json!({ "otp": otp });
    let resp = gloo_net::http::Request::post(&endpoint("/api/user/verify"))
        .header("Authorization", &bearer(verify_token))
        .json(&payload)
        .map_err(transport)?
        .send()
        .await
        .map_err(transport)?;
    if !resp.ok() {
        return Err(plain_failure(resp).await);
    }
    Ok(())
}

/// Request a fresh OTP for the pending signup.
///
/// # Errors
///
/// `Api` with the server message or `Transport`.
#[cfg(feature = "hydrate")]
pub async fn regenerate_otp(verify_token: &str) -> Result<(), ApiError> {
    let resp = gloo_net::http::Request::get(&endpoint("/api/user/regenerateOtp"))
        .header("Authorization", &bearer(verify_token))
        .send()
        .await
        .map_err(transport)?;
    if !resp.ok() {
        return Err(plain_failure(resp).await);
    }
    Ok(())
}

/// List all bots owned by the current user.
///
/// # Errors
///
/// `Unauthenticated` before any network traffic when no fresh session exists.
#[cfg(feature = "hydrate")]
pub async fn fetch_bots() -> Result<Vec<Bot>, ApiError> {
    let resp = get_authed("/api/bot/getBots").await?;
    if !resp.ok() {
        return Err(authed_failure(resp).await);
    }
    let envelope: Envelope<BotsData> = parse_envelope(resp).await?;
    Ok(envelope.data.map(|data| data.bots).unwrap_or_default())
}

/// Create a bot by name, returning the created summary.
///
/// # Errors
///
/// `Unauthenticated`, `Api`, or `Transport`.
#[cfg(feature = "hydrate")]
pub async fn create_bot(name: &str) -> Result<Bot, ApiError> {
    let resp = get_authed(&create_bot_path(name)).await?;
    if !resp.ok() {
        return Err(authed_failure(resp).await);
    }
    let envelope: Envelope<Bot> = parse_envelope(resp).await?;
    envelope
        .data
        .ok_or_else(|| ApiError::Transport("create response missing bot".to_owned()))
}

/// Delete a bot and all of its content.
///
/// # Errors
///
/// `Unauthenticated`, `Api`, or `Transport`.
#[cfg(feature = "hydrate")]
pub async fn delete_bot(bot_id: &str, bot_name: &str) -> Result<(), ApiError> {
    let resp = delete_authed("/api/bot/deleteBot", &delete_bot_payload(bot_id, bot_name)).await?;
    if !resp.ok() {
        return Err(authed_failure(resp).await);
    }
    Ok(())
}

/// Fetch one page of a bot's ingested documents.
///
/// # Errors
///
/// `Unauthenticated`, `Api`, or `Transport`.
#[cfg(feature = "hydrate")]
pub async fn fetch_documents(identity: &BotIdentity, page: u32) -> Result<Vec<Document>, ApiError> {
    let resp = post_authed("/api/bot/getBot", &documents_payload(identity, page)).await?;
    if !resp.ok() {
        return Err(authed_failure(resp).await);
    }
    let envelope: Envelope<DocumentsData> = parse_envelope(resp).await?;
    Ok(envelope.data.map(|data| data.document_data).unwrap_or_default())
}

/// Fetch a bot's model configuration; `None` when never configured.
///
/// # Errors
///
/// `Unauthenticated`, `Api`, or `Transport`.
#[cfg(feature = "hydrate")]
pub async fn fetch_config(identity: &BotIdentity) -> Result<Option<BotConfig>, ApiError> {
    let resp = post_authed("/api/bot/getBotConfig", &config_request_payload(identity)).await?;
    if !resp.ok() {
        return Err(authed_failure(resp).await);
    }
    let envelope: Envelope<BotConfigData> = parse_envelope(resp).await?;
    Ok(envelope.data.and_then(|data| data.bot_config))
}

/// Persist an edited configuration.
///
/// # Errors
///
/// `Api` carries the server's message verbatim for the save notice.
#[cfg(feature = "hydrate")]
pub async fn save_config(identity: &BotIdentity, config: &BotConfig) -> Result<(), ApiError> {
    let resp = post_authed("/api/bot/updateBotConfig", &save_config_payload(identity, config)).await?;
    if !resp.ok() {
        return Err(authed_failure(resp).await);
    }
    Ok(())
}

/// Submit new content for ingestion; the payload comes from
/// [`crate::state::ingest::add_content_payload`].
///
/// # Errors
///
/// A 2xx response with `success: false` is still a failure, keeping the
/// server's message.
#[cfg(feature = "hydrate")]
pub async fn add_content(payload: &serde_json::Value) -> Result<(), ApiError> {
    let resp = post_authed("/api/bot/addContent", payload).await?;
    if !resp.ok() {
        return Err(authed_failure(resp).await);
    }
    let envelope: Envelope<serde_json::Value> = parse_envelope(resp).await?;
    if envelope.success == Some(false) {
        return Err(ApiError::Api {
            status: 200,
            message: envelope.message.unwrap_or_else(|| "Failed to add content.".to_owned()),
        });
    }
    Ok(())
}

/// Delete a single document from a bot.
///
/// # Errors
///
/// A 2xx response with `success: false` is still a failure.
#[cfg(feature = "hydrate")]
pub async fn delete_document(identity: &BotIdentity, document_id: &str, document_name: &str) -> Result<(), ApiError> {
    let resp = delete_authed(
        "/api/doc/deleteDoc",
        &delete_document_payload(identity, document_id, document_name),
    )
    .await?;
    if !resp.ok() {
        return Err(authed_failure(resp).await);
    }
    let envelope: Envelope<serde_json::Value> = parse_envelope(resp).await?;
    if envelope.success == Some(false) {
        return Err(ApiError::Api {
            status: 200,
            message: envelope.message.unwrap_or_else(|| "Failed to delete document.".to_owned()),
        });
    }
    Ok(())
}

/// Ask the bot a question, returning the raw `queryResult` value.
///
/// # Errors
///
/// A 2xx response without a `queryResult` is a failure carrying the server's
/// message (the model layer occasionally answers with a bare envelope).
#[cfg(feature = "hydrate")]
pub async fn query_bot(identity: &BotIdentity, query: &str) -> Result<serde_json::Value, ApiError> {
    let resp = post_authed("/api/bot/query", &query_payload(identity, query)).await?;
    if !resp.ok() {
        return Err(authed_failure(resp).await);
    }
    let status = resp.status();
    let envelope: Envelope<QueryData> = parse_envelope(resp).await?;
    let message = envelope.message.clone();
    envelope
        .data
        .and_then(|data| data.data.query_result)
        .ok_or_else(|| ApiError::Api {
            status,
            message: message.unwrap_or_else(|| "Query failed.".to_owned()),
        })
}
