//! Shared wire DTOs for the client/server boundary.
//!
//! DESIGN
//! ======
//! These types mirror the server's JSON payloads field-for-field (camelCase
//! keys included) so serde round-trips stay lossless. Every response rides in
//! the same `{ data, message, success }` envelope.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Sentinel `source` value for documents ingested from an uploaded binary.
pub const UPLOADED_SOURCE: &str = "uploaded";

/// Standard response envelope wrapping every server payload.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Envelope<T> {
    /// Endpoint-specific payload, absent on some failures.
    pub data: Option<T>,
    /// Human-readable server message, mostly present on failures.
    #[serde(default)]
    pub message: Option<String>,
    /// Explicit success flag set by mutation endpoints.
    #[serde(default)]
    pub success: Option<bool>,
}

/// A bot summary as listed on the dashboard.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bot {
    /// Unique bot identifier.
    #[serde(rename = "botId")]
    pub bot_id: String,
    /// Display name chosen at creation.
    #[serde(rename = "botName")]
    pub bot_name: String,
}

/// Payload of `GET /api/bot/getBots`.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct BotsData {
    /// All bots owned by the authenticated user.
    pub bots: Vec<Bot>,
}

/// A single ingested document.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    /// Unique document identifier.
    #[serde(rename = "documentId")]
    pub document_id: String,
    /// Display name supplied at ingestion time.
    pub name: String,
    /// Either [`UPLOADED_SOURCE`] or the URL the content came from.
    pub source: String,
}

impl Document {
    /// Whether this document came from an uploaded binary (rendered as plain
    /// text) rather than a URL (rendered as a link).
    #[must_use]
    pub fn is_uploaded(&self) -> bool {
        self.source == UPLOADED_SOURCE
    }
}

/// Payload of `POST /api/bot/getBot` (paginated document listing).
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct DocumentsData {
    /// One page of documents; an absent field reads as an empty page.
    #[serde(rename = "documentData", default)]
    pub document_data: Vec<Document>,
}

/// Mutable model configuration for one bot.
///
/// All fields are transported as text; `temperature` is numeric-constrained
/// in the input layer only.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BotConfig {
    pub model_name: String,
    pub model_provider: String,
    pub api_key: String,
    pub temperature: String,
}

/// Payload of `POST /api/bot/getBotConfig`.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct BotConfigData {
    /// Absent when the bot has never been configured.
    #[serde(rename = "botConfig")]
    pub bot_config: Option<BotConfig>,
}

/// Payload of `POST /api/user/login` and `POST /api/user/signup`.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct TokenData {
    /// Bearer token; the expiry attached to it is computed client-side.
    pub token: String,
}

/// Inner payload of `POST /api/bot/query`; the interesting part is
/// `data.queryResult`, kept as a raw value because the response field is not
/// guaranteed to be a string.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct QueryData {
    pub data: QueryInner,
}

/// Second nesting level of the query response envelope.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct QueryInner {
    #[serde(rename = "queryResult")]
    pub query_result: Option<serde_json::Value>,
}
