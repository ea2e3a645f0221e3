//! Content-ingestion submission state and payload shaping.
//!
//! DESIGN
//! ======
//! The server accepts multiple items per source kind, but this client only
//! ever sends at most one per submission: each non-empty source becomes a
//! single-element array under its kind, and empty kinds send empty arrays.
//! The modal guarantees at most one in-flight submission via `pending`.

#[cfg(test)]
#[path = "ingest_test.rs"]
mod ingest_test;

use crate::state::bot::BotIdentity;

/// In-flight flag for one Add Content modal instance.
#[derive(Clone, Debug, Default)]
pub struct IngestState {
    /// True while a submission is in flight; re-entry is refused.
    pub pending: bool,
}

impl IngestState {
    /// Claim the in-flight slot; `false` means a submission is already
    /// running and the caller must drop the attempt.
    pub fn try_begin(&mut self) -> bool {
        if self.pending {
            return false;
        }
        self.pending = true;
        true
    }

    /// Release the in-flight slot once the call resolves either way.
    pub fn finish(&mut self) {
        self.pending = false;
    }
}

/// Package the three optional sources into the ingestion payload.
///
/// Emptiness is judged on the trimmed value but the original text is sent
/// untrimmed, matching the server's expectations for raw text blocks.
#[must_use]
pub fn sources_payload(raw_text: &str, url: &str, file_url: &str) -> serde_json::Value {
    fn one_or_empty(value: &str) -> serde_json::Value {
        if value.trim().is_empty() {
            serde_json::json!([])
        } else {
            serde_json::json!([value])
        }
    }

    serde_json::json!({
        "rawText": one_or_empty(raw_text),
        "urls": one_or_empty(url),
        "files": one_or_empty(file_url),
    })
}

/// Full `addContent` request body for one submission.
#[must_use]
pub fn add_content_payload(
    identity: &BotIdentity,
    name: &str,
    raw_text: &str,
    url: &str,
    file_url: &str,
) -> serde_json::Value {
    serde_json::json!({
        "botId": identity.id,
        "botName": identity.name,
        "name": name,
        "sources": sources_payload(raw_text, url, file_url),
    })
}
