//! Chat transcript state for the workspace search tab.
//!
//! DESIGN
//! ======
//! The transcript is append-only, in-memory, and scoped to one workspace
//! view; navigating away discards it. Responses are normalized on arrival
//! (literal `\n` escape sequences become real line breaks) and the renderer
//! normalizes again defensively before display. One query is in flight at a
//! time: `prepare_query` refuses input while `searching`, trading the
//! upstream race-prone overlap for deterministic transcript order.

#[cfg(test)]
#[path = "chat_test.rs"]
mod chat_test;

/// One question/answer pair in the transcript.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChatExchange {
    /// The trimmed query as sent.
    pub query: String,
    /// The normalized response text.
    pub response: String,
}

/// Transcript plus in-flight flag for one chat view.
#[derive(Clone, Debug, Default)]
pub struct ChatState {
    /// Ordered, append-only exchanges for the lifetime of the view.
    pub transcript: Vec<ChatExchange>,
    /// True from submission until the call resolves.
    pub searching: bool,
}

impl ChatState {
    /// Validate and trim a query for submission.
    ///
    /// Blank input is rejected locally with no network call, and submission
    /// while a query is in flight is ignored (one-in-flight guard).
    #[must_use]
    pub fn prepare_query(&self, input: &str) -> Option<String> {
        if self.searching {
            return None;
        }
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return None;
        }
        Some(trimmed.to_owned())
    }

    /// Mark a query as in flight.
    pub fn begin(&mut self) {
        self.searching = true;
    }

    /// Append a resolved exchange and release the in-flight guard.
    pub fn push_exchange(&mut self, query: String, query_result: &serde_json::Value) {
        self.transcript.push(ChatExchange {
            query,
            response: response_text(query_result),
        });
        self.searching = false;
    }

    /// Release the in-flight guard on failure, leaving the transcript as is.
    pub fn fail(&mut self) {
        self.searching = false;
    }
}

/// Convert literal two-character `\n` escapes into real line breaks.
#[must_use]
pub fn normalize_response(raw: &str) -> String {
    raw.replace("\\n", "\n")
}

/// Extract displayable text from a raw `queryResult` value.
///
/// A string `response` field is normalized; any other shape is rendered as
/// the JSON of the whole result so the user still sees what came back.
#[must_use]
pub fn response_text(query_result: &serde_json::Value) -> String {
    match query_result.get("response").and_then(|r| r.as_str()) {
        Some(text) => normalize_response(text),
        None => query_result.to_string(),
    }
}
