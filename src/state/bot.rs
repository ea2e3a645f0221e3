//! Bot identity resolved once at workspace entry.
//!
//! DESIGN
//! ======
//! The dashboard links to `/bot/{name}__{id}`, a composite token carrying
//! both halves of the identity so the workspace needs no extra lookup. The
//! identity is parsed once from the route and passed verbatim into every API
//! call for that bot; a token that doesn't match the expected shape degrades
//! to using the whole token as the id with a placeholder name.

#[cfg(test)]
#[path = "bot_test.rs"]
mod bot_test;

/// Placeholder display name for a malformed route token.
pub const FALLBACK_BOT_NAME: &str = "Bot";

/// The (id, name) pair every workspace operation targets.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BotIdentity {
    /// Unique bot identifier.
    pub id: String,
    /// Display name, percent-decoded from the route token.
    pub name: String,
}

impl BotIdentity {
    /// Parse a composite `name__id` route token.
    ///
    /// Splitting on `'_'` must yield exactly three parts (the double
    /// separator contributes an empty middle part); anything else falls back
    /// to the raw token as the id. A name that itself contains underscores
    /// therefore cannot round-trip; that bot still resolves, just with the
    /// placeholder name.
    #[must_use]
    pub fn from_route_token(token: &str) -> Self {
        let parts: Vec<&str> = token.split('_').collect();
        if parts.len() == 3 {
            let name = urlencoding::decode(parts[0])
                .map(|decoded| decoded.into_owned())
                .unwrap_or_else(|_| parts[0].to_owned());
            return BotIdentity {
                id: parts[2].to_owned(),
                name,
            };
        }
        BotIdentity {
            id: token.to_owned(),
            name: FALLBACK_BOT_NAME.to_owned(),
        }
    }

    /// Build the composite token the dashboard navigates with.
    #[must_use]
    pub fn route_token(name: &str, id: &str) -> String {
        format!("{}__{}", urlencoding::encode(name), id)
    }
}
