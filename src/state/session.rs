//! Session records with client-computed expiry.
//!
//! DESIGN
//! ======
//! The server issues bare bearer tokens; the client attaches its own
//! one-hour expiry when persisting them, so the stored expiry is advisory
//! rather than authoritative. Two records share the same shape: the login
//! session under [`AUTH_TOKEN_KEY`] and the short-lived pre-verification
//! token under [`VERIFY_TOKEN_KEY`]. Any read for use in a request must go
//! through a freshness check; a stale or malformed record reads the same as
//! a missing one.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use serde::{Deserialize, Serialize};

use crate::util::storage;

/// localStorage key of the authenticated session record.
pub const AUTH_TOKEN_KEY: &str = "auth_token";

/// localStorage key of the pre-verification (signup OTP) token record.
pub const VERIFY_TOKEN_KEY: &str = "verify_token";

/// Client-side session lifetime in milliseconds (one hour).
pub const SESSION_TTL_MS: f64 = 60.0 * 60.0 * 1000.0;

/// A bearer token plus the client-computed expiry attached at issue time.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Session {
    /// Opaque bearer token as returned by the server.
    pub token: String,
    /// Milliseconds since the Unix epoch after which the record is stale.
    #[serde(rename = "expiresAt")]
    pub expires_at: f64,
}

impl Session {
    /// Wrap a freshly issued token with `now + TTL`.
    #[must_use]
    pub fn issue(token: impl Into<String>, now_ms: f64) -> Self {
        Session {
            token: token.into(),
            expires_at: now_ms + SESSION_TTL_MS,
        }
    }

    /// Whether the record is still usable at `now_ms`.
    #[must_use]
    pub fn is_fresh(&self, now_ms: f64) -> bool {
        now_ms <= self.expires_at
    }
}

/// Parse a persisted record, treating malformed or stale input as absent.
#[must_use]
pub fn parse_stored(raw: &str, now_ms: f64) -> Option<Session> {
    let session: Session = serde_json::from_str(raw).ok()?;
    session.is_fresh(now_ms).then_some(session)
}

/// Current wall-clock time in milliseconds since the Unix epoch.
#[must_use]
pub fn now_ms() -> f64 {
    #[cfg(feature = "hydrate")]
    {
        js_sys::Date::now()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        0.0
    }
}

/// Read the record under `key`, failing the freshness check as absence.
///
/// A stale record found here is removed so later reads don't re-parse it.
#[must_use]
pub fn load(key: &str) -> Option<Session> {
    let session: Session = storage::load_json(key)?;
    if session.is_fresh(now_ms()) {
        Some(session)
    } else {
        storage::remove(key);
        None
    }
}

/// Persist `session` under `key`.
pub fn store(key: &str, session: &Session) {
    storage::save_json(key, session);
}

/// Drop the record under `key` (logout, expiry detection, fatal auth).
pub fn clear(key: &str) {
    storage::remove(key);
}

/// Bearer token of the current login session, if one is fresh.
#[must_use]
pub fn current_token() -> Option<String> {
    load(AUTH_TOKEN_KEY).map(|session| session.token)
}
