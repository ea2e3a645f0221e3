//! Shared auth UI helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Route components should apply identical unauthenticated redirect behavior:
//! a missing, malformed, or expired session record abandons the view and
//! returns the user to the login entry point.

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::state::session::{self, AUTH_TOKEN_KEY};

/// Redirect to `/login` on mount unless a fresh session record exists.
///
/// Runs once per page; pages performing authenticated calls still get a
/// second line of defense from the request envelope's own freshness check.
pub fn install_session_guard<F>(navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if session::load(AUTH_TOKEN_KEY).is_none() {
            #[cfg(feature = "hydrate")]
            navigate("/login", NavigateOptions::default());
            #[cfg(not(feature = "hydrate"))]
            let _ = &navigate;
        }
    });
}
