//! Blocking browser dialogs (alert/confirm) behind hydrate gating.
//!
//! SYSTEM CONTEXT
//! ==============
//! Controllers surface terminal operation failures as blocking alerts and
//! gate destructive actions on a blocking yes/no prompt. On the server both
//! degrade to no-ops (confirm answers "no").

/// Show a blocking alert with `message`.
pub fn alert(message: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.alert_with_message(message);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = message;
    }
}

/// Show a blocking yes/no prompt; `false` when unavailable or dismissed.
#[must_use]
pub fn confirm(message: &str) -> bool {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window()
            .and_then(|window| window.confirm_with_message(message).ok())
            .unwrap_or(false)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = message;
        false
    }
}
