//! OTP verification page for pending signups.
//!
//! SYSTEM CONTEXT
//! ==============
//! This route is only reachable with a fresh pre-verification token; a
//! missing or stale record sends the visitor back to the landing page.
//! Verification failures map to status-specific flows: a burned-out OTP
//! (429) clears the token and restarts signup after a short delay.

#[cfg(test)]
#[path = "verify_test.rs"]
mod verify_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

#[cfg(any(test, feature = "hydrate"))]
use crate::net::error::ApiError;
use crate::state::session::{self, VERIFY_TOKEN_KEY};

/// Seconds the resend affordance stays disabled after a request.
const RESEND_COOLDOWN_SECS: u32 = 60;

/// What a failed verification does next.
#[cfg(any(test, feature = "hydrate"))]
#[derive(Clone, Debug, PartialEq, Eq)]
enum VerifyAction {
    /// Keep the form up and show the notice inline.
    ShowMessage(String),
    /// Token is burned: show the notice, drop the record, restart signup.
    RestartSignup(String),
}

#[cfg(any(test, feature = "hydrate"))]
fn verify_error_action(err: &ApiError) -> VerifyAction {
    match err.status() {
        Some(400) => VerifyAction::ShowMessage("Invalid OTP. Please try again.".to_owned()),
        Some(404) => VerifyAction::ShowMessage("User not found. Please register again.".to_owned()),
        Some(429) => VerifyAction::RestartSignup("Too many attempts. Signup Again.".to_owned()),
        _ => VerifyAction::ShowMessage(err.user_message()),
    }
}

/// OTP entry form with a cooldown-limited resend affordance.
#[component]
pub fn VerifyPage() -> impl IntoView {
    let navigate = use_navigate();
    let otp = RwSignal::new(String::new());
    let error = RwSignal::new(String::new());
    let busy = RwSignal::new(false);
    let cooldown = RwSignal::new(0_u32);
    let verify_token = RwSignal::new(None::<String>);

    #[cfg(feature = "hydrate")]
    let alive = std::sync::Arc::new(std::sync::atomic::AtomicBool::new(true));
    #[cfg(feature = "hydrate")]
    {
        let alive = alive.clone();
        on_cleanup(move || alive.store(false, std::sync::atomic::Ordering::Relaxed));
    }

    // Without a fresh pre-verification token this route is not usable.
    let navigate_guard = navigate.clone();
    Effect::new(move || match session::load(VERIFY_TOKEN_KEY) {
        Some(record) => verify_token.set(Some(record.token)),
        None => {
            #[cfg(feature = "hydrate")]
            navigate_guard("/", NavigateOptions::default());
            #[cfg(not(feature = "hydrate"))]
            let _ = &navigate_guard;
        }
    });

    let on_otp_input = move |ev: leptos::ev::Event| {
        otp.set(event_target_value(&ev));
        error.set(String::new());
    };

    #[cfg(feature = "hydrate")]
    let alive_submit = alive.clone();
    let navigate_submit = navigate.clone();
    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let Some(token) = verify_token.get() else {
            return;
        };
        let otp_value = otp.get();
        busy.set(true);

        #[cfg(feature = "hydrate")]
        {
            let alive = alive_submit.clone();
            let navigate = navigate_submit.clone();
            leptos::task::spawn_local(async move {
                let result = crate::net::api::verify_otp(&token, &otp_value).await;
                if !alive.load(std::sync::atomic::Ordering::Relaxed) {
                    return;
                }
                match result {
                    Ok(()) => {
                        session::clear(VERIFY_TOKEN_KEY);
                        navigate("/login", NavigateOptions::default());
                    }
                    Err(err) => {
                        busy.set(false);
                        match verify_error_action(&err) {
                            VerifyAction::ShowMessage(message) => error.set(message),
                            VerifyAction::RestartSignup(message) => {
                                error.set(message);
                                session::clear(VERIFY_TOKEN_KEY);
                                gloo_timers::future::sleep(std::time::Duration::from_millis(2_500)).await;
                                if alive.load(std::sync::atomic::Ordering::Relaxed) {
                                    navigate("/signup", NavigateOptions::default());
                                }
                            }
                        }
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&navigate_submit, token, otp_value);
            busy.set(false);
        }
    };

    #[cfg(feature = "hydrate")]
    let alive_resend = alive.clone();
    let on_resend = move |_| {
        if cooldown.get() > 0 {
            return;
        }
        let Some(token) = verify_token.get() else {
            return;
        };
        cooldown.set(RESEND_COOLDOWN_SECS);

        #[cfg(feature = "hydrate")]
        {
            let alive = alive_resend.clone();
            leptos::task::spawn_local(async move {
                if let Err(err) = crate::net::api::regenerate_otp(&token).await {
                    if alive.load(std::sync::atomic::Ordering::Relaxed) {
                        error.set(err.user_message());
                    }
                }
            });

            let alive = alive_resend.clone();
            leptos::task::spawn_local(async move {
                loop {
                    gloo_timers::future::sleep(std::time::Duration::from_secs(1)).await;
                    if !alive.load(std::sync::atomic::Ordering::Relaxed) {
                        break;
                    }
                    let remaining = cooldown.get_untracked();
                    if remaining <= 1 {
                        cooldown.set(0);
                        break;
                    }
                    cooldown.set(remaining - 1);
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = token;
            cooldown.set(0);
        }
    };

    view! {
        <main class="auth-page">
            <div class="auth-card">
                <h1>"Verify OTP"</h1>
                <form class="auth-form" on:submit=on_submit>
                    <label class="auth-form__label">
                        "Enter OTP"
                        <input
                            class="auth-form__input"
                            type="text"
                            prop:value=move || otp.get()
                            on:input=on_otp_input
                        />
                    </label>
                    <Show when=move || !error.get().is_empty()>
                        <p class="auth-form__error">{move || error.get()}</p>
                    </Show>
                    <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                        "Verify"
                    </button>
                </form>
                <button
                    class="auth-card__link"
                    type="button"
                    on:click=on_resend
                    disabled=move || cooldown.get() > 0
                >
                    {move || {
                        let remaining = cooldown.get();
                        if remaining > 0 {
                            format!("Resend OTP in {remaining}s")
                        } else {
                            "Resend OTP".to_owned()
                        }
                    }}
                </button>
            </div>
        </main>
    }
}
