//! Signup page: account creation followed by OTP verification.
//!
//! SYSTEM CONTEXT
//! ==============
//! A successful signup returns a short-lived pre-verification token; it is
//! persisted with the client-computed one-hour expiry and the user moves to
//! the verify route. Entering this route discards any stale token records.

#[cfg(test)]
#[path = "signup_test.rs"]
mod signup_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

#[cfg(any(test, feature = "hydrate"))]
use crate::net::error::ApiError;
use crate::state::session::{self, AUTH_TOKEN_KEY, VERIFY_TOKEN_KEY};

const PASSWORD_POLICY: &str =
    "Password must be at least 8 characters and include uppercase, lowercase, number, and special character";

/// Check the password policy, returning the violation notice if any.
fn password_policy_error(password: &str) -> Option<&'static str> {
    let long_enough = password.chars().count() >= 8;
    let has_lower = password.chars().any(|c| c.is_ascii_lowercase());
    let has_upper = password.chars().any(|c| c.is_ascii_uppercase());
    let has_digit = password.chars().any(|c| c.is_ascii_digit());
    let has_special = password.chars().any(|c| !c.is_ascii_alphanumeric());
    if long_enough && has_lower && has_upper && has_digit && has_special {
        None
    } else {
        Some(PASSWORD_POLICY)
    }
}

fn validate_signup_input(username: &str, email: &str) -> Result<(String, String), &'static str> {
    let username = username.trim();
    let email = email.trim();
    if username.is_empty() || email.is_empty() {
        return Err("Enter both username and email.");
    }
    Ok((username.to_owned(), email.to_owned()))
}

#[cfg(any(test, feature = "hydrate"))]
fn signup_error_message(err: &ApiError) -> String {
    match err.status() {
        Some(409) => "Email is already registered".to_owned(),
        _ => err.user_message(),
    }
}

/// Signup page with live password-policy feedback.
#[component]
pub fn SignupPage() -> impl IntoView {
    let navigate = use_navigate();
    let username = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let show_password = RwSignal::new(false);
    let password_error = RwSignal::new(None::<&'static str>);
    let api_error = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    // A fresh signup invalidates any previous token records.
    Effect::new(move || {
        session::clear(VERIFY_TOKEN_KEY);
        session::clear(AUTH_TOKEN_KEY);
    });

    let on_password_input = move |ev: leptos::ev::Event| {
        let value = event_target_value(&ev);
        password_error.set(password_policy_error(&value));
        password.set(value);
    };

    let navigate_submit = navigate.clone();
    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() || password_error.get().is_some() {
            return;
        }
        let (username_value, email_value) = match validate_signup_input(&username.get(), &email.get()) {
            Ok(values) => values,
            Err(message) => {
                api_error.set(message.to_owned());
                return;
            }
        };
        let password_value = password.get();
        if let Some(violation) = password_policy_error(&password_value) {
            password_error.set(Some(violation));
            return;
        }
        busy.set(true);
        api_error.set(String::new());

        #[cfg(feature = "hydrate")]
        {
            use crate::state::session::Session;

            let navigate = navigate_submit.clone();
            leptos::task::spawn_local(async move {
                match crate::net::api::signup(&username_value, &email_value, &password_value).await {
                    Ok(token) => {
                        session::store(VERIFY_TOKEN_KEY, &Session::issue(token, session::now_ms()));
                        navigate("/verify", NavigateOptions::default());
                    }
                    Err(err) => {
                        api_error.set(signup_error_message(&err));
                        busy.set(false);
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&navigate_submit, username_value, email_value, password_value);
            busy.set(false);
        }
    };

    let navigate_login = navigate.clone();
    let on_login = move |_| {
        navigate_login("/login", NavigateOptions::default());
    };

    view! {
        <main class="auth-page">
            <div class="auth-card">
                <h1>"Sign Up"</h1>
                <form class="auth-form" on:submit=on_submit>
                    <label class="auth-form__label">
                        "Username"
                        <input
                            class="auth-form__input"
                            type="text"
                            prop:value=move || username.get()
                            on:input=move |ev| username.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="auth-form__label">
                        "Email"
                        <input
                            class="auth-form__input"
                            type="email"
                            prop:value=move || email.get()
                            on:input=move |ev| email.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="auth-form__label">
                        "Password"
                        <input
                            class="auth-form__input"
                            type=move || if show_password.get() { "text" } else { "password" }
                            prop:value=move || password.get()
                            on:input=on_password_input
                        />
                    </label>
                    <button
                        class="auth-form__toggle"
                        type="button"
                        on:click=move |_| show_password.update(|shown| *shown = !*shown)
                    >
                        {move || if show_password.get() { "Hide password" } else { "Show password" }}
                    </button>
                    <Show when=move || password_error.get().is_some()>
                        <p class="auth-form__error">{move || password_error.get().unwrap_or_default()}</p>
                    </Show>
                    <Show when=move || !api_error.get().is_empty()>
                        <p class="auth-form__error">{move || api_error.get()}</p>
                    </Show>
                    <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                        "Sign Up"
                    </button>
                </form>
                <p class="auth-card__footer">
                    "Already registered? "
                    <button class="auth-card__link" type="button" on:click=on_login>
                        "Login instead"
                    </button>
                </p>
            </div>
        </main>
    }
}
