//! Login page: email + password against `POST /api/user/login`.
//!
//! SYSTEM CONTEXT
//! ==============
//! A successful login wraps the returned token with the client-computed
//! one-hour expiry and persists it before entering the dashboard. Entering
//! this route abandons any pending signup verification.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

#[cfg(any(test, feature = "hydrate"))]
use crate::net::error::ApiError;
use crate::state::session::{self, VERIFY_TOKEN_KEY};

fn validate_login_input(email: &str, password: &str) -> Result<(String, String), &'static str> {
    let email = email.trim();
    if email.is_empty() || password.is_empty() {
        return Err("Enter both email and password.");
    }
    Ok((email.to_owned(), password.to_owned()))
}

#[cfg(any(test, feature = "hydrate"))]
fn login_error_message(err: &ApiError) -> String {
    match err.status() {
        Some(404) => "User not found. Please sign up first or check your email/password.".to_owned(),
        _ => err.user_message(),
    }
}

/// Login page with a password-visibility toggle and inline error text.
#[component]
pub fn LoginPage() -> impl IntoView {
    let navigate = use_navigate();
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let show_password = RwSignal::new(false);
    let error = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    // Entering the login route invalidates any pending signup verification.
    Effect::new(move || {
        session::clear(VERIFY_TOKEN_KEY);
    });

    let navigate_submit = navigate.clone();
    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let (email_value, password_value) = match validate_login_input(&email.get(), &password.get()) {
            Ok(values) => values,
            Err(message) => {
                error.set(message.to_owned());
                return;
            }
        };
        busy.set(true);
        error.set(String::new());

        #[cfg(feature = "hydrate")]
        {
            use crate::state::session::{AUTH_TOKEN_KEY, Session};

            let navigate = navigate_submit.clone();
            leptos::task::spawn_local(async move {
                match crate::net::api::login(&email_value, &password_value).await {
                    Ok(token) => {
                        session::store(AUTH_TOKEN_KEY, &Session::issue(token, session::now_ms()));
                        navigate("/dashboard", NavigateOptions::default());
                    }
                    Err(err) => {
                        error.set(login_error_message(&err));
                        busy.set(false);
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&navigate_submit, email_value, password_value);
            busy.set(false);
        }
    };

    let navigate_signup = navigate.clone();
    let on_signup = move |_| {
        navigate_signup("/signup", NavigateOptions::default());
    };

    view! {
        <main class="auth-page">
            <div class="auth-card">
                <h1>"Login"</h1>
                <form class="auth-form" on:submit=on_submit>
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
                            on:input=move |ev| password.set(event_target_value(&ev))
                        />
                    </label>
                    <button
                        class="auth-form__toggle"
                        type="button"
                        on:click=move |_| show_password.update(|shown| *shown = !*shown)
                    >
                        {move || if show_password.get() { "Hide password" } else { "Show password" }}
                    </button>
                    <Show when=move || !error.get().is_empty()>
                        <p class="auth-form__error">{move || error.get()}</p>
                    </Show>
                    <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                        "Login"
                    </button>
                </form>
                <p class="auth-card__footer">
                    "Not a user? "
                    <button class="auth-card__link" type="button" on:click=on_signup>
                        "Signup instead"
                    </button>
                </p>
            </div>
        </main>
    }
}
