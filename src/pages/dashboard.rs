//! Dashboard page listing bots with create, delete, and open actions.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the authenticated landing route. The retained bot list is the
//! source of truth between fetches: create appends the server-confirmed
//! summary, delete removes in place, and opening a card encodes the
//! composite identity token into the workspace route.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::bot::BotIdentity;
use crate::state::bots::BotsState;
use crate::state::session::{self, AUTH_TOKEN_KEY};
use crate::util::auth::install_session_guard;

fn validate_bot_name(name: &str) -> Option<String> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return None;
    }
    Some(trimmed.to_owned())
}

fn workspace_path(bot_name: &str, bot_id: &str) -> String {
    format!("/bot/{}", BotIdentity::route_token(bot_name, bot_id))
}

/// Dashboard page — bot inventory plus a create-bot dialog.
/// Redirects to `/login` when no fresh session exists.
#[component]
pub fn DashboardPage() -> impl IntoView {
    let navigate = use_navigate();
    let bots = RwSignal::new(BotsState::default());
    let show_create = RwSignal::new(false);
    let new_bot_name = RwSignal::new(String::new());

    install_session_guard(navigate.clone());

    #[cfg(feature = "hydrate")]
    let alive = std::sync::Arc::new(std::sync::atomic::AtomicBool::new(true));
    #[cfg(feature = "hydrate")]
    {
        let alive = alive.clone();
        on_cleanup(move || alive.store(false, std::sync::atomic::Ordering::Relaxed));
    }

    // One list fetch per mount; mutations reconcile locally instead of
    // triggering refetches.
    let requested_list = RwSignal::new(false);
    #[cfg(feature = "hydrate")]
    {
        let alive = alive.clone();
        let navigate = navigate.clone();
        Effect::new(move || {
            if requested_list.get() {
                return;
            }
            requested_list.set(true);
            bots.update(|s| s.loading = true);
            let alive = alive.clone();
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                let result = crate::net::api::fetch_bots().await;
                if !alive.load(std::sync::atomic::Ordering::Relaxed) {
                    return;
                }
                match result {
                    Ok(list) => bots.update(|s| s.apply_list(list)),
                    Err(crate::net::error::ApiError::Unauthenticated) => {
                        navigate("/login", NavigateOptions::default());
                    }
                    Err(err) => bots.update(|s| s.fail_list(err.user_message())),
                }
            });
        });
    }
    #[cfg(not(feature = "hydrate"))]
    let _ = requested_list;

    let on_open_create = move |_| {
        show_create.set(true);
        new_bot_name.set(String::new());
    };
    let on_create_cancel = Callback::new(move |()| show_create.set(false));

    #[cfg(feature = "hydrate")]
    let alive_create = alive.clone();
    let navigate_create = navigate.clone();
    let on_create = Callback::new(move |name: String| {
        if bots.get_untracked().creating {
            return;
        }
        bots.update(|s| s.creating = true);

        #[cfg(feature = "hydrate")]
        {
            let alive = alive_create.clone();
            let navigate = navigate_create.clone();
            leptos::task::spawn_local(async move {
                let result = crate::net::api::create_bot(&name).await;
                if !alive.load(std::sync::atomic::Ordering::Relaxed) {
                    return;
                }
                match result {
                    Ok(bot) => {
                        bots.update(|s| s.append_created(bot));
                        new_bot_name.set(String::new());
                        show_create.set(false);
                    }
                    Err(crate::net::error::ApiError::Unauthenticated) => {
                        navigate("/login", NavigateOptions::default());
                    }
                    Err(err) => {
                        bots.update(|s| s.creating = false);
                        crate::util::dialog::alert(&err.user_message());
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&navigate_create, name);
            bots.update(|s| s.creating = false);
        }
    });

    #[cfg(feature = "hydrate")]
    let alive_delete = alive.clone();
    let navigate_delete = navigate.clone();
    let on_delete = Callback::new(move |(bot_id, bot_name): (String, String)| {
        #[cfg(feature = "hydrate")]
        {
            let alive = alive_delete.clone();
            let navigate = navigate_delete.clone();
            leptos::task::spawn_local(async move {
                let result = crate::net::api::delete_bot(&bot_id, &bot_name).await;
                if !alive.load(std::sync::atomic::Ordering::Relaxed) {
                    return;
                }
                match result {
                    Ok(()) => bots.update(|s| s.remove_bot(&bot_id)),
                    Err(crate::net::error::ApiError::Unauthenticated) => {
                        navigate("/login", NavigateOptions::default());
                    }
                    Err(err) => {
                        crate::util::dialog::alert(&format!("Could not delete bot: {}", err.user_message()));
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = (&navigate_delete, bot_id, bot_name);
    });

    let navigate_logout = navigate.clone();
    let on_logout = move |_| {
        session::clear(AUTH_TOKEN_KEY);
        navigate_logout("/login", NavigateOptions::default());
    };

    let navigate_open = navigate.clone();
    let on_open = Callback::new(move |(bot_name, bot_id): (String, String)| {
        navigate_open(&workspace_path(&bot_name, &bot_id), NavigateOptions::default());
    });

    view! {
        <main class="dashboard-page">
            <header class="dashboard-page__header">
                <h1>"Your Bots"</h1>
                <span class="dashboard-page__spacer"></span>
                <button class="btn btn--primary" on:click=on_open_create>
                    "+ Create Bot"
                </button>
                <button class="btn" on:click=on_logout>
                    "Logout"
                </button>
            </header>

            {move || {
                let state = bots.get();
                if state.loading {
                    return view! { <p class="dashboard-page__status">"Loading bots..."</p> }.into_any();
                }
                if let Some(message) = state.error {
                    return view! { <p class="dashboard-page__error">{message}</p> }.into_any();
                }
                if state.items.is_empty() {
                    return view! {
                        <p class="dashboard-page__status">
                            "You have no bots yet. Start by creating your first one!"
                        </p>
                    }
                        .into_any();
                }
                state
                    .items
                    .into_iter()
                    .map(|bot| {
                        let open_name = bot.bot_name.clone();
                        let open_id = bot.bot_id.clone();
                        let delete_name = bot.bot_name.clone();
                        let delete_id = bot.bot_id.clone();
                        view! {
                            <div
                                class="bot-card"
                                on:click=move |_| on_open.run((open_name.clone(), open_id.clone()))
                            >
                                <h2 class="bot-card__name">{bot.bot_name.clone()}</h2>
                                <button
                                    class="bot-card__delete"
                                    title="Delete Bot"
                                    on:click=move |ev: leptos::ev::MouseEvent| {
                                        ev.stop_propagation();
                                        on_delete.run((delete_id.clone(), delete_name.clone()));
                                    }
                                >
                                    "Delete"
                                </button>
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()
                    .into_any()
            }}

            <Show when=move || show_create.get()>
                <CreateBotDialog
                    name=new_bot_name
                    bots=bots
                    on_cancel=on_create_cancel
                    on_create=on_create
                />
            </Show>
        </main>
    }
}

/// Modal dialog for creating a new bot.
#[component]
fn CreateBotDialog(
    name: RwSignal<String>,
    bots: RwSignal<BotsState>,
    on_cancel: Callback<()>,
    on_create: Callback<String>,
) -> impl IntoView {
    let submit = Callback::new(move |()| {
        let Some(bot_name) = validate_bot_name(&name.get()) else {
            return;
        };
        on_create.run(bot_name);
    });

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_cancel.run(())>
            <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                <h2>"Create a New Bot"</h2>
                <label class="dialog__label">
                    "Bot Name"
                    <input
                        class="dialog__input"
                        type="text"
                        prop:value=move || name.get()
                        on:input=move |ev| name.set(event_target_value(&ev))
                        on:keydown=move |ev: leptos::ev::KeyboardEvent| {
                            if ev.key() == "Enter" {
                                ev.prevent_default();
                                submit.run(());
                            }
                        }
                    />
                </label>
                <div class="dialog__actions">
                    <button class="btn" on:click=move |_| on_cancel.run(())>
                        "Cancel"
                    </button>
                    <button
                        class="btn btn--primary"
                        disabled=move || bots.get().creating
                        on:click=move |_| submit.run(())
                    >
                        {move || if bots.get().creating { "Creating..." } else { "Create" }}
                    </button>
                </div>
            </div>
        </div>
    }
}
