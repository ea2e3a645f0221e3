//! Bot workspace page — documents, configuration, and chat tabs.
//!
//! ARCHITECTURE
//! ============
//! This component is the route-level coordinator for one bot: it resolves
//! the composite identity token once at entry and drives three
//! independently-paced sub-views against it. Each sub-view owns its state
//! exclusively and is only mutated from completion callbacks of its own
//! operations; the identity is passed verbatim into every call.
//!
//! TRADE-OFFS
//! ==========
//! Completion callbacks are bound to a per-page liveness flag so responses
//! resolving after navigation never touch dead view state. There is no
//! request cancellation, only discard-on-arrival.

#[cfg(test)]
#[path = "bot_page_test.rs"]
mod bot_page_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_params_map};

use crate::components::add_content_modal::AddContentModal;
use crate::state::bot::{BotIdentity, FALLBACK_BOT_NAME};
use crate::state::chat::ChatState;
use crate::state::config::{ConfigField, ConfigState};
use crate::state::documents::{self, DocumentsState};
use crate::util::auth::install_session_guard;
use crate::util::markdown::render_markdown_html;

/// Workspace sub-views sharing one bot identity and session.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum WorkspaceTab {
    /// Paginated document list with ingestion and delete.
    #[default]
    Documents,
    /// Model configuration editor with dirty-gated save.
    Configurations,
    /// Chat transcript against the bot's content.
    Search,
}

impl WorkspaceTab {
    /// Render order of the tab selector.
    pub const ALL: [WorkspaceTab; 3] = [
        WorkspaceTab::Documents,
        WorkspaceTab::Configurations,
        WorkspaceTab::Search,
    ];

    /// Tab selector caption.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            WorkspaceTab::Documents => "Documents",
            WorkspaceTab::Configurations => "Configurations",
            WorkspaceTab::Search => "Search",
        }
    }
}

/// Workspace page. Reads the composite `name__id` token from the route,
/// redirects to `/login` when no fresh session exists.
#[component]
pub fn BotPage() -> impl IntoView {
    let navigate = use_navigate();
    let params = use_params_map();

    // Resolve the identity once per route token; it stays fixed for the
    // lifetime of the view.
    let identity = Memo::new(move |_| {
        params
            .read()
            .get("id")
            .map(|token| BotIdentity::from_route_token(&token))
    });
    let bot_name = move || {
        identity
            .get()
            .map(|i| i.name)
            .unwrap_or_else(|| FALLBACK_BOT_NAME.to_owned())
    };

    install_session_guard(navigate.clone());

    let tab = RwSignal::new(WorkspaceTab::Documents);
    let documents = RwSignal::new(DocumentsState::default());
    let config = RwSignal::new(ConfigState::default());
    let chat = RwSignal::new(ChatState::default());
    let chat_input = RwSignal::new(String::new());
    let show_add_modal = RwSignal::new(false);

    #[cfg(feature = "hydrate")]
    let alive = std::sync::Arc::new(std::sync::atomic::AtomicBool::new(true));
    #[cfg(feature = "hydrate")]
    {
        let alive = alive.clone();
        on_cleanup(move || alive.store(false, std::sync::atomic::Ordering::Relaxed));
    }

    // Document fetches are keyed on (bot, page): identity or page changes
    // replace the page wholesale, local mutations never refetch. Clearing
    // the key forces a refresh of the current page.
    let last_docs_key = RwSignal::new(None::<(String, u32)>);
    #[cfg(feature = "hydrate")]
    {
        let alive = alive.clone();
        let navigate = navigate.clone();
        Effect::new(move || {
            let Some(identity) = identity.get() else {
                return;
            };
            let page = documents.get().page;
            let key = (identity.id.clone(), page);
            // Tracked read: clearing the key (post-ingestion) re-runs the
            // effect and refreshes the current page.
            if last_docs_key.get().as_ref() == Some(&key) {
                return;
            }
            last_docs_key.set(Some(key));
            documents.update(|d| d.loading = true);
            let alive = alive.clone();
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                let result = crate::net::api::fetch_documents(&identity, page).await;
                if !alive.load(std::sync::atomic::Ordering::Relaxed) {
                    return;
                }
                match result {
                    Ok(docs) => documents.update(|d| d.apply_page(docs)),
                    Err(crate::net::error::ApiError::Unauthenticated) => {
                        navigate("/login", NavigateOptions::default());
                    }
                    Err(err) => {
                        leptos::logging::warn!("failed to load documents: {err}");
                        documents.update(|d| d.loading = false);
                    }
                }
            });
        });
    }

    // Configuration loads once per bot.
    let last_config_key = RwSignal::new(None::<String>);
    #[cfg(feature = "hydrate")]
    {
        let alive = alive.clone();
        let navigate = navigate.clone();
        Effect::new(move || {
            let Some(identity) = identity.get() else {
                return;
            };
            if last_config_key.get_untracked().as_deref() == Some(identity.id.as_str()) {
                return;
            }
            last_config_key.set(Some(identity.id.clone()));
            config.set(ConfigState::default());
            let alive = alive.clone();
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                let result = crate::net::api::fetch_config(&identity).await;
                if !alive.load(std::sync::atomic::Ordering::Relaxed) {
                    return;
                }
                match result {
                    Ok(loaded) => config.update(|c| c.apply_loaded(loaded)),
                    Err(crate::net::error::ApiError::Unauthenticated) => {
                        navigate("/login", NavigateOptions::default());
                    }
                    Err(err) => {
                        leptos::logging::warn!("failed to load config: {err}");
                        config.update(|c| c.loading = false);
                    }
                }
            });
        });
    }
    #[cfg(not(feature = "hydrate"))]
    let _ = last_config_key;

    #[cfg(feature = "hydrate")]
    let alive_save = alive.clone();
    let navigate_save = navigate.clone();
    let save_config = Callback::new(move |()| {
        if !config.get_untracked().is_dirty() {
            return;
        }
        let Some(identity) = identity.get_untracked() else {
            return;
        };
        let buffer = config.get_untracked().buffer;

        #[cfg(feature = "hydrate")]
        {
            let alive = alive_save.clone();
            let navigate = navigate_save.clone();
            leptos::task::spawn_local(async move {
                let result = crate::net::api::save_config(&identity, &buffer).await;
                if !alive.load(std::sync::atomic::Ordering::Relaxed) {
                    return;
                }
                match result {
                    Ok(()) => {
                        config.update(|c| c.apply_saved());
                        crate::util::dialog::alert("Configuration saved.");
                    }
                    Err(crate::net::error::ApiError::Unauthenticated) => {
                        navigate("/login", NavigateOptions::default());
                    }
                    Err(err) => crate::util::dialog::alert(&err.user_message()),
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = (&navigate_save, identity, buffer);
    });

    #[cfg(feature = "hydrate")]
    let alive_delete = alive.clone();
    let navigate_delete = navigate.clone();
    let on_delete_document = Callback::new(move |(document_id, document_name): (String, String)| {
        // Missing id or name is a local no-op, not an error.
        if !documents::can_delete(&document_id, &document_name) {
            return;
        }
        if !crate::util::dialog::confirm(&documents::confirm_delete_message(&document_name)) {
            return;
        }
        let Some(identity) = identity.get_untracked() else {
            return;
        };

        #[cfg(feature = "hydrate")]
        {
            let alive = alive_delete.clone();
            let navigate = navigate_delete.clone();
            leptos::task::spawn_local(async move {
                let result = crate::net::api::delete_document(&identity, &document_id, &document_name).await;
                if !alive.load(std::sync::atomic::Ordering::Relaxed) {
                    return;
                }
                match result {
                    Ok(()) => documents.update(|d| d.remove_document(&document_id)),
                    Err(crate::net::error::ApiError::Unauthenticated) => {
                        navigate("/login", NavigateOptions::default());
                    }
                    Err(err) => {
                        leptos::logging::warn!("failed to delete document: {err}");
                        crate::util::dialog::alert(crate::net::error::GENERIC_FAILURE);
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = (&navigate_delete, identity, document_id, document_name);
    });

    #[cfg(feature = "hydrate")]
    let alive_ask = alive.clone();
    let navigate_ask = navigate.clone();
    let ask = Callback::new(move |()| {
        let Some(query) = chat.get_untracked().prepare_query(&chat_input.get_untracked()) else {
            return;
        };
        let Some(identity) = identity.get_untracked() else {
            return;
        };
        chat.update(|c| c.begin());

        #[cfg(feature = "hydrate")]
        {
            let alive = alive_ask.clone();
            let navigate = navigate_ask.clone();
            leptos::task::spawn_local(async move {
                let result = crate::net::api::query_bot(&identity, &query).await;
                if !alive.load(std::sync::atomic::Ordering::Relaxed) {
                    return;
                }
                match result {
                    Ok(query_result) => {
                        chat.update(|c| c.push_exchange(query, &query_result));
                        chat_input.set(String::new());
                    }
                    Err(crate::net::error::ApiError::Unauthenticated) => {
                        chat.update(|c| c.fail());
                        navigate("/login", NavigateOptions::default());
                    }
                    Err(err) => {
                        chat.update(|c| c.fail());
                        crate::util::dialog::alert(&err.user_message());
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&navigate_ask, identity, query);
            chat.update(|c| c.fail());
        }
    });

    let on_modal_close = Callback::new(move |()| show_add_modal.set(false));
    // Refresh the current page (not page 1) so the new item shows up on the
    // next natural fetch.
    let on_content_added = Callback::new(move |()| last_docs_key.set(None));
    let navigate_modal = navigate.clone();
    let on_modal_unauthenticated = Callback::new(move |()| {
        navigate_modal("/login", NavigateOptions::default());
    });

    view! {
        <main class="workspace-page">
            <h1 class="workspace-page__title">"Bot Details: " <span>{bot_name}</span></h1>

            <div class="workspace-page__tabs">
                {WorkspaceTab::ALL
                    .into_iter()
                    .map(|t| {
                        view! {
                            <button
                                class="workspace-page__tab"
                                class:workspace-page__tab--active=move || tab.get() == t
                                on:click=move |_| tab.set(t)
                            >
                                {t.label()}
                            </button>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>

            <Show when=move || tab.get() == WorkspaceTab::Documents>
                <section class="panel">
                    <header class="panel__header">
                        <h2>"Documents"</h2>
                        <button class="btn btn--primary" on:click=move |_| show_add_modal.set(true)>
                            "+ Add Content"
                        </button>
                    </header>
                    {move || {
                        let state = documents.get();
                        if state.loading {
                            return view! { <p class="panel__status">"Loading documents..."</p> }.into_any();
                        }
                        if state.items.is_empty() {
                            return view! { <p class="panel__status">"No documents found."</p> }.into_any();
                        }
                        view! {
                            <ul class="document-list">
                                {state
                                    .items
                                    .into_iter()
                                    .map(|doc| {
                                        let delete_id = doc.document_id.clone();
                                        let delete_name = doc.name.clone();
                                        view! {
                                            <li class="document-list__item">
                                                {if doc.is_uploaded() {
                                                    view! { <span class="document-list__name">{doc.name.clone()}</span> }
                                                        .into_any()
                                                } else {
                                                    view! {
                                                        <a
                                                            class="document-list__link"
                                                            href=doc.source.clone()
                                                            target="_blank"
                                                            rel="noopener noreferrer"
                                                        >
                                                            {doc.name.clone()}
                                                        </a>
                                                    }
                                                        .into_any()
                                                }}
                                                <button
                                                    class="document-list__delete"
                                                    on:click=move |_| {
                                                        on_delete_document.run((delete_id.clone(), delete_name.clone()));
                                                    }
                                                >
                                                    "Delete"
                                                </button>
                                            </li>
                                        }
                                    })
                                    .collect::<Vec<_>>()}
                            </ul>
                        }
                            .into_any()
                    }}
                    <footer class="panel__pagination">
                        <button
                            class="btn"
                            disabled=move || documents.get().page <= 1
                            on:click=move |_| {
                                documents.update(|d| {
                                    d.prev_page();
                                });
                            }
                        >
                            "Previous"
                        </button>
                        <span class="panel__page">{move || format!("Page {}", documents.get().page)}</span>
                        <button
                            class="btn"
                            disabled=move || !documents.get().has_more
                            on:click=move |_| {
                                documents.update(|d| {
                                    d.next_page();
                                });
                            }
                        >
                            "Next"
                        </button>
                    </footer>
                </section>
            </Show>

            <Show when=move || tab.get() == WorkspaceTab::Configurations>
                <section class="panel">
                    {move || {
                        if config.get().loading {
                            return view! { <p class="panel__status">"Loading configuration..."</p> }.into_any();
                        }
                        view! {
                            <div class="config-form">
                                {ConfigField::ALL
                                    .into_iter()
                                    .map(|field| {
                                        view! {
                                            <label class="config-form__label">
                                                {field.label()}
                                                <input
                                                    class="config-form__input"
                                                    type=if field.is_numeric() { "number" } else { "text" }
                                                    step=field.is_numeric().then_some("0.1")
                                                    min=field.is_numeric().then_some("0")
                                                    max=field.is_numeric().then_some("1")
                                                    prop:value=move || config.get().field(field).to_owned()
                                                    on:input=move |ev| {
                                                        config.update(|c| c.set_field(field, event_target_value(&ev)));
                                                    }
                                                />
                                            </label>
                                        }
                                    })
                                    .collect::<Vec<_>>()}
                                <button
                                    class="btn btn--primary config-form__save"
                                    disabled=move || !config.get().is_dirty()
                                    on:click=move |_| save_config.run(())
                                >
                                    "Save"
                                </button>
                            </div>
                        }
                            .into_any()
                    }}
                </section>
            </Show>

            <Show when=move || tab.get() == WorkspaceTab::Search>
                <section class="panel panel--chat">
                    <h2>"Chat with your Bot"</h2>
                    <div class="chat-log">
                        {move || {
                            let state = chat.get();
                            if state.transcript.is_empty() && !state.searching {
                                return view! {
                                    <p class="chat-log__empty">"Ask your bot anything about its content."</p>
                                }
                                    .into_any();
                            }
                            state
                                .transcript
                                .into_iter()
                                .map(|exchange| {
                                    // Defensive second normalization before render.
                                    let rendered = render_markdown_html(
                                        &crate::state::chat::normalize_response(&exchange.response),
                                    );
                                    view! {
                                        <div class="chat-log__exchange">
                                            <div class="chat-log__query">
                                                <p class="chat-log__speaker">"You:"</p>
                                                <p class="chat-log__text">{exchange.query}</p>
                                            </div>
                                            <div class="chat-log__response">
                                                <p class="chat-log__speaker">"Bot:"</p>
                                                <div class="chat-log__markdown" inner_html=rendered></div>
                                            </div>
                                        </div>
                                    }
                                })
                                .collect::<Vec<_>>()
                                .into_any()
                        }}
                        {move || {
                            chat.get()
                                .searching
                                .then(|| view! { <div class="chat-log__searching">"Searching..."</div> })
                        }}
                    </div>
                    <div class="chat-input-row">
                        <input
                            class="chat-input-row__input"
                            type="text"
                            placeholder="Type your question..."
                            prop:value=move || chat_input.get()
                            on:input=move |ev| chat_input.set(event_target_value(&ev))
                            on:keydown=move |ev: leptos::ev::KeyboardEvent| {
                                if ev.key() == "Enter" {
                                    ev.prevent_default();
                                    ask.run(());
                                }
                            }
                        />
                        <button
                            class="btn btn--primary"
                            disabled=move || chat.get().searching || chat_input.get().trim().is_empty()
                            on:click=move |_| ask.run(())
                        >
                            "Send"
                        </button>
                    </div>
                </section>
            </Show>

            <Show when=move || show_add_modal.get()>
                {move || {
                    identity
                        .get()
                        .map(|identity| {
                            view! {
                                <AddContentModal
                                    identity=identity
                                    on_close=on_modal_close
                                    on_added=on_content_added
                                    on_unauthenticated=on_modal_unauthenticated
                                />
                            }
                        })
                }}
            </Show>
        </main>
    }
}
