//! Add Content modal for multi-source ingestion.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each of the three source kinds (raw text, URL, file URL) is optional and
//! independently provided; non-empty kinds travel as single-element arrays.
//! The modal guarantees at most one in-flight submission: the submit
//! affordance is disabled and a blocking progress indicator is shown until
//! the call resolves.

use leptos::prelude::*;

use crate::state::bot::BotIdentity;
use crate::state::ingest::IngestState;

/// Modal dialog for submitting new bot content.
///
/// `on_added` fires after a confirmed ingestion so the document list can
/// refresh its current page; `on_unauthenticated` routes back to login.
#[component]
pub fn AddContentModal(
    identity: BotIdentity,
    on_close: Callback<()>,
    on_added: Callback<()>,
    on_unauthenticated: Callback<()>,
) -> impl IntoView {
    let name = RwSignal::new(String::new());
    let raw_text = RwSignal::new(String::new());
    let url = RwSignal::new(String::new());
    let file_url = RwSignal::new(String::new());
    let ingest = RwSignal::new(IngestState::default());

    #[cfg(feature = "hydrate")]
    let alive = std::sync::Arc::new(std::sync::atomic::AtomicBool::new(true));
    #[cfg(feature = "hydrate")]
    {
        let alive = alive.clone();
        on_cleanup(move || alive.store(false, std::sync::atomic::Ordering::Relaxed));
    }

    let on_submit = move |_| {
        let mut claimed = false;
        ingest.update(|i| claimed = i.try_begin());
        if !claimed {
            return;
        }
        let payload = crate::state::ingest::add_content_payload(
            &identity,
            &name.get_untracked(),
            &raw_text.get_untracked(),
            &url.get_untracked(),
            &file_url.get_untracked(),
        );

        #[cfg(feature = "hydrate")]
        {
            let alive = alive.clone();
            leptos::task::spawn_local(async move {
                let result = crate::net::api::add_content(&payload).await;
                if !alive.load(std::sync::atomic::Ordering::Relaxed) {
                    return;
                }
                ingest.update(|i| i.finish());
                match result {
                    Ok(()) => {
                        crate::util::dialog::alert("Content added successfully.");
                        on_added.run(());
                        on_close.run(());
                    }
                    Err(crate::net::error::ApiError::Unauthenticated) => {
                        on_unauthenticated.run(());
                    }
                    Err(err) => crate::util::dialog::alert(&err.user_message()),
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (payload, on_added, on_unauthenticated);
            ingest.update(|i| i.finish());
        }
    };

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_close.run(())>
            <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                <Show when=move || ingest.get().pending>
                    <div class="dialog__progress">
                        <div class="dialog__spinner"></div>
                    </div>
                </Show>
                <h2>"Add Content"</h2>
                <label class="dialog__label">
                    "Name"
                    <input
                        class="dialog__input"
                        type="text"
                        prop:value=move || name.get()
                        on:input=move |ev| name.set(event_target_value(&ev))
                    />
                </label>
                <label class="dialog__label">
                    "Raw Text"
                    <textarea
                        class="dialog__input"
                        rows="2"
                        prop:value=move || raw_text.get()
                        on:input=move |ev| raw_text.set(event_target_value(&ev))
                    ></textarea>
                </label>
                <label class="dialog__label">
                    "URL"
                    <input
                        class="dialog__input"
                        type="text"
                        prop:value=move || url.get()
                        on:input=move |ev| url.set(event_target_value(&ev))
                    />
                </label>
                <label class="dialog__label">
                    "File URL"
                    <input
                        class="dialog__input"
                        type="text"
                        prop:value=move || file_url.get()
                        on:input=move |ev| file_url.set(event_target_value(&ev))
                    />
                </label>
                <div class="dialog__actions">
                    <button class="btn" on:click=move |_| on_close.run(())>
                        "Cancel"
                    </button>
                    <button
                        class="btn btn--primary"
                        disabled=move || ingest.get().pending
                        on:click=on_submit
                    >
                        "Submit"
                    </button>
                </div>
            </div>
        </div>
    }
}
