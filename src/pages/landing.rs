//! Public landing page with signup/login entry points.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

/// Marketing shell shown to unauthenticated visitors.
#[component]
pub fn LandingPage() -> impl IntoView {
    let navigate = use_navigate();

    let navigate_signup = navigate.clone();
    let on_signup = move |_| {
        navigate_signup("/signup", NavigateOptions::default());
    };

    let navigate_login = navigate.clone();
    let on_login = move |_| {
        navigate_login("/login", NavigateOptions::default());
    };

    let steps = [
        "Create a Bot",
        "Upload Content (PDF, DOCX, TXT, URL, or Text)",
        "AI Processes Your Content",
        "Chat with Your Bot",
    ];

    view! {
        <main class="landing-page">
            <section class="landing-page__hero">
                <h1>"Turn Your Documents into Smart, Searchable AI Chatbots"</h1>
                <p>"Upload PDFs, DOCs, TXT files, URLs, or raw text - create a bot that answers from your content."</p>
                <div class="landing-page__actions">
                    <button class="btn btn--primary" on:click=on_signup>
                        "Create Your First Bot"
                    </button>
                    <button class="btn" on:click=on_login>
                        "Login"
                    </button>
                </div>
            </section>
            <section class="landing-page__steps">
                <h2>"How It Works"</h2>
                <div class="landing-page__step-grid">
                    {steps
                        .into_iter()
                        .enumerate()
                        .map(|(i, step)| {
                            view! {
                                <div class="landing-page__step">
                                    <div class="landing-page__step-number">{i + 1}</div>
                                    <p>{step}</p>
                                </div>
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>
            </section>
        </main>
    }
}
