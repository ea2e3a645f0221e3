//! Root application component with routing.
//!
//! ARCHITECTURE
//! ============
//! Routes map one-to-one onto the page modules. Sub-view state is owned by
//! the pages themselves (a workspace's transcript and edit buffers are
//! deliberately discarded on navigation), so no shared contexts are
//! provided here.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::{
    bot::BotPage, dashboard::DashboardPage, landing::LandingPage, login::LoginPage, signup::SignupPage,
    verify::VerifyPage,
};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component wiring client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Stylesheet id="leptos" href="/pkg/docubot.css"/>
        <Title text="Docubot"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=LandingPage/>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("signup") view=SignupPage/>
                <Route path=StaticSegment("verify") view=VerifyPage/>
                <Route path=StaticSegment("dashboard") view=DashboardPage/>
                <Route path=(StaticSegment("bot"), ParamSegment("id")) view=BotPage/>
            </Routes>
        </Router>
    }
}
