//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::config::{API_BASE_META_NAME, ApiConfig};
use crate::pages::generator::GeneratorPage;
use crate::state::generator::GeneratorState;

/// HTML shell rendered on the server for SSR + hydration.
///
/// The resolved endpoint base URL is written into a `<meta>` tag so the
/// hydrated bundle picks up the same configuration the server was started with.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    let api_config = use_context::<ApiConfig>().unwrap_or_default();
    let api_base = api_config.base_url().to_owned();

    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <meta name=API_BASE_META_NAME content=api_base/>
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

/// Root application component.
///
/// Provides the endpoint configuration and the generator state container,
/// then routes `/` to the generator page.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    // Server render: provided per request by the host. Browser: read back from the shell.
    let api_config = use_context::<ApiConfig>()
        .or_else(ApiConfig::from_document)
        .unwrap_or_default();
    provide_context(api_config);
    provide_context(RwSignal::new(GeneratorState::default()));

    view! {
        <Stylesheet id="leptos" href="/pkg/testgen.css"/>
        <Title text="API Test Case Generator"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=GeneratorPage/>
            </Routes>
        </Router>
    }
}
