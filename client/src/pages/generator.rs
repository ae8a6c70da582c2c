//! Generator page: reference material, trigger control, and result.
//!
//! SYSTEM CONTEXT
//! ==============
//! The only page of the app. Clicking the trigger spawns one request task
//! through `run_generation`; the task writes back into the shared
//! `RwSignal<GeneratorState>` and the view reacts to it.

use leptos::prelude::*;

use crate::components::generate_button::GenerateButton;
use crate::components::loading_indicator::LoadingIndicator;
use crate::components::reference::{ApiDetailsPanel, SampleResponsesPanel};
use crate::components::result_panel::ResultPanel;
#[cfg(feature = "hydrate")]
use crate::config::ApiConfig;
use crate::state::generator::GeneratorState;

#[cfg(all(test, feature = "ssr"))]
#[path = "generator_test.rs"]
mod generator_test;

#[component]
pub fn GeneratorPage() -> impl IntoView {
    let generator = expect_context::<RwSignal<GeneratorState>>();
    #[cfg(feature = "hydrate")]
    let api_config = expect_context::<ApiConfig>();

    let busy = Signal::derive(move || generator.with(GeneratorState::trigger_disabled));

    let on_generate = Callback::new(move |()| {
        #[cfg(feature = "hydrate")]
        {
            let endpoint = api_config.endpoint();
            leptos::task::spawn_local(async move {
                crate::state::generator::run_generation(&generator, || {
                    crate::net::api::generate_test_cases(&endpoint)
                })
                .await;
            });
        }
    });

    view! {
        <main class="generator">
            <header class="generator__header">
                <h1 class="generator__title">"API Test Case Generator"</h1>
                <p class="generator__subtitle">
                    "This tool generates API test cases for a given endpoint using an open-source LLM."
                </p>
            </header>

            <ApiDetailsPanel/>
            <SampleResponsesPanel/>

            <GenerateButton busy=busy on_generate=on_generate/>

            <Show when=move || generator.with(GeneratorState::shows_loading_indicator)>
                <div class="generator__loading">
                    <LoadingIndicator/>
                </div>
            </Show>

            <ResultPanel/>
        </main>
    }
}
