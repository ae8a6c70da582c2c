//! Scrollable panel with the generated test cases (or the fallback text).

use leptos::prelude::*;

use crate::state::generator::GeneratorState;

/// Renders `result_text` verbatim once it is non-empty.
#[component]
pub fn ResultPanel() -> impl IntoView {
    let generator = expect_context::<RwSignal<GeneratorState>>();

    view! {
        <Show when=move || generator.with(GeneratorState::has_result)>
            <section class="result-panel" aria-live="polite">
                <h2 class="result-panel__title">"Generated Test Cases"</h2>
                <pre class="result-panel__body">
                    <code>{move || generator.with(|g| g.result_text().to_owned())}</code>
                </pre>
            </section>
        </Show>
    }
}
