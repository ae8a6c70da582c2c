//! Trigger control for a generation request.

#[cfg(test)]
#[path = "generate_button_test.rs"]
mod generate_button_test;

use leptos::prelude::*;

/// Full-width-on-mobile button that starts a request.
///
/// Disabled and relabelled while `busy` is true.
#[component]
pub fn GenerateButton(#[prop(into)] busy: Signal<bool>, on_generate: Callback<()>) -> impl IntoView {
    view! {
        <div class="generator__actions">
            <button
                class="generator__button"
                type="button"
                disabled=move || busy.get()
                aria-busy=move || busy.get().to_string()
                on:click=move |_| on_generate.run(())
            >
                {move || button_label(busy.get())}
            </button>
        </div>
    }
}

fn button_label(busy: bool) -> &'static str {
    if busy { "Generating Response..." } else { "Generate Test Cases" }
}
