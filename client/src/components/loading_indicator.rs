//! Animated indicator shown while a request is in flight.

use leptos::prelude::*;

#[component]
pub fn LoadingIndicator() -> impl IntoView {
    view! {
        <div class="loading-indicator" role="status" aria-label="Generating test cases">
            <span class="loading-indicator__dot"></span>
            <span class="loading-indicator__dot"></span>
            <span class="loading-indicator__dot"></span>
        </div>
    }
}
