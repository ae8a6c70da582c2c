//! Static reference sections: the documented API and its sample payloads.
//!
//! SYSTEM CONTEXT
//! ==============
//! Rendered on every visit regardless of request state. The sample payloads
//! are typed so pretty-printing keeps the documented key order.

#[cfg(test)]
#[path = "reference_test.rs"]
mod reference_test;

use leptos::prelude::*;
use serde::Serialize;

const SAMPLE_METHOD: &str = "GET";
const SAMPLE_URL: &str = "https://jsonplaceholder.typicode.com/posts";
const SAMPLE_HEADERS: &str = "Authorization: Bearer <token>";
const SAMPLE_QUERY: &str = "None";

#[derive(Serialize)]
struct SamplePost {
    id: u32,
    title: &'static str,
    body: &'static str,
}

#[derive(Serialize)]
struct SampleSuccess {
    status: u16,
    data: Vec<SamplePost>,
}

#[derive(Serialize)]
struct SampleError {
    status: u16,
    error: &'static str,
}

/// "API Details" panel describing the endpoint under test.
#[component]
pub fn ApiDetailsPanel() -> impl IntoView {
    view! {
        <section class="panel">
            <h2 class="panel__title">"API Details"</h2>
            <pre class="code-block">
                <code>{api_details_text()}</code>
            </pre>
        </section>
    }
}

/// "Sample Responses" panel with one success and one error payload.
#[component]
pub fn SampleResponsesPanel() -> impl IntoView {
    view! {
        <section class="panel">
            <h2 class="panel__title panel__title--small">"Sample Responses"</h2>
            <hr class="panel__divider"/>
            <p class="panel__label">
                <strong>"Success Response:"</strong>
            </p>
            <pre class="code-block">
                <code>{sample_success_json()}</code>
            </pre>
            <p class="panel__label panel__label--spaced">
                <strong>"Error Response:"</strong>
            </p>
            <pre class="code-block">
                <code>{sample_error_json()}</code>
            </pre>
        </section>
    }
}

fn api_details_text() -> String {
    format!(
        "Method: {SAMPLE_METHOD}\nURL: {SAMPLE_URL}\nHeaders: {SAMPLE_HEADERS}\nQuery Parameters: {SAMPLE_QUERY}\n"
    )
}

fn sample_success_json() -> String {
    pretty(&SampleSuccess {
        status: 200,
        data: vec![SamplePost { id: 1, title: "Sample Post", body: "This is a sample post." }],
    })
}

fn sample_error_json() -> String {
    pretty(&SampleError { status: 404, error: "Not Found" })
}

fn pretty(value: &impl Serialize) -> String {
    serde_json::to_string_pretty(value).unwrap_or_default()
}
