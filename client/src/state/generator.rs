//! Generator state: loading flag, result text, and the request lifecycle.
//!
//! DESIGN
//! ======
//! The page moves through three observable phases:
//!
//! ```text
//! Idle --request_started--> Pending --succeeded/failed--> Settled
//!                              ^                             |
//!                              +-------request_started-------+
//! ```
//!
//! Each started request gets a `RequestTicket`. A completion only applies if
//! its ticket matches the outstanding request, so a late answer can never
//! overwrite a newer one or mix two outcomes.
//!
//! TEARDOWN
//! ========
//! `run_generation` writes through `GeneratorStore::try_modify`. For an
//! `RwSignal` that is `try_update`, which yields `None` once the owning
//! component has been disposed, so a completion arriving after teardown is
//! dropped instead of touching freed state.

#[cfg(test)]
#[path = "generator_test.rs"]
mod generator_test;

use std::future::Future;

use leptos::prelude::*;

use crate::net::api::RequestFailed;

/// Text shown for every failed request.
pub const FALLBACK_TEXT: &str = "Failed to fetch test cases.";

/// Observable phase of the generator page.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Phase {
    /// No request has been made yet.
    #[default]
    Idle,
    /// A request is in flight.
    Pending,
    /// The latest request completed, successfully or not.
    Settled,
}

/// Proof that a request was started; required to settle it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RequestTicket(u64);

/// Loading flag and result text for the generator page.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct GeneratorState {
    is_loading: bool,
    result_text: String,
    request_seq: u64,
    settled_seq: u64,
}

impl GeneratorState {
    /// True only while a request is in flight.
    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    /// Generated text or `FALLBACK_TEXT`; empty until the first completion.
    pub fn result_text(&self) -> &str {
        &self.result_text
    }

    pub fn phase(&self) -> Phase {
        if self.is_loading {
            Phase::Pending
        } else if self.settled_seq > 0 {
            Phase::Settled
        } else {
            Phase::Idle
        }
    }

    /// Begin a request. Returns `None` while another one is outstanding.
    pub fn request_started(&mut self) -> Option<RequestTicket> {
        if self.is_loading {
            return None;
        }
        self.request_seq += 1;
        self.is_loading = true;
        Some(RequestTicket(self.request_seq))
    }

    /// Store generated text. Returns `false` if `ticket` is stale.
    pub fn request_succeeded(&mut self, ticket: RequestTicket, text: String) -> bool {
        if !self.is_outstanding(ticket) {
            return false;
        }
        self.result_text = text;
        self.finish(ticket);
        true
    }

    /// Store the fallback text. Returns `false` if `ticket` is stale.
    pub fn request_failed(&mut self, ticket: RequestTicket) -> bool {
        if !self.is_outstanding(ticket) {
            return false;
        }
        FALLBACK_TEXT.clone_into(&mut self.result_text);
        self.finish(ticket);
        true
    }

    /// Apply a request outcome through the matching transition.
    pub fn settle(&mut self, ticket: RequestTicket, outcome: Result<String, RequestFailed>) -> bool {
        match outcome {
            Ok(text) => self.request_succeeded(ticket, text),
            Err(_) => self.request_failed(ticket),
        }
    }

    /// The trigger control is disabled exactly while a request is in flight.
    pub fn trigger_disabled(&self) -> bool {
        self.is_loading
    }

    pub fn shows_loading_indicator(&self) -> bool {
        self.is_loading
    }

    /// Whether the result panel is rendered.
    pub fn has_result(&self) -> bool {
        !self.result_text.is_empty()
    }

    fn is_outstanding(&self, ticket: RequestTicket) -> bool {
        self.is_loading && ticket.0 == self.request_seq
    }

    fn finish(&mut self, ticket: RequestTicket) {
        self.is_loading = false;
        self.settled_seq = ticket.0;
    }
}

/// Somewhere `GeneratorState` lives and can be mutated in place.
pub trait GeneratorStore {
    /// Run `f` against the state. `None` means the state is gone.
    fn try_modify<R>(&self, f: impl FnOnce(&mut GeneratorState) -> R) -> Option<R>;
}

impl GeneratorStore for RwSignal<GeneratorState> {
    fn try_modify<R>(&self, f: impl FnOnce(&mut GeneratorState) -> R) -> Option<R> {
        self.try_update(f)
    }
}

/// Drive one request/response cycle against `store`.
///
/// Returns `None` without calling `fetch` if a request is already in flight,
/// and `None` if the store was torn down before the response arrived.
/// Otherwise returns the phase after settling.
pub async fn run_generation<S, F, Fut>(store: &S, fetch: F) -> Option<Phase>
where
    S: GeneratorStore,
    F: FnOnce() -> Fut,
    Fut: Future<Output = Result<String, RequestFailed>>,
{
    let ticket = store.try_modify(GeneratorState::request_started).flatten()?;
    let outcome = fetch().await;
    if let Err(err) = &outcome {
        log::warn!("test case generation failed: {err}");
    }
    store.try_modify(|state| {
        state.settle(ticket, outcome);
        state.phase()
    })
}
