//! Networking for the generation service.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` performs the single outbound call and classifies its outcome, and
//! `types` defines the response schema.

pub mod api;
pub mod types;
