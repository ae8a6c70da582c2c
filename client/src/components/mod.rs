//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the static reference material and the request controls,
//! reading generator state from Leptos context where they need it.

pub mod generate_button;
pub mod loading_indicator;
pub mod reference;
pub mod result_panel;
