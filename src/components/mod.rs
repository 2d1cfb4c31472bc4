//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render portal chrome and the proposal detail surfaces while
//! reading/writing shared state from Leptos context providers.

pub mod proposal_chat;
pub mod proposal_details;
pub mod status_badge;
