//! REST helpers for the portal backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning `None` since these endpoints are
//! only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Option` outputs instead of panics so a failed fetch
//! degrades to an error banner without crashing hydration.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use crate::state::proposals::Proposal;

#[cfg(any(test, feature = "hydrate"))]
fn proposals_endpoint() -> &'static str {
    "/api/proposals"
}

/// Fetch the proposal pipeline for the authenticated dealer.
/// Returns `None` on any failure or on the server.
pub async fn fetch_proposals() -> Option<Vec<Proposal>> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(proposals_endpoint())
            .send()
            .await
            .ok()?;
        if !resp.ok() {
            return None;
        }
        resp.json::<Vec<Proposal>>().await.ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}
