//! # dealer-portal
//!
//! Leptos + WASM front-end for the vehicle-financing dealer portal. The
//! proposal pipeline embeds a realtime chat scoped to one proposal at a
//! time; the realtime transport is an external channel service consumed
//! through `net::channel_client`.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::App;

    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(App);
}
