//! Networking modules for HTTP + the realtime channel protocol.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` handles REST calls, `channel_client` manages the channel socket
//! lifecycle, and `types` defines the shared wire schema.

pub mod api;
pub mod channel_client;
pub mod types;
