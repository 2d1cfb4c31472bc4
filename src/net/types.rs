//! Wire DTOs for the realtime channel collaborator.
//!
//! DESIGN
//! ======
//! These types mirror the channel service's JSON payloads so serde decode
//! stays schema-driven and undecodable events can be dropped at the edge
//! instead of leaking into view state.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Shared channel name for proposal chat traffic.
pub const CHAT_CHANNEL: &str = "chat";

/// One chat message on the shared channel.
///
/// `meta` is an open mapping; proposal routing uses its `proposalId` entry,
/// which may arrive as a number or a numeric string depending on the
/// publisher.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    /// Opaque identifier, unique within a channel session.
    pub id: String,
    /// Identity string of the publisher.
    pub sender: String,
    /// Message text.
    #[serde(default)]
    pub body: String,
    /// ISO-8601 timestamp as received; not guaranteed to parse.
    #[serde(default)]
    pub timestamp: String,
    /// Open routing/context metadata (`proposalId`, `dealerId`, `scope`, ...).
    #[serde(default)]
    pub meta: serde_json::Map<String, serde_json::Value>,
}

/// A peer currently attached to the channel.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Participant {
    /// Identity string the peer attached with.
    pub identity: String,
    /// Attachment metadata supplied by the peer, if any.
    #[serde(default)]
    pub meta: serde_json::Map<String, serde_json::Value>,
}

/// Server-to-client event on the channel socket.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ChannelEvent {
    /// A single live message broadcast to the channel.
    Message { message: ChatMessage },
    /// Full message history replayed after attach.
    History {
        #[serde(default)]
        messages: Vec<ChatMessage>,
    },
    /// Replacement set of currently connected participants.
    Presence {
        #[serde(default)]
        participants: Vec<Participant>,
    },
    /// Connection status as reported by the channel service. The vocabulary
    /// is owned by the collaborator and may drift; see
    /// [`crate::state::connection::ConnectionStatus::from_wire`].
    Status { status: String },
}

/// Client-to-server command on the channel socket.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ClientCommand {
    /// Attach to a channel under an identity.
    Subscribe {
        channel: String,
        identity: String,
        #[serde(default)]
        meta: serde_json::Map<String, serde_json::Value>,
    },
    /// Broadcast a message with routing metadata.
    Publish {
        id: String,
        channel: String,
        sender: String,
        body: String,
        #[serde(default)]
        meta: serde_json::Map<String, serde_json::Value>,
    },
}
