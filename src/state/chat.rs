//! Proposal-scoped chat state: message filtering, ordering, and the
//! compose/send guards.
//!
//! DESIGN
//! ======
//! `ChatState` is a local projection of the shared channel. Filtered and
//! ordered views are derived fresh from the latest message set on every
//! call, never cached across a proposal-selection change, so a stale
//! conversation can never be displayed after the selection moves on.

#[cfg(test)]
#[path = "chat_test.rs"]
mod chat_test;

use serde_json::{Map, Value};

use crate::net::types::{ChatMessage, Participant};
use crate::state::connection::ConnectionStatus;

/// Identity this portal session publishes chat messages under.
///
/// Constructed once at the app root and provided via context, so separate
/// portal instances (multi-tab, multi-identity testing) never collide on a
/// shared constant.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChatIdentity(pub String);

/// Local projection of the shared chat channel plus the owned draft text.
#[derive(Clone, Debug, Default)]
pub struct ChatState {
    /// Full message sequence mirrored from the channel, unfiltered.
    pub messages: Vec<ChatMessage>,
    /// Currently connected peers; only the count is surfaced.
    pub participants: Vec<Participant>,
    /// Channel connection lifecycle state.
    pub connection_status: ConnectionStatus,
}

impl ChatState {
    /// Filtered and chronologically ordered view for one proposal.
    ///
    /// Recomputed from the full message set on every call.
    pub fn conversation(&self, proposal_id: Option<i64>) -> Vec<ChatMessage> {
        sort_by_timestamp(messages_for_proposal(&self.messages, proposal_id))
    }
}

/// Normalize a loosely typed `proposalId` metadata value to a strict
/// integer identifier.
///
/// Numbers and fully numeric strings normalize to their integer value;
/// proposal identifiers are integers >= 1, so fractional or non-positive
/// values normalize to "no identifier" along with every other shape.
pub fn normalize_proposal_id(value: Option<&Value>) -> Option<i64> {
    let id = match value? {
        Value::Number(number) => number.as_i64()?,
        Value::String(raw) => {
            let parsed: f64 = raw.trim().parse().ok()?;
            if !parsed.is_finite() || parsed.fract() != 0.0 {
                return None;
            }
            #[allow(clippy::cast_possible_truncation)]
            let truncated = parsed as i64;
            truncated
        }
        _ => return None,
    };
    (id >= 1).then_some(id)
}

/// Messages whose normalized `meta.proposalId` equals the target exactly,
/// in source order.
///
/// A `None` target yields the empty sequence: no selection means no
/// messages, so content can never leak across proposals. Messages with no
/// normalizable identifier match no target at all.
pub fn messages_for_proposal(messages: &[ChatMessage], proposal_id: Option<i64>) -> Vec<ChatMessage> {
    let Some(target) = proposal_id else {
        return Vec::new();
    };
    messages
        .iter()
        .filter(|message| normalize_proposal_id(message.meta.get("proposalId")) == Some(target))
        .cloned()
        .collect()
}

/// Parse an ISO-8601 timestamp to epoch milliseconds.
pub fn parse_timestamp_ms(raw: &str) -> Option<i64> {
    chrono::DateTime::parse_from_rfc3339(raw.trim())
        .ok()
        .map(|instant| instant.timestamp_millis())
}

/// Order messages ascending by parsed timestamp.
///
/// The sort is stable: messages with equal timestamps keep the relative
/// order they held in the input. An unparsable timestamp sorts as the
/// earliest expressible instant, i.e. before every valid one.
pub fn sort_by_timestamp(mut messages: Vec<ChatMessage>) -> Vec<ChatMessage> {
    messages.sort_by_key(|message| parse_timestamp_ms(&message.timestamp).unwrap_or(i64::MIN));
    messages
}

/// Whether the send affordance is enabled: channel connected, trimmed
/// draft non-empty, and a proposal selected.
pub fn can_send(status: ConnectionStatus, draft: &str, proposal_id: Option<i64>) -> bool {
    prepare_send(draft, status, proposal_id).is_some()
}

/// Re-check every send guard and return the trimmed body, or `None` when
/// submission must be a no-op.
pub fn prepare_send(draft: &str, status: ConnectionStatus, proposal_id: Option<i64>) -> Option<String> {
    if status != ConnectionStatus::Connected {
        return None;
    }
    proposal_id?;
    let trimmed = draft.trim();
    if trimmed.is_empty() {
        return None;
    }
    Some(trimmed.to_owned())
}

/// Routing metadata attached to every published chat message.
pub fn publish_meta(proposal_id: i64, dealer_id: Option<i64>) -> Map<String, Value> {
    let mut meta = Map::new();
    meta.insert("proposalId".to_owned(), Value::from(proposal_id));
    if let Some(dealer_id) = dealer_id {
        meta.insert("dealerId".to_owned(), Value::from(dealer_id));
    }
    meta.insert("scope".to_owned(), Value::from("proposal-chat"));
    meta
}

/// Trim and publish the draft through `publish`.
///
/// On success the draft is cleared. On failure the draft is left exactly
/// as the user typed it, so their text is never lost. Returns whether a
/// message was sent.
pub fn submit_draft<F>(
    draft: &mut String,
    status: ConnectionStatus,
    proposal_id: Option<i64>,
    dealer_id: Option<i64>,
    publish: F,
) -> bool
where
    F: FnOnce(&str, Map<String, Value>) -> bool,
{
    let Some(proposal_id) = proposal_id else {
        return false;
    };
    let Some(body) = prepare_send(draft, status, Some(proposal_id)) else {
        return false;
    };
    if publish(&body, publish_meta(proposal_id, dealer_id)) {
        draft.clear();
        true
    } else {
        false
    }
}
