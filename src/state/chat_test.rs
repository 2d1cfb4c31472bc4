use super::*;
use serde_json::json;

fn msg(id: &str, proposal: serde_json::Value, timestamp: &str) -> ChatMessage {
    let mut meta = Map::new();
    if !proposal.is_null() {
        meta.insert("proposalId".to_owned(), proposal);
    }
    ChatMessage {
        id: id.to_owned(),
        sender: "admin".to_owned(),
        body: format!("message {id}"),
        timestamp: timestamp.to_owned(),
        meta,
    }
}

// =============================================================
// normalize_proposal_id
// =============================================================

#[test]
fn normalize_accepts_numbers_and_numeric_strings() {
    assert_eq!(normalize_proposal_id(Some(&json!(5))), Some(5));
    assert_eq!(normalize_proposal_id(Some(&json!("5"))), Some(5));
    assert_eq!(normalize_proposal_id(Some(&json!(" 42 "))), Some(42));
}

#[test]
fn normalize_rejects_non_numeric_shapes() {
    assert_eq!(normalize_proposal_id(Some(&json!("abc"))), None);
    assert_eq!(normalize_proposal_id(Some(&json!(true))), None);
    assert_eq!(normalize_proposal_id(Some(&json!({"id": 5}))), None);
    assert_eq!(normalize_proposal_id(Some(&json!([5]))), None);
    assert_eq!(normalize_proposal_id(Some(&json!(null))), None);
    assert_eq!(normalize_proposal_id(None), None);
}

#[test]
fn normalize_rejects_fractional_and_non_positive_ids() {
    assert_eq!(normalize_proposal_id(Some(&json!("5.5"))), None);
    assert_eq!(normalize_proposal_id(Some(&json!(0))), None);
    assert_eq!(normalize_proposal_id(Some(&json!(-3))), None);
    assert_eq!(normalize_proposal_id(Some(&json!("0"))), None);
}

// =============================================================
// messages_for_proposal
// =============================================================

#[test]
fn filter_returns_only_exact_normalized_matches() {
    let messages = vec![
        msg("a", json!(42), "2024-01-01T10:00:00Z"),
        msg("b", json!("42"), "2024-01-01T10:01:00Z"),
        msg("c", json!(7), "2024-01-01T10:02:00Z"),
        msg("d", json!("not-a-number"), "2024-01-01T10:03:00Z"),
        msg("e", serde_json::Value::Null, "2024-01-01T10:04:00Z"),
    ];

    let filtered = messages_for_proposal(&messages, Some(42));
    let ids: Vec<&str> = filtered.iter().map(|m| m.id.as_str()).collect();
    assert_eq!(ids, vec!["a", "b"]);
}

#[test]
fn filter_with_no_selection_is_empty() {
    let messages = vec![
        msg("a", json!(42), "2024-01-01T10:00:00Z"),
        msg("b", serde_json::Value::Null, "2024-01-01T10:01:00Z"),
    ];
    assert!(messages_for_proposal(&messages, None).is_empty());
}

#[test]
fn filter_preserves_source_order() {
    let messages = vec![
        msg("late", json!(9), "2024-01-01T12:00:00Z"),
        msg("early", json!(9), "2024-01-01T08:00:00Z"),
    ];
    let filtered = messages_for_proposal(&messages, Some(9));
    assert_eq!(filtered[0].id, "late");
    assert_eq!(filtered[1].id, "early");
}

// =============================================================
// sort_by_timestamp
// =============================================================

#[test]
fn sort_orders_ascending_by_parsed_timestamp() {
    let messages = vec![
        msg("b", json!(1), "2024-01-02T00:00:00Z"),
        msg("a", json!(1), "2024-01-01T00:00:00Z"),
        msg("c", json!(1), "2024-01-03T00:00:00Z"),
    ];
    let sorted = sort_by_timestamp(messages);
    let ids: Vec<&str> = sorted.iter().map(|m| m.id.as_str()).collect();
    assert_eq!(ids, vec!["a", "b", "c"]);
}

#[test]
fn sort_is_stable_for_equal_timestamps() {
    let messages = vec![
        msg("first", json!(1), "2024-01-01T00:00:00Z"),
        msg("second", json!(1), "2024-01-01T00:00:00Z"),
        msg("third", json!(1), "2024-01-01T00:00:00Z"),
    ];
    let sorted = sort_by_timestamp(messages);
    let ids: Vec<&str> = sorted.iter().map(|m| m.id.as_str()).collect();
    assert_eq!(ids, vec!["first", "second", "third"]);
}

#[test]
fn unparsable_timestamps_sort_before_every_valid_instant() {
    let messages = vec![
        msg("valid", json!(1), "2024-01-01T00:00:00Z"),
        msg("garbage", json!(1), "not-a-date"),
        msg("empty", json!(1), ""),
    ];
    let sorted = sort_by_timestamp(messages);
    let ids: Vec<&str> = sorted.iter().map(|m| m.id.as_str()).collect();
    // Unparsable timestamps keep their relative order and precede valid ones.
    assert_eq!(ids, vec!["garbage", "empty", "valid"]);
}

#[test]
fn parse_timestamp_ms_handles_offsets_and_garbage() {
    assert_eq!(parse_timestamp_ms("1970-01-01T00:00:00Z"), Some(0));
    assert_eq!(
        parse_timestamp_ms("1970-01-01T01:00:00+01:00"),
        Some(0)
    );
    assert_eq!(parse_timestamp_ms("yesterday"), None);
}

// =============================================================
// conversation pipeline
// =============================================================

#[test]
fn conversation_filters_then_orders() {
    // Two proposals interleaved; proposal 42's messages arrive out of order.
    let chat = ChatState {
        messages: vec![
            msg("1", json!(42), "2024-01-01T00:00:02Z"),
            msg("2", json!(7), "2024-01-01T00:00:01Z"),
            msg("3", json!(42), "2024-01-01T00:00:01Z"),
        ],
        ..ChatState::default()
    };

    let ids: Vec<String> = chat
        .conversation(Some(42))
        .into_iter()
        .map(|m| m.id)
        .collect();
    assert_eq!(ids, vec!["3", "1"]);
}

#[test]
fn conversation_switches_cleanly_between_proposals() {
    let chat = ChatState {
        messages: vec![
            msg("ten-a", json!(10), "2024-01-01T00:00:00Z"),
            msg("eleven-a", json!(11), "2024-01-01T00:00:01Z"),
            msg("ten-b", json!(10), "2024-01-01T00:00:02Z"),
        ],
        ..ChatState::default()
    };

    let for_ten: Vec<String> = chat.conversation(Some(10)).into_iter().map(|m| m.id).collect();
    assert_eq!(for_ten, vec!["ten-a", "ten-b"]);

    // Selection moves on; the new view contains only the new proposal.
    let for_eleven: Vec<String> = chat.conversation(Some(11)).into_iter().map(|m| m.id).collect();
    assert_eq!(for_eleven, vec!["eleven-a"]);

    let for_none = chat.conversation(None);
    assert!(for_none.is_empty());
}

#[test]
fn conversation_is_idempotent_for_unchanged_inputs() {
    let chat = ChatState {
        messages: vec![
            msg("a", json!(5), "2024-01-01T00:00:01Z"),
            msg("b", json!(5), "bad-timestamp"),
            msg("c", json!(6), "2024-01-01T00:00:00Z"),
        ],
        ..ChatState::default()
    };

    assert_eq!(chat.conversation(Some(5)), chat.conversation(Some(5)));
}

// =============================================================
// compose/send guards
// =============================================================

#[test]
fn can_send_requires_connected_draft_and_selection() {
    assert!(can_send(ConnectionStatus::Connected, "hello", Some(1)));
    assert!(!can_send(ConnectionStatus::Connecting, "hello", Some(1)));
    assert!(!can_send(ConnectionStatus::Disconnected, "hello", Some(1)));
    assert!(!can_send(ConnectionStatus::Connected, "   ", Some(1)));
    assert!(!can_send(ConnectionStatus::Connected, "", Some(1)));
    assert!(!can_send(ConnectionStatus::Connected, "hello", None));
}

#[test]
fn prepare_send_trims_the_draft() {
    assert_eq!(
        prepare_send("  hello  ", ConnectionStatus::Connected, Some(10)),
        Some("hello".to_owned())
    );
    assert_eq!(prepare_send("  ", ConnectionStatus::Connected, Some(10)), None);
}

#[test]
fn publish_meta_carries_routing_fields() {
    let meta = publish_meta(10, Some(3));
    assert_eq!(meta.get("proposalId"), Some(&json!(10)));
    assert_eq!(meta.get("dealerId"), Some(&json!(3)));
    assert_eq!(meta.get("scope"), Some(&json!("proposal-chat")));

    let without_dealer = publish_meta(10, None);
    assert!(!without_dealer.contains_key("dealerId"));
}

#[test]
fn submit_draft_clears_on_success() {
    let mut draft = "  hello  ".to_owned();
    let sent = submit_draft(&mut draft, ConnectionStatus::Connected, Some(10), Some(3), |body, meta| {
        assert_eq!(body, "hello");
        assert_eq!(meta.get("proposalId"), Some(&json!(10)));
        true
    });
    assert!(sent);
    assert_eq!(draft, "");
}

#[test]
fn submit_draft_preserves_text_on_publish_failure() {
    let mut draft = "  hello  ".to_owned();
    let sent = submit_draft(&mut draft, ConnectionStatus::Connected, Some(10), None, |_, _| false);
    assert!(!sent);
    assert_eq!(draft, "  hello  ");
}

#[test]
fn submit_draft_is_a_noop_when_guards_fail() {
    let mut published = false;

    let mut draft = "hello".to_owned();
    let sent = submit_draft(&mut draft, ConnectionStatus::Disconnected, Some(10), None, |_, _| {
        published = true;
        true
    });
    assert!(!sent);
    assert!(!published);
    assert_eq!(draft, "hello");

    let mut draft = "hello".to_owned();
    let sent = submit_draft(&mut draft, ConnectionStatus::Connected, None, None, |_, _| {
        published = true;
        true
    });
    assert!(!sent);
    assert!(!published);

    let mut draft = "   ".to_owned();
    let sent = submit_draft(&mut draft, ConnectionStatus::Connected, Some(10), None, |_, _| {
        published = true;
        true
    });
    assert!(!sent);
    assert!(!published);
    assert_eq!(draft, "   ");
}
