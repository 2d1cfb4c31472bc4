use super::*;

#[test]
fn message_event_decodes_with_open_metadata() {
    let event: ChannelEvent = serde_json::from_str(
        r#"{
            "type": "message",
            "message": {
                "id": "m1",
                "sender": "admin",
                "body": "Proposta em análise",
                "timestamp": "2024-03-05T14:30:00Z",
                "meta": {"proposalId": "42", "scope": "proposal-chat"}
            }
        }"#,
    )
    .expect("message event should decode");

    let ChannelEvent::Message { message } = event else {
        panic!("expected message event");
    };
    assert_eq!(message.id, "m1");
    assert_eq!(message.meta.get("proposalId"), Some(&serde_json::json!("42")));
}

#[test]
fn message_fields_default_when_absent() {
    let message: ChatMessage =
        serde_json::from_str(r#"{"id": "m1", "sender": "admin"}"#).expect("sparse message should decode");
    assert_eq!(message.body, "");
    assert_eq!(message.timestamp, "");
    assert!(message.meta.is_empty());
}

#[test]
fn history_and_presence_events_default_to_empty_sets() {
    let history: ChannelEvent =
        serde_json::from_str(r#"{"type": "history"}"#).expect("history event should decode");
    assert_eq!(history, ChannelEvent::History { messages: Vec::new() });

    let presence: ChannelEvent =
        serde_json::from_str(r#"{"type": "presence"}"#).expect("presence event should decode");
    assert_eq!(
        presence,
        ChannelEvent::Presence {
            participants: Vec::new()
        }
    );
}

#[test]
fn status_event_carries_the_raw_vocabulary() {
    let event: ChannelEvent = serde_json::from_str(r#"{"type": "status", "status": "reconnecting"}"#)
        .expect("status event should decode");
    assert_eq!(
        event,
        ChannelEvent::Status {
            status: "reconnecting".to_owned()
        }
    );
}

#[test]
fn unknown_event_types_fail_to_decode() {
    assert!(serde_json::from_str::<ChannelEvent>(r#"{"type": "typing", "identity": "admin"}"#).is_err());
}

#[test]
fn publish_command_serializes_with_a_type_tag() {
    let mut meta = serde_json::Map::new();
    meta.insert("proposalId".to_owned(), serde_json::json!(10));
    let command = ClientCommand::Publish {
        id: "c1".to_owned(),
        channel: CHAT_CHANNEL.to_owned(),
        sender: "logista".to_owned(),
        body: "olá".to_owned(),
        meta,
    };

    let value = serde_json::to_value(&command).expect("command should serialize");
    assert_eq!(value["type"], "publish");
    assert_eq!(value["channel"], "chat");
    assert_eq!(value["meta"]["proposalId"], 10);
}
