//! Realtime channel client: subscription lifecycle, event dispatch, and
//! the publish handle.
//!
//! The transport itself (delivery, ordering, fan-out) belongs to the
//! channel service; this module only maintains the socket lifecycle and
//! translates its JSON events into `ChatState` updates. All WebSocket
//! logic is gated behind `#[cfg(feature = "hydrate")]` since it requires
//! a browser environment.
//!
//! ERROR HANDLING
//! ==============
//! Undecodable events are dropped, publish failures surface as a `false`
//! return, and transport errors feed the reconnect loop. Nothing here is
//! fatal to the UI.

#[cfg(test)]
#[path = "channel_client_test.rs"]
mod channel_client_test;

use serde_json::{Map, Value};

use crate::net::types::{ChannelEvent, ClientCommand};
use crate::state::chat::ChatState;
use crate::state::connection::ConnectionStatus;

/// Static subscription parameters for one channel attachment.
#[derive(Clone, Debug, PartialEq)]
pub struct ChannelConfig {
    pub channel: String,
    pub identity: String,
    pub url: String,
    /// Attachment metadata announced to the channel on subscribe.
    pub metadata: Map<String, Value>,
}

impl ChannelConfig {
    pub fn new(channel: &str, identity: &str, url: &str) -> Self {
        Self {
            channel: channel.to_owned(),
            identity: identity.to_owned(),
            url: url.to_owned(),
            metadata: Map::new(),
        }
    }

    /// Tag the attachment with an `origin` so the other side can tell
    /// which surface the traffic comes from.
    #[must_use]
    pub fn with_origin(mut self, origin: &str) -> Self {
        self.metadata.insert("origin".to_owned(), Value::from(origin));
        self
    }
}

/// Cloneable publish handle for the active channel connection.
///
/// The default value has no connection and refuses every send, which is
/// the correct behavior on the server and before the client has spawned.
#[derive(Clone, Debug, Default)]
pub struct ChannelSender {
    channel: String,
    identity: String,
    #[cfg(feature = "hydrate")]
    tx: Option<futures::channel::mpsc::UnboundedSender<String>>,
}

impl ChannelSender {
    /// Publish a message body with routing metadata.
    ///
    /// Returns `true` only when the payload was handed to an active
    /// connection; callers must treat `false` as "not sent" and keep the
    /// user's draft.
    pub fn send_message(&self, body: &str, meta: Map<String, Value>) -> bool {
        let command = ClientCommand::Publish {
            id: uuid::Uuid::new_v4().to_string(),
            channel: self.channel.clone(),
            sender: self.identity.clone(),
            body: body.to_owned(),
            meta,
        };
        match serde_json::to_string(&command) {
            Ok(payload) => self.transmit(&payload),
            Err(_) => false,
        }
    }

    #[cfg(feature = "hydrate")]
    fn transmit(&self, payload: &str) -> bool {
        self.tx
            .as_ref()
            .is_some_and(|tx| tx.unbounded_send(payload.to_owned()).is_ok())
    }

    #[cfg(not(feature = "hydrate"))]
    fn transmit(&self, _payload: &str) -> bool {
        false
    }
}

/// Apply one collaborator event to the chat projection.
///
/// Redelivered message ids are ignored so the mirror stays idempotent;
/// history and presence events replace their whole set.
pub fn apply_channel_event(chat: &mut ChatState, event: ChannelEvent) {
    match event {
        ChannelEvent::Message { message } => {
            if !chat.messages.iter().any(|existing| existing.id == message.id) {
                chat.messages.push(message);
            }
        }
        ChannelEvent::History { messages } => chat.messages = messages,
        ChannelEvent::Presence { participants } => chat.participants = participants,
        ChannelEvent::Status { status } => {
            chat.connection_status = ConnectionStatus::from_wire(&status);
        }
    }
}

/// Derive the realtime endpoint from the page location, matching the
/// scheme (`ws`/`wss`) to the page protocol.
#[cfg(feature = "hydrate")]
pub fn realtime_url_from_location() -> String {
    let location = web_sys::window()
        .and_then(|w| w.location().href().ok())
        .unwrap_or_default();
    let ws_proto = if location.starts_with("https") { "wss" } else { "ws" };
    let host = web_sys::window()
        .and_then(|w| w.location().host().ok())
        .unwrap_or_else(|| "localhost:3000".to_owned());
    format!("{ws_proto}://{host}/realtime")
}

/// Spawn the channel client lifecycle as a local async task and return
/// the publish handle wired to it.
#[cfg(feature = "hydrate")]
pub fn spawn_channel_client(
    config: ChannelConfig,
    chat: leptos::prelude::RwSignal<ChatState>,
) -> ChannelSender {
    use futures::channel::mpsc;

    let (tx, rx) = mpsc::unbounded::<String>();
    let sender = ChannelSender {
        channel: config.channel.clone(),
        identity: config.identity.clone(),
        tx: Some(tx),
    };

    leptos::task::spawn_local(channel_client_loop(config, chat, rx));

    sender
}

/// Main connection loop with reconnect and exponential backoff.
#[cfg(feature = "hydrate")]
async fn channel_client_loop(
    config: ChannelConfig,
    chat: leptos::prelude::RwSignal<ChatState>,
    rx: futures::channel::mpsc::UnboundedReceiver<String>,
) {
    use leptos::prelude::Update;
    use std::cell::RefCell;
    use std::rc::Rc;

    let rx = Rc::new(RefCell::new(rx));
    let mut backoff_ms: u32 = 1000;
    let max_backoff_ms: u32 = 10_000;

    loop {
        chat.update(|c| c.connection_status = ConnectionStatus::Connecting);

        match connect_and_run(&config, chat, &rx).await {
            Ok(()) => {
                leptos::logging::log!("channel closed cleanly");
                chat.update(|c| c.connection_status = ConnectionStatus::Disconnected);
            }
            Err(e) => {
                leptos::logging::warn!("channel error: {e}");
                chat.update(|c| c.connection_status = ConnectionStatus::Error);
            }
        }

        gloo_timers::future::sleep(std::time::Duration::from_millis(u64::from(backoff_ms))).await;
        backoff_ms = (backoff_ms * 2).min(max_backoff_ms);
    }
}

/// Attach to the channel and process events until disconnect.
#[cfg(feature = "hydrate")]
async fn connect_and_run(
    config: &ChannelConfig,
    chat: leptos::prelude::RwSignal<ChatState>,
    rx: &std::rc::Rc<std::cell::RefCell<futures::channel::mpsc::UnboundedReceiver<String>>>,
) -> Result<(), String> {
    use futures::{SinkExt, StreamExt};
    use gloo_net::websocket::Message;
    use gloo_net::websocket::futures::WebSocket;
    use leptos::prelude::Update;

    let ws = WebSocket::open(&config.url).map_err(|e| e.to_string())?;
    let (mut ws_write, mut ws_read) = ws.split();

    // Announce the subscription first so the service can scope history and
    // presence to this identity.
    let subscribe = ClientCommand::Subscribe {
        channel: config.channel.clone(),
        identity: config.identity.clone(),
        meta: config.metadata.clone(),
    };
    let payload = serde_json::to_string(&subscribe).map_err(|e| e.to_string())?;
    ws_write
        .send(Message::Text(payload))
        .await
        .map_err(|e| e.to_string())?;

    chat.update(|c| c.connection_status = ConnectionStatus::Connected);

    // Forward outgoing publishes from the sender handle to the socket.
    let mut rx_borrow = rx.borrow_mut();
    let send_task = async {
        while let Some(msg) = rx_borrow.next().await {
            if ws_write.send(Message::Text(msg)).await.is_err() {
                break;
            }
        }
    };

    // Receive loop: decode and apply channel events.
    let recv_task = async {
        while let Some(msg) = ws_read.next().await {
            match msg {
                Ok(Message::Text(text)) => {
                    if let Ok(event) = serde_json::from_str::<ChannelEvent>(&text) {
                        chat.update(|c| apply_channel_event(c, event));
                    }
                }
                Ok(Message::Bytes(_)) => {}
                Err(e) => {
                    leptos::logging::warn!("channel recv error: {e}");
                    break;
                }
            }
        }
    };

    // When either side finishes, the connection is done.
    futures::future::select(Box::pin(send_task), Box::pin(recv_task)).await;

    Ok(())
}
