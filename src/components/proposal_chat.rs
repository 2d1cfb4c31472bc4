//! Realtime chat panel scoped to one financing proposal.
//!
//! Displays the filtered, chronologically ordered conversation for the
//! selected proposal, the connection badge, and a compose input gated on
//! the send guards.

use leptos::prelude::*;

use crate::components::status_badge::StatusBadge;
use crate::net::channel_client::ChannelSender;
use crate::state::chat::{ChatIdentity, ChatState, can_send, submit_draft};
use crate::state::connection::ConnectionStatus;
use crate::util::format::format_message_time;

/// Chat panel for the proposal detail view.
///
/// `proposal_id` scopes the conversation; while it is `None` no messages
/// are shown and sending is disabled. `dealer_id` travels as extra
/// routing metadata on every published message.
#[component]
pub fn ProposalChat(
    #[prop(into)] proposal_id: Signal<Option<i64>>,
    #[prop(into)] dealer_id: Signal<Option<i64>>,
) -> impl IntoView {
    let chat = expect_context::<RwSignal<ChatState>>();
    let sender = expect_context::<RwSignal<ChannelSender>>();
    let identity = expect_context::<ChatIdentity>().0;

    let input = RwSignal::new(String::new());
    let messages_ref = NodeRef::<leptos::html::Div>::new();

    // Pin the scroll to the newest message whenever the set grows.
    Effect::new(move || {
        let _ = chat.get().messages.len();

        #[cfg(feature = "hydrate")]
        {
            if let Some(el) = messages_ref.get() {
                let scroll_height = el.scroll_height();
                el.set_scroll_top(scroll_height);
            }
        }
    });

    // Derived fresh from the latest channel state on every render, so a
    // selection change can never surface the previous proposal's messages.
    let conversation = move || chat.get().conversation(proposal_id.get());
    let status = Signal::derive(move || chat.get().connection_status);
    let participant_count = move || chat.get().participants.len();

    let do_send = move || {
        let current_status = chat.get().connection_status;
        input.update(|draft| {
            submit_draft(
                draft,
                current_status,
                proposal_id.get(),
                dealer_id.get(),
                |body, meta| sender.get().send_message(body, meta),
            );
        });
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        do_send();
    };

    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Enter" && !ev.shift_key() {
            ev.prevent_default();
            do_send();
        }
    };

    let send_enabled = move || can_send(chat.get().connection_status, &input.get(), proposal_id.get());
    let input_enabled =
        move || chat.get().connection_status == ConnectionStatus::Connected && proposal_id.get().is_some();

    let self_identity = identity.clone();

    view! {
        <div class="proposal-chat">
            <div class="proposal-chat__header">
                <span class="proposal-chat__title">"Chat em tempo real (admin)"</span>
                <StatusBadge status=status/>
            </div>

            <div class="proposal-chat__body">
                {move || {
                    if proposal_id.get().is_none() {
                        return view! {
                            <p class="proposal-chat__hint">
                                "Selecione uma proposta para abrir o chat com a administração."
                            </p>
                        }
                            .into_any();
                    }

                    let messages = conversation();
                    let self_identity = self_identity.clone();
                    view! {
                        <div class="proposal-chat__thread">
                        <div class="proposal-chat__messages" node_ref=messages_ref>
                            {if messages.is_empty() {
                                view! {
                                    <div class="proposal-chat__empty">
                                        "Nenhuma mensagem nesta proposta."
                                    </div>
                                }
                                    .into_any()
                            } else {
                                messages
                                    .iter()
                                    .map(|msg| {
                                        let is_self = msg.sender == self_identity;
                                        let author = if is_self {
                                            "Você".to_owned()
                                        } else {
                                            msg.sender.clone()
                                        };
                                        let time = format_message_time(&msg.timestamp);
                                        let body = msg.body.clone();
                                        let bubble_class = if is_self {
                                            "proposal-chat__message proposal-chat__message--self"
                                        } else {
                                            "proposal-chat__message"
                                        };
                                        view! {
                                            <div class=bubble_class>
                                                <p class="proposal-chat__text">{body}</p>
                                                <span class="proposal-chat__byline">
                                                    {author} " · " {time}
                                                </span>
                                            </div>
                                        }
                                    })
                                    .collect::<Vec<_>>()
                                    .into_any()
                            }}
                        </div>
                        <div class="proposal-chat__participants">
                            {move || {
                                let count = participant_count();
                                format!("{count} conectado{}", if count == 1 { "" } else { "s" })
                            }}
                        </div>
                        </div>
                    }
                        .into_any()
                }}
            </div>

            <form class="proposal-chat__compose" on:submit=on_submit>
                <input
                    class="proposal-chat__input"
                    type="text"
                    placeholder="Envie uma atualização para a equipe..."
                    prop:value=move || input.get()
                    on:input=move |ev| input.set(event_target_value(&ev))
                    on:keydown=on_keydown
                    disabled=move || !input_enabled()
                />
                <button
                    class="btn btn--primary proposal-chat__send"
                    type="submit"
                    disabled=move || !send_enabled()
                >
                    "Enviar"
                </button>
            </form>
        </div>
    }
}
