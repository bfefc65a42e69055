//! Chat widget for the analysis assistant.
//!
//! Renders the append-only thread from [`AppState::chat`]; the network round
//! trip itself is owned by the app via `on_send` so the widget stays free of
//! HTTP concerns.

use crate::state::AppState;
use dioxus::prelude::*;
use forest_core::Sender;

#[derive(Props, Clone, PartialEq)]
pub struct ChatWidgetProps {
    /// Invoked with the user's message; the handler appends it to the
    /// thread and relays it to the chat backend.
    pub on_send: EventHandler<String>,
    pub on_close: EventHandler<()>,
}

/// Floating chat panel seeded by the analysis narrative.
#[component]
pub fn ChatWidget(props: ChatWidgetProps) -> Element {
    let state = use_context::<AppState>();
    let theme = (state.theme)();
    let mut draft = use_signal(String::new);

    let chat = state.chat.read();
    let pending = chat.pending();
    let messages: Vec<_> = chat.messages().to_vec();
    drop(chat);

    let send_disabled = pending || draft.read().trim().is_empty();

    let submit = move |evt: Event<FormData>| {
        evt.prevent_default();
        let text = draft.peek().trim().to_string();
        if text.is_empty() || pending {
            return;
        }
        draft.set(String::new());
        props.on_send.call(text);
    };

    rsx! {
        div {
            style: "position: fixed; bottom: 24px; right: 24px; width: 380px; max-width: 90vw; z-index: 50; {theme.card_style()}",

            // Header
            div {
                style: "display: flex; justify-content: space-between; align-items: center; margin-bottom: 8px;",
                h3 {
                    style: "margin: 0; font-size: 16px;",
                    "Forest Analysis Assistant"
                }
                button {
                    style: "background: none; border: none; color: {theme.muted_color()}; cursor: pointer; font-size: 16px;",
                    onclick: move |_| props.on_close.call(()),
                    "x"
                }
            }

            // Messages
            div {
                style: "height: 320px; overflow-y: auto; display: flex; flex-direction: column; gap: 8px; padding: 4px 0;",
                for message in messages {
                    div {
                        key: "{message.id}",
                        style: format!(
                            "display: flex; justify-content: {};",
                            if message.sender == Sender::User { "flex-end" } else { "flex-start" }
                        ),
                        div {
                            style: format!(
                                "max-width: 80%; padding: 8px 12px; border-radius: 8px; font-size: 13px; background: {}; color: {};",
                                if message.sender == Sender::User { theme.accent_color() } else { "#374151" },
                                if message.sender == Sender::User { "#ffffff" } else { "#f3f4f6" }
                            ),
                            "{message.text}"
                        }
                    }
                }
                if pending {
                    div {
                        style: "align-self: flex-start; padding: 8px 12px; border-radius: 8px; background: #374151; color: {theme.muted_color()}; font-size: 13px;",
                        "..."
                    }
                }
            }

            // Input
            form {
                style: "display: flex; gap: 8px; margin-top: 8px;",
                onsubmit: submit,
                input {
                    r#type: "text",
                    style: "{theme.input_style()}",
                    placeholder: "Ask a question...",
                    value: "{draft}",
                    oninput: move |evt: Event<FormData>| draft.set(evt.value()),
                }
                button {
                    r#type: "submit",
                    disabled: send_disabled,
                    style: "padding: 8px 16px; border: none; border-radius: 6px; background: {theme.accent_color()}; color: #ffffff; cursor: pointer;",
                    "Send"
                }
            }
        }
    }
}
