//! Chat demo page
//!
//! The conversation lives in a signal; replies are canned and arrive after
//! [`REPLY_DELAY_MS`]. Leaving the page cancels a reply still in flight.

use leptos::prelude::*;
use leptos_router::components::A;

use super::PageMeta;
use crate::core::chat::{
    ChatMessage, ChatPhase, Conversation, REPLY_DELAY_MS, SUGGESTED_QUERIES, greeting_for_hour,
};
use crate::core::routes::Page;
use crate::ui::common::{Tooltip, TooltipPosition};
use crate::ui::icon::{Icon, icons};
use crate::ui::markdown::Markdown;

/// Greeting before the client clock is known
const NEUTRAL_GREETING: &str = "Namaste";

#[component]
pub fn ChatPage() -> impl IntoView {
    let conversation = RwSignal::new(Conversation::new());
    let input = RwSignal::new(String::new());
    let hour = RwSignal::new(None::<u32>);

    // Client clock only; the server's hour may belong to another timezone
    #[cfg(not(feature = "ssr"))]
    Effect::new(move |_| {
        use chrono::Timelike;
        hour.set(Some(chrono::Local::now().hour()));
    });

    on_cleanup(move || {
        let _ = conversation.try_update(Conversation::cancel);
    });

    // Shared by the input and the suggested queries; returns whether it was sent
    let send = move |text: String| -> bool {
        let ticket = match conversation.try_update(|chat| chat.submit(&text)) {
            Some(Ok(ticket)) => ticket,
            Some(Err(err)) => {
                leptos::logging::log!("message not sent: {err}");
                return false;
            }
            None => return false,
        };

        #[cfg(not(feature = "ssr"))]
        leptos::task::spawn_local(async move {
            gloo_timers::future::TimeoutFuture::new(REPLY_DELAY_MS).await;
            // Disposed or cancelled conversations take nothing
            let _ = conversation.try_update(|chat| {
                chat.deliver(&ticket);
            });
        });
        #[cfg(feature = "ssr")]
        let _ = (ticket, REPLY_DELAY_MS);

        true
    };

    let send_input = move || {
        if send(input.get_untracked()) {
            input.set(String::new());
        }
    };

    let phase = move || conversation.with(Conversation::phase);
    let greeting = move || hour.get().map(greeting_for_hour).unwrap_or(NEUTRAL_GREETING);

    view! {
        <PageMeta page=Page::Chat />
        <div class="min-h-screen w-full bg-background flex flex-col parchment-texture">
            <ChatHeader />

            <div class="flex-1 flex flex-col items-center justify-center p-4 md:p-8">
                <Show
                    when=move || phase() == ChatPhase::Conversing
                    fallback=move || view! {
                        <div class="w-full max-w-2xl mx-auto">
                            <div class="text-center mb-12 animate-fade-in">
                                <div class="w-20 h-20 mx-auto mb-6 rounded-xl bg-primary/10 border border-primary/20 flex items-center justify-center">
                                    <Icon name=icons::SCALE class="w-10 h-10 text-primary" />
                                </div>
                                <h1 class="font-serif text-3xl sm:text-4xl font-semibold text-primary mb-3 tracking-tight">
                                    {greeting}
                                </h1>
                                <p class="text-muted-foreground">{Page::Chat.heading()}</p>
                            </div>

                            <ChatInput input=input conversation=conversation on_send=send_input />

                            <div class="flex flex-wrap justify-center gap-2 mt-6">
                                {SUGGESTED_QUERIES
                                    .iter()
                                    .map(|item| {
                                        let query = item.query;
                                        view! {
                                            <Tooltip text=query.to_string() position=TooltipPosition::Bottom>
                                                <button
                                                    type="button"
                                                    class="inline-flex items-center gap-2 px-4 py-2 text-sm text-muted-foreground bg-card border border-border rounded-lg hover:bg-secondary hover:text-foreground transition-all duration-200 shadow-page hover:shadow-book"
                                                    on:click=move |_| {
                                                        send(query.to_string());
                                                    }
                                                >
                                                    <Icon name=item.icon class="w-4 h-4" />
                                                    {item.label}
                                                </button>
                                            </Tooltip>
                                        }
                                    })
                                    .collect_view()}
                            </div>
                        </div>
                    }
                >
                    <div class="w-full max-w-3xl mx-auto flex flex-col h-full">
                        <MessageList conversation=conversation />
                        <div class="pt-4 border-t border-border">
                            <ChatInput input=input conversation=conversation on_send=send_input />
                        </div>
                    </div>
                </Show>
            </div>
        </div>
    }
}

#[component]
fn ChatHeader() -> impl IntoView {
    view! {
        <header class="border-b border-border bg-card/50 backdrop-blur-sm">
            <div class="container mx-auto px-6 py-4">
                <div class="flex items-center justify-between">
                    <A href="/" attr:class="flex items-center gap-3 group">
                        <div class="w-10 h-10 rounded-lg bg-primary flex items-center justify-center shadow-emboss">
                            <Icon name=icons::SCALE class="w-5 h-5 text-primary-foreground" />
                        </div>
                        <div class="flex flex-col">
                            <span class="font-serif text-xl font-semibold text-primary tracking-wide">"Nyaya AI"</span>
                            <span class="text-[10px] uppercase tracking-[0.2em] text-muted-foreground -mt-0.5">
                                "Ask Legal Questions"
                            </span>
                        </div>
                    </A>
                    <A href="/" attr:class="flex items-center gap-2 text-sm text-muted-foreground hover:text-foreground transition-colors">
                        <Icon name=icons::ARROW_LEFT class="w-4 h-4" />
                        "Back to Home"
                    </A>
                </div>
            </div>
        </header>
    }
}

#[component]
fn MessageList(conversation: RwSignal<Conversation>) -> impl IntoView {
    let end = NodeRef::<leptos::html::Div>::new();

    // Keep the newest message in view
    #[cfg(not(feature = "ssr"))]
    Effect::new(move |_| {
        conversation.with(|chat| chat.len());
        if let Some(anchor) = end.get() {
            anchor.scroll_into_view();
        }
    });

    view! {
        <div class="flex-1 overflow-y-auto space-y-6 pb-6">
            <For
                each=move || conversation.with(|chat| chat.messages().to_vec())
                key=|message| message.id
                let(message)
            >
                <MessageBubble message=message />
            </For>
            <Show when=move || conversation.with(Conversation::is_waiting)>
                <TypingIndicator />
            </Show>
            <div node_ref=end />
        </div>
    }
}

#[component]
fn MessageBubble(message: ChatMessage) -> impl IntoView {
    if message.is_user() {
        view! {
            <div class="flex justify-end animate-fade-in">
                <div class="max-w-[80%] p-4 rounded-xl bg-primary text-primary-foreground">
                    <p class="text-sm leading-relaxed whitespace-pre-wrap">{message.content}</p>
                </div>
            </div>
        }
        .into_any()
    } else {
        view! {
            <div class="flex justify-start animate-fade-in">
                <div class="max-w-[80%] p-4 rounded-xl bg-card border border-border shadow-book">
                    <AssistantBadge />
                    <Markdown content=message.content />
                </div>
            </div>
        }
        .into_any()
    }
}

#[component]
fn AssistantBadge() -> impl IntoView {
    view! {
        <div class="flex items-center gap-2 mb-3 pb-3 border-b border-border">
            <div class="w-6 h-6 rounded bg-primary/10 flex items-center justify-center">
                <Icon name=icons::SCALE class="w-3.5 h-3.5 text-primary" />
            </div>
            <span class="text-sm font-medium text-foreground">"Nyaya AI"</span>
        </div>
    }
}

#[component]
fn TypingIndicator() -> impl IntoView {
    view! {
        <div class="flex justify-start animate-fade-in">
            <div class="p-4 rounded-xl bg-card border border-border shadow-book">
                <AssistantBadge />
                <div class="flex items-center gap-2" role="status" aria-label="Nyaya AI is typing">
                    <div class="flex gap-1">
                        <span class="w-2 h-2 bg-primary rounded-full animate-bounce" style="animation-delay: 0ms"></span>
                        <span class="w-2 h-2 bg-primary rounded-full animate-bounce" style="animation-delay: 150ms"></span>
                        <span class="w-2 h-2 bg-primary rounded-full animate-bounce" style="animation-delay: 300ms"></span>
                    </div>
                    <span class="text-sm text-muted-foreground">"Researching Indian law..."</span>
                </div>
            </div>
        </div>
    }
}

/// Message box. Enter sends, Shift+Enter adds a newline.
#[component]
fn ChatInput(
    input: RwSignal<String>,
    conversation: RwSignal<Conversation>,
    on_send: impl Fn() + Copy + Send + Sync + 'static,
) -> impl IntoView {
    let waiting = move || conversation.with(Conversation::is_waiting);
    let blocked = move || waiting() || input.with(|text| text.trim().is_empty());

    view! {
        <div class="relative bg-card border border-border rounded-2xl shadow-book focus-within:ring-2 focus-within:ring-primary/20 transition-shadow">
            <textarea
                class="w-full px-5 pt-4 pb-14 bg-transparent text-foreground placeholder:text-muted-foreground resize-none focus:outline-none text-sm leading-relaxed min-h-[120px]"
                placeholder="Ask about Indian laws, rights, judgments..."
                rows="3"
                aria-label="Your legal question"
                prop:value=move || input.get()
                on:input=move |ev| input.set(event_target_value(&ev))
                on:keydown=move |ev| {
                    if ev.key() == "Enter" && !ev.shift_key() {
                        ev.prevent_default();
                        on_send();
                    }
                }
            />
            <div class="absolute bottom-3 left-5 right-3 flex items-center justify-between">
                <span class="text-xs text-muted-foreground">
                    {move || if waiting() { "Nyaya AI is typing..." } else { "Enter to send, Shift+Enter for a new line" }}
                </span>
                <button
                    type="button"
                    class=move || {
                        if blocked() {
                            "p-2.5 rounded-xl bg-primary/40 text-primary-foreground cursor-not-allowed"
                        } else {
                            "p-2.5 rounded-xl bg-primary text-primary-foreground hover:bg-primary/90 transition-colors"
                        }
                    }
                    disabled=blocked
                    aria-label="Send message"
                    on:click=move |_| on_send()
                >
                    <Icon name=icons::SEND class="w-4 h-4" />
                </button>
            </div>
        </div>
    }
}
