//! Toast notification stack.

use leptos::prelude::*;

use crate::state::messages::{Message, MessagesState};

/// Render every queued message; each schedules its own expiry.
#[component]
pub fn Toasts() -> impl IntoView {
    let messages = expect_context::<RwSignal<MessagesState>>();

    view! {
        <div class="messages">
            <For
                each=move || messages.get().items
                key=|message| message.id
                children=move |message| view! { <Toast message=message/> }
            />
        </div>
    }
}

#[component]
fn Toast(message: Message) -> impl IntoView {
    let messages = expect_context::<RwSignal<MessagesState>>();
    let id = message.id;

    #[cfg(feature = "hydrate")]
    if message.duration_ms > 0 {
        gloo_timers::callback::Timeout::new(message.duration_ms, move || {
            messages.update(|m| m.remove(id));
        })
        .forget();
    }

    view! {
        <div class=format!("message {}", message.kind.css_class())>
            <span class="message__content">{message.content}</span>
            <button class="message__close" on:click=move |_| messages.update(|m| m.remove(id))>
                "×"
            </button>
        </div>
    }
}
