//! Login page: exchanges credentials for a session.
//!
//! SYSTEM CONTEXT
//! ==============
//! Reached directly or via the guard's `/login?redirect=...` bounce. On
//! success the session is populated and the user continues to the sanitized
//! redirect target.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_query_map};

use crate::router::guard::{REDIRECT_PARAM, post_login_target};
use crate::router::routes::AppRoute;
use crate::state::messages::MessagesState;
use crate::state::session::SessionContext;

/// Trim and require both login fields.
fn validate_login_input(user_name: &str, password: &str) -> Result<(String, String), &'static str> {
    let user_name = user_name.trim();
    if user_name.is_empty() || password.is_empty() {
        return Err("Enter both username and password.");
    }
    Ok((user_name.to_owned(), password.to_owned()))
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let session = expect_context::<SessionContext>();
    let messages = expect_context::<RwSignal<MessagesState>>();
    let query = use_query_map();
    let navigate = use_navigate();

    let user_name = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);
    let continue_to = RwSignal::new(None::<String>);

    Effect::new(move || {
        if let Some(target) = continue_to.get() {
            continue_to.set(None);
            navigate(&target, NavigateOptions { replace: true, ..NavigateOptions::default() });
        }
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let (name, pw) = match validate_login_input(&user_name.get(), &password.get()) {
            Ok(fields) => fields,
            Err(msg) => {
                info.set(msg.to_owned());
                return;
            }
        };
        let target = post_login_target(query.with_untracked(|q| q.get(REDIRECT_PARAM)).as_deref());
        busy.set(true);
        info.set("Signing in...".to_owned());

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::login(&name, &crate::net::api::password_hash(&pw)).await {
                Ok(payload) => {
                    if session.try_update(|s| s.sign_in(payload)).unwrap_or(false) {
                        messages.update(|m| {
                            m.success("Signed in.");
                        });
                        info.set(String::new());
                        continue_to.set(Some(target));
                    } else {
                        info.set("The server returned an incomplete session.".to_owned());
                    }
                }
                Err(e) => {
                    leptos::logging::warn!("login failed: {e}");
                    info.set(format!("Sign-in failed: {e}"));
                }
            }
            busy.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (name, pw, target, session, messages);
        }
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>{AppRoute::Login.title()}</h1>
                <form class="login-form" on:submit=on_submit>
                    <input
                        class="login-input"
                        type="text"
                        autocomplete="username"
                        placeholder="Username"
                        prop:value=move || user_name.get()
                        on:input=move |ev| user_name.set(event_target_value(&ev))
                    />
                    <input
                        class="login-input"
                        type="password"
                        autocomplete="current-password"
                        placeholder="Password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <button class="login-button" type="submit" disabled=move || busy.get()>
                        "Sign In"
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="login-message">{move || info.get()}</p>
                </Show>
                <p class="login-card__subtitle">
                    "No account? "
                    <a href=AppRoute::Register.path()>{AppRoute::Register.title()}</a>
                </p>
            </div>
        </div>
    }
}
