//! Registration page. A successful registration signs the user in.

#[cfg(test)]
#[path = "register_test.rs"]
mod register_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::net::types::RegisterRequest;
use crate::router::guard::HOME_PATH;
use crate::router::routes::AppRoute;
use crate::state::messages::MessagesState;
use crate::state::session::SessionContext;

/// Raw form fields as typed by the user.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
struct RegisterForm {
    user_name: String,
    password: String,
    confirm: String,
    email: String,
    nickname: String,
}

fn optional_field(value: &str) -> Option<String> {
    let value = value.trim();
    (!value.is_empty()).then(|| value.to_owned())
}

/// Build the request body, rejecting missing fields and mismatched passwords.
fn build_register_request(form: &RegisterForm) -> Result<RegisterRequest, &'static str> {
    let user_name = form.user_name.trim();
    if user_name.is_empty() || form.password.is_empty() {
        return Err("Enter a username and password.");
    }
    if form.password != form.confirm {
        return Err("Passwords do not match.");
    }
    Ok(RegisterRequest {
        user_name: user_name.to_owned(),
        password: form.password.clone(),
        email: optional_field(&form.email),
        nickname: optional_field(&form.nickname),
    })
}

fn form_input(
    form: RwSignal<RegisterForm>,
    placeholder: &'static str,
    kind: &'static str,
    get: fn(&RegisterForm) -> String,
    set: fn(&mut RegisterForm, String),
) -> impl IntoView {
    view! {
        <input
            class="login-input"
            type=kind
            placeholder=placeholder
            prop:value=move || form.with(get)
            on:input=move |ev| {
                let value = event_target_value(&ev);
                form.update(|f| set(f, value));
            }
        />
    }
}

#[component]
pub fn RegisterPage() -> impl IntoView {
    let session = expect_context::<SessionContext>();
    let messages = expect_context::<RwSignal<MessagesState>>();
    let navigate = use_navigate();

    let form = RwSignal::new(RegisterForm::default());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);
    let registered = RwSignal::new(false);

    Effect::new(move || {
        if registered.get() {
            registered.set(false);
            navigate(HOME_PATH, NavigateOptions { replace: true, ..NavigateOptions::default() });
        }
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let request = match form.with(build_register_request) {
            Ok(request) => request,
            Err(msg) => {
                info.set(msg.to_owned());
                return;
            }
        };
        busy.set(true);
        info.set("Creating account...".to_owned());

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::register(&request).await {
                Ok(payload) => {
                    if session.try_update(|s| s.sign_in(payload)).unwrap_or(false) {
                        messages.update(|m| {
                            m.success("Account created.");
                        });
                        info.set(String::new());
                        registered.set(true);
                    } else {
                        info.set("The server returned an incomplete session.".to_owned());
                    }
                }
                Err(e) => {
                    leptos::logging::warn!("registration failed: {e}");
                    info.set(format!("Registration failed: {e}"));
                }
            }
            busy.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (request, session, messages);
        }
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>{AppRoute::Register.title()}</h1>
                <form class="login-form" on:submit=on_submit>
                    {form_input(form, "Username", "text", |f| f.user_name.clone(), |f, v| f.user_name = v)}
                    {form_input(form, "Nickname (optional)", "text", |f| f.nickname.clone(), |f, v| f.nickname = v)}
                    {form_input(form, "Email (optional)", "email", |f| f.email.clone(), |f, v| f.email = v)}
                    {form_input(form, "Password", "password", |f| f.password.clone(), |f, v| f.password = v)}
                    {form_input(form, "Confirm password", "password", |f| f.confirm.clone(), |f, v| f.confirm = v)}
                    <button class="login-button" type="submit" disabled=move || busy.get()>
                        "Create Account"
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="login-message">{move || info.get()}</p>
                </Show>
                <p class="login-card__subtitle">
                    "Already registered? "
                    <a href=AppRoute::Login.path()>{AppRoute::Login.title()}</a>
                </p>
            </div>
        </div>
    }
}
