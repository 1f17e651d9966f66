//! Top navigation bar with session-aware links.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::router::guard::HOME_PATH;
use crate::router::routes::AppRoute;
use crate::state::messages::MessagesState;
use crate::state::session::SessionContext;

#[component]
pub fn NavBar() -> impl IntoView {
    let session = expect_context::<SessionContext>();
    let messages = expect_context::<RwSignal<MessagesState>>();
    let navigate = use_navigate();

    let display_name = move || {
        session.with(|s| s.profile().map(|p| p.display_name().to_owned()))
    };
    let is_admin = move || session.with(|s| s.is_admin());
    let is_team_admin = move || session.with(|s| s.is_team_admin());

    // Leave the (possibly protected) current page once signed out.
    let signed_out = RwSignal::new(false);
    Effect::new(move || {
        if signed_out.get() {
            signed_out.set(false);
            navigate(HOME_PATH, NavigateOptions::default());
        }
    });

    let on_logout = move |_| {
        session.update(|s| s.clear_session());
        messages.update(|m| {
            m.info("Signed out.");
        });
        signed_out.set(true);
    };

    view! {
        <nav class="nav-bar">
            <a href=AppRoute::Home.path() class="nav-bar__brand">"Judge"</a>
            <a href=AppRoute::Questions.path()>{AppRoute::Questions.title()}</a>
            <a href=AppRoute::Contests.path()>{AppRoute::Contests.title()}</a>
            <a href=AppRoute::Group.path()>{AppRoute::Group.title()}</a>
            <Show when=is_team_admin>
                <a href=AppRoute::ManageGroup.path()>{AppRoute::ManageGroup.title()}</a>
            </Show>
            <Show when=is_admin>
                <a href=AppRoute::Admin.path()>{AppRoute::Admin.title()}</a>
            </Show>
            <span class="nav-bar__spacer"></span>
            <Show
                when=move || display_name().is_some()
                fallback=|| view! {
                    <a href=AppRoute::Login.path()>{AppRoute::Login.title()}</a>
                    <a href=AppRoute::Register.path()>{AppRoute::Register.title()}</a>
                }
            >
                <a href="/profile" class="nav-bar__user">{move || display_name().unwrap_or_default()}</a>
                <button class="nav-bar__logout" on:click=on_logout>"Sign out"</button>
            </Show>
        </nav>
    }
}
