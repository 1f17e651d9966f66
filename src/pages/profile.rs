//! Profile page for `/profile` (own) and `/profile/{username}` (anyone).
//!
//! SYSTEM CONTEXT
//! ==============
//! The signed-in user's own profile comes straight from the session; other
//! users' profiles are fetched from the backend with the session's bearer
//! token attached. Edits to the own profile are sent to the backend, and the
//! profile it returns replaces the one held by the session.

#[cfg(test)]
#[path = "profile_test.rs"]
mod profile_test;

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::net::types::UserProfile;
use crate::router::routes::AppRoute;
use crate::state::messages::MessagesState;
use crate::state::session::SessionContext;

/// Whose profile a `/profile` URL refers to.
#[derive(Clone, Debug, PartialEq, Eq)]
enum ProfileTarget {
    Own,
    Other(String),
    /// `/profile` without a username while signed out.
    SignedOut,
}

fn profile_target(param: Option<&str>, own_username: Option<&str>) -> ProfileTarget {
    match (param.map(str::trim).filter(|p| !p.is_empty()), own_username) {
        (Some(name), Some(own)) if name == own => ProfileTarget::Own,
        (Some(name), _) => ProfileTarget::Other(name.to_owned()),
        (None, Some(_)) => ProfileTarget::Own,
        (None, None) => ProfileTarget::SignedOut,
    }
}

/// `profile` with the editable fields replaced. Blank inputs clear the field.
fn apply_profile_edits(profile: &UserProfile, nickname: &str, avatar_url: &str) -> UserProfile {
    let optional = |value: &str| {
        let value = value.trim();
        (!value.is_empty()).then(|| value.to_owned())
    };
    UserProfile {
        nickname: optional(nickname),
        avatar_url: optional(avatar_url),
        ..profile.clone()
    }
}

#[component]
pub fn ProfilePage() -> impl IntoView {
    let session = expect_context::<SessionContext>();
    let params = use_params_map();

    let target = Memo::new(move |_| {
        let param = params.read().get("username");
        session.with(|s| profile_target(param.as_deref(), s.profile().map(|p| p.username.as_str())))
    });

    let fetched = RwSignal::new(None::<Result<UserProfile, String>>);
    Effect::new(move || {
        let ProfileTarget::Other(username) = target.get() else {
            fetched.set(None);
            return;
        };
        #[cfg(feature = "hydrate")]
        {
            let token = session.with_untracked(|s| s.token().map(str::to_owned));
            leptos::task::spawn_local(async move {
                let result = crate::net::api::fetch_user_profile(&username, token.as_deref())
                    .await
                    .map_err(|e| e.to_string());
                fetched.set(Some(result));
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = username;
        }
    });

    move || match target.get() {
        ProfileTarget::Own => match session.with(|s| s.profile().cloned()) {
            Some(profile) => view! {
                <ProfileCard profile=profile.clone()/>
                <ProfileEditor profile=profile/>
            }
            .into_any(),
            None => view! { <p>"Loading profile..."</p> }.into_any(),
        },
        ProfileTarget::Other(_) => match fetched.get() {
            Some(Ok(profile)) => view! { <ProfileCard profile=profile/> }.into_any(),
            Some(Err(e)) => view! { <p class="profile-error">{format!("Could not load profile: {e}")}</p> }.into_any(),
            None => view! { <p>"Loading profile..."</p> }.into_any(),
        },
        ProfileTarget::SignedOut => view! {
            <p>
                <a href=AppRoute::Login.path()>{AppRoute::Login.title()}</a>
                " to view your profile."
            </p>
        }
        .into_any(),
    }
}

/// Nickname and avatar form for the signed-in user's own profile.
#[component]
fn ProfileEditor(profile: UserProfile) -> impl IntoView {
    let session = expect_context::<SessionContext>();
    let messages = expect_context::<RwSignal<MessagesState>>();

    let nickname = RwSignal::new(profile.nickname.clone().unwrap_or_default());
    let avatar_url = RwSignal::new(profile.avatar_url.clone().unwrap_or_default());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let Some((current, token)) =
            session.with_untracked(|s| Some((s.profile()?.clone(), s.token().map(str::to_owned))))
        else {
            return;
        };
        let updated = apply_profile_edits(&current, &nickname.get(), &avatar_url.get());
        busy.set(true);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::update_user_profile(&current.username, &updated, token.as_deref()).await {
                Ok(stored) => {
                    if session.try_update(|s| s.update_profile(stored)).unwrap_or(false) {
                        messages.update(|m| {
                            m.success("Profile updated.");
                        });
                    }
                }
                Err(e) => {
                    leptos::logging::warn!("profile update failed: {e}");
                    messages.update(|m| {
                        m.error(format!("Profile update failed: {e}"));
                    });
                }
            }
            busy.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (current, updated, token, messages);
        }
    };

    view! {
        <form class="profile-editor" on:submit=on_submit>
            <input
                type="text"
                placeholder="Nickname"
                prop:value=move || nickname.get()
                on:input=move |ev| nickname.set(event_target_value(&ev))
            />
            <input
                type="url"
                placeholder="Avatar URL"
                prop:value=move || avatar_url.get()
                on:input=move |ev| avatar_url.set(event_target_value(&ev))
            />
            <button type="submit" disabled=move || busy.get()>"Save"</button>
        </form>
    }
}

#[component]
fn ProfileCard(profile: UserProfile) -> impl IntoView {
    let submissions = profile.recent_submissions.clone();
    view! {
        <section class="profile-card">
            {profile.avatar_url.clone().map(|src| view! { <img class="profile-card__avatar" src=src/> })}
            <h1>{profile.display_name().to_owned()}</h1>
            <p class="profile-card__username">{format!("@{}", profile.username)}</p>
            <dl class="profile-card__stats">
                <dt>"Rating"</dt><dd>{profile.rating}</dd>
                <dt>"Solved"</dt><dd>{profile.solved_count}</dd>
                <dt>"Ranking"</dt><dd>{profile.ranking_position}</dd>
            </dl>
            <table class="profile-card__submissions">
                <thead>
                    <tr>
                        <th>"Question"</th><th>"Status"</th><th>"Time"</th>
                        <th>"Memory"</th><th>"Language"</th><th>"Submitted"</th>
                    </tr>
                </thead>
                <tbody>
                    {submissions
                        .into_iter()
                        .map(|s| view! {
                            <tr>
                                <td>{s.question_id}</td><td>{s.status}</td><td>{s.time_used}</td>
                                <td>{s.memory_used}</td><td>{s.language}</td><td>{s.submit_time}</td>
                            </tr>
                        })
                        .collect_view()}
                </tbody>
            </table>
        </section>
    }
}
