//! Landing page and placeholder section pages.

use leptos::prelude::*;

use crate::router::routes::AppRoute;
use crate::state::session::SessionContext;

#[component]
pub fn HomePage() -> impl IntoView {
    let session = expect_context::<SessionContext>();
    let greeting = move || {
        session.with(|s| match s.profile() {
            Some(profile) => format!("Welcome back, {}.", profile.display_name()),
            None => "Practice problems, join contests, and track your progress.".to_owned(),
        })
    };

    view! {
        <section class="home-page">
            <h1>"Online Judge"</h1>
            <p>{greeting}</p>
            <a href=AppRoute::Questions.path() class="home-page__cta">"Browse questions"</a>
        </section>
    }
}

/// Shell for routes whose content lives outside this crate.
#[component]
pub fn SectionPage(route: AppRoute) -> impl IntoView {
    view! {
        <section class="section-page">
            <h1>{route.title()}</h1>
        </section>
    }
}
