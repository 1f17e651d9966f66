//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    OptionalParamSegment, StaticSegment,
    components::{Redirect, Route, Router, Routes},
};

use crate::components::guarded::Guarded;
use crate::components::nav_bar::NavBar;
use crate::components::toasts::Toasts;
use crate::pages::{
    home::{HomePage, SectionPage},
    login::LoginPage,
    profile::ProfilePage,
    register::RegisterPage,
};
use crate::router::routes::AppRoute;
use crate::state::messages::MessagesState;
use crate::state::session::SessionStore;
use crate::util::storage::LocalStorage;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Placeholder section behind the guard for `route`.
fn guarded_section(route: AppRoute) -> impl IntoView {
    view! {
        <Guarded route=route>
            <SectionPage route=route/>
        </Guarded>
    }
}

/// Root application component.
///
/// Provides the session and message contexts and sets up client-side
/// routing; every route is wrapped in [`Guarded`].
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    // Starts unrestored on the server and the client alike; guarded routes
    // show a pending view until the browser restores below.
    let session = RwSignal::new(SessionStore::new(LocalStorage));
    let messages = RwSignal::new(MessagesState::default());

    provide_context(session);
    provide_context(messages);

    // Effects only run in the browser, once, after hydration.
    Effect::new(move || {
        session.update(|s| {
            s.restore_session();
        });
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/judge-client.css"/>
        <Title text="Online Judge"/>

        <Router>
            <NavBar/>
            <Toasts/>
            <main>
                <Routes fallback=|| view! { <Redirect path=AppRoute::NotFound.path()/> }>
                    <Route
                        path=StaticSegment("")
                        view=|| view! { <Guarded route=AppRoute::Home><HomePage/></Guarded> }
                    />
                    <Route
                        path=StaticSegment("login")
                        view=|| view! { <Guarded route=AppRoute::Login><LoginPage/></Guarded> }
                    />
                    <Route
                        path=StaticSegment("register")
                        view=|| view! { <Guarded route=AppRoute::Register><RegisterPage/></Guarded> }
                    />
                    <Route
                        path=(StaticSegment("profile"), OptionalParamSegment("username"))
                        view=|| view! { <Guarded route=AppRoute::Profile><ProfilePage/></Guarded> }
                    />
                    <Route path=StaticSegment("projects") view=|| guarded_section(AppRoute::Projects)/>
                    <Route path=StaticSegment("questions") view=|| guarded_section(AppRoute::Questions)/>
                    <Route
                        path=(StaticSegment("questions"), StaticSegment("create"))
                        view=|| guarded_section(AppRoute::CreateQuestion)
                    />
                    <Route path=StaticSegment("group") view=|| guarded_section(AppRoute::Group)/>
                    <Route
                        path=(StaticSegment("group"), StaticSegment("manage"))
                        view=|| guarded_section(AppRoute::ManageGroup)
                    />
                    <Route path=StaticSegment("contests") view=|| guarded_section(AppRoute::Contests)/>
                    <Route path=StaticSegment("privacy") view=|| guarded_section(AppRoute::Privacy)/>
                    <Route path=StaticSegment("workspace") view=|| guarded_section(AppRoute::Workspace)/>
                    <Route path=StaticSegment("admin") view=|| guarded_section(AppRoute::Admin)/>
                    <Route path=StaticSegment("not-found") view=|| guarded_section(AppRoute::NotFound)/>
                    <Route
                        path=StaticSegment("under-construction")
                        view=|| guarded_section(AppRoute::UnderConstruction)
                    />
                </Routes>
            </main>
        </Router>
    }
}
