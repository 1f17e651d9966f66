//! Route wrapper that applies the navigation guard.
//!
//! SYSTEM CONTEXT
//! ==============
//! Wraps every routed page. The guard decision is computed before the page's
//! children are built, so a refused transition never renders protected
//! content. The decision tracks the location and whether the session has been
//! restored; other session changes made on a page (sign-in, sign-out)
//! navigate explicitly instead of re-triggering the guard mid-page.
//!
//! Server renders and the first client render happen before the browser
//! session is restored. Both show the same pending view, so hydration
//! matches and nobody is redirected for looking signed out.

use leptos::prelude::*;
use leptos_router::components::Redirect;
use leptos_router::hooks::use_location;

use crate::router::guard::{self, NavigationDecision};
use crate::router::routes::AppRoute;
use crate::state::session::SessionContext;

/// Render `children` only if the session satisfies `route`'s requirements;
/// otherwise redirect where the guard says. Renders a pending view until the
/// session is restored.
#[component]
pub fn Guarded(route: AppRoute, children: ChildrenFn) -> impl IntoView {
    let session = expect_context::<SessionContext>();
    let location = use_location();
    let restored = Memo::new(move |_| session.with(|s| s.is_restored()));

    move || {
        let full_path = guard::full_path(&location.pathname.get(), &location.search.get());
        let snapshot = session.with_untracked(|s| s.snapshot());
        match guard::evaluate_when_restored(restored.get(), route.requirements(), &snapshot, &full_path) {
            None => view! { <p class="route-pending">"Loading..."</p> }.into_any(),
            Some(NavigationDecision::Proceed) => children().into_any(),
            Some(NavigationDecision::Redirect(target)) => {
                let href = target.href();
                view! { <Redirect path=href/> }.into_any()
            }
        }
    }
}
