//! Navigation guard for route transitions.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every routed view is wrapped in [`crate::components::guarded::Guarded`],
//! which runs [`evaluate`] against a [`SessionSnapshot`] before building the
//! target view. The guard is pure: it never touches the session, it only
//! decides between proceeding and redirecting. Before the session is
//! restored it decides nothing (see [`evaluate_when_restored`]).

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use std::collections::BTreeMap;

use crate::state::session::SessionSnapshot;

pub const HOME_PATH: &str = "/";
pub const LOGIN_PATH: &str = "/login";
pub const REGISTER_PATH: &str = "/register";

/// Query parameter carrying the originally requested path to the login page.
pub const REDIRECT_PARAM: &str = "redirect";

/// Authorization constraints attached to a route. Each unset flag imposes
/// nothing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RouteRequirements {
    pub requires_auth: bool,
    /// Only visitors without a session may enter (login, register).
    pub requires_guest: bool,
    pub requires_admin: bool,
    pub requires_team_admin: bool,
}

impl RouteRequirements {
    /// No constraints.
    pub const NONE: Self = Self {
        requires_auth: false,
        requires_guest: false,
        requires_admin: false,
        requires_team_admin: false,
    };

    #[must_use]
    pub const fn auth(self) -> Self {
        Self { requires_auth: true, ..self }
    }

    #[must_use]
    pub const fn guest(self) -> Self {
        Self { requires_guest: true, ..self }
    }

    #[must_use]
    pub const fn admin(self) -> Self {
        Self { requires_admin: true, ..self }
    }

    #[must_use]
    pub const fn team_admin(self) -> Self {
        Self { requires_team_admin: true, ..self }
    }
}

/// Where the guard sends a refused transition.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Redirect {
    pub path: String,
    pub query: BTreeMap<String, String>,
}

impl Redirect {
    pub fn to(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            query: BTreeMap::new(),
        }
    }

    #[must_use]
    pub fn with_query(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.insert(key.into(), value.into());
        self
    }

    /// Path plus percent-encoded query string, ready for navigation.
    pub fn href(&self) -> String {
        if self.query.is_empty() {
            return self.path.clone();
        }
        let query = self
            .query
            .iter()
            .map(|(k, v)| format!("{}={}", urlencoding::encode(k), urlencoding::encode(v)))
            .collect::<Vec<_>>()
            .join("&");
        format!("{}?{query}", self.path)
    }
}

/// Outcome of evaluating a transition.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum NavigationDecision {
    Proceed,
    Redirect(Redirect),
}

/// Decide whether a transition to a route with `requirements` may proceed.
///
/// `full_path` is the requested path including its query string; it is
/// carried to the login page so the user lands there after signing in.
/// Checks run in order and the first failing one decides: guest-only,
/// authentication, admin, team admin.
pub fn evaluate(
    requirements: RouteRequirements,
    session: &SessionSnapshot,
    full_path: &str,
) -> NavigationDecision {
    if requirements.requires_guest && session.authenticated {
        return NavigationDecision::Redirect(Redirect::to(HOME_PATH));
    }
    if requirements.requires_auth && !session.authenticated {
        return NavigationDecision::Redirect(
            Redirect::to(LOGIN_PATH).with_query(REDIRECT_PARAM, full_path),
        );
    }
    if requirements.requires_admin && !session.is_admin() {
        return NavigationDecision::Redirect(Redirect::to(HOME_PATH));
    }
    if requirements.requires_team_admin && !session.is_team_admin() {
        return NavigationDecision::Redirect(Redirect::to(HOME_PATH));
    }
    NavigationDecision::Proceed
}

/// [`evaluate`], deferred until the session has been restored.
///
/// Returns `None` while `restored` is `false`: an unrestored session reads as
/// signed out, so judging it would bounce signed-in users off protected
/// pages on every reload. Callers render a pending view instead.
pub fn evaluate_when_restored(
    restored: bool,
    requirements: RouteRequirements,
    session: &SessionSnapshot,
    full_path: &str,
) -> Option<NavigationDecision> {
    restored.then(|| evaluate(requirements, session, full_path))
}

/// Join a location's pathname and search string into a full path.
/// Accepts `search` with or without its leading `?`.
pub fn full_path(pathname: &str, search: &str) -> String {
    let search = search.trim_start_matches('?');
    if search.is_empty() {
        pathname.to_owned()
    } else {
        format!("{pathname}?{search}")
    }
}

/// Destination after a successful sign-in.
///
/// Only same-origin absolute paths are honored; anything that could leave the
/// site or bounce back into the guest-only pages falls back to `/`.
pub fn post_login_target(redirect: Option<&str>) -> String {
    let Some(target) = redirect.map(str::trim) else {
        return HOME_PATH.to_owned();
    };
    let path = target.split(['?', '#']).next().unwrap_or_default();
    let acceptable = target.starts_with('/')
        && !target.starts_with("//")
        && !target.contains('\\')
        && path != LOGIN_PATH
        && path != REGISTER_PATH;
    if acceptable {
        target.to_owned()
    } else {
        HOME_PATH.to_owned()
    }
}
