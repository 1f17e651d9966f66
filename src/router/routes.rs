//! Static route table.
//!
//! Each navigable route declares its path pattern and the
//! [`RouteRequirements`] the guard enforces before its view is built.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

use super::guard::RouteRequirements;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AppRoute {
    Home,
    Projects,
    Questions,
    CreateQuestion,
    Group,
    ManageGroup,
    Contests,
    Privacy,
    /// Own profile at `/profile`, anyone's at `/profile/{username}`.
    Profile,
    Workspace,
    Admin,
    NotFound,
    UnderConstruction,
    Login,
    Register,
}

impl AppRoute {
    pub const ALL: [Self; 15] = [
        Self::Home,
        Self::Projects,
        Self::Questions,
        Self::CreateQuestion,
        Self::Group,
        Self::ManageGroup,
        Self::Contests,
        Self::Privacy,
        Self::Profile,
        Self::Workspace,
        Self::Admin,
        Self::NotFound,
        Self::UnderConstruction,
        Self::Login,
        Self::Register,
    ];

    /// Path pattern; `:username?` marks an optional segment.
    pub fn path(self) -> &'static str {
        match self {
            Self::Home => "/",
            Self::Projects => "/projects",
            Self::Questions => "/questions",
            Self::CreateQuestion => "/questions/create",
            Self::Group => "/group",
            Self::ManageGroup => "/group/manage",
            Self::Contests => "/contests",
            Self::Privacy => "/privacy",
            Self::Profile => "/profile/:username?",
            Self::Workspace => "/workspace",
            Self::Admin => "/admin",
            Self::NotFound => "/not-found",
            Self::UnderConstruction => "/under-construction",
            Self::Login => "/login",
            Self::Register => "/register",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::Projects => "Projects",
            Self::Questions => "Questions",
            Self::CreateQuestion => "New Question",
            Self::Group => "Groups",
            Self::ManageGroup => "Manage Group",
            Self::Contests => "Contests",
            Self::Privacy => "Privacy",
            Self::Profile => "Profile",
            Self::Workspace => "Workspace",
            Self::Admin => "Administration",
            Self::NotFound => "Not Found",
            Self::UnderConstruction => "Under Construction",
            Self::Login => "Sign In",
            Self::Register => "Register",
        }
    }

    pub fn requirements(self) -> RouteRequirements {
        let none = RouteRequirements::NONE;
        match self {
            Self::Login | Self::Register => none.guest(),
            Self::CreateQuestion | Self::Workspace => none.auth(),
            Self::ManageGroup => none.auth().team_admin(),
            Self::Admin => none.auth().admin(),
            Self::Home
            | Self::Projects
            | Self::Questions
            | Self::Group
            | Self::Contests
            | Self::Privacy
            | Self::Profile
            | Self::NotFound
            | Self::UnderConstruction => none,
        }
    }

    /// Route matching a concrete path. Query string, fragment, and a trailing
    /// slash are ignored; anything unknown is [`AppRoute::NotFound`].
    pub fn resolve(path: &str) -> Self {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
        match segments.as_slice() {
            [] => Self::Home,
            ["profile"] | ["profile", _] => Self::Profile,
            _ => {
                let normalized = format!("/{}", segments.join("/"));
                Self::ALL
                    .into_iter()
                    .find(|route| *route != Self::Profile && route.path() == normalized)
                    .unwrap_or(Self::NotFound)
            }
        }
    }
}
