use super::*;
use crate::router::guard::{NavigationDecision, evaluate};
use crate::state::session::SessionSnapshot;

#[test]
fn resolve_static_paths() {
    assert_eq!(AppRoute::resolve("/"), AppRoute::Home);
    assert_eq!(AppRoute::resolve(""), AppRoute::Home);
    assert_eq!(AppRoute::resolve("/questions"), AppRoute::Questions);
    assert_eq!(AppRoute::resolve("/questions/create"), AppRoute::CreateQuestion);
    assert_eq!(AppRoute::resolve("/group/manage"), AppRoute::ManageGroup);
    assert_eq!(AppRoute::resolve("/login"), AppRoute::Login);
}

#[test]
fn resolve_ignores_query_fragment_and_trailing_slash() {
    assert_eq!(AppRoute::resolve("/workspace/"), AppRoute::Workspace);
    assert_eq!(AppRoute::resolve("/login?redirect=%2Fadmin"), AppRoute::Login);
    assert_eq!(AppRoute::resolve("/contests#upcoming"), AppRoute::Contests);
}

#[test]
fn resolve_profile_with_and_without_username() {
    assert_eq!(AppRoute::resolve("/profile"), AppRoute::Profile);
    assert_eq!(AppRoute::resolve("/profile/alice"), AppRoute::Profile);
    assert_eq!(AppRoute::resolve("/profile/alice/extra"), AppRoute::NotFound);
}

#[test]
fn resolve_unknown_path_is_not_found() {
    assert_eq!(AppRoute::resolve("/nope"), AppRoute::NotFound);
    assert_eq!(AppRoute::resolve("/questions/create/more"), AppRoute::NotFound);
}

#[test]
fn every_static_route_resolves_to_itself() {
    for route in AppRoute::ALL.into_iter().filter(|r| *r != AppRoute::Profile) {
        assert_eq!(AppRoute::resolve(route.path()), route, "{route:?}");
    }
}

#[test]
fn route_paths_are_unique() {
    let mut paths: Vec<_> = AppRoute::ALL.iter().map(|r| r.path()).collect();
    paths.sort_unstable();
    paths.dedup();
    assert_eq!(paths.len(), AppRoute::ALL.len());
}

#[test]
fn guest_pages_require_guest() {
    assert!(AppRoute::Login.requirements().requires_guest);
    assert!(AppRoute::Register.requirements().requires_guest);
}

#[test]
fn protected_pages_declare_expected_flags() {
    assert_eq!(AppRoute::Workspace.requirements(), RouteRequirements::NONE.auth());
    assert_eq!(AppRoute::Admin.requirements(), RouteRequirements::NONE.auth().admin());
    assert_eq!(
        AppRoute::ManageGroup.requirements(),
        RouteRequirements::NONE.auth().team_admin()
    );
    assert_eq!(AppRoute::Questions.requirements(), RouteRequirements::NONE);
}

#[test]
fn anonymous_visitor_can_open_public_routes_only() {
    let anonymous = SessionSnapshot::anonymous();
    for route in AppRoute::ALL {
        let decision = evaluate(route.requirements(), &anonymous, route.path());
        let public = !route.requirements().requires_auth;
        assert_eq!(decision == NavigationDecision::Proceed, public, "{route:?}");
    }
}
