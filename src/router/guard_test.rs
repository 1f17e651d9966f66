use super::*;

// =============================================================
// Helpers
// =============================================================

fn redirect_home() -> NavigationDecision {
    NavigationDecision::Redirect(Redirect::to("/"))
}

fn signed_in(permissions: &[&str]) -> SessionSnapshot {
    SessionSnapshot::signed_in(permissions.iter().copied())
}

// =============================================================
// evaluate
// =============================================================

#[test]
fn auth_route_sends_anonymous_visitor_to_login_with_redirect() {
    let decision = evaluate(RouteRequirements::NONE.auth(), &SessionSnapshot::anonymous(), "/workspace");
    assert_eq!(
        decision,
        NavigationDecision::Redirect(Redirect::to("/login").with_query("redirect", "/workspace"))
    );
}

#[test]
fn auth_redirect_keeps_full_path_with_query() {
    let decision = evaluate(
        RouteRequirements::NONE.auth(),
        &SessionSnapshot::anonymous(),
        "/questions/create?copy=q-1",
    );
    let NavigationDecision::Redirect(target) = decision else {
        panic!("expected redirect");
    };
    assert_eq!(target.query.get("redirect").map(String::as_str), Some("/questions/create?copy=q-1"));
}

#[test]
fn guest_route_sends_signed_in_user_home() {
    let decision = evaluate(RouteRequirements::NONE.guest(), &signed_in(&[]), "/login");
    assert_eq!(decision, redirect_home());
}

#[test]
fn guest_route_admits_anonymous_visitor() {
    let decision = evaluate(RouteRequirements::NONE.guest(), &SessionSnapshot::anonymous(), "/login");
    assert_eq!(decision, NavigationDecision::Proceed);
}

#[test]
fn admin_route_refuses_group_admin() {
    let decision = evaluate(RouteRequirements::NONE.admin(), &signed_in(&["group.admin"]), "/admin");
    assert_eq!(decision, redirect_home());
}

#[test]
fn admin_route_admits_admin_and_superadmin() {
    for permission in ["admin", "superadmin"] {
        let decision = evaluate(RouteRequirements::NONE.auth().admin(), &signed_in(&[permission]), "/admin");
        assert_eq!(decision, NavigationDecision::Proceed, "{permission}");
    }
}

#[test]
fn admin_route_without_auth_flag_refuses_anonymous_to_home() {
    let decision = evaluate(RouteRequirements::NONE.admin(), &SessionSnapshot::anonymous(), "/admin");
    assert_eq!(decision, redirect_home());
}

#[test]
fn team_admin_route_admits_group_admin_and_admin() {
    for permission in ["group.admin", "admin"] {
        let decision = evaluate(
            RouteRequirements::NONE.auth().team_admin(),
            &signed_in(&[permission]),
            "/group/manage",
        );
        assert_eq!(decision, NavigationDecision::Proceed, "{permission}");
    }
}

#[test]
fn team_admin_route_refuses_ordinary_user() {
    let decision = evaluate(
        RouteRequirements::NONE.auth().team_admin(),
        &signed_in(&["submit"]),
        "/group/manage",
    );
    assert_eq!(decision, redirect_home());
}

#[test]
fn unconstrained_route_always_proceeds() {
    for session in [SessionSnapshot::anonymous(), signed_in(&[]), signed_in(&["admin"])] {
        assert_eq!(
            evaluate(RouteRequirements::NONE, &session, "/questions"),
            NavigationDecision::Proceed
        );
    }
}

#[test]
fn guest_check_wins_over_auth_check() {
    let both = RouteRequirements::NONE.guest().auth();
    assert_eq!(evaluate(both, &signed_in(&[]), "/odd"), redirect_home());
}

#[test]
fn auth_check_wins_over_admin_check() {
    let decision = evaluate(
        RouteRequirements::NONE.auth().admin(),
        &SessionSnapshot::anonymous(),
        "/admin",
    );
    assert_eq!(
        decision,
        NavigationDecision::Redirect(Redirect::to("/login").with_query("redirect", "/admin"))
    );
}

#[test]
fn evaluate_does_not_change_snapshot() {
    let session = signed_in(&["group.admin"]);
    let before = session.clone();
    let _ = evaluate(RouteRequirements::NONE.admin(), &session, "/admin");
    assert_eq!(session, before);
}

// =============================================================
// evaluate_when_restored
// =============================================================

#[test]
fn unrestored_session_never_redirects() {
    use crate::router::routes::AppRoute;

    let sessions = [SessionSnapshot::anonymous(), signed_in(&[]), signed_in(&["admin"])];
    for route in AppRoute::ALL {
        for session in &sessions {
            assert_eq!(
                evaluate_when_restored(false, route.requirements(), session, route.path()),
                None,
                "{route:?}"
            );
        }
    }
}

#[test]
fn restored_session_defers_to_evaluate() {
    let requirements = RouteRequirements::NONE.auth();
    let anonymous = SessionSnapshot::anonymous();
    assert_eq!(
        evaluate_when_restored(true, requirements, &anonymous, "/workspace"),
        Some(evaluate(requirements, &anonymous, "/workspace"))
    );
}

#[test]
fn reload_of_protected_page_waits_for_restore_then_proceeds() {
    use crate::net::types::UserProfile;
    use crate::state::session::SessionStore;
    use crate::util::storage::MemoryStorage;

    let storage = MemoryStorage::new();
    let mut before_reload = SessionStore::new(storage.clone());
    assert!(before_reload.set_session("t", UserProfile::new(1, "alice")));

    let mut after_reload = SessionStore::new(storage);
    let requirements = RouteRequirements::NONE.auth();
    let pending = evaluate_when_restored(
        after_reload.is_restored(),
        requirements,
        &after_reload.snapshot(),
        "/workspace",
    );
    assert_eq!(pending, None);

    assert!(after_reload.restore_session());
    let decided = evaluate_when_restored(
        after_reload.is_restored(),
        requirements,
        &after_reload.snapshot(),
        "/workspace",
    );
    assert_eq!(decided, Some(NavigationDecision::Proceed));
}

// =============================================================
// Redirect::href
// =============================================================

#[test]
fn href_without_query_is_plain_path() {
    assert_eq!(Redirect::to("/").href(), "/");
}

#[test]
fn href_encodes_query_values() {
    let target = Redirect::to("/login").with_query("redirect", "/questions?tag=dp&page=2");
    assert_eq!(target.href(), "/login?redirect=%2Fquestions%3Ftag%3Ddp%26page%3D2");
}

// =============================================================
// full_path
// =============================================================

#[test]
fn full_path_joins_search_with_or_without_marker() {
    assert_eq!(full_path("/workspace", ""), "/workspace");
    assert_eq!(full_path("/questions", "tag=dp"), "/questions?tag=dp");
    assert_eq!(full_path("/questions", "?tag=dp"), "/questions?tag=dp");
}

// =============================================================
// post_login_target
// =============================================================

#[test]
fn post_login_target_defaults_home() {
    assert_eq!(post_login_target(None), "/");
    assert_eq!(post_login_target(Some("")), "/");
}

#[test]
fn post_login_target_keeps_local_path_and_query() {
    assert_eq!(post_login_target(Some("/workspace")), "/workspace");
    assert_eq!(post_login_target(Some("/questions?tag=dp")), "/questions?tag=dp");
}

#[test]
fn post_login_target_rejects_offsite_targets() {
    for target in ["https://evil.example", "//evil.example", "/\\evil.example", "workspace"] {
        assert_eq!(post_login_target(Some(target)), "/", "{target}");
    }
}

#[test]
fn post_login_target_rejects_guest_pages() {
    assert_eq!(post_login_target(Some("/login")), "/");
    assert_eq!(post_login_target(Some("/login?redirect=/x")), "/");
    assert_eq!(post_login_target(Some("/register")), "/");
}
