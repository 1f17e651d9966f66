use super::*;
use crate::net::types::AuthPayload;

#[test]
fn api_url_joins_base_prefix_and_endpoint() {
    let url = api_url("/authenticate/login");
    assert!(url.starts_with(config::api_base_url()));
    assert!(url.ends_with("/api/authenticate/login"));
}

#[test]
fn bearer_formats_authorization_value() {
    assert_eq!(bearer("abc"), "Bearer abc");
}

#[test]
fn password_hash_is_hex_sha256() {
    assert_eq!(
        password_hash("abc"),
        "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
    );
}

#[test]
fn user_profile_endpoint_encodes_username() {
    assert_eq!(user_profile_endpoint("alice"), "/user/profile/alice");
    assert_eq!(user_profile_endpoint("a b/c"), "/user/profile/a%20b%2Fc");
}

#[test]
fn profile_update_targets_user_profile_endpoint() {
    let profile = UserProfile::new(7, "alice smith");
    let (endpoint, _) = profile_update_request("alice smith", &profile).unwrap();
    assert_eq!(endpoint, "/user/profile/alice%20smith");
    assert!(api_url(&endpoint).ends_with("/api/user/profile/alice%20smith"));
}

#[test]
fn profile_update_body_is_camel_case_profile() {
    let mut profile = UserProfile::new(7, "alice");
    profile.nickname = Some("Ally".to_owned());
    profile.avatar_url = Some("https://example.com/a.png".to_owned());
    profile.solved_count = 3;
    let (_, body) = profile_update_request("alice", &profile).unwrap();

    let json: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_eq!(json["username"], "alice");
    assert_eq!(json["nickname"], "Ally");
    assert_eq!(json["avatarUrl"], "https://example.com/a.png");
    assert_eq!(json["solvedCount"], 3);
    let echoed: UserProfile = serde_json::from_value(json).unwrap();
    assert_eq!(echoed, profile);
}

#[test]
fn decode_envelope_returns_profile_from_update_response() {
    let body = r#"{"success":true,"data":{"id":7,"username":"alice","nickname":"Ally"}}"#;
    let profile: UserProfile = decode_envelope(200, body).unwrap();
    assert_eq!(profile.display_name(), "Ally");
}

#[test]
fn decode_envelope_returns_payload_on_success() {
    let body = r#"{"success":true,"data":{"token":"t","userProfile":{"id":1,"username":"alice"}}}"#;
    let payload: AuthPayload = decode_envelope(200, body).unwrap();
    assert_eq!(payload.token, "t");
}

#[test]
fn decode_envelope_prefers_backend_message_on_error_status() {
    let body = r#"{"success":false,"message":"user exists"}"#;
    let result: Result<AuthPayload, _> = decode_envelope(400, body);
    assert_eq!(result, Err(ApiError::Rejected("user exists".to_owned())));
}

#[test]
fn decode_envelope_unparseable_error_status_reports_status() {
    let result: Result<AuthPayload, _> = decode_envelope(502, "<html>bad gateway</html>");
    assert_eq!(
        result,
        Err(ApiError::Rejected("request failed with status 502".to_owned()))
    );
}

#[test]
fn decode_envelope_unparseable_success_is_decode_error() {
    let result: Result<AuthPayload, _> = decode_envelope(200, "not json");
    assert!(matches!(result, Err(ApiError::Decode(_))));
}
