//! REST API helpers for communicating with the backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR) and native tests: stubs returning
//! [`ApiError::Unavailable`] since these endpoints are only meaningful in the
//! browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Result<_, ApiError>` instead of panics so login and profile
//! failures surface as messages without crashing hydration. The backend
//! reports failures inside the `{success, message}` envelope, sometimes with a
//! non-2xx status; the envelope wins when it parses.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{ApiError, AuthPayload, LoginRequest, RegisterRequest, UserProfile};
use crate::config;

#[cfg(any(test, feature = "hydrate"))]
use super::types::ApiResponse;

const LOGIN_ENDPOINT: &str = "/authenticate/login";
const REGISTER_ENDPOINT: &str = "/authenticate/register";

/// Absolute URL for an API endpoint path such as `/authenticate/login`.
pub fn api_url(endpoint: &str) -> String {
    format!("{}{}{endpoint}", config::api_base_url(), config::API_PREFIX)
}

/// Hex SHA-256 digest sent as `passwordHash`; the plain password never
/// leaves the browser on login.
pub fn password_hash(password: &str) -> String {
    use sha2::Digest as _;
    hex::encode(sha2::Sha256::digest(password.as_bytes()))
}

/// `Authorization` header value for a bearer token.
pub fn bearer(token: &str) -> String {
    format!("Bearer {token}")
}

#[cfg(any(test, feature = "hydrate"))]
fn user_profile_endpoint(username: &str) -> String {
    format!("/user/profile/{}", urlencoding::encode(username))
}

/// Endpoint and JSON body for `PUT /user/profile/{username}`.
#[cfg(any(test, feature = "hydrate"))]
fn profile_update_request(username: &str, profile: &UserProfile) -> Result<(String, String), ApiError> {
    let body = serde_json::to_string(profile).map_err(|e| ApiError::Decode(e.to_string()))?;
    Ok((user_profile_endpoint(username), body))
}

#[cfg(any(test, feature = "hydrate"))]
fn status_failed_message(status: u16) -> String {
    format!("request failed with status {status}")
}

/// Interpret a response body that should carry an [`ApiResponse`] envelope.
#[cfg(any(test, feature = "hydrate"))]
fn decode_envelope<T: serde::de::DeserializeOwned>(status: u16, body: &str) -> Result<T, ApiError> {
    match serde_json::from_str::<ApiResponse<T>>(body) {
        Ok(envelope) => envelope.into_result(),
        Err(_) if !(200..300).contains(&status) => {
            Err(ApiError::Rejected(status_failed_message(status)))
        }
        Err(e) => Err(ApiError::Decode(e.to_string())),
    }
}

#[cfg(feature = "hydrate")]
async fn send_envelope<T: serde::de::DeserializeOwned>(
    request: gloo_net::http::Request,
) -> Result<T, ApiError> {
    let resp = request
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    let status = resp.status();
    let body = resp
        .text()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    decode_envelope(status, &body)
}

/// Exchange credentials for a token and profile via `POST /authenticate/login`.
///
/// # Errors
///
/// Returns [`ApiError::Rejected`] with the backend's message on bad
/// credentials, or a transport error if the request fails.
pub async fn login(user_name: &str, password_hash: &str) -> Result<AuthPayload, ApiError> {
    let body = LoginRequest {
        user_name: user_name.to_owned(),
        password_hash: password_hash.to_owned(),
    };
    #[cfg(feature = "hydrate")]
    {
        let request = gloo_net::http::Request::post(&api_url(LOGIN_ENDPOINT))
            .json(&body)
            .map_err(|e| ApiError::Network(e.to_string()))?;
        send_envelope(request).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (body, LOGIN_ENDPOINT);
        Err(ApiError::Unavailable)
    }
}

/// Create an account via `POST /authenticate/register`. A successful
/// registration signs the user in, so it yields the same payload as login.
///
/// # Errors
///
/// Returns [`ApiError::Rejected`] when the backend refuses the registration.
pub async fn register(request: &RegisterRequest) -> Result<AuthPayload, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let request = gloo_net::http::Request::post(&api_url(REGISTER_ENDPOINT))
            .json(request)
            .map_err(|e| ApiError::Network(e.to_string()))?;
        send_envelope(request).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (request, REGISTER_ENDPOINT);
        Err(ApiError::Unavailable)
    }
}

/// Fetch a user's public profile from `/user/profile/{username}`.
///
/// `token` is attached as a bearer credential when present so the backend can
/// include owner-only fields.
///
/// # Errors
///
/// Returns an error if the user does not exist or the request fails.
pub async fn fetch_user_profile(username: &str, token: Option<&str>) -> Result<UserProfile, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let mut request = gloo_net::http::Request::get(&api_url(&user_profile_endpoint(username)));
        if let Some(token) = token {
            request = request.header("Authorization", &bearer(token));
        }
        let request = request.build().map_err(|e| ApiError::Network(e.to_string()))?;
        send_envelope(request).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (username, token);
        Err(ApiError::Unavailable)
    }
}

/// Replace `username`'s profile via `PUT /user/profile/{username}` and return
/// the profile the backend stored.
///
/// # Errors
///
/// Returns [`ApiError::Rejected`] when the backend refuses the update (for
/// example a missing or foreign token), or a transport error.
pub async fn update_user_profile(
    username: &str,
    profile: &UserProfile,
    token: Option<&str>,
) -> Result<UserProfile, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let (endpoint, body) = profile_update_request(username, profile)?;
        let mut request = gloo_net::http::Request::put(&api_url(&endpoint))
            .header("Content-Type", "application/json");
        if let Some(token) = token {
            request = request.header("Authorization", &bearer(token));
        }
        let request = request.body(body).map_err(|e| ApiError::Network(e.to_string()))?;
        send_envelope(request).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (username, profile, token);
        Err(ApiError::Unavailable)
    }
}
