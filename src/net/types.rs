//! Wire DTOs for the REST backend.
//!
//! DESIGN
//! ======
//! Field names follow the backend's camelCase JSON. Older backend builds used
//! shorter names for a few profile fields (`solved`, `ranking`, `avatar`,
//! `time`, `memory`); those are accepted as aliases on input and always
//! written back in the canonical form.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use std::collections::BTreeSet;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

/// Error produced by backend calls and envelope unwrapping.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// HTTP is only wired up in the browser build.
    #[error("backend not available in this build")]
    Unavailable,
    /// The request never produced a response.
    #[error("network error: {0}")]
    Network(String),
    /// The response body was not the expected JSON shape.
    #[error("malformed response: {0}")]
    Decode(String),
    /// The backend answered `success: false`.
    #[error("{0}")]
    Rejected(String),
    /// The backend answered `success: true` without a `data` payload.
    #[error("response is missing data")]
    MissingData,
}

/// Standard `{success, data, message}` response envelope.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    #[serde(default = "Option::default")]
    pub data: Option<T>,
    #[serde(default)]
    pub message: Option<String>,
}

impl<T> ApiResponse<T> {
    /// Unwrap the envelope into its payload.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Rejected`] carrying the backend's message when
    /// `success` is false, and [`ApiError::MissingData`] when a successful
    /// response has no payload.
    pub fn into_result(self) -> Result<T, ApiError> {
        if !self.success {
            let message = self
                .message
                .filter(|m| !m.trim().is_empty())
                .unwrap_or_else(|| "request failed".to_owned());
            return Err(ApiError::Rejected(message));
        }
        self.data.ok_or(ApiError::MissingData)
    }
}

/// One entry of a profile's recent-submission list.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionSummary {
    pub id: String,
    pub question_id: String,
    /// Judge verdict, e.g. `"Accepted"`.
    pub status: String,
    /// Run time as reported by the judge; numbers are kept in decimal form.
    #[serde(alias = "time", deserialize_with = "deserialize_display_string")]
    pub time_used: String,
    /// Peak memory as reported by the judge; numbers are kept in decimal form.
    #[serde(alias = "memory", deserialize_with = "deserialize_display_string")]
    pub memory_used: String,
    pub language: String,
    /// ISO 8601 submission timestamp.
    pub submit_time: String,
}

/// The signed-in user's profile as issued by the login/register endpoints.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    #[serde(deserialize_with = "deserialize_i64_from_number")]
    pub id: i64,
    pub username: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nickname: Option<String>,
    /// Opaque capability tokens, checked by exact membership.
    #[serde(default)]
    pub permissions: BTreeSet<String>,
    #[serde(default, deserialize_with = "deserialize_i64_from_number")]
    pub rating: i64,
    #[serde(default, alias = "solved", deserialize_with = "deserialize_i64_from_number")]
    pub solved_count: i64,
    #[serde(default, alias = "ranking", deserialize_with = "deserialize_i64_from_number")]
    pub ranking_position: i64,
    #[serde(default, alias = "avatar", skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
    #[serde(default, deserialize_with = "deserialize_null_as_empty")]
    pub recent_submissions: Vec<SubmissionSummary>,
}

impl UserProfile {
    /// Minimal profile with every optional field defaulted.
    pub fn new(id: i64, username: impl Into<String>) -> Self {
        Self {
            id,
            username: username.into(),
            nickname: None,
            permissions: BTreeSet::new(),
            rating: 0,
            solved_count: 0,
            ranking_position: 0,
            avatar_url: None,
            recent_submissions: Vec::new(),
        }
    }

    /// Nickname when set, otherwise the username.
    pub fn display_name(&self) -> &str {
        self.nickname
            .as_deref()
            .filter(|n| !n.trim().is_empty())
            .unwrap_or(&self.username)
    }
}

/// `data` payload of a successful login or registration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthPayload {
    /// Bearer token for authenticated endpoints.
    pub token: String,
    pub user_profile: UserProfile,
}

/// Body of `POST /authenticate/login`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    pub user_name: String,
    pub password_hash: String,
}

/// Body of `POST /authenticate/register`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub user_name: String,
    pub password: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nickname: Option<String>,
}

fn deserialize_i64_from_number<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    match value {
        serde_json::Value::Number(number) => {
            if let Some(int) = number.as_i64() {
                return Ok(int);
            }
            #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
            if let Some(float) = number.as_f64()
                && float.is_finite()
                && float.fract() == 0.0
                && float >= i64::MIN as f64
                && float <= i64::MAX as f64
            {
                return Ok(float as i64);
            }
            Err(D::Error::custom("expected integer-compatible number"))
        }
        _ => Err(D::Error::custom("expected number")),
    }
}

fn deserialize_display_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    match value {
        serde_json::Value::String(text) => Ok(text),
        serde_json::Value::Number(number) => Ok(number.to_string()),
        _ => Err(D::Error::custom("expected string or number")),
    }
}

fn deserialize_null_as_empty<'de, D>(deserializer: D) -> Result<Vec<SubmissionSummary>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<SubmissionSummary>>::deserialize(deserializer)?.unwrap_or_default())
}
