//! Build-time client configuration.
//!
//! Values default to the local development backend and can be overridden at
//! compile time through environment variables, since the WASM bundle has no
//! runtime environment to read from.

/// Backend origin used when `JUDGE_API_BASE_URL` is not set at build time.
pub const DEFAULT_API_BASE_URL: &str = "http://127.0.0.1:5148";

/// Path prefix every REST endpoint lives under.
pub const API_PREFIX: &str = "/api";

/// `localStorage` key holding the combined session record.
pub const SESSION_STORAGE_KEY: &str = "judge_client.session";

/// Keys written by older client builds that split token and profile.
/// They are removed on logout and never read back.
pub const LEGACY_STORAGE_KEYS: [&str; 3] = ["jwt_token", "user_info", "userInfo"];

/// Default lifetime of a toast notification, in milliseconds.
pub const DEFAULT_MESSAGE_DURATION_MS: u32 = 3000;

/// Resolved backend origin for this build.
pub fn api_base_url() -> &'static str {
    option_env!("JUDGE_API_BASE_URL").unwrap_or(DEFAULT_API_BASE_URL)
}
