//! Session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! The session is the client's belief about who is signed in and what they
//! may do. It is read by the navigation guard and user-aware pages, and it is
//! written only through [`SessionStore`]'s mutating operations.
//!
//! PERSISTENCE
//! ===========
//! The token and profile are stored together as one versioned record under
//! [`config::SESSION_STORAGE_KEY`], written and removed as a unit. A record
//! that fails to parse, carries another schema version, or has an empty token
//! or username is discarded and the session is cleared. Storage failures are
//! logged and never surface: in-memory state stays authoritative for the rest
//! of the page lifetime.
//!
//! RESTORE PHASE
//! =============
//! A new store has not looked at storage yet, and it says so through
//! [`SessionStore::is_restored`]. Server renders never restore, and the
//! browser restores once after mount. Until then callers must not treat
//! "signed out" as an answer.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::config;
use crate::net::types::{AuthPayload, UserProfile};
use crate::util::storage::{self, DurableStorage, LocalStorage, StorageError};

/// Schema version written into every persisted session record.
pub const SESSION_SCHEMA_VERSION: u32 = 1;

/// Permission granting site administration.
pub const PERMISSION_ADMIN: &str = "admin";
/// Permission granting everything `admin` does.
pub const PERMISSION_SUPERADMIN: &str = "superadmin";
/// Permission granting administration of a team/group.
pub const PERMISSION_GROUP_ADMIN: &str = "group.admin";

/// Shared handle to the session provided through Leptos context.
pub type SessionContext = leptos::prelude::RwSignal<SessionStore>;

/// `true` when `permissions` grant site administration.
pub fn grants_admin(permissions: &BTreeSet<String>) -> bool {
    permissions.contains(PERMISSION_ADMIN) || permissions.contains(PERMISSION_SUPERADMIN)
}

/// `true` when `permissions` grant team administration. Site admins are
/// team admins everywhere.
pub fn grants_team_admin(permissions: &BTreeSet<String>) -> bool {
    permissions.contains(PERMISSION_GROUP_ADMIN) || grants_admin(permissions)
}

/// A signed-in user: the bearer token and the profile it was issued with.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ActiveSession {
    pub token: String,
    pub profile: UserProfile,
}

/// Immutable view of the session handed to the navigation guard.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SessionSnapshot {
    pub authenticated: bool,
    pub permissions: BTreeSet<String>,
}

impl SessionSnapshot {
    /// Snapshot of a visitor with no session.
    pub fn anonymous() -> Self {
        Self::default()
    }

    /// Snapshot of a signed-in user holding `permissions`.
    pub fn signed_in<I, P>(permissions: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<String>,
    {
        Self {
            authenticated: true,
            permissions: permissions.into_iter().map(Into::into).collect(),
        }
    }

    pub fn is_admin(&self) -> bool {
        self.authenticated && grants_admin(&self.permissions)
    }

    pub fn is_team_admin(&self) -> bool {
        self.authenticated && grants_team_admin(&self.permissions)
    }
}

/// On-disk shape of a session.
#[derive(Debug, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
struct PersistedSession {
    version: u32,
    token: String,
    profile: UserProfile,
}

/// Why a persisted record was not restored.
#[derive(Debug, thiserror::Error)]
enum RestoreError {
    #[error("no persisted session")]
    Missing,
    #[error(transparent)]
    Storage(StorageError),
    #[error("unsupported session schema version {0}")]
    VersionMismatch(u32),
    #[error("session has an empty {0}")]
    Incomplete(&'static str),
}

/// The one rule both sign-in and restore apply: a session needs a non-blank
/// token and username.
fn check_credentials(token: &str, profile: &UserProfile) -> Result<(), RestoreError> {
    if token.trim().is_empty() {
        return Err(RestoreError::Incomplete("token"));
    }
    if profile.username.trim().is_empty() {
        return Err(RestoreError::Incomplete("username"));
    }
    Ok(())
}

impl PersistedSession {
    fn from_active(active: &ActiveSession) -> Self {
        Self {
            version: SESSION_SCHEMA_VERSION,
            token: active.token.clone(),
            profile: active.profile.clone(),
        }
    }

    fn into_active(self) -> Result<ActiveSession, RestoreError> {
        if self.version != SESSION_SCHEMA_VERSION {
            return Err(RestoreError::VersionMismatch(self.version));
        }
        check_credentials(&self.token, &self.profile)?;
        Ok(ActiveSession {
            token: self.token,
            profile: self.profile,
        })
    }
}

/// Single source of truth for "who is the current user".
///
/// Construct one per page (or per test) and share it through context; there
/// is no ambient global. `profile` is present exactly when the store is
/// authenticated.
#[derive(Clone, Debug, Default)]
pub struct SessionStore<S = LocalStorage> {
    storage: S,
    active: Option<ActiveSession>,
    restored: bool,
}

impl<S: DurableStorage> SessionStore<S> {
    /// Empty, unauthenticated store over `storage`. Nothing is read yet, so
    /// the store is not restored.
    pub fn new(storage: S) -> Self {
        Self {
            storage,
            active: None,
            restored: false,
        }
    }

    /// Mark the user signed in with `token` and `profile`, then persist.
    ///
    /// A blank token or username is logged and ignored, leaving the store
    /// untouched, since restore would reject the same record. Returns whether
    /// the session was adopted. A storage error leaves the in-memory session
    /// in place.
    pub fn set_session(&mut self, token: impl Into<String>, profile: UserProfile) -> bool {
        let token = token.into();
        if let Err(e) = check_credentials(&token, &profile) {
            leptos::logging::warn!("session: sign-in ignored: {e}");
            return false;
        }
        self.active = Some(ActiveSession { token, profile });
        self.restored = true;
        self.persist();
        true
    }

    /// Adopt the payload of a successful login or registration.
    pub fn sign_in(&mut self, payload: AuthPayload) -> bool {
        self.set_session(payload.token, payload.user_profile)
    }

    /// Replace the signed-in user's profile wholesale, keeping the token.
    ///
    /// Returns `false` and changes nothing when no one is signed in or the
    /// new profile has a blank username.
    pub fn update_profile(&mut self, profile: UserProfile) -> bool {
        let Some(active) = self.active.as_mut() else {
            leptos::logging::warn!("session: profile update ignored, not signed in");
            return false;
        };
        if let Err(e) = check_credentials(&active.token, &profile) {
            leptos::logging::warn!("session: profile update ignored: {e}");
            return false;
        }
        active.profile = profile;
        self.persist();
        true
    }

    /// Forget the user in memory and in storage. Safe to call repeatedly.
    pub fn clear_session(&mut self) {
        self.active = None;
        self.restored = true;
        for key in std::iter::once(config::SESSION_STORAGE_KEY).chain(config::LEGACY_STORAGE_KEYS) {
            if let Err(e) = self.storage.remove_item(key) {
                leptos::logging::warn!("session: failed to remove {key}: {e}");
            }
        }
    }

    /// Reload the persisted session.
    ///
    /// Returns `true` when a valid record was found and adopted. A missing or
    /// invalid record clears the session and returns `false`. When storage
    /// itself cannot be read, the in-memory session is kept as-is and the
    /// result reports whether it is authenticated.
    pub fn restore_session(&mut self) -> bool {
        self.restored = true;
        match self.read_persisted() {
            Ok(active) => {
                self.active = Some(active);
                true
            }
            Err(RestoreError::Storage(StorageError::Unavailable | StorageError::Access(_))) => {
                leptos::logging::warn!("session: storage unreadable, keeping in-memory session");
                self.is_authenticated()
            }
            Err(RestoreError::Missing) => {
                self.clear_session();
                false
            }
            Err(e) => {
                leptos::logging::warn!("session: discarding persisted session: {e}");
                self.clear_session();
                false
            }
        }
    }

    fn read_persisted(&self) -> Result<ActiveSession, RestoreError> {
        let record: PersistedSession = storage::load_json(&self.storage, config::SESSION_STORAGE_KEY)
            .map_err(RestoreError::Storage)?
            .ok_or(RestoreError::Missing)?;
        record.into_active()
    }

    fn persist(&self) {
        let Some(active) = &self.active else {
            return;
        };
        let record = PersistedSession::from_active(active);
        if let Err(e) = storage::save_json(&self.storage, config::SESSION_STORAGE_KEY, &record) {
            leptos::logging::warn!("session: not persisted, continuing in memory: {e}");
        }
    }
}

impl<S> SessionStore<S> {
    /// `false` until storage has been consulted or the session was set or
    /// cleared explicitly. An unrestored store's "signed out" is not final.
    pub fn is_restored(&self) -> bool {
        self.restored
    }

    pub fn is_authenticated(&self) -> bool {
        self.active.is_some()
    }

    pub fn active(&self) -> Option<&ActiveSession> {
        self.active.as_ref()
    }

    pub fn profile(&self) -> Option<&UserProfile> {
        self.active.as_ref().map(|a| &a.profile)
    }

    pub fn token(&self) -> Option<&str> {
        self.active.as_ref().map(|a| a.token.as_str())
    }

    /// `Authorization` header value for authenticated requests.
    pub fn authorization_header(&self) -> Option<String> {
        self.token().map(crate::net::api::bearer)
    }

    /// Exact-membership permission check; always `false` when signed out.
    pub fn has_permission(&self, permission: &str) -> bool {
        self.profile().is_some_and(|p| p.permissions.contains(permission))
    }

    pub fn is_admin(&self) -> bool {
        self.profile().is_some_and(|p| grants_admin(&p.permissions))
    }

    pub fn is_team_admin(&self) -> bool {
        self.profile().is_some_and(|p| grants_team_admin(&p.permissions))
    }

    /// Copy of the state the navigation guard needs.
    pub fn snapshot(&self) -> SessionSnapshot {
        match self.profile() {
            Some(profile) => SessionSnapshot {
                authenticated: true,
                permissions: profile.permissions.clone(),
            },
            None => SessionSnapshot::anonymous(),
        }
    }

    /// Borrow the backing storage.
    pub fn storage(&self) -> &S {
        &self.storage
    }
}
