//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Route guards and user-aware views read this slice to decide whether a
//! bearer token is available. The token survives page reloads through the
//! injected [`TokenStorage`]; the user record does not and is re-fetched by
//! the embedding application after a reload.
//!
//! TRADE-OFFS
//! ==========
//! Token persistence is fire-and-forget. A failed write is logged and the
//! in-memory session still reflects the login, so the current page keeps
//! working even when the browser refuses storage.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use serde::{Deserialize, Serialize};

use crate::error::ErrorCode;
use crate::storage::TokenStorage;

/// Platform role of an authenticated user.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserType {
    Student,
    Tutor,
    Admin,
}

/// An authenticated user as returned by the login endpoint.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique user identifier.
    pub id: String,
    pub email: String,
    #[serde(rename = "userType")]
    pub user_type: UserType,
}

/// Authentication state: current user, bearer token, and the derived flag.
///
/// `is_authenticated` is true exactly when `token` is present. Every
/// constructor and reducer arm keeps the two in lockstep.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthState {
    pub user: Option<User>,
    pub token: Option<String>,
    pub is_authenticated: bool,
}

impl AuthState {
    /// Initial state for a fresh store: whatever token a previous session
    /// left under `key`, and no user.
    pub fn from_storage<S: TokenStorage + ?Sized>(storage: &S, key: &str) -> Self {
        let token = storage.get(key);
        Self { user: None, is_authenticated: token.is_some(), token }
    }

    /// `Authorization` header value for API calls, if a token is held.
    #[must_use]
    pub fn bearer_header(&self) -> Option<String> {
        self.token.as_deref().map(|t| format!("Bearer {t}"))
    }
}

/// Transitions accepted by the auth container.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AuthAction {
    /// Replace the session with `user` and `token`. Inputs are trusted.
    SetCredentials { user: User, token: String },
    /// Drop the session entirely.
    Logout,
}

/// Pure transition: no storage access.
#[must_use]
pub fn reduce(_state: &AuthState, action: &AuthAction) -> AuthState {
    match action {
        AuthAction::SetCredentials { user, token } => AuthState {
            user: Some(user.clone()),
            token: Some(token.clone()),
            is_authenticated: true,
        },
        AuthAction::Logout => AuthState::default(),
    }
}

/// Mirror the token side of `action` into durable storage.
///
/// Failures are logged and swallowed.
pub fn persist<S: TokenStorage + ?Sized>(action: &AuthAction, storage: &mut S, key: &str) {
    let result = match action {
        AuthAction::SetCredentials { token, .. } => storage.set(key, token),
        AuthAction::Logout => storage.remove(key),
    };
    if let Err(e) = result {
        tracing::warn!(key, code = e.error_code(), error = %e, "token persistence failed");
    }
}

/// Reduce `action` and persist its token effect.
pub fn apply<S: TokenStorage + ?Sized>(state: &AuthState, action: &AuthAction, storage: &mut S, key: &str) -> AuthState {
    let next = reduce(state, action);
    persist(action, storage, key);
    match action {
        AuthAction::SetCredentials { user, .. } => {
            tracing::info!(user_id = %user.id, user_type = ?user.user_type, "credentials set");
        }
        AuthAction::Logout => tracing::info!("logged out"),
    }
    next
}
