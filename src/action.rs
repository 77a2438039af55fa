//! Tagged action protocol consumed by [`crate::store::Store::dispatch`].
//!
//! SYSTEM CONTEXT
//! ==============
//! In Rust, an action is a two-level enum: the container it addresses, then
//! that container's own action. On the wire (devtools, persisted replays,
//! JS interop) it is `{"type": "<slice>/<op>", "payload": ...}`.
//!
//! ERROR HANDLING
//! ==============
//! Decoding distinguishes a missing tag, an unknown tag and a known tag with a
//! payload of the wrong shape, so callers can log which one they hit.

#[cfg(test)]
#[path = "action_test.rs"]
mod action_test;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::ErrorCode;
use crate::state::auth::{AuthAction, User};
use crate::state::tutorials::{Tutorial, TutorialsAction};

/// Every wire tag the store understands.
pub const TAGS: [&str; 8] = [
    "auth/setCredentials",
    "auth/logout",
    "tutorials/fetchStart",
    "tutorials/fetchSuccess",
    "tutorials/fetchFailure",
    "tutorials/add",
    "tutorials/update",
    "tutorials/delete",
];

/// Error returned by [`Action::from_json`] and [`Action::from_value`].
#[derive(Debug, thiserror::Error)]
pub enum ActionError {
    #[error("action is not valid json: {0}")]
    InvalidJson(#[from] serde_json::Error),
    #[error("action has no string `type` field")]
    MissingTag,
    #[error("unknown action: {0}")]
    UnknownTag(String),
    #[error("malformed payload for {tag}: {message}")]
    MalformedPayload { tag: String, message: String },
}

impl ErrorCode for ActionError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidJson(_) => "E_INVALID_JSON",
            Self::MissingTag => "E_MISSING_TAG",
            Self::UnknownTag(_) => "E_UNKNOWN_ACTION",
            Self::MalformedPayload { .. } => "E_MALFORMED_ACTION",
        }
    }
}

/// Name of the container an action addresses.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Slice {
    Auth,
    Tutorials,
}

impl Slice {
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Auth => "auth",
            Self::Tutorials => "tutorials",
        }
    }
}

/// A requested state transition, routed by container.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "WireAction", into = "WireAction")]
pub enum Action {
    Auth(AuthAction),
    Tutorials(TutorialsAction),
}

impl Action {
    #[must_use]
    pub fn set_credentials(user: User, token: impl Into<String>) -> Self {
        Self::Auth(AuthAction::SetCredentials { user, token: token.into() })
    }

    #[must_use]
    pub fn logout() -> Self {
        Self::Auth(AuthAction::Logout)
    }

    #[must_use]
    pub fn fetch_start() -> Self {
        Self::Tutorials(TutorialsAction::FetchStart)
    }

    #[must_use]
    pub fn fetch_success(tutorials: Vec<Tutorial>) -> Self {
        Self::Tutorials(TutorialsAction::FetchSuccess(tutorials))
    }

    #[must_use]
    pub fn fetch_failure(message: impl Into<String>) -> Self {
        Self::Tutorials(TutorialsAction::FetchFailure(message.into()))
    }

    #[must_use]
    pub fn add_tutorial(tutorial: Tutorial) -> Self {
        Self::Tutorials(TutorialsAction::Add(tutorial))
    }

    #[must_use]
    pub fn update_tutorial(tutorial: Tutorial) -> Self {
        Self::Tutorials(TutorialsAction::Update(tutorial))
    }

    #[must_use]
    pub fn delete_tutorial(id: impl Into<String>) -> Self {
        Self::Tutorials(TutorialsAction::Delete(id.into()))
    }

    /// Container this action is routed to.
    #[must_use]
    pub fn slice(&self) -> Slice {
        match self {
            Self::Auth(_) => Slice::Auth,
            Self::Tutorials(_) => Slice::Tutorials,
        }
    }

    /// Wire tag, e.g. `"tutorials/add"`.
    #[must_use]
    pub fn tag(&self) -> &'static str {
        match self {
            Self::Auth(AuthAction::SetCredentials { .. }) => "auth/setCredentials",
            Self::Auth(AuthAction::Logout) => "auth/logout",
            Self::Tutorials(TutorialsAction::FetchStart) => "tutorials/fetchStart",
            Self::Tutorials(TutorialsAction::FetchSuccess(_)) => "tutorials/fetchSuccess",
            Self::Tutorials(TutorialsAction::FetchFailure(_)) => "tutorials/fetchFailure",
            Self::Tutorials(TutorialsAction::Add(_)) => "tutorials/add",
            Self::Tutorials(TutorialsAction::Update(_)) => "tutorials/update",
            Self::Tutorials(TutorialsAction::Delete(_)) => "tutorials/delete",
        }
    }

    /// Decode an action from its JSON wire form.
    ///
    /// # Errors
    ///
    /// See [`ActionError`].
    pub fn from_json(raw: &str) -> Result<Self, ActionError> {
        let value: Value = serde_json::from_str(raw)?;
        Self::from_value(value)
    }

    /// Decode an action from an already-parsed JSON value.
    ///
    /// # Errors
    ///
    /// See [`ActionError`].
    pub fn from_value(value: Value) -> Result<Self, ActionError> {
        let tag = value
            .get("type")
            .and_then(Value::as_str)
            .ok_or(ActionError::MissingTag)?
            .to_owned();
        if !TAGS.contains(&tag.as_str()) {
            return Err(ActionError::UnknownTag(tag));
        }
        serde_json::from_value(value).map_err(|e| ActionError::MalformedPayload { tag, message: e.to_string() })
    }

    /// Encode into the JSON wire form.
    #[must_use]
    pub fn to_json(&self) -> String {
        // Serializing owned strings and derived structs into a String cannot
        // fail; the fallback only satisfies the signature.
        serde_json::to_string(self).unwrap_or_default()
    }
}

impl From<AuthAction> for Action {
    fn from(action: AuthAction) -> Self {
        Self::Auth(action)
    }
}

impl From<TutorialsAction> for Action {
    fn from(action: TutorialsAction) -> Self {
        Self::Tutorials(action)
    }
}

/// Flat, adjacently tagged mirror of [`Action`] used only for serde.
#[derive(Serialize, Deserialize)]
#[serde(tag = "type", content = "payload")]
enum WireAction {
    #[serde(rename = "auth/setCredentials")]
    SetCredentials { user: User, token: String },
    #[serde(rename = "auth/logout")]
    Logout,
    #[serde(rename = "tutorials/fetchStart")]
    FetchStart,
    #[serde(rename = "tutorials/fetchSuccess")]
    FetchSuccess(Vec<Tutorial>),
    #[serde(rename = "tutorials/fetchFailure")]
    FetchFailure(String),
    #[serde(rename = "tutorials/add")]
    Add(Tutorial),
    #[serde(rename = "tutorials/update")]
    Update(Tutorial),
    #[serde(rename = "tutorials/delete")]
    Delete(String),
}

impl From<WireAction> for Action {
    fn from(wire: WireAction) -> Self {
        match wire {
            WireAction::SetCredentials { user, token } => Self::Auth(AuthAction::SetCredentials { user, token }),
            WireAction::Logout => Self::Auth(AuthAction::Logout),
            WireAction::FetchStart => Self::Tutorials(TutorialsAction::FetchStart),
            WireAction::FetchSuccess(items) => Self::Tutorials(TutorialsAction::FetchSuccess(items)),
            WireAction::FetchFailure(message) => Self::Tutorials(TutorialsAction::FetchFailure(message)),
            WireAction::Add(t) => Self::Tutorials(TutorialsAction::Add(t)),
            WireAction::Update(t) => Self::Tutorials(TutorialsAction::Update(t)),
            WireAction::Delete(id) => Self::Tutorials(TutorialsAction::Delete(id)),
        }
    }
}

impl From<Action> for WireAction {
    fn from(action: Action) -> Self {
        match action {
            Action::Auth(AuthAction::SetCredentials { user, token }) => Self::SetCredentials { user, token },
            Action::Auth(AuthAction::Logout) => Self::Logout,
            Action::Tutorials(TutorialsAction::FetchStart) => Self::FetchStart,
            Action::Tutorials(TutorialsAction::FetchSuccess(items)) => Self::FetchSuccess(items),
            Action::Tutorials(TutorialsAction::FetchFailure(message)) => Self::FetchFailure(message),
            Action::Tutorials(TutorialsAction::Add(t)) => Self::Add(t),
            Action::Tutorials(TutorialsAction::Update(t)) => Self::Update(t),
            Action::Tutorials(TutorialsAction::Delete(id)) => Self::Delete(id),
        }
    }
}
