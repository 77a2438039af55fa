//! Store configuration.
//!
//! The only tunable is the durable-storage key the auth token lives under.
//! Defaults match what the web client has always written.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// Default durable-storage key for the bearer token.
pub const DEFAULT_TOKEN_KEY: &str = "token";

/// Environment variable overriding [`DEFAULT_TOKEN_KEY`].
pub const TOKEN_KEY_ENV: &str = "TUTORIAL_TOKEN_KEY";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StoreConfig {
    /// Storage key used for `get`/`set`/`remove` of the auth token.
    pub token_key: String,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self { token_key: DEFAULT_TOKEN_KEY.to_owned() }
    }
}

impl StoreConfig {
    /// Load from `TUTORIAL_TOKEN_KEY`, falling back to defaults when the
    /// variable is unset or blank.
    #[must_use]
    pub fn from_env() -> Self {
        Self { token_key: env_string(TOKEN_KEY_ENV, DEFAULT_TOKEN_KEY) }
    }
}

pub(crate) fn env_string(key: &str, default: &str) -> String {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_owned())
        .filter(|v| !v.is_empty())
        .unwrap_or_else(|| default.to_owned())
}
