//! Store composition root.
//!
//! DESIGN
//! ======
//! The store owns the aggregate state tree and the durable-storage port.
//! `dispatch` takes `&mut self`, so there is exactly one writer and actions
//! are applied one at a time to completion. Each slice lives behind an `Arc`:
//! dispatching replaces only the addressed slice, and snapshots returned by
//! [`Store::get_state`] stay valid and unchanged after later dispatches.

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

use std::sync::Arc;

use serde::Serialize;

use crate::action::{Action, ActionError};
use crate::config::StoreConfig;
use crate::state::auth::{self, AuthState};
use crate::state::tutorials::{self, Tutorial, TutorialsState};
use crate::storage::TokenStorage;

/// Aggregate state tree keyed by container name.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct RootState {
    pub auth: Arc<AuthState>,
    pub tutorials: Arc<TutorialsState>,
}

impl RootState {
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.auth.is_authenticated
    }

    /// First tutorial with `id`, if loaded.
    #[must_use]
    pub fn tutorial(&self, id: &str) -> Option<&Tutorial> {
        self.tutorials.find(id)
    }
}

/// Single-writer state store over a durable-storage port `S`.
pub struct Store<S: TokenStorage> {
    state: RootState,
    storage: S,
    config: StoreConfig,
}

impl<S: TokenStorage> Store<S> {
    /// Build a store with default configuration, reading any persisted token.
    pub fn new(storage: S) -> Self {
        Self::with_config(storage, StoreConfig::default())
    }

    /// Build a store with an explicit configuration.
    pub fn with_config(storage: S, config: StoreConfig) -> Self {
        let auth = AuthState::from_storage(&storage, &config.token_key);
        tracing::debug!(
            token_key = %config.token_key,
            authenticated = auth.is_authenticated,
            "store initialized"
        );
        let state = RootState { auth: Arc::new(auth), tutorials: Arc::new(TutorialsState::default()) };
        Self { state, storage, config }
    }

    /// Route `action` to its container and replace that slice.
    pub fn dispatch(&mut self, action: Action) {
        tracing::debug!(action = action.tag(), slice = action.slice().name(), "dispatch");
        match action {
            Action::Auth(a) => {
                let next = auth::apply(&self.state.auth, &a, &mut self.storage, &self.config.token_key);
                self.state.auth = Arc::new(next);
            }
            Action::Tutorials(t) => {
                let next = tutorials::reduce(&self.state.tutorials, &t);
                self.state.tutorials = Arc::new(next);
            }
        }
    }

    /// Decode a JSON wire action and dispatch it.
    ///
    /// # Errors
    ///
    /// Returns [`ActionError`] when `raw` does not decode; state is untouched.
    pub fn dispatch_json(&mut self, raw: &str) -> Result<(), ActionError> {
        let action = Action::from_json(raw)?;
        self.dispatch(action);
        Ok(())
    }

    /// Point-in-time snapshot of the whole tree.
    #[must_use]
    pub fn get_state(&self) -> RootState {
        self.state.clone()
    }

    /// Borrow the current tree without cloning.
    #[must_use]
    pub fn state(&self) -> &RootState {
        &self.state
    }

    /// Read-only access to the storage port.
    #[must_use]
    pub fn storage(&self) -> &S {
        &self.storage
    }

    #[must_use]
    pub fn config(&self) -> &StoreConfig {
        &self.config
    }
}
