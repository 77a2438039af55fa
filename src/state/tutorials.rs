//! Tutorial-collection state for list and detail views.
//!
//! DESIGN
//! ======
//! The container records what callers report about a fetch (`fetch_start`,
//! then `fetch_success` or `fetch_failure`) without knowing the request
//! exists. Edits replace whole records; every arm builds a new value so
//! snapshots already handed out never change underneath a reader.
//!
//! `add` does not check id uniqueness. `update` touches only the first
//! matching record while `delete` drops every match.

#[cfg(test)]
#[path = "tutorials_test.rs"]
mod tutorials_test;

use serde::{Deserialize, Serialize};

/// A tutorial record as served by the tutorials API.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tutorial {
    pub id: String,
    pub title: String,
    pub content: String,
}

/// Ordered tutorial list plus fetch status.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TutorialsState {
    pub tutorials: Vec<Tutorial>,
    pub loading: bool,
    pub error: Option<String>,
}

impl TutorialsState {
    /// First tutorial with `id`, if any.
    #[must_use]
    pub fn find(&self, id: &str) -> Option<&Tutorial> {
        self.tutorials.iter().find(|t| t.id == id)
    }
}

/// Transitions accepted by the tutorials container.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TutorialsAction {
    FetchStart,
    FetchSuccess(Vec<Tutorial>),
    FetchFailure(String),
    Add(Tutorial),
    Update(Tutorial),
    Delete(String),
}

#[must_use]
pub fn reduce(state: &TutorialsState, action: &TutorialsAction) -> TutorialsState {
    match action {
        TutorialsAction::FetchStart => TutorialsState { loading: true, error: None, ..state.clone() },
        // A stale error from an earlier failure survives a success; only
        // `FetchStart` clears it.
        TutorialsAction::FetchSuccess(items) => TutorialsState {
            tutorials: items.clone(),
            loading: false,
            error: state.error.clone(),
        },
        TutorialsAction::FetchFailure(message) => TutorialsState {
            loading: false,
            error: Some(message.clone()),
            ..state.clone()
        },
        TutorialsAction::Add(tutorial) => {
            let mut tutorials = Vec::with_capacity(state.tutorials.len() + 1);
            tutorials.extend(state.tutorials.iter().cloned());
            tutorials.push(tutorial.clone());
            TutorialsState { tutorials, ..state.clone() }
        }
        TutorialsAction::Update(tutorial) => {
            let Some(index) = state.tutorials.iter().position(|t| t.id == tutorial.id) else {
                return state.clone();
            };
            let tutorials = state
                .tutorials
                .iter()
                .enumerate()
                .map(|(i, t)| if i == index { tutorial.clone() } else { t.clone() })
                .collect();
            TutorialsState { tutorials, ..state.clone() }
        }
        TutorialsAction::Delete(id) => {
            let tutorials = state.tutorials.iter().filter(|t| &t.id != id).cloned().collect();
            TutorialsState { tutorials, ..state.clone() }
        }
    }
}
