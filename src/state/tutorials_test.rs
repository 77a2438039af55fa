use super::*;

fn tutorial(id: &str, title: &str, content: &str) -> Tutorial {
    Tutorial { id: id.to_owned(), title: title.to_owned(), content: content.to_owned() }
}

fn with_items(items: Vec<Tutorial>) -> TutorialsState {
    TutorialsState { tutorials: items, ..TutorialsState::default() }
}

// =============================================================
// Defaults
// =============================================================

#[test]
fn tutorials_state_defaults() {
    let s = TutorialsState::default();
    assert!(s.tutorials.is_empty());
    assert!(!s.loading);
    assert!(s.error.is_none());
}

// =============================================================
// Fetch lifecycle
// =============================================================

#[test]
fn fetch_start_sets_loading_and_clears_error() {
    let prior = TutorialsState { error: Some("old".to_owned()), ..with_items(vec![tutorial("1", "A", "x")]) };
    let next = reduce(&prior, &TutorialsAction::FetchStart);
    assert!(next.loading);
    assert!(next.error.is_none());
    assert_eq!(next.tutorials, prior.tutorials);
}

#[test]
fn fetch_start_then_failure_records_message() {
    let started = reduce(&TutorialsState::default(), &TutorialsAction::FetchStart);
    assert!(started.loading);
    assert!(started.error.is_none());

    let failed = reduce(&started, &TutorialsAction::FetchFailure("network down".to_owned()));
    assert!(!failed.loading);
    assert_eq!(failed.error.as_deref(), Some("network down"));
}

#[test]
fn fetch_failure_keeps_existing_items() {
    let prior = with_items(vec![tutorial("1", "A", "x")]);
    let next = reduce(&prior, &TutorialsAction::FetchFailure("boom".to_owned()));
    assert_eq!(next.tutorials, prior.tutorials);
}

#[test]
fn fetch_success_replaces_items_and_stops_loading() {
    let prior = TutorialsState { loading: true, ..with_items(vec![tutorial("old", "Old", "o")]) };
    let fresh = vec![tutorial("1", "A", "x"), tutorial("2", "B", "y")];
    let next = reduce(&prior, &TutorialsAction::FetchSuccess(fresh.clone()));
    assert_eq!(next.tutorials, fresh);
    assert!(!next.loading);
}

#[test]
fn fetch_success_leaves_error_untouched() {
    let prior = TutorialsState { error: Some("stale".to_owned()), ..TutorialsState::default() };
    let next = reduce(&prior, &TutorialsAction::FetchSuccess(Vec::new()));
    assert_eq!(next.error.as_deref(), Some("stale"));
}

// =============================================================
// Add
// =============================================================

#[test]
fn add_appends_to_end() {
    let prior = with_items(vec![tutorial("1", "A", "x")]);
    let next = reduce(&prior, &TutorialsAction::Add(tutorial("2", "B", "y")));
    assert_eq!(next.tutorials.len(), prior.tutorials.len() + 1);
    assert_eq!(next.tutorials.last(), Some(&tutorial("2", "B", "y")));
    assert_eq!(prior.tutorials.len(), 1);
}

#[test]
fn add_allows_duplicate_ids() {
    let prior = with_items(vec![tutorial("1", "A", "x")]);
    let next = reduce(&prior, &TutorialsAction::Add(tutorial("1", "Again", "z")));
    assert_eq!(next.tutorials.len(), 2);
    assert_eq!(next.tutorials[0].title, "A");
    assert_eq!(next.tutorials[1].title, "Again");
}

// =============================================================
// Update
// =============================================================

#[test]
fn update_replaces_matching_record_in_place() {
    let prior = with_items(vec![tutorial("1", "A", "x"), tutorial("2", "B", "y"), tutorial("3", "C", "z")]);
    let next = reduce(&prior, &TutorialsAction::Update(tutorial("2", "B2", "y2")));
    assert_eq!(
        next.tutorials,
        vec![tutorial("1", "A", "x"), tutorial("2", "B2", "y2"), tutorial("3", "C", "z")]
    );
}

#[test]
fn update_missing_id_is_noop() {
    let prior = TutorialsState { loading: true, ..with_items(vec![tutorial("1", "A", "x")]) };
    let next = reduce(&prior, &TutorialsAction::Update(tutorial("9", "Z", "z")));
    assert_eq!(next, prior);
}

#[test]
fn update_touches_only_first_duplicate() {
    let prior = with_items(vec![tutorial("1", "A", "x"), tutorial("1", "A2", "x2")]);
    let next = reduce(&prior, &TutorialsAction::Update(tutorial("1", "B", "b")));
    assert_eq!(next.tutorials, vec![tutorial("1", "B", "b"), tutorial("1", "A2", "x2")]);
}

// =============================================================
// Delete
// =============================================================

#[test]
fn delete_removes_every_match_and_keeps_order() {
    let prior = with_items(vec![
        tutorial("1", "A", "x"),
        tutorial("2", "B", "y"),
        tutorial("1", "A2", "x2"),
        tutorial("3", "C", "z"),
    ]);
    let next = reduce(&prior, &TutorialsAction::Delete("1".to_owned()));
    assert_eq!(next.tutorials, vec![tutorial("2", "B", "y"), tutorial("3", "C", "z")]);
}

#[test]
fn delete_missing_id_is_noop() {
    let prior = with_items(vec![tutorial("1", "A", "x")]);
    let next = reduce(&prior, &TutorialsAction::Delete("nope".to_owned()));
    assert_eq!(next, prior);
}

// =============================================================
// Scenario and selectors
// =============================================================

#[test]
fn update_delete_add_scenario() {
    let start = with_items(vec![tutorial("1", "A", "x")]);

    let updated = reduce(&start, &TutorialsAction::Update(tutorial("1", "B", "x")));
    assert_eq!(updated.tutorials, vec![tutorial("1", "B", "x")]);

    let deleted = reduce(&updated, &TutorialsAction::Delete("1".to_owned()));
    assert!(deleted.tutorials.is_empty());

    let added = reduce(&deleted, &TutorialsAction::Add(tutorial("2", "C", "y")));
    assert_eq!(added.tutorials, vec![tutorial("2", "C", "y")]);
}

#[test]
fn find_returns_first_match() {
    let state = with_items(vec![tutorial("1", "A", "x"), tutorial("1", "A2", "x2")]);
    assert_eq!(state.find("1").map(|t| t.title.as_str()), Some("A"));
    assert!(state.find("2").is_none());
}
