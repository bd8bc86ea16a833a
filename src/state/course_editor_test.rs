use super::*;
use crate::util::storage::{MemoryStorage, load_json};

fn filled() -> CourseEditorState {
    CourseEditorState {
        draft: CourseDraft {
            title: "Rust basics".to_owned(),
            short_description: "Ownership in an afternoon".to_owned(),
            course_content: "# Borrowing".to_owned(),
            editing_course_id: Some(12),
        },
    }
}

#[test]
fn default_draft_is_empty() {
    let state = CourseEditorState::default();
    assert!(state.is_empty());
    assert_eq!(state.draft.editing_course_id, None);
}

#[test]
fn draft_serializes_with_camel_case_keys() {
    assert_eq!(
        serde_json::to_value(&filled().draft).unwrap(),
        serde_json::json!({
            "title": "Rust basics",
            "shortDescription": "Ownership in an afternoon",
            "courseContent": "# Borrowing",
            "editingCourseId": 12,
        })
    );
}

#[test]
fn save_then_load_restores_draft() {
    let store = MemoryStorage::new();
    filled().save_to_local(&store);

    let mut restored = CourseEditorState::default();
    restored.load_from_local(&store);

    assert_eq!(restored, filled());
}

#[test]
fn load_without_saved_draft_keeps_current_state() {
    let store = MemoryStorage::new();
    let mut state = filled();
    state.load_from_local(&store);
    assert_eq!(state, filled());
}

#[test]
fn load_merges_only_present_fields() {
    let store = MemoryStorage::new();
    store.set(COURSE_EDITOR_KEY, r#"{"title":"Renamed"}"#).unwrap();

    let mut state = filled();
    state.load_from_local(&store);

    assert_eq!(state.draft.title, "Renamed");
    assert_eq!(state.draft.short_description, "Ownership in an afternoon");
    assert_eq!(state.draft.editing_course_id, Some(12));
}

#[test]
fn load_applies_explicit_null_course_id() {
    let store = MemoryStorage::new();
    store.set(COURSE_EDITOR_KEY, r#"{"editingCourseId":null}"#).unwrap();

    let mut state = filled();
    state.load_from_local(&store);

    assert_eq!(state.draft.editing_course_id, None);
    assert_eq!(state.draft.title, "Rust basics");
}

#[test]
fn load_ignores_corrupt_draft() {
    let store = MemoryStorage::new();
    store.set(COURSE_EDITOR_KEY, "{oops").unwrap();

    let mut state = filled();
    state.load_from_local(&store);

    assert_eq!(state, filled());
}

#[test]
fn reset_clears_fields_and_persists_empty_snapshot() {
    let store = MemoryStorage::new();
    let mut state = filled();
    state.save_to_local(&store);

    state.reset(&store);

    assert!(state.is_empty());
    assert_eq!(load_json::<CourseDraft>(&store, COURSE_EDITOR_KEY), Some(CourseDraft::default()));
}

#[test]
fn save_failure_is_swallowed() {
    let store = MemoryStorage::rejecting(COURSE_EDITOR_KEY);
    let mut state = filled();

    state.reset(&store);

    assert!(state.is_empty());
    assert!(!store.contains(COURSE_EDITOR_KEY));
}

#[test]
fn begin_editing_starts_clean_draft_for_course() {
    let store = MemoryStorage::new();
    let mut state = filled();

    state.begin_editing(99, &store);

    assert_eq!(state.draft, CourseDraft { editing_course_id: Some(99), ..CourseDraft::default() });
    assert_eq!(load_json::<CourseDraft>(&store, COURSE_EDITOR_KEY), Some(state.draft.clone()));
}

#[test]
fn edit_applies_change_and_autosaves() {
    let store = MemoryStorage::new();
    let mut state = CourseEditorState::default();

    state.edit(&store, |d| d.title = "Draft title".to_owned());

    assert_eq!(state.draft.title, "Draft title");
    assert_eq!(
        load_json::<CourseDraft>(&store, COURSE_EDITOR_KEY).map(|d| d.title),
        Some("Draft title".to_owned())
    );
}
