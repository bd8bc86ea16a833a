//! Course-editor draft state.
//!
//! DESIGN
//! ======
//! The draft is autosaved to durable storage under `courseEditor` so an
//! author can leave the editor and come back. Saving is best-effort: failures
//! are logged and never interrupt typing. There is no versioning or conflict
//! detection between tabs; the last write wins.

#[cfg(test)]
#[path = "course_editor_test.rs"]
mod course_editor_test;

use serde::{Deserialize, Deserializer, Serialize};

use crate::config::COURSE_EDITOR_KEY;
use crate::util::storage::{KeyValueStore, save_json};

/// An in-progress course. `editing_course_id` is `None` for a new course.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseDraft {
    pub title: String,
    pub short_description: String,
    pub course_content: String,
    pub editing_course_id: Option<i64>,
}

/// Stored draft where every field is optional, so a partial record only
/// overwrites the fields it carries.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct StoredDraft {
    title: Option<String>,
    short_description: Option<String>,
    course_content: Option<String>,
    #[serde(default, deserialize_with = "deserialize_present")]
    editing_course_id: Option<Option<i64>>,
}

/// Distinguish an explicit `null` (`Some(None)`) from an absent key (`None`).
fn deserialize_present<'de, D>(deserializer: D) -> Result<Option<Option<i64>>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<i64>::deserialize(deserializer).map(Some)
}

/// Editable draft plus its persistence operations.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CourseEditorState {
    pub draft: CourseDraft,
}

impl CourseEditorState {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.draft == CourseDraft::default()
    }

    /// Serialize the whole draft to storage. Failures are logged, not returned.
    pub fn save_to_local(&self, store: &impl KeyValueStore) {
        if let Err(e) = save_json(store, COURSE_EDITOR_KEY, &self.draft) {
            leptos::logging::warn!("couldn't save course editor state: {e}");
        }
    }

    /// Merge a previously saved draft into the current one, if any.
    pub fn load_from_local(&mut self, store: &impl KeyValueStore) {
        let Some(raw) = store.get(COURSE_EDITOR_KEY) else {
            return;
        };
        let stored: StoredDraft = match serde_json::from_str(&raw) {
            Ok(stored) => stored,
            Err(e) => {
                leptos::logging::warn!("ignoring unreadable course editor state: {e}");
                return;
            }
        };
        if let Some(title) = stored.title {
            self.draft.title = title;
        }
        if let Some(short_description) = stored.short_description {
            self.draft.short_description = short_description;
        }
        if let Some(course_content) = stored.course_content {
            self.draft.course_content = course_content;
        }
        if let Some(editing_course_id) = stored.editing_course_id {
            self.draft.editing_course_id = editing_course_id;
        }
    }

    /// Clear every field and persist the empty draft immediately.
    pub fn reset(&mut self, store: &impl KeyValueStore) {
        self.draft = CourseDraft::default();
        self.save_to_local(store);
    }

    /// Start editing an existing course from a clean draft.
    pub fn begin_editing(&mut self, course_id: i64, store: &impl KeyValueStore) {
        self.draft = CourseDraft { editing_course_id: Some(course_id), ..CourseDraft::default() };
        self.save_to_local(store);
    }

    /// Apply an edit to the draft and autosave it.
    pub fn edit(&mut self, store: &impl KeyValueStore, apply: impl FnOnce(&mut CourseDraft)) {
        apply(&mut self.draft);
        self.save_to_local(store);
    }
}
