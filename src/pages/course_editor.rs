//! Course editor page for `/editor`.
//!
//! SYSTEM CONTEXT
//! ==============
//! Binds the draft fields to [`CourseEditorState`] and autosaves every edit
//! to `localStorage`, so leaving the page never loses work. Publishing the
//! draft to the course service is handled outside this client layer.

#[cfg(test)]
#[path = "course_editor_test.rs"]
mod course_editor_test;

use leptos::prelude::*;

use crate::state::course_editor::{CourseDraft, CourseEditorState};
use crate::util::markdown::render_markdown;
use crate::util::storage::BrowserStorage;

pub(crate) fn editor_heading(draft: &CourseDraft) -> String {
    match draft.editing_course_id {
        Some(id) => format!("Editing course #{id}"),
        None => "New course".to_owned(),
    }
}

#[component]
pub fn CourseEditorPage() -> impl IntoView {
    let editor = expect_context::<RwSignal<CourseEditorState>>();

    // Pick up a draft saved by an earlier visit or another tab.
    Effect::new(move || {
        editor.update(|e| e.load_from_local(&BrowserStorage));
    });

    let edit = move |apply: fn(&mut CourseDraft, String), value: String| {
        editor.update(|e| e.edit(&BrowserStorage, |d| apply(d, value)));
    };

    let heading = move || editor_heading(&editor.get().draft);
    let preview = move || render_markdown(&editor.get().draft.course_content);

    view! {
        <section class="course-editor">
            <h2>{heading}</h2>
            <label for="course-title">"Title"</label>
            <input
                id="course-title"
                type="text"
                prop:value=move || editor.get().draft.title
                on:input=move |ev| edit(|d, v| d.title = v, event_target_value(&ev))
            />
            <label for="course-short-description">"Short description"</label>
            <input
                id="course-short-description"
                type="text"
                prop:value=move || editor.get().draft.short_description
                on:input=move |ev| edit(|d, v| d.short_description = v, event_target_value(&ev))
            />
            <label for="course-content">"Content (Markdown)"</label>
            <textarea
                id="course-content"
                rows="16"
                prop:value=move || editor.get().draft.course_content
                on:input=move |ev| edit(|d, v| d.course_content = v, event_target_value(&ev))
            ></textarea>
            <div class="editor-preview" inner_html=preview></div>
            <button class="btn editor-reset" on:click=move |_| editor.update(|e| e.reset(&BrowserStorage))>
                "Discard draft"
            </button>
        </section>
    }
}
