//! Course detail page for `/course/:courseId`.
//!
//! SYSTEM CONTEXT
//! ==============
//! Course bodies and comments come from the course service; this page owns
//! the route parameter, the authoring hand-off to the editor, and the
//! elements the `CourseDetail` tutorial points at.

#[cfg(test)]
#[path = "course_detail_test.rs"]
mod course_detail_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_params_map};

use crate::routes::RouteName;
use crate::state::auth::AuthState;
use crate::state::course_editor::CourseEditorState;
use crate::util::storage::BrowserStorage;

/// Course ids are positive integers; anything else is not a course.
pub(crate) fn parse_course_id(raw: &str) -> Option<i64> {
    raw.trim().parse::<i64>().ok().filter(|id| *id > 0)
}

#[component]
pub fn CourseDetailPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let editor = expect_context::<RwSignal<CourseEditorState>>();
    let params = use_params_map();
    let navigate = use_navigate();
    let comment = RwSignal::new(String::new());
    let open_editor = RwSignal::new(false);

    Effect::new(move || {
        if open_editor.get() {
            open_editor.set(false);
            navigate(RouteName::CourseEditor.path(), NavigateOptions::default());
        }
    });

    let course_id = move || params.read().get("courseId").as_deref().and_then(parse_course_id);
    let can_author = move || auth.get().user().is_some_and(|u| u.role.can_author());

    let title = move || course_id().map_or_else(|| "Unknown course".to_owned(), |id| format!("Course #{id}"));

    let on_edit = move |_| {
        let Some(id) = course_id() else {
            return;
        };
        editor.update(|e| e.begin_editing(id, &BrowserStorage));
        open_editor.set(true);
    };

    view! {
        <section class="course-detail">
            <a href=RouteName::Home.path() class="back-button">
                "← Back to overview"
            </a>
            <h2>{title}</h2>
            <div class="course-content">
                <Show
                    when=move || course_id().is_some()
                    fallback=|| view! { <p>"This course does not exist."</p> }
                >
                    <p>"Course material is loaded from the course service."</p>
                </Show>
            </div>
            <Show when=move || can_author() && course_id().is_some()>
                <button class="btn course-detail__edit" on:click=on_edit>
                    "Edit this course"
                </button>
            </Show>
            <textarea
                class="comment-input"
                placeholder="Write a comment..."
                prop:value=move || comment.get()
                on:input=move |ev| comment.set(event_target_value(&ev))
            ></textarea>
        </section>
    }
}
