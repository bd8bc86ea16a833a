//! Walkthrough overlay for the active route's tutorial.
//!
//! SYSTEM CONTEXT
//! ==============
//! Reads [`TutorialState`] from context. While running, the current step's
//! target element is marked with `data-tutorial-active` and scrolled into
//! view; highlighting is browser-only and a no-op during SSR.

#[cfg(test)]
#[path = "tutorial_overlay_test.rs"]
mod tutorial_overlay_test;

use leptos::prelude::*;

use crate::state::tutorial::TutorialState;

#[cfg(feature = "hydrate")]
const ACTIVE_ATTR: &str = "data-tutorial-active";

/// "Step 2 of 4" label; empty when there is no step to show.
pub(crate) fn progress_label(state: &TutorialState) -> String {
    if state.total_steps() == 0 {
        return String::new();
    }
    format!("Step {} of {}", state.current_step + 1, state.total_steps())
}

/// Selector to highlight, if the overlay is showing a step.
pub(crate) fn highlighted_selector(state: &TutorialState) -> Option<String> {
    if !state.running {
        return None;
    }
    state.current().map(|s| s.selector.clone())
}

#[cfg(feature = "hydrate")]
fn highlight(selector: Option<&str>) {
    let Some(doc) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    if let Ok(Some(previous)) = doc.query_selector(&format!("[{ACTIVE_ATTR}]")) {
        let _ = previous.remove_attribute(ACTIVE_ATTR);
    }
    let Some(selector) = selector else {
        return;
    };
    match doc.query_selector(selector) {
        Ok(Some(el)) => {
            let _ = el.set_attribute(ACTIVE_ATTR, "true");
            el.scroll_into_view();
        }
        _ => leptos::logging::warn!("tutorial target not found: {selector}"),
    }
}

#[component]
pub fn TutorialOverlay() -> impl IntoView {
    let tutorial = expect_context::<RwSignal<TutorialState>>();

    Effect::new(move || {
        let selector = highlighted_selector(&tutorial.get());
        #[cfg(feature = "hydrate")]
        highlight(selector.as_deref());
        #[cfg(not(feature = "hydrate"))]
        let _ = selector;
    });

    let visible = move || highlighted_selector(&tutorial.get()).is_some();
    let message = move || tutorial.get().current().map(|s| s.message.clone()).unwrap_or_default();
    let progress = move || progress_label(&tutorial.get());
    let on_last = move || tutorial.get().is_last_step();

    view! {
        <Show when=visible>
            <div class="tutorial-overlay" role="dialog" aria-live="polite">
                <p class="tutorial-overlay__progress">{progress}</p>
                <p class="tutorial-overlay__message">{message}</p>
                <div class="tutorial-overlay__actions">
                    <button class="btn" on:click=move |_| tutorial.update(TutorialState::dismiss)>
                        "Close"
                    </button>
                    <Show
                        when=move || !on_last()
                        fallback=move || {
                            view! {
                                <button
                                    class="btn btn--primary"
                                    on:click=move |_| tutorial.update(TutorialState::dismiss)
                                >
                                    "Finish"
                                </button>
                            }
                        }
                    >
                        <button class="btn btn--primary" on:click=move |_| tutorial.update(TutorialState::next_step)>
                            "Next"
                        </button>
                    </Show>
                </div>
            </div>
        </Show>
    }
}
