//! Page footer carrying the tutorial replay link.

use leptos::prelude::*;

use crate::state::tutorial::TutorialState;

#[component]
pub fn SiteFooter() -> impl IntoView {
    let tutorial = expect_context::<RwSignal<TutorialState>>();
    let has_tutorial = move || tutorial.get().total_steps() > 0;

    view! {
        <footer class="site-footer">
            <Show when=has_tutorial>
                <a
                    id="tutorial-footer"
                    href="#"
                    on:click=move |ev| {
                        ev.prevent_default();
                        tutorial.update(TutorialState::start_tutorial);
                    }
                >
                    "Show tutorial for this page"
                </a>
            </Show>
        </footer>
    }
}
