//! Landing page.

use leptos::prelude::*;

use crate::state::auth::AuthState;

#[component]
pub fn HomePage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();

    let greeting = move || {
        auth.get()
            .user()
            .map_or_else(|| "Welcome!".to_owned(), |u| format!("Welcome back, {}!", u.username))
    };

    view! {
        <section class="home">
            <h2 class="home__greeting">{greeting}</h2>
            <p>
                "Pick up a course from your dashboard, or use the tutorial link below to get a tour of this page."
            </p>
        </section>
    }
}
