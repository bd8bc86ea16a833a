//! Top bar with the platform title, navigation links, and sign-in state.
//!
//! SYSTEM CONTEXT
//! ==============
//! Rendered on every route. Logging out only clears the session; the
//! navigation guard then performs the redirect to `/login`.

use leptos::prelude::*;

use crate::routes::RouteName;
use crate::state::auth::AuthState;
use crate::util::storage::BrowserStorage;

#[component]
pub fn SiteHeader() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();

    let signed_in = move || auth.get().is_authenticated();
    let dashboard_href = move || {
        auth.get()
            .user()
            .map_or(RouteName::UserDashboard, |u| u.role.dashboard_route())
            .path()
    };
    let can_author = move || auth.get().user().is_some_and(|u| u.role.can_author());
    let display_name = move || auth.get().user().map(|u| u.username.clone()).unwrap_or_default();

    let on_logout = move |_| auth.update(|a| a.logout(&BrowserStorage));

    view! {
        <header class="site-header">
            <h1>
                <a href=RouteName::Home.path()>"Lernplattform"</a>
            </h1>
            <nav class="nav-links">
                <Show
                    when=signed_in
                    fallback=|| view! { <a href=RouteName::LoginRegister.path()>"Sign in"</a> }
                >
                    <a href=dashboard_href>"Dashboard"</a>
                    <Show when=can_author>
                        <a href=RouteName::CourseEditor.path()>"Editor"</a>
                    </Show>
                    <a href=RouteName::Profile.path()>"Profile"</a>
                    <span class="site-header__user">{display_name}</span>
                    <button class="btn site-header__logout" on:click=on_logout>
                        "Log out"
                    </button>
                </Show>
            </nav>
        </header>
    }
}
