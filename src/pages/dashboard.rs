//! Role dashboards.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each tier has its own route. This layer does not enforce roles: any
//! signed-in user can open any dashboard and the backend decides what data
//! they receive.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use leptos::prelude::*;

use crate::net::types::Role;
use crate::routes::RouteName;
use crate::state::auth::AuthState;

pub(crate) fn dashboard_title(tier: Role) -> &'static str {
    match tier {
        Role::User => "My learning",
        Role::Teacher => "Teaching",
        Role::Admin => "Administration",
    }
}

/// Hint shown when a user opens a dashboard for another tier.
pub(crate) fn tier_notice(tier: Role, own: Option<Role>) -> Option<String> {
    let own = own?;
    (own != tier).then(|| {
        format!("You are signed in as {}. This is the {} dashboard.", own.as_str(), tier.as_str())
    })
}

#[component]
fn DashboardView(tier: Role) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();

    let notice = move || tier_notice(tier, auth.get().user().map(|u| u.role));
    let name = move || auth.get().user().map(|u| u.username.clone()).unwrap_or_default();

    view! {
        <section class="dashboard">
            <h2>{dashboard_title(tier)}</h2>
            <p class="dashboard__welcome">"Signed in as " {name}</p>
            {move || notice().map(|text| view! { <p class="dashboard__notice">{text}</p> })}
            <ul class="dashboard__links">
                <li>
                    <a href=RouteName::Home.path()>"Course overview"</a>
                </li>
                <Show when=move || tier.can_author()>
                    <li>
                        <a href=RouteName::CourseEditor.path()>"Write a course"</a>
                    </li>
                </Show>
                <li>
                    <a href=RouteName::Profile.path()>"Profile"</a>
                </li>
            </ul>
        </section>
    }
}

#[component]
pub fn UserDashboardPage() -> impl IntoView {
    view! { <DashboardView tier=Role::User/> }
}

#[component]
pub fn TeacherDashboardPage() -> impl IntoView {
    view! { <DashboardView tier=Role::Teacher/> }
}

#[component]
pub fn AdminDashboardPage() -> impl IntoView {
    view! { <DashboardView tier=Role::Admin/> }
}
