//! Profile pages for `/profile` (own) and `/profile/:userId` (any user).

#[cfg(test)]
#[path = "profile_test.rs"]
mod profile_test;

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::state::auth::{AuthState, SessionUser};
use crate::util::storage::BrowserStorage;

/// Which profile a route shows.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum ProfileTarget {
    Own,
    Other(String),
}

/// Resolve the `userId` param against the signed-in user.
pub(crate) fn profile_target(param: Option<&str>, own: Option<&SessionUser>) -> ProfileTarget {
    match (param.map(str::trim).filter(|p| !p.is_empty()), own) {
        (None, _) => ProfileTarget::Own,
        (Some(id), Some(user)) if id == user.id.to_string() => ProfileTarget::Own,
        (Some(id), _) => ProfileTarget::Other(id.to_owned()),
    }
}

#[component]
pub fn ProfilePage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let params = use_params_map();

    let target = move || profile_target(params.read().get("userId").as_deref(), auth.get().user());
    let heading = move || match target() {
        ProfileTarget::Own => "Your profile".to_owned(),
        ProfileTarget::Other(id) => format!("Profile of user {id}"),
    };
    let own_details = move || {
        let state = auth.get();
        let user = state.user()?.clone();
        (target() == ProfileTarget::Own).then_some(user)
    };

    view! {
        <section class="profile">
            <h2>{heading}</h2>
            {move || {
                own_details()
                    .map(|user| {
                        view! {
                            <dl class="profile__details">
                                <dt>"Username"</dt>
                                <dd>{user.username}</dd>
                                <dt>"Account type"</dt>
                                <dd>{user.role.as_str()}</dd>
                                <dt>"User id"</dt>
                                <dd>{user.id}</dd>
                            </dl>
                            <button class="btn" on:click=move |_| auth.update(|a| a.logout(&BrowserStorage))>
                                "Log out"
                            </button>
                        }
                    })
            }}
        </section>
    }
}
