//! Login and registration page for `/login`.
//!
//! SYSTEM CONTEXT
//! ==============
//! The only route the navigation guard lets through without a session. On
//! success the session is established in [`AuthState`] and the user lands on
//! their role's dashboard.
//!
//! ERROR HANDLING
//! ==============
//! Remote and decode failures are shown inline unchanged; nothing retries.
//! A page-level busy flag keeps a second submit from firing while one is in
//! flight.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::config::ClientConfig;
use crate::net::api::HttpAuthApi;
use crate::net::types::Role;
use crate::state::auth::AuthState;
#[cfg(any(test, feature = "hydrate"))]
use crate::state::auth::{AuthError, Session};
#[cfg(feature = "hydrate")]
use crate::util::storage::BrowserStorage;
#[cfg(any(test, feature = "hydrate"))]
use crate::util::storage::KeyValueStore;

pub(crate) const MIN_PASSWORD_LEN: usize = 6;

pub(crate) fn validate_login_input(identifier: &str, password: &str) -> Result<(String, String), &'static str> {
    let identifier = identifier.trim();
    if identifier.is_empty() || password.is_empty() {
        return Err("Enter your username and password.");
    }
    Ok((identifier.to_owned(), password.to_owned()))
}

pub(crate) fn validate_register_input(
    username: &str,
    password: &str,
    role: &str,
) -> Result<(String, String, Role), &'static str> {
    let username = username.trim();
    if username.is_empty() {
        return Err("Choose a username.");
    }
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err("Passwords need at least 6 characters.");
    }
    let role = Role::parse(role).ok_or("Choose an account type.")?;
    Ok((username.to_owned(), password.to_owned(), role))
}

/// Establish a sign-in result in `auth`, returning the role whose dashboard to
/// open or the message to show.
///
/// A disposed `auth` signal (the page was left mid-request) counts as failure.
#[cfg(any(test, feature = "hydrate"))]
fn apply_sign_in(
    result: Result<Session, AuthError>,
    auth: RwSignal<AuthState>,
    store: &impl KeyValueStore,
) -> Result<Role, String> {
    let session = result.map_err(|e| format!("Sign-in failed: {e}"))?;
    let role = session.user.role;
    match auth.try_update(|a| a.establish(session, store)) {
        Some(Ok(())) => Ok(role),
        Some(Err(e)) => Err(format!("Sign-in failed: {e}")),
        None => Err("Sign-in was interrupted. Please try again.".to_owned()),
    }
}

#[cfg(feature = "hydrate")]
fn finish_sign_in(
    result: Result<Session, AuthError>,
    auth: RwSignal<AuthState>,
    info: RwSignal<String>,
    signed_in_as: RwSignal<Option<Role>>,
) {
    match apply_sign_in(result, auth, &BrowserStorage) {
        Ok(role) => {
            info.try_set(String::new());
            signed_in_as.try_set(Some(role));
        }
        Err(msg) => {
            info.try_set(msg);
        }
    }
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let api = HttpAuthApi::new(expect_context::<ClientConfig>());
    let navigate = use_navigate();

    let identifier = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let new_username = RwSignal::new(String::new());
    let new_password = RwSignal::new(String::new());
    let new_role = RwSignal::new(Role::User.as_str().to_owned());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);
    let signed_in_as = RwSignal::new(None::<Role>);

    Effect::new(move || {
        if let Some(role) = signed_in_as.get() {
            signed_in_as.set(None);
            navigate(role.dashboard_route().path(), NavigateOptions::default());
        }
    });

    let login_api = api.clone();
    let on_login = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let (identifier_value, password_value) = match validate_login_input(&identifier.get(), &password.get()) {
            Ok(values) => values,
            Err(msg) => {
                info.set(msg.to_owned());
                return;
            }
        };
        busy.set(true);
        info.set("Signing in...".to_owned());

        #[cfg(feature = "hydrate")]
        {
            let api = login_api.clone();
            leptos::task::spawn_local(async move {
                let result = crate::state::auth::login(&api, &identifier_value, &password_value).await;
                finish_sign_in(result, auth, info, signed_in_as);
                busy.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&login_api, identifier_value, password_value, auth);
        }
    };

    let on_register = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let (username_value, password_value, role) =
            match validate_register_input(&new_username.get(), &new_password.get(), &new_role.get()) {
                Ok(values) => values,
                Err(msg) => {
                    info.set(msg.to_owned());
                    return;
                }
            };
        busy.set(true);
        info.set("Creating account...".to_owned());

        #[cfg(feature = "hydrate")]
        {
            let api = api.clone();
            leptos::task::spawn_local(async move {
                let result = crate::state::auth::register(&api, &username_value, &password_value, Some(role)).await;
                finish_sign_in(result, auth, info, signed_in_as);
                busy.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&api, username_value, password_value, role, auth);
        }
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h2>"Sign in"</h2>
                <form class="login-form" on:submit=on_login>
                    <input
                        class="login-input"
                        type="text"
                        placeholder="Username"
                        prop:value=move || identifier.get()
                        on:input=move |ev| identifier.set(event_target_value(&ev))
                    />
                    <input
                        class="login-input"
                        type="password"
                        placeholder="Password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <button class="login-button" type="submit" disabled=move || busy.get()>
                        "Sign in"
                    </button>
                </form>
                <div class="login-divider"></div>
                <h2>"Create an account"</h2>
                <form class="login-form" on:submit=on_register>
                    <input
                        class="login-input"
                        type="text"
                        placeholder="Username"
                        prop:value=move || new_username.get()
                        on:input=move |ev| new_username.set(event_target_value(&ev))
                    />
                    <input
                        class="login-input"
                        type="password"
                        placeholder="Password (min. 6 characters)"
                        prop:value=move || new_password.get()
                        on:input=move |ev| new_password.set(event_target_value(&ev))
                    />
                    <select
                        class="login-input"
                        prop:value=move || new_role.get()
                        on:change=move |ev| new_role.set(event_target_value(&ev))
                    >
                        <option value=Role::User.as_str()>"Learner"</option>
                        <option value=Role::Teacher.as_str()>"Teacher"</option>
                    </select>
                    <button class="login-button" type="submit" disabled=move || busy.get()>
                        "Register"
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="login-message">{move || info.get()}</p>
                </Show>
            </div>
        </div>
    }
}
