//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Used by the navigation guard and user-aware components to coordinate login
//! redirects and identity-dependent rendering. The session is mirrored into
//! durable storage under the `token` and `user` keys.
//!
//! DESIGN
//! ======
//! Remote calls ([`login`], [`register`]) only produce a [`Session`]; applying
//! it ([`AuthState::establish`]) is synchronous, so the reactive signal is
//! never held across an await. In-flight calls are not de-duplicated here.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use serde::{Deserialize, Serialize};

use crate::config::{TOKEN_KEY, USER_KEY};
use crate::net::api::{ApiError, AuthApi};
use crate::net::types::{LoginRequest, RegisterRequest, Role};
use crate::util::storage::{KeyValueStore, StorageError, load_json, save_json};
use crate::util::token::{TokenError, decode_claims};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AuthError {
    #[error(transparent)]
    Api(#[from] ApiError),
    #[error("invalid token: {0}")]
    Token(#[from] TokenError),
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Identity persisted under the `user` key.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionUser {
    pub id: i64,
    pub role: Role,
    pub username: String,
}

/// Bearer token plus the identity decoded from it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Session {
    pub token: String,
    pub user: SessionUser,
}

/// Authentication state: the current session, if any, and whether the stored
/// session has been read yet.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthState {
    pub session: Option<Session>,
    pub loading: bool,
}

/// Build a session from a freshly issued token.
///
/// `fallback_username` is used when the token carries no `username` claim.
///
/// # Errors
///
/// Returns [`AuthError::Token`] when the claims cannot be decoded.
pub fn session_from_token(token: String, fallback_username: &str) -> Result<Session, AuthError> {
    let claims = decode_claims(&token)?;
    let username = claims.username.unwrap_or_else(|| fallback_username.to_owned());
    Ok(Session { token, user: SessionUser { id: claims.user_id, role: claims.role, username } })
}

/// Exchange credentials for a session.
///
/// # Errors
///
/// Propagates the remote failure unchanged, or a token decode failure.
pub async fn login(api: &impl AuthApi, identifier: &str, password: &str) -> Result<Session, AuthError> {
    let request = LoginRequest { identifier: identifier.to_owned(), password: password.to_owned() };
    let response = api
        .login(&request)
        .await
        .inspect_err(|e| leptos::logging::warn!("login failed: {e}"))?;
    session_from_token(response.access_token, identifier)
}

/// Create an account and return its session. `role` defaults to [`Role::User`].
///
/// # Errors
///
/// Propagates the remote failure unchanged, or a token decode failure.
pub async fn register(
    api: &impl AuthApi,
    username: &str,
    password: &str,
    role: Option<Role>,
) -> Result<Session, AuthError> {
    let request = RegisterRequest {
        username: username.to_owned(),
        password: password.to_owned(),
        role: role.unwrap_or_default(),
    };
    let response = api
        .register(&request)
        .await
        .inspect_err(|e| leptos::logging::warn!("registration failed: {e}"))?;
    let mut session = session_from_token(response.access_token, username)?;
    session.user.username = username.to_owned();
    Ok(session)
}

impl AuthState {
    /// State before the stored session has been read.
    #[must_use]
    pub fn pending() -> Self {
        Self { session: None, loading: true }
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.session.is_some()
    }

    #[must_use]
    pub fn user(&self) -> Option<&SessionUser> {
        self.session.as_ref().map(|s| &s.user)
    }

    #[must_use]
    pub fn bearer_token(&self) -> Option<&str> {
        self.session.as_ref().map(|s| s.token.as_str())
    }

    /// Persist `session` and make it current.
    ///
    /// Storage is written first. If either write fails, any partial write is
    /// removed and the previous session, if any, is written back. Memory only
    /// keeps the previous session when that write-back succeeds; otherwise it
    /// is signed out so it matches storage.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::Storage`] if the store rejects a write.
    pub fn establish(&mut self, session: Session, store: &impl KeyValueStore) -> Result<(), AuthError> {
        let persisted = store
            .set(TOKEN_KEY, &session.token)
            .and_then(|()| save_json(store, USER_KEY, &session.user));
        if let Err(e) = persisted {
            leptos::logging::warn!("could not persist session: {e}");
            store.remove(TOKEN_KEY);
            store.remove(USER_KEY);
            if let Some(previous) = &self.session {
                let restored = store
                    .set(TOKEN_KEY, &previous.token)
                    .and_then(|()| save_json(store, USER_KEY, &previous.user));
                if let Err(restore_err) = restored {
                    leptos::logging::warn!("could not restore previous session: {restore_err}");
                    self.logout(store);
                }
            }
            return Err(e.into());
        }
        leptos::logging::log!("session established for user {}", session.user.id);
        self.session = Some(session);
        self.loading = false;
        Ok(())
    }

    /// Log in and make the resulting session current.
    ///
    /// # Errors
    ///
    /// On any failure the prior session is left untouched.
    pub async fn login(
        &mut self,
        api: &impl AuthApi,
        store: &impl KeyValueStore,
        identifier: &str,
        password: &str,
    ) -> Result<(), AuthError> {
        let session = login(api, identifier, password).await?;
        self.establish(session, store)
    }

    /// Register and make the resulting session current.
    ///
    /// # Errors
    ///
    /// On any failure the prior session is left untouched.
    pub async fn register(
        &mut self,
        api: &impl AuthApi,
        store: &impl KeyValueStore,
        username: &str,
        password: &str,
        role: Option<Role>,
    ) -> Result<(), AuthError> {
        let session = register(api, username, password, role).await?;
        self.establish(session, store)
    }

    /// Clear the session and its persisted copy. No remote call.
    pub fn logout(&mut self, store: &impl KeyValueStore) {
        self.session = None;
        store.remove(TOKEN_KEY);
        store.remove(USER_KEY);
        leptos::logging::log!("session cleared");
    }

    /// Restore a persisted session. Token expiry is not checked.
    ///
    /// Both a non-empty `token` and a parsable `user` record must be present;
    /// otherwise the session stays empty.
    pub fn load_stored_auth(&mut self, store: &impl KeyValueStore) {
        self.loading = false;
        let Some(token) = store.get(TOKEN_KEY).filter(|t| !t.is_empty()) else {
            return;
        };
        if store.get(USER_KEY).is_none() {
            return;
        }
        match load_json::<SessionUser>(store, USER_KEY) {
            Some(user) => self.session = Some(Session { token, user }),
            None => leptos::logging::warn!("ignoring unreadable stored user record"),
        }
    }
}
