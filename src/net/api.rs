//! REST client for the auth endpoints.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR) and native tests: [`HttpAuthApi`] reports
//! [`ApiError::Unavailable`] since these endpoints are only reachable from the
//! browser. Stores depend on the [`AuthApi`] trait, not on this transport.
//!
//! ERROR HANDLING
//! ==============
//! Rejections carry the backend's `detail` message when one is present so the
//! login page can surface it unchanged. Nothing here retries.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{LoginRequest, RegisterRequest, TokenResponse};
#[cfg(any(test, feature = "hydrate"))]
use super::types::ErrorBody;
use crate::config::ClientConfig;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Transport(String),
    #[error("{detail} ({status})")]
    Rejected { status: u16, detail: String },
    #[error("unexpected response: {0}")]
    Decode(String),
    #[error("not available on server")]
    Unavailable,
}

/// Remote collaborator issuing bearer tokens.
#[allow(async_fn_in_trait)]
pub trait AuthApi {
    /// # Errors
    ///
    /// Returns [`ApiError`] when the request cannot be sent, is rejected, or
    /// the response body is not a token.
    async fn login(&self, request: &LoginRequest) -> Result<TokenResponse, ApiError>;

    /// # Errors
    ///
    /// Same conditions as [`AuthApi::login`].
    async fn register(&self, request: &RegisterRequest) -> Result<TokenResponse, ApiError>;
}

/// Build a [`ApiError::Rejected`] from a status code and raw response body.
#[cfg(any(test, feature = "hydrate"))]
fn rejection(status: u16, body: &str) -> ApiError {
    let detail = serde_json::from_str::<ErrorBody>(body)
        .map(|b| b.detail)
        .unwrap_or_else(|_| "request failed".to_owned());
    ApiError::Rejected { status, detail }
}

/// [`AuthApi`] over HTTP against the configured backend.
#[derive(Debug, Clone)]
pub struct HttpAuthApi {
    config: ClientConfig,
}

impl HttpAuthApi {
    #[must_use]
    pub fn new(config: ClientConfig) -> Self {
        Self { config }
    }

    #[cfg(feature = "hydrate")]
    async fn post_for_token<B: serde::Serialize>(&self, url: &str, body: &B) -> Result<TokenResponse, ApiError> {
        let resp = gloo_net::http::Request::post(url)
            .json(body)
            .map_err(|e| ApiError::Transport(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        if !resp.ok() {
            let body = resp.text().await.unwrap_or_default();
            return Err(rejection(resp.status(), &body));
        }
        resp.json::<TokenResponse>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }
}

impl AuthApi for HttpAuthApi {
    async fn login(&self, request: &LoginRequest) -> Result<TokenResponse, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            self.post_for_token(&self.config.login_url(), request).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&self.config, request);
            Err(ApiError::Unavailable)
        }
    }

    async fn register(&self, request: &RegisterRequest) -> Result<TokenResponse, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            self.post_for_token(&self.config.register_url(), request).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&self.config, request);
            Err(ApiError::Unavailable)
        }
    }
}
