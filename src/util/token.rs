//! Bearer-token claim decoding.
//!
//! The backend issues compact three-segment JWTs. The client only reads the
//! middle (claims) segment to learn who signed in; nothing here checks the
//! signature or the expiry. Decoded claims are an untrusted display hint and
//! must never gate anything the backend does not re-validate.

#[cfg(test)]
#[path = "token_test.rs"]
mod token_test;

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use serde::Deserialize;

use crate::net::types::Role;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TokenError {
    #[error("token must have 3 segments, found {0}")]
    Malformed(usize),
    #[error("claims segment is not base64url: {0}")]
    Base64(String),
    #[error("claims segment is not valid JSON claims: {0}")]
    Claims(String),
}

/// Claims read from an unverified token.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct UntrustedClaims {
    pub user_id: i64,
    pub role: Role,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub exp: Option<i64>,
}

/// Decode the claims segment of `token` without verifying it.
///
/// # Errors
///
/// Returns [`TokenError`] if the token is not three segments, the middle
/// segment is not base64url, or it lacks `user_id`/`role`.
pub fn decode_claims(token: &str) -> Result<UntrustedClaims, TokenError> {
    let segments: Vec<&str> = token.split('.').collect();
    let [_, payload, _] = segments.as_slice() else {
        return Err(TokenError::Malformed(segments.len()));
    };

    let bytes = URL_SAFE_NO_PAD
        .decode(payload.trim_end_matches('='))
        .map_err(|e| TokenError::Base64(e.to_string()))?;
    serde_json::from_slice(&bytes).map_err(|e| TokenError::Claims(e.to_string()))
}
