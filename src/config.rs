//! Client configuration resolved at build time.
//!
//! SYSTEM CONTEXT
//! ==============
//! The browser bundle has no process environment, so the API origin is baked
//! in from `LERN_API_BASE_URL` when the crate is compiled and then provided to
//! pages through Leptos context.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_API_BASE_URL: &str = "http://127.0.0.1:8000";

/// `localStorage` key holding the raw bearer token.
pub const TOKEN_KEY: &str = "token";
/// `localStorage` key holding the serialized session user.
pub const USER_KEY: &str = "user";
/// `localStorage` key holding the serialized course-editor draft.
pub const COURSE_EDITOR_KEY: &str = "courseEditor";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub api_base_url: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self { api_base_url: DEFAULT_API_BASE_URL.to_owned() }
    }
}

impl ClientConfig {
    /// Build config from the compile-time `LERN_API_BASE_URL` variable.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_raw(option_env!("LERN_API_BASE_URL"))
    }

    /// Build config from an optional raw base URL.
    ///
    /// Blank values fall back to [`DEFAULT_API_BASE_URL`]; trailing slashes
    /// are dropped so endpoint joins never produce `//`.
    #[must_use]
    pub fn from_raw(raw: Option<&str>) -> Self {
        let api_base_url = raw
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .unwrap_or(DEFAULT_API_BASE_URL)
            .trim_end_matches('/')
            .to_owned();
        Self { api_base_url }
    }

    #[must_use]
    pub fn login_url(&self) -> String {
        format!("{}/api/auth/login", self.api_base_url)
    }

    #[must_use]
    pub fn register_url(&self) -> String {
        format!("{}/api/auth/register", self.api_base_url)
    }
}
