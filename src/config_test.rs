use super::*;

#[test]
fn from_raw_none_uses_default() {
    let cfg = ClientConfig::from_raw(None);
    assert_eq!(cfg.api_base_url, DEFAULT_API_BASE_URL);
    assert_eq!(cfg, ClientConfig::default());
}

#[test]
fn from_raw_blank_uses_default() {
    assert_eq!(ClientConfig::from_raw(Some("   ")).api_base_url, DEFAULT_API_BASE_URL);
}

#[test]
fn from_raw_trims_trailing_slashes() {
    let cfg = ClientConfig::from_raw(Some("https://learn.example.com//"));
    assert_eq!(cfg.api_base_url, "https://learn.example.com");
}

#[test]
fn endpoint_urls_join_base() {
    let cfg = ClientConfig::from_raw(Some("https://learn.example.com/"));
    assert_eq!(cfg.login_url(), "https://learn.example.com/api/auth/login");
    assert_eq!(cfg.register_url(), "https://learn.example.com/api/auth/register");
}

#[test]
fn storage_keys_match_persisted_layout() {
    assert_eq!(TOKEN_KEY, "token");
    assert_eq!(USER_KEY, "user");
    assert_eq!(COURSE_EDITOR_KEY, "courseEditor");
}
