use super::*;

fn token_with_claims(claims: &serde_json::Value) -> String {
    let header = URL_SAFE_NO_PAD.encode(br#"{"alg":"HS256","typ":"JWT"}"#);
    let payload = URL_SAFE_NO_PAD.encode(claims.to_string());
    format!("{header}.{payload}.signature")
}

#[test]
fn decode_reads_user_id_and_role() {
    let token = token_with_claims(&serde_json::json!({ "user_id": 42, "role": "Teacher", "exp": 1_900_000_000 }));
    let claims = decode_claims(&token).unwrap();
    assert_eq!(claims.user_id, 42);
    assert_eq!(claims.role, Role::Teacher);
    assert_eq!(claims.username, None);
    assert_eq!(claims.exp, Some(1_900_000_000));
}

#[test]
fn decode_reads_optional_username() {
    let token = token_with_claims(&serde_json::json!({ "user_id": 7, "role": "User", "username": "ada" }));
    assert_eq!(decode_claims(&token).unwrap().username.as_deref(), Some("ada"));
}

#[test]
fn decode_tolerates_padded_payload() {
    let payload = base64::engine::general_purpose::URL_SAFE.encode(r#"{"user_id":1,"role":"Admin"}"#);
    let token = format!("h.{payload}.s");
    assert_eq!(decode_claims(&token).unwrap().role, Role::Admin);
}

#[test]
fn decode_does_not_check_expiry_or_signature() {
    let token = token_with_claims(&serde_json::json!({ "user_id": 3, "role": "User", "exp": 0 }));
    let tampered = format!("{}.garbage", token.rsplit_once('.').unwrap().0);
    assert_eq!(decode_claims(&tampered).unwrap().user_id, 3);
}

#[test]
fn decode_rejects_wrong_segment_count() {
    assert_eq!(decode_claims("only-one"), Err(TokenError::Malformed(1)));
    assert_eq!(decode_claims("a.b.c.d"), Err(TokenError::Malformed(4)));
}

#[test]
fn decode_rejects_bad_base64() {
    assert!(matches!(decode_claims("h.!!!.s"), Err(TokenError::Base64(_))));
}

#[test]
fn decode_rejects_missing_claims() {
    let token = token_with_claims(&serde_json::json!({ "role": "User" }));
    assert!(matches!(decode_claims(&token), Err(TokenError::Claims(_))));
}
