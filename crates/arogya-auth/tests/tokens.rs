//! Session token round trips and rejection paths.

use std::time::Duration;

use arogya_auth::{AuthError, issue_token, validate_token};
use jsonwebtoken::{Algorithm, EncodingKey, Header, encode};
use serde::Serialize;

const SECRET: &[u8] = b"test-secret-not-for-production";

#[test]
fn issued_tokens_validate() {
    let token = issue_token("user_42", "asha@example.com", SECRET, Duration::from_secs(3600))
        .expect("issue");

    let claims = validate_token(&token, SECRET).expect("validate");
    assert_eq!(claims.sub, "user_42");
    assert_eq!(claims.email, "asha@example.com");
    assert_eq!(claims.exp, claims.iat + 3600);
}

#[test]
fn wrong_secret_is_rejected() {
    let token =
        issue_token("user_42", "asha@example.com", SECRET, Duration::from_secs(3600)).expect("issue");

    let err = validate_token(&token, b"a-different-secret").unwrap_err();
    assert!(matches!(err, AuthError::Jwt(_)), "got: {err}");
}

#[test]
fn garbled_tokens_are_rejected() {
    assert!(validate_token("not.a.token", SECRET).is_err());
    assert!(validate_token("", SECRET).is_err());
}

#[derive(Serialize)]
struct StaleClaims {
    sub: String,
    email: String,
    iat: u64,
    exp: u64,
}

#[test]
fn expired_tokens_are_rejected() {
    let now = jiff::Timestamp::now().as_second() as u64;
    let stale = StaleClaims {
        sub: "user_42".to_string(),
        email: "asha@example.com".to_string(),
        iat: now - 7200,
        exp: now - 3600,
    };
    let token = encode(
        &Header::new(Algorithm::HS256),
        &stale,
        &EncodingKey::from_secret(SECRET),
    )
    .expect("encode");

    let err = validate_token(&token, SECRET).unwrap_err();
    assert!(matches!(err, AuthError::TokenExpired), "got: {err}");
}
