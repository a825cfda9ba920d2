use std::time::Duration;

use jsonwebtoken::{
    Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode,
    errors::ErrorKind,
};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::AuthError;

/// Claims carried by an Arogya session token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionClaims {
    /// User id.
    pub sub: String,
    pub email: String,
    /// Issued at, seconds since the epoch.
    pub iat: u64,
    /// Expiry, seconds since the epoch.
    pub exp: u64,
}

/// Issue an HS256 session token for a user.
pub fn issue_token(
    user_id: &str,
    email: &str,
    secret: &[u8],
    ttl: Duration,
) -> Result<String, AuthError> {
    let now = jiff::Timestamp::now().as_second() as u64;
    let claims = SessionClaims {
        sub: user_id.to_string(),
        email: email.to_string(),
        iat: now,
        exp: now + ttl.as_secs(),
    };

    let token = encode(
        &Header::new(Algorithm::HS256),
        &claims,
        &EncodingKey::from_secret(secret),
    )?;

    info!(user_id, "session token issued");

    Ok(token)
}

/// Validate a session token and return its claims.
///
/// Expiry is checked with zero leeway: a token is good until `exp` and not
/// a second longer. Garbled tokens, wrong-key signatures, and non-HS256
/// headers are all rejected.
pub fn validate_token(token: &str, secret: &[u8]) -> Result<SessionClaims, AuthError> {
    let mut validation = Validation::new(Algorithm::HS256);
    validation.validate_exp = true;
    validation.leeway = 0;

    let token_data =
        decode::<SessionClaims>(token, &DecodingKey::from_secret(secret), &validation).map_err(
            |e| match e.kind() {
                ErrorKind::ExpiredSignature => AuthError::TokenExpired,
                _ => AuthError::Jwt(e),
            },
        )?;

    Ok(token_data.claims)
}
