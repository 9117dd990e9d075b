//! Mock credential helpers for integration tests.
//!
//! Scoped portal routes validate bearer JWTs. These helpers mint tokens
//! signed with a test secret so no sign-in round trip is needed.

use jsonwebtoken::{EncodingKey, Header, encode};
use uuid::Uuid;

use campus_auth_types::token::JwtClaims;
use campus_domain::role::Role;

fn now_secs() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .expect("system clock before UNIX epoch")
        .as_secs()
}

/// Mint a session token valid for one hour.
pub fn mint_session_token(user_id: Uuid, email: &str, role: Role, secret: &str) -> String {
    mint_token_with_exp(user_id, email, role, secret, now_secs() + 3600)
}

/// Mint a token expired far enough in the past to defeat validation leeway.
pub fn mint_expired_token(user_id: Uuid, email: &str, role: Role, secret: &str) -> String {
    mint_token_with_exp(user_id, email, role, secret, 1_000_000)
}

/// Mint a token with an explicit expiration timestamp.
pub fn mint_token_with_exp(
    user_id: Uuid,
    email: &str,
    role: Role,
    secret: &str,
    exp: u64,
) -> String {
    let claims = JwtClaims {
        sub: user_id.to_string(),
        email: email.to_owned(),
        role,
        exp,
    };
    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .expect("encode test token")
}
