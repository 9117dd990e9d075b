use jsonwebtoken::{EncodingKey, Header, encode};
use std::time::{SystemTime, UNIX_EPOCH};
use uuid::Uuid;

use campus_auth_types::token::{JwtClaims, SESSION_TOKEN_EXP, validate_session_token};
use campus_domain::policy::{AccessPolicy, Actor, Capability, RecordScope};
use campus_domain::role::Role;

use crate::domain::repository::UserRepository;
use crate::domain::types::{MIN_PASSWORD_LEN, User, validate_email};
use crate::error::PortalError;

fn now_secs() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("system clock before UNIX epoch")
        .as_secs()
}

/// Issue a session token for an account. Returns the token and its expiry
/// (unix seconds).
pub fn issue_session_token(user: &User, secret: &str) -> Result<(String, u64), PortalError> {
    let exp = now_secs() + SESSION_TOKEN_EXP;
    let claims = JwtClaims {
        sub: user.id.to_string(),
        email: user.email.clone(),
        role: user.role,
        exp,
    };
    let token = encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .map_err(|e| PortalError::Internal(e.into()))?;
    Ok((token, exp))
}

/// Resolve a bearer token into an [`Actor`] from its claims alone, without a
/// store round trip. Record routes gate on this; `/auth/me` goes further and
/// loads the account.
pub fn authenticate(token: &str, secret: &str) -> Result<Actor, PortalError> {
    let info = validate_session_token(token, secret).map_err(|_| PortalError::InvalidToken)?;
    Ok(Actor {
        user_id: info.user_id,
        role: info.role,
    })
}

/// Consult the installed access policy before a record operation. A denial
/// surfaces as 403.
pub fn authorize(
    policy: &dyn AccessPolicy,
    actor: &Actor,
    capability: Capability,
    scope: &RecordScope,
) -> Result<(), PortalError> {
    if policy.allows(actor, capability, scope) {
        Ok(())
    } else {
        Err(PortalError::Forbidden)
    }
}

// ── SignUp ───────────────────────────────────────────────────────────────────

pub struct SignUpInput {
    pub email: String,
    pub password: String,
    pub full_name: String,
    pub role: Role,
    pub department: Option<String>,
}

/// A fresh session: the account plus a signed token.
#[derive(Debug)]
pub struct SessionOutput {
    pub user: User,
    pub token: String,
    pub token_exp: u64,
}

pub struct SignUpUseCase<U: UserRepository> {
    pub users: U,
    pub jwt_secret: String,
}

impl<U: UserRepository> SignUpUseCase<U> {
    pub async fn execute(&self, input: SignUpInput) -> Result<SessionOutput, PortalError> {
        if input.full_name.trim().is_empty() {
            return Err(PortalError::MissingFields);
        }
        if !validate_email(&input.email) {
            return Err(PortalError::InvalidEmail);
        }
        if input.password.len() < MIN_PASSWORD_LEN {
            return Err(PortalError::PasswordTooShort);
        }

        // Emails are stored lowercased so lookups are case-insensitive.
        let email = input.email.to_lowercase();
        if self.users.find_by_email(&email).await?.is_some() {
            return Err(PortalError::EmailTaken);
        }

        let password_hash = bcrypt::hash(&input.password, bcrypt::DEFAULT_COST)
            .map_err(|e| PortalError::Internal(e.into()))?;

        let now = chrono::Utc::now();
        let user = User {
            id: Uuid::now_v7(),
            email,
            password_hash,
            full_name: input.full_name,
            role: input.role,
            department: input.department,
            created_at: now,
            updated_at: now,
        };
        self.users.create(&user).await?;

        let (token, token_exp) = issue_session_token(&user, &self.jwt_secret)?;
        Ok(SessionOutput {
            user,
            token,
            token_exp,
        })
    }
}

// ── SignIn ───────────────────────────────────────────────────────────────────

pub struct SignInInput {
    pub email: String,
    pub password: String,
}

pub struct SignInUseCase<U: UserRepository> {
    pub users: U,
    pub jwt_secret: String,
}

impl<U: UserRepository> SignInUseCase<U> {
    pub async fn execute(&self, input: SignInInput) -> Result<SessionOutput, PortalError> {
        let email = input.email.to_lowercase();

        // Unknown email and wrong password collapse into the same error so
        // the response does not leak which addresses are registered.
        let user = self
            .users
            .find_by_email(&email)
            .await?
            .ok_or(PortalError::InvalidCredentials)?;

        let password_matches = bcrypt::verify(&input.password, &user.password_hash)
            .map_err(|e| PortalError::Internal(e.into()))?;
        if !password_matches {
            return Err(PortalError::InvalidCredentials);
        }

        let (token, token_exp) = issue_session_token(&user, &self.jwt_secret)?;
        Ok(SessionOutput {
            user,
            token,
            token_exp,
        })
    }
}

// ── ResolveSession ───────────────────────────────────────────────────────────

pub struct ResolveSessionUseCase<U: UserRepository> {
    pub users: U,
    pub jwt_secret: String,
}

impl<U: UserRepository> ResolveSessionUseCase<U> {
    /// Load the account behind a token. A valid signature over a vanished
    /// account still reads as a stale credential.
    pub async fn execute(&self, token: &str) -> Result<User, PortalError> {
        let info =
            validate_session_token(token, &self.jwt_secret).map_err(|_| PortalError::InvalidToken)?;

        self.users
            .find_by_id(info.user_id)
            .await?
            .ok_or(PortalError::InvalidToken)
    }
}
