use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use campus_auth_types::identity::BearerToken;
use campus_domain::role::Role;

use crate::domain::types::User;
use crate::error::PortalError;
use crate::state::AppState;
use crate::usecase::auth::{
    ResolveSessionUseCase, SignInInput, SignInUseCase, SignUpInput, SignUpUseCase,
};

/// Account fields exposed over the wire. The password hash is deliberately
/// absent.
#[derive(Serialize)]
pub struct UserResponse {
    pub id: Uuid,
    pub email: String,
    pub full_name: String,
    pub role: Role,
    pub department: Option<String>,
    #[serde(serialize_with = "campus_core::serde::to_rfc3339_ms")]
    pub created_at: chrono::DateTime<chrono::Utc>,
    #[serde(serialize_with = "campus_core::serde::to_rfc3339_ms")]
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            email: user.email,
            full_name: user.full_name,
            role: user.role,
            department: user.department,
            created_at: user.created_at,
            updated_at: user.updated_at,
        }
    }
}

#[derive(Serialize)]
pub struct SessionResponse {
    pub user: UserResponse,
    pub token: String,
}

// ── POST /auth/signup ────────────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct SignUpRequest {
    pub email: String,
    pub password: String,
    pub full_name: String,
    pub role: String,
    pub department: Option<String>,
}

pub async fn sign_up(
    State(state): State<AppState>,
    Json(body): Json<SignUpRequest>,
) -> Result<impl IntoResponse, PortalError> {
    let role = Role::from_str(&body.role).ok_or(PortalError::InvalidRole)?;

    let usecase = SignUpUseCase {
        users: state.user_repo(),
        jwt_secret: state.jwt_secret.clone(),
    };
    let out = usecase
        .execute(SignUpInput {
            email: body.email,
            password: body.password,
            full_name: body.full_name,
            role,
            department: body.department,
        })
        .await?;

    let response = SessionResponse {
        user: out.user.into(),
        token: out.token,
    };
    Ok((StatusCode::CREATED, Json(response)))
}

// ── POST /auth/signin ────────────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct SignInRequest {
    pub email: String,
    pub password: String,
}

pub async fn sign_in(
    State(state): State<AppState>,
    Json(body): Json<SignInRequest>,
) -> Result<Json<SessionResponse>, PortalError> {
    let usecase = SignInUseCase {
        users: state.user_repo(),
        jwt_secret: state.jwt_secret.clone(),
    };
    let out = usecase
        .execute(SignInInput {
            email: body.email,
            password: body.password,
        })
        .await?;

    Ok(Json(SessionResponse {
        user: out.user.into(),
        token: out.token,
    }))
}

// ── GET /auth/me ─────────────────────────────────────────────────────────────

pub async fn me(
    BearerToken(token): BearerToken,
    State(state): State<AppState>,
) -> Result<Json<UserResponse>, PortalError> {
    let usecase = ResolveSessionUseCase {
        users: state.user_repo(),
        jwt_secret: state.jwt_secret.clone(),
    };
    let user = usecase.execute(&token).await?;
    Ok(Json(UserResponse::from(user)))
}

// ── POST /auth/signout ───────────────────────────────────────────────────────

#[derive(Serialize)]
pub struct SignOutResponse {
    pub signed_out: bool,
}

/// Stateless acknowledgment. Tokens carry their own expiry and no
/// server-side session set exists, so invalidation is the caller discarding
/// the token.
pub async fn sign_out() -> Json<SignOutResponse> {
    Json(SignOutResponse { signed_out: true })
}
