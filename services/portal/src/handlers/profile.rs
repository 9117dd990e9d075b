use axum::{
    Json,
    extract::{Path, State},
};
use serde::Deserialize;
use uuid::Uuid;

use campus_auth_types::identity::BearerToken;
use campus_domain::policy::{Capability, RecordScope};

use crate::error::PortalError;
use crate::handlers::auth::UserResponse;
use crate::state::AppState;
use crate::usecase::auth::{authenticate, authorize};
use crate::usecase::profile::{GetProfileUseCase, UpdateProfileInput, UpdateProfileUseCase};

// ── GET /users/{user_id} ─────────────────────────────────────────────────────

pub async fn get_profile(
    BearerToken(token): BearerToken,
    State(state): State<AppState>,
    Path(user_id): Path<Uuid>,
) -> Result<Json<UserResponse>, PortalError> {
    let actor = authenticate(&token, &state.jwt_secret)?;
    let scope = RecordScope {
        user_id: Some(user_id),
        ..Default::default()
    };
    authorize(state.policy.as_ref(), &actor, Capability::ReadProfile, &scope)?;

    let usecase = GetProfileUseCase {
        users: state.user_repo(),
    };
    let user = usecase.execute(user_id).await?;
    Ok(Json(UserResponse::from(user)))
}

// ── PATCH /users/{user_id} ───────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct UpdateProfileRequest {
    pub full_name: Option<String>,
    pub department: Option<String>,
}

pub async fn update_profile(
    BearerToken(token): BearerToken,
    State(state): State<AppState>,
    Path(user_id): Path<Uuid>,
    Json(body): Json<UpdateProfileRequest>,
) -> Result<Json<UserResponse>, PortalError> {
    let actor = authenticate(&token, &state.jwt_secret)?;
    let scope = RecordScope {
        user_id: Some(user_id),
        ..Default::default()
    };
    authorize(state.policy.as_ref(), &actor, Capability::WriteProfile, &scope)?;

    let usecase = UpdateProfileUseCase {
        users: state.user_repo(),
    };
    let user = usecase
        .execute(
            user_id,
            UpdateProfileInput {
                full_name: body.full_name,
                department: body.department,
            },
        )
        .await?;
    Ok(Json(UserResponse::from(user)))
}
