use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use campus_auth_types::identity::BearerToken;
use campus_domain::policy::{Capability, RecordScope};

use crate::domain::types::Grade;
use crate::error::PortalError;
use crate::state::AppState;
use crate::usecase::auth::{authenticate, authorize};
use crate::usecase::grade::{
    ListGradesUseCase, RecordGradeInput, RecordGradeUseCase, UpdateGradeInput, UpdateGradeUseCase,
};

#[derive(Serialize)]
pub struct GradeResponse {
    pub id: Uuid,
    pub student_id: Uuid,
    pub course_id: Uuid,
    pub marks: f64,
    pub total_marks: f64,
    pub percentage: f64,
    pub grade: String,
    #[serde(serialize_with = "campus_core::serde::to_rfc3339_ms")]
    pub created_at: chrono::DateTime<chrono::Utc>,
    #[serde(serialize_with = "campus_core::serde::to_rfc3339_ms")]
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

impl From<Grade> for GradeResponse {
    fn from(grade: Grade) -> Self {
        Self {
            id: grade.id,
            student_id: grade.student_id,
            course_id: grade.course_id,
            marks: grade.marks,
            total_marks: grade.total_marks,
            percentage: grade.percentage,
            grade: grade.grade,
            created_at: grade.created_at,
            updated_at: grade.updated_at,
        }
    }
}

// ── GET /grades ──────────────────────────────────────────────────────────────

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct ListGradesQuery {
    pub student_id: Option<Uuid>,
    pub course_id: Option<Uuid>,
}

#[derive(Serialize)]
pub struct GradeListResponse {
    pub data: Vec<GradeResponse>,
}

pub async fn list_grades(
    BearerToken(token): BearerToken,
    State(state): State<AppState>,
    Query(query): Query<ListGradesQuery>,
) -> Result<Json<GradeListResponse>, PortalError> {
    let actor = authenticate(&token, &state.jwt_secret)?;
    let scope = RecordScope {
        student_id: query.student_id,
        course_id: query.course_id,
        ..Default::default()
    };
    authorize(state.policy.as_ref(), &actor, Capability::ReadGrades, &scope)?;

    let usecase = ListGradesUseCase {
        grades: state.grade_repo(),
    };
    let grades = usecase.execute(query.student_id, query.course_id).await?;

    Ok(Json(GradeListResponse {
        data: grades.into_iter().map(Into::into).collect(),
    }))
}

// ── POST /grades ─────────────────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct RecordGradeRequest {
    pub student_id: Uuid,
    pub course_id: Uuid,
    pub marks: f64,
    pub total_marks: f64,
}

pub async fn record_grade(
    BearerToken(token): BearerToken,
    State(state): State<AppState>,
    Json(body): Json<RecordGradeRequest>,
) -> Result<impl IntoResponse, PortalError> {
    let actor = authenticate(&token, &state.jwt_secret)?;
    let scope = RecordScope {
        student_id: Some(body.student_id),
        course_id: Some(body.course_id),
        ..Default::default()
    };
    authorize(state.policy.as_ref(), &actor, Capability::WriteGrades, &scope)?;

    let usecase = RecordGradeUseCase {
        grades: state.grade_repo(),
    };
    let grade = usecase
        .execute(RecordGradeInput {
            student_id: body.student_id,
            course_id: body.course_id,
            marks: body.marks,
            total_marks: body.total_marks,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(GradeResponse::from(grade))))
}

// ── PATCH /grades/{id} ───────────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct UpdateGradeRequest {
    pub marks: Option<f64>,
    pub total_marks: Option<f64>,
}

pub async fn update_grade(
    BearerToken(token): BearerToken,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(body): Json<UpdateGradeRequest>,
) -> Result<Json<GradeResponse>, PortalError> {
    let actor = authenticate(&token, &state.jwt_secret)?;
    authorize(
        state.policy.as_ref(),
        &actor,
        Capability::WriteGrades,
        &RecordScope::default(),
    )?;

    let usecase = UpdateGradeUseCase {
        grades: state.grade_repo(),
    };
    let grade = usecase
        .execute(
            id,
            UpdateGradeInput {
                marks: body.marks,
                total_marks: body.total_marks,
            },
        )
        .await?;
    Ok(Json(GradeResponse::from(grade)))
}
