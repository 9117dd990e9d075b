use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use campus_auth_types::identity::BearerToken;
use campus_domain::attendance::{AttendanceStatus, AttendanceSummary};
use campus_domain::policy::{Capability, RecordScope};

use crate::domain::types::AttendanceRecord;
use crate::error::PortalError;
use crate::state::AppState;
use crate::usecase::auth::{authenticate, authorize};
use crate::usecase::attendance::{
    ListAttendanceUseCase, RecordAttendanceInput, RecordAttendanceUseCase, UpdateAttendanceUseCase,
};

#[derive(Serialize)]
pub struct AttendanceRecordResponse {
    pub id: Uuid,
    pub student_id: Uuid,
    pub course_id: Uuid,
    pub date: NaiveDate,
    pub status: AttendanceStatus,
    #[serde(serialize_with = "campus_core::serde::to_rfc3339_ms")]
    pub created_at: chrono::DateTime<chrono::Utc>,
}

impl From<AttendanceRecord> for AttendanceRecordResponse {
    fn from(record: AttendanceRecord) -> Self {
        Self {
            id: record.id,
            student_id: record.student_id,
            course_id: record.course_id,
            date: record.date,
            status: record.status,
            created_at: record.created_at,
        }
    }
}

// ── GET /attendance ──────────────────────────────────────────────────────────

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct ListAttendanceQuery {
    pub student_id: Option<Uuid>,
    pub course_id: Option<Uuid>,
}

#[derive(Serialize)]
pub struct AttendanceSummaryResponse {
    pub present_count: u64,
    pub absent_count: u64,
    pub late_count: u64,
    pub total_records: u64,
    pub attendance_percentage: f64,
}

impl From<AttendanceSummary> for AttendanceSummaryResponse {
    fn from(summary: AttendanceSummary) -> Self {
        Self {
            present_count: summary.present,
            absent_count: summary.absent,
            late_count: summary.late,
            total_records: summary.total(),
            attendance_percentage: summary.rate(),
        }
    }
}

#[derive(Serialize)]
pub struct AttendanceListResponse {
    pub data: Vec<AttendanceRecordResponse>,
    pub summary: AttendanceSummaryResponse,
}

pub async fn list_attendance(
    BearerToken(token): BearerToken,
    State(state): State<AppState>,
    Query(query): Query<ListAttendanceQuery>,
) -> Result<Json<AttendanceListResponse>, PortalError> {
    let actor = authenticate(&token, &state.jwt_secret)?;
    let scope = RecordScope {
        student_id: query.student_id,
        course_id: query.course_id,
        ..Default::default()
    };
    authorize(state.policy.as_ref(), &actor, Capability::ReadAttendance, &scope)?;

    let usecase = ListAttendanceUseCase {
        attendance: state.attendance_repo(),
    };
    let listing = usecase.execute(query.student_id, query.course_id).await?;

    Ok(Json(AttendanceListResponse {
        data: listing.records.into_iter().map(Into::into).collect(),
        summary: listing.summary.into(),
    }))
}

// ── POST /attendance ─────────────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct RecordAttendanceRequest {
    pub student_id: Uuid,
    pub course_id: Uuid,
    pub date: NaiveDate,
    pub status: String,
}

pub async fn record_attendance(
    BearerToken(token): BearerToken,
    State(state): State<AppState>,
    Json(body): Json<RecordAttendanceRequest>,
) -> Result<impl IntoResponse, PortalError> {
    let actor = authenticate(&token, &state.jwt_secret)?;
    let status = AttendanceStatus::from_str(&body.status).ok_or(PortalError::InvalidStatus)?;
    let scope = RecordScope {
        student_id: Some(body.student_id),
        course_id: Some(body.course_id),
        ..Default::default()
    };
    authorize(state.policy.as_ref(), &actor, Capability::WriteAttendance, &scope)?;

    let usecase = RecordAttendanceUseCase {
        attendance: state.attendance_repo(),
    };
    let record = usecase
        .execute(RecordAttendanceInput {
            student_id: body.student_id,
            course_id: body.course_id,
            date: body.date,
            status,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(AttendanceRecordResponse::from(record))))
}

// ── PATCH /attendance/{id} ───────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct UpdateAttendanceRequest {
    pub status: String,
}

pub async fn update_attendance(
    BearerToken(token): BearerToken,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(body): Json<UpdateAttendanceRequest>,
) -> Result<Json<AttendanceRecordResponse>, PortalError> {
    let actor = authenticate(&token, &state.jwt_secret)?;
    let status = AttendanceStatus::from_str(&body.status).ok_or(PortalError::InvalidStatus)?;
    // The record id alone does not tell us the student or course; the scope
    // carries only what the request states.
    authorize(
        state.policy.as_ref(),
        &actor,
        Capability::WriteAttendance,
        &RecordScope::default(),
    )?;

    let usecase = UpdateAttendanceUseCase {
        attendance: state.attendance_repo(),
    };
    let record = usecase.execute(id, status).await?;
    Ok(Json(AttendanceRecordResponse::from(record)))
}
