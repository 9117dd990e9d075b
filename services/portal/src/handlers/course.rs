use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use campus_auth_types::identity::BearerToken;
use campus_domain::policy::{Capability, RecordScope};

use crate::domain::types::Course;
use crate::error::PortalError;
use crate::state::AppState;
use crate::usecase::auth::{authenticate, authorize};
use crate::usecase::course::{CreateCourseInput, CreateCourseUseCase, ListCoursesUseCase};

#[derive(Serialize)]
pub struct CourseResponse {
    pub id: Uuid,
    pub code: String,
    pub name: String,
    pub description: Option<String>,
    pub teacher_id: Uuid,
    pub semester: String,
    #[serde(serialize_with = "campus_core::serde::to_rfc3339_ms")]
    pub created_at: chrono::DateTime<chrono::Utc>,
}

impl From<Course> for CourseResponse {
    fn from(course: Course) -> Self {
        Self {
            id: course.id,
            code: course.code,
            name: course.name,
            description: course.description,
            teacher_id: course.teacher_id,
            semester: course.semester,
            created_at: course.created_at,
        }
    }
}

// ── GET /courses ─────────────────────────────────────────────────────────────

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct ListCoursesQuery {
    pub teacher_id: Option<Uuid>,
}

#[derive(Serialize)]
pub struct CourseListResponse {
    pub data: Vec<CourseResponse>,
}

pub async fn list_courses(
    BearerToken(token): BearerToken,
    State(state): State<AppState>,
    Query(query): Query<ListCoursesQuery>,
) -> Result<Json<CourseListResponse>, PortalError> {
    let actor = authenticate(&token, &state.jwt_secret)?;
    let scope = RecordScope {
        teacher_id: query.teacher_id,
        ..Default::default()
    };
    authorize(state.policy.as_ref(), &actor, Capability::ReadCourses, &scope)?;

    let usecase = ListCoursesUseCase {
        courses: state.course_repo(),
    };
    let courses = usecase.execute(query.teacher_id).await?;

    Ok(Json(CourseListResponse {
        data: courses.into_iter().map(Into::into).collect(),
    }))
}

// ── POST /courses ────────────────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct CreateCourseRequest {
    pub code: String,
    pub name: String,
    pub description: Option<String>,
    pub teacher_id: Uuid,
    pub semester: String,
}

pub async fn create_course(
    BearerToken(token): BearerToken,
    State(state): State<AppState>,
    Json(body): Json<CreateCourseRequest>,
) -> Result<impl IntoResponse, PortalError> {
    let actor = authenticate(&token, &state.jwt_secret)?;
    let scope = RecordScope {
        teacher_id: Some(body.teacher_id),
        ..Default::default()
    };
    authorize(state.policy.as_ref(), &actor, Capability::WriteCourses, &scope)?;

    let usecase = CreateCourseUseCase {
        courses: state.course_repo(),
    };
    let course = usecase
        .execute(CreateCourseInput {
            code: body.code,
            name: body.name,
            description: body.description,
            teacher_id: body.teacher_id,
            semester: body.semester,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(CourseResponse::from(course))))
}
