use axum::{
    Router,
    routing::{get, patch, post},
};
use tower_http::trace::TraceLayer;

use campus_core::health::{healthz, readyz};
use campus_core::middleware::request_id_layer;

use crate::handlers::{
    attendance::{list_attendance, record_attendance, update_attendance},
    auth::{me, sign_in, sign_out, sign_up},
    course::{create_course, list_courses},
    grade::{list_grades, record_grade, update_grade},
    profile::{get_profile, update_profile},
};
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Health
        .route("/healthz", get(healthz))
        .route("/readyz", get(readyz))
        // Auth
        .route("/auth/signup", post(sign_up))
        .route("/auth/signin", post(sign_in))
        .route("/auth/me", get(me))
        .route("/auth/signout", post(sign_out))
        // Attendance
        .route("/attendance", get(list_attendance))
        .route("/attendance", post(record_attendance))
        .route("/attendance/{id}", patch(update_attendance))
        // Courses
        .route("/courses", get(list_courses))
        .route("/courses", post(create_course))
        // Grades
        .route("/grades", get(list_grades))
        .route("/grades", post(record_grade))
        .route("/grades/{id}", patch(update_grade))
        // Profiles
        .route("/users/{user_id}", get(get_profile))
        .route("/users/{user_id}", patch(update_profile))
        .layer(TraceLayer::new_for_http())
        .layer(request_id_layer())
        .with_state(state)
}
