use std::sync::Arc;

use sea_orm::DatabaseConnection;

use campus_domain::policy::AccessPolicy;

use crate::infra::db::{
    DbAttendanceRepository, DbCourseRepository, DbGradeRepository, DbUserRepository,
};

/// Shared application state passed to every handler via axum `State`.
#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub jwt_secret: String,
    pub policy: Arc<dyn AccessPolicy>,
}

impl AppState {
    pub fn user_repo(&self) -> DbUserRepository {
        DbUserRepository {
            db: self.db.clone(),
        }
    }

    pub fn course_repo(&self) -> DbCourseRepository {
        DbCourseRepository {
            db: self.db.clone(),
        }
    }

    pub fn attendance_repo(&self) -> DbAttendanceRepository {
        DbAttendanceRepository {
            db: self.db.clone(),
        }
    }

    pub fn grade_repo(&self) -> DbGradeRepository {
        DbGradeRepository {
            db: self.db.clone(),
        }
    }
}
