#![allow(async_fn_in_trait)]

use uuid::Uuid;

use campus_domain::attendance::AttendanceStatus;

use crate::domain::types::{AttendanceRecord, Course, Grade, GradeUpdate, User};
use crate::error::PortalError;

/// Repository for portal accounts.
pub trait UserRepository: Send + Sync {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, PortalError>;

    /// Lookup by stored email. Callers pass the lowercased form; matching is
    /// exact.
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, PortalError>;

    async fn create(&self, user: &User) -> Result<(), PortalError>;

    /// Update profile fields, returning the updated account. `None` when the
    /// id does not resolve.
    async fn update_profile(
        &self,
        id: Uuid,
        full_name: Option<&str>,
        department: Option<&str>,
    ) -> Result<Option<User>, PortalError>;
}

/// Repository for courses.
pub trait CourseRepository: Send + Sync {
    /// List courses, optionally restricted to one teacher. Rows come back in
    /// insertion order.
    async fn list(&self, teacher_id: Option<Uuid>) -> Result<Vec<Course>, PortalError>;

    async fn create(&self, course: &Course) -> Result<(), PortalError>;
}

/// Repository for attendance records.
pub trait AttendanceRepository: Send + Sync {
    /// List records matching the filters. An omitted filter applies no
    /// restriction. Rows come back in insertion order.
    async fn list(
        &self,
        student_id: Option<Uuid>,
        course_id: Option<Uuid>,
    ) -> Result<Vec<AttendanceRecord>, PortalError>;

    async fn create(&self, record: &AttendanceRecord) -> Result<(), PortalError>;

    /// Update the status of one record, returning the updated row. `None`
    /// when the id does not resolve.
    async fn update_status(
        &self,
        id: Uuid,
        status: AttendanceStatus,
    ) -> Result<Option<AttendanceRecord>, PortalError>;
}

/// Repository for grade entries.
pub trait GradeRepository: Send + Sync {
    /// List grades matching the filters. An omitted filter applies no
    /// restriction. Rows come back in insertion order.
    async fn list(
        &self,
        student_id: Option<Uuid>,
        course_id: Option<Uuid>,
    ) -> Result<Vec<Grade>, PortalError>;

    async fn create(&self, grade: &Grade) -> Result<(), PortalError>;

    /// Apply a partial update, returning the updated row. `None` when the id
    /// does not resolve.
    async fn update(&self, id: Uuid, update: &GradeUpdate) -> Result<Option<Grade>, PortalError>;
}
