use chrono::{DateTime, NaiveDate, Utc};
use uuid::Uuid;

use campus_domain::attendance::AttendanceStatus;
use campus_domain::grading::ComputedGrade;
use campus_domain::role::Role;

/// Minimum accepted password length at sign-up.
pub const MIN_PASSWORD_LEN: usize = 6;

/// Account owned by the portal service. `password_hash` stays inside the
/// service; response types never carry it.
#[derive(Debug, Clone)]
pub struct User {
    pub id: Uuid,
    pub email: String,
    pub password_hash: String,
    pub full_name: String,
    pub role: Role,
    pub department: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Course catalog entry. `teacher_id` is a plain reference, not a checked
/// foreign key.
#[derive(Debug, Clone)]
pub struct Course {
    pub id: Uuid,
    pub code: String,
    pub name: String,
    pub description: Option<String>,
    pub teacher_id: Uuid,
    pub semester: String,
    pub created_at: DateTime<Utc>,
}

/// One attendance mark for a student in a course on a date.
#[derive(Debug, Clone)]
pub struct AttendanceRecord {
    pub id: Uuid,
    pub student_id: Uuid,
    pub course_id: Uuid,
    pub date: NaiveDate,
    pub status: AttendanceStatus,
    pub created_at: DateTime<Utc>,
}

/// Grade entry. `percentage` and `grade` are derived from the marks pair at
/// write time and stored alongside it.
#[derive(Debug, Clone)]
pub struct Grade {
    pub id: Uuid,
    pub student_id: Uuid,
    pub course_id: Uuid,
    pub marks: f64,
    pub total_marks: f64,
    pub percentage: f64,
    pub grade: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Field changes for a partial grade update.
///
/// `derived` is present only when the caller supplied both sides of the
/// marks pair; a one-sided update leaves the stored percentage and letter
/// untouched.
#[derive(Debug, Clone, Copy)]
pub struct GradeUpdate {
    pub marks: Option<f64>,
    pub total_marks: Option<f64>,
    pub derived: Option<ComputedGrade>,
}

/// Validate an email address. The check is deliberately shallow: any
/// non-empty string containing `@` is accepted.
pub fn validate_email(email: &str) -> bool {
    email.contains('@')
}
