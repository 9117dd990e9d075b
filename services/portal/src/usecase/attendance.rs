use chrono::{NaiveDate, Utc};
use uuid::Uuid;

use campus_domain::attendance::{AttendanceStatus, AttendanceSummary};

use crate::domain::repository::AttendanceRepository;
use crate::domain::types::AttendanceRecord;
use crate::error::PortalError;

// ── ListAttendance ───────────────────────────────────────────────────────────

/// Filtered records plus the aggregate computed over exactly those records.
#[derive(Debug)]
pub struct AttendanceListing {
    pub records: Vec<AttendanceRecord>,
    pub summary: AttendanceSummary,
}

pub struct ListAttendanceUseCase<A: AttendanceRepository> {
    pub attendance: A,
}

impl<A: AttendanceRepository> ListAttendanceUseCase<A> {
    pub async fn execute(
        &self,
        student_id: Option<Uuid>,
        course_id: Option<Uuid>,
    ) -> Result<AttendanceListing, PortalError> {
        let records = self.attendance.list(student_id, course_id).await?;
        let summary = AttendanceSummary::tally(records.iter().map(|r| r.status));
        Ok(AttendanceListing { records, summary })
    }
}

// ── RecordAttendance ─────────────────────────────────────────────────────────

pub struct RecordAttendanceInput {
    pub student_id: Uuid,
    pub course_id: Uuid,
    pub date: NaiveDate,
    pub status: AttendanceStatus,
}

pub struct RecordAttendanceUseCase<A: AttendanceRepository> {
    pub attendance: A,
}

impl<A: AttendanceRepository> RecordAttendanceUseCase<A> {
    /// Insert a new record. Repeat submissions for the same student, course,
    /// and date are accepted as separate rows.
    pub async fn execute(
        &self,
        input: RecordAttendanceInput,
    ) -> Result<AttendanceRecord, PortalError> {
        let record = AttendanceRecord {
            id: Uuid::now_v7(),
            student_id: input.student_id,
            course_id: input.course_id,
            date: input.date,
            status: input.status,
            created_at: Utc::now(),
        };
        self.attendance.create(&record).await?;
        Ok(record)
    }
}

// ── UpdateAttendance ─────────────────────────────────────────────────────────

pub struct UpdateAttendanceUseCase<A: AttendanceRepository> {
    pub attendance: A,
}

impl<A: AttendanceRepository> UpdateAttendanceUseCase<A> {
    pub async fn execute(
        &self,
        id: Uuid,
        status: AttendanceStatus,
    ) -> Result<AttendanceRecord, PortalError> {
        self.attendance
            .update_status(id, status)
            .await?
            .ok_or(PortalError::AttendanceNotFound)
    }
}
