use chrono::NaiveDate;
use uuid::Uuid;

use campus_domain::attendance::AttendanceStatus;
use campus_portal::error::PortalError;
use campus_portal::usecase::attendance::{
    ListAttendanceUseCase, RecordAttendanceInput, RecordAttendanceUseCase, UpdateAttendanceUseCase,
};

use crate::helpers::{MockAttendanceRepo, test_record};

// ── RecordAttendanceUseCase ──────────────────────────────────────────────────

#[tokio::test]
async fn should_record_attendance() {
    let repo = MockAttendanceRepo::empty();
    let records_handle = repo.records_handle();
    let usecase = RecordAttendanceUseCase { attendance: repo };

    let student_id = Uuid::new_v4();
    let course_id = Uuid::new_v4();
    let record = usecase
        .execute(RecordAttendanceInput {
            student_id,
            course_id,
            date: NaiveDate::from_ymd_opt(2026, 3, 2).unwrap(),
            status: AttendanceStatus::Late,
        })
        .await
        .unwrap();

    assert_eq!(record.student_id, student_id);
    assert_eq!(record.course_id, course_id);
    assert_eq!(record.status, AttendanceStatus::Late);

    let records = records_handle.lock().unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].id, record.id);
}

#[tokio::test]
async fn should_accept_duplicate_records_for_same_day() {
    let repo = MockAttendanceRepo::empty();
    let records_handle = repo.records_handle();
    let usecase = RecordAttendanceUseCase { attendance: repo };

    let student_id = Uuid::new_v4();
    let course_id = Uuid::new_v4();
    let date = NaiveDate::from_ymd_opt(2026, 3, 2).unwrap();

    let first = usecase
        .execute(RecordAttendanceInput {
            student_id,
            course_id,
            date,
            status: AttendanceStatus::Present,
        })
        .await
        .unwrap();
    let second = usecase
        .execute(RecordAttendanceInput {
            student_id,
            course_id,
            date,
            status: AttendanceStatus::Absent,
        })
        .await
        .unwrap();

    // Same student, course, and date lands twice as two distinct rows.
    assert_ne!(first.id, second.id);
    assert_eq!(records_handle.lock().unwrap().len(), 2);
}

// ── UpdateAttendanceUseCase ──────────────────────────────────────────────────

#[tokio::test]
async fn should_update_attendance_status() {
    let student_id = Uuid::new_v4();
    let course_id = Uuid::new_v4();
    let record = test_record(student_id, course_id, AttendanceStatus::Absent);
    let record_id = record.id;

    let repo = MockAttendanceRepo::new(vec![record]);
    let records_handle = repo.records_handle();
    let usecase = UpdateAttendanceUseCase { attendance: repo };

    let updated = usecase
        .execute(record_id, AttendanceStatus::Late)
        .await
        .unwrap();

    assert_eq!(updated.id, record_id);
    assert_eq!(updated.status, AttendanceStatus::Late);

    let records = records_handle.lock().unwrap();
    assert_eq!(records[0].status, AttendanceStatus::Late);
}

#[tokio::test]
async fn should_return_not_found_for_unknown_record() {
    let usecase = UpdateAttendanceUseCase {
        attendance: MockAttendanceRepo::empty(),
    };

    let result = usecase
        .execute(Uuid::new_v4(), AttendanceStatus::Present)
        .await;

    assert!(
        matches!(result, Err(PortalError::AttendanceNotFound)),
        "expected AttendanceNotFound, got {result:?}"
    );
}

// ── ListAttendanceUseCase ────────────────────────────────────────────────────

#[tokio::test]
async fn should_list_all_records_when_no_filter_given() {
    let a = Uuid::new_v4();
    let b = Uuid::new_v4();
    let course = Uuid::new_v4();

    let repo = MockAttendanceRepo::new(vec![
        test_record(a, course, AttendanceStatus::Present),
        test_record(b, course, AttendanceStatus::Absent),
    ]);
    let usecase = ListAttendanceUseCase { attendance: repo };

    let listing = usecase.execute(None, None).await.unwrap();
    assert_eq!(listing.records.len(), 2);
    assert_eq!(listing.summary.total(), 2);
}

#[tokio::test]
async fn should_filter_by_student_and_summarize_only_those_records() {
    let alice = Uuid::new_v4();
    let bob = Uuid::new_v4();
    let course = Uuid::new_v4();

    let repo = MockAttendanceRepo::new(vec![
        test_record(alice, course, AttendanceStatus::Present),
        test_record(alice, course, AttendanceStatus::Late),
        test_record(bob, course, AttendanceStatus::Absent),
        test_record(bob, course, AttendanceStatus::Absent),
    ]);
    let usecase = ListAttendanceUseCase { attendance: repo };

    let listing = usecase.execute(Some(alice), None).await.unwrap();

    assert_eq!(listing.records.len(), 2);
    assert!(listing.records.iter().all(|r| r.student_id == alice));
    // The aggregate covers the filtered set, not the whole table.
    assert_eq!(listing.summary.present, 1);
    assert_eq!(listing.summary.late, 1);
    assert_eq!(listing.summary.absent, 0);
    assert_eq!(listing.summary.rate(), 75.0);
}

#[tokio::test]
async fn should_filter_by_student_and_course_together() {
    let student = Uuid::new_v4();
    let math = Uuid::new_v4();
    let physics = Uuid::new_v4();

    let repo = MockAttendanceRepo::new(vec![
        test_record(student, math, AttendanceStatus::Present),
        test_record(student, physics, AttendanceStatus::Absent),
    ]);
    let usecase = ListAttendanceUseCase { attendance: repo };

    let listing = usecase.execute(Some(student), Some(math)).await.unwrap();

    assert_eq!(listing.records.len(), 1);
    assert_eq!(listing.records[0].course_id, math);
    assert_eq!(listing.summary.present, 1);
    assert_eq!(listing.summary.absent, 0);
}

#[tokio::test]
async fn should_weigh_late_as_half_credit_in_summary() {
    let student = Uuid::new_v4();
    let course = Uuid::new_v4();

    let repo = MockAttendanceRepo::new(vec![
        test_record(student, course, AttendanceStatus::Present),
        test_record(student, course, AttendanceStatus::Present),
        test_record(student, course, AttendanceStatus::Late),
        test_record(student, course, AttendanceStatus::Absent),
    ]);
    let usecase = ListAttendanceUseCase { attendance: repo };

    let listing = usecase.execute(Some(student), Some(course)).await.unwrap();

    assert_eq!(listing.summary.present, 2);
    assert_eq!(listing.summary.late, 1);
    assert_eq!(listing.summary.absent, 1);
    // (2 + 0.5) / 4 = 62.5%
    assert_eq!(listing.summary.rate(), 62.5);
}

#[tokio::test]
async fn should_return_zero_rate_for_empty_listing() {
    let usecase = ListAttendanceUseCase {
        attendance: MockAttendanceRepo::empty(),
    };

    let listing = usecase.execute(Some(Uuid::new_v4()), None).await.unwrap();

    assert!(listing.records.is_empty());
    assert_eq!(listing.summary.total(), 0);
    assert_eq!(listing.summary.rate(), 0.0);
}
