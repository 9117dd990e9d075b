use uuid::Uuid;

use campus_portal::error::PortalError;
use campus_portal::usecase::course::{
    CreateCourseInput, CreateCourseUseCase, ListCoursesUseCase,
};

use crate::helpers::{MockCourseRepo, test_course};

// ── CreateCourseUseCase ──────────────────────────────────────────────────────

#[tokio::test]
async fn should_create_course() {
    let repo = MockCourseRepo::empty();
    let courses_handle = repo.courses_handle();
    let usecase = CreateCourseUseCase { courses: repo };

    let teacher_id = Uuid::new_v4();
    let course = usecase
        .execute(CreateCourseInput {
            code: "CS201".to_owned(),
            name: "Data Structures".to_owned(),
            description: Some("Lists, trees, and graphs.".to_owned()),
            teacher_id,
            semester: "Spring 2027".to_owned(),
        })
        .await
        .unwrap();

    assert_eq!(course.code, "CS201");
    assert_eq!(course.teacher_id, teacher_id);

    let courses = courses_handle.lock().unwrap();
    assert_eq!(courses.len(), 1);
    assert_eq!(courses[0].id, course.id);
}

#[tokio::test]
async fn should_accept_course_without_description() {
    let usecase = CreateCourseUseCase {
        courses: MockCourseRepo::empty(),
    };

    let course = usecase
        .execute(CreateCourseInput {
            code: "CS201".to_owned(),
            name: "Data Structures".to_owned(),
            description: None,
            teacher_id: Uuid::new_v4(),
            semester: "Spring 2027".to_owned(),
        })
        .await
        .unwrap();

    assert!(course.description.is_none());
}

#[tokio::test]
async fn should_reject_blank_required_fields() {
    let usecase = CreateCourseUseCase {
        courses: MockCourseRepo::empty(),
    };

    for (code, name, semester) in [
        ("", "Data Structures", "Spring 2027"),
        ("CS201", "   ", "Spring 2027"),
        ("CS201", "Data Structures", ""),
    ] {
        let result = usecase
            .execute(CreateCourseInput {
                code: code.to_owned(),
                name: name.to_owned(),
                description: None,
                teacher_id: Uuid::new_v4(),
                semester: semester.to_owned(),
            })
            .await;

        assert!(
            matches!(result, Err(PortalError::MissingFields)),
            "expected MissingFields for ({code:?}, {name:?}, {semester:?}), got {result:?}"
        );
    }
}

// ── ListCoursesUseCase ───────────────────────────────────────────────────────

#[tokio::test]
async fn should_list_all_courses_when_no_filter_given() {
    let repo = MockCourseRepo::new(vec![
        test_course(Uuid::new_v4()),
        test_course(Uuid::new_v4()),
    ]);
    let usecase = ListCoursesUseCase { courses: repo };

    let courses = usecase.execute(None).await.unwrap();
    assert_eq!(courses.len(), 2);
}

#[tokio::test]
async fn should_filter_courses_by_teacher() {
    let teacher = Uuid::new_v4();
    let other = Uuid::new_v4();

    let repo = MockCourseRepo::new(vec![
        test_course(teacher),
        test_course(other),
        test_course(teacher),
    ]);
    let usecase = ListCoursesUseCase { courses: repo };

    let courses = usecase.execute(Some(teacher)).await.unwrap();

    assert_eq!(courses.len(), 2);
    assert!(courses.iter().all(|c| c.teacher_id == teacher));
}
