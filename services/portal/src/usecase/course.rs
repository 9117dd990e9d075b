use chrono::Utc;
use uuid::Uuid;

use crate::domain::repository::CourseRepository;
use crate::domain::types::Course;
use crate::error::PortalError;

// ── ListCourses ──────────────────────────────────────────────────────────────

pub struct ListCoursesUseCase<C: CourseRepository> {
    pub courses: C,
}

impl<C: CourseRepository> ListCoursesUseCase<C> {
    pub async fn execute(&self, teacher_id: Option<Uuid>) -> Result<Vec<Course>, PortalError> {
        self.courses.list(teacher_id).await
    }
}

// ── CreateCourse ─────────────────────────────────────────────────────────────

pub struct CreateCourseInput {
    pub code: String,
    pub name: String,
    pub description: Option<String>,
    pub teacher_id: Uuid,
    pub semester: String,
}

pub struct CreateCourseUseCase<C: CourseRepository> {
    pub courses: C,
}

impl<C: CourseRepository> CreateCourseUseCase<C> {
    /// Create a course. `teacher_id` is recorded as given; no account lookup
    /// backs it.
    pub async fn execute(&self, input: CreateCourseInput) -> Result<Course, PortalError> {
        if input.code.trim().is_empty()
            || input.name.trim().is_empty()
            || input.semester.trim().is_empty()
        {
            return Err(PortalError::MissingFields);
        }

        let course = Course {
            id: Uuid::now_v7(),
            code: input.code,
            name: input.name,
            description: input.description,
            teacher_id: input.teacher_id,
            semester: input.semester,
            created_at: Utc::now(),
        };
        self.courses.create(&course).await?;
        Ok(course)
    }
}
