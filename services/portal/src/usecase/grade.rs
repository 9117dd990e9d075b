use chrono::Utc;
use uuid::Uuid;

use campus_domain::grading::compute_grade;

use crate::domain::repository::GradeRepository;
use crate::domain::types::{Grade, GradeUpdate};
use crate::error::PortalError;

// ── ListGrades ───────────────────────────────────────────────────────────────

pub struct ListGradesUseCase<G: GradeRepository> {
    pub grades: G,
}

impl<G: GradeRepository> ListGradesUseCase<G> {
    pub async fn execute(
        &self,
        student_id: Option<Uuid>,
        course_id: Option<Uuid>,
    ) -> Result<Vec<Grade>, PortalError> {
        self.grades.list(student_id, course_id).await
    }
}

// ── RecordGrade ──────────────────────────────────────────────────────────────

pub struct RecordGradeInput {
    pub student_id: Uuid,
    pub course_id: Uuid,
    pub marks: f64,
    pub total_marks: f64,
}

pub struct RecordGradeUseCase<G: GradeRepository> {
    pub grades: G,
}

impl<G: GradeRepository> RecordGradeUseCase<G> {
    /// Record a grade, deriving the percentage and letter at write time.
    pub async fn execute(&self, input: RecordGradeInput) -> Result<Grade, PortalError> {
        if input.marks < 0.0 || input.total_marks <= 0.0 || input.marks > input.total_marks {
            return Err(PortalError::InvalidMarks);
        }

        let computed = compute_grade(input.marks, input.total_marks);
        let now = Utc::now();
        let grade = Grade {
            id: Uuid::now_v7(),
            student_id: input.student_id,
            course_id: input.course_id,
            marks: input.marks,
            total_marks: input.total_marks,
            percentage: computed.percentage,
            grade: computed.letter.as_str().to_owned(),
            created_at: now,
            updated_at: now,
        };
        self.grades.create(&grade).await?;
        Ok(grade)
    }
}

// ── UpdateGrade ──────────────────────────────────────────────────────────────

pub struct UpdateGradeInput {
    pub marks: Option<f64>,
    pub total_marks: Option<f64>,
}

pub struct UpdateGradeUseCase<G: GradeRepository> {
    pub grades: G,
}

impl<G: GradeRepository> UpdateGradeUseCase<G> {
    /// Apply a partial update. The derived percentage and letter move only
    /// when both sides of the marks pair are supplied; a one-sided update
    /// changes the raw field and leaves the derived ones as stored.
    pub async fn execute(&self, id: Uuid, input: UpdateGradeInput) -> Result<Grade, PortalError> {
        if input.marks.is_none() && input.total_marks.is_none() {
            return Err(PortalError::MissingFields);
        }
        if let Some(marks) = input.marks {
            if marks < 0.0 {
                return Err(PortalError::InvalidMarks);
            }
        }
        if let Some(total_marks) = input.total_marks {
            if total_marks <= 0.0 {
                return Err(PortalError::InvalidMarks);
            }
        }

        let derived = match (input.marks, input.total_marks) {
            (Some(marks), Some(total_marks)) => {
                if marks > total_marks {
                    return Err(PortalError::InvalidMarks);
                }
                Some(compute_grade(marks, total_marks))
            }
            _ => None,
        };

        let update = GradeUpdate {
            marks: input.marks,
            total_marks: input.total_marks,
            derived,
        };
        self.grades
            .update(id, &update)
            .await?
            .ok_or(PortalError::GradeNotFound)
    }
}
