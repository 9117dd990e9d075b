use anyhow::anyhow;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    IntoActiveModel as _, QueryFilter, QueryOrder, SqlErr,
};
use uuid::Uuid;

use campus_domain::attendance::AttendanceStatus;
use campus_domain::role::Role;
use campus_portal_schema::{attendance_records, courses, grades, users};

use crate::domain::repository::{
    AttendanceRepository, CourseRepository, GradeRepository, UserRepository,
};
use crate::domain::types::{AttendanceRecord, Course, Grade, GradeUpdate, User};
use crate::error::PortalError;

/// Classify a database error. Connection-level failures surface as 503 so
/// callers can retry; everything else is internal.
fn store_err(e: DbErr, op: &'static str) -> PortalError {
    match e {
        DbErr::Conn(_) | DbErr::ConnectionAcquire(_) => PortalError::StoreUnavailable,
        other => PortalError::Internal(anyhow::Error::new(other).context(op)),
    }
}

// ── User repository ──────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbUserRepository {
    pub db: DatabaseConnection,
}

impl UserRepository for DbUserRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, PortalError> {
        let model = users::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| store_err(e, "find user by id"))?;
        model.map(user_from_model).transpose()
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, PortalError> {
        let model = users::Entity::find()
            .filter(users::Column::Email.eq(email))
            .one(&self.db)
            .await
            .map_err(|e| store_err(e, "find user by email"))?;
        model.map(user_from_model).transpose()
    }

    async fn create(&self, user: &User) -> Result<(), PortalError> {
        users::ActiveModel {
            id: Set(user.id),
            email: Set(user.email.clone()),
            password_hash: Set(user.password_hash.clone()),
            full_name: Set(user.full_name.clone()),
            role: Set(user.role.as_str().to_owned()),
            department: Set(user.department.clone()),
            created_at: Set(user.created_at),
            updated_at: Set(user.updated_at),
        }
        .insert(&self.db)
        .await
        .map_err(|e| match e.sql_err() {
            // The unique index on email catches the race the pre-insert
            // lookup cannot.
            Some(SqlErr::UniqueConstraintViolation(_)) => PortalError::EmailTaken,
            _ => store_err(e, "create user"),
        })?;
        Ok(())
    }

    async fn update_profile(
        &self,
        id: Uuid,
        full_name: Option<&str>,
        department: Option<&str>,
    ) -> Result<Option<User>, PortalError> {
        let Some(model) = users::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| store_err(e, "find user for update"))?
        else {
            return Ok(None);
        };

        let mut am = model.into_active_model();
        if let Some(new_full_name) = full_name {
            am.full_name = Set(new_full_name.to_owned());
        }
        if let Some(new_department) = department {
            am.department = Set(Some(new_department.to_owned()));
        }
        am.updated_at = Set(Utc::now());

        let updated = am
            .update(&self.db)
            .await
            .map_err(|e| store_err(e, "update user profile"))?;
        user_from_model(updated).map(Some)
    }
}

fn user_from_model(model: users::Model) -> Result<User, PortalError> {
    let role = Role::from_str(&model.role)
        .ok_or_else(|| PortalError::Internal(anyhow!("unknown role in users row: {}", model.role)))?;
    Ok(User {
        id: model.id,
        email: model.email,
        password_hash: model.password_hash,
        full_name: model.full_name,
        role,
        department: model.department,
        created_at: model.created_at,
        updated_at: model.updated_at,
    })
}

// ── Course repository ────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbCourseRepository {
    pub db: DatabaseConnection,
}

impl CourseRepository for DbCourseRepository {
    async fn list(&self, teacher_id: Option<Uuid>) -> Result<Vec<Course>, PortalError> {
        let mut query = courses::Entity::find();
        if let Some(teacher_id) = teacher_id {
            query = query.filter(courses::Column::TeacherId.eq(teacher_id));
        }
        let models = query
            .order_by_asc(courses::Column::CreatedAt)
            .all(&self.db)
            .await
            .map_err(|e| store_err(e, "list courses"))?;
        Ok(models.into_iter().map(course_from_model).collect())
    }

    async fn create(&self, course: &Course) -> Result<(), PortalError> {
        courses::ActiveModel {
            id: Set(course.id),
            code: Set(course.code.clone()),
            name: Set(course.name.clone()),
            description: Set(course.description.clone()),
            teacher_id: Set(course.teacher_id),
            semester: Set(course.semester.clone()),
            created_at: Set(course.created_at),
        }
        .insert(&self.db)
        .await
        .map_err(|e| store_err(e, "create course"))?;
        Ok(())
    }
}

fn course_from_model(model: courses::Model) -> Course {
    Course {
        id: model.id,
        code: model.code,
        name: model.name,
        description: model.description,
        teacher_id: model.teacher_id,
        semester: model.semester,
        created_at: model.created_at,
    }
}

// ── Attendance repository ────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbAttendanceRepository {
    pub db: DatabaseConnection,
}

impl AttendanceRepository for DbAttendanceRepository {
    async fn list(
        &self,
        student_id: Option<Uuid>,
        course_id: Option<Uuid>,
    ) -> Result<Vec<AttendanceRecord>, PortalError> {
        let mut query = attendance_records::Entity::find();
        if let Some(student_id) = student_id {
            query = query.filter(attendance_records::Column::StudentId.eq(student_id));
        }
        if let Some(course_id) = course_id {
            query = query.filter(attendance_records::Column::CourseId.eq(course_id));
        }
        let models = query
            .order_by_asc(attendance_records::Column::CreatedAt)
            .all(&self.db)
            .await
            .map_err(|e| store_err(e, "list attendance records"))?;
        models.into_iter().map(attendance_from_model).collect()
    }

    async fn create(&self, record: &AttendanceRecord) -> Result<(), PortalError> {
        attendance_records::ActiveModel {
            id: Set(record.id),
            student_id: Set(record.student_id),
            course_id: Set(record.course_id),
            date: Set(record.date),
            status: Set(record.status.as_str().to_owned()),
            created_at: Set(record.created_at),
        }
        .insert(&self.db)
        .await
        .map_err(|e| store_err(e, "create attendance record"))?;
        Ok(())
    }

    async fn update_status(
        &self,
        id: Uuid,
        status: AttendanceStatus,
    ) -> Result<Option<AttendanceRecord>, PortalError> {
        let Some(model) = attendance_records::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| store_err(e, "find attendance record for update"))?
        else {
            return Ok(None);
        };

        let mut am = model.into_active_model();
        am.status = Set(status.as_str().to_owned());

        let updated = am
            .update(&self.db)
            .await
            .map_err(|e| store_err(e, "update attendance status"))?;
        attendance_from_model(updated).map(Some)
    }
}

fn attendance_from_model(model: attendance_records::Model) -> Result<AttendanceRecord, PortalError> {
    let status = AttendanceStatus::from_str(&model.status).ok_or_else(|| {
        PortalError::Internal(anyhow!(
            "unknown status in attendance_records row: {}",
            model.status
        ))
    })?;
    Ok(AttendanceRecord {
        id: model.id,
        student_id: model.student_id,
        course_id: model.course_id,
        date: model.date,
        status,
        created_at: model.created_at,
    })
}

// ── Grade repository ─────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbGradeRepository {
    pub db: DatabaseConnection,
}

impl GradeRepository for DbGradeRepository {
    async fn list(
        &self,
        student_id: Option<Uuid>,
        course_id: Option<Uuid>,
    ) -> Result<Vec<Grade>, PortalError> {
        let mut query = grades::Entity::find();
        if let Some(student_id) = student_id {
            query = query.filter(grades::Column::StudentId.eq(student_id));
        }
        if let Some(course_id) = course_id {
            query = query.filter(grades::Column::CourseId.eq(course_id));
        }
        let models = query
            .order_by_asc(grades::Column::CreatedAt)
            .all(&self.db)
            .await
            .map_err(|e| store_err(e, "list grades"))?;
        Ok(models.into_iter().map(grade_from_model).collect())
    }

    async fn create(&self, grade: &Grade) -> Result<(), PortalError> {
        grades::ActiveModel {
            id: Set(grade.id),
            student_id: Set(grade.student_id),
            course_id: Set(grade.course_id),
            marks: Set(grade.marks),
            total_marks: Set(grade.total_marks),
            percentage: Set(grade.percentage),
            grade: Set(grade.grade.clone()),
            created_at: Set(grade.created_at),
            updated_at: Set(grade.updated_at),
        }
        .insert(&self.db)
        .await
        .map_err(|e| store_err(e, "create grade"))?;
        Ok(())
    }

    async fn update(&self, id: Uuid, update: &GradeUpdate) -> Result<Option<Grade>, PortalError> {
        let Some(model) = grades::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| store_err(e, "find grade for update"))?
        else {
            return Ok(None);
        };

        let mut am = model.into_active_model();
        if let Some(marks) = update.marks {
            am.marks = Set(marks);
        }
        if let Some(total_marks) = update.total_marks {
            am.total_marks = Set(total_marks);
        }
        if let Some(derived) = update.derived {
            am.percentage = Set(derived.percentage);
            am.grade = Set(derived.letter.as_str().to_owned());
        }
        am.updated_at = Set(Utc::now());

        let updated = am
            .update(&self.db)
            .await
            .map_err(|e| store_err(e, "update grade"))?;
        Ok(Some(grade_from_model(updated)))
    }
}

fn grade_from_model(model: grades::Model) -> Grade {
    Grade {
        id: model.id,
        student_id: model.student_id,
        course_id: model.course_id,
        marks: model.marks,
        total_marks: model.total_marks,
        percentage: model.percentage,
        grade: model.grade,
        created_at: model.created_at,
        updated_at: model.updated_at,
    }
}
