use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_index(
                Index::create()
                    .table(AttendanceRecords::Table)
                    .col(AttendanceRecords::StudentId)
                    .name("idx_attendance_records_student_id")
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .table(AttendanceRecords::Table)
                    .col(AttendanceRecords::CourseId)
                    .name("idx_attendance_records_course_id")
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .table(Grades::Table)
                    .col(Grades::StudentId)
                    .name("idx_grades_student_id")
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .table(Grades::Table)
                    .col(Grades::CourseId)
                    .name("idx_grades_course_id")
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .table(Courses::Table)
                    .col(Courses::TeacherId)
                    .name("idx_courses_teacher_id")
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(Index::drop().name("idx_courses_teacher_id").to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_grades_course_id").to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_grades_student_id").to_owned())
            .await?;
        manager
            .drop_index(
                Index::drop()
                    .name("idx_attendance_records_course_id")
                    .to_owned(),
            )
            .await?;
        manager
            .drop_index(
                Index::drop()
                    .name("idx_attendance_records_student_id")
                    .to_owned(),
            )
            .await
    }
}

#[derive(Iden)]
enum AttendanceRecords {
    Table,
    StudentId,
    CourseId,
}

#[derive(Iden)]
enum Grades {
    Table,
    StudentId,
    CourseId,
}

#[derive(Iden)]
enum Courses {
    Table,
    TeacherId,
}
