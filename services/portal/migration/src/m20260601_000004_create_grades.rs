use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Grades::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Grades::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Grades::StudentId).uuid().not_null())
                    .col(ColumnDef::new(Grades::CourseId).uuid().not_null())
                    .col(ColumnDef::new(Grades::Marks).double().not_null())
                    .col(ColumnDef::new(Grades::TotalMarks).double().not_null())
                    .col(ColumnDef::new(Grades::Percentage).double().not_null())
                    .col(ColumnDef::new(Grades::Grade).string().not_null())
                    .col(
                        ColumnDef::new(Grades::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(Grades::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Grades::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Grades {
    Table,
    Id,
    StudentId,
    CourseId,
    Marks,
    TotalMarks,
    Percentage,
    Grade,
    CreatedAt,
    UpdatedAt,
}
