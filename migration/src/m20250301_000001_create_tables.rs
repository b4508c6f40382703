use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // 创建用户表（登录账号）
        manager
            .create_table(
                Table::create()
                    .table(Users::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Users::Id).string().not_null().primary_key())
                    .col(
                        ColumnDef::new(Users::Email)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Users::PasswordHash).string().not_null())
                    .col(ColumnDef::new(Users::Name).string().not_null())
                    .col(ColumnDef::new(Users::Role).string().not_null())
                    .col(ColumnDef::new(Users::Status).string().not_null())
                    .col(ColumnDef::new(Users::LastLogin).big_integer().null())
                    .col(ColumnDef::new(Users::CreatedAt).big_integer().not_null())
                    .col(ColumnDef::new(Users::UpdatedAt).big_integer().not_null())
                    .to_owned(),
            )
            .await?;

        // 创建年级表
        manager
            .create_table(
                Table::create()
                    .table(Standards::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Standards::Id)
                            .string()
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Standards::Name)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Standards::Level).integer().not_null())
                    .col(ColumnDef::new(Standards::Description).text().null())
                    .col(ColumnDef::new(Standards::IsActive).boolean().not_null())
                    .col(ColumnDef::new(Standards::Subjects).text().not_null())
                    .col(
                        ColumnDef::new(Standards::CreatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Standards::UpdatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        // 创建科目表
        manager
            .create_table(
                Table::create()
                    .table(Subjects::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Subjects::Id)
                            .string()
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Subjects::Name)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Subjects::Description).text().null())
                    .col(ColumnDef::new(Subjects::Duration).string().not_null())
                    .col(ColumnDef::new(Subjects::Status).string().not_null())
                    .col(ColumnDef::new(Subjects::CreatedAt).big_integer().not_null())
                    .col(ColumnDef::new(Subjects::UpdatedAt).big_integer().not_null())
                    .to_owned(),
            )
            .await?;

        // 创建教师表
        manager
            .create_table(
                Table::create()
                    .table(Teachers::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Teachers::Id)
                            .string()
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Teachers::UserId)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Teachers::Name).string().not_null())
                    .col(
                        ColumnDef::new(Teachers::Email)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Teachers::Phone).string().not_null())
                    .col(ColumnDef::new(Teachers::Gender).string().not_null())
                    .col(ColumnDef::new(Teachers::Address).text().null())
                    .col(ColumnDef::new(Teachers::Qualification).string().not_null())
                    .col(ColumnDef::new(Teachers::Experience).integer().not_null())
                    .col(ColumnDef::new(Teachers::JoiningDate).string().not_null())
                    .col(ColumnDef::new(Teachers::Salary).double().not_null())
                    .col(ColumnDef::new(Teachers::Status).string().not_null())
                    .col(ColumnDef::new(Teachers::Subjects).text().not_null())
                    .col(ColumnDef::new(Teachers::CreatedAt).big_integer().not_null())
                    .col(ColumnDef::new(Teachers::UpdatedAt).big_integer().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .from(Teachers::Table, Teachers::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // 创建职员表
        manager
            .create_table(
                Table::create()
                    .table(Staff::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Staff::Id).string().not_null().primary_key())
                    .col(ColumnDef::new(Staff::Name).string().not_null())
                    .col(ColumnDef::new(Staff::Role).string().not_null())
                    .col(ColumnDef::new(Staff::Department).string().not_null())
                    .col(
                        ColumnDef::new(Staff::Email)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Staff::Phone).string().not_null())
                    .col(ColumnDef::new(Staff::JoiningDate).string().not_null())
                    .col(ColumnDef::new(Staff::Salary).double().not_null())
                    .col(ColumnDef::new(Staff::Status).string().not_null())
                    .col(ColumnDef::new(Staff::Permissions).text().not_null())
                    .col(ColumnDef::new(Staff::ReportingTo).string().null())
                    .col(ColumnDef::new(Staff::CreatedAt).big_integer().not_null())
                    .col(ColumnDef::new(Staff::UpdatedAt).big_integer().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .from(Staff::Table, Staff::ReportingTo)
                            .to(Staff::Table, Staff::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await?;

        // 创建学生表
        manager
            .create_table(
                Table::create()
                    .table(Students::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Students::Id)
                            .string()
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Students::StudentCode)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Students::Name).string().not_null())
                    .col(ColumnDef::new(Students::Email).string().null())
                    .col(ColumnDef::new(Students::Phone).string().not_null())
                    .col(ColumnDef::new(Students::ParentName).string().not_null())
                    .col(ColumnDef::new(Students::ParentPhone).string().not_null())
                    .col(ColumnDef::new(Students::ParentEmail).string().null())
                    .col(ColumnDef::new(Students::Gender).string().not_null())
                    .col(ColumnDef::new(Students::DateOfBirth).string().not_null())
                    .col(ColumnDef::new(Students::Address).text().null())
                    .col(ColumnDef::new(Students::Board).string().not_null())
                    .col(ColumnDef::new(Students::SchoolName).string().null())
                    .col(ColumnDef::new(Students::PreviousPercentage).double().null())
                    .col(ColumnDef::new(Students::JoiningDate).string().not_null())
                    .col(ColumnDef::new(Students::CreatedAt).big_integer().not_null())
                    .col(ColumnDef::new(Students::UpdatedAt).big_integer().not_null())
                    .to_owned(),
            )
            .await?;

        // 创建班次表
        manager
            .create_table(
                Table::create()
                    .table(Batches::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Batches::Id)
                            .string()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Batches::Name).string().not_null())
                    .col(ColumnDef::new(Batches::StandardId).string().not_null())
                    .col(ColumnDef::new(Batches::SubjectId).string().not_null())
                    .col(ColumnDef::new(Batches::TeacherId).string().not_null())
                    .col(ColumnDef::new(Batches::StartDate).string().not_null())
                    .col(ColumnDef::new(Batches::EndDate).string().not_null())
                    .col(ColumnDef::new(Batches::ScheduleDays).text().not_null())
                    .col(ColumnDef::new(Batches::StartTime).string().not_null())
                    .col(ColumnDef::new(Batches::EndTime).string().not_null())
                    .col(ColumnDef::new(Batches::Capacity).integer().not_null())
                    .col(ColumnDef::new(Batches::Fees).double().not_null())
                    .col(ColumnDef::new(Batches::Status).string().not_null())
                    .col(ColumnDef::new(Batches::Description).text().null())
                    .col(ColumnDef::new(Batches::CreatedAt).big_integer().not_null())
                    .col(ColumnDef::new(Batches::UpdatedAt).big_integer().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .from(Batches::Table, Batches::StandardId)
                            .to(Standards::Table, Standards::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Batches::Table, Batches::SubjectId)
                            .to(Subjects::Table, Subjects::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Batches::Table, Batches::TeacherId)
                            .to(Teachers::Table, Teachers::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .to_owned(),
            )
            .await?;

        // 创建班次学生关联表
        manager
            .create_table(
                Table::create()
                    .table(BatchStudents::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(BatchStudents::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(BatchStudents::BatchId).string().not_null())
                    .col(ColumnDef::new(BatchStudents::StudentId).string().not_null())
                    .col(
                        ColumnDef::new(BatchStudents::EnrolledAt)
                            .big_integer()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(BatchStudents::Table, BatchStudents::BatchId)
                            .to(Batches::Table, Batches::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(BatchStudents::Table, BatchStudents::StudentId)
                            .to(Students::Table, Students::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // 创建公告表
        manager
            .create_table(
                Table::create()
                    .table(Announcements::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Announcements::Id)
                            .string()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Announcements::Title).string().not_null())
                    .col(ColumnDef::new(Announcements::Content).text().not_null())
                    .col(
                        ColumnDef::new(Announcements::AnnouncementType)
                            .string()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Announcements::Priority).string().not_null())
                    .col(ColumnDef::new(Announcements::StartDate).string().not_null())
                    .col(ColumnDef::new(Announcements::EndDate).string().not_null())
                    .col(
                        ColumnDef::new(Announcements::CreatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Announcements::UpdatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        // 创建缴费记录表
        manager
            .create_table(
                Table::create()
                    .table(Payments::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Payments::Id)
                            .string()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Payments::StudentId).string().not_null())
                    .col(ColumnDef::new(Payments::BatchId).string().null())
                    .col(ColumnDef::new(Payments::Amount).double().not_null())
                    .col(ColumnDef::new(Payments::PaymentDate).string().not_null())
                    .col(ColumnDef::new(Payments::Method).string().not_null())
                    .col(ColumnDef::new(Payments::Status).string().not_null())
                    .col(ColumnDef::new(Payments::TransactionId).string().null())
                    .col(ColumnDef::new(Payments::Remarks).text().null())
                    .col(ColumnDef::new(Payments::CreatedAt).big_integer().not_null())
                    .col(ColumnDef::new(Payments::UpdatedAt).big_integer().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .from(Payments::Table, Payments::StudentId)
                            .to(Students::Table, Students::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Payments::Table, Payments::BatchId)
                            .to(Batches::Table, Batches::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await?;

        // 创建文件表
        manager
            .create_table(
                Table::create()
                    .table(Files::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Files::Id).string().not_null().primary_key())
                    .col(ColumnDef::new(Files::OriginalName).string().not_null())
                    .col(
                        ColumnDef::new(Files::StoredName)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Files::FileSize).big_integer().not_null())
                    .col(ColumnDef::new(Files::ContentType).string().not_null())
                    .col(ColumnDef::new(Files::UploadedBy).string().null())
                    .col(ColumnDef::new(Files::CreatedAt).big_integer().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .from(Files::Table, Files::UploadedBy)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await?;

        // 创建索引
        // 同一学生在同一班次中只能出现一次
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_batch_students_batch_student")
                    .table(BatchStudents::Table)
                    .col(BatchStudents::BatchId)
                    .col(BatchStudents::StudentId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_batch_students_student_id")
                    .table(BatchStudents::Table)
                    .col(BatchStudents::StudentId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_batches_teacher_id")
                    .table(Batches::Table)
                    .col(Batches::TeacherId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_batches_standard_id")
                    .table(Batches::Table)
                    .col(Batches::StandardId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_payments_student_id")
                    .table(Payments::Table)
                    .col(Payments::StudentId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // 按照创建的相反顺序删除
        manager
            .drop_table(Table::drop().table(Files::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Payments::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Announcements::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(BatchStudents::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Batches::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Students::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Staff::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Teachers::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Subjects::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Standards::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Users::Table).to_owned())
            .await?;
        Ok(())
    }
}

#[derive(DeriveIden)]
enum Users {
    #[sea_orm(iden = "users")]
    Table,
    Id,
    Email,
    PasswordHash,
    Name,
    Role,
    Status,
    LastLogin,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Standards {
    #[sea_orm(iden = "standards")]
    Table,
    Id,
    Name,
    Level,
    Description,
    IsActive,
    Subjects,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Subjects {
    #[sea_orm(iden = "subjects")]
    Table,
    Id,
    Name,
    Description,
    Duration,
    Status,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Teachers {
    #[sea_orm(iden = "teachers")]
    Table,
    Id,
    UserId,
    Name,
    Email,
    Phone,
    Gender,
    Address,
    Qualification,
    Experience,
    JoiningDate,
    Salary,
    Status,
    Subjects,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Staff {
    #[sea_orm(iden = "staff")]
    Table,
    Id,
    Name,
    Role,
    Department,
    Email,
    Phone,
    JoiningDate,
    Salary,
    Status,
    Permissions,
    ReportingTo,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Students {
    #[sea_orm(iden = "students")]
    Table,
    Id,
    StudentCode,
    Name,
    Email,
    Phone,
    ParentName,
    ParentPhone,
    ParentEmail,
    Gender,
    DateOfBirth,
    Address,
    Board,
    SchoolName,
    PreviousPercentage,
    JoiningDate,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Batches {
    #[sea_orm(iden = "batches")]
    Table,
    Id,
    Name,
    StandardId,
    SubjectId,
    TeacherId,
    StartDate,
    EndDate,
    ScheduleDays,
    StartTime,
    EndTime,
    Capacity,
    Fees,
    Status,
    Description,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum BatchStudents {
    #[sea_orm(iden = "batch_students")]
    Table,
    Id,
    BatchId,
    StudentId,
    EnrolledAt,
}

#[derive(DeriveIden)]
enum Announcements {
    #[sea_orm(iden = "announcements")]
    Table,
    Id,
    Title,
    Content,
    AnnouncementType,
    Priority,
    StartDate,
    EndDate,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Payments {
    #[sea_orm(iden = "payments")]
    Table,
    Id,
    StudentId,
    BatchId,
    Amount,
    PaymentDate,
    Method,
    Status,
    TransactionId,
    Remarks,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Files {
    #[sea_orm(iden = "files")]
    Table,
    Id,
    OriginalName,
    StoredName,
    FileSize,
    ContentType,
    UploadedBy,
    CreatedAt,
}
