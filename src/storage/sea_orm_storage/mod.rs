//! SeaORM 存储实现
//!
//! 统一的数据库存储层，支持 SQLite、PostgreSQL 和 MySQL。

mod announcements;
mod batches;
mod enrollments;
mod files;
mod payments;
mod staff;
mod standards;
mod students;
mod subjects;
mod teachers;
mod users;

use crate::config::AppConfig;
use crate::errors::{Result, TuitionError};
use crate::models::{PaginationInfo, PaginationQuery};
use migration::{Migrator, MigratorTrait};
use sea_orm::{
    ColumnTrait, ConnectOptions, ConnectionTrait, Database, DatabaseConnection, EntityTrait,
    PaginatorTrait, QueryFilter, QuerySelect, Select,
};
use std::time::Duration;
use tracing::info;

/// SeaORM 存储实现
#[derive(Clone)]
pub struct SeaOrmStorage {
    pub(crate) db: DatabaseConnection,
}

impl SeaOrmStorage {
    /// 按全局配置创建存储实例
    pub async fn new_async() -> Result<Self> {
        let config = AppConfig::get();
        Self::connect(
            &config.database.url,
            config.database.pool_size,
            config.database.timeout,
        )
        .await
    }

    /// 连接数据库并运行迁移
    pub async fn connect(url: &str, pool_size: u32, timeout: u64) -> Result<Self> {
        let db_url = Self::build_database_url(url)?;

        // 根据数据库类型选择连接方式
        let db = if db_url.starts_with("sqlite:") {
            Self::connect_sqlite(&db_url, pool_size, timeout).await?
        } else {
            Self::connect_generic(&db_url, pool_size, timeout).await?
        };

        // 运行迁移
        Migrator::up(&db, None)
            .await
            .map_err(|e| TuitionError::database_operation(format!("数据库迁移失败: {e}")))?;

        info!("SeaORM 存储初始化完成，数据库: {}", db_url);

        Ok(Self { db })
    }

    /// SQLite 专用连接（WAL + pragma 优化）
    async fn connect_sqlite(url: &str, pool_size: u32, timeout: u64) -> Result<DatabaseConnection> {
        use sea_orm::SqlxSqliteConnector;
        use sea_orm::sqlx::sqlite::{
            SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous,
        };
        use std::str::FromStr;

        let opt = SqliteConnectOptions::from_str(url)
            .map_err(|e| TuitionError::database_config(format!("SQLite URL 解析失败: {e}")))?
            .create_if_missing(true)
            .foreign_keys(true)
            .journal_mode(SqliteJournalMode::Wal)
            .synchronous(SqliteSynchronous::Normal)
            .busy_timeout(Duration::from_secs(5))
            .pragma("cache_size", "-64000")
            .pragma("temp_store", "memory");

        // 内存数据库随连接销毁，只能使用单个常驻连接
        let in_memory = url.contains(":memory:") || url.contains("mode=memory");
        let pool_options = if in_memory {
            SqlitePoolOptions::new()
                .max_connections(1)
                .idle_timeout(None)
                .max_lifetime(None)
        } else {
            SqlitePoolOptions::new()
                .max_connections(pool_size.max(1))
                .idle_timeout(Duration::from_secs(300))
        };

        let pool = pool_options
            .min_connections(1)
            .test_before_acquire(true)
            .acquire_timeout(Duration::from_secs(timeout))
            .connect_with(opt)
            .await
            .map_err(|e| TuitionError::database_connection(format!("SQLite 连接失败: {e}")))?;

        Ok(SqlxSqliteConnector::from_sqlx_sqlite_pool(pool))
    }

    /// 通用连接（PostgreSQL、MySQL 等）
    async fn connect_generic(url: &str, pool_size: u32, timeout: u64) -> Result<DatabaseConnection> {
        let mut opt = ConnectOptions::new(url);
        opt.max_connections(pool_size)
            .min_connections(1)
            .connect_timeout(Duration::from_secs(timeout))
            .acquire_timeout(Duration::from_secs(timeout))
            .idle_timeout(Duration::from_secs(600))
            .max_lifetime(Duration::from_secs(1800))
            .sqlx_logging(false)
            .sqlx_logging_level(tracing::log::LevelFilter::Debug);

        Database::connect(opt)
            .await
            .map_err(|e| TuitionError::database_connection(format!("无法连接到数据库: {e}")))
    }

    /// 从 URL 自动推断数据库类型并构建连接 URL
    fn build_database_url(url: &str) -> Result<String> {
        if url.starts_with("sqlite:") {
            Ok(url.to_string())
        } else if url.ends_with(".db") || url.ends_with(".sqlite") {
            Ok(format!("sqlite://{url}?mode=rwc"))
        } else if url == ":memory:" {
            Ok("sqlite::memory:".to_string())
        } else if url.starts_with("postgres://")
            || url.starts_with("postgresql://")
            || url.starts_with("mysql://")
            || url.starts_with("mariadb://")
        {
            Ok(url.to_string())
        } else {
            Err(TuitionError::database_config(format!(
                "无法从 URL 推断数据库类型: {url}. 支持: sqlite:, postgres://, mysql://, 或 .db/.sqlite 文件路径"
            )))
        }
    }

    /// 分页查询
    pub(crate) async fn fetch_page<E>(
        &self,
        select: Select<E>,
        pagination: &PaginationQuery,
        what: &str,
    ) -> Result<(Vec<E::Model>, PaginationInfo)>
    where
        E: EntityTrait,
        E::Model: Send + Sync,
    {
        let (page, size) = pagination.normalized();

        let paginator = select.paginate(&self.db, size);
        let counts = paginator
            .num_items_and_pages()
            .await
            .map_err(|e| TuitionError::from_db(&format!("查询{what}总数失败"), e))?;

        let models = paginator
            .fetch_page(page - 1)
            .await
            .map_err(|e| TuitionError::from_db(&format!("查询{what}列表失败"), e))?;

        Ok((
            models,
            PaginationInfo::new(
                page,
                size,
                counts.number_of_items,
                counts.number_of_pages,
            ),
        ))
    }
}

/// 查询 `ids` 中在 `id_column` 所在表里不存在的 ID
pub(crate) async fn missing_ids<E, C>(
    db: &C,
    id_column: E::Column,
    ids: &[String],
) -> Result<Vec<String>>
where
    E: EntityTrait,
    C: ConnectionTrait,
{
    if ids.is_empty() {
        return Ok(Vec::new());
    }

    let found: Vec<String> = E::find()
        .select_only()
        .column(id_column)
        .filter(id_column.is_in(ids.iter().cloned()))
        .into_tuple()
        .all(db)
        .await
        .map_err(|e| TuitionError::from_db("查询引用记录失败", e))?;

    Ok(ids
        .iter()
        .filter(|id| !found.contains(id))
        .cloned()
        .collect())
}

// Storage trait 实现
use crate::models::{
    PaginatedResponse,
    announcements::{
        entities::Announcement,
        requests::{AnnouncementListParams, CreateAnnouncementRequest, UpdateAnnouncementRequest},
    },
    batches::{
        entities::Batch,
        requests::{BatchListParams, CreateBatchRequest, UpdateBatchRequest},
        responses::EnrollmentResult,
    },
    files::entities::StoredFile,
    payments::{
        entities::Payment,
        requests::{CreatePaymentRequest, PaymentListParams, UpdatePaymentRequest},
    },
    staff::{
        entities::Staff,
        requests::{CreateStaffRequest, StaffListParams, UpdateStaffRequest},
    },
    standards::{
        entities::Standard,
        requests::{CreateStandardRequest, StandardListParams, UpdateStandardRequest},
    },
    students::{
        entities::Student,
        requests::{CreateStudentRequest, StudentListParams, UpdateStudentRequest},
    },
    subjects::{
        entities::Subject,
        requests::{CreateSubjectRequest, SubjectListParams, UpdateSubjectRequest},
    },
    teachers::{
        entities::Teacher,
        requests::{CreateTeacherRequest, TeacherListParams, UpdateTeacherRequest},
    },
    users::{
        entities::User,
        requests::{CreateUserRequest, UpdateUserRequest},
    },
};
use crate::storage::{RefTable, Storage};
use async_trait::async_trait;

#[async_trait]
impl Storage for SeaOrmStorage {
    // 账号模块
    async fn create_user(&self, user: CreateUserRequest) -> Result<User> {
        self.create_user_impl(user).await
    }

    async fn get_user_by_id(&self, id: &str) -> Result<Option<User>> {
        self.get_user_by_id_impl(id).await
    }

    async fn get_user_by_email(&self, email: &str) -> Result<Option<User>> {
        self.get_user_by_email_impl(email).await
    }

    async fn update_user(&self, id: &str, update: UpdateUserRequest) -> Result<Option<User>> {
        self.update_user_impl(id, update).await
    }

    async fn update_last_login(&self, id: &str) -> Result<bool> {
        self.update_last_login_impl(id).await
    }

    async fn count_users(&self) -> Result<u64> {
        self.count_users_impl().await
    }

    async fn find_missing_ids(&self, table: RefTable, ids: &[String]) -> Result<Vec<String>> {
        use crate::entity::{batches, staff, standards, students, subjects, teachers};

        match table {
            RefTable::Standards => {
                missing_ids::<standards::Entity, _>(&self.db, standards::Column::Id, ids).await
            }
            RefTable::Subjects => {
                missing_ids::<subjects::Entity, _>(&self.db, subjects::Column::Id, ids).await
            }
            RefTable::Teachers => {
                missing_ids::<teachers::Entity, _>(&self.db, teachers::Column::Id, ids).await
            }
            RefTable::Staff => {
                missing_ids::<staff::Entity, _>(&self.db, staff::Column::Id, ids).await
            }
            RefTable::Students => {
                missing_ids::<students::Entity, _>(&self.db, students::Column::Id, ids).await
            }
            RefTable::Batches => {
                missing_ids::<batches::Entity, _>(&self.db, batches::Column::Id, ids).await
            }
        }
    }

    // 年级模块
    async fn create_standard(&self, standard: CreateStandardRequest) -> Result<Standard> {
        self.create_standard_impl(standard).await
    }

    async fn get_standard_by_id(&self, id: &str) -> Result<Option<Standard>> {
        self.get_standard_by_id_impl(id).await
    }

    async fn list_standards_with_pagination(
        &self,
        query: StandardListParams,
    ) -> Result<PaginatedResponse<Standard>> {
        self.list_standards_with_pagination_impl(query).await
    }

    async fn update_standard(
        &self,
        id: &str,
        update: UpdateStandardRequest,
    ) -> Result<Option<Standard>> {
        self.update_standard_impl(id, update).await
    }

    async fn delete_standard(&self, id: &str) -> Result<bool> {
        self.delete_standard_impl(id).await
    }

    // 科目模块
    async fn create_subject(&self, subject: CreateSubjectRequest) -> Result<Subject> {
        self.create_subject_impl(subject).await
    }

    async fn get_subject_by_id(&self, id: &str) -> Result<Option<Subject>> {
        self.get_subject_by_id_impl(id).await
    }

    async fn list_subjects_with_pagination(
        &self,
        query: SubjectListParams,
    ) -> Result<PaginatedResponse<Subject>> {
        self.list_subjects_with_pagination_impl(query).await
    }

    async fn update_subject(
        &self,
        id: &str,
        update: UpdateSubjectRequest,
    ) -> Result<Option<Subject>> {
        self.update_subject_impl(id, update).await
    }

    async fn delete_subject(&self, id: &str) -> Result<bool> {
        self.delete_subject_impl(id).await
    }

    // 教师模块
    async fn create_teacher(
        &self,
        teacher: CreateTeacherRequest,
        password_hash: String,
    ) -> Result<Teacher> {
        self.create_teacher_impl(teacher, password_hash).await
    }

    async fn get_teacher_by_id(&self, id: &str) -> Result<Option<Teacher>> {
        self.get_teacher_by_id_impl(id).await
    }

    async fn list_teachers_with_pagination(
        &self,
        query: TeacherListParams,
    ) -> Result<PaginatedResponse<Teacher>> {
        self.list_teachers_with_pagination_impl(query).await
    }

    async fn update_teacher(
        &self,
        id: &str,
        update: UpdateTeacherRequest,
        password_hash: Option<String>,
    ) -> Result<Option<Teacher>> {
        self.update_teacher_impl(id, update, password_hash).await
    }

    async fn delete_teacher(&self, id: &str) -> Result<bool> {
        self.delete_teacher_impl(id).await
    }

    // 职员模块
    async fn create_staff(&self, staff: CreateStaffRequest) -> Result<Staff> {
        self.create_staff_impl(staff).await
    }

    async fn get_staff_by_id(&self, id: &str) -> Result<Option<Staff>> {
        self.get_staff_by_id_impl(id).await
    }

    async fn list_staff_with_pagination(
        &self,
        query: StaffListParams,
    ) -> Result<PaginatedResponse<Staff>> {
        self.list_staff_with_pagination_impl(query).await
    }

    async fn update_staff(&self, id: &str, update: UpdateStaffRequest) -> Result<Option<Staff>> {
        self.update_staff_impl(id, update).await
    }

    async fn delete_staff(&self, id: &str) -> Result<bool> {
        self.delete_staff_impl(id).await
    }

    // 班次模块
    async fn create_batch(&self, batch: CreateBatchRequest) -> Result<Batch> {
        self.create_batch_impl(batch).await
    }

    async fn get_batch_by_id(&self, id: &str) -> Result<Option<Batch>> {
        self.get_batch_by_id_impl(id).await
    }

    async fn list_batches_with_pagination(
        &self,
        query: BatchListParams,
    ) -> Result<PaginatedResponse<Batch>> {
        self.list_batches_with_pagination_impl(query).await
    }

    async fn update_batch(&self, id: &str, update: UpdateBatchRequest) -> Result<Option<Batch>> {
        self.update_batch_impl(id, update).await
    }

    async fn delete_batch(&self, id: &str) -> Result<bool> {
        self.delete_batch_impl(id).await
    }

    // 报名模块
    async fn enroll_students(
        &self,
        batch_id: &str,
        student_ids: Vec<String>,
    ) -> Result<Option<EnrollmentResult>> {
        self.enroll_students_impl(batch_id, student_ids).await
    }

    async fn unenroll_student(&self, batch_id: &str, student_id: &str) -> Result<bool> {
        self.unenroll_student_impl(batch_id, student_id).await
    }

    async fn list_batch_students(&self, batch_id: &str) -> Result<Vec<Student>> {
        self.list_batch_students_impl(batch_id).await
    }

    async fn list_available_students(&self, batch_id: &str) -> Result<Vec<Student>> {
        self.list_available_students_impl(batch_id).await
    }

    // 学生模块
    async fn create_student(&self, student: CreateStudentRequest) -> Result<Student> {
        self.create_student_impl(student).await
    }

    async fn get_student_by_id(&self, id: &str) -> Result<Option<Student>> {
        self.get_student_by_id_impl(id).await
    }

    async fn list_students_with_pagination(
        &self,
        query: StudentListParams,
    ) -> Result<PaginatedResponse<Student>> {
        self.list_students_with_pagination_impl(query).await
    }

    async fn update_student(
        &self,
        id: &str,
        update: UpdateStudentRequest,
    ) -> Result<Option<Student>> {
        self.update_student_impl(id, update).await
    }

    async fn delete_student(&self, id: &str) -> Result<bool> {
        self.delete_student_impl(id).await
    }

    // 公告模块
    async fn create_announcement(
        &self,
        announcement: CreateAnnouncementRequest,
    ) -> Result<Announcement> {
        self.create_announcement_impl(announcement).await
    }

    async fn get_announcement_by_id(&self, id: &str) -> Result<Option<Announcement>> {
        self.get_announcement_by_id_impl(id).await
    }

    async fn list_announcements_with_pagination(
        &self,
        query: AnnouncementListParams,
    ) -> Result<PaginatedResponse<Announcement>> {
        self.list_announcements_with_pagination_impl(query).await
    }

    async fn update_announcement(
        &self,
        id: &str,
        update: UpdateAnnouncementRequest,
    ) -> Result<Option<Announcement>> {
        self.update_announcement_impl(id, update).await
    }

    async fn delete_announcement(&self, id: &str) -> Result<bool> {
        self.delete_announcement_impl(id).await
    }

    // 缴费模块
    async fn create_payment(&self, payment: CreatePaymentRequest) -> Result<Payment> {
        self.create_payment_impl(payment).await
    }

    async fn get_payment_by_id(&self, id: &str) -> Result<Option<Payment>> {
        self.get_payment_by_id_impl(id).await
    }

    async fn list_payments_with_pagination(
        &self,
        query: PaymentListParams,
    ) -> Result<PaginatedResponse<Payment>> {
        self.list_payments_with_pagination_impl(query).await
    }

    async fn update_payment(
        &self,
        id: &str,
        update: UpdatePaymentRequest,
    ) -> Result<Option<Payment>> {
        self.update_payment_impl(id, update).await
    }

    async fn delete_payment(&self, id: &str) -> Result<bool> {
        self.delete_payment_impl(id).await
    }

    // 文件模块
    async fn create_file(
        &self,
        original_name: &str,
        stored_name: &str,
        file_size: i64,
        content_type: &str,
        uploaded_by: &str,
    ) -> Result<StoredFile> {
        self.create_file_impl(original_name, stored_name, file_size, content_type, uploaded_by)
            .await
    }

    async fn get_file_by_id(&self, id: &str) -> Result<Option<StoredFile>> {
        self.get_file_by_id_impl(id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_database_url() {
        assert_eq!(
            SeaOrmStorage::build_database_url("sqlite::memory:").unwrap(),
            "sqlite::memory:"
        );
        assert_eq!(
            SeaOrmStorage::build_database_url("data/tuition.db").unwrap(),
            "sqlite://data/tuition.db?mode=rwc"
        );
        assert_eq!(
            SeaOrmStorage::build_database_url(":memory:").unwrap(),
            "sqlite::memory:"
        );
        assert!(SeaOrmStorage::build_database_url("postgres://u:p@localhost/db").is_ok());
        assert!(SeaOrmStorage::build_database_url("mongodb://localhost").is_err());
    }
}
