use std::sync::Arc;

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

use crate::errors::Result;

pub mod sea_orm_storage;

/// 可被其他记录引用的资源表
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefTable {
    Standards,
    Subjects,
    Teachers,
    Staff,
    Students,
    Batches,
}

#[async_trait::async_trait]
pub trait Storage: Send + Sync {
    /// 登录账号
    // 创建账号
    async fn create_user(&self, user: CreateUserRequest) -> Result<User>;
    // 通过ID获取账号
    async fn get_user_by_id(&self, id: &str) -> Result<Option<User>>;
    // 通过邮箱获取账号
    async fn get_user_by_email(&self, email: &str) -> Result<Option<User>>;
    // 更新账号
    async fn update_user(&self, id: &str, update: UpdateUserRequest) -> Result<Option<User>>;
    // 更新最后登录时间
    async fn update_last_login(&self, id: &str) -> Result<bool>;
    // 统计账号数量
    async fn count_users(&self) -> Result<u64>;

    /// 引用检查：返回 `ids` 中在表里不存在的 ID（保持输入顺序）
    async fn find_missing_ids(&self, table: RefTable, ids: &[String]) -> Result<Vec<String>>;

    /// 年级
    async fn create_standard(&self, standard: CreateStandardRequest) -> Result<Standard>;
    async fn get_standard_by_id(&self, id: &str) -> Result<Option<Standard>>;
    async fn list_standards_with_pagination(
        &self,
        query: StandardListParams,
    ) -> Result<PaginatedResponse<Standard>>;
    async fn update_standard(
        &self,
        id: &str,
        update: UpdateStandardRequest,
    ) -> Result<Option<Standard>>;
    async fn delete_standard(&self, id: &str) -> Result<bool>;

    /// 科目
    async fn create_subject(&self, subject: CreateSubjectRequest) -> Result<Subject>;
    async fn get_subject_by_id(&self, id: &str) -> Result<Option<Subject>>;
    async fn list_subjects_with_pagination(
        &self,
        query: SubjectListParams,
    ) -> Result<PaginatedResponse<Subject>>;
    async fn update_subject(
        &self,
        id: &str,
        update: UpdateSubjectRequest,
    ) -> Result<Option<Subject>>;
    // 删除科目，并从年级和教师的科目列表中移除
    async fn delete_subject(&self, id: &str) -> Result<bool>;

    /// 教师（同时维护其登录账号）
    async fn create_teacher(
        &self,
        teacher: CreateTeacherRequest,
        password_hash: String,
    ) -> Result<Teacher>;
    async fn get_teacher_by_id(&self, id: &str) -> Result<Option<Teacher>>;
    async fn list_teachers_with_pagination(
        &self,
        query: TeacherListParams,
    ) -> Result<PaginatedResponse<Teacher>>;
    async fn update_teacher(
        &self,
        id: &str,
        update: UpdateTeacherRequest,
        password_hash: Option<String>,
    ) -> Result<Option<Teacher>>;
    async fn delete_teacher(&self, id: &str) -> Result<bool>;

    /// 职员
    async fn create_staff(&self, staff: CreateStaffRequest) -> Result<Staff>;
    async fn get_staff_by_id(&self, id: &str) -> Result<Option<Staff>>;
    async fn list_staff_with_pagination(
        &self,
        query: StaffListParams,
    ) -> Result<PaginatedResponse<Staff>>;
    async fn update_staff(&self, id: &str, update: UpdateStaffRequest) -> Result<Option<Staff>>;
    async fn delete_staff(&self, id: &str) -> Result<bool>;

    /// 班次
    async fn create_batch(&self, batch: CreateBatchRequest) -> Result<Batch>;
    async fn get_batch_by_id(&self, id: &str) -> Result<Option<Batch>>;
    async fn list_batches_with_pagination(
        &self,
        query: BatchListParams,
    ) -> Result<PaginatedResponse<Batch>>;
    async fn update_batch(&self, id: &str, update: UpdateBatchRequest) -> Result<Option<Batch>>;
    async fn delete_batch(&self, id: &str) -> Result<bool>;

    /// 报名
    // 批量报名，班次不存在时返回 None
    async fn enroll_students(
        &self,
        batch_id: &str,
        student_ids: Vec<String>,
    ) -> Result<Option<EnrollmentResult>>;
    // 取消报名
    async fn unenroll_student(&self, batch_id: &str, student_id: &str) -> Result<bool>;
    // 班次已报名学生
    async fn list_batch_students(&self, batch_id: &str) -> Result<Vec<Student>>;
    // 尚未报名该班次的学生
    async fn list_available_students(&self, batch_id: &str) -> Result<Vec<Student>>;

    /// 学生
    async fn create_student(&self, student: CreateStudentRequest) -> Result<Student>;
    async fn get_student_by_id(&self, id: &str) -> Result<Option<Student>>;
    async fn list_students_with_pagination(
        &self,
        query: StudentListParams,
    ) -> Result<PaginatedResponse<Student>>;
    async fn update_student(
        &self,
        id: &str,
        update: UpdateStudentRequest,
    ) -> Result<Option<Student>>;
    async fn delete_student(&self, id: &str) -> Result<bool>;

    /// 公告
    async fn create_announcement(
        &self,
        announcement: CreateAnnouncementRequest,
    ) -> Result<Announcement>;
    async fn get_announcement_by_id(&self, id: &str) -> Result<Option<Announcement>>;
    async fn list_announcements_with_pagination(
        &self,
        query: AnnouncementListParams,
    ) -> Result<PaginatedResponse<Announcement>>;
    async fn update_announcement(
        &self,
        id: &str,
        update: UpdateAnnouncementRequest,
    ) -> Result<Option<Announcement>>;
    async fn delete_announcement(&self, id: &str) -> Result<bool>;

    /// 缴费
    async fn create_payment(&self, payment: CreatePaymentRequest) -> Result<Payment>;
    async fn get_payment_by_id(&self, id: &str) -> Result<Option<Payment>>;
    async fn list_payments_with_pagination(
        &self,
        query: PaymentListParams,
    ) -> Result<PaginatedResponse<Payment>>;
    async fn update_payment(
        &self,
        id: &str,
        update: UpdatePaymentRequest,
    ) -> Result<Option<Payment>>;
    async fn delete_payment(&self, id: &str) -> Result<bool>;

    /// 文件
    async fn create_file(
        &self,
        original_name: &str,
        stored_name: &str,
        file_size: i64,
        content_type: &str,
        uploaded_by: &str,
    ) -> Result<StoredFile>;
    async fn get_file_by_id(&self, id: &str) -> Result<Option<StoredFile>>;
}

pub async fn create_storage() -> Result<Arc<dyn Storage>> {
    let storage = sea_orm_storage::SeaOrmStorage::new_async().await?;
    Ok(Arc::new(storage))
}
