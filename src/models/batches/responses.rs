use serde::{Deserialize, Serialize};
use ts_rs::TS;

crate::string_enum! {
    /// 单个学生的报名结果
    #[ts(export, export_to = "../frontend/src/types/generated/batch.ts")]
    EnrollmentStatus {
        Enrolled => "enrolled",
        NotFound => "not_found",
        AlreadyEnrolled => "already_enrolled",
        DuplicateInRequest => "duplicate_in_request",
        BatchFull => "batch_full",
    }
}

impl EnrollmentStatus {
    pub fn message(&self) -> &'static str {
        match self {
            EnrollmentStatus::Enrolled => "Student enrolled",
            EnrollmentStatus::NotFound => "Student not found",
            EnrollmentStatus::AlreadyEnrolled => "Student is already enrolled in this batch",
            EnrollmentStatus::DuplicateInRequest => "Student ID appears more than once in request",
            EnrollmentStatus::BatchFull => "Batch has reached its capacity",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../frontend/src/types/generated/batch.ts")]
pub struct EnrollmentOutcome {
    pub student_id: String,
    pub status: EnrollmentStatus,
    pub message: String,
}

impl EnrollmentOutcome {
    pub fn new(student_id: impl Into<String>, status: EnrollmentStatus) -> Self {
        Self {
            student_id: student_id.into(),
            status,
            message: status.message().to_string(),
        }
    }

    pub fn is_enrolled(&self) -> bool {
        self.status == EnrollmentStatus::Enrolled
    }
}

// 批量报名结果，按请求顺序逐一给出
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../frontend/src/types/generated/batch.ts")]
pub struct EnrollmentResult {
    pub batch_id: String,
    pub capacity: i32,
    pub enrolled_count: i64,
    pub results: Vec<EnrollmentOutcome>,
}

impl EnrollmentResult {
    pub fn succeeded(&self) -> impl Iterator<Item = &EnrollmentOutcome> {
        self.results.iter().filter(|r| r.is_enrolled())
    }

    pub fn failed(&self) -> impl Iterator<Item = &EnrollmentOutcome> {
        self.results.iter().filter(|r| !r.is_enrolled())
    }
}
