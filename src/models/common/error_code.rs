/// 业务错误码
///
/// - `0` 成功
/// - `1xxx` 通用错误
/// - `2xxx` 认证与授权
/// - `3xxx` 各业务资源
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    Success = 0,

    BadRequest = 1000,
    ValidationFailed = 1001,
    InvalidId = 1002,
    NotFound = 1004,
    Conflict = 1009,
    RateLimitExceeded = 1029,
    InternalServerError = 1500,

    Unauthorized = 2000,
    AuthFailed = 2001,
    PermissionDenied = 2003,
    AccountInactive = 2004,

    StandardNotFound = 3000,
    SubjectNotFound = 3100,
    SubjectInUse = 3101,
    TeacherNotFound = 3200,
    StaffNotFound = 3300,
    BatchNotFound = 3400,
    BatchClosed = 3401,
    BatchCapacityTooLow = 3402,
    StudentNotFound = 3500,
    StudentNotEnrolled = 3501,
    AnnouncementNotFound = 3600,
    PaymentNotFound = 3700,
    FileNotFound = 3800,
    FileUploadFailed = 3801,
    FileTypeNotAllowed = 3802,
    FileSizeExceeded = 3803,
    MultifileUploadNotAllowed = 3804,
}

impl ErrorCode {
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}
