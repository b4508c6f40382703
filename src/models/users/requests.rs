use super::entities::{UserRole, UserStatus};

// 创建登录账号（密码已哈希）
#[derive(Debug, Clone)]
pub struct CreateUserRequest {
    pub email: String,
    pub password_hash: String,
    pub name: String,
    pub role: UserRole,
}

// 更新登录账号，None 表示不修改
#[derive(Debug, Clone, Default)]
pub struct UpdateUserRequest {
    pub email: Option<String>,
    pub password_hash: Option<String>,
    pub name: Option<String>,
    pub status: Option<UserStatus>,
}
