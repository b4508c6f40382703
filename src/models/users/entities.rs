use serde::{Deserialize, Serialize};
use ts_rs::TS;

crate::string_enum! {
    /// 登录账号角色
    #[ts(export, export_to = "../frontend/src/types/generated/user.ts")]
    UserRole {
        Admin => "admin",
        Teacher => "teacher",
    }
}

crate::string_enum! {
    #[ts(export, export_to = "../frontend/src/types/generated/user.ts")]
    UserStatus {
        Active => "active",
        Inactive => "inactive",
    }
}

impl UserRole {
    pub fn admin_roles() -> &'static [&'static UserRole] {
        &[&Self::Admin]
    }
}

// 登录账号
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../frontend/src/types/generated/user.ts")]
pub struct User {
    pub id: String,
    pub email: String,
    #[serde(skip_serializing, default)] // 不序列化到JSON响应中
    #[ts(skip)]
    pub password_hash: String,
    pub name: String,
    pub role: UserRole,
    pub status: UserStatus,
    pub last_login: Option<chrono::DateTime<chrono::Utc>>,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

impl User {
    pub fn is_active(&self) -> bool {
        self.status == UserStatus::Active
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_password_hash_is_never_serialized() {
        let now = chrono::Utc::now();
        let user = User {
            id: "u1".to_string(),
            email: "admin@tuition.local".to_string(),
            password_hash: "$argon2id$secret".to_string(),
            name: "Admin".to_string(),
            role: UserRole::Admin,
            status: UserStatus::Active,
            last_login: None,
            created_at: now,
            updated_at: now,
        };
        let json = serde_json::to_string(&user).unwrap();
        assert!(!json.contains("argon2"));
        assert!(json.contains("\"lastLogin\""));
    }
}
