//! 登录会话
//!
//! `SessionContext` 持有当前令牌与账号，构造时从 `SessionStore` 恢复，
//! 登录时写入，登出或收到 401 时清除。

use serde::{Deserialize, Serialize};
use std::io::Write;
use std::path::PathBuf;
use std::sync::{Arc, Mutex, RwLock};

use super::error::ClientError;
use crate::models::users::entities::User;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    pub token: String,
    pub user: User,
}

/// 会话持久化
pub trait SessionStore: Send + Sync {
    fn load(&self) -> Result<Option<Session>, ClientError>;
    fn save(&self, session: &Session) -> Result<(), ClientError>;
    fn clear(&self) -> Result<(), ClientError>;
}

/// 进程内存储，进程退出即丢失
#[derive(Default)]
pub struct MemorySessionStore {
    slot: Mutex<Option<Session>>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_session(session: Session) -> Self {
        Self {
            slot: Mutex::new(Some(session)),
        }
    }
}

impl SessionStore for MemorySessionStore {
    fn load(&self) -> Result<Option<Session>, ClientError> {
        let slot = self
            .slot
            .lock()
            .map_err(|e| ClientError::Session(e.to_string()))?;
        Ok(slot.clone())
    }

    fn save(&self, session: &Session) -> Result<(), ClientError> {
        let mut slot = self
            .slot
            .lock()
            .map_err(|e| ClientError::Session(e.to_string()))?;
        *slot = Some(session.clone());
        Ok(())
    }

    fn clear(&self) -> Result<(), ClientError> {
        let mut slot = self
            .slot
            .lock()
            .map_err(|e| ClientError::Session(e.to_string()))?;
        *slot = None;
        Ok(())
    }
}

/// JSON 文件存储，内容为 `{"token": ..., "user": ...}`
pub struct FileSessionStore {
    path: PathBuf,
}

impl FileSessionStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl SessionStore for FileSessionStore {
    fn load(&self) -> Result<Option<Session>, ClientError> {
        let raw = match std::fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };
        // 损坏的会话文件按未登录处理
        Ok(serde_json::from_str(&raw).ok())
    }

    fn save(&self, session: &Session) -> Result<(), ClientError> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent)?;
        }
        let bytes = serde_json::to_vec_pretty(session)?;

        let mut options = std::fs::OpenOptions::new();
        options.write(true).create(true).truncate(true);
        // 文件里有 bearer 令牌，仅属主可读写
        #[cfg(unix)]
        std::os::unix::fs::OpenOptionsExt::mode(&mut options, 0o600);
        let mut file = options.open(&self.path)?;
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            // 已存在的文件不受 mode 影响，需要单独收紧
            file.set_permissions(std::fs::Permissions::from_mode(0o600))?;
        }
        file.write_all(&bytes)?;
        Ok(())
    }

    fn clear(&self) -> Result<(), ClientError> {
        match std::fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

/// 当前会话，所有请求共享
pub struct SessionContext {
    store: Arc<dyn SessionStore>,
    current: RwLock<Option<Session>>,
}

impl SessionContext {
    pub fn new(store: Arc<dyn SessionStore>) -> Result<Self, ClientError> {
        let current = store.load()?;
        Ok(Self {
            store,
            current: RwLock::new(current),
        })
    }

    pub fn token(&self) -> Option<String> {
        self.current
            .read()
            .ok()
            .and_then(|s| s.as_ref().map(|s| s.token.clone()))
    }

    pub fn user(&self) -> Option<User> {
        self.current
            .read()
            .ok()
            .and_then(|s| s.as_ref().map(|s| s.user.clone()))
    }

    pub fn is_authenticated(&self) -> bool {
        self.token().is_some()
    }

    pub fn set(&self, session: Session) -> Result<(), ClientError> {
        self.store.save(&session)?;
        let mut current = self
            .current
            .write()
            .map_err(|e| ClientError::Session(e.to_string()))?;
        *current = Some(session);
        Ok(())
    }

    pub fn clear(&self) -> Result<(), ClientError> {
        if let Ok(mut current) = self.current.write() {
            *current = None;
        }
        self.store.clear()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::users::entities::{UserRole, UserStatus};

    fn session(token: &str) -> Session {
        let now = chrono::Utc::now();
        Session {
            token: token.to_string(),
            user: User {
                id: "u-1".to_string(),
                email: "admin@tuition.local".to_string(),
                password_hash: String::new(),
                name: "Admin".to_string(),
                role: UserRole::Admin,
                status: UserStatus::Active,
                last_login: None,
                created_at: now,
                updated_at: now,
            },
        }
    }

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir()
            .join(format!("tuition-session-{}", uuid::Uuid::new_v4()))
            .join(name)
    }

    #[cfg(unix)]
    #[test]
    fn test_session_file_is_owner_only() {
        use std::os::unix::fs::PermissionsExt;

        let path = temp_path("session.json");
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(&path, "{}").unwrap();
        std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o644)).unwrap();

        let store = FileSessionStore::new(&path);
        store.save(&session("t-0600")).unwrap();

        let mode = std::fs::metadata(&path).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o600);
        assert_eq!(store.load().unwrap().unwrap().token, "t-0600");
        std::fs::remove_dir_all(path.parent().unwrap()).ok();
    }

    #[test]
    fn test_context_hydrates_from_store() {
        let store = Arc::new(MemorySessionStore::with_session(session("t-1")));
        let context = SessionContext::new(store).unwrap();
        assert_eq!(context.token().as_deref(), Some("t-1"));
        assert_eq!(context.user().unwrap().email, "admin@tuition.local");
    }

    #[test]
    fn test_clear_empties_context_and_store() {
        let store = Arc::new(MemorySessionStore::new());
        let context = SessionContext::new(store.clone()).unwrap();
        context.set(session("t-2")).unwrap();
        assert!(store.load().unwrap().is_some());

        context.clear().unwrap();
        assert!(!context.is_authenticated());
        assert!(store.load().unwrap().is_none());
    }

    #[test]
    fn test_file_store_persists_across_contexts() {
        let path = temp_path("session.json");
        let store = Arc::new(FileSessionStore::new(&path));
        SessionContext::new(store.clone())
            .unwrap()
            .set(session("t-3"))
            .unwrap();

        let reopened = SessionContext::new(Arc::new(FileSessionStore::new(&path))).unwrap();
        assert_eq!(reopened.token().as_deref(), Some("t-3"));

        // 密码哈希不落盘
        let raw = std::fs::read_to_string(&path).unwrap();
        assert!(!raw.contains("passwordHash"));

        reopened.clear().unwrap();
        assert!(!path.exists());
        store.clear().unwrap();
    }

    #[test]
    fn test_corrupt_file_loads_as_logged_out() {
        let path = temp_path("broken.json");
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(&path, "{not json").unwrap();
        assert!(FileSessionStore::new(&path).load().unwrap().is_none());
    }
}
