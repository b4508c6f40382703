use crate::cache::ObjectCache;
use crate::cache::register::create_object_cache;
use crate::config::AppConfig;
use crate::errors::{Result, TuitionError};
use crate::models::users::entities::UserRole;
use crate::models::users::requests::CreateUserRequest;
use crate::storage::Storage;
use crate::utils::password::hash_password;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// 进程内缓存，其他后端不可用时使用
const FALLBACK_CACHE: &str = "moka";

pub struct StartupContext {
    pub storage: Arc<dyn Storage>,
    pub cache: Arc<dyn ObjectCache>,
}

/// 创建缓存实例，配置的后端不可用时回退到内存缓存
async fn create_cache() -> Result<Arc<dyn ObjectCache>> {
    let config = AppConfig::get();
    let cache_type = config.cache.cache_type.as_str();

    warn!("Attempting to create {} cache backend", cache_type);

    match create_object_cache(cache_type).await {
        Ok(cache) => {
            warn!("Successfully created {} cache backend", cache_type);
            return Ok(Arc::from(cache));
        }
        Err(e) if cache_type == FALLBACK_CACHE => return Err(e),
        Err(e) => warn!("Failed to create {} cache: {}", cache_type, e),
    }

    warn!("Falling back to Moka (in-memory) cache");
    let cache = create_object_cache(FALLBACK_CACHE).await.map_err(|e| {
        TuitionError::cache_connection(format!(
            "No cache backend available (tried: {cache_type}, {FALLBACK_CACHE}): {e}"
        ))
    })?;
    Ok(Arc::from(cache))
}

/// 生成随机密码
fn generate_random_password(length: usize) -> String {
    use rand::Rng;
    const CHARSET: &[u8] = b"ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnopqrstuvwxyz23456789!@#$%";
    let mut rng = rand::rng();
    (0..length)
        .map(|_| CHARSET[rng.random_range(0..CHARSET.len())] as char)
        .collect()
}

/// 账号表为空时创建默认管理员
///
/// 密码取自 `ADMIN_PASSWORD`，未设置时随机生成并打印到日志。
pub async fn seed_admin(storage: &Arc<dyn Storage>) {
    match storage.count_users().await {
        Ok(count) if count > 0 => {
            debug!(
                "Database already has {} user(s), skipping admin seed",
                count
            );
            return;
        }
        Ok(_) => {
            info!("No users found in database, creating default admin account...");
        }
        Err(e) => {
            warn!("Failed to count users: {}, skipping admin seed", e);
            return;
        }
    }

    let password = std::env::var("ADMIN_PASSWORD")
        .ok()
        .filter(|p| !p.is_empty())
        .unwrap_or_else(|| {
            let pwd = generate_random_password(16);
            warn!("==========================================================");
            warn!("  ADMIN_PASSWORD NOT SET - USING GENERATED PASSWORD");
            warn!("  Generated admin password: {}", pwd);
            warn!("  Please save this password or set ADMIN_PASSWORD");
            warn!("==========================================================");
            pwd
        });

    let password_hash = match hash_password(&password) {
        Ok(hash) => hash,
        Err(e) => {
            warn!("Failed to hash admin password: {}, skipping admin seed", e);
            return;
        }
    };

    let admin = &AppConfig::get().admin;
    let admin_request = CreateUserRequest {
        email: admin.email.clone(),
        password_hash,
        name: admin.name.clone(),
        role: UserRole::Admin,
    };

    match storage.create_user(admin_request).await {
        Ok(user) => {
            info!(
                "Default admin account created (ID: {}, email: {})",
                user.id, user.email
            );
        }
        Err(e) => {
            warn!("Failed to create admin account: {}", e);
        }
    }
}

/// 准备服务器启动的上下文：存储、默认账号、上传目录和缓存
pub async fn prepare_server_startup() -> Result<StartupContext> {
    if rustls::crypto::ring::default_provider()
        .install_default()
        .is_err()
    {
        debug!("rustls crypto provider already installed");
    }

    if cfg!(debug_assertions) {
        crate::cache::register::debug_object_cache_registry();
    }

    let storage = crate::storage::create_storage().await?;
    warn!("Storage backend initialized and migrations completed");

    seed_admin(&storage).await;

    let upload_dir = &AppConfig::get().upload.dir;
    std::fs::create_dir_all(upload_dir)?;
    debug!("Upload directory ready: {}", upload_dir);

    let cache = create_cache().await?;
    warn!("Cache backend initialized");

    Ok(StartupContext { storage, cache })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generated_password_length_and_charset() {
        let password = generate_random_password(16);
        assert_eq!(password.chars().count(), 16);
        assert!(password.chars().all(|c| !matches!(c, '0' | 'O' | 'l' | '1' | 'I')));
    }
}
