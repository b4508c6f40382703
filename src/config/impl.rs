use config::{Config, ConfigError, Environment, File};
use std::sync::OnceLock;

use super::AppConfig;
use crate::utils::jwt::parse_expiry;

static APP_CONFIG: OnceLock<AppConfig> = OnceLock::new();

/// 启动时必须提供的环境变量
pub const REQUIRED_ENV_VARS: [&str; 4] = ["DATABASE_URL", "JWT_SECRET", "JWT_EXPIRE", "PORT"];

impl AppConfig {
    /// 加载配置
    pub fn load() -> Result<Self, ConfigError> {
        let mut builder = Config::builder()
            // 首先加载默认配置文件
            .add_source(File::with_name("config").required(false))
            // 然后根据环境加载特定配置文件
            .add_source(
                File::with_name(&format!(
                    "config.{}",
                    std::env::var("APP_ENV").unwrap_or_else(|_| "development".into())
                ))
                .required(false),
            )
            // 最后加载环境变量覆盖
            .add_source(
                Environment::with_prefix("TUITION")
                    .separator("__")
                    .try_parsing(true),
            );

        // 支持从环境变量加载
        builder = builder
            .set_override_option("app.environment", std::env::var("APP_ENV").ok())?
            .set_override_option("app.log_level", std::env::var("LOG_LEVEL").ok())?
            .set_override_option("server.host", std::env::var("SERVER_HOST").ok())?
            .set_override_option("server.port", std::env::var("PORT").ok())?
            .set_override_option("server.unix_socket_path", std::env::var("UNIX_SOCKET").ok())?
            .set_override_option("server.workers", std::env::var("CPU_COUNT").ok())?
            .set_override_option("jwt.secret", std::env::var("JWT_SECRET").ok())?
            .set_override_option("jwt.expire", std::env::var("JWT_EXPIRE").ok())?
            .set_override_option("database.url", std::env::var("DATABASE_URL").ok())?
            .set_override_option("cache.type", std::env::var("CACHE_TYPE").ok())?
            .set_override_option("cache.redis.url", std::env::var("REDIS_URL").ok())?
            .set_override_option("cors.allowed_origin", std::env::var("CLIENT_BASE_URL").ok())?
            .set_override_option("upload.max_size", std::env::var("MAX_FILE_SIZE").ok())?
            .set_override_option("upload.dir", std::env::var("UPLOAD_PATH").ok())?
            .set_override_option("admin.email", std::env::var("ADMIN_EMAIL").ok())?;

        let config = builder.build()?;
        let mut app_config: AppConfig = config.try_deserialize()?;

        // 处理工作线程数
        if app_config.server.workers == 0 {
            app_config.server.workers = num_cpus::get().min(app_config.server.max_workers);
        }

        Ok(app_config)
    }

    /// 校验必填配置项
    ///
    /// 数据库地址、JWT 密钥、JWT 有效期与端口缺一不可。
    pub fn validate(&self) -> Result<(), ConfigError> {
        // 与 REQUIRED_ENV_VARS 一一对应
        let present = [
            !self.database.url.trim().is_empty(),
            !self.jwt.secret.trim().is_empty(),
            !self.jwt.expire.trim().is_empty(),
            self.server.port != 0 || self.unix_socket_path().is_some(),
        ];
        let missing: Vec<&str> = REQUIRED_ENV_VARS
            .iter()
            .zip(present)
            .filter(|(_, present)| !present)
            .map(|(var, _)| *var)
            .collect();
        if !missing.is_empty() {
            return Err(ConfigError::Message(format!(
                "Missing required configuration: {}",
                missing.join(", ")
            )));
        }

        if parse_expiry(&self.jwt.expire).is_none() {
            return Err(ConfigError::Message(format!(
                "Invalid JWT_EXPIRE value: '{}' (expected e.g. 3600, 60m, 12h, 30d)",
                self.jwt.expire
            )));
        }
        Ok(())
    }

    /// 获取全局配置实例
    pub fn get() -> &'static AppConfig {
        APP_CONFIG.get_or_init(|| {
            Self::load().unwrap_or_else(|e| {
                eprintln!("Failed to load configuration: {e}");
                std::process::exit(1);
            })
        })
    }

    /// 初始化配置 (在应用启动时调用)
    pub fn init() -> Result<(), ConfigError> {
        let config = Self::load()?;
        config.validate()?;
        APP_CONFIG
            .set(config)
            .map_err(|_| ConfigError::Message("Configuration already initialized".to_string()))?;
        Ok(())
    }

    /// 检查是否为开发环境
    pub fn is_development(&self) -> bool {
        self.app.environment == "development"
    }

    /// 获取服务器绑定地址
    pub fn server_bind_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    /// 获取 Unix 套接字路径 (如果配置了)
    pub fn unix_socket_path(&self) -> Option<&str> {
        if self.server.unix_socket_path.is_empty() {
            None
        } else {
            Some(&self.server.unix_socket_path)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete_config() -> AppConfig {
        let mut config = AppConfig::default();
        config.database.url = "sqlite::memory:".to_string();
        config.jwt.secret = "secret".to_string();
        config.jwt.expire = "7d".to_string();
        config.server.port = 5000;
        config
    }

    #[test]
    fn test_complete_config_is_valid() {
        assert!(complete_config().validate().is_ok());
    }

    #[test]
    fn test_missing_values_are_listed() {
        let config = AppConfig::default();
        let err = config.validate().unwrap_err().to_string();
        for var in REQUIRED_ENV_VARS {
            assert!(err.contains(var), "{var} not reported in: {err}");
        }
    }

    #[test]
    fn test_only_absent_values_are_listed() {
        let mut config = complete_config();
        config.jwt.secret = "  ".to_string();
        let err = config.validate().unwrap_err().to_string();
        assert!(err.contains("JWT_SECRET"));
        assert!(!err.contains("DATABASE_URL"));
        assert!(!err.contains("PORT"));
    }

    #[test]
    fn test_invalid_expiry_is_rejected() {
        let mut config = complete_config();
        config.jwt.expire = "forever".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.upload.dir, "uploads");
        assert_eq!(config.upload.max_size, 5 * 1024 * 1024);
        assert_eq!(config.app.log_level, "info");
        assert_eq!(config.cors.allowed_origin, "http://localhost:3000");
    }
}
