//! 管理后台的类型化 API 客户端
//!
//! - `session`: 会话上下文与持久化
//! - `api`: 附带令牌的请求封装，401 时强制登出
//! - `store`: 各资源的状态容器
//! - `enrollment`: 班次报名流程

pub mod api;
pub mod enrollment;
pub mod error;
pub mod session;
pub mod store;

pub use api::ApiClient;
pub use error::{ClientError, LOGIN_REDIRECT};
pub use session::{FileSessionStore, MemorySessionStore, Session, SessionContext, SessionStore};
pub use store::{Resource, ResourceStore};
