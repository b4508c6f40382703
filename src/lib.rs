//! 辅导中心管理系统后端
//!
//! 基于 Actix Web 与 SeaORM 的 REST 服务，管理年级、科目、教师、职员、
//! 班次、学生、公告与缴费记录，并内嵌管理后台前端。
//!
//! # 架构
//! - `cache`: 缓存层（Moka/Redis）
//! - `client`: 类型化 API 客户端（会话、资源状态、报名流程）
//! - `config`: 配置管理
//! - `entity`: SeaORM 数据库实体
//! - `errors`: 统一错误处理
//! - `middlewares`: 认证、授权与限流中间件
//! - `models`: 数据模型定义
//! - `routes`: API 路由层
//! - `runtime`: 运行时生命周期管理
//! - `services`: 业务逻辑层
//! - `storage`: 数据存储层（SeaORM）
//! - `utils`: 工具函数
//! - `validation`: 声明式字段校验

pub mod cache;
pub mod client;
pub mod config;
pub mod entity;
pub mod errors;
pub mod middlewares;
pub mod models;
pub mod routes;
pub mod runtime;
pub mod services;
pub mod storage;
pub mod utils;
pub mod validation;
