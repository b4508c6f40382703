use std::sync::Arc;

use tokio::signal;
use tracing::{error, warn};

use crate::cache::ObjectCache;

/// 等待 Ctrl+C
pub async fn listen_for_shutdown() {
    if let Err(e) = signal::ctrl_c().await {
        error!("Failed to listen for Ctrl+C: {}", e);
        return;
    }
    warn!("Shutdown signal received, initiating graceful shutdown...");
}

/// 服务器停止后清理缓存中的登录会话
pub async fn cleanup(cache: Arc<dyn ObjectCache>) {
    cache.invalidate_all().await;
    warn!("Cached sessions cleared, shutdown complete");
}
