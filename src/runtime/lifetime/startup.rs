use crate::config::AppConfig;
use crate::errors::Result;
use crate::models::users::requests::CreateUserRequest;
use crate::storage::Storage;
use std::sync::Arc;
use tracing::{debug, info, warn};

pub struct StartupContext {
    pub storage: Arc<dyn Storage>,
}

/// 初始化默认用户
/// 如果数据库中没有任何用户，则创建一个默认用户，课程需要归属于某个用户
pub async fn seed_default_user(storage: &Arc<dyn Storage>, username: &str) {
    // 检查是否已有用户
    match storage.count_users().await {
        Ok(count) if count > 0 => {
            debug!("Database already has {} user(s), skipping user seed", count);
            return;
        }
        Ok(_) => {
            info!("No users found in database, creating default user...");
        }
        Err(e) => {
            warn!("Failed to count users: {}, skipping user seed", e);
            return;
        }
    }

    let request = CreateUserRequest {
        username: username.to_string(),
    };

    match storage.create_user(request).await {
        Ok(user) => {
            info!(
                "Default user created successfully (ID: {}, username: {})",
                user.id, user.username
            );
        }
        Err(e) => {
            warn!("Failed to create default user: {}", e);
        }
    }
}

/// 准备服务器启动的上下文
pub async fn prepare_server_startup() -> Result<StartupContext> {
    let config = AppConfig::get();

    let storage = crate::storage::create_storage().await?;
    warn!("Storage backend initialized and migrations completed");

    // 初始化默认用户（如果需要）
    seed_default_user(&storage, &config.app.default_username).await;

    Ok(StartupContext { storage })
}
