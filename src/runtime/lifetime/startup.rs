use crate::models::users::{entities::UserRole, requests::NewUser};
use crate::storage::Storage;
use crate::utils::password::hash_password;
use std::sync::Arc;
use tracing::{debug, info, warn};

pub struct StartupContext {
    pub storage: Arc<dyn Storage>,
}

/// 初始化固定种子账号
/// 用户表为空时插入 admin / lecturer1 / student1 三个账号
async fn seed_accounts(storage: &Arc<dyn Storage>) {
    match storage.count_users().await {
        Ok(count) if count > 0 => {
            debug!("Database already has {} user(s), skipping seed", count);
            return;
        }
        Ok(_) => {
            info!("No users found in database, creating seed accounts...");
        }
        Err(e) => {
            warn!("Failed to count users: {}, skipping seed", e);
            return;
        }
    }

    let seeds = [
        NewUser {
            username: "admin".to_string(),
            email: "admin@uni.example".to_string(),
            password_hash: hash_password("admin123"),
            first_name: "System".to_string(),
            last_name: "Administrator".to_string(),
            role: UserRole::Admin,
        },
        NewUser {
            username: "lecturer1".to_string(),
            email: "lecturer1@uni.example".to_string(),
            password_hash: hash_password("pass123"),
            first_name: "Anna".to_string(),
            last_name: "Nowak".to_string(),
            role: UserRole::Lecturer,
        },
        NewUser {
            username: "student1".to_string(),
            email: "student1@uni.example".to_string(),
            password_hash: hash_password("pass123"),
            first_name: "Jan".to_string(),
            last_name: "Kowalski".to_string(),
            role: UserRole::Student,
        },
    ];

    for seed in seeds {
        let username = seed.username.clone();
        match storage.create_user(seed).await {
            Ok(user) => {
                info!(
                    "Seed account created (ID: {}, username: {}, role: {})",
                    user.id, user.username, user.role
                );
            }
            Err(e) => {
                warn!("Failed to create seed account {}: {}", username, e);
            }
        }
    }
}

/// 准备服务器启动的上下文
/// 包括存储初始化与种子账号
pub async fn prepare_server_startup() -> StartupContext {
    let storage = crate::storage::create_storage()
        .await
        .expect("Failed to create storage backend");
    warn!("Storage backend initialized and migrations completed");

    // 初始化种子账号（如果需要）
    seed_accounts(&storage).await;

    StartupContext { storage }
}
