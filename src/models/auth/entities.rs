use serde::{Deserialize, Serialize};

use crate::models::users::entities::UserRole;

/// 请求范围内的会话身份
///
/// 由 RequireSession 中间件从已验证的会话 Cookie 构造，
/// 注入请求扩展，处理器按请求取用，不读取任何全局状态。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionUser {
    pub id: i64,
    pub username: String,
    pub role: UserRole,
}
