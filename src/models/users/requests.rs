use serde::Deserialize;

use super::entities::UserRole;

// 用户创建表单（原始字符串字段，显式解析校验）
#[derive(Debug, Clone, Deserialize)]
pub struct CreateUserForm {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub role: String,
}

// 用户创建请求（存储层）
#[derive(Debug, Clone)]
pub struct NewUser {
    pub username: String,
    pub email: String,
    pub password_hash: String,
    pub first_name: String,
    pub last_name: String,
    pub role: UserRole,
}
