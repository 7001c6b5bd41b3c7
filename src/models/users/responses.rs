use serde::Serialize;

use super::entities::User;

// 用户管理视图
#[derive(Debug, Serialize)]
pub struct UsersPage {
    pub users: Vec<User>,
}
