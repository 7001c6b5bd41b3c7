use serde::Serialize;

use crate::models::users::entities::User;

// 登录页视图
#[derive(Debug, Serialize)]
pub struct LoginPage {
    pub system_name: String,
}

// 登录后主页视图
#[derive(Debug, Serialize)]
pub struct DashboardPage {
    pub user: User,
}

// 管理员首页统计
#[derive(Debug, Serialize)]
pub struct AdminStats {
    pub students: u64,
    pub lecturers: u64,
    pub courses: u64,
}

// 管理员首页视图
#[derive(Debug, Serialize)]
pub struct AdminPanelPage {
    pub user: User,
    pub stats: AdminStats,
}
