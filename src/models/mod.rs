pub mod auth;
pub mod common;
pub mod courses;
pub mod enrollments;
pub mod grades;
pub mod groups;
pub mod lessons;
pub mod users;

pub use common::error_code::ErrorCode;
pub use common::response::ApiResponse;

/// 应用启动时间
#[derive(Debug, Clone)]
pub struct AppStartTime {
    pub start_datetime: chrono::DateTime<chrono::Utc>,
}
