use serde::{Deserialize, Serialize};

// 单次课（日历条目）
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Lesson {
    pub id: i64,
    pub group_id: i64,
    pub title: String,
    pub room: Option<String>,
    pub start_time: chrono::DateTime<chrono::Utc>,
    pub end_time: chrono::DateTime<chrono::Utc>,
    pub is_canceled: bool,
}
