// 课次创建请求（存储层）
#[derive(Debug, Clone)]
pub struct NewLesson {
    pub group_id: i64,
    pub title: String,
    pub room: Option<String>,
    pub start_time: chrono::DateTime<chrono::Utc>,
    pub end_time: chrono::DateTime<chrono::Utc>,
}
