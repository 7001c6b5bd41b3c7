use serde::{Deserialize, Serialize};

// 成绩条目（一个学生在一个班组内可有多条，用于加权平均）
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Grade {
    pub id: i64,
    pub student_id: i64,
    pub group_id: i64,
    pub label: String,
    pub value: f64,
    pub weight: f64,
    pub created_at: chrono::DateTime<chrono::Utc>,
}
