use serde::{Deserialize, Serialize};

// 课程实体
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Course {
    pub id: i64,
    pub code: String,
    pub name: String,
    pub ects: i32,
    pub description: Option<String>,
    pub lecturer_id: i64,
    pub is_active: bool,
}
