use serde::{Deserialize, Serialize};

// 班组实体（某课程下的一个授课小组）
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassGroup {
    pub id: i64,
    pub name: String,
    pub semester: Option<i32>,
    pub year: Option<i32>,
    pub course_id: i64,
    pub lecturer_id: i64,
    pub is_active: bool,
}
