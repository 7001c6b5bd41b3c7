use serde::{Deserialize, Serialize};

use crate::models::users::entities::User;

// 选课记录（学生与班组的关联，软删除保留历史）
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Enrollment {
    pub id: i64,
    pub student_id: i64,
    pub group_id: i64,
    pub is_active: bool,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

// 名单条目：选课记录连同学生信息
#[derive(Debug, Clone, Serialize)]
pub struct RosterEntry {
    pub enrollment: Enrollment,
    pub student: User,
}
