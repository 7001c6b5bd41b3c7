use serde::Deserialize;

// 班组创建表单（semester/year 可留空）
#[derive(Debug, Clone, Deserialize)]
pub struct CreateGroupForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub course_id: String,
    #[serde(default)]
    pub lecturer_id: String,
    #[serde(default)]
    pub semester: String,
    #[serde(default)]
    pub year: String,
}

// 班组创建请求（存储层）
#[derive(Debug, Clone)]
pub struct NewClassGroup {
    pub name: String,
    pub semester: Option<i32>,
    pub year: Option<i32>,
    pub course_id: i64,
    pub lecturer_id: i64,
}

// 名单页加入学生表单
#[derive(Debug, Clone, Deserialize)]
pub struct EnrollStudentForm {
    #[serde(default)]
    pub student_id: String,
}
