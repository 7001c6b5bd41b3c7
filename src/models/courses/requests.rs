use serde::Deserialize;

// 课程创建表单（原始字符串字段，显式解析校验）
#[derive(Debug, Clone, Deserialize)]
pub struct CreateCourseForm {
    #[serde(default)]
    pub code: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub ects: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub lecturer_id: String,
}

// 课程创建请求（存储层）
#[derive(Debug, Clone)]
pub struct NewCourse {
    pub code: String,
    pub name: String,
    pub ects: i32,
    pub description: Option<String>,
    pub lecturer_id: i64,
}
