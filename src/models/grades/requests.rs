// 成绩录入请求（存储层）
#[derive(Debug, Clone)]
pub struct NewGrade {
    pub student_id: i64,
    pub group_id: i64,
    pub label: String,
    pub value: f64,
    pub weight: f64,
}
