use serde::Serialize;

use super::entities::Course;
use crate::models::users::entities::User;

// 课程管理视图，附带讲师下拉列表
#[derive(Debug, Serialize)]
pub struct CoursesPage {
    pub courses: Vec<Course>,
    pub lecturers: Vec<User>,
}

// 讲师视角：自己负责的课程与班组
#[derive(Debug, Serialize)]
pub struct LecturerCoursesPage {
    pub courses: Vec<Course>,
    pub groups: Vec<crate::models::groups::entities::ClassGroup>,
}
