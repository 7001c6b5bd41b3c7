use serde::Serialize;

use super::entities::ClassGroup;
use crate::models::courses::entities::Course;
use crate::models::enrollments::entities::RosterEntry;
use crate::models::users::entities::User;

// 班组管理视图，附带课程与讲师下拉列表
#[derive(Debug, Serialize)]
pub struct GroupsPage {
    pub groups: Vec<ClassGroup>,
    pub courses: Vec<Course>,
    pub lecturers: Vec<User>,
}

// 班组名单视图
#[derive(Debug, Serialize)]
pub struct RosterPage {
    pub group: ClassGroup,
    pub roster: Vec<RosterEntry>,
    pub students: Vec<User>,
}
