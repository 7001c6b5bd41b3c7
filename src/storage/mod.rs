use std::sync::Arc;

use crate::models::{
    courses::{entities::Course, requests::NewCourse},
    enrollments::entities::{Enrollment, RosterEntry},
    grades::{entities::Grade, requests::NewGrade},
    groups::{entities::ClassGroup, requests::NewClassGroup},
    lessons::{entities::Lesson, requests::NewLesson},
    users::{
        entities::{User, UserRole},
        requests::NewUser,
    },
};

use crate::errors::Result;

pub mod sea_orm_storage;

#[async_trait::async_trait]
pub trait Storage: Send + Sync {
    /// 用户管理方法
    // 创建用户
    async fn create_user(&self, user: NewUser) -> Result<User>;
    // 通过ID获取用户信息
    async fn get_user_by_id(&self, id: i64) -> Result<Option<User>>;
    // 通过用户名获取用户信息
    async fn get_user_by_username(&self, username: &str) -> Result<Option<User>>;
    // 列出全部用户（按ID升序）
    async fn list_users(&self) -> Result<Vec<User>>;
    // 按角色列出用户（按姓氏、名字排序），可只取在册用户
    async fn list_users_by_role(&self, role: UserRole, only_active: bool) -> Result<Vec<User>>;
    // 设置用户在册状态
    async fn set_user_active(&self, id: i64, is_active: bool) -> Result<bool>;
    // 更新用户最后登录时间
    async fn update_last_login(&self, id: i64) -> Result<bool>;
    // 统计用户数量
    async fn count_users(&self) -> Result<u64>;
    // 按角色统计用户数量
    async fn count_users_by_role(&self, role: UserRole) -> Result<u64>;

    /// 课程管理方法
    // 创建课程
    async fn create_course(&self, course: NewCourse) -> Result<Course>;
    // 通过ID获取课程
    async fn get_course_by_id(&self, id: i64) -> Result<Option<Course>>;
    // 通过课程代码获取课程
    async fn get_course_by_code(&self, code: &str) -> Result<Option<Course>>;
    // 列出课程（按代码排序），可只取启用课程
    async fn list_courses(&self, only_active: bool) -> Result<Vec<Course>>;
    // 按讲师列出课程
    async fn list_courses_by_lecturer(&self, lecturer_id: i64) -> Result<Vec<Course>>;
    // 设置课程启用状态
    async fn set_course_active(&self, id: i64, is_active: bool) -> Result<bool>;
    // 统计课程数量
    async fn count_courses(&self) -> Result<u64>;

    /// 班组管理方法
    // 创建班组
    async fn create_group(&self, group: NewClassGroup) -> Result<ClassGroup>;
    // 通过ID获取班组
    async fn get_group_by_id(&self, id: i64) -> Result<Option<ClassGroup>>;
    // 列出班组（按学年、学期降序，名称升序）
    async fn list_groups(&self) -> Result<Vec<ClassGroup>>;
    // 按讲师列出班组
    async fn list_groups_by_lecturer(&self, lecturer_id: i64) -> Result<Vec<ClassGroup>>;

    /// 选课管理方法
    // 学生加入班组
    async fn create_enrollment(&self, student_id: i64, group_id: i64) -> Result<Enrollment>;
    // 通过ID获取选课记录
    async fn get_enrollment_by_id(&self, id: i64) -> Result<Option<Enrollment>>;
    // 查找 (student, group) 的在册选课记录
    async fn find_active_enrollment(
        &self,
        student_id: i64,
        group_id: i64,
    ) -> Result<Option<Enrollment>>;
    // 班组在册名单（连同学生信息，按姓氏、名字排序）
    async fn list_group_roster(&self, group_id: i64) -> Result<Vec<RosterEntry>>;
    // 软删除选课记录
    async fn deactivate_enrollment(&self, id: i64) -> Result<bool>;

    /// 课次管理方法
    // 创建课次（校验 end_time > start_time）
    async fn create_lesson(&self, lesson: NewLesson) -> Result<Lesson>;
    // 列出班组课次（按开始时间排序）
    async fn list_group_lessons(&self, group_id: i64) -> Result<Vec<Lesson>>;

    /// 成绩管理方法
    // 录入成绩（校验 weight > 0）
    async fn create_grade(&self, grade: NewGrade) -> Result<Grade>;
    // 列出学生在班组内的成绩
    async fn list_student_grades(&self, student_id: i64, group_id: i64) -> Result<Vec<Grade>>;
}

pub async fn create_storage() -> Result<Arc<dyn Storage>> {
    let storage = sea_orm_storage::SeaOrmStorage::new_async().await?;
    Ok(Arc::new(storage))
}
