//! SeaORM 存储实现
//!
//! 统一的数据库存储层，支持 SQLite、PostgreSQL 和 MySQL。

mod courses;
mod enrollments;
mod grades;
mod groups;
mod lessons;
mod users;

use crate::config::AppConfig;
use crate::errors::{Result, UniSystemError};
use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use std::time::Duration;
use tracing::info;

/// SeaORM 存储实现
#[derive(Clone)]
pub struct SeaOrmStorage {
    pub(crate) db: DatabaseConnection,
}

impl SeaOrmStorage {
    /// 创建新的 SeaORM 存储实例
    pub async fn new_async() -> Result<Self> {
        let config = AppConfig::get();
        let db_url = Self::build_database_url(&config.database.url)?;

        // 根据数据库类型选择连接方式
        let db = if db_url.starts_with("sqlite://") {
            Self::connect_sqlite(&db_url, config).await?
        } else {
            Self::connect_generic(&db_url, config).await?
        };

        Self::migrate(db).await
    }

    /// 使用给定连接 URL 创建实例（测试用）
    #[cfg(test)]
    pub(crate) async fn new_with_url(url: &str) -> Result<Self> {
        let db = Database::connect(url)
            .await
            .map_err(|e| UniSystemError::database_connection(format!("连接数据库失败: {e}")))?;
        Self::migrate(db).await
    }

    async fn migrate(db: DatabaseConnection) -> Result<Self> {
        Migrator::up(&db, None)
            .await
            .map_err(|e| UniSystemError::database_operation(format!("数据库迁移失败: {e}")))?;

        info!("SeaORM storage initialized, migrations applied");

        Ok(Self { db })
    }

    /// SQLite 专用连接（WAL + pragma 优化）
    async fn connect_sqlite(url: &str, config: &AppConfig) -> Result<DatabaseConnection> {
        use sea_orm::SqlxSqliteConnector;
        use sea_orm::sqlx::sqlite::{
            SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous,
        };
        use std::str::FromStr;

        let opt = SqliteConnectOptions::from_str(url)
            .map_err(|e| UniSystemError::database_config(format!("SQLite URL 解析失败: {e}")))?
            .create_if_missing(true)
            .journal_mode(SqliteJournalMode::Wal)
            .synchronous(SqliteSynchronous::Normal)
            .busy_timeout(Duration::from_secs(5));

        let pool = SqlitePoolOptions::new()
            .max_connections(config.database.pool_size)
            .min_connections(1)
            .test_before_acquire(true)
            .acquire_timeout(Duration::from_secs(config.database.timeout))
            .idle_timeout(Duration::from_secs(300))
            .connect_with(opt)
            .await
            .map_err(|e| UniSystemError::database_connection(format!("SQLite 连接失败: {e}")))?;

        Ok(SqlxSqliteConnector::from_sqlx_sqlite_pool(pool))
    }

    /// 通用连接（PostgreSQL、MySQL 等）
    async fn connect_generic(url: &str, config: &AppConfig) -> Result<DatabaseConnection> {
        let mut opt = ConnectOptions::new(url);
        opt.max_connections(config.database.pool_size)
            .min_connections(5)
            .connect_timeout(Duration::from_secs(config.database.timeout))
            .acquire_timeout(Duration::from_secs(config.database.timeout))
            .idle_timeout(Duration::from_secs(600))
            .max_lifetime(Duration::from_secs(1800))
            .sqlx_logging(false)
            .sqlx_logging_level(tracing::log::LevelFilter::Debug);

        Database::connect(opt)
            .await
            .map_err(|e| UniSystemError::database_connection(format!("无法连接到数据库: {e}")))
    }

    /// 从 URL 自动推断数据库类型并构建连接 URL
    fn build_database_url(url: &str) -> Result<String> {
        if url.starts_with("sqlite://") {
            Ok(url.to_string())
        } else if url.ends_with(".db") || url.ends_with(".sqlite") || url == ":memory:" {
            Ok(format!("sqlite://{url}?mode=rwc"))
        } else if url.starts_with("postgres://")
            || url.starts_with("postgresql://")
            || url.starts_with("mysql://")
            || url.starts_with("mariadb://")
        {
            Ok(url.to_string())
        } else {
            Err(UniSystemError::database_config(format!(
                "无法从 URL 推断数据库类型: {url}. 支持: sqlite://, postgres://, mysql://, 或 .db/.sqlite 文件路径"
            )))
        }
    }
}

// Storage trait 实现
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
use crate::storage::Storage;
use async_trait::async_trait;

#[async_trait]
impl Storage for SeaOrmStorage {
    // 用户模块
    async fn create_user(&self, user: NewUser) -> Result<User> {
        self.create_user_impl(user).await
    }

    async fn get_user_by_id(&self, id: i64) -> Result<Option<User>> {
        self.get_user_by_id_impl(id).await
    }

    async fn get_user_by_username(&self, username: &str) -> Result<Option<User>> {
        self.get_user_by_username_impl(username).await
    }

    async fn list_users(&self) -> Result<Vec<User>> {
        self.list_users_impl().await
    }

    async fn list_users_by_role(&self, role: UserRole, only_active: bool) -> Result<Vec<User>> {
        self.list_users_by_role_impl(role, only_active).await
    }

    async fn set_user_active(&self, id: i64, is_active: bool) -> Result<bool> {
        self.set_user_active_impl(id, is_active).await
    }

    async fn update_last_login(&self, id: i64) -> Result<bool> {
        self.update_last_login_impl(id).await
    }

    async fn count_users(&self) -> Result<u64> {
        self.count_users_impl().await
    }

    async fn count_users_by_role(&self, role: UserRole) -> Result<u64> {
        self.count_users_by_role_impl(role).await
    }

    // 课程模块
    async fn create_course(&self, course: NewCourse) -> Result<Course> {
        self.create_course_impl(course).await
    }

    async fn get_course_by_id(&self, id: i64) -> Result<Option<Course>> {
        self.get_course_by_id_impl(id).await
    }

    async fn get_course_by_code(&self, code: &str) -> Result<Option<Course>> {
        self.get_course_by_code_impl(code).await
    }

    async fn list_courses(&self, only_active: bool) -> Result<Vec<Course>> {
        self.list_courses_impl(only_active).await
    }

    async fn list_courses_by_lecturer(&self, lecturer_id: i64) -> Result<Vec<Course>> {
        self.list_courses_by_lecturer_impl(lecturer_id).await
    }

    async fn set_course_active(&self, id: i64, is_active: bool) -> Result<bool> {
        self.set_course_active_impl(id, is_active).await
    }

    async fn count_courses(&self) -> Result<u64> {
        self.count_courses_impl().await
    }

    // 班组模块
    async fn create_group(&self, group: NewClassGroup) -> Result<ClassGroup> {
        self.create_group_impl(group).await
    }

    async fn get_group_by_id(&self, id: i64) -> Result<Option<ClassGroup>> {
        self.get_group_by_id_impl(id).await
    }

    async fn list_groups(&self) -> Result<Vec<ClassGroup>> {
        self.list_groups_impl().await
    }

    async fn list_groups_by_lecturer(&self, lecturer_id: i64) -> Result<Vec<ClassGroup>> {
        self.list_groups_by_lecturer_impl(lecturer_id).await
    }

    // 选课模块
    async fn create_enrollment(&self, student_id: i64, group_id: i64) -> Result<Enrollment> {
        self.create_enrollment_impl(student_id, group_id).await
    }

    async fn get_enrollment_by_id(&self, id: i64) -> Result<Option<Enrollment>> {
        self.get_enrollment_by_id_impl(id).await
    }

    async fn find_active_enrollment(
        &self,
        student_id: i64,
        group_id: i64,
    ) -> Result<Option<Enrollment>> {
        self.find_active_enrollment_impl(student_id, group_id).await
    }

    async fn list_group_roster(&self, group_id: i64) -> Result<Vec<RosterEntry>> {
        self.list_group_roster_impl(group_id).await
    }

    async fn deactivate_enrollment(&self, id: i64) -> Result<bool> {
        self.deactivate_enrollment_impl(id).await
    }

    // 课次模块
    async fn create_lesson(&self, lesson: NewLesson) -> Result<Lesson> {
        self.create_lesson_impl(lesson).await
    }

    async fn list_group_lessons(&self, group_id: i64) -> Result<Vec<Lesson>> {
        self.list_group_lessons_impl(group_id).await
    }

    // 成绩模块
    async fn create_grade(&self, grade: NewGrade) -> Result<Grade> {
        self.create_grade_impl(grade).await
    }

    async fn list_student_grades(&self, student_id: i64, group_id: i64) -> Result<Vec<Grade>> {
        self.list_student_grades_impl(student_id, group_id).await
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::SeaOrmStorage;

    /// 基于内存 SQLite 的存储实例，跑真实迁移
    pub(crate) async fn memory_storage() -> SeaOrmStorage {
        SeaOrmStorage::new_with_url("sqlite::memory:")
            .await
            .expect("in-memory storage")
    }
}
