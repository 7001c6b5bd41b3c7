use super::SeaOrmStorage;
use crate::entity::courses::{ActiveModel, Column, Entity as Courses};
use crate::errors::{Result, UniSystemError};
use crate::models::courses::{entities::Course, requests::NewCourse};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, Set,
};

impl SeaOrmStorage {
    /// 创建课程
    pub async fn create_course_impl(&self, course: NewCourse) -> Result<Course> {
        let model = ActiveModel {
            code: Set(course.code),
            name: Set(course.name),
            ects: Set(course.ects),
            description: Set(course.description),
            lecturer_id: Set(course.lecturer_id),
            is_active: Set(true),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| UniSystemError::database_operation(format!("创建课程失败: {e}")))?;

        Ok(result.into_course())
    }

    /// 通过 ID 获取课程
    pub async fn get_course_by_id_impl(&self, id: i64) -> Result<Option<Course>> {
        let result = Courses::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| UniSystemError::database_operation(format!("查询课程失败: {e}")))?;

        Ok(result.map(|m| m.into_course()))
    }

    /// 通过课程代码获取课程
    pub async fn get_course_by_code_impl(&self, code: &str) -> Result<Option<Course>> {
        let result = Courses::find()
            .filter(Column::Code.eq(code))
            .one(&self.db)
            .await
            .map_err(|e| UniSystemError::database_operation(format!("查询课程失败: {e}")))?;

        Ok(result.map(|m| m.into_course()))
    }

    /// 列出课程（按课程代码排序）
    pub async fn list_courses_impl(&self, only_active: bool) -> Result<Vec<Course>> {
        let mut select = Courses::find();

        if only_active {
            select = select.filter(Column::IsActive.eq(true));
        }

        let rows = select
            .order_by_asc(Column::Code)
            .all(&self.db)
            .await
            .map_err(|e| UniSystemError::database_operation(format!("查询课程列表失败: {e}")))?;

        Ok(rows.into_iter().map(|m| m.into_course()).collect())
    }

    /// 按讲师列出课程
    pub async fn list_courses_by_lecturer_impl(&self, lecturer_id: i64) -> Result<Vec<Course>> {
        let rows = Courses::find()
            .filter(Column::LecturerId.eq(lecturer_id))
            .order_by_asc(Column::Code)
            .all(&self.db)
            .await
            .map_err(|e| UniSystemError::database_operation(format!("查询课程列表失败: {e}")))?;

        Ok(rows.into_iter().map(|m| m.into_course()).collect())
    }

    /// 设置课程启用状态
    pub async fn set_course_active_impl(&self, id: i64, is_active: bool) -> Result<bool> {
        let result = Courses::update_many()
            .col_expr(Column::IsActive, sea_orm::sea_query::Expr::value(is_active))
            .filter(Column::Id.eq(id))
            .exec(&self.db)
            .await
            .map_err(|e| UniSystemError::database_operation(format!("更新课程状态失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }

    /// 统计课程数量
    pub async fn count_courses_impl(&self) -> Result<u64> {
        let count = Courses::find()
            .count(&self.db)
            .await
            .map_err(|e| UniSystemError::database_operation(format!("统计课程数量失败: {e}")))?;

        Ok(count)
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::memory_storage;
    use super::SeaOrmStorage;
    use crate::models::courses::requests::NewCourse;
    use crate::models::users::{entities::UserRole, requests::NewUser};
    use crate::utils::password::hash_password;

    async fn seed_lecturer(storage: &SeaOrmStorage) -> i64 {
        storage
            .create_user_impl(NewUser {
                username: "lecturer1".to_string(),
                email: "lecturer1@uni.test".to_string(),
                password_hash: hash_password("pass123"),
                first_name: "Anna".to_string(),
                last_name: "Nowak".to_string(),
                role: UserRole::Lecturer,
            })
            .await
            .expect("seed lecturer")
            .id
    }

    fn new_course(code: &str, lecturer_id: i64) -> NewCourse {
        NewCourse {
            code: code.to_string(),
            name: format!("Course {code}"),
            ects: 5,
            description: None,
            lecturer_id,
        }
    }

    #[tokio::test]
    async fn test_create_and_lookup_course() {
        let storage = memory_storage().await;
        let lecturer_id = seed_lecturer(&storage).await;

        let created = storage
            .create_course_impl(new_course("INF101", lecturer_id))
            .await
            .expect("create course");
        assert!(created.is_active);

        let by_code = storage
            .get_course_by_code_impl("INF101")
            .await
            .expect("lookup by code")
            .expect("course exists");
        assert_eq!(by_code.id, created.id);
        assert!(
            storage
                .get_course_by_code_impl("MISSING")
                .await
                .expect("lookup")
                .is_none()
        );
    }

    #[tokio::test]
    async fn test_duplicate_code_leaves_table_unchanged() {
        let storage = memory_storage().await;
        let lecturer_id = seed_lecturer(&storage).await;

        storage
            .create_course_impl(new_course("INF101", lecturer_id))
            .await
            .expect("first insert");
        assert!(
            storage
                .create_course_impl(new_course("INF101", lecturer_id))
                .await
                .is_err()
        );
        assert_eq!(storage.count_courses_impl().await.expect("count"), 1);
    }

    #[tokio::test]
    async fn test_list_sorted_by_code_with_active_filter() {
        let storage = memory_storage().await;
        let lecturer_id = seed_lecturer(&storage).await;

        storage
            .create_course_impl(new_course("MAT201", lecturer_id))
            .await
            .expect("insert");
        let a = storage
            .create_course_impl(new_course("INF101", lecturer_id))
            .await
            .expect("insert");

        let all = storage.list_courses_impl(false).await.expect("list");
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].code, "INF101");

        storage
            .set_course_active_impl(a.id, false)
            .await
            .expect("deactivate");
        let active = storage.list_courses_impl(true).await.expect("list active");
        assert_eq!(active.len(), 1);
        assert_eq!(active[0].code, "MAT201");

        // 软删除保留行
        assert!(
            storage
                .get_course_by_id_impl(a.id)
                .await
                .expect("lookup")
                .is_some()
        );
    }

    #[tokio::test]
    async fn test_list_by_lecturer() {
        let storage = memory_storage().await;
        let lecturer_id = seed_lecturer(&storage).await;
        let other_id = storage
            .create_user_impl(NewUser {
                username: "lecturer2".to_string(),
                email: "lecturer2@uni.test".to_string(),
                password_hash: hash_password("pass123"),
                first_name: "Piotr".to_string(),
                last_name: "Wisniewski".to_string(),
                role: UserRole::Lecturer,
            })
            .await
            .expect("seed second lecturer")
            .id;

        storage
            .create_course_impl(new_course("INF101", lecturer_id))
            .await
            .expect("insert");
        storage
            .create_course_impl(new_course("MAT201", other_id))
            .await
            .expect("insert");

        let mine = storage
            .list_courses_by_lecturer_impl(lecturer_id)
            .await
            .expect("list by lecturer");
        assert_eq!(mine.len(), 1);
        assert_eq!(mine[0].code, "INF101");
    }
}
