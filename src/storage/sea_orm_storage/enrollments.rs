use super::SeaOrmStorage;
use crate::entity::enrollments::{ActiveModel, Column, Entity as Enrollments};
use crate::entity::users;
use crate::errors::{Result, UniSystemError};
use crate::models::enrollments::entities::{Enrollment, RosterEntry};
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set};

impl SeaOrmStorage {
    /// 学生加入班组
    pub async fn create_enrollment_impl(
        &self,
        student_id: i64,
        group_id: i64,
    ) -> Result<Enrollment> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            student_id: Set(student_id),
            group_id: Set(group_id),
            is_active: Set(true),
            created_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| UniSystemError::database_operation(format!("创建选课记录失败: {e}")))?;

        Ok(result.into_enrollment())
    }

    /// 通过 ID 获取选课记录
    pub async fn get_enrollment_by_id_impl(&self, id: i64) -> Result<Option<Enrollment>> {
        let result = Enrollments::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| UniSystemError::database_operation(format!("查询选课记录失败: {e}")))?;

        Ok(result.map(|m| m.into_enrollment()))
    }

    /// 查找 (student, group) 的在册选课记录
    pub async fn find_active_enrollment_impl(
        &self,
        student_id: i64,
        group_id: i64,
    ) -> Result<Option<Enrollment>> {
        let result = Enrollments::find()
            .filter(Column::StudentId.eq(student_id))
            .filter(Column::GroupId.eq(group_id))
            .filter(Column::IsActive.eq(true))
            .one(&self.db)
            .await
            .map_err(|e| UniSystemError::database_operation(format!("查询选课记录失败: {e}")))?;

        Ok(result.map(|m| m.into_enrollment()))
    }

    /// 班组在册名单（连同学生信息，按姓氏、名字排序）
    pub async fn list_group_roster_impl(&self, group_id: i64) -> Result<Vec<RosterEntry>> {
        let rows = Enrollments::find()
            .filter(Column::GroupId.eq(group_id))
            .filter(Column::IsActive.eq(true))
            .find_also_related(users::Entity)
            .order_by_asc(users::Column::LastName)
            .order_by_asc(users::Column::FirstName)
            .all(&self.db)
            .await
            .map_err(|e| UniSystemError::database_operation(format!("查询班组名单失败: {e}")))?;

        Ok(rows
            .into_iter()
            .filter_map(|(enrollment, student)| {
                student.map(|s| RosterEntry {
                    enrollment: enrollment.into_enrollment(),
                    student: s.into_user(),
                })
            })
            .collect())
    }

    /// 软删除选课记录
    pub async fn deactivate_enrollment_impl(&self, id: i64) -> Result<bool> {
        let result = Enrollments::update_many()
            .col_expr(Column::IsActive, sea_orm::sea_query::Expr::value(false))
            .filter(Column::Id.eq(id))
            .exec(&self.db)
            .await
            .map_err(|e| UniSystemError::database_operation(format!("更新选课记录失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::memory_storage;
    use super::SeaOrmStorage;
    use crate::models::courses::requests::NewCourse;
    use crate::models::groups::requests::NewClassGroup;
    use crate::models::users::{entities::UserRole, requests::NewUser};
    use crate::utils::password::hash_password;

    async fn seed_user(storage: &SeaOrmStorage, username: &str, last: &str, role: UserRole) -> i64 {
        storage
            .create_user_impl(NewUser {
                username: username.to_string(),
                email: format!("{username}@uni.test"),
                password_hash: hash_password("pass123"),
                first_name: "Jan".to_string(),
                last_name: last.to_string(),
                role,
            })
            .await
            .expect("seed user")
            .id
    }

    async fn seed_group(storage: &SeaOrmStorage) -> i64 {
        let lecturer_id = seed_user(storage, "lecturer1", "Nowak", UserRole::Lecturer).await;
        let course_id = storage
            .create_course_impl(NewCourse {
                code: "INF101".to_string(),
                name: "Programowanie".to_string(),
                ects: 5,
                description: None,
                lecturer_id,
            })
            .await
            .expect("seed course")
            .id;
        storage
            .create_group_impl(NewClassGroup {
                name: "Gr1".to_string(),
                semester: Some(1),
                year: Some(2026),
                course_id,
                lecturer_id,
            })
            .await
            .expect("seed group")
            .id
    }

    #[tokio::test]
    async fn test_enroll_and_find_active() {
        let storage = memory_storage().await;
        let group_id = seed_group(&storage).await;
        let student_id = seed_user(&storage, "student1", "Kowalski", UserRole::Student).await;

        let enrollment = storage
            .create_enrollment_impl(student_id, group_id)
            .await
            .expect("enroll");
        assert!(enrollment.is_active);

        let found = storage
            .find_active_enrollment_impl(student_id, group_id)
            .await
            .expect("lookup")
            .expect("active enrollment");
        assert_eq!(found.id, enrollment.id);
    }

    #[tokio::test]
    async fn test_reenroll_after_removal() {
        let storage = memory_storage().await;
        let group_id = seed_group(&storage).await;
        let student_id = seed_user(&storage, "student1", "Kowalski", UserRole::Student).await;

        let first = storage
            .create_enrollment_impl(student_id, group_id)
            .await
            .expect("enroll");
        assert!(
            storage
                .deactivate_enrollment_impl(first.id)
                .await
                .expect("remove")
        );
        assert!(
            storage
                .find_active_enrollment_impl(student_id, group_id)
                .await
                .expect("lookup")
                .is_none()
        );

        // 移除后可再次加入，历史记录保留
        let second = storage
            .create_enrollment_impl(student_id, group_id)
            .await
            .expect("re-enroll");
        assert_ne!(first.id, second.id);

        let removed = storage
            .get_enrollment_by_id_impl(first.id)
            .await
            .expect("lookup")
            .expect("row kept");
        assert!(!removed.is_active);
    }

    #[tokio::test]
    async fn test_roster_lists_active_students_sorted() {
        let storage = memory_storage().await;
        let group_id = seed_group(&storage).await;
        let nowak = seed_user(&storage, "s_nowak", "Nowak", UserRole::Student).await;
        let abacki = seed_user(&storage, "s_abacki", "Abacki", UserRole::Student).await;
        let skipped = seed_user(&storage, "s_poza", "Poza", UserRole::Student).await;

        storage
            .create_enrollment_impl(nowak, group_id)
            .await
            .expect("enroll");
        storage
            .create_enrollment_impl(abacki, group_id)
            .await
            .expect("enroll");
        let removed = storage
            .create_enrollment_impl(skipped, group_id)
            .await
            .expect("enroll");
        storage
            .deactivate_enrollment_impl(removed.id)
            .await
            .expect("remove");

        let roster = storage
            .list_group_roster_impl(group_id)
            .await
            .expect("roster");
        assert_eq!(roster.len(), 2);
        assert_eq!(roster[0].student.last_name, "Abacki");
        assert_eq!(roster[1].student.last_name, "Nowak");
    }
}
