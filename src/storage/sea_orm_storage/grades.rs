use super::SeaOrmStorage;
use crate::entity::grades::{ActiveModel, Column, Entity as Grades};
use crate::errors::{Result, UniSystemError};
use crate::models::grades::{entities::Grade, requests::NewGrade};
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set};

impl SeaOrmStorage {
    /// 录入成绩（权重必须为正）
    pub async fn create_grade_impl(&self, grade: NewGrade) -> Result<Grade> {
        if grade.weight <= 0.0 {
            return Err(UniSystemError::validation("成绩权重必须大于零".to_string()));
        }

        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            student_id: Set(grade.student_id),
            group_id: Set(grade.group_id),
            label: Set(grade.label),
            value: Set(grade.value),
            weight: Set(grade.weight),
            created_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| UniSystemError::database_operation(format!("录入成绩失败: {e}")))?;

        Ok(result.into_grade())
    }

    /// 列出学生在班组内的成绩（按录入顺序）
    pub async fn list_student_grades_impl(
        &self,
        student_id: i64,
        group_id: i64,
    ) -> Result<Vec<Grade>> {
        let rows = Grades::find()
            .filter(Column::StudentId.eq(student_id))
            .filter(Column::GroupId.eq(group_id))
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| UniSystemError::database_operation(format!("查询成绩列表失败: {e}")))?;

        Ok(rows.into_iter().map(|m| m.into_grade()).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::memory_storage;
    use super::SeaOrmStorage;
    use crate::models::courses::requests::NewCourse;
    use crate::models::grades::requests::NewGrade;
    use crate::models::groups::requests::NewClassGroup;
    use crate::models::users::{entities::UserRole, requests::NewUser};
    use crate::utils::password::hash_password;

    async fn seed(storage: &SeaOrmStorage) -> (i64, i64) {
        let lecturer_id = storage
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
            .id;
        let student_id = storage
            .create_user_impl(NewUser {
                username: "student1".to_string(),
                email: "student1@uni.test".to_string(),
                password_hash: hash_password("pass123"),
                first_name: "Jan".to_string(),
                last_name: "Kowalski".to_string(),
                role: UserRole::Student,
            })
            .await
            .expect("seed student")
            .id;
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
        let group_id = storage
            .create_group_impl(NewClassGroup {
                name: "Gr1".to_string(),
                semester: Some(1),
                year: Some(2026),
                course_id,
                lecturer_id,
            })
            .await
            .expect("seed group")
            .id;
        (student_id, group_id)
    }

    #[tokio::test]
    async fn test_record_and_list_grades() {
        let storage = memory_storage().await;
        let (student_id, group_id) = seed(&storage).await;

        storage
            .create_grade_impl(NewGrade {
                student_id,
                group_id,
                label: "Kolokwium 1".to_string(),
                value: 4.0,
                weight: 0.4,
            })
            .await
            .expect("record grade");
        storage
            .create_grade_impl(NewGrade {
                student_id,
                group_id,
                label: "Egzamin".to_string(),
                value: 4.5,
                weight: 0.6,
            })
            .await
            .expect("record grade");

        let grades = storage
            .list_student_grades_impl(student_id, group_id)
            .await
            .expect("list grades");
        assert_eq!(grades.len(), 2);
        assert_eq!(grades[0].label, "Kolokwium 1");
        assert_eq!(grades[1].value, 4.5);
    }

    #[tokio::test]
    async fn test_grade_weight_must_be_positive() {
        let storage = memory_storage().await;
        let (student_id, group_id) = seed(&storage).await;

        for weight in [0.0, -1.0] {
            assert!(
                storage
                    .create_grade_impl(NewGrade {
                        student_id,
                        group_id,
                        label: "Bledna".to_string(),
                        value: 3.0,
                        weight,
                    })
                    .await
                    .is_err()
            );
        }

        assert!(
            storage
                .list_student_grades_impl(student_id, group_id)
                .await
                .expect("list")
                .is_empty()
        );
    }
}
