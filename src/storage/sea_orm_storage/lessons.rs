use super::SeaOrmStorage;
use crate::entity::lessons::{ActiveModel, Column, Entity as Lessons};
use crate::errors::{Result, UniSystemError};
use crate::models::lessons::{entities::Lesson, requests::NewLesson};
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set};

impl SeaOrmStorage {
    /// 创建课次（结束时间必须晚于开始时间）
    pub async fn create_lesson_impl(&self, lesson: NewLesson) -> Result<Lesson> {
        if lesson.end_time <= lesson.start_time {
            return Err(UniSystemError::validation(
                "课次结束时间必须晚于开始时间".to_string(),
            ));
        }

        let model = ActiveModel {
            group_id: Set(lesson.group_id),
            title: Set(lesson.title),
            room: Set(lesson.room),
            start_time: Set(lesson.start_time.timestamp()),
            end_time: Set(lesson.end_time.timestamp()),
            is_canceled: Set(false),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| UniSystemError::database_operation(format!("创建课次失败: {e}")))?;

        Ok(result.into_lesson())
    }

    /// 列出班组课次（按开始时间排序）
    pub async fn list_group_lessons_impl(&self, group_id: i64) -> Result<Vec<Lesson>> {
        let rows = Lessons::find()
            .filter(Column::GroupId.eq(group_id))
            .order_by_asc(Column::StartTime)
            .all(&self.db)
            .await
            .map_err(|e| UniSystemError::database_operation(format!("查询课次列表失败: {e}")))?;

        Ok(rows.into_iter().map(|m| m.into_lesson()).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::memory_storage;
    use super::SeaOrmStorage;
    use crate::models::courses::requests::NewCourse;
    use crate::models::groups::requests::NewClassGroup;
    use crate::models::lessons::requests::NewLesson;
    use crate::models::users::{entities::UserRole, requests::NewUser};
    use crate::utils::password::hash_password;
    use chrono::{Duration, Utc};

    async fn seed_group(storage: &SeaOrmStorage) -> i64 {
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
    async fn test_create_lesson_and_list_by_start_time() {
        let storage = memory_storage().await;
        let group_id = seed_group(&storage).await;
        let base = Utc::now();

        storage
            .create_lesson_impl(NewLesson {
                group_id,
                title: "Wyklad 2".to_string(),
                room: Some("A-101".to_string()),
                start_time: base + Duration::days(7),
                end_time: base + Duration::days(7) + Duration::hours(2),
            })
            .await
            .expect("create lesson");
        storage
            .create_lesson_impl(NewLesson {
                group_id,
                title: "Wyklad 1".to_string(),
                room: None,
                start_time: base,
                end_time: base + Duration::hours(2),
            })
            .await
            .expect("create lesson");

        let lessons = storage
            .list_group_lessons_impl(group_id)
            .await
            .expect("list lessons");
        assert_eq!(lessons.len(), 2);
        assert_eq!(lessons[0].title, "Wyklad 1");
        assert!(!lessons[0].is_canceled);
    }

    #[tokio::test]
    async fn test_lesson_must_end_after_start() {
        let storage = memory_storage().await;
        let group_id = seed_group(&storage).await;
        let base = Utc::now();

        // 结束早于开始
        assert!(
            storage
                .create_lesson_impl(NewLesson {
                    group_id,
                    title: "Bledny".to_string(),
                    room: None,
                    start_time: base,
                    end_time: base - Duration::hours(1),
                })
                .await
                .is_err()
        );

        // 结束等于开始同样被拒
        assert!(
            storage
                .create_lesson_impl(NewLesson {
                    group_id,
                    title: "Zerowy".to_string(),
                    room: None,
                    start_time: base,
                    end_time: base,
                })
                .await
                .is_err()
        );

        assert!(
            storage
                .list_group_lessons_impl(group_id)
                .await
                .expect("list")
                .is_empty()
        );
    }
}
