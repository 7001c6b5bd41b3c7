use super::SeaOrmStorage;
use crate::entity::class_groups::{ActiveModel, Column, Entity as ClassGroups};
use crate::errors::{Result, UniSystemError};
use crate::models::groups::{entities::ClassGroup, requests::NewClassGroup};
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set};

impl SeaOrmStorage {
    /// 创建班组
    pub async fn create_group_impl(&self, group: NewClassGroup) -> Result<ClassGroup> {
        let model = ActiveModel {
            name: Set(group.name),
            semester: Set(group.semester),
            year: Set(group.year),
            course_id: Set(group.course_id),
            lecturer_id: Set(group.lecturer_id),
            is_active: Set(true),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| UniSystemError::database_operation(format!("创建班组失败: {e}")))?;

        Ok(result.into_group())
    }

    /// 通过 ID 获取班组
    pub async fn get_group_by_id_impl(&self, id: i64) -> Result<Option<ClassGroup>> {
        let result = ClassGroups::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| UniSystemError::database_operation(format!("查询班组失败: {e}")))?;

        Ok(result.map(|m| m.into_group()))
    }

    /// 列出班组（最近学年、学期在前，同期按名称排序）
    pub async fn list_groups_impl(&self) -> Result<Vec<ClassGroup>> {
        let rows = ClassGroups::find()
            .order_by_desc(Column::Year)
            .order_by_desc(Column::Semester)
            .order_by_asc(Column::Name)
            .all(&self.db)
            .await
            .map_err(|e| UniSystemError::database_operation(format!("查询班组列表失败: {e}")))?;

        Ok(rows.into_iter().map(|m| m.into_group()).collect())
    }

    /// 按讲师列出班组
    pub async fn list_groups_by_lecturer_impl(&self, lecturer_id: i64) -> Result<Vec<ClassGroup>> {
        let rows = ClassGroups::find()
            .filter(Column::LecturerId.eq(lecturer_id))
            .order_by_desc(Column::Year)
            .order_by_desc(Column::Semester)
            .order_by_asc(Column::Name)
            .all(&self.db)
            .await
            .map_err(|e| UniSystemError::database_operation(format!("查询班组列表失败: {e}")))?;

        Ok(rows.into_iter().map(|m| m.into_group()).collect())
    }
}
