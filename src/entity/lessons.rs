//! 课次实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "lessons")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub group_id: i64,
    pub title: String,
    pub room: Option<String>,
    pub start_time: i64,
    pub end_time: i64,
    pub is_canceled: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::class_groups::Entity",
        from = "Column::GroupId",
        to = "super::class_groups::Column::Id"
    )]
    Group,
}

impl Related<super::class_groups::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Group.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

// 从数据库模型转换为业务模型
impl Model {
    pub fn into_lesson(self) -> crate::models::lessons::entities::Lesson {
        use chrono::{DateTime, Utc};

        crate::models::lessons::entities::Lesson {
            id: self.id,
            group_id: self.group_id,
            title: self.title,
            room: self.room,
            start_time: DateTime::<Utc>::from_timestamp(self.start_time, 0).unwrap_or_default(),
            end_time: DateTime::<Utc>::from_timestamp(self.end_time, 0).unwrap_or_default(),
            is_canceled: self.is_canceled,
        }
    }
}
