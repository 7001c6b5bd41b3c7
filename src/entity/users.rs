//! 用户实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    #[sea_orm(unique)]
    pub username: String,
    #[sea_orm(unique)]
    pub email: String,
    pub password_hash: String,
    pub first_name: String,
    pub last_name: String,
    pub role: String,
    pub is_active: bool,
    pub last_login: Option<i64>,
    pub created_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::courses::Entity")]
    Courses,
    #[sea_orm(has_many = "super::class_groups::Entity")]
    ClassGroups,
    #[sea_orm(has_many = "super::enrollments::Entity")]
    Enrollments,
    #[sea_orm(has_many = "super::grades::Entity")]
    Grades,
}

impl Related<super::courses::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Courses.def()
    }
}

impl Related<super::class_groups::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ClassGroups.def()
    }
}

impl Related<super::enrollments::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Enrollments.def()
    }
}

impl Related<super::grades::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Grades.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

// 从数据库模型转换为业务模型
impl Model {
    pub fn into_user(self) -> crate::models::users::entities::User {
        use crate::models::users::entities::{User, UserRole};
        use chrono::{DateTime, Utc};

        User {
            id: self.id,
            username: self.username,
            email: self.email,
            password_hash: self.password_hash,
            first_name: self.first_name,
            last_name: self.last_name,
            role: self.role.parse::<UserRole>().unwrap_or_else(|_| {
                tracing::warn!(
                    "User {} has unknown stored role '{}', treating as student",
                    self.id,
                    self.role
                );
                UserRole::Student
            }),
            is_active: self.is_active,
            last_login: self
                .last_login
                .map(|ts| DateTime::<Utc>::from_timestamp(ts, 0).unwrap_or_default()),
            created_at: DateTime::<Utc>::from_timestamp(self.created_at, 0).unwrap_or_default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::users::entities::UserRole;

    fn row_with_role(role: &str) -> Model {
        Model {
            id: 7,
            username: "jkowalski".to_string(),
            email: "jkowalski@uni.test".to_string(),
            password_hash: String::new(),
            first_name: "Jan".to_string(),
            last_name: "Kowalski".to_string(),
            role: role.to_string(),
            is_active: true,
            last_login: None,
            created_at: 0,
        }
    }

    #[test]
    fn test_stored_roles_map_to_domain_roles() {
        assert_eq!(row_with_role("admin").into_user().role, UserRole::Admin);
        assert_eq!(
            row_with_role("lecturer").into_user().role,
            UserRole::Lecturer
        );
        assert_eq!(row_with_role("student").into_user().role, UserRole::Student);
    }

    // 数据损坏时降级为学生角色而不是中断转换
    #[test]
    fn test_unknown_stored_role_falls_back_to_student() {
        assert_eq!(
            row_with_role("superuser").into_user().role,
            UserRole::Student
        );
    }
}
