use super::SeaOrmStorage;
use crate::entity::users::{ActiveModel, Column, Entity as Users};
use crate::errors::{Result, UniSystemError};
use crate::models::users::{
    entities::{User, UserRole},
    requests::NewUser,
};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, Set,
};

impl SeaOrmStorage {
    /// 创建用户
    pub async fn create_user_impl(&self, user: NewUser) -> Result<User> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            username: Set(user.username),
            email: Set(user.email),
            password_hash: Set(user.password_hash),
            first_name: Set(user.first_name),
            last_name: Set(user.last_name),
            role: Set(user.role.to_string()),
            is_active: Set(true),
            last_login: Set(None),
            created_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| UniSystemError::database_operation(format!("创建用户失败: {e}")))?;

        Ok(result.into_user())
    }

    /// 通过 ID 获取用户
    pub async fn get_user_by_id_impl(&self, id: i64) -> Result<Option<User>> {
        let result = Users::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| UniSystemError::database_operation(format!("查询用户失败: {e}")))?;

        Ok(result.map(|m| m.into_user()))
    }

    /// 通过用户名获取用户
    pub async fn get_user_by_username_impl(&self, username: &str) -> Result<Option<User>> {
        let result = Users::find()
            .filter(Column::Username.eq(username))
            .one(&self.db)
            .await
            .map_err(|e| UniSystemError::database_operation(format!("查询用户失败: {e}")))?;

        Ok(result.map(|m| m.into_user()))
    }

    /// 列出全部用户（按 ID 升序，含停用账号）
    pub async fn list_users_impl(&self) -> Result<Vec<User>> {
        let rows = Users::find()
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| UniSystemError::database_operation(format!("查询用户列表失败: {e}")))?;

        Ok(rows.into_iter().map(|m| m.into_user()).collect())
    }

    /// 按角色列出用户（按姓氏、名字排序）
    pub async fn list_users_by_role_impl(
        &self,
        role: UserRole,
        only_active: bool,
    ) -> Result<Vec<User>> {
        let mut select = Users::find().filter(Column::Role.eq(role.to_string()));

        if only_active {
            select = select.filter(Column::IsActive.eq(true));
        }

        let rows = select
            .order_by_asc(Column::LastName)
            .order_by_asc(Column::FirstName)
            .all(&self.db)
            .await
            .map_err(|e| UniSystemError::database_operation(format!("查询用户列表失败: {e}")))?;

        Ok(rows.into_iter().map(|m| m.into_user()).collect())
    }

    /// 设置用户在册状态
    pub async fn set_user_active_impl(&self, id: i64, is_active: bool) -> Result<bool> {
        let result = Users::update_many()
            .col_expr(Column::IsActive, sea_orm::sea_query::Expr::value(is_active))
            .filter(Column::Id.eq(id))
            .exec(&self.db)
            .await
            .map_err(|e| UniSystemError::database_operation(format!("更新用户状态失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }

    /// 更新用户最后登录时间
    pub async fn update_last_login_impl(&self, id: i64) -> Result<bool> {
        let now = chrono::Utc::now().timestamp();

        let result = Users::update_many()
            .col_expr(Column::LastLogin, sea_orm::sea_query::Expr::value(now))
            .filter(Column::Id.eq(id))
            .exec(&self.db)
            .await
            .map_err(|e| {
                UniSystemError::database_operation(format!("更新最后登录时间失败: {e}"))
            })?;

        Ok(result.rows_affected > 0)
    }

    /// 统计用户数量
    pub async fn count_users_impl(&self) -> Result<u64> {
        let count = Users::find()
            .count(&self.db)
            .await
            .map_err(|e| UniSystemError::database_operation(format!("统计用户数量失败: {e}")))?;

        Ok(count)
    }

    /// 按角色统计用户数量
    pub async fn count_users_by_role_impl(&self, role: UserRole) -> Result<u64> {
        let count = Users::find()
            .filter(Column::Role.eq(role.to_string()))
            .count(&self.db)
            .await
            .map_err(|e| UniSystemError::database_operation(format!("统计用户数量失败: {e}")))?;

        Ok(count)
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::memory_storage;
    use crate::models::users::{entities::UserRole, requests::NewUser};
    use crate::utils::password::hash_password;

    fn new_user(username: &str, role: UserRole) -> NewUser {
        NewUser {
            username: username.to_string(),
            email: format!("{username}@uni.test"),
            password_hash: hash_password("pass123"),
            first_name: "Jan".to_string(),
            last_name: "Kowalski".to_string(),
            role,
        }
    }

    #[tokio::test]
    async fn test_create_and_lookup_user() {
        let storage = memory_storage().await;

        let created = storage
            .create_user_impl(new_user("student1", UserRole::Student))
            .await
            .expect("create user");
        assert!(created.is_active);
        assert_eq!(created.role, UserRole::Student);

        let by_id = storage
            .get_user_by_id_impl(created.id)
            .await
            .expect("lookup by id")
            .expect("user exists");
        assert_eq!(by_id.username, "student1");

        let by_name = storage
            .get_user_by_username_impl("student1")
            .await
            .expect("lookup by username");
        assert!(by_name.is_some());
        assert!(
            storage
                .get_user_by_username_impl("nobody")
                .await
                .expect("lookup")
                .is_none()
        );
    }

    #[tokio::test]
    async fn test_duplicate_username_rejected() {
        let storage = memory_storage().await;

        storage
            .create_user_impl(new_user("student1", UserRole::Student))
            .await
            .expect("first insert");

        let mut dup = new_user("student1", UserRole::Student);
        dup.email = "other@uni.test".to_string();
        assert!(storage.create_user_impl(dup).await.is_err());
        assert_eq!(storage.count_users_impl().await.expect("count"), 1);
    }

    #[tokio::test]
    async fn test_soft_delete_keeps_row() {
        let storage = memory_storage().await;

        let user = storage
            .create_user_impl(new_user("lecturer1", UserRole::Lecturer))
            .await
            .expect("create user");

        assert!(
            storage
                .set_user_active_impl(user.id, false)
                .await
                .expect("deactivate")
        );

        // 行保留，只是状态翻转
        let reloaded = storage
            .get_user_by_id_impl(user.id)
            .await
            .expect("lookup")
            .expect("row still present");
        assert!(!reloaded.is_active);
        assert_eq!(storage.count_users_impl().await.expect("count"), 1);

        // 未知 ID 不影响任何行
        assert!(
            !storage
                .set_user_active_impl(9999, false)
                .await
                .expect("no-op update")
        );
    }

    #[tokio::test]
    async fn test_list_by_role_filters_and_sorts() {
        let storage = memory_storage().await;

        let mut a = new_user("s_nowak", UserRole::Student);
        a.last_name = "Nowak".to_string();
        let mut b = new_user("s_abacki", UserRole::Student);
        b.last_name = "Abacki".to_string();
        let lecturer = new_user("lecturer1", UserRole::Lecturer);

        storage.create_user_impl(a).await.expect("insert");
        let b_created = storage.create_user_impl(b).await.expect("insert");
        storage.create_user_impl(lecturer).await.expect("insert");

        let students = storage
            .list_users_by_role_impl(UserRole::Student, false)
            .await
            .expect("list students");
        assert_eq!(students.len(), 2);
        assert_eq!(students[0].last_name, "Abacki");

        storage
            .set_user_active_impl(b_created.id, false)
            .await
            .expect("deactivate");
        let active_students = storage
            .list_users_by_role_impl(UserRole::Student, true)
            .await
            .expect("list active students");
        assert_eq!(active_students.len(), 1);
        assert_eq!(active_students[0].last_name, "Nowak");

        assert_eq!(
            storage
                .count_users_by_role_impl(UserRole::Lecturer)
                .await
                .expect("count lecturers"),
            1
        );
    }

    #[tokio::test]
    async fn test_update_last_login() {
        let storage = memory_storage().await;

        let user = storage
            .create_user_impl(new_user("admin", UserRole::Admin))
            .await
            .expect("create user");
        assert!(user.last_login.is_none());

        assert!(
            storage
                .update_last_login_impl(user.id)
                .await
                .expect("update last login")
        );
        let reloaded = storage
            .get_user_by_id_impl(user.id)
            .await
            .expect("lookup")
            .expect("user exists");
        assert!(reloaded.last_login.is_some());
    }
}
