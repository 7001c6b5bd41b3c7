pub mod create;
pub mod list;
pub mod toggle;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::errors::Result;
use crate::models::auth::SessionUser;
use crate::models::users::responses::UsersPage;
use crate::storage::Storage;

pub struct UserService {
    storage: Option<Arc<dyn Storage>>,
}

impl UserService {
    pub fn new_lazy() -> Self {
        Self { storage: None }
    }

    pub(crate) fn get_storage(&self, request: &HttpRequest) -> Arc<dyn Storage> {
        if let Some(storage) = &self.storage {
            storage.clone()
        } else {
            request
                .app_data::<actix_web::web::Data<Arc<dyn Storage>>>()
                .expect("Storage not found in app data")
                .get_ref()
                .clone()
        }
    }

    // 表单校验失败时重载的列表视图
    pub(crate) async fn load_page(&self, storage: &Arc<dyn Storage>) -> Result<UsersPage> {
        Ok(UsersPage {
            users: storage.list_users().await?,
        })
    }

    // 用户列表
    pub async fn list_users(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        list::list_users(self, request).await
    }

    // 创建用户
    pub async fn create_user(
        &self,
        form: crate::models::users::requests::CreateUserForm,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        create::create_user(self, form, request).await
    }

    // 启用/停用用户
    pub async fn toggle_user(
        &self,
        user_id: i64,
        session: SessionUser,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        toggle::toggle_user(self, user_id, session, request).await
    }
}

#[cfg(test)]
mod tests {
    use actix_web::cookie::Cookie;
    use actix_web::http::StatusCode;
    use actix_web::http::header::LOCATION;
    use actix_web::{App, test, web};
    use std::sync::Arc;

    use crate::models::{
        ErrorCode,
        users::{entities::UserRole, requests::NewUser},
    };
    use crate::routes;
    use crate::storage::Storage;
    use crate::storage::sea_orm_storage::test_support::memory_storage;
    use crate::utils::password::hash_password;

    async fn admin_fixture() -> (Arc<dyn Storage>, Cookie<'static>) {
        let storage = memory_storage().await;
        let admin = storage
            .create_user_impl(NewUser {
                username: "admin".to_string(),
                email: "admin@uni.test".to_string(),
                password_hash: hash_password("admin123"),
                first_name: "System".to_string(),
                last_name: "Administrator".to_string(),
                role: UserRole::Admin,
            })
            .await
            .expect("seed admin");

        let token = crate::utils::session::SessionUtils::generate_session_token(
            admin.id,
            &admin.username,
            &admin.role,
        )
        .expect("session token");
        let cookie = crate::utils::session::SessionUtils::create_session_cookie(&token);

        (Arc::new(storage), cookie)
    }

    fn user_form(username: &str, role: &str) -> serde_json::Value {
        serde_json::json!({
            "username": username,
            "email": format!("{username}@uni.test"),
            "password": "pass123",
            "first_name": "Jan",
            "last_name": "Kowalski",
            "role": role,
        })
    }

    #[actix_web::test]
    async fn test_create_user_redirects_on_success() {
        let (storage, cookie) = admin_fixture().await;
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(storage.clone()))
                .configure(routes::configure_admin_user_routes),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/admin/users")
            .cookie(cookie)
            .set_form(user_form("student1", "student"))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::FOUND);
        assert_eq!(
            resp.headers().get(LOCATION).and_then(|v| v.to_str().ok()),
            Some("/admin/users")
        );
        assert!(
            storage
                .get_user_by_username("student1")
                .await
                .expect("lookup")
                .is_some()
        );
    }

    #[actix_web::test]
    async fn test_create_user_validation_errors_stay_on_page() {
        let (storage, cookie) = admin_fixture().await;
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(storage.clone()))
                .configure(routes::configure_admin_user_routes),
        )
        .await;

        // 缺失字段、未知角色、用户名占用，都以 200 带错误码回到列表
        let cases = [
            (user_form("", "student"), ErrorCode::MissingField),
            (user_form("nowy", "superuser"), ErrorCode::InvalidRole),
            (user_form("admin", "student"), ErrorCode::UserAlreadyExists),
        ];

        for (form, code) in cases {
            let req = test::TestRequest::post()
                .uri("/admin/users")
                .cookie(cookie.clone())
                .set_form(form)
                .to_request();
            let resp = test::call_service(&app, req).await;

            assert_eq!(resp.status(), StatusCode::OK);
            let body: serde_json::Value = test::read_body_json(resp).await;
            assert_eq!(body["code"], code as i32);
            // 视图数据随错误一起返回
            assert!(body["data"]["users"].is_array());
        }
    }

    #[actix_web::test]
    async fn test_admin_cannot_toggle_own_account() {
        let (storage, cookie) = admin_fixture().await;
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(storage.clone()))
                .configure(routes::configure_admin_user_routes),
        )
        .await;

        let admin = storage
            .get_user_by_username("admin")
            .await
            .expect("lookup")
            .expect("admin exists");

        let req = test::TestRequest::post()
            .uri(&format!("/admin/users/{}/toggle", admin.id))
            .cookie(cookie)
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["code"], ErrorCode::SelfToggleForbidden as i32);

        // 账号仍然在册
        let reloaded = storage
            .get_user_by_id(admin.id)
            .await
            .expect("lookup")
            .expect("admin exists");
        assert!(reloaded.is_active);
    }
}
