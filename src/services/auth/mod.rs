pub mod dashboard;
pub mod login;
pub mod logout;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::config::AppConfig;
use crate::models::auth::SessionUser;
use crate::storage::Storage;

pub struct AuthService {
    storage: Option<Arc<dyn Storage>>,
}

impl AuthService {
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

    pub(crate) fn get_config(&self) -> &AppConfig {
        AppConfig::get()
    }

    // 登录页
    pub async fn login_page(&self) -> ActixResult<HttpResponse> {
        login::handle_login_page(self).await
    }

    // 登录验证
    pub async fn login(
        &self,
        form: crate::models::auth::LoginForm,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        login::handle_login(self, form, request).await
    }

    // 注销
    pub async fn logout(&self) -> ActixResult<HttpResponse> {
        logout::handle_logout(self).await
    }

    // 登录后主页
    pub async fn dashboard(
        &self,
        session: SessionUser,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        dashboard::handle_dashboard(self, session, request).await
    }

    // 管理员首页
    pub async fn admin_panel(
        &self,
        session: SessionUser,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        dashboard::handle_admin_panel(self, session, request).await
    }
}
