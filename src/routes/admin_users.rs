use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares::{self, RequireRole, RequireSession};
use crate::models::users::entities::UserRole;
use crate::models::users::requests::CreateUserForm;
use crate::services::UserService;

// 懒加载的全局 UserService 实例
static USER_SERVICE: Lazy<UserService> = Lazy::new(UserService::new_lazy);

pub async fn list_users(request: HttpRequest) -> ActixResult<HttpResponse> {
    USER_SERVICE.list_users(&request).await
}

pub async fn create_user(
    req: HttpRequest,
    form: web::Form<CreateUserForm>,
) -> ActixResult<HttpResponse> {
    USER_SERVICE.create_user(form.into_inner(), &req).await
}

pub async fn toggle_user(
    req: HttpRequest,
    path: web::Path<i64>,
) -> ActixResult<HttpResponse> {
    match RequireSession::extract_session_user(&req) {
        Some(session) => {
            USER_SERVICE
                .toggle_user(path.into_inner(), session, &req)
                .await
        }
        None => Ok(middlewares::redirect_to_login()),
    }
}

// 配置路由
pub fn configure_admin_user_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/admin/users")
            .wrap(RequireRole::new(UserRole::Admin))
            .wrap(RequireSession)
            .route("", web::get().to(list_users))
            .route("", web::post().to(create_user))
            .route("/{id}/toggle", web::post().to(toggle_user)),
    );
}
