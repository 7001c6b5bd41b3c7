use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares::{self, RequireSession};
use crate::models::auth::LoginForm;
use crate::models::users::entities::UserRole;
use crate::services::AuthService;

// 懒加载的全局 AuthService 实例
static AUTH_SERVICE: Lazy<AuthService> = Lazy::new(AuthService::new_lazy);

pub async fn login_page(_request: HttpRequest) -> ActixResult<HttpResponse> {
    AUTH_SERVICE.login_page().await
}

pub async fn login(req: HttpRequest, form: web::Form<LoginForm>) -> ActixResult<HttpResponse> {
    AUTH_SERVICE.login(form.into_inner(), &req).await
}

pub async fn logout(_request: HttpRequest) -> ActixResult<HttpResponse> {
    AUTH_SERVICE.logout().await
}

pub async fn dashboard(request: HttpRequest) -> ActixResult<HttpResponse> {
    match RequireSession::extract_session_user(&request) {
        Some(session) => AUTH_SERVICE.dashboard(session, &request).await,
        None => Ok(middlewares::redirect_to_login()),
    }
}

pub async fn admin_panel(request: HttpRequest) -> ActixResult<HttpResponse> {
    match RequireSession::extract_session_user(&request) {
        Some(session) => AUTH_SERVICE.admin_panel(session, &request).await,
        None => Ok(middlewares::redirect_to_login()),
    }
}

// 配置路由
pub fn configure_auth_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(login_page))
        .route("/", web::post().to(login))
        .route("/login", web::get().to(login_page))
        .route("/login", web::post().to(login))
        .route("/logout", web::get().to(logout))
        .service(
            web::scope("/dashboard")
                .wrap(RequireSession)
                .route("", web::get().to(dashboard)),
        )
        .service(
            // 精确匹配 /admin，子路径由各自模块注册
            web::resource("/admin")
                .wrap(middlewares::RequireRole::new(UserRole::Admin))
                .wrap(RequireSession)
                .route(web::get().to(admin_panel)),
        );
}
