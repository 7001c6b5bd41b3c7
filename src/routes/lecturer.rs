use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares::{self, RequireRole, RequireSession};
use crate::models::users::entities::UserRole;
use crate::services::LecturerService;

// 懒加载的全局 LecturerService 实例
static LECTURER_SERVICE: Lazy<LecturerService> = Lazy::new(LecturerService::new_lazy);

pub async fn my_courses(request: HttpRequest) -> ActixResult<HttpResponse> {
    match RequireSession::extract_session_user(&request) {
        Some(session) => LECTURER_SERVICE.my_courses(session, &request).await,
        None => Ok(middlewares::redirect_to_login()),
    }
}

// 配置路由
pub fn configure_lecturer_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/lecturer")
            .wrap(RequireRole::new(UserRole::Lecturer))
            .wrap(RequireSession)
            .route("/courses", web::get().to(my_courses)),
    );
}
