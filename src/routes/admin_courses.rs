use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares::{RequireRole, RequireSession};
use crate::models::courses::requests::CreateCourseForm;
use crate::models::users::entities::UserRole;
use crate::services::CourseService;

// 懒加载的全局 CourseService 实例
static COURSE_SERVICE: Lazy<CourseService> = Lazy::new(CourseService::new_lazy);

pub async fn list_courses(request: HttpRequest) -> ActixResult<HttpResponse> {
    COURSE_SERVICE.list_courses(&request).await
}

pub async fn create_course(
    req: HttpRequest,
    form: web::Form<CreateCourseForm>,
) -> ActixResult<HttpResponse> {
    COURSE_SERVICE.create_course(form.into_inner(), &req).await
}

pub async fn toggle_course(req: HttpRequest, path: web::Path<i64>) -> ActixResult<HttpResponse> {
    COURSE_SERVICE.toggle_course(path.into_inner(), &req).await
}

// 配置路由
pub fn configure_admin_course_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/admin/courses")
            .wrap(RequireRole::new(UserRole::Admin))
            .wrap(RequireSession)
            .route("", web::get().to(list_courses))
            .route("", web::post().to(create_course))
            .route("/{id}/toggle", web::post().to(toggle_course)),
    );
}
