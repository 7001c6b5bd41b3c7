use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares::{RequireRole, RequireSession};
use crate::models::groups::requests::{CreateGroupForm, EnrollStudentForm};
use crate::models::users::entities::UserRole;
use crate::services::GroupService;

// 懒加载的全局 GroupService 实例
static GROUP_SERVICE: Lazy<GroupService> = Lazy::new(GroupService::new_lazy);

pub async fn list_groups(request: HttpRequest) -> ActixResult<HttpResponse> {
    GROUP_SERVICE.list_groups(&request).await
}

pub async fn create_group(
    req: HttpRequest,
    form: web::Form<CreateGroupForm>,
) -> ActixResult<HttpResponse> {
    GROUP_SERVICE.create_group(form.into_inner(), &req).await
}

pub async fn group_roster(req: HttpRequest, path: web::Path<i64>) -> ActixResult<HttpResponse> {
    GROUP_SERVICE.group_roster(path.into_inner(), &req).await
}

pub async fn enroll_student(
    req: HttpRequest,
    path: web::Path<i64>,
    form: web::Form<EnrollStudentForm>,
) -> ActixResult<HttpResponse> {
    GROUP_SERVICE
        .enroll_student(path.into_inner(), form.into_inner(), &req)
        .await
}

pub async fn remove_enrollment(
    req: HttpRequest,
    path: web::Path<i64>,
) -> ActixResult<HttpResponse> {
    GROUP_SERVICE
        .remove_enrollment(path.into_inner(), &req)
        .await
}

// 配置路由
pub fn configure_admin_group_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/admin/groups")
            .wrap(RequireRole::new(UserRole::Admin))
            .wrap(RequireSession)
            .route("", web::get().to(list_groups))
            .route("", web::post().to(create_group))
            .route("/{id}/students", web::get().to(group_roster))
            .route("/{id}/students", web::post().to(enroll_student)),
    )
    .service(
        web::scope("/admin/enrollments")
            .wrap(RequireRole::new(UserRole::Admin))
            .wrap(RequireSession)
            .route("/{id}/remove", web::post().to(remove_enrollment)),
    );
}
