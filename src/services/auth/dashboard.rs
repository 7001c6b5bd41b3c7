use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use actix_web::http::header::LOCATION;

use crate::models::{
    ApiResponse, ErrorCode,
    auth::{
        SessionUser,
        responses::{AdminPanelPage, AdminStats, DashboardPage},
    },
    users::entities::UserRole,
};
use crate::utils::session::SessionUtils;

use super::AuthService;

pub async fn handle_dashboard(
    service: &AuthService,
    session: SessionUser,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.get_user_by_id(session.id).await {
        Ok(Some(user)) => {
            Ok(HttpResponse::Ok().json(ApiResponse::success(DashboardPage { user }, "Dashboard")))
        }
        // 会话指向已不存在的账号，按未登录处理
        Ok(None) => Ok(HttpResponse::Found()
            .insert_header((LOCATION, "/login"))
            .cookie(SessionUtils::create_empty_session_cookie())
            .finish()),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to load dashboard: {e}"),
            )),
        ),
    }
}

pub async fn handle_admin_panel(
    service: &AuthService,
    session: SessionUser,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let user = match storage.get_user_by_id(session.id).await {
        Ok(Some(user)) => user,
        Ok(None) => {
            return Ok(HttpResponse::Found()
                .insert_header((LOCATION, "/login"))
                .cookie(SessionUtils::create_empty_session_cookie())
                .finish());
        }
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Failed to load admin panel: {e}"),
                )),
            );
        }
    };

    let students = storage
        .count_users_by_role(UserRole::Student)
        .await
        .unwrap_or(0);
    let lecturers = storage
        .count_users_by_role(UserRole::Lecturer)
        .await
        .unwrap_or(0);
    let courses = storage.count_courses().await.unwrap_or(0);

    Ok(HttpResponse::Ok().json(ApiResponse::success(
        AdminPanelPage {
            user,
            stats: AdminStats {
                students,
                lecturers,
                courses,
            },
        },
        "Admin panel",
    )))
}
