use actix_web::http::header::LOCATION;
use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::UserService;
use crate::models::{ApiResponse, ErrorCode, auth::SessionUser};

pub async fn toggle_user(
    service: &UserService,
    user_id: i64,
    session: SessionUser,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    macro_rules! form_error {
        ($code:expr, $msg:expr) => {
            match service.load_page(&storage).await {
                Ok(page) => Ok(HttpResponse::Ok().json(ApiResponse::error($code, page, $msg))),
                Err(e) => Ok(HttpResponse::InternalServerError().json(
                    ApiResponse::error_empty(
                        ErrorCode::InternalServerError,
                        format!("Failed to list users: {e}"),
                    ),
                )),
            }
        };
    }

    // 管理员不能停用自己的账号
    if user_id == session.id {
        return form_error!(
            ErrorCode::SelfToggleForbidden,
            "You cannot deactivate your own account"
        );
    }

    let user = match storage.get_user_by_id(user_id).await {
        Ok(Some(user)) => user,
        Ok(None) => {
            return form_error!(ErrorCode::UserNotFound, format!("User {user_id} not found"));
        }
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Failed to load user: {e}"),
                )),
            );
        }
    };

    match storage.set_user_active(user.id, !user.is_active).await {
        Ok(_) => Ok(HttpResponse::Found()
            .insert_header((LOCATION, "/admin/users"))
            .finish()),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to update user: {e}"),
            )),
        ),
    }
}
