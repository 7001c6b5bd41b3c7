use actix_web::http::header::LOCATION;
use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::UserService;
use crate::models::{
    ApiResponse, ErrorCode,
    users::{entities::UserRole, requests::CreateUserForm, requests::NewUser},
};
use crate::utils::password::hash_password;

pub async fn create_user(
    service: &UserService,
    form: CreateUserForm,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    // 校验失败时带当前列表重载视图
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

    // 必填字段校验
    for (value, label) in [
        (&form.username, "username"),
        (&form.email, "email"),
        (&form.password, "password"),
        (&form.first_name, "first name"),
        (&form.last_name, "last name"),
        (&form.role, "role"),
    ] {
        if value.trim().is_empty() {
            return form_error!(ErrorCode::MissingField, format!("Missing field: {label}"));
        }
    }

    // 角色字符串显式解析，未知值直接拒绝
    let role = match form.role.parse::<UserRole>() {
        Ok(role) => role,
        Err(_) => {
            return form_error!(
                ErrorCode::InvalidRole,
                format!("Unknown role: {}", form.role)
            );
        }
    };

    // 用户名唯一
    match storage.get_user_by_username(form.username.trim()).await {
        Ok(Some(_)) => {
            return form_error!(
                ErrorCode::UserAlreadyExists,
                format!("Username {} is already taken", form.username.trim())
            );
        }
        Ok(None) => {}
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Failed to check username: {e}"),
                )),
            );
        }
    }

    let new_user = NewUser {
        username: form.username.trim().to_string(),
        email: form.email.trim().to_string(),
        password_hash: hash_password(&form.password),
        first_name: form.first_name.trim().to_string(),
        last_name: form.last_name.trim().to_string(),
        role,
    };

    match storage.create_user(new_user).await {
        Ok(user) => {
            tracing::info!("User {} created with role {}", user.username, user.role);
            Ok(HttpResponse::Found()
                .insert_header((LOCATION, "/admin/users"))
                .finish())
        }
        // 写入失败不终止请求，回到列表并提示
        Err(e) => {
            error!("User creation failed: {}", e);
            form_error!(ErrorCode::UserCreationFailed, "Failed to create user")
        }
    }
}
