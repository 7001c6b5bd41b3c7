use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use actix_web::http::header::LOCATION;

use crate::models::{
    ApiResponse, ErrorCode,
    auth::{LoginForm, responses::LoginPage},
};
use crate::utils::password::verify_password;
use crate::utils::session::SessionUtils;

use super::AuthService;

fn login_page_view(service: &AuthService) -> LoginPage {
    LoginPage {
        system_name: service.get_config().app.system_name.clone(),
    }
}

pub async fn handle_login_page(service: &AuthService) -> ActixResult<HttpResponse> {
    Ok(HttpResponse::Ok().json(ApiResponse::success(login_page_view(service), "Login")))
}

pub async fn handle_login(
    service: &AuthService,
    form: LoginForm,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    // 无论用户不存在还是密码错误都返回同一提示
    let invalid = || {
        HttpResponse::Ok().json(ApiResponse::error(
            ErrorCode::AuthFailed,
            login_page_view(service),
            "Invalid username or password",
        ))
    };

    match storage.get_user_by_username(&form.username).await {
        Ok(Some(user)) => {
            if verify_password(&form.password, &user.password_hash) {
                // 登录时间写入失败不阻断登录，但要留下痕迹
                if let Err(e) = storage.update_last_login(user.id).await {
                    tracing::warn!("Failed to update last login for {}: {}", user.username, e);
                }

                match SessionUtils::generate_session_token(user.id, &user.username, &user.role) {
                    Ok(token) => {
                        tracing::info!("User {} logged in", user.username);
                        let cookie = SessionUtils::create_session_cookie(&token);
                        Ok(HttpResponse::Found()
                            .insert_header((LOCATION, "/dashboard"))
                            .cookie(cookie)
                            .finish())
                    }
                    Err(e) => {
                        tracing::error!("Failed to sign session token: {}", e);
                        Ok(
                            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                                ErrorCode::InternalServerError,
                                "Login failed, unable to create session",
                            )),
                        )
                    }
                }
            } else {
                Ok(invalid())
            }
        }
        Ok(None) => Ok(invalid()),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Login failed: {e}"),
            )),
        ),
    }
}
