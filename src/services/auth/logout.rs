use actix_web::{HttpResponse, Result as ActixResult};
use actix_web::http::header::LOCATION;

use crate::utils::session::SessionUtils;

use super::AuthService;

pub async fn handle_logout(_service: &AuthService) -> ActixResult<HttpResponse> {
    // 无条件清除会话 Cookie，即使请求本来就没有会话
    Ok(HttpResponse::Found()
        .insert_header((LOCATION, "/login"))
        .cookie(SessionUtils::create_empty_session_cookie())
        .finish())
}
