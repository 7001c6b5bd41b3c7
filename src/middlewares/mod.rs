pub mod require_role;
pub mod require_session;

pub use require_role::RequireRole;
pub use require_session::RequireSession;

use actix_web::HttpResponse;
use actix_web::http::header::{CONTENT_TYPE, LOCATION};

// 未认证请求统一重定向到登录页
pub(crate) fn redirect_to_login() -> HttpResponse {
    HttpResponse::Found()
        .insert_header((LOCATION, "/login"))
        .finish()
}

// 越权访问返回不带页面数据的 403
pub(crate) fn forbidden_response() -> HttpResponse {
    HttpResponse::Forbidden()
        .insert_header((CONTENT_TYPE, "text/plain; charset=utf-8"))
        .body("Forbidden")
}
