/*!
 * 会话认证中间件
 *
 * 校验会话 Cookie 中的签名令牌，还原请求级身份后放入请求扩展。
 * 令牌缺失、过期或被篡改时一律 302 跳转到登录页。
 *
 * ## 使用方法
 *
 * ```rust,ignore
 * web::scope("")
 *     .wrap(RequireSession)
 *     .route("/dashboard", web::get().to(dashboard_handler))
 * ```
 *
 * 处理程序中通过 `RequireSession::extract_session_user(&req)` 取当前身份。
 */

use actix_service::{Service, Transform};
use actix_web::{
    Error, HttpMessage,
    body::EitherBody,
    dev::{ServiceRequest, ServiceResponse},
};
use futures_util::future::{LocalBoxFuture, Ready, ready};
use std::rc::Rc;
use tracing::debug;

use crate::middlewares::redirect_to_login;
use crate::models::auth::SessionUser;
use crate::models::users::entities::UserRole;
use crate::utils::session::SessionUtils;

#[derive(Clone)]
pub struct RequireSession;

impl<S, B> Transform<S, ServiceRequest> for RequireSession
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type InitError = ();
    type Transform = RequireSessionMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(RequireSessionMiddleware {
            service: Rc::new(service),
        }))
    }
}

pub struct RequireSessionMiddleware<S> {
    service: Rc<S>,
}

impl<S, B> Service<ServiceRequest> for RequireSessionMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(
        &self,
        ctx: &mut std::task::Context<'_>,
    ) -> std::task::Poll<Result<(), Self::Error>> {
        self.service.poll_ready(ctx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let srv = self.service.clone();
        Box::pin(async move {
            let session = SessionUtils::extract_session_token(req.request())
                .and_then(|token| SessionUtils::verify_session_token(&token).ok());

            match session {
                Some(user) => {
                    debug!("Session authenticated for user {}", user.username);
                    req.extensions_mut().insert(user);
                    let res = srv.call(req).await?.map_into_left_body();
                    Ok(res)
                }
                None => {
                    debug!("No valid session for request to {}", req.path());
                    Ok(req.into_response(redirect_to_login().map_into_right_body()))
                }
            }
        })
    }
}

impl RequireSession {
    /// 从请求扩展中提取会话身份
    /// 仅在应用了 RequireSession 中间件的路由处理程序中使用
    pub fn extract_session_user(req: &actix_web::HttpRequest) -> Option<SessionUser> {
        req.extensions().get::<SessionUser>().cloned()
    }

    /// 从请求扩展中提取会话角色
    pub fn extract_session_role(req: &actix_web::HttpRequest) -> Option<UserRole> {
        req.extensions().get::<SessionUser>().map(|user| user.role)
    }
}
