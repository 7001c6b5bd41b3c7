/*!
 * 基于角色的访问控制中间件
 *
 * 必须在 RequireSession 之后使用。角色不符返回不带页面数据的 403，
 * 扩展中没有会话身份则视为未登录，302 跳转到登录页。
 *
 * ## 使用方法
 *
 * ```rust,ignore
 * web::scope("/admin")
 *     .wrap(RequireRole::new(UserRole::Admin))
 *     .wrap(RequireSession)
 *     .route("/users", web::get().to(admin_users_handler))
 * ```
 */

use actix_service::{Service, Transform};
use actix_web::{
    Error, HttpMessage,
    body::EitherBody,
    dev::{ServiceRequest, ServiceResponse},
};
use futures_util::future::{LocalBoxFuture, Ready, ready};
use std::rc::Rc;
use tracing::info;

use crate::middlewares::{forbidden_response, redirect_to_login};
use crate::models::auth::SessionUser;
use crate::models::users::entities::UserRole;

#[derive(Clone)]
pub struct RequireRole {
    required_role: UserRole,
}

impl RequireRole {
    /// 创建需要特定角色的中间件
    pub fn new(role: UserRole) -> Self {
        Self {
            required_role: role,
        }
    }
}

impl<S, B> Transform<S, ServiceRequest> for RequireRole
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type InitError = ();
    type Transform = RequireRoleMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(RequireRoleMiddleware {
            service: Rc::new(service),
            required_role: self.required_role,
        }))
    }
}

pub struct RequireRoleMiddleware<S> {
    service: Rc<S>,
    required_role: UserRole,
}

impl<S, B> Service<ServiceRequest> for RequireRoleMiddleware<S>
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
        let required_role = self.required_role;

        Box::pin(async move {
            let session = req.extensions().get::<SessionUser>().cloned();

            match session {
                Some(user) if user.role == required_role => {
                    let res = srv.call(req).await?.map_into_left_body();
                    Ok(res)
                }
                Some(user) => {
                    info!(
                        "Access denied for user {} (role: {}). Required role: {}",
                        user.username, user.role, required_role
                    );
                    Ok(req.into_response(forbidden_response().map_into_right_body()))
                }
                None => {
                    info!("Role check without session identity for {}", req.path());
                    Ok(req.into_response(redirect_to_login().map_into_right_body()))
                }
            }
        })
    }
}
