use actix_web::cookie::{Cookie, SameSite};
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};

use crate::config::AppConfig;
use crate::models::auth::SessionUser;
use crate::models::users::entities::UserRole;

// 会话 Claims 结构体（签名后存入会话 Cookie）
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionClaims {
    pub sub: String,      // Subject (user ID)
    pub username: String, // 用户名
    pub role: String,     // 用户角色
    pub exp: usize,       // Expiration time (时间戳)
    pub iat: usize,       // Issued at (签发时间)
}

pub struct SessionUtils;

impl SessionUtils {
    // 获取会话签名密钥
    fn get_secret() -> String {
        AppConfig::get().session.secret.clone()
    }

    /// 生成会话令牌
    pub fn generate_session_token(
        user_id: i64,
        username: &str,
        role: &UserRole,
    ) -> Result<String, jsonwebtoken::errors::Error> {
        let config = AppConfig::get();
        let now = chrono::Utc::now();
        let expiration = now + chrono::Duration::hours(config.session.expiry_hours);

        let claims = SessionClaims {
            sub: user_id.to_string(),
            username: username.to_string(),
            role: role.to_string(),
            exp: expiration.timestamp() as usize,
            iat: now.timestamp() as usize,
        };

        let secret = Self::get_secret();
        let encoding_key = EncodingKey::from_secret(secret.as_ref());

        encode(&Header::default(), &claims, &encoding_key)
    }

    /// 验证会话令牌并还原会话身份
    pub fn verify_session_token(token: &str) -> Result<SessionUser, String> {
        let secret = Self::get_secret();
        let decoding_key = DecodingKey::from_secret(secret.as_ref());
        let validation = Validation::default();

        let claims = decode::<SessionClaims>(token, &decoding_key, &validation)
            .map(|token_data| token_data.claims)
            .map_err(|e| format!("Invalid session token: {e}"))?;

        let id = claims
            .sub
            .parse::<i64>()
            .map_err(|_| "Invalid user ID in session token".to_string())?;
        let role = claims.role.parse::<UserRole>()?;

        Ok(SessionUser {
            id,
            username: claims.username,
            role,
        })
    }

    /// 创建会话 Cookie
    pub fn create_session_cookie(token: &str) -> Cookie<'static> {
        let config = AppConfig::get();
        Cookie::build(config.session.cookie_name.clone(), token.to_string())
            .path("/")
            .max_age(actix_web::cookie::time::Duration::hours(
                config.session.expiry_hours,
            ))
            .same_site(SameSite::Strict)
            .http_only(true)
            .secure(config.is_production()) // 生产环境下使用 HTTPS
            .finish()
    }

    /// 创建空的会话 Cookie（用于注销）
    pub fn create_empty_session_cookie() -> Cookie<'static> {
        let config = AppConfig::get();
        Cookie::build(config.session.cookie_name.clone(), "")
            .path("/")
            .max_age(actix_web::cookie::time::Duration::seconds(0))
            .same_site(SameSite::Strict)
            .http_only(true)
            .secure(config.is_production())
            .finish()
    }

    /// 从请求中提取会话令牌
    pub fn extract_session_token(req: &actix_web::HttpRequest) -> Option<String> {
        let config = AppConfig::get();
        req.cookie(&config.session.cookie_name)
            .map(|cookie| cookie.value().to_string())
    }
}
