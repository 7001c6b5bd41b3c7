use sha2::{Digest, Sha256};

/// 哈希密码（SHA-256 十六进制摘要）
///
/// 注意：无盐单轮 SHA-256，沿用现有账号库的既定格式。
/// 迁移到 argon2/bcrypt 需要全量重置口令，另行排期。
pub fn hash_password(password: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(password.as_bytes());
    hex::encode(hasher.finalize())
}

/// 验证密码
pub fn verify_password(password: &str, password_hash: &str) -> bool {
    hash_password(password) == password_hash
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_is_deterministic() {
        assert_eq!(hash_password("pass123"), hash_password("pass123"));
        assert_ne!(hash_password("pass123"), hash_password("pass124"));
    }

    #[test]
    fn test_known_digest() {
        // echo -n 'pass123' | sha256sum
        assert_eq!(
            hash_password("pass123"),
            "9b8769a4a742959a2d0298c36fb70623f2dfacda8436237df08d8dfd5b37374c"
        );
    }

    #[test]
    fn test_verify() {
        let digest = hash_password("admin123");
        assert!(verify_password("admin123", &digest));
        assert!(!verify_password("admin124", &digest));
        assert!(!verify_password("admin123", "not-a-digest"));
    }
}
