use serde::{Deserialize, Serialize};

// 用户角色
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum UserRole {
    Student,  // 学生
    Lecturer, // 讲师
    Admin,    // 管理员
}

impl UserRole {
    pub const STUDENT: &'static str = "student";
    pub const LECTURER: &'static str = "lecturer";
    pub const ADMIN: &'static str = "admin";
}

impl<'de> Deserialize<'de> for UserRole {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

impl std::fmt::Display for UserRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UserRole::Student => write!(f, "{}", UserRole::STUDENT),
            UserRole::Lecturer => write!(f, "{}", UserRole::LECTURER),
            UserRole::Admin => write!(f, "{}", UserRole::ADMIN),
        }
    }
}

impl std::str::FromStr for UserRole {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            UserRole::STUDENT => Ok(UserRole::Student),
            UserRole::LECTURER => Ok(UserRole::Lecturer),
            UserRole::ADMIN => Ok(UserRole::Admin),
            _ => Err(format!(
                "Invalid user role: '{s}'. Supported roles: student, lecturer, admin"
            )),
        }
    }
}

// 用户实体
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub username: String,
    pub email: String,
    #[serde(skip_serializing, default)] // 不序列化到JSON响应中
    pub password_hash: String,
    pub first_name: String,
    pub last_name: String,
    pub role: UserRole,
    pub is_active: bool,
    pub last_login: Option<chrono::DateTime<chrono::Utc>>,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

impl User {
    /// 姓名合并为一行
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    pub fn is_admin(&self) -> bool {
        self.role == UserRole::Admin
    }

    pub fn is_lecturer(&self) -> bool {
        self.role == UserRole::Lecturer
    }

    pub fn is_student(&self) -> bool {
        self.role == UserRole::Student
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_parse() {
        assert_eq!("student".parse::<UserRole>(), Ok(UserRole::Student));
        assert_eq!("lecturer".parse::<UserRole>(), Ok(UserRole::Lecturer));
        assert_eq!("admin".parse::<UserRole>(), Ok(UserRole::Admin));
        assert!("professor".parse::<UserRole>().is_err());
        assert!("Admin".parse::<UserRole>().is_err());
    }

    #[test]
    fn test_role_display_roundtrip() {
        for role in [UserRole::Student, UserRole::Lecturer, UserRole::Admin] {
            assert_eq!(role.to_string().parse::<UserRole>(), Ok(role));
        }
    }
}
