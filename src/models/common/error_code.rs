// 业务错误码，随 ApiResponse.code 返回
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ErrorCode {
    Success = 0,

    // 认证与授权
    AuthFailed = 1001,
    Unauthorized = 1002,
    Forbidden = 1003,

    // 通用校验
    MissingField = 2001,
    InvalidNumber = 2002,
    InvalidRole = 2003,
    NotFound = 2004,

    // 用户
    UserAlreadyExists = 3001,
    UserCreationFailed = 3002,
    UserNotFound = 3003,
    SelfToggleForbidden = 3004,

    // 课程
    CourseCodeExists = 4001,
    CourseCreationFailed = 4002,
    CourseNotFound = 4003,
    LecturerRoleRequired = 4004,

    // 班组与选课
    GroupNotFound = 5001,
    GroupCreationFailed = 5002,
    StudentRoleRequired = 5003,
    AlreadyEnrolled = 5004,
    EnrollmentNotFound = 5005,
    EnrollmentFailed = 5006,

    // 服务器内部
    InternalServerError = 9001,
}
