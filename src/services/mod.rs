pub mod auth;
pub mod courses;
pub mod groups;
pub mod lecturer;
pub mod users;

pub use auth::AuthService;
pub use courses::CourseService;
pub use groups::GroupService;
pub use lecturer::LecturerService;
pub use users::UserService;
