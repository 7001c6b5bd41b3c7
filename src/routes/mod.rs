pub mod admin_courses;

pub mod admin_groups;

pub mod admin_users;

pub mod auth;

pub mod lecturer;

pub use admin_courses::configure_admin_course_routes;
pub use admin_groups::configure_admin_group_routes;
pub use admin_users::configure_admin_user_routes;
pub use auth::configure_auth_routes;
pub use lecturer::configure_lecturer_routes;
