pub mod class_groups;
pub mod courses;
pub mod enrollments;
pub mod grades;
pub mod lessons;
pub mod prelude;
pub mod users;
