pub use super::class_groups::Entity as ClassGroups;
pub use super::courses::Entity as Courses;
pub use super::enrollments::Entity as Enrollments;
pub use super::grades::Entity as Grades;
pub use super::lessons::Entity as Lessons;
pub use super::users::Entity as Users;
