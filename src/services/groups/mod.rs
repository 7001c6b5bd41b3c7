pub mod create;
pub mod list;
pub mod roster;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::errors::Result;
use crate::models::groups::entities::ClassGroup;
use crate::models::groups::responses::{GroupsPage, RosterPage};
use crate::models::users::entities::UserRole;
use crate::storage::Storage;

pub struct GroupService {
    storage: Option<Arc<dyn Storage>>,
}

impl GroupService {
    pub fn new_lazy() -> Self {
        Self { storage: None }
    }

    pub(crate) fn get_storage(&self, request: &HttpRequest) -> Arc<dyn Storage> {
        if let Some(storage) = &self.storage {
            storage.clone()
        } else {
            request
                .app_data::<actix_web::web::Data<Arc<dyn Storage>>>()
                .expect("Storage not found in app data")
                .get_ref()
                .clone()
        }
    }

    // 表单校验失败时重载的列表视图
    pub(crate) async fn load_page(&self, storage: &Arc<dyn Storage>) -> Result<GroupsPage> {
        Ok(GroupsPage {
            groups: storage.list_groups().await?,
            courses: storage.list_courses(true).await?,
            lecturers: storage.list_users_by_role(UserRole::Lecturer, true).await?,
        })
    }

    // 名单视图（名单 + 可加入的学生下拉列表）
    pub(crate) async fn load_roster_page(
        &self,
        storage: &Arc<dyn Storage>,
        group: ClassGroup,
    ) -> Result<RosterPage> {
        let roster = storage.list_group_roster(group.id).await?;
        let students = storage.list_users_by_role(UserRole::Student, true).await?;
        Ok(RosterPage {
            group,
            roster,
            students,
        })
    }

    // 班组列表
    pub async fn list_groups(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        list::list_groups(self, request).await
    }

    // 创建班组
    pub async fn create_group(
        &self,
        form: crate::models::groups::requests::CreateGroupForm,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        create::create_group(self, form, request).await
    }

    // 班组名单
    pub async fn group_roster(
        &self,
        group_id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        roster::group_roster(self, group_id, request).await
    }

    // 学生加入班组
    pub async fn enroll_student(
        &self,
        group_id: i64,
        form: crate::models::groups::requests::EnrollStudentForm,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        roster::enroll_student(self, group_id, form, request).await
    }

    // 移除选课记录
    pub async fn remove_enrollment(
        &self,
        enrollment_id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        roster::remove_enrollment(self, enrollment_id, request).await
    }
}

#[cfg(test)]
mod tests {
    use actix_web::cookie::Cookie;
    use actix_web::http::StatusCode;
    use actix_web::http::header::LOCATION;
    use actix_web::{App, test, web};
    use std::sync::Arc;

    use crate::models::{
        ErrorCode,
        courses::requests::NewCourse,
        groups::requests::NewClassGroup,
        users::{entities::UserRole, requests::NewUser},
    };
    use crate::routes;
    use crate::storage::Storage;
    use crate::storage::sea_orm_storage::test_support::memory_storage;
    use crate::utils::password::hash_password;

    fn new_user(username: &str, last_name: &str, role: UserRole) -> NewUser {
        NewUser {
            username: username.to_string(),
            email: format!("{username}@uni.test"),
            password_hash: hash_password("pass123"),
            first_name: "Jan".to_string(),
            last_name: last_name.to_string(),
            role,
        }
    }

    // 管理员会话 + 一个挂了讲师和课程的班组，外加一名学生
    async fn roster_fixture() -> (Arc<dyn Storage>, Cookie<'static>, i64, i64) {
        let storage = memory_storage().await;

        let admin = storage
            .create_user_impl(new_user("admin", "Administrator", UserRole::Admin))
            .await
            .expect("seed admin");
        let lecturer = storage
            .create_user_impl(new_user("lecturer1", "Nowak", UserRole::Lecturer))
            .await
            .expect("seed lecturer");
        let student = storage
            .create_user_impl(new_user("student1", "Kowalski", UserRole::Student))
            .await
            .expect("seed student");

        let course = storage
            .create_course_impl(NewCourse {
                code: "INF101".to_string(),
                name: "Programming basics".to_string(),
                ects: 5,
                description: None,
                lecturer_id: lecturer.id,
            })
            .await
            .expect("seed course");
        let group = storage
            .create_group_impl(NewClassGroup {
                name: "A1".to_string(),
                semester: Some(1),
                year: Some(2026),
                course_id: course.id,
                lecturer_id: lecturer.id,
            })
            .await
            .expect("seed group");

        let token = crate::utils::session::SessionUtils::generate_session_token(
            admin.id,
            &admin.username,
            &admin.role,
        )
        .expect("session token");
        let cookie = crate::utils::session::SessionUtils::create_session_cookie(&token);

        (Arc::new(storage), cookie, group.id, student.id)
    }

    #[actix_web::test]
    async fn test_duplicate_active_enrollment_is_rejected() {
        let (storage, cookie, group_id, student_id) = roster_fixture().await;
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(storage.clone()))
                .configure(routes::configure_admin_group_routes),
        )
        .await;

        let enroll = || {
            test::TestRequest::post()
                .uri(&format!("/admin/groups/{group_id}/students"))
                .cookie(cookie.clone())
                .set_form(serde_json::json!({
                    "student_id": student_id.to_string(),
                }))
                .to_request()
        };

        let resp = test::call_service(&app, enroll()).await;
        assert_eq!(resp.status(), StatusCode::FOUND);
        assert_eq!(
            resp.headers().get(LOCATION).and_then(|v| v.to_str().ok()),
            Some(format!("/admin/groups/{group_id}/students").as_str())
        );

        // 同一学生第二次加入：200 带错误码，当前名单随视图重载
        let resp = test::call_service(&app, enroll()).await;
        assert_eq!(resp.status(), StatusCode::OK);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["code"], ErrorCode::AlreadyEnrolled as i32);
        assert_eq!(body["data"]["roster"].as_array().map(|r| r.len()), Some(1));

        // 在册记录仍然只有一条
        let roster = storage.list_group_roster(group_id).await.expect("roster");
        assert_eq!(roster.len(), 1);
    }

    #[actix_web::test]
    async fn test_reenroll_after_removal_succeeds() {
        let (storage, cookie, group_id, student_id) = roster_fixture().await;
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(storage.clone()))
                .configure(routes::configure_admin_group_routes),
        )
        .await;

        let enroll = || {
            test::TestRequest::post()
                .uri(&format!("/admin/groups/{group_id}/students"))
                .cookie(cookie.clone())
                .set_form(serde_json::json!({
                    "student_id": student_id.to_string(),
                }))
                .to_request()
        };

        let resp = test::call_service(&app, enroll()).await;
        assert_eq!(resp.status(), StatusCode::FOUND);

        let enrollment = storage
            .find_active_enrollment(student_id, group_id)
            .await
            .expect("lookup")
            .expect("active enrollment");
        let req = test::TestRequest::post()
            .uri(&format!("/admin/enrollments/{}/remove", enrollment.id))
            .cookie(cookie.clone())
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::FOUND);

        // 移除后可以重新加入
        let resp = test::call_service(&app, enroll()).await;
        assert_eq!(resp.status(), StatusCode::FOUND);
    }
}
