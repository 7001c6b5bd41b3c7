pub mod create;
pub mod list;
pub mod toggle;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::errors::Result;
use crate::models::courses::responses::CoursesPage;
use crate::models::users::entities::UserRole;
use crate::storage::Storage;

pub struct CourseService {
    storage: Option<Arc<dyn Storage>>,
}

impl CourseService {
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
    pub(crate) async fn load_page(&self, storage: &Arc<dyn Storage>) -> Result<CoursesPage> {
        Ok(CoursesPage {
            courses: storage.list_courses(false).await?,
            lecturers: storage.list_users_by_role(UserRole::Lecturer, true).await?,
        })
    }

    // 课程列表
    pub async fn list_courses(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        list::list_courses(self, request).await
    }

    // 创建课程
    pub async fn create_course(
        &self,
        form: crate::models::courses::requests::CreateCourseForm,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        create::create_course(self, form, request).await
    }

    // 启用/停用课程
    pub async fn toggle_course(
        &self,
        course_id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        toggle::toggle_course(self, course_id, request).await
    }
}
