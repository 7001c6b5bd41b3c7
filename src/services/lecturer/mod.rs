pub mod courses;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::auth::SessionUser;
use crate::storage::Storage;

pub struct LecturerService {
    storage: Option<Arc<dyn Storage>>,
}

impl LecturerService {
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

    // 讲师自己的课程与班组
    pub async fn my_courses(
        &self,
        session: SessionUser,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        courses::my_courses(self, session, request).await
    }
}
