use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::LecturerService;
use crate::models::{
    ApiResponse, ErrorCode, auth::SessionUser, courses::responses::LecturerCoursesPage,
};

pub async fn my_courses(
    service: &LecturerService,
    session: SessionUser,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    // 只取当前会话讲师自己的记录
    let courses = match storage.list_courses_by_lecturer(session.id).await {
        Ok(courses) => courses,
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Failed to list courses: {e}"),
                )),
            );
        }
    };

    let groups = match storage.list_groups_by_lecturer(session.id).await {
        Ok(groups) => groups,
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Failed to list class groups: {e}"),
                )),
            );
        }
    };

    Ok(HttpResponse::Ok().json(ApiResponse::success(
        LecturerCoursesPage { courses, groups },
        "My courses",
    )))
}
