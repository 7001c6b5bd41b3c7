use actix_web::http::header::LOCATION;
use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::CourseService;
use crate::models::{ApiResponse, ErrorCode};

pub async fn toggle_course(
    service: &CourseService,
    course_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let course = match storage.get_course_by_id(course_id).await {
        Ok(Some(course)) => course,
        Ok(None) => {
            return match service.load_page(&storage).await {
                Ok(page) => Ok(HttpResponse::Ok().json(ApiResponse::error(
                    ErrorCode::CourseNotFound,
                    page,
                    format!("Course {course_id} not found"),
                ))),
                Err(e) => Ok(HttpResponse::InternalServerError().json(
                    ApiResponse::error_empty(
                        ErrorCode::InternalServerError,
                        format!("Failed to list courses: {e}"),
                    ),
                )),
            };
        }
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Failed to load course: {e}"),
                )),
            );
        }
    };

    match storage.set_course_active(course.id, !course.is_active).await {
        Ok(_) => Ok(HttpResponse::Found()
            .insert_header((LOCATION, "/admin/courses"))
            .finish()),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to update course: {e}"),
            )),
        ),
    }
}
