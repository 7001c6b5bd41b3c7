use actix_web::http::header::LOCATION;
use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::CourseService;
use crate::models::{
    ApiResponse, ErrorCode,
    courses::requests::{CreateCourseForm, NewCourse},
    users::entities::UserRole,
};

pub async fn create_course(
    service: &CourseService,
    form: CreateCourseForm,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    macro_rules! form_error {
        ($code:expr, $msg:expr) => {
            match service.load_page(&storage).await {
                Ok(page) => Ok(HttpResponse::Ok().json(ApiResponse::error($code, page, $msg))),
                Err(e) => Ok(HttpResponse::InternalServerError().json(
                    ApiResponse::error_empty(
                        ErrorCode::InternalServerError,
                        format!("Failed to list courses: {e}"),
                    ),
                )),
            }
        };
    }

    // 必填字段校验
    for (value, label) in [
        (&form.code, "code"),
        (&form.name, "name"),
        (&form.ects, "ECTS"),
        (&form.lecturer_id, "lecturer"),
    ] {
        if value.trim().is_empty() {
            return form_error!(ErrorCode::MissingField, format!("Missing field: {label}"));
        }
    }

    let ects = match form.ects.trim().parse::<i32>() {
        Ok(ects) => ects,
        Err(_) => {
            return form_error!(ErrorCode::InvalidNumber, "ECTS must be a number");
        }
    };

    let lecturer_id = match form.lecturer_id.trim().parse::<i64>() {
        Ok(id) => id,
        Err(_) => {
            return form_error!(ErrorCode::InvalidNumber, "Lecturer id must be a number");
        }
    };

    // 讲师必须存在且具有讲师角色
    match storage.get_user_by_id(lecturer_id).await {
        Ok(Some(user)) if user.role == UserRole::Lecturer => {}
        Ok(_) => {
            return form_error!(
                ErrorCode::LecturerRoleRequired,
                "Selected user is not a lecturer"
            );
        }
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Failed to check lecturer: {e}"),
                )),
            );
        }
    }

    // 课程代码唯一
    match storage.get_course_by_code(form.code.trim()).await {
        Ok(Some(_)) => {
            return form_error!(
                ErrorCode::CourseCodeExists,
                format!("Course code {} is already in use", form.code.trim())
            );
        }
        Ok(None) => {}
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Failed to check course code: {e}"),
                )),
            );
        }
    }

    let description = form.description.trim();
    let new_course = NewCourse {
        code: form.code.trim().to_string(),
        name: form.name.trim().to_string(),
        ects,
        description: (!description.is_empty()).then(|| description.to_string()),
        lecturer_id,
    };

    match storage.create_course(new_course).await {
        Ok(course) => {
            tracing::info!("Course {} created", course.code);
            Ok(HttpResponse::Found()
                .insert_header((LOCATION, "/admin/courses"))
                .finish())
        }
        Err(e) => {
            error!("Course creation failed: {}", e);
            form_error!(ErrorCode::CourseCreationFailed, "Failed to create course")
        }
    }
}
