use actix_web::http::header::LOCATION;
use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::GroupService;
use crate::models::{
    ApiResponse, ErrorCode,
    groups::requests::{CreateGroupForm, NewClassGroup},
    users::entities::UserRole,
};

// semester/year 允许留空，填了就必须是整数
fn parse_optional_int(value: &str) -> Result<Option<i32>, ()> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    trimmed.parse::<i32>().map(Some).map_err(|_| ())
}

pub async fn create_group(
    service: &GroupService,
    form: CreateGroupForm,
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
                        format!("Failed to list class groups: {e}"),
                    ),
                )),
            }
        };
    }

    // 必填字段校验
    for (value, label) in [
        (&form.name, "name"),
        (&form.course_id, "course"),
        (&form.lecturer_id, "lecturer"),
    ] {
        if value.trim().is_empty() {
            return form_error!(ErrorCode::MissingField, format!("Missing field: {label}"));
        }
    }

    let course_id = match form.course_id.trim().parse::<i64>() {
        Ok(id) => id,
        Err(_) => {
            return form_error!(ErrorCode::InvalidNumber, "Course id must be a number");
        }
    };

    let lecturer_id = match form.lecturer_id.trim().parse::<i64>() {
        Ok(id) => id,
        Err(_) => {
            return form_error!(ErrorCode::InvalidNumber, "Lecturer id must be a number");
        }
    };

    let semester = match parse_optional_int(&form.semester) {
        Ok(semester) => semester,
        Err(()) => {
            return form_error!(ErrorCode::InvalidNumber, "Semester must be a number");
        }
    };

    let year = match parse_optional_int(&form.year) {
        Ok(year) => year,
        Err(()) => {
            return form_error!(ErrorCode::InvalidNumber, "Year must be a number");
        }
    };

    // 课程必须存在
    match storage.get_course_by_id(course_id).await {
        Ok(Some(_)) => {}
        Ok(None) => {
            return form_error!(
                ErrorCode::CourseNotFound,
                format!("Course {course_id} not found")
            );
        }
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Failed to check course: {e}"),
                )),
            );
        }
    }

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

    let new_group = NewClassGroup {
        name: form.name.trim().to_string(),
        semester,
        year,
        course_id,
        lecturer_id,
    };

    match storage.create_group(new_group).await {
        Ok(group) => {
            tracing::info!("Class group {} created", group.name);
            Ok(HttpResponse::Found()
                .insert_header((LOCATION, "/admin/groups"))
                .finish())
        }
        Err(e) => {
            error!("Class group creation failed: {}", e);
            form_error!(ErrorCode::GroupCreationFailed, "Failed to create class group")
        }
    }
}
