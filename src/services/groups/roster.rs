use actix_web::http::header::LOCATION;
use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::GroupService;
use crate::models::{
    ApiResponse, ErrorCode, groups::requests::EnrollStudentForm, users::entities::UserRole,
};

pub async fn group_roster(
    service: &GroupService,
    group_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let group = match storage.get_group_by_id(group_id).await {
        Ok(Some(group)) => group,
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::GroupNotFound,
                format!("Class group {group_id} not found"),
            )));
        }
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Failed to load class group: {e}"),
                )),
            );
        }
    };

    match service.load_roster_page(&storage, group).await {
        Ok(page) => Ok(HttpResponse::Ok().json(ApiResponse::success(page, "Group roster"))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to load roster: {e}"),
            )),
        ),
    }
}

pub async fn enroll_student(
    service: &GroupService,
    group_id: i64,
    form: EnrollStudentForm,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let group = match storage.get_group_by_id(group_id).await {
        Ok(Some(group)) => group,
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::GroupNotFound,
                format!("Class group {group_id} not found"),
            )));
        }
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Failed to load class group: {e}"),
                )),
            );
        }
    };

    // 校验失败时带当前名单重载视图
    macro_rules! form_error {
        ($code:expr, $msg:expr) => {
            match service.load_roster_page(&storage, group).await {
                Ok(page) => Ok(HttpResponse::Ok().json(ApiResponse::error($code, page, $msg))),
                Err(e) => Ok(HttpResponse::InternalServerError().json(
                    ApiResponse::error_empty(
                        ErrorCode::InternalServerError,
                        format!("Failed to load roster: {e}"),
                    ),
                )),
            }
        };
    }

    if form.student_id.trim().is_empty() {
        return form_error!(ErrorCode::MissingField, "Missing field: student");
    }

    let student_id = match form.student_id.trim().parse::<i64>() {
        Ok(id) => id,
        Err(_) => {
            return form_error!(ErrorCode::InvalidNumber, "Student id must be a number");
        }
    };

    // 学生必须存在且具有学生角色
    match storage.get_user_by_id(student_id).await {
        Ok(Some(user)) if user.role == UserRole::Student => {}
        Ok(_) => {
            return form_error!(
                ErrorCode::StudentRoleRequired,
                "Selected user is not a student"
            );
        }
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Failed to check student: {e}"),
                )),
            );
        }
    }

    // 同一 (student, group) 不允许重复在册
    match storage.find_active_enrollment(student_id, group_id).await {
        Ok(Some(_)) => {
            return form_error!(
                ErrorCode::AlreadyEnrolled,
                "Student is already enrolled in this group"
            );
        }
        Ok(None) => {}
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Failed to check enrollment: {e}"),
                )),
            );
        }
    }

    match storage.create_enrollment(student_id, group_id).await {
        Ok(_) => Ok(HttpResponse::Found()
            .insert_header((LOCATION, format!("/admin/groups/{group_id}/students")))
            .finish()),
        Err(e) => {
            error!("Enrollment failed: {}", e);
            form_error!(ErrorCode::EnrollmentFailed, "Failed to enroll student")
        }
    }
}

pub async fn remove_enrollment(
    service: &GroupService,
    enrollment_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let enrollment = match storage.get_enrollment_by_id(enrollment_id).await {
        Ok(Some(enrollment)) => enrollment,
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::EnrollmentNotFound,
                format!("Enrollment {enrollment_id} not found"),
            )));
        }
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Failed to load enrollment: {e}"),
                )),
            );
        }
    };

    match storage.deactivate_enrollment(enrollment.id).await {
        // 软删除后回到名单页
        Ok(_) => Ok(HttpResponse::Found()
            .insert_header((
                LOCATION,
                format!("/admin/groups/{}/students", enrollment.group_id),
            ))
            .finish()),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to remove enrollment: {e}"),
            )),
        ),
    }
}
