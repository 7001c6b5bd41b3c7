use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::GroupService;
use crate::models::{ApiResponse, ErrorCode};

pub async fn list_groups(
    service: &GroupService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match service.load_page(&storage).await {
        Ok(page) => Ok(HttpResponse::Ok().json(ApiResponse::success(page, "Class groups"))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to list class groups: {e}"),
            )),
        ),
    }
}
