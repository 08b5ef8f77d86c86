use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::CourseService;
use crate::models::{ErrorCode, courses::requests::CourseListQuery};
use crate::services::storage_error_response;

pub async fn list_courses(
    service: &CourseService,
    request: &HttpRequest,
    query: CourseListQuery,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;

    match storage.list_courses(query).await {
        Ok(courses) => Ok(HttpResponse::Ok().json(courses)),
        Err(e) => Ok(storage_error_response(
            ErrorCode::InternalServerError,
            "Failed to retrieve course list",
            &e,
        )),
    }
}
