use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::StudentService;
use crate::models::{ErrorCode, students::requests::StudentListQuery};
use crate::services::storage_error_response;

pub async fn list_students(
    service: &StudentService,
    request: &HttpRequest,
    query: StudentListQuery,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;

    match storage.list_students(query).await {
        Ok(students) => Ok(HttpResponse::Ok().json(students)),
        Err(e) => Ok(storage_error_response(
            ErrorCode::InternalServerError,
            "Failed to retrieve student list",
            &e,
        )),
    }
}
