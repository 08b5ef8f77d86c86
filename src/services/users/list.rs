use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::UserService;
use crate::models::ErrorCode;
use crate::services::storage_error_response;

pub async fn list_users(service: &UserService, request: &HttpRequest) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;

    match storage.list_users().await {
        Ok(users) => Ok(HttpResponse::Ok().json(users)),
        Err(e) => Ok(storage_error_response(
            ErrorCode::InternalServerError,
            "Failed to retrieve user list",
            &e,
        )),
    }
}
