use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::UserService;
use crate::errors::CourseApiError;
use crate::models::{ApiResponse, ErrorCode, users::requests::CreateUserRequest};
use crate::services::storage_error_response;
use crate::utils::validate::validate_username;

pub async fn create_user(
    service: &UserService,
    request: &HttpRequest,
    user_data: CreateUserRequest,
) -> ActixResult<HttpResponse> {
    // 验证用户名
    if let Err(msg) = validate_username(&user_data.username) {
        return Ok(HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(ErrorCode::UserNameInvalid, msg)));
    }

    let storage = service.get_storage(request)?;

    match storage.create_user(user_data).await {
        Ok(user) => {
            info!("User {} ({}) created", user.id, user.username);
            Ok(HttpResponse::Created().json(user))
        }
        Err(CourseApiError::Conflict(_)) => Ok(HttpResponse::Conflict().json(
            ApiResponse::error_empty(ErrorCode::UserAlreadyExists, "Username already exists"),
        )),
        Err(e) => Ok(storage_error_response(
            ErrorCode::UserCreationFailed,
            "User creation failed",
            &e,
        )),
    }
}
