pub mod courses;
pub mod students;
pub mod users;

pub use courses::CourseService;
pub use students::StudentService;
pub use users::UserService;

use actix_web::HttpResponse;
use tracing::error;

use crate::errors::CourseApiError;
use crate::models::{ApiResponse, ErrorCode};

/// 存储层错误转换为 HTTP 响应
///
/// 校验失败 400，资源缺失 404，冲突 409，其余记录日志后返回 500。
pub(crate) fn storage_error_response(
    code: ErrorCode,
    context: &str,
    err: &CourseApiError,
) -> HttpResponse {
    match err {
        CourseApiError::Validation(msg) => HttpResponse::BadRequest().json(
            ApiResponse::error_empty(ErrorCode::ValidationFailed, msg.as_str()),
        ),
        CourseApiError::NotFound(msg) => HttpResponse::NotFound()
            .json(ApiResponse::error_empty(ErrorCode::NotFound, msg.as_str())),
        CourseApiError::Conflict(msg) => {
            HttpResponse::Conflict().json(ApiResponse::error_empty(code, msg.as_str()))
        }
        _ => {
            error!("{}: {}", context, err);
            HttpResponse::InternalServerError()
                .json(ApiResponse::error_empty(code, format!("{context}: {err}")))
        }
    }
}

/// 名称字段校验失败的响应，附带出错字段
pub(crate) fn invalid_field_response(field: &str, message: &str) -> HttpResponse {
    HttpResponse::BadRequest().json(ApiResponse::error(
        ErrorCode::ValidationFailed,
        serde_json::json!({ "field": field }),
        message,
    ))
}
