//! 请求参数错误处理器
//!
//! 将 actix-web 提取器的默认纯文本错误替换为统一的 JSON 错误响应。

use actix_web::error::{InternalError, JsonPayloadError, QueryPayloadError, UrlencodedError};
use actix_web::{Error, HttpRequest, HttpResponse};
use tracing::debug;

use crate::models::{ApiResponse, ErrorCode};

fn bad_request(err: impl std::fmt::Display + std::fmt::Debug + 'static, message: String) -> Error {
    let response =
        HttpResponse::BadRequest().json(ApiResponse::error_empty(ErrorCode::BadRequest, message));
    InternalError::from_response(err, response).into()
}

pub fn query_error_handler(err: QueryPayloadError, req: &HttpRequest) -> Error {
    debug!("Invalid query string on {}: {}", req.path(), err);
    let message = format!("Invalid query parameters: {err}");
    bad_request(err, message)
}

pub fn json_error_handler(err: JsonPayloadError, req: &HttpRequest) -> Error {
    debug!("Invalid JSON body on {}: {}", req.path(), err);
    let message = format!("Invalid request body: {err}");
    bad_request(err, message)
}

pub fn form_error_handler(err: UrlencodedError, req: &HttpRequest) -> Error {
    debug!("Invalid form body on {}: {}", req.path(), err);
    let message = format!("Invalid form body: {err}");
    bad_request(err, message)
}
