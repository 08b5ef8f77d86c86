//! 安全的路径参数提取器
//!
//! 路径中的 ID 必须是正整数，否则直接返回 404，与资源不存在的表现一致。

use std::future::{Ready, ready};

use actix_web::dev::Payload;
use actix_web::error::InternalError;
use actix_web::{FromRequest, HttpRequest, HttpResponse};

use crate::models::{ApiResponse, ErrorCode};

fn parse_positive_id(raw: Option<&str>) -> Option<i64> {
    raw.and_then(|value| value.parse::<i64>().ok())
        .filter(|id| *id > 0)
}

fn extract_path_id(req: &HttpRequest, name: &str) -> Result<i64, actix_web::Error> {
    parse_positive_id(req.match_info().get(name)).ok_or_else(|| {
        let response = HttpResponse::NotFound()
            .json(ApiResponse::error_empty(ErrorCode::NotFound, "Not found."));
        InternalError::from_response(format!("invalid path parameter `{name}`"), response).into()
    })
}

/// `{course_id}` 路径参数
#[derive(Debug, Clone, Copy)]
pub struct SafeCourseIdI64(pub i64);

impl FromRequest for SafeCourseIdI64 {
    type Error = actix_web::Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        ready(extract_path_id(req, "course_id").map(SafeCourseIdI64))
    }
}
