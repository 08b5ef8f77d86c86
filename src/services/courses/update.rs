use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::CourseService;
use crate::models::{ApiResponse, ErrorCode, courses::requests::PartialUpdateCourseRequest};
use crate::services::{invalid_field_response, storage_error_response};
use crate::utils::validate::validate_name;

pub async fn update_course(
    service: &CourseService,
    request: &HttpRequest,
    course_id: i64,
    mut update_data: PartialUpdateCourseRequest,
) -> ActixResult<HttpResponse> {
    if let Some(name) = update_data.name.take() {
        if let Err(msg) = validate_name(&name) {
            return Ok(invalid_field_response("name", msg));
        }
        update_data.name = Some(name.trim().to_string());
    }

    let storage = service.get_storage(request)?;

    match storage.update_course(course_id, update_data).await {
        Ok(Some(course)) => {
            info!("Course {} updated", course.id);
            Ok(HttpResponse::Ok().json(course))
        }
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::CourseNotFound,
            "Course not found",
        ))),
        Err(e) => Ok(storage_error_response(
            ErrorCode::CourseUpdateFailed,
            "Course update failed",
            &e,
        )),
    }
}
