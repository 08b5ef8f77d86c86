use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::CourseService;
use crate::models::{ErrorCode, courses::requests::CreateCourseRequest};
use crate::services::{invalid_field_response, storage_error_response};
use crate::utils::validate::validate_name;

pub async fn create_course(
    service: &CourseService,
    request: &HttpRequest,
    mut course_data: CreateCourseRequest,
) -> ActixResult<HttpResponse> {
    if let Err(msg) = validate_name(&course_data.name) {
        return Ok(invalid_field_response("name", msg));
    }
    course_data.name = course_data.name.trim().to_string();

    let storage = service.get_storage(request)?;

    match storage.create_course(course_data).await {
        Ok(course) => {
            info!(
                "Course {} ({}) created for user {}",
                course.id, course.name, course.user
            );
            Ok(HttpResponse::Created().json(course))
        }
        Err(e) => Ok(storage_error_response(
            ErrorCode::CourseCreationFailed,
            "Course creation failed",
            &e,
        )),
    }
}
