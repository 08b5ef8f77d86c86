use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::CourseService;
use crate::models::{ApiResponse, ErrorCode, courses::requests::AddStudentRequest};
use crate::services::storage_error_response;

pub async fn add_student(
    service: &CourseService,
    request: &HttpRequest,
    course_id: i64,
    data: AddStudentRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;

    match storage.course_exists(course_id).await {
        Ok(true) => {}
        Ok(false) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::CourseNotFound,
                "Course not found",
            )));
        }
        Err(e) => {
            return Ok(storage_error_response(
                ErrorCode::InternalServerError,
                "Failed to get course information",
                &e,
            ));
        }
    }

    match storage.get_student_by_id(data.student_id).await {
        Ok(Some(_)) => {}
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::StudentNotFound,
                "Student not found",
            )));
        }
        Err(e) => {
            return Ok(storage_error_response(
                ErrorCode::InternalServerError,
                "Failed to get student information",
                &e,
            ));
        }
    }

    // 并发删除导致的外键失败由存储层返回 NotFound
    match storage.add_student_to_course(course_id, data.student_id).await {
        Ok(course) => {
            info!("Student {} added to course {}", data.student_id, course_id);
            Ok(HttpResponse::Ok().json(course))
        }
        Err(e) => Ok(storage_error_response(
            ErrorCode::CourseEnrollFailed,
            "Failed to add student to course",
            &e,
        )),
    }
}
