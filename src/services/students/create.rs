use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::StudentService;
use crate::models::{ErrorCode, students::requests::CreateStudentRequest};
use crate::services::{invalid_field_response, storage_error_response};
use crate::utils::validate::validate_name;

pub async fn create_student(
    service: &StudentService,
    request: &HttpRequest,
    mut student_data: CreateStudentRequest,
) -> ActixResult<HttpResponse> {
    if let Err(msg) = validate_name(&student_data.name) {
        return Ok(invalid_field_response("name", msg));
    }
    student_data.name = student_data.name.trim().to_string();

    let storage = service.get_storage(request)?;

    match storage.create_student(student_data).await {
        Ok(student) => {
            info!("Student {} ({}) created", student.id, student.name);
            Ok(HttpResponse::Created().json(student))
        }
        Err(e) => Ok(storage_error_response(
            ErrorCode::StudentCreationFailed,
            "Student creation failed",
            &e,
        )),
    }
}
