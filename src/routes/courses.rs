use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::models::courses::requests::{
    AddStudentRequest, CourseListQuery, CreateCourseRequest, PartialUpdateCourseRequest,
    UpdateCourseRequest,
};
use crate::services::CourseService;
use crate::utils::SafeCourseIdI64;

// 懒加载的全局 COURSE_SERVICE 实例
static COURSE_SERVICE: Lazy<CourseService> = Lazy::new(CourseService::new_lazy);

// 请求体同时接受 JSON 和表单
type Body<T> = web::Either<web::Json<T>, web::Form<T>>;

// HTTP处理程序
pub async fn list_courses(
    req: HttpRequest,
    query: web::Query<CourseListQuery>,
) -> ActixResult<HttpResponse> {
    COURSE_SERVICE.list_courses(&req, query.into_inner()).await
}

pub async fn create_course(
    req: HttpRequest,
    course_data: Body<CreateCourseRequest>,
) -> ActixResult<HttpResponse> {
    COURSE_SERVICE
        .create_course(&req, course_data.into_inner())
        .await
}

pub async fn get_course(req: HttpRequest, course_id: SafeCourseIdI64) -> ActixResult<HttpResponse> {
    COURSE_SERVICE.get_course(&req, course_id.0).await
}

pub async fn update_course(
    req: HttpRequest,
    course_id: SafeCourseIdI64,
    update_data: Body<UpdateCourseRequest>,
) -> ActixResult<HttpResponse> {
    COURSE_SERVICE
        .update_course(&req, course_id.0, update_data.into_inner())
        .await
}

pub async fn partial_update_course(
    req: HttpRequest,
    course_id: SafeCourseIdI64,
    update_data: Body<PartialUpdateCourseRequest>,
) -> ActixResult<HttpResponse> {
    COURSE_SERVICE
        .partial_update_course(&req, course_id.0, update_data.into_inner())
        .await
}

pub async fn delete_course(
    req: HttpRequest,
    course_id: SafeCourseIdI64,
) -> ActixResult<HttpResponse> {
    COURSE_SERVICE.delete_course(&req, course_id.0).await
}

pub async fn add_student(
    req: HttpRequest,
    course_id: SafeCourseIdI64,
    data: Body<AddStudentRequest>,
) -> ActixResult<HttpResponse> {
    COURSE_SERVICE
        .add_student(&req, course_id.0, data.into_inner())
        .await
}

// 配置路由
pub fn configure_course_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/courses")
            .service(
                web::resource("/")
                    .route(web::get().to(list_courses))
                    .route(web::post().to(create_course)),
            )
            .service(
                web::resource("/{course_id}/")
                    .route(web::get().to(get_course))
                    .route(web::put().to(update_course))
                    .route(web::patch().to(partial_update_course))
                    .route(web::delete().to(delete_course))
                    // 在课程详情路径上 POST 即为添加学生
                    .route(web::post().to(add_student)),
            ),
    );
}
