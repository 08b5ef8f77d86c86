//! 集成测试公共工具：内存数据库、测试应用与数据工厂
#![allow(dead_code)]

use std::sync::Arc;

use rand::Rng;
use rust_courses_api::config::DatabaseConfig;
use rust_courses_api::models::{
    courses::{entities::Course, requests::CreateCourseRequest},
    students::{entities::Student, requests::CreateStudentRequest},
    users::{entities::User, requests::CreateUserRequest},
};
use rust_courses_api::storage::{Storage, sea_orm_storage::SeaOrmStorage};

const COURSE_NAMES: &[&str] = &[
    "postgres",
    "django",
    "rust_basics",
    "algorithms",
    "networking",
];

/// 构建与生产一致的测试应用（参数错误处理器 + 全部路由）
macro_rules! test_app {
    ($storage:expr) => {
        actix_web::test::init_service(
            actix_web::App::new()
                .app_data(
                    actix_web::web::QueryConfig::default()
                        .error_handler(rust_courses_api::utils::query_error_handler),
                )
                .app_data(
                    actix_web::web::JsonConfig::default()
                        .error_handler(rust_courses_api::utils::json_error_handler),
                )
                .app_data(
                    actix_web::web::FormConfig::default()
                        .error_handler(rust_courses_api::utils::form_error_handler),
                )
                .app_data(actix_web::web::Data::new($storage.clone()))
                .configure(rust_courses_api::routes::configure_user_routes)
                .configure(rust_courses_api::routes::configure_student_routes)
                .configure(rust_courses_api::routes::configure_course_routes),
        )
        .await
    };
}

pub(crate) use test_app;

pub async fn memory_storage() -> Arc<dyn Storage> {
    let config = DatabaseConfig {
        url: "sqlite::memory:".to_string(),
        pool_size: 1,
        timeout: 5,
    };
    let storage = SeaOrmStorage::connect(&config)
        .await
        .expect("in-memory storage should connect");
    Arc::new(storage)
}

pub async fn create_user(storage: &Arc<dyn Storage>, username: &str) -> User {
    storage
        .create_user(CreateUserRequest {
            username: username.to_string(),
        })
        .await
        .expect("user should be created")
}

fn random_course_name() -> String {
    let mut rng = rand::rng();
    let base = COURSE_NAMES[rng.random_range(0..COURSE_NAMES.len())];
    // 少量后缀保证名称有重复也有不重复
    format!("{base}_{}", rng.random_range(0..3))
}

/// 批量创建课程，名称随机且可能重复
pub async fn course_factory(storage: &Arc<dyn Storage>, user_id: i64, quantity: usize) -> Vec<Course> {
    let mut courses = Vec::with_capacity(quantity);
    for _ in 0..quantity {
        let course = storage
            .create_course(CreateCourseRequest {
                user: user_id,
                name: random_course_name(),
            })
            .await
            .expect("course should be created");
        courses.push(course);
    }
    courses
}

pub async fn student_factory(storage: &Arc<dyn Storage>, quantity: usize) -> Vec<Student> {
    let mut students = Vec::with_capacity(quantity);
    for i in 0..quantity {
        let student = storage
            .create_student(CreateStudentRequest {
                name: format!("student_{i}"),
            })
            .await
            .expect("student should be created");
        students.push(student);
    }
    students
}
