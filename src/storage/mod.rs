use std::sync::Arc;

use crate::models::{
    courses::{
        entities::Course,
        requests::{CourseListQuery, CreateCourseRequest, PartialUpdateCourseRequest},
    },
    students::{
        entities::Student,
        requests::{CreateStudentRequest, StudentListQuery},
    },
    users::{entities::User, requests::CreateUserRequest},
};

use crate::errors::Result;

pub mod sea_orm_storage;

#[async_trait::async_trait]
pub trait Storage: Send + Sync {
    /// 用户管理方法
    // 创建用户（用户名重复时返回 Conflict）
    async fn create_user(&self, user: CreateUserRequest) -> Result<User>;
    // 通过ID获取用户信息
    async fn get_user_by_id(&self, id: i64) -> Result<Option<User>>;
    // 列出用户
    async fn list_users(&self) -> Result<Vec<User>>;
    // 统计用户数量
    async fn count_users(&self) -> Result<u64>;

    /// 学生管理方法
    // 创建学生
    async fn create_student(&self, student: CreateStudentRequest) -> Result<Student>;
    // 通过ID获取学生信息
    async fn get_student_by_id(&self, id: i64) -> Result<Option<Student>>;
    // 列出学生
    async fn list_students(&self, query: StudentListQuery) -> Result<Vec<Student>>;

    /// 课程管理方法
    // 创建课程（所属用户不存在时返回 Validation）
    async fn create_course(&self, course: CreateCourseRequest) -> Result<Course>;
    // 通过ID获取课程信息
    async fn get_course_by_id(&self, id: i64) -> Result<Option<Course>>;
    // 按过滤条件列出课程，按创建顺序排列
    async fn list_courses(&self, query: CourseListQuery) -> Result<Vec<Course>>;
    // 按过滤条件统计课程数量
    async fn count_courses(&self, query: CourseListQuery) -> Result<u64>;
    // 更新课程信息，课程不存在时返回 None
    async fn update_course(
        &self,
        id: i64,
        update: PartialUpdateCourseRequest,
    ) -> Result<Option<Course>>;
    // 删除课程及其学生关联
    async fn delete_course(&self, id: i64) -> Result<bool>;
    // 课程是否存在
    async fn course_exists(&self, id: i64) -> Result<bool>;

    /// 课程学生关联方法
    // 将学生加入课程，已加入时不做任何修改
    async fn add_student_to_course(&self, course_id: i64, student_id: i64) -> Result<Course>;
    // 学生是否已在课程中
    async fn course_has_student(&self, course_id: i64, student_id: i64) -> Result<bool>;
}

pub async fn create_storage() -> Result<Arc<dyn Storage>> {
    let storage = sea_orm_storage::SeaOrmStorage::new_async().await?;
    Ok(Arc::new(storage))
}
