use serde::Deserialize;

use crate::models::common::deserialize_optional_filter;

// 课程列表过滤参数（来自HTTP请求），精确匹配，多个条件取交集
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CourseListQuery {
    #[serde(default, deserialize_with = "deserialize_optional_filter")]
    pub id: Option<i64>,
    #[serde(default, deserialize_with = "deserialize_optional_filter")]
    pub name: Option<String>,
}

// 创建课程请求
#[derive(Debug, Clone, Deserialize)]
pub struct CreateCourseRequest {
    pub user: i64,
    pub name: String,
}

// 整体更新课程请求（PUT），所有字段必填
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateCourseRequest {
    pub user: i64,
    pub name: String,
}

// 部分更新课程请求（PATCH）
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PartialUpdateCourseRequest {
    pub user: Option<i64>,
    pub name: Option<String>,
}

impl From<UpdateCourseRequest> for PartialUpdateCourseRequest {
    fn from(req: UpdateCourseRequest) -> Self {
        Self {
            user: Some(req.user),
            name: Some(req.name),
        }
    }
}

// 为课程添加学生请求
#[derive(Debug, Clone, Deserialize)]
pub struct AddStudentRequest {
    pub student_id: i64,
}
