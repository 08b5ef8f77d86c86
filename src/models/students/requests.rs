use serde::Deserialize;

use crate::models::common::deserialize_optional_filter;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct StudentListQuery {
    #[serde(default, deserialize_with = "deserialize_optional_filter")]
    pub name: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateStudentRequest {
    pub name: String,
}
