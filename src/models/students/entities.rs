use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Student {
    pub id: i64,
    pub name: String,
    // 学生所在课程ID（升序）
    pub courses: Vec<i64>,
}
