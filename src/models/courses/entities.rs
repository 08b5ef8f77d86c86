use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Course {
    // 课程ID
    pub id: i64,
    // 课程名称
    pub name: String,
    // 所属用户ID
    pub user: i64,
    // 已加入的学生ID（升序）
    pub students: Vec<i64>,
    // 创建时间
    pub created_at: chrono::DateTime<chrono::Utc>,
    // 更新时间
    pub updated_at: chrono::DateTime<chrono::Utc>,
}
