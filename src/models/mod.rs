pub mod common;
pub mod courses;
pub mod students;
pub mod users;

pub use common::{ApiResponse, ErrorCode};

// 程序启动时间
#[derive(Debug, Clone)]
pub struct AppStartTime {
    pub start_datetime: chrono::DateTime<chrono::Utc>,
}
