pub mod error_code;
pub mod filter;
pub mod response;

pub use error_code::ErrorCode;
pub use filter::deserialize_optional_filter;
pub use response::ApiResponse;
