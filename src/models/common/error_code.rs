/// 对外暴露的业务错误码
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ErrorCode {
    BadRequest = 1000,
    ValidationFailed = 1001,
    NotFound = 1004,

    CourseNotFound = 2001,
    CourseCreationFailed = 2002,
    CourseUpdateFailed = 2003,
    CourseDeleteFailed = 2004,
    CourseEnrollFailed = 2005,

    StudentNotFound = 3001,
    StudentCreationFailed = 3002,

    UserNotFound = 4001,
    UserAlreadyExists = 4002,
    UserCreationFailed = 4003,
    UserNameInvalid = 4004,

    InternalServerError = 5000,
}
