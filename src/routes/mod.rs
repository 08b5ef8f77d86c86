pub mod courses;

pub mod students;

pub mod users;

pub use courses::configure_course_routes;
pub use students::configure_student_routes;
pub use users::configure_user_routes;
