
mod attendance_test;
mod auth_test;
mod course_test;
