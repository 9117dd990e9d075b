pub mod attendance;
pub mod auth;
pub mod course;
pub mod grade;
pub mod profile;
