//! sea-orm entities for the campus portal tables.

pub mod attendance_records;
pub mod courses;
pub mod grades;
pub mod users;
