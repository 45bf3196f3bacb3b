//! Data models for the course planner

pub mod course;

pub use course::{Course, MAX_DEPARTMENT_LEN, MAX_SECTION};
