//! Core planner functionality shared by the CLI and tests

pub mod config;
pub mod models;
pub mod planner;
pub mod workspace;

pub use models::Course;
pub use planner::{Planner, PlannerError, MAX_COURSES};
pub use workspace::Workspace;

/// Returns the current version of the `CoursePlanner` crate
#[must_use]
pub const fn get_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
