//! Shared library for `CoursePlanner`
//! Contains the planner core, configuration and logging used by the CLI

pub mod core;
pub mod logger;

pub use crate::core::{config, get_version};
