//! Planner error type

use thiserror::Error;

/// Failures raised by [`Planner`](super::Planner) and [`Course`](crate::core::models::Course)
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlannerError {
    /// The planner already holds its maximum number of courses
    #[error("planner is full ({capacity} courses)")]
    Full {
        /// Capacity of the planner that rejected the insert
        capacity: usize,
    },

    /// The operation needs at least one course in the planner
    #[error("planner is empty")]
    Empty,

    /// A 1-based position fell outside `1..=max`
    #[error("position {position} is not within the valid range 1 to {max}")]
    InvalidPosition {
        /// Position that was requested
        position: usize,
        /// Highest position accepted by the operation
        max: usize,
    },

    /// Department code longer than three characters
    #[error("invalid department code '{0}': at most 3 characters allowed")]
    InvalidDepartment(String),

    /// Section number above 127
    #[error("invalid section {0}: must be between 0 and 127")]
    InvalidSection(u8),
}

impl PlannerError {
    /// Whether this error is a caller contract violation (bad position or field value)
    /// rather than a full or empty planner.
    #[must_use]
    pub const fn is_invalid_argument(&self) -> bool {
        matches!(
            self,
            Self::InvalidPosition { .. } | Self::InvalidDepartment(_) | Self::InvalidSection(_)
        )
    }
}
