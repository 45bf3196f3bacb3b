//! Active planner plus a single backup slot

use crate::core::planner::Planner;

/// Planner state for one interactive session
///
/// Owned by the entry point and handed to the menu loop by mutable reference.
#[derive(Debug, Clone, Default)]
pub struct Workspace {
    active: Planner,
    backup: Planner,
}

impl Workspace {
    /// Create a workspace with an empty active planner and an empty backup
    #[must_use]
    pub fn new() -> Self {
        Self {
            active: Planner::new(),
            backup: Planner::new(),
        }
    }

    /// The planner being edited
    #[must_use]
    pub const fn active(&self) -> &Planner {
        &self.active
    }

    /// Mutable access to the planner being edited
    pub fn active_mut(&mut self) -> &mut Planner {
        &mut self.active
    }

    /// The most recent backup
    #[must_use]
    pub const fn backup(&self) -> &Planner {
        &self.backup
    }

    /// Replace the backup with a copy of the active planner
    pub fn save_backup(&mut self) {
        self.backup.clone_from(&self.active);
    }

    /// Replace the active planner with a copy of the backup
    ///
    /// The backup is kept, so it can be restored again later.
    pub fn revert_to_backup(&mut self) {
        self.active.clone_from(&self.backup);
    }
}
