/// Points at which the progress bar is full
pub const PROGRESS_MAX: u64 = 800;

/// Derived standing of a child. Never stored; recomputed from the task list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChildScore {
    pub total_points: u64,
    pub level: u8,
}

impl ChildScore {
    /// Points shown on the progress bar, capped at `PROGRESS_MAX`
    pub fn progress(&self) -> u64 {
        self.total_points.min(PROGRESS_MAX)
    }
}
