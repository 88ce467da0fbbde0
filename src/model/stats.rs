use serde::Serialize;

/// Platform-wide question totals to fall back on when the upstream count
/// is unavailable.
pub const DEFAULT_EASY_TOTAL: u32 = 850;
pub const DEFAULT_MEDIUM_TOTAL: u32 = 1800;
pub const DEFAULT_HARD_TOTAL: u32 = 750;

/// Solved count versus platform total for a single difficulty.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct DifficultyStats {
    pub solved: u32,
    pub total: u32,
}

/// Per-difficulty solve statistics.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct ProblemStats {
    pub easy: DifficultyStats,
    pub medium: DifficultyStats,
    pub hard: DifficultyStats,
}

impl ProblemStats {
    /// Total problems solved across all difficulties.
    pub fn total_solved(&self) -> u32 {
        self.easy.solved + self.medium.solved + self.hard.solved
    }
}
