use serde::Serialize;

use crate::model::{Badge, ContestInfo, ProblemStats};

/// Public profile information for a user, as of one fetch.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub username: String,
    pub real_name: String,
    pub avatar: Option<String>,
    pub ranking: u32,
    pub reputation: i64,
    pub contribution_points: u32,
}

/// Everything returned by the combined profile query.
#[derive(Debug, Clone)]
pub struct ProfileData {
    pub profile: Profile,
    pub contest: Option<ContestInfo>,
    pub problem_stats: ProblemStats,
    pub badges: Vec<Badge>,
}
