use serde::Serialize;

/// Contest ranking summary. Absent for users with no contest history.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContestInfo {
    pub attended: u32,
    pub rating: f64,
    pub global_ranking: u32,
    pub top_percentage: f64,
}
