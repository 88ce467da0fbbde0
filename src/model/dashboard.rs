use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::model::{Badge, CalendarEntry, ContestInfo, ProblemStats, Profile, Submission};

/// Fully aggregated, presentation-ready statistics for one user.
///
/// Built fresh by each fetch and never mutated afterwards; this is the only
/// shape handed across the presentation boundary.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Dashboard {
    pub profile: Profile,
    pub contest_info: Option<ContestInfo>,
    pub problem_stats: ProblemStats,
    pub badges: Vec<Badge>,
    pub recent_submissions: Vec<Submission>,
    pub submission_calendar: Vec<CalendarEntry>,
}

/// On-disk snapshot written by the batch fetcher and consumed later as a
/// static asset.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    pub last_updated: DateTime<Utc>,
    pub profile: Profile,
    pub contest_info: Option<ContestInfo>,
    pub problem_stats: ProblemStats,
    pub badges: Vec<Badge>,
    pub recent_submissions: Vec<Submission>,
    pub submission_calendar: BTreeMap<i64, u32>,
}

impl Snapshot {
    pub fn from_dashboard(dashboard: Dashboard, last_updated: DateTime<Utc>) -> Self {
        let submission_calendar = dashboard
            .submission_calendar
            .iter()
            .map(|entry| (entry.timestamp, entry.count))
            .collect();
        Self {
            last_updated,
            profile: dashboard.profile,
            contest_info: dashboard.contest_info,
            problem_stats: dashboard.problem_stats,
            badges: dashboard.badges,
            recent_submissions: dashboard.recent_submissions,
            submission_calendar,
        }
    }
}
