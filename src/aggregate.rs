//! The aggregation pipeline: one fetch per user request, merging the
//! profile, contest, submission, and calendar queries into a single
//! [`Dashboard`].
//!
//! Sub-fetch failures degrade (empty submissions/calendar, `Unknown`
//! difficulties); only the primary profile query is fatal. The live
//! [`Aggregator`] additionally answers fatal failures with synthetic data
//! so its callers never see a partial view.

use std::sync::atomic::{AtomicU64, Ordering};

use chrono::Utc;
use tracing::{debug, warn};

use crate::client::LeetClient;
use crate::enrich::{self, PacingPolicy, STAGGER_STEP};
use crate::error::Result;
use crate::fallback;
use crate::model::{CalendarEntry, Dashboard, Snapshot, Submission};

/// How many recent submissions the pipeline asks for.
pub const RECENT_LIMIT: u32 = 20;
/// How many of those the snapshot enriches and keeps.
pub const SNAPSHOT_RECENT_LIMIT: usize = 15;

/// Batch path: aggregate everything for one user into a [`Snapshot`],
/// enriching difficulties one lookup at a time under `pacing`. Errors on
/// the primary profile query propagate to the caller.
pub async fn fetch_snapshot(
    client: &LeetClient,
    username: &str,
    pacing: PacingPolicy,
) -> Result<Snapshot> {
    let data = client.get_user_profile(username).await?;

    let mut submissions = recent_submissions_or_empty(client, username).await;
    submissions.truncate(SNAPSHOT_RECENT_LIMIT);
    let submission_calendar = calendar_or_empty(client, username).await;

    let recent_submissions =
        enrich::enrich_sequential(submissions, pacing, |slug| async move {
            client.get_problem_difficulty(&slug).await
        })
        .await;

    let dashboard = Dashboard {
        profile: data.profile,
        contest_info: data.contest,
        problem_stats: data.problem_stats,
        badges: data.badges,
        recent_submissions,
        submission_calendar,
    };
    Ok(Snapshot::from_dashboard(dashboard, Utc::now()))
}

/// Live path: per-request aggregation with staggered enrichment, a
/// synthetic fallback on total failure, and stale-result protection.
///
/// Each fetch takes a token from a monotonically increasing counter; when a
/// newer fetch has started by the time an older one resolves, the older
/// result is discarded so a slow response can never overwrite a newer one.
pub struct Aggregator {
    client: LeetClient,
    pacing: PacingPolicy,
    seq: AtomicU64,
}

impl Aggregator {
    /// Create an aggregator with the default stagger step.
    pub fn new(client: LeetClient) -> Self {
        Self::with_pacing(client, PacingPolicy::new(STAGGER_STEP))
    }

    pub fn with_pacing(client: LeetClient, pacing: PacingPolicy) -> Self {
        Self {
            client,
            pacing,
            seq: AtomicU64::new(0),
        }
    }

    /// Run one aggregation. Always yields a structurally complete
    /// [`Dashboard`] — real data, or a synthetic stand-in when the
    /// pipeline fails outright. Returns `None` only when this fetch was
    /// superseded by a newer one while in flight.
    pub async fn fetch(&self, username: &str) -> Option<Dashboard> {
        let token = self.begin();
        self.resolve(token, username).await
    }

    fn begin(&self) -> u64 {
        self.seq.fetch_add(1, Ordering::SeqCst) + 1
    }

    async fn resolve(&self, token: u64, username: &str) -> Option<Dashboard> {
        let dashboard = match self.try_fetch(username).await {
            Ok(dashboard) => dashboard,
            Err(error) => {
                warn!(username, %error, "aggregation failed, serving synthetic data");
                fallback::synthetic_dashboard(
                    username,
                    fallback::seed_for(username),
                    Utc::now().timestamp(),
                )
            }
        };
        if self.seq.load(Ordering::SeqCst) != token {
            debug!(username, token, "discarding stale fetch result");
            return None;
        }
        Some(dashboard)
    }

    async fn try_fetch(&self, username: &str) -> Result<Dashboard> {
        let data = self.client.get_user_profile(username).await?;

        let submissions = recent_submissions_or_empty(&self.client, username).await;
        let submission_calendar = calendar_or_empty(&self.client, username).await;

        let client = &self.client;
        let recent_submissions =
            enrich::enrich_staggered(submissions, self.pacing, |slug| async move {
                client.get_problem_difficulty(&slug).await
            })
            .await;

        Ok(Dashboard {
            profile: data.profile,
            contest_info: data.contest,
            problem_stats: data.problem_stats,
            badges: data.badges,
            recent_submissions,
            submission_calendar,
        })
    }
}

async fn recent_submissions_or_empty(client: &LeetClient, username: &str) -> Vec<Submission> {
    match client.get_recent_submissions(username, RECENT_LIMIT).await {
        Ok(submissions) => submissions,
        Err(error) => {
            warn!(username, %error, "recent submissions unavailable, continuing with none");
            Vec::new()
        }
    }
}

async fn calendar_or_empty(client: &LeetClient, username: &str) -> Vec<CalendarEntry> {
    match client.get_submission_calendar(username).await {
        Ok(entries) => entries,
        Err(error) => {
            warn!(username, %error, "submission calendar unavailable, continuing with none");
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Nothing listens on the discard port, so every request fails fast
    // with a transport error.
    fn unreachable_client() -> LeetClient {
        LeetClient::with_endpoint(reqwest::Client::new(), "http://127.0.0.1:9/graphql")
    }

    #[tokio::test]
    async fn unreachable_upstream_serves_synthetic_data() {
        let aggregator = Aggregator::new(unreachable_client());

        let dashboard = aggregator.fetch("someone").await.expect("not superseded");

        assert_eq!(dashboard.profile.username, "someone");
        assert!(dashboard.contest_info.is_some());
        assert_eq!(dashboard.badges.len(), 3);
        assert_eq!(dashboard.recent_submissions.len(), 5);
        assert_eq!(dashboard.problem_stats.easy.total, 850);
    }

    #[tokio::test]
    async fn synthetic_fallback_is_deterministic_per_user() {
        let aggregator = Aggregator::new(unreachable_client());

        let first = aggregator.fetch("someone").await.expect("not superseded");
        let second = aggregator.fetch("someone").await.expect("not superseded");

        assert_eq!(first.profile.ranking, second.profile.ranking);
        assert_eq!(
            first.problem_stats.medium.solved,
            second.problem_stats.medium.solved
        );
    }

    #[tokio::test]
    async fn snapshot_fails_hard_when_upstream_is_unreachable() {
        let result =
            fetch_snapshot(&unreachable_client(), "someone", PacingPolicy::default()).await;

        assert!(result.is_err());
    }

    #[tokio::test]
    async fn superseded_fetch_resolves_to_none() {
        let aggregator = Aggregator::new(unreachable_client());

        let stale = aggregator.begin();
        let current = aggregator.begin();

        assert!(aggregator.resolve(stale, "someone").await.is_none());
        assert!(aggregator.resolve(current, "someone").await.is_some());
    }
}
