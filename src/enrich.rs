//! Difficulty enrichment for recent submissions.
//!
//! The submission-list endpoint does not return difficulty, so every entry
//! needs a secondary per-problem lookup. Both strategies here preserve the
//! input order and length; a failed lookup leaves the entry at
//! `Difficulty::Unknown` and never aborts the batch.

use std::future::Future;
use std::time::Duration;

use futures::future::join_all;
use tokio::time::sleep;

use crate::model::{Difficulty, Submission};

/// Inter-lookup pacing. This is a courtesy cap on the request rate against
/// the upstream API, not a real rate limiter.
#[derive(Debug, Clone, Copy)]
pub struct PacingPolicy {
    pub delay: Duration,
}

impl PacingPolicy {
    pub const fn new(delay: Duration) -> Self {
        Self { delay }
    }
}

impl Default for PacingPolicy {
    /// The default batch pacing: 200 ms between consecutive lookups.
    fn default() -> Self {
        Self::new(Duration::from_millis(200))
    }
}

/// Default stagger step for the concurrent strategy: lookup `i` starts
/// `i * 100` ms in.
pub const STAGGER_STEP: Duration = Duration::from_millis(100);

/// Enrich one submission at a time, sleeping `policy.delay` between
/// consecutive lookups.
pub async fn enrich_sequential<F, Fut>(
    submissions: Vec<Submission>,
    policy: PacingPolicy,
    lookup: F,
) -> Vec<Submission>
where
    F: Fn(String) -> Fut,
    Fut: Future<Output = Difficulty>,
{
    let mut enriched = Vec::with_capacity(submissions.len());
    for (index, mut submission) in submissions.into_iter().enumerate() {
        if index > 0 {
            sleep(policy.delay).await;
        }
        submission.difficulty = lookup(submission.title_slug.clone()).await;
        enriched.push(submission);
    }
    enriched
}

/// Enrich all submissions concurrently, staggering lookup `i` by
/// `i * policy.delay` so the instantaneous request rate stays bounded while
/// the batch still finishes sooner than a sequential pass.
pub async fn enrich_staggered<F, Fut>(
    submissions: Vec<Submission>,
    policy: PacingPolicy,
    lookup: F,
) -> Vec<Submission>
where
    F: Fn(String) -> Fut,
    Fut: Future<Output = Difficulty>,
{
    let tasks = submissions
        .into_iter()
        .enumerate()
        .map(|(index, mut submission)| {
            let lookup = &lookup;
            async move {
                sleep(policy.delay * index as u32).await;
                submission.difficulty = lookup(submission.title_slug.clone()).await;
                submission
            }
        });
    join_all(tasks).await
}
