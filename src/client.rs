use tracing::instrument;

use crate::error::Result;
use crate::leetcode;
use crate::model::{CalendarEntry, Difficulty, ProfileData, Submission};

/// The main entry point for talking to the LeetCode GraphQL API.
///
/// `LeetClient` wraps a [`reqwest::Client`] and exposes one method per
/// upstream query: the combined profile query, the recent-submission list,
/// the submission calendar, and the per-problem difficulty lookup.
///
/// # Examples
///
/// ```no_run
/// # async fn example() -> leet_stats::Result<()> {
/// use leet_stats::LeetClient;
///
/// let client = LeetClient::new();
/// let data = client.get_user_profile("someone").await?;
/// println!("solved {} problems", data.problem_stats.total_solved());
/// # Ok(())
/// # }
/// ```
pub struct LeetClient {
    http: reqwest::Client,
    endpoint: String,
}

impl LeetClient {
    /// Create a new client with default settings.
    pub fn new() -> Self {
        Self::with_client(reqwest::Client::new())
    }

    /// Create a new client using the provided [`reqwest::Client`].
    ///
    /// Use this when you need to configure timeouts, proxies, headers, etc.
    pub fn with_client(client: reqwest::Client) -> Self {
        Self {
            http: client,
            endpoint: leetcode::GRAPHQL_URL.to_string(),
        }
    }

    /// Create a new client pointed at a non-default GraphQL endpoint, e.g.
    /// a CORS relay in front of the upstream API.
    pub fn with_endpoint(client: reqwest::Client, endpoint: impl Into<String>) -> Self {
        Self {
            http: client,
            endpoint: endpoint.into(),
        }
    }

    /// Fetch the combined profile query: profile fields, per-difficulty
    /// solve counts, badges, and contest ranking.
    #[instrument(skip(self))]
    pub async fn get_user_profile(&self, username: &str) -> Result<ProfileData> {
        leetcode::profile::get_user_profile(&self.http, &self.endpoint, username).await
    }

    /// Fetch up to `limit` recently accepted submissions, most recent
    /// first. Difficulty is not part of the list payload and starts out
    /// [`Difficulty::Unknown`] on every entry.
    #[instrument(skip(self))]
    pub async fn get_recent_submissions(
        &self,
        username: &str,
        limit: u32,
    ) -> Result<Vec<Submission>> {
        leetcode::submissions::get_recent_submissions(&self.http, &self.endpoint, username, limit)
            .await
    }

    /// Fetch the daily submission calendar.
    #[instrument(skip(self))]
    pub async fn get_submission_calendar(&self, username: &str) -> Result<Vec<CalendarEntry>> {
        leetcode::calendar::get_submission_calendar(&self.http, &self.endpoint, username).await
    }

    /// Look up the difficulty of a single problem by slug. Best-effort:
    /// never fails, returning [`Difficulty::Unknown`] instead.
    #[instrument(skip(self))]
    pub async fn get_problem_difficulty(&self, slug: &str) -> Difficulty {
        leetcode::problem::get_problem_difficulty(&self.http, &self.endpoint, slug).await
    }
}

impl Default for LeetClient {
    fn default() -> Self {
        Self::new()
    }
}
