use itertools::Itertools;
use serde::Deserialize;
use tracing::debug;

use crate::error::Result;
use crate::leetcode;
use crate::model::{Difficulty, Submission};

const RECENT_SUBMISSIONS_QUERY: &str = r#"
query getRecentSubmissions($username: String!, $limit: Int!) {
  recentAcSubmissionList(username: $username, limit: $limit) {
    id
    title
    titleSlug
    timestamp
    statusDisplay
    lang
  }
}
"#;

/// Fetch up to `limit` accepted submissions, most recent first. The list
/// endpoint carries no difficulty; every entry starts out `Unknown`.
pub(crate) async fn get_recent_submissions(
    client: &reqwest::Client,
    url: &str,
    username: &str,
    limit: u32,
) -> Result<Vec<Submission>> {
    let variables = serde_json::json!({ "username": username, "limit": limit });
    let response: SubmissionsResponse =
        leetcode::post_query(client, url, RECENT_SUBMISSIONS_QUERY, variables).await?;

    let submissions = response
        .recent_ac_submission_list
        .unwrap_or_default()
        .into_iter()
        .map(Submission::from)
        .collect_vec();
    debug!(username, count = submissions.len(), "fetched recent submissions");
    Ok(submissions)
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SubmissionsResponse {
    recent_ac_submission_list: Option<Vec<RawSubmission>>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawSubmission {
    title: String,
    title_slug: String,
    /// Upstream sends the epoch timestamp as a string.
    timestamp: String,
    status_display: Option<String>,
    lang: String,
}

impl From<RawSubmission> for Submission {
    fn from(raw: RawSubmission) -> Self {
        Submission {
            title: raw.title,
            title_slug: raw.title_slug,
            timestamp: raw.timestamp.parse().unwrap_or_default(),
            lang: raw.lang,
            status_display: raw.status_display.unwrap_or_else(|| "Accepted".to_string()),
            difficulty: Difficulty::Unknown,
        }
    }
}
