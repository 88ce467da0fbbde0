use std::collections::BTreeMap;

use itertools::Itertools;
use serde::Deserialize;
use tracing::debug;

use crate::error::{LeetError, Result};
use crate::leetcode;
use crate::model::CalendarEntry;

const SUBMISSION_CALENDAR_QUERY: &str = r#"
query getUserSubmissionCalendar($username: String!) {
  matchedUser(username: $username) {
    submissionCalendar
  }
}
"#;

/// Fetch and decode the daily submission calendar. A missing calendar
/// degrades to an empty list; a present-but-malformed one is an error.
pub(crate) async fn get_submission_calendar(
    client: &reqwest::Client,
    url: &str,
    username: &str,
) -> Result<Vec<CalendarEntry>> {
    let variables = serde_json::json!({ "username": username });
    let response: CalendarResponse =
        leetcode::post_query(client, url, SUBMISSION_CALENDAR_QUERY, variables).await?;

    let raw = response
        .matched_user
        .and_then(|user| user.submission_calendar);
    let entries = match raw {
        Some(raw) => parse_calendar(&raw)?,
        None => Vec::new(),
    };
    debug!(username, days = entries.len(), "fetched submission calendar");
    Ok(entries)
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CalendarResponse {
    matched_user: Option<RawCalendarUser>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawCalendarUser {
    submission_calendar: Option<String>,
}

/// Decode the serialized calendar object (stringified epoch-day keys mapped
/// to counts) into entries sorted by timestamp. Keys that do not parse as
/// integers are dropped.
pub(crate) fn parse_calendar(raw: &str) -> Result<Vec<CalendarEntry>> {
    let map: BTreeMap<String, u32> =
        serde_json::from_str(raw).map_err(LeetError::CalendarParse)?;
    let entries = map
        .into_iter()
        .filter_map(|(timestamp, count)| {
            timestamp
                .parse()
                .ok()
                .map(|timestamp| CalendarEntry { timestamp, count })
        })
        .sorted_by_key(|entry| entry.timestamp)
        .collect_vec();
    Ok(entries)
}
