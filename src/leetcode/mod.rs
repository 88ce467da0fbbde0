pub(crate) mod calendar;
pub(crate) mod problem;
pub(crate) mod profile;
pub(crate) mod submissions;

use serde::de::DeserializeOwned;
use serde::Deserialize;
use tracing::debug;

use crate::error::{LeetError, Result};

pub(crate) const GRAPHQL_URL: &str = "https://leetcode.com/graphql";

/// Envelope every GraphQL response arrives in.
#[derive(Debug, Deserialize)]
pub(crate) struct GraphQlResponse<T> {
    pub data: Option<T>,
}

/// POST a GraphQL query and decode the `data` payload.
pub(crate) async fn post_query<T: DeserializeOwned>(
    client: &reqwest::Client,
    url: &str,
    query: &str,
    variables: serde_json::Value,
) -> Result<T> {
    debug!(url, "posting graphql query");

    let body = serde_json::json!({ "query": query, "variables": variables });
    let response = client
        .post(url)
        .json(&body)
        .send()
        .await
        .map_err(|e| LeetError::Http {
            url: url.to_owned(),
            source: e,
        })?;

    let status = response.status();
    if !status.is_success() {
        return Err(LeetError::UnexpectedStatus {
            url: url.to_owned(),
            status,
        });
    }

    let body = response.text().await.map_err(|e| LeetError::ResponseBody {
        url: url.to_owned(),
        source: e,
    })?;

    let parsed: GraphQlResponse<T> =
        serde_json::from_str(&body).map_err(|e| LeetError::Json {
            url: url.to_owned(),
            source: e,
        })?;

    parsed.data.ok_or(LeetError::MissingField {
        context: "graphql response data",
    })
}
