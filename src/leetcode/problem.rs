use serde::Deserialize;
use tracing::warn;

use crate::error::{LeetError, Result};
use crate::leetcode;
use crate::model::Difficulty;

const PROBLEM_DIFFICULTY_QUERY: &str = r#"
query getProblemData($titleSlug: String!) {
  question(titleSlug: $titleSlug) {
    difficulty
  }
}
"#;

/// Look up the difficulty of a single problem. Best-effort: any failure
/// maps to `Unknown` rather than propagating.
pub(crate) async fn get_problem_difficulty(
    client: &reqwest::Client,
    url: &str,
    slug: &str,
) -> Difficulty {
    match fetch_difficulty(client, url, slug).await {
        Ok(difficulty) => difficulty,
        Err(error) => {
            warn!(slug, %error, "difficulty lookup failed");
            Difficulty::Unknown
        }
    }
}

async fn fetch_difficulty(client: &reqwest::Client, url: &str, slug: &str) -> Result<Difficulty> {
    let variables = serde_json::json!({ "titleSlug": slug });
    let response: QuestionResponse =
        leetcode::post_query(client, url, PROBLEM_DIFFICULTY_QUERY, variables).await?;
    let question = response.question.ok_or(LeetError::MissingField {
        context: "question",
    })?;
    Ok(Difficulty::parse_lenient(&question.difficulty))
}

#[derive(Debug, Deserialize)]
struct QuestionResponse {
    question: Option<RawQuestion>,
}

#[derive(Debug, Deserialize)]
struct RawQuestion {
    difficulty: String,
}
