/// All errors that can occur while talking to the LeetCode API.
#[derive(thiserror::Error, Debug)]
pub enum LeetError {
    /// HTTP request failed (network, DNS, TLS, timeout, etc.).
    #[error("http request failed for {url}: {source}")]
    Http {
        url: String,
        source: reqwest::Error,
    },

    /// Server returned a non-success HTTP status code.
    #[error("unexpected status {status} for {url}")]
    UnexpectedStatus {
        url: String,
        status: reqwest::StatusCode,
    },

    /// Failed to read the response body as text.
    #[error("failed to read response body from {url}: {source}")]
    ResponseBody {
        url: String,
        source: reqwest::Error,
    },

    /// Response body was not the expected JSON shape.
    #[error("failed to decode response from {url}: {source}")]
    Json {
        url: String,
        source: serde_json::Error,
    },

    /// An expected field was missing from the response payload.
    #[error("expected field missing from response: {context}")]
    MissingField { context: &'static str },

    /// The serialized submission calendar could not be parsed.
    #[error("malformed submission calendar: {0}")]
    CalendarParse(serde_json::Error),
}

pub type Result<T> = std::result::Result<T, LeetError>;
