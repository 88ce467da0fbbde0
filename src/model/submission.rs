use serde::{Deserialize, Serialize};

/// A single accepted submission from a user's recent activity.
///
/// The list endpoint does not carry difficulty; it is joined from a
/// per-problem lookup afterwards and stays [`Difficulty::Unknown`] when
/// that lookup fails.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Submission {
    pub title: String,
    pub title_slug: String,
    pub timestamp: i64,
    pub lang: String,
    pub status_display: String,
    pub difficulty: Difficulty,
}

/// Problem difficulty tier.
#[derive(
    Default,
    Debug,
    Clone,
    Copy,
    Hash,
    Eq,
    PartialEq,
    Serialize,
    Deserialize,
    strum_macros::Display,
    strum_macros::EnumString,
)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
    #[default]
    Unknown,
}

impl Difficulty {
    /// Parse an upstream difficulty string, mapping anything unrecognized
    /// to `Unknown`.
    pub fn parse_lenient(value: &str) -> Self {
        value.parse().unwrap_or_default()
    }
}
