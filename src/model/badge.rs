use serde::Serialize;

/// An achievement badge earned by a user.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Badge {
    pub name: String,
    pub icon: Option<String>,
    /// Earn time in seconds since epoch. `None` for historic badges where
    /// the upstream date is unknown.
    pub creation_date: Option<i64>,
}

impl Badge {
    /// Rarity tier of this badge, derived from its name.
    pub fn rarity(&self) -> BadgeRarity {
        classify_badge(&self.name)
    }
}

/// Display rarity tier for a badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, strum_macros::Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum BadgeRarity {
    Common,
    Rare,
    Epic,
    Legendary,
}

/// Ordered classification rules; the first rule whose substring list
/// matches wins.
const RARITY_RULES: &[(&[&str], BadgeRarity)] = &[
    (&["guardian", "knight"], BadgeRarity::Legendary),
    (&["100", "annual"], BadgeRarity::Epic),
    (&["50", "streak"], BadgeRarity::Rare),
];

/// Classify a badge name into a rarity tier. Matching is case-insensitive
/// substring matching over [`RARITY_RULES`], falling back to `Common`.
pub fn classify_badge(name: &str) -> BadgeRarity {
    let name = name.to_lowercase();
    RARITY_RULES
        .iter()
        .find(|(needles, _)| needles.iter().any(|needle| name.contains(needle)))
        .map(|(_, rarity)| *rarity)
        .unwrap_or(BadgeRarity::Common)
}
