use serde::Serialize;

/// Submission count for one day, keyed by the upstream epoch-day timestamp.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct CalendarEntry {
    pub timestamp: i64,
    pub count: u32,
}
