//! Early-solve classification for the monthly progress view.
//!
//! A calendar day qualifies when it has at least one non-Easy submission
//! before 06:30 in a fixed UTC+5:30 offset.

use std::collections::BTreeSet;

use chrono::{DateTime, Datelike, FixedOffset, TimeZone, Timelike, Utc};

use crate::model::{Difficulty, Submission};

/// The fixed offset the cutoff is evaluated in (UTC+5:30).
const OFFSET_SECS: i32 = 5 * 3600 + 30 * 60;

fn shifted(timestamp: i64) -> Option<DateTime<FixedOffset>> {
    let offset = FixedOffset::east_opt(OFFSET_SECS)?;
    Utc.timestamp_opt(timestamp, 0)
        .single()
        .map(|utc| utc.with_timezone(&offset))
}

/// Whether a single submission counts as an early solve: non-Easy and
/// strictly before 06:30 in the shifted frame. Exactly 06:30:00 does not
/// qualify; `Unknown` difficulty is non-Easy and may.
pub fn is_early_solve(timestamp: i64, difficulty: Difficulty) -> bool {
    if difficulty == Difficulty::Easy {
        return false;
    }
    match shifted(timestamp) {
        Some(local) => local.hour() < 6 || (local.hour() == 6 && local.minute() < 30),
        None => false,
    }
}

/// Days of the given month (1-based, in the shifted frame) with at least
/// one early solve.
pub fn early_solve_days(submissions: &[Submission], year: i32, month: u32) -> BTreeSet<u32> {
    submissions
        .iter()
        .filter_map(|submission| {
            shifted(submission.timestamp).map(|local| (submission, local))
        })
        .filter(|(submission, local)| {
            local.year() == year
                && local.month() == month
                && is_early_solve(submission.timestamp, submission.difficulty)
        })
        .map(|(_, local)| local.day())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    // 2024-01-15 00:00:00 UTC.
    const JAN_15_UTC: i64 = 1705276800;
    // 06:30:00 in UTC+5:30 on 2024-01-15 is 01:00:00 UTC.
    const CUTOFF: i64 = JAN_15_UTC + 3600;

    fn submission(timestamp: i64, difficulty: Difficulty) -> Submission {
        Submission {
            title: "Two Sum".to_string(),
            title_slug: "two-sum".to_string(),
            timestamp,
            lang: "rust".to_string(),
            status_display: "Accepted".to_string(),
            difficulty,
        }
    }

    #[test]
    fn cutoff_boundary_is_exclusive() {
        assert!(is_early_solve(CUTOFF - 1, Difficulty::Medium));
        assert!(!is_early_solve(CUTOFF, Difficulty::Medium));
        assert!(!is_early_solve(CUTOFF + 1, Difficulty::Hard));
    }

    #[test]
    fn easy_never_qualifies() {
        // 00:00:01 in the shifted frame, as early as it gets.
        let just_past_midnight = JAN_15_UTC - OFFSET_SECS as i64 + 1;
        assert!(!is_early_solve(just_past_midnight, Difficulty::Easy));
        assert!(is_early_solve(just_past_midnight, Difficulty::Medium));
    }

    #[test]
    fn unknown_difficulty_may_qualify() {
        assert!(is_early_solve(CUTOFF - 60, Difficulty::Unknown));
    }

    #[test]
    fn collects_qualifying_days_for_one_month() {
        let submissions = vec![
            // Qualifies: Jan 15, 06:29 shifted.
            submission(CUTOFF - 60, Difficulty::Medium),
            // Same day, also early; the day is counted once.
            submission(CUTOFF - 1800, Difficulty::Hard),
            // Too late in the day.
            submission(JAN_15_UTC + 12 * 3600, Difficulty::Hard),
            // Early but Easy.
            submission(CUTOFF - 60 + 86400, Difficulty::Easy),
            // Early and Medium, but a different month.
            submission(CUTOFF - 60 + 31 * 86400, Difficulty::Medium),
        ];

        let days = early_solve_days(&submissions, 2024, 1);

        assert_eq!(days, BTreeSet::from([15]));
    }

    #[test]
    fn day_is_derived_in_the_shifted_frame() {
        // 2024-01-14 23:00:00 UTC is already 04:30 on Jan 15 shifted.
        let late_utc = JAN_15_UTC - 3600;
        let days = early_solve_days(&[submission(late_utc, Difficulty::Medium)], 2024, 1);
        assert_eq!(days, BTreeSet::from([15]));
    }
}
