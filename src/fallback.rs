//! Synthetic stand-in data for when the upstream API is unreachable.
//!
//! The generator is a pure function of `(username, seed, now)`, so callers
//! always receive a structurally complete dashboard and tests can pin the
//! seed for reproducible output.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::model::{
    Badge, CalendarEntry, ContestInfo, Dashboard, Difficulty, DifficultyStats, ProblemStats,
    Profile, Submission, DEFAULT_EASY_TOTAL, DEFAULT_HARD_TOTAL, DEFAULT_MEDIUM_TOTAL,
};

const DAY_SECS: i64 = 86_400;

/// Derive a stable seed from a username, so the same user degrades to the
/// same synthetic view.
pub fn seed_for(username: &str) -> u64 {
    let mut hasher = DefaultHasher::new();
    username.hash(&mut hasher);
    hasher.finish()
}

/// Build a structurally complete synthetic dashboard with values in
/// realistic ranges. `now` is the epoch second the data should look
/// current at.
pub fn synthetic_dashboard(username: &str, seed: u64, now: i64) -> Dashboard {
    let mut rng = StdRng::seed_from_u64(seed);

    let profile = Profile {
        username: username.to_string(),
        real_name: "LeetCode User".to_string(),
        avatar: None,
        ranking: rng.gen_range(1..=500_000),
        reputation: rng.gen_range(0..1_000),
        contribution_points: rng.gen_range(0..500),
    };

    let contest_info = Some(ContestInfo {
        attended: rng.gen_range(0..50),
        rating: rng.gen_range(1_200..2_200) as f64,
        global_ranking: rng.gen_range(0..100_000),
        top_percentage: rng.gen_range(0.0..50.0),
    });

    let problem_stats = ProblemStats {
        easy: DifficultyStats {
            solved: rng.gen_range(50..350),
            total: DEFAULT_EASY_TOTAL,
        },
        medium: DifficultyStats {
            solved: rng.gen_range(100..500),
            total: DEFAULT_MEDIUM_TOTAL,
        },
        hard: DifficultyStats {
            solved: rng.gen_range(20..120),
            total: DEFAULT_HARD_TOTAL,
        },
    };

    let badges = vec![
        badge("50 Days Badge 2024", now - 30 * DAY_SECS),
        badge("Annual Badge", now - 60 * DAY_SECS),
        badge("Knight Badge", now - 90 * DAY_SECS),
    ];

    let recent_submissions = vec![
        classic("Two Sum", "two-sum", Difficulty::Easy, now - 3_600, "python3"),
        classic(
            "Median of Two Sorted Arrays",
            "median-of-two-sorted-arrays",
            Difficulty::Hard,
            now - 7_200,
            "python3",
        ),
        classic(
            "Longest Substring Without Repeating Characters",
            "longest-substring-without-repeating-characters",
            Difficulty::Medium,
            now - DAY_SECS,
            "javascript",
        ),
        classic(
            "Add Two Numbers",
            "add-two-numbers",
            Difficulty::Medium,
            now - 2 * DAY_SECS,
            "python3",
        ),
        classic(
            "Container With Most Water",
            "container-with-most-water",
            Difficulty::Medium,
            now - 3 * DAY_SECS,
            "cpp",
        ),
    ];

    // A sparse month of activity, oldest first.
    let mut submission_calendar = Vec::new();
    for days_ago in (0..30).rev() {
        if rng.gen_bool(0.5) {
            submission_calendar.push(CalendarEntry {
                timestamp: now - days_ago * DAY_SECS - rng.gen_range(0..DAY_SECS),
                count: rng.gen_range(1..=5),
            });
        }
    }

    Dashboard {
        profile,
        contest_info,
        problem_stats,
        badges,
        recent_submissions,
        submission_calendar,
    }
}

fn badge(name: &str, creation_date: i64) -> Badge {
    Badge {
        name: name.to_string(),
        icon: None,
        creation_date: Some(creation_date),
    }
}

fn classic(
    title: &str,
    slug: &str,
    difficulty: Difficulty,
    timestamp: i64,
    lang: &str,
) -> Submission {
    Submission {
        title: title.to_string(),
        title_slug: slug.to_string(),
        timestamp,
        lang: lang.to_string(),
        status_display: "Accepted".to_string(),
        difficulty,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const NOW: i64 = 1_700_000_000;

    #[test]
    fn same_seed_produces_identical_dashboards() {
        let a = synthetic_dashboard("someone", 7, NOW);
        let b = synthetic_dashboard("someone", 7, NOW);

        assert_eq!(
            serde_json::to_string(&a).unwrap(),
            serde_json::to_string(&b).unwrap()
        );
    }

    #[test]
    fn seed_derivation_is_stable() {
        assert_eq!(seed_for("someone"), seed_for("someone"));
    }

    #[test]
    fn values_stay_within_documented_ranges() {
        for seed in 0..20 {
            let dashboard = synthetic_dashboard("someone", seed, NOW);

            assert!((1..=500_000).contains(&dashboard.profile.ranking));
            assert!((0..1_000).contains(&dashboard.profile.reputation));
            assert!((0..500).contains(&dashboard.profile.contribution_points));

            let contest = dashboard.contest_info.expect("contest info present");
            assert!((1_200.0..2_200.0).contains(&contest.rating));
            assert!((0.0..50.0).contains(&contest.top_percentage));
            assert!(contest.attended < 50);

            let stats = dashboard.problem_stats;
            assert!(stats.easy.solved <= stats.easy.total);
            assert!(stats.medium.solved <= stats.medium.total);
            assert!(stats.hard.solved <= stats.hard.total);
            assert_eq!(stats.easy.total, 850);
            assert_eq!(stats.medium.total, 1800);
            assert_eq!(stats.hard.total, 750);
        }
    }

    #[test]
    fn dashboard_is_structurally_complete() {
        let dashboard = synthetic_dashboard("someone", 1, NOW);

        assert_eq!(dashboard.profile.username, "someone");
        assert_eq!(dashboard.badges.len(), 3);
        assert_eq!(dashboard.recent_submissions.len(), 5);
        assert!(dashboard
            .recent_submissions
            .iter()
            .all(|s| s.difficulty != Difficulty::Unknown));
        // Calendar entries come back oldest first.
        assert!(dashboard
            .submission_calendar
            .windows(2)
            .all(|pair| pair[0].timestamp <= pair[1].timestamp));
    }
}
