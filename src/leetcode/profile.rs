use serde::Deserialize;
use tracing::debug;

use crate::error::{LeetError, Result};
use crate::leetcode;
use crate::model::{
    Badge, ContestInfo, DifficultyStats, ProblemStats, Profile, ProfileData, DEFAULT_EASY_TOTAL,
    DEFAULT_HARD_TOTAL, DEFAULT_MEDIUM_TOTAL,
};

const USER_PROFILE_QUERY: &str = r#"
query getUserProfile($username: String!) {
  matchedUser(username: $username) {
    username
    profile {
      realName
      userAvatar
      ranking
      reputation
    }
    submitStatsGlobal {
      acSubmissionNum {
        difficulty
        count
      }
    }
    badges {
      id
      name
      icon
      creationDate
    }
    contributions {
      points
    }
  }
  userContestRanking(username: $username) {
    attendedContestsCount
    rating
    globalRanking
    topPercentage
  }
  allQuestionsCount {
    difficulty
    count
  }
}
"#;

pub(crate) async fn get_user_profile(
    client: &reqwest::Client,
    url: &str,
    username: &str,
) -> Result<ProfileData> {
    let variables = serde_json::json!({ "username": username });
    let response: ProfileResponse =
        leetcode::post_query(client, url, USER_PROFILE_QUERY, variables).await?;
    let data = normalize(response)?;
    debug!(
        username = %data.profile.username,
        badges = data.badges.len(),
        "fetched user profile"
    );
    Ok(data)
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ProfileResponse {
    matched_user: Option<RawMatchedUser>,
    user_contest_ranking: Option<RawContestRanking>,
    #[serde(default)]
    all_questions_count: Vec<RawDifficultyCount>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawMatchedUser {
    username: String,
    profile: Option<RawProfile>,
    submit_stats_global: Option<RawSubmitStats>,
    #[serde(default)]
    badges: Vec<RawBadge>,
    contributions: Option<RawContributions>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawProfile {
    real_name: Option<String>,
    user_avatar: Option<String>,
    ranking: Option<u32>,
    reputation: Option<i64>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawSubmitStats {
    #[serde(default)]
    ac_submission_num: Vec<RawDifficultyCount>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RawDifficultyCount {
    pub difficulty: String,
    pub count: u32,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawBadge {
    name: String,
    icon: Option<String>,
    creation_date: Option<i64>,
}

#[derive(Debug, Deserialize)]
struct RawContributions {
    #[serde(default)]
    points: u32,
}

fn normalize(response: ProfileResponse) -> Result<ProfileData> {
    let user = response.matched_user.ok_or(LeetError::MissingField {
        context: "matchedUser",
    })?;

    let fields = user.profile.unwrap_or_default();
    let profile = Profile {
        username: user.username,
        real_name: fields.real_name.unwrap_or_default(),
        avatar: fields.user_avatar,
        ranking: fields.ranking.unwrap_or_default(),
        reputation: fields.reputation.unwrap_or_default(),
        contribution_points: user.contributions.map(|c| c.points).unwrap_or_default(),
    };

    let contest = response.user_contest_ranking.map(|ranking| ContestInfo {
        attended: ranking.attended_contests_count.unwrap_or_default(),
        rating: ranking.rating.unwrap_or_default(),
        global_ranking: ranking.global_ranking.unwrap_or_default(),
        top_percentage: ranking.top_percentage.unwrap_or_default(),
    });

    let solved = user
        .submit_stats_global
        .map(|stats| stats.ac_submission_num)
        .unwrap_or_default();
    let problem_stats = build_problem_stats(&response.all_questions_count, &solved);

    let badges = user
        .badges
        .into_iter()
        .map(|badge| Badge {
            name: badge.name,
            icon: badge.icon,
            creation_date: badge.creation_date,
        })
        .collect();

    Ok(ProfileData {
        profile,
        contest,
        problem_stats,
        badges,
    })
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawContestRanking {
    attended_contests_count: Option<u32>,
    rating: Option<f64>,
    global_ranking: Option<u32>,
    top_percentage: Option<f64>,
}

/// Merge platform-wide totals and per-user solved counts into one stats
/// block. Buckets missing an upstream total keep the fallback constant;
/// difficulty keys outside easy/medium/hard are dropped.
pub(crate) fn build_problem_stats(
    totals: &[RawDifficultyCount],
    solved: &[RawDifficultyCount],
) -> ProblemStats {
    let mut stats = ProblemStats {
        easy: DifficultyStats {
            solved: 0,
            total: DEFAULT_EASY_TOTAL,
        },
        medium: DifficultyStats {
            solved: 0,
            total: DEFAULT_MEDIUM_TOTAL,
        },
        hard: DifficultyStats {
            solved: 0,
            total: DEFAULT_HARD_TOTAL,
        },
    };

    for entry in totals {
        if let Some(bucket) = bucket_mut(&mut stats, &entry.difficulty) {
            bucket.total = entry.count;
        }
    }
    for entry in solved {
        if let Some(bucket) = bucket_mut(&mut stats, &entry.difficulty) {
            bucket.solved = entry.count;
        }
    }

    stats
}

fn bucket_mut<'a>(
    stats: &'a mut ProblemStats,
    difficulty: &str,
) -> Option<&'a mut DifficultyStats> {
    match difficulty.to_lowercase().as_str() {
        "easy" => Some(&mut stats.easy),
        "medium" => Some(&mut stats.medium),
        "hard" => Some(&mut stats.hard),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn counts(entries: &[(&str, u32)]) -> Vec<RawDifficultyCount> {
        entries
            .iter()
            .map(|(difficulty, count)| RawDifficultyCount {
                difficulty: difficulty.to_string(),
                count: *count,
            })
            .collect()
    }

    #[test]
    fn upstream_totals_override_fallbacks() {
        let totals = counts(&[("Easy", 900), ("Medium", 1900), ("Hard", 800)]);
        let solved = counts(&[("Easy", 120), ("Medium", 80), ("Hard", 10)]);

        let stats = build_problem_stats(&totals, &solved);

        assert_eq!(stats.easy.solved, 120);
        assert_eq!(stats.easy.total, 900);
        assert_eq!(stats.medium.total, 1900);
        assert_eq!(stats.hard.total, 800);
        assert!(stats.easy.solved <= stats.easy.total);
        assert!(stats.medium.solved <= stats.medium.total);
        assert!(stats.hard.solved <= stats.hard.total);
    }

    #[test]
    fn missing_totals_fall_back_to_constants() {
        let stats = build_problem_stats(&[], &counts(&[("Medium", 42)]));

        assert_eq!(stats.easy.total, 850);
        assert_eq!(stats.medium.total, 1800);
        assert_eq!(stats.hard.total, 750);
        assert_eq!(stats.medium.solved, 42);
        assert_eq!(stats.easy.solved, 0);
    }

    #[test]
    fn unknown_difficulty_keys_are_dropped() {
        // The upstream rollup bucket must not leak into any difficulty.
        let totals = counts(&[("All", 3500), ("Easy", 900)]);
        let solved = counts(&[("All", 250), ("Easy", 120)]);

        let stats = build_problem_stats(&totals, &solved);

        assert_eq!(stats.easy.total, 900);
        assert_eq!(stats.easy.solved, 120);
        assert_eq!(stats.medium.total, 1800);
        assert_eq!(stats.medium.solved, 0);
        assert_eq!(stats.hard.total, 750);
        assert_eq!(stats.hard.solved, 0);
    }

    #[test]
    fn normalizes_a_full_response() {
        let response: ProfileResponse = serde_json::from_value(serde_json::json!({
            "matchedUser": {
                "username": "someone",
                "profile": {
                    "realName": "Some One",
                    "userAvatar": "https://example.com/a.png",
                    "ranking": 1234,
                    "reputation": 56
                },
                "submitStatsGlobal": {
                    "acSubmissionNum": [
                        { "difficulty": "All", "count": 130 },
                        { "difficulty": "Easy", "count": 100 },
                        { "difficulty": "Medium", "count": 25 },
                        { "difficulty": "Hard", "count": 5 }
                    ]
                },
                "badges": [
                    { "id": "1", "name": "Knight Badge", "icon": null, "creationDate": 1700000000 }
                ],
                "contributions": { "points": 78 }
            },
            "userContestRanking": {
                "attendedContestsCount": 12,
                "rating": 1650.5,
                "globalRanking": 40321,
                "topPercentage": 12.3
            },
            "allQuestionsCount": [
                { "difficulty": "All", "count": 3550 },
                { "difficulty": "Easy", "count": 900 },
                { "difficulty": "Medium", "count": 1900 },
                { "difficulty": "Hard", "count": 750 }
            ]
        }))
        .unwrap();

        let data = normalize(response).unwrap();

        assert_eq!(data.profile.username, "someone");
        assert_eq!(data.profile.real_name, "Some One");
        assert_eq!(data.profile.ranking, 1234);
        assert_eq!(data.profile.contribution_points, 78);
        assert_eq!(data.problem_stats.easy.solved, 100);
        assert_eq!(data.problem_stats.total_solved(), 130);
        assert_eq!(data.badges.len(), 1);
        assert_eq!(data.badges[0].creation_date, Some(1700000000));

        let contest = data.contest.unwrap();
        assert_eq!(contest.attended, 12);
        assert_eq!(contest.global_ranking, 40321);
    }

    #[test]
    fn missing_contest_history_yields_none() {
        let response: ProfileResponse = serde_json::from_value(serde_json::json!({
            "matchedUser": { "username": "someone" },
            "userContestRanking": null,
            "allQuestionsCount": []
        }))
        .unwrap();

        let data = normalize(response).unwrap();

        assert!(data.contest.is_none());
        assert_eq!(data.profile.real_name, "");
        assert_eq!(data.profile.ranking, 0);
        assert!(data.badges.is_empty());
    }

    #[test]
    fn missing_user_is_an_error() {
        let response: ProfileResponse = serde_json::from_value(serde_json::json!({
            "matchedUser": null,
            "userContestRanking": null,
            "allQuestionsCount": []
        }))
        .unwrap();

        assert!(matches!(
            normalize(response),
            Err(LeetError::MissingField {
                context: "matchedUser"
            })
        ));
    }
}
