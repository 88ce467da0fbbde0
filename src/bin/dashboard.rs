//! Live dashboard: runs one aggregation for a user and prints the result
//! as text. Falls back to synthetic data when the upstream is unreachable,
//! so there is always something to show.

use chrono::{Datelike, TimeZone, Utc};

use leet_stats::aggregate::Aggregator;
use leet_stats::model::Dashboard;
use leet_stats::{progress, LeetClient};

const DEFAULT_USERNAME: &str = "krisha-cmd";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let username = std::env::args()
        .nth(1)
        .unwrap_or_else(|| DEFAULT_USERNAME.to_string());

    let aggregator = Aggregator::new(LeetClient::new());
    let Some(dashboard) = aggregator.fetch(&username).await else {
        // Single sequential fetch; nothing can supersede it.
        anyhow::bail!("fetch superseded");
    };
    print_dashboard(&dashboard);
    Ok(())
}

fn print_dashboard(dashboard: &Dashboard) {
    let profile = &dashboard.profile;
    println!("{} ({})", profile.username, profile.real_name);
    println!(
        "ranking #{}  reputation {}  contribution {}",
        profile.ranking, profile.reputation, profile.contribution_points
    );

    match &dashboard.contest_info {
        Some(contest) => println!(
            "contests: {} attended, rating {:.0}, global #{}, top {:.1}%",
            contest.attended, contest.rating, contest.global_ranking, contest.top_percentage
        ),
        None => println!("contests: none attended"),
    }

    let stats = &dashboard.problem_stats;
    println!(
        "solved: easy {}/{}  medium {}/{}  hard {}/{}",
        stats.easy.solved,
        stats.easy.total,
        stats.medium.solved,
        stats.medium.total,
        stats.hard.solved,
        stats.hard.total
    );

    if !dashboard.badges.is_empty() {
        println!("badges:");
        for badge in &dashboard.badges {
            println!("  {} [{}]", badge.name, badge.rarity());
        }
    }

    if !dashboard.recent_submissions.is_empty() {
        println!("recent submissions:");
        for submission in &dashboard.recent_submissions {
            let when = Utc
                .timestamp_opt(submission.timestamp, 0)
                .single()
                .map(|ts| ts.format("%Y-%m-%d %H:%M").to_string())
                .unwrap_or_default();
            println!(
                "  {}  {} ({}, {})",
                when, submission.title, submission.difficulty, submission.lang
            );
        }
    }

    let now = Utc::now();
    let early_days =
        progress::early_solve_days(&dashboard.recent_submissions, now.year(), now.month());
    println!(
        "early solves this month (before 06:30 UTC+5:30): {} day(s)",
        early_days.len()
    );
}
