//! Batch snapshot fetcher: queries the API once and writes the aggregated
//! stats to a JSON file for static consumption.

use std::fs::File;
use std::path::Path;

use anyhow::Context;
use tracing::{error, info};

use leet_stats::enrich::PacingPolicy;
use leet_stats::model::Snapshot;
use leet_stats::{aggregate, LeetClient};

const DEFAULT_USERNAME: &str = "krisha-cmd";
const OUTPUT_PATH: &str = "public/leetcode-stats.json";

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    if let Err(error) = run().await {
        error!(%error, "failed to fetch leetcode stats");
        std::process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    let username = std::env::args()
        .nth(1)
        .unwrap_or_else(|| DEFAULT_USERNAME.to_string());
    info!(%username, "fetching leetcode stats");

    let client = LeetClient::new();
    let snapshot = aggregate::fetch_snapshot(&client, &username, PacingPolicy::default()).await?;

    write_snapshot(&snapshot, Path::new(OUTPUT_PATH))?;

    let stats = &snapshot.problem_stats;
    info!(
        easy = stats.easy.solved,
        medium = stats.medium.solved,
        hard = stats.hard.solved,
        "problems solved"
    );
    if let Some(contest) = &snapshot.contest_info {
        info!(rating = contest.rating, "contest rating");
    }
    info!(path = OUTPUT_PATH, "snapshot written");
    Ok(())
}

fn write_snapshot(snapshot: &Snapshot, path: &Path) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("creating {}", parent.display()))?;
    }
    let file = File::create(path).with_context(|| format!("creating {}", path.display()))?;
    serde_json::to_writer_pretty(file, snapshot)
        .with_context(|| format!("writing {}", path.display()))?;
    Ok(())
}
