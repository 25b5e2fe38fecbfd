use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use scoutrank_common::{logger, ScoutConfig};
use scoutrank_scouting::{MetricKind, PlayerProfile, Roster, ScoutingReport, ScoutingService};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "scoutrank")]
#[command(about = "scoutrank - find players with a similar statistical profile", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Players most similar to a named roster player
    Similar {
        /// Player name (accent and case insensitive, partial names allowed)
        player: String,

        /// Roster JSON file: an array of {name, team, features}
        #[arg(long)]
        roster: PathBuf,

        /// Number of matches (defaults to SCOUT_TOP_N)
        #[arg(long)]
        top_n: Option<usize>,

        /// Metric override (weighted_euclidean or cosine)
        #[arg(long)]
        metric: Option<String>,
    },

    /// Players closest to a free-form feature vector
    Vector {
        /// Comma-separated feature values
        #[arg(long, value_delimiter = ',', allow_hyphen_values = true)]
        features: Vec<f64>,

        /// Roster JSON file: an array of {name, team, features}
        #[arg(long)]
        roster: PathBuf,

        /// Number of matches (defaults to SCOUT_TOP_N)
        #[arg(long)]
        top_n: Option<usize>,

        /// Metric override (weighted_euclidean or cosine)
        #[arg(long)]
        metric: Option<String>,
    },
}

/// Load a roster from a JSON array of player profiles
fn load_roster(path: &Path) -> Result<Roster> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read roster {}", path.display()))?;
    let players: Vec<PlayerProfile> = serde_json::from_str(&raw)
        .with_context(|| format!("Failed to parse roster {}", path.display()))?;
    Ok(Roster::new(players))
}

fn build_service(config: &ScoutConfig, metric: Option<&str>) -> Result<ScoutingService> {
    let service = ScoutingService::new(config)?;
    Ok(match metric {
        Some(name) => service.with_metric(name.parse::<MetricKind>()?),
        None => service,
    })
}

fn run(command: Commands, config: &ScoutConfig) -> Result<ScoutingReport> {
    let report = match command {
        Commands::Similar {
            player,
            roster,
            top_n,
            metric,
        } => {
            let roster = load_roster(&roster)?;
            tracing::info!("Loaded roster: {} players", roster.len());
            build_service(config, metric.as_deref())?.find_similar(&roster, &player, top_n)?
        }
        Commands::Vector {
            features,
            roster,
            top_n,
            metric,
        } => {
            let roster = load_roster(&roster)?;
            tracing::info!("Loaded roster: {} players", roster.len());
            build_service(config, metric.as_deref())?
                .find_similar_to_vector(&roster, &features, top_n)?
        }
    };
    Ok(report)
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = ScoutConfig::from_env()?;

    // Setup logging
    logger::setup_logging(&config.log_dir, &config.log_level)?;

    tracing::info!("scoutrank starting...");
    tracing::info!("  Metric: {}", config.metric);
    tracing::info!("  Log dir: {}", config.log_dir.display());

    let report = run(cli.command, &config)?;
    println!("{}", report.to_json()?);

    Ok(())
}
