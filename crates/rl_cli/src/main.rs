//! Match stats CLI
//!
//! Replays JSON-lines event logs through a session, prints the report schema,
//! and evaluates single xG inputs.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use rl_core::api::{report_from_context, MatchContext};
use rl_core::config::EngineConfig;
use rl_core::geometry::zero;
use rl_core::shot::{compute_xg, DefenderInfo, XgInput};
use rl_core::{MatchEvent, MatchReportSnapshot, MatchSession};

#[derive(Parser)]
#[command(name = "rl_stats")]
#[command(about = "Car-soccer match telemetry tools", long_about = None)]
struct Cli {
    /// Debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Replay a JSON-lines event log and print the report
    Replay {
        /// One `MatchEvent` JSON object per line
        #[arg(long)]
        events: PathBuf,

        /// End-of-match context JSON (roster, scores, names, game time)
        #[arg(long)]
        context: PathBuf,

        /// YAML or JSON engine config; falls back to RL_ENGINE_CONFIG
        #[arg(long)]
        config: Option<PathBuf>,

        /// Pretty-print the output
        #[arg(long, default_value = "false")]
        pretty: bool,
    },

    /// Print the report JSON schema
    Schema,

    /// Evaluate the xG model for one shot
    Xg {
        /// Shooter distance to the goal center (uu)
        #[arg(long)]
        distance: f32,

        /// Radians between ball travel and the goal direction
        #[arg(long, default_value = "0")]
        angle: f32,

        /// Ball speed (uu/s)
        #[arg(long, default_value = "0")]
        speed: f32,

        /// Shooter boost
        #[arg(long, default_value = "0")]
        boost: f32,

        /// Nearby defender as DISTANCE:BOOST, repeatable
        #[arg(long = "defender", value_parser = parse_defender)]
        defenders: Vec<DefenderInfo>,

        #[arg(long)]
        open_net: bool,

        #[arg(long)]
        hard_rebound: bool,

        #[arg(long)]
        panic_shot: bool,

        /// Double tap or perfect center
        #[arg(long)]
        quality: bool,

        #[arg(long)]
        aerial: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level))
        .format_timestamp(None)
        .init();

    match cli.command {
        Commands::Replay {
            events,
            context,
            config,
            pretty,
        } => {
            let config = match config {
                Some(path) => EngineConfig::from_path(&path)
                    .with_context(|| format!("loading config {}", path.display()))?,
                None => EngineConfig::from_env_or_default(),
            };
            let events = read_events(&events)?;
            let context = read_context(&context)?;

            let mut session = MatchSession::with_config(config);
            for event in &events {
                session.handle(event);
            }
            log::info!("Replayed {} events", events.len());

            let response = report_from_context(&mut session, &context)?;
            print_json(&response, pretty)?;
        }

        Commands::Schema => {
            let schema = schemars::schema_for!(MatchReportSnapshot);
            print_json(&schema, true)?;
        }

        Commands::Xg {
            distance,
            angle,
            speed,
            boost,
            defenders,
            open_net,
            hard_rebound,
            panic_shot,
            quality,
            aerial,
        } => {
            let config = EngineConfig::from_env_or_default();
            let xg = compute_xg(
                &XgInput {
                    distance,
                    angle,
                    ball_speed: speed,
                    player_boost: boost,
                    is_aerial: aerial,
                    defenders: &defenders,
                    hard_rebound,
                    panic_shot,
                    open_net,
                    quality_action: quality,
                },
                &config.xg,
            );
            println!("{xg:.4}");
        }
    }

    Ok(())
}

/// Parse a JSON-lines event log. Blank lines are skipped.
fn read_events(path: &Path) -> Result<Vec<MatchEvent>> {
    let file = std::fs::File::open(path).with_context(|| format!("opening {}", path.display()))?;
    let mut events = Vec::new();
    for (index, line) in BufReader::new(file).lines().enumerate() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let event: MatchEvent = serde_json::from_str(line)
            .with_context(|| format!("{}:{}: invalid event", path.display(), index + 1))?;
        events.push(event);
    }
    Ok(events)
}

fn read_context(path: &Path) -> Result<MatchContext> {
    let text = std::fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("{}: invalid match context", path.display()))
}

fn print_json<T: serde::Serialize>(value: &T, pretty: bool) -> Result<()> {
    let json = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    println!("{json}");
    Ok(())
}

fn parse_defender(value: &str) -> std::result::Result<DefenderInfo, String> {
    let (distance, boost) = value
        .split_once(':')
        .ok_or_else(|| format!("expected DISTANCE:BOOST, got '{value}'"))?;
    let distance: f32 = distance
        .trim()
        .parse()
        .map_err(|e| format!("bad distance '{distance}': {e}"))?;
    let boost: f32 = boost
        .trim()
        .parse()
        .map_err(|e| format!("bad boost '{boost}': {e}"))?;
    Ok(DefenderInfo {
        position: zero(),
        boost,
        distance,
    })
}
