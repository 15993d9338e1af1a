//! `ttguard` CLI — validate timetable proposals from the command line.
//!
//! ## Usage
//!
//! ```sh
//! # Evaluate one request (stdin → stdout)
//! echo '{"check":"time_slot","start":"08:00","end":"10:00"}' | ttguard check
//!
//! # Evaluate a batch from a file, with an institution config
//! ttguard check -i requests.json -c rules.toml --pretty
//!
//! # Show the effective room compatibility table
//! ttguard matrix -c rules.toml
//!
//! # Convert a time of day to minutes since midnight
//! ttguard minutes 08:30
//! ```

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::io::{self, Read};
use std::path::Path;
use timetable_guard::{parse_requests, time_to_minutes, Engine, EngineConfig};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "ttguard",
    version,
    about = "Timetable constraint and conflict validation"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Log rule evaluations at debug level
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Evaluate one check request or an array of requests (JSON)
    Check {
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
        /// Engine configuration file (TOML, or JSON with a .json extension)
        #[arg(short, long, env = "TTGUARD_CONFIG")]
        config: Option<String>,
        /// Pretty-print the outcome JSON
        #[arg(long)]
        pretty: bool,
    },
    /// Print the room compatibility table in effect
    Matrix {
        /// Engine configuration file (TOML, or JSON with a .json extension)
        #[arg(short, long, env = "TTGUARD_CONFIG")]
        config: Option<String>,
    },
    /// Print minutes since midnight for an HH:MM time
    Minutes {
        /// Time of day, e.g. 08:30
        time: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Check {
            input,
            output,
            config,
            pretty,
        } => {
            let engine = Engine::new(load_config(config.as_deref())?);
            let json = read_input(input.as_deref())?;
            let (requests, batched) =
                parse_requests(&json).context("Failed to parse check requests")?;

            let outcomes = requests
                .iter()
                .map(|request| {
                    engine
                        .evaluate(request)
                        .with_context(|| format!("Failed to evaluate {} check", request.kind()))
                })
                .collect::<Result<Vec<_>>>()?;

            let rejected = outcomes.iter().filter(|o| !o.valid).count();
            tracing::info!(requests = outcomes.len(), rejected, "checks evaluated");

            let value = if batched {
                serde_json::to_value(&outcomes)?
            } else {
                serde_json::to_value(&outcomes[0])?
            };
            let mut rendered = if pretty {
                serde_json::to_string_pretty(&value)?
            } else {
                serde_json::to_string(&value)?
            };
            rendered.push('\n');
            write_output(output.as_deref(), &rendered)?;
        }
        Commands::Matrix { config } => {
            let config = load_config(config.as_deref())?;
            let matrix = &config.compatibility;
            for (activity, rooms) in matrix.iter() {
                let rooms: Vec<&str> = rooms.iter().map(String::as_str).collect();
                println!("{}: {}", activity, rooms.join(", "));
            }
            let fallback: Vec<&str> = matrix.fallback().iter().map(String::as_str).collect();
            println!("* (other): {}", fallback.join(", "));
        }
        Commands::Minutes { time } => {
            let minutes = time_to_minutes(&time).context("Failed to convert time")?;
            println!("{}", minutes);
        }
    }

    Ok(())
}

/// Logs go to stderr so that stdout stays machine-readable.
fn init_logging(verbose: bool) {
    let default_filter = if verbose {
        "ttguard=debug,timetable_guard=debug"
    } else {
        "ttguard=info,timetable_guard=warn"
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .compact()
        .init();
}

fn load_config(path: Option<&str>) -> Result<EngineConfig> {
    let Some(path) = path else {
        return Ok(EngineConfig::default());
    };

    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path))?;
    let is_json = Path::new(path)
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
    let config = if is_json {
        EngineConfig::from_json_str(&text)
    } else {
        EngineConfig::from_toml_str(&text)
    }
    .with_context(|| format!("Invalid config file: {}", path))?;

    tracing::debug!(path, "configuration loaded");
    Ok(config)
}

fn read_input(path: Option<&str>) -> Result<String> {
    match path {
        Some(path) => {
            std::fs::read_to_string(path).with_context(|| format!("Failed to read file: {}", path))
        }
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read from stdin")?;
            Ok(buf)
        }
    }
}

fn write_output(path: Option<&str>, content: &str) -> Result<()> {
    match path {
        Some(path) => {
            std::fs::write(path, content)
                .with_context(|| format!("Failed to write file: {}", path))?;
        }
        None => {
            print!("{}", content);
        }
    }
    Ok(())
}
