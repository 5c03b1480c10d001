//! `meetings` CLI — propose and query meetings from the command line.
//!
//! ## Usage
//!
//! ```sh
//! # Propose a meeting (stdin → store); exits 2 if a participant is already booked
//! echo '{"title":"Sync","startTime":"0900","endTime":"1000",
//!        "participants":[{"name":"Ada","email":"ada@x.com","rsvp":"Yes"}]}' | meetings create
//!
//! # Propose from a file, against a specific store
//! meetings --store team.json create -i meeting.json
//!
//! # Fetch one meeting by id
//! meetings get 3f2b9c0e4d1a4e6f8b7c5a2d1e0f9a8b
//!
//! # Meetings a participant is on
//! meetings list --participant ada@x.com
//!
//! # Meetings overlapping a time window
//! meetings list --start 0930 --end 1100
//! ```

mod config;

use std::io::{self, Read};
use std::path::PathBuf;
use std::process;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use meeting_engine::{
    CreateOutcome, JsonFileStore, Meeting, MeetingId, MeetingQueryService, Scheduler,
};
use serde_json::json;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use crate::config::Config;

/// Exit status when a meeting is rejected because a participant is booked.
const EXIT_CONFLICT: i32 = 2;

#[derive(Parser)]
#[command(
    name = "meetings",
    version,
    about = "Propose and query meetings with RSVP-aware conflict detection"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Config file (defaults to ./meetings.toml when present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Meeting store file (overrides store.path from the config)
    #[arg(long, global = true)]
    store: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Print one meeting by id
    Get {
        /// Store-assigned meeting id
        id: String,
    },
    /// List meetings by participant or by time window
    List {
        /// Participant email (exact match)
        #[arg(long)]
        participant: Option<String>,
        /// Window start, HHMM
        #[arg(long, requires = "end")]
        start: Option<String>,
        /// Window end, HHMM
        #[arg(long, requires = "start")]
        end: Option<String>,
    },
    /// Create a meeting unless a participant already accepted an overlapping one
    Create {
        /// Meeting JSON file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = Config::load(cli.config.as_deref())?;
    if let Some(path) = cli.store {
        config.store.path = path;
    }
    init_tracing(&config.log.level);

    debug!(store = %config.store.path.display(), "using meeting store");
    let store = JsonFileStore::open(&config.store.path);

    match cli.command {
        Commands::Get { id } => {
            let meeting = MeetingQueryService::new(&store)
                .find_by_id(&MeetingId(id))
                .context("Failed to fetch meeting")?;
            print_json(&meeting)?;
        }
        Commands::List {
            participant,
            start,
            end,
        } => {
            let queries = MeetingQueryService::new(&store);
            // Participant takes precedence when both filters are given.
            let meetings = match (participant, start, end) {
                (Some(email), _, _) if email.is_empty() => {
                    bail!("--participant must not be empty")
                }
                (Some(email), _, _) => queries
                    .find_by_participant(&email)
                    .context("Failed to query meetings by participant")?,
                (None, Some(start), Some(end)) => queries
                    .find_by_time_overlap(&start, &end)
                    .context("Failed to query meetings by time")?,
                _ => bail!("list needs --participant, or both --start and --end"),
            };
            print_json(&meetings)?;
        }
        Commands::Create { input } => {
            let body = read_input(input.as_deref())?;
            let meeting: Meeting =
                serde_json::from_str(&body).context("Failed to parse meeting JSON")?;

            match Scheduler::new(store)
                .create(meeting)
                .context("Failed to create meeting")?
            {
                CreateOutcome::Created(id) => print_json(&json!({ "_id": id }))?,
                CreateOutcome::Conflict { with } => {
                    eprintln!(
                        "Conflict: overlaps accepted meeting {} \"{}\" ({}-{})",
                        with.id.map(|id| id.to_string()).unwrap_or_default(),
                        with.title,
                        with.start_time,
                        with.end_time
                    );
                    process::exit(EXIT_CONFLICT);
                }
            }
        }
    }

    Ok(())
}

/// Log to stderr so stdout stays machine-readable. `RUST_LOG` wins over config.
fn init_tracing(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn print_json<T: serde::Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
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
