//! Mahjong bot CLI - reads one judge transcript, prints one response.
//!
//! Input is the JSON document on stdin (or `--input`). The response envelope
//! is the only thing written to stdout; logs and `--list-actions` output go to
//! stderr.

use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;

use clap::Parser;
use mahjong_bot::ai::registry;
use mahjong_bot::{decide_json, telemetry, BotConfig};
use tracing::{error, info};

#[derive(Parser)]
#[command(name = "mahjong-bot")]
#[command(about = "Four-seat mahjong bot: replays the transcript and answers one turn")]
struct Args {
    /// Read the transcript from this file instead of stdin
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Policy config as JSON, e.g. '{"policy": "random", "seed": 7}'
    #[arg(long)]
    config: Option<String>,

    /// Decision policy (overrides --config; default "random")
    #[arg(long, value_parser = policy_name)]
    policy: Option<String>,

    /// RNG seed for reproducible choices (overrides --config)
    #[arg(long)]
    seed: Option<u64>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Emit logs as JSON lines
    #[arg(long)]
    json_logs: bool,

    /// Print every legal action to stderr before answering
    #[arg(long)]
    list_actions: bool,
}

fn policy_name(name: &str) -> Result<String, String> {
    match registry::by_name(name) {
        Some(factory) => Ok(factory.name.to_string()),
        None => {
            let known: Vec<&str> = registry::registered_policies()
                .iter()
                .map(|f| f.name)
                .collect();
            Err(format!("unknown policy {name:?} (known: {})", known.join(", ")))
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let level = if args.verbose { "debug" } else { "warn" };
    telemetry::init_tracing(level, args.json_logs);

    let input = match &args.input {
        Some(path) => fs::read_to_string(path)?,
        None => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };

    let config_json = args
        .config
        .as_deref()
        .map(serde_json::from_str::<serde_json::Value>)
        .transpose()?;
    let config = BotConfig::from_json(config_json.as_ref()).with_overrides(args.policy, args.seed);
    let policy = config.build_policy()?;
    info!(policy = %config.policy, seed = ?config.seed, "policy ready");

    let decision = match decide_json(&input, &*policy) {
        Ok(decision) => decision,
        Err(e) => {
            error!(code = e.code(), error = %e, "could not decide");
            return Err(e.into());
        }
    };

    if args.list_actions {
        for action in &decision.legal {
            eprintln!("{action}");
        }
    }

    println!("{}", serde_json::to_string(&decision.envelope())?);
    Ok(())
}
