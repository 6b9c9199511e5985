//! CLI definitions and entry point

use std::path::PathBuf;

use clap::builder::FalseyValueParser;
use clap::{ArgAction, Args, Parser, Subcommand};

use super::commands;
use crate::output::OutputMode;

/// selfheal - Self-healing deployment watchdog
#[derive(Parser, Debug)]
#[command(
    name = "selfheal",
    version,
    about = "Self-healing deployment watchdog",
    long_about = "Probe a service's health endpoints and, on sustained failure,\n\
                  roll the deployment back to the newest SAFE_<branch>_* tag,\n\
                  optionally force-publishing the rollback and rebuilding.\n\n\
                  Runs to completion and exits; schedule re-invocation externally\n\
                  (cron, systemd timer). Exit code 0 means healthy or rollback\n\
                  attempted, 2 means no safe tag was found for the branch."
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output in JSON format (machine-readable)
    #[arg(long, global = true)]
    pub json: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Subcommands supported by the CLI
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run the watchdog: probe, then roll back on sustained failure
    Run(HealArgs),

    /// Probe each health target once and report; never touches the repository
    Check(CheckArgs),

    /// Show version
    Version,
}

/// Arguments for the full watchdog run
#[derive(Args, Debug, Clone)]
pub struct HealArgs {
    /// Health URL to probe; repeatable, comma-separated lists accepted
    #[arg(
        long = "url",
        env = "SELFHEAL_HEALTH_URLS",
        value_delimiter = ',',
        value_name = "URL"
    )]
    pub urls: Vec<String>,

    /// Probing attempt budget
    #[arg(long, env = "SELFHEAL_HEALTH_RETRIES", value_name = "N")]
    pub retries: Option<u32>,

    /// Delay between probing attempts, in seconds
    #[arg(long, env = "SELFHEAL_HEALTH_INTERVAL_SEC", value_name = "SECONDS")]
    pub interval: Option<f64>,

    /// Per-request probe timeout, in seconds
    #[arg(long, env = "SELFHEAL_PROBE_TIMEOUT_SEC", value_name = "SECONDS")]
    pub probe_timeout: Option<f64>,

    /// Publish the rollback with a lease-guarded force push
    #[arg(
        long,
        env = "SELFHEAL_FORCE_PUSH",
        action = ArgAction::SetTrue,
        value_parser = FalseyValueParser::new()
    )]
    pub force_push: bool,

    /// Repository to watch (defaults to the current directory)
    #[arg(long, value_name = "PATH", default_value = ".")]
    pub repo: PathBuf,
}

/// Arguments for the probe-only check
#[derive(Args, Debug, Clone)]
pub struct CheckArgs {
    /// Health URL to probe; repeatable, comma-separated lists accepted
    #[arg(
        long = "url",
        env = "SELFHEAL_HEALTH_URLS",
        value_delimiter = ',',
        value_name = "URL"
    )]
    pub urls: Vec<String>,

    /// Per-request probe timeout, in seconds
    #[arg(long, env = "SELFHEAL_PROBE_TIMEOUT_SEC", value_name = "SECONDS")]
    pub probe_timeout: Option<f64>,

    /// Repository whose selfheal.toml supplies defaults
    #[arg(long, value_name = "PATH", default_value = ".")]
    pub repo: PathBuf,
}

/// Run the CLI
///
/// Returns the process exit code; the caller applies it at the outermost
/// boundary.
pub fn run() -> anyhow::Result<u8> {
    let cli = Cli::parse();

    if cli.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    }

    let output_mode = if cli.json {
        OutputMode::Json
    } else {
        OutputMode::Human
    };

    match cli.command {
        Some(Command::Run(args)) => commands::heal(&args, output_mode),
        Some(Command::Check(args)) => commands::check(&args, output_mode),
        Some(Command::Version) => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": env!("CARGO_PKG_VERSION")
                    })
                );
            } else {
                println!("selfheal v{}", env!("CARGO_PKG_VERSION"));
            }
            Ok(0)
        },
        None => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": env!("CARGO_PKG_VERSION"),
                        "hint": "Use --help for usage"
                    })
                );
            } else {
                println!("selfheal v{}", env!("CARGO_PKG_VERSION"));
                println!("\nRun 'selfheal --help' for usage");
                println!("Run 'selfheal run' to probe and self-heal");
            }
            Ok(0)
        },
    }
}
