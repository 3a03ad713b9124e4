//! uxv CLI - accessibility smoke checks for a running web app
//!
//! Usage:
//!   uxv activity-bar            Check the Dashboard button and sidebar toggle
//!   uxv spotlight               Check the Spotlight search dialog
//!   uxv all                     Run every check, one browser session each
//!   uxv init                    Write a default .uxv/config.toml

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing::{info, Level};
use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::FmtSubscriber;
use uxv_checks::{launch_and_run, CheckKind};
use uxv_core::{all_passed, CheckReport, UxvConfig};

/// Exit status when any check failed
const EXIT_CHECK_FAILED: u8 = 1;
/// Exit status for unusable configuration
const EXIT_CONFIG: u8 = 2;

#[derive(Parser)]
#[command(name = "uxv")]
#[command(author, version, about = "Accessibility smoke checks against a running web app")]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Application root URL (overrides config)
    #[arg(long, global = true, value_name = "URL")]
    url: Option<String>,

    /// Screenshot directory (overrides config)
    #[arg(long, global = true, value_name = "DIR")]
    output_dir: Option<PathBuf>,

    /// Config file (defaults to .uxv/config.toml when present)
    #[arg(long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Only log observational checks instead of failing on them
    #[arg(long, global = true)]
    lenient: bool,

    /// Always exit 0, even when a check fails
    #[arg(long, global = true)]
    no_fail: bool,

    /// Print reports as JSON (logs go to stderr)
    #[arg(long, global = true)]
    json: bool,

    /// Show the browser window
    #[arg(long, global = true)]
    headed: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check the activity bar's Dashboard button and sidebar toggle
    ActivityBar,

    /// Check the Spotlight search dialog, query and results
    Spotlight,

    /// Run every check sequentially
    All,

    /// Write a default configuration file
    Init {
        /// Project root (defaults to current directory)
        #[arg(default_value = ".")]
        path: PathBuf,
    },
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    // Setup logging
    let level = if cli.verbose { Level::DEBUG } else { Level::INFO };
    let writer = if cli.json {
        BoxMakeWriter::new(std::io::stderr)
    } else {
        BoxMakeWriter::new(std::io::stdout)
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .with_writer(writer)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let kinds: Vec<CheckKind> = match &cli.command {
        Commands::Init { path } => return cmd_init(path),
        Commands::ActivityBar => vec![CheckKind::ActivityBar],
        Commands::Spotlight => vec![CheckKind::Spotlight],
        Commands::All => CheckKind::all().to_vec(),
    };

    let config = match load_config(&cli) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            return Ok(ExitCode::from(EXIT_CONFIG));
        }
    };

    let reports = cmd_run(&kinds, &config).await;
    print_reports(&reports, cli.json)?;

    Ok(ExitCode::from(exit_status(&reports, cli.no_fail)))
}

fn cmd_init(path: &Path) -> Result<ExitCode> {
    let written = UxvConfig::write_default(path)
        .with_context(|| format!("Failed to write config under {:?}", path))?;
    println!("Created {}", written.display());
    Ok(ExitCode::SUCCESS)
}

/// Run each check in its own browser session, in order
async fn cmd_run(kinds: &[CheckKind], config: &UxvConfig) -> Vec<CheckReport> {
    let mut reports = Vec::with_capacity(kinds.len());
    for kind in kinds {
        let check = kind.check();
        reports.push(launch_and_run(check.as_ref(), config).await);
    }
    reports
}

fn load_config(cli: &Cli) -> Result<UxvConfig> {
    let mut config = match &cli.config {
        Some(path) => UxvConfig::load(path)
            .with_context(|| format!("Failed to load config {:?}", path))?,
        None => {
            let cwd = std::env::current_dir().context("Failed to read current directory")?;
            UxvConfig::load_or_default(&cwd)?
        }
    };
    apply_overrides(cli, &mut config);
    info!("Target: {}", config.target.base_url);
    Ok(config)
}

/// Command-line flags win over file values
fn apply_overrides(cli: &Cli, config: &mut UxvConfig) {
    if let Some(url) = &cli.url {
        config.target.base_url = url.clone();
    }
    if let Some(dir) = &cli.output_dir {
        config.checks.output_dir = dir.clone();
    }
    if cli.lenient {
        config.checks.strict = false;
    }
    if cli.headed {
        config.browser.headless = false;
    }
}

fn print_reports(reports: &[CheckReport], json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(reports)?);
        return Ok(());
    }

    println!();
    for report in reports {
        println!(
            "{:<14} {:<7} {:>6} ms",
            report.check, report.status, report.duration_ms
        );
        if let Some(screenshot) = &report.screenshot {
            println!("  screenshot: {}", screenshot.path.display());
        }
        if let Some(error) = &report.error {
            println!("  error: {}", error);
        }
    }
    Ok(())
}

fn exit_status(reports: &[CheckReport], no_fail: bool) -> u8 {
    if no_fail || all_passed(reports) {
        0
    } else {
        EXIT_CHECK_FAILED
    }
}
