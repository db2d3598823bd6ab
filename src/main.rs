use anyhow::Result;
use chrono::{Local, NaiveDate};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use fintrack::cli::{
    handle_export_command, handle_report_command, handle_session_command, CliContext,
    ExportCommands, ReportCommands, SessionCommands,
};
use fintrack::config::{FintrackPaths, Settings};
use fintrack::storage::initialize_storage;

#[derive(Parser)]
#[command(
    name = "fintrack",
    version,
    about = "Personal finance metrics from the command line",
    long_about = "fintrack computes spending and income totals, category breakdowns, \
                  budget utilization, goal progress and monthly trends from a \
                  snapshot of your financial records."
)]
struct Cli {
    /// Snapshot file to read records from
    #[arg(long, global = true, env = "FINTRACK_SNAPSHOT", value_name = "PATH")]
    data: Option<PathBuf>,

    /// Compute metrics as of this date (YYYY-MM-DD) instead of today
    #[arg(long, global = true, env = "FINTRACK_AS_OF", value_name = "DATE")]
    as_of: Option<NaiveDate>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    #[command(flatten)]
    Report(ReportCommands),

    /// Export records or reports to files
    #[command(subcommand)]
    Export(ExportCommands),

    #[command(flatten)]
    Session(SessionCommands),

    /// Create the data directory, default settings and an empty snapshot
    Init,

    /// Show current configuration and paths
    Config,
}

fn init_tracing(settings: &Settings) {
    let filter = EnvFilter::try_from_env("FINTRACK_LOG")
        .or_else(|_| EnvFilter::try_new(&settings.log_level))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize paths and settings
    let paths = FintrackPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;
    init_tracing(&settings);

    let reference_date = cli.as_of.unwrap_or_else(|| Local::now().date_naive());
    tracing::debug!(base_dir = %paths.base_dir().display(), %reference_date, "starting");

    match cli.command {
        Some(Commands::Report(cmd)) => {
            let ctx = CliContext::new(paths, settings, cli.data, reference_date);
            handle_report_command(&ctx, cmd)?;
        }
        Some(Commands::Export(cmd)) => {
            let ctx = CliContext::new(paths, settings, cli.data, reference_date);
            handle_export_command(&ctx, cmd)?;
        }
        Some(Commands::Session(cmd)) => {
            let ctx = CliContext::new(paths, settings, cli.data, reference_date);
            handle_session_command(&ctx, cmd)?;
        }
        Some(Commands::Init) => {
            println!("Initializing fintrack at: {}", paths.base_dir().display());
            initialize_storage(&paths)?;
            settings.save(&paths)?;
            println!("Initialization complete!");
            println!();
            println!("Settings:  {}", paths.settings_file().display());
            println!("Snapshot:  {}", paths.snapshot_file().display());
            println!();
            println!("Put your records in the snapshot file, then run 'fintrack dashboard'.");
        }
        Some(Commands::Config) => {
            println!("fintrack Configuration");
            println!("======================");
            println!("Base directory: {}", paths.base_dir().display());
            println!("Data directory: {}", paths.data_dir().display());
            println!("Snapshot:       {}", paths.snapshot_file().display());
            println!("Session file:   {}", paths.session_file().display());
            println!();
            println!("Settings:");
            println!("  Currency symbol: {}", settings.currency_symbol);
            println!("  Default period:  {}", settings.default_period);
            println!("  Session TTL:     {}s", settings.session_ttl_secs);
            println!("  Trend months:    {}", settings.trend_months);
            println!("  Log level:       {}", settings.log_level);
        }
        None => {
            println!("fintrack - personal finance metrics");
            println!();
            println!("Run 'fintrack --help' for usage information.");
            println!("Run 'fintrack dashboard' for an overview of this month.");
        }
    }

    Ok(())
}
