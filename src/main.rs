use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::{debug, trace};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

use ledger::audit::AuditLogger;
use ledger::cli::{
    handle_delete_command, handle_entry_command, handle_history_command, handle_list_command,
    handle_report_command, handle_summary_command, DeleteArgs, EntryArgs, EntryKind, HistoryArgs,
    ListArgs, ReportArgs,
};
use ledger::config::{LedgerPaths, Settings};
use ledger::ledger::Ledger;
use ledger::storage::FileStore;

#[derive(Parser, Debug)]
#[command(
    name = "ledger",
    version,
    about = "Personal transaction ledger with running balances",
    long_about = "Records deposits and payments in a plain pipe-delimited file, keeps a \
                  running balance, and answers searches, deletions and reports from \
                  the command line."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// The logging verbosity. This can be overridden by RUST_LOG.
    #[arg(long, global = true, default_value_t = LevelFilter::WARN)]
    log_level: LevelFilter,

    /// Directory holding the ledger, settings and audit log
    #[arg(long, global = true, env = "LEDGER_CLI_DATA_DIR")]
    data_dir: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Record money coming in
    Deposit(EntryArgs),

    /// Record money going out
    Payment(EntryArgs),

    /// List transactions, newest first
    #[command(alias = "ls")]
    List(ListArgs),

    /// Delete transactions by position, date or vendor
    #[command(alias = "rm")]
    Delete(DeleteArgs),

    /// Show totals and the ending balance
    Summary,

    /// Period and spending reports
    Report(ReportArgs),

    /// Show recent adds and deletes from the audit log
    History(HistoryArgs),

    /// Show current configuration and paths
    Config,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logger(cli.log_level);
    debug!("Log level set to {}", cli.log_level.to_string().to_lowercase());

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    trace!("{cli:?}");

    let paths = match cli.data_dir {
        Some(dir) => LedgerPaths::with_base_dir(dir),
        None => LedgerPaths::new()?,
    };
    let settings = Settings::load_or_create(&paths)?;
    let audit = AuditLogger::new(paths.audit_log());

    match cli.command {
        Commands::Config => {
            if !paths.settings_file().exists() {
                settings.save(&paths)?;
                println!("Wrote default settings to {}", paths.settings_file().display());
                println!();
            }
            println!("Ledger Configuration");
            println!("====================");
            println!("Base directory: {}", paths.base_dir().display());
            println!("Settings file:  {}", paths.settings_file().display());
            println!(
                "Ledger file:    {}",
                paths.ledger_file(&settings.ledger_file_name).display()
            );
            println!("Audit log:      {}", paths.audit_log().display());
            println!();
            println!("Settings:");
            println!("  Audit enabled:    {}", settings.audit_enabled);
            println!("  Default category: {}", settings.default_category);
            println!("  Currency symbol:  {}", settings.currency_symbol);
        }
        Commands::History(args) => handle_history_command(&audit, args)?,
        command => {
            let mut ledger = open_ledger(&paths, &settings, audit)?;
            match command {
                Commands::Deposit(args) => {
                    handle_entry_command(&mut ledger, &settings, EntryKind::Deposit, args)?
                }
                Commands::Payment(args) => {
                    handle_entry_command(&mut ledger, &settings, EntryKind::Payment, args)?
                }
                Commands::List(args) => handle_list_command(&ledger, &settings, args)?,
                Commands::Delete(args) => handle_delete_command(&mut ledger, args)?,
                Commands::Summary => handle_summary_command(&ledger, &settings),
                Commands::Report(args) => handle_report_command(&ledger, &settings, args)?,
                Commands::Config | Commands::History(_) => {}
            }
        }
    }

    Ok(())
}

fn open_ledger(paths: &LedgerPaths, settings: &Settings, audit: AuditLogger) -> Result<Ledger> {
    paths.ensure_directories()?;

    let file = paths.ledger_file(&settings.ledger_file_name);
    let mut ledger = Ledger::open(FileStore::new(file.clone()))
        .with_context(|| format!("Could not open ledger at {}", file.display()))?;
    if settings.audit_enabled {
        ledger = ledger.with_audit(audit);
    }

    let report = ledger.last_load();
    if report.skipped > 0 {
        eprintln!(
            "Warning: skipped {} unreadable line(s) in {}",
            report.skipped,
            file.display()
        );
    }

    Ok(ledger)
}

/// Install the tracing subscriber; RUST_LOG wins over `--log-level`.
pub fn init_logger(level: LevelFilter) {
    let filter = match std::env::var("RUST_LOG").ok() {
        Some(_) => EnvFilter::from_default_env(),
        None => EnvFilter::new(format!(
            "{}={},{}={}",
            env!("CARGO_CRATE_NAME"),
            level,
            env!("CARGO_BIN_NAME"),
            level
        )),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
