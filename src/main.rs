mod api;
mod cli_messages;
mod config;
mod consts;
mod environment;
mod events;
mod format;
mod logging;
mod report;
mod session;
mod sos;
mod ui;
mod workers;

use crate::api::{FetchOutcome, Paginator, SosApi};
use crate::config::{Config, get_config_path};
use crate::report::{Report, default_report_name, summary_table};
use crate::session::{build_source, run_tui_mode, setup_session};
use crate::workers::core::EventSender;
use chrono::Local;
use clap::{Parser, Subcommand};
use std::error::Error;
use std::path::{Path, PathBuf};
use std::sync::Arc;

#[derive(Parser)]
#[command(author, version, about = "District-wise dashboard for flood support SOS requests", long_about = None)]
/// Command-line arguments
struct Args {
    /// SOS feed endpoint. Overrides the config file and FLOOD_ENVIRONMENT.
    #[arg(long, global = true, value_name = "URL")]
    api_url: Option<String>,

    /// Read records from a local JSON dump instead of the feed.
    #[arg(long, global = true, value_name = "FILE")]
    input: Option<PathBuf>,

    /// Records requested per page.
    #[arg(long, global = true, value_name = "N")]
    limit: Option<u32>,

    /// Command to execute
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Open the live terminal dashboard
    Dashboard {
        /// Seconds between background refreshes.
        #[arg(long, value_name = "SECONDS")]
        refresh_secs: Option<u64>,

        /// Paint a dark background behind the dashboard.
        #[arg(long, default_value_t = false)]
        with_background: bool,
    },
    /// Print the district summary table
    Summary,
    /// Write a JSON report with district, emergency type and vulnerable group sections
    Report {
        /// Output file. Defaults to flood_support_report_<timestamp>.json.
        #[arg(long, short, value_name = "FILE")]
        output: Option<PathBuf>,
    },
    /// Inspect or change the saved configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Print the saved configuration
    Show,
    /// Save --api-url, --limit and --refresh-secs as defaults
    Set {
        #[arg(long, value_name = "SECONDS")]
        refresh_secs: Option<u64>,
    },
    /// Delete the configuration file
    Clear,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();
    let config_path = get_config_path()?;
    let config = match Config::load_or_default(&config_path) {
        Ok(config) => config,
        Err(e) => {
            print_cmd_warn!(
                "Ignoring unreadable config",
                "{}: {}",
                config_path.display(),
                e
            );
            Config::default()
        }
    };

    let environment = config.resolve_environment(args.api_url.as_deref());
    let paginator = Paginator::new(config.resolve_page_limit(args.limit));

    match args.command {
        Command::Dashboard {
            refresh_secs,
            with_background,
        } => {
            let source = build_source(args.input.as_deref(), environment)?;
            let session = setup_session(source, paginator, config.resolve_refresh_secs(refresh_secs));
            run_tui_mode(session, with_background).await
        }
        Command::Summary => {
            logging::init_console_logger();
            let source = build_source(args.input.as_deref(), environment)?;
            let outcome = fetch_or_report(&source, &paginator).await?;
            let snapshot = outcome.into_snapshot();
            print!(
                "{}",
                summary_table(
                    &snapshot.summaries,
                    snapshot.record_count,
                    &snapshot.fetched_at.format("%Y-%m-%d %H:%M:%S").to_string(),
                )
            );
            Ok(())
        }
        Command::Report { output } => {
            logging::init_console_logger();
            let source = build_source(args.input.as_deref(), environment)?;
            let outcome = fetch_or_report(&source, &paginator).await?;
            write_report(&outcome, source.source_label(), output)
        }
        Command::Config { action } => {
            logging::init_console_logger();
            run_config_action(action, config, &config_path, &args.api_url, args.limit)
        }
    }
}

/// Fetches every page, printing a console error when page 1 fails.
async fn fetch_or_report(
    source: &Arc<dyn SosApi>,
    paginator: &Paginator,
) -> Result<FetchOutcome, Box<dyn Error>> {
    print_cmd_info!(
        "Fetching SOS records",
        "from {}, {} per page",
        source.source_label(),
        paginator.limit()
    );
    let outcome = match paginator
        .fetch_all(source.as_ref(), &EventSender::console())
        .await
    {
        Ok(outcome) => outcome,
        Err(e) => {
            print_cmd_error!("Failed to fetch SOS records", &e.to_string());
            return Err(e.into());
        }
    };
    if !outcome.complete {
        print_cmd_warn!(
            "Incomplete data",
            "fetched {} of {} pages",
            outcome.pages_fetched,
            outcome.total_pages
        );
    }
    Ok(outcome)
}

fn write_report(
    outcome: &FetchOutcome,
    source_label: String,
    output: Option<PathBuf>,
) -> Result<(), Box<dyn Error>> {
    if outcome.records.is_empty() {
        print_cmd_warn!("No data available", "nothing to write");
        return Ok(());
    }

    let now = Local::now();
    let path = output.unwrap_or_else(|| PathBuf::from(default_report_name(now)));
    let report = Report::build(outcome, source_label, now);
    if let Err(e) = report.write_to(&path) {
        print_cmd_error!("Failed to write report", &e.to_string());
        return Err(e.into());
    }

    print_cmd_success!("Report generated", "{}", path.display());
    print_cmd_info!(
        "Sections",
        "District Summary, Emergency Types, Vulnerable Groups, Overall Stats, Critical Cases ({}), All Records ({})",
        report.critical_cases.len(),
        report.all_records.len()
    );
    Ok(())
}

fn run_config_action(
    action: ConfigAction,
    mut config: Config,
    config_path: &Path,
    api_url: &Option<String>,
    limit: Option<u32>,
) -> Result<(), Box<dyn Error>> {
    match action {
        ConfigAction::Show => {
            println!("{}", serde_json::to_string_pretty(&config)?);
            print_cmd_info!(
                "Resolved endpoint",
                "{:?}",
                config.resolve_environment(api_url.as_deref())
            );
            Ok(())
        }
        ConfigAction::Set { refresh_secs } => {
            if api_url.is_none() && limit.is_none() && refresh_secs.is_none() {
                print_cmd_warn!(
                    "Nothing to save",
                    "pass --api-url, --limit or --refresh-secs"
                );
                return Ok(());
            }
            if let Some(url) = api_url {
                config.api_url = Some(url.clone());
            }
            if let Some(limit) = limit {
                config.page_limit = Some(limit);
            }
            if let Some(secs) = refresh_secs {
                config.refresh_secs = Some(secs);
            }
            config
                .save(config_path)
                .map_err(|e| format!("Failed to save config: {}", e))?;
            print_cmd_success!("Configuration saved", "{}", config_path.display());
            Ok(())
        }
        ConfigAction::Clear => {
            Config::clear(config_path)?;
            print_cmd_success!("Configuration cleared", "{}", config_path.display());
            Ok(())
        }
    }
}
