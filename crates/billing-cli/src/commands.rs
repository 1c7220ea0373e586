//! Command handlers

use std::path::{Path, PathBuf};

use billing_app::config::Config;
use billing_app::session::{BillingSession, Command};
use billing_infra::load_trip_forms;
use billing_types::{OutputFormat, Result};
use tracing::info;

use crate::cli::{Cli, Commands, ExportTarget};
use crate::output::{output_exports, output_summary};

/// Execute CLI command
pub fn execute(cli: Cli) -> Result<()> {
    let mut config = Config::load()?;
    let output_format = cli.format.unwrap_or(config.output_format);

    match cli.command {
        Commands::Summary { input, fuel, misc } => {
            cmd_summary(config, &input, fuel, misc, output_format)
        }

        Commands::Export {
            input,
            kind,
            workbook,
            report,
        } => {
            // CLI paths win over config for this run only
            if let Some(path) = workbook {
                config.workbook_path = path;
            }
            if let Some(path) = report {
                config.report_path = path;
            }
            cmd_export(config, &input, kind, output_format)
        }

        Commands::Config {
            show,
            set_workbook,
            set_report,
            set_currency,
            set_output,
            reset,
        } => cmd_config(
            config,
            show,
            set_workbook,
            set_report,
            set_currency,
            set_output,
            reset,
        ),
    }
}

/// Fill a session from a CSV sheet, entry by entry
fn load_session(config: Config, input: &Path, fuel: String, misc: String) -> Result<BillingSession> {
    let trips = load_trip_forms(input)?;

    let mut session = BillingSession::new(config);
    session.fuel_cost = fuel;
    session.misc_cost = misc;
    let added = session.import(trips)?;

    info!(added, input = %input.display(), "trip sheet imported");
    Ok(session)
}

fn cmd_summary(
    config: Config,
    input: &Path,
    fuel: String,
    misc: String,
    output_format: OutputFormat,
) -> Result<()> {
    let session = load_session(config, input, fuel, misc)?;
    output_summary(output_format, &session)
}

fn cmd_export(
    config: Config,
    input: &Path,
    target: ExportTarget,
    output_format: OutputFormat,
) -> Result<()> {
    let mut session = load_session(config, input, String::new(), String::new())?;

    let commands: &[Command] = match target {
        ExportTarget::Workbook => &[Command::ExportWorkbook],
        ExportTarget::Report => &[Command::ExportReport],
        ExportTarget::All => &[Command::ExportWorkbook, Command::ExportReport],
    };

    let mut outcomes = Vec::with_capacity(commands.len());
    for command in commands {
        outcomes.push(session.dispatch(*command)?);
    }

    output_exports(output_format, &outcomes)
}

fn cmd_config(
    mut config: Config,
    show: bool,
    set_workbook: Option<PathBuf>,
    set_report: Option<PathBuf>,
    set_currency: Option<String>,
    set_output: Option<OutputFormat>,
    reset: bool,
) -> Result<()> {
    if reset {
        config = Config::default();
        config.save()?;
        println!("Configuration reset to defaults.");
        return Ok(());
    }

    let mut modified = false;

    if let Some(path) = set_workbook {
        config.workbook_path = path;
        modified = true;
    }
    if let Some(path) = set_report {
        config.report_path = path;
        modified = true;
    }
    if let Some(symbol) = set_currency {
        config.currency_symbol = symbol;
        modified = true;
    }
    if let Some(format) = set_output {
        config.output_format = format;
        modified = true;
    }

    if modified {
        config.save()?;
        println!("Configuration saved.");
    }

    if show || !modified {
        println!("{}", config);
    }

    Ok(())
}
