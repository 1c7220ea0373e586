//! CLI definition using clap

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

pub use billing_types::OutputFormat;

/// Which exporters to run
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum ExportTarget {
    Workbook,
    Report,
    #[default]
    All,
}

#[derive(Parser)]
#[command(name = "truck-billing")]
#[command(author = "yuuji")]
#[command(version)]
#[command(about = "Truck transport trip billing: totals, profit, Excel and PDF export")]
#[command(long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format (json, table). Uses config value if not specified.
    #[arg(long, short = 'f', global = true)]
    pub format: Option<OutputFormat>,

    /// Verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show trips and totals from a CSV trip sheet
    Summary {
        /// Path to CSV file with one trip per row
        input: PathBuf,

        /// Fuel cost (non-numeric counts as 0)
        #[arg(long, default_value = "")]
        fuel: String,

        /// Miscellaneous cost (non-numeric counts as 0)
        #[arg(long, default_value = "")]
        misc: String,
    },

    /// Export a CSV trip sheet to Excel and/or PDF
    Export {
        /// Path to CSV file with one trip per row
        input: PathBuf,

        /// Which files to write
        #[arg(long, short = 'k', value_enum, default_value_t = ExportTarget::All)]
        kind: ExportTarget,

        /// Excel output path. Uses config value if not specified.
        #[arg(long)]
        workbook: Option<PathBuf>,

        /// PDF output path. Uses config value if not specified.
        #[arg(long)]
        report: Option<PathBuf>,
    },

    /// Manage configuration
    Config {
        /// Show current configuration
        #[arg(long)]
        show: bool,

        /// Set default Excel output path
        #[arg(long)]
        set_workbook: Option<PathBuf>,

        /// Set default PDF output path
        #[arg(long)]
        set_report: Option<PathBuf>,

        /// Set currency symbol used in totals
        #[arg(long)]
        set_currency: Option<String>,

        /// Set default output format
        #[arg(long)]
        set_output: Option<OutputFormat>,

        /// Reset to defaults
        #[arg(long)]
        reset: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_definition_is_valid() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_export_defaults() {
        let cli = Cli::try_parse_from(["truck-billing", "export", "trips.csv"]).unwrap();
        match cli.command {
            Commands::Export { input, kind, workbook, report } => {
                assert_eq!(input, PathBuf::from("trips.csv"));
                assert_eq!(kind, ExportTarget::All);
                assert!(workbook.is_none());
                assert!(report.is_none());
            }
            _ => panic!("expected export command"),
        }
    }

    #[test]
    fn test_parse_summary_with_expenses() {
        let cli = Cli::try_parse_from([
            "truck-billing", "summary", "trips.csv", "--fuel", "500", "--misc", "x", "-f", "json",
        ])
        .unwrap();
        assert_eq!(cli.format, Some(OutputFormat::Json));
        match cli.command {
            Commands::Summary { fuel, misc, .. } => {
                assert_eq!(fuel, "500");
                assert_eq!(misc, "x");
            }
            _ => panic!("expected summary command"),
        }
    }
}
