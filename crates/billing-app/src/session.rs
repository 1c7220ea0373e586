//! Billing session: the state behind one run of the entry form
//!
//! Owns the form, the expense inputs, the ledger and the last computed
//! summary. Front ends only read from it and send it `Command`s.

use std::path::{Path, PathBuf};

use billing_domain::export::{ExportKind, LedgerExporter};
use billing_domain::model::{Ledger, TripForm, TripRecord};
use billing_domain::service::{parse_expense, summarize};
use billing_infra::trip_csv::ImportedTrip;
use billing_infra::{ReportExporter, WorkbookExporter};
use billing_types::{format_currency, Error, Result, Summary};
use tracing::{info, warn};

use crate::config::Config;

/// Labels of the summary panel, in display order
pub const SUMMARY_LABELS: [&str; 4] = [
    "Go Trip Total:",
    "Return Trip Total:",
    "Total Cost:",
    "Total Profit:",
];

/// User actions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    AddEntry,
    ExportWorkbook,
    ExportReport,
}

impl Command {
    pub fn label(&self) -> &'static str {
        match self {
            Command::AddEntry => "Add Entry",
            Command::ExportWorkbook => "Save to Excel",
            Command::ExportReport => "Export to PDF",
        }
    }
}

/// Result of a successful command
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    EntryAdded { total_cost: f64 },
    Exported { kind: ExportKind, path: PathBuf },
}

impl Outcome {
    /// Message for the user, if the action warrants one
    pub fn notice(&self) -> Option<String> {
        match self {
            Outcome::EntryAdded { .. } => None,
            Outcome::Exported {
                kind: ExportKind::Workbook,
                path,
            } => Some(format!("Data saved to {}", path.display())),
            Outcome::Exported {
                kind: ExportKind::Report,
                path,
            } => Some(format!("Clean table format exported to {}", path.display())),
        }
    }
}

/// Application state for one operator session
#[derive(Debug, Clone, Default)]
pub struct BillingSession {
    config: Config,
    /// Current values of the entry form
    pub form: TripForm,
    /// Fuel expense input, lenient
    pub fuel_cost: String,
    /// Miscellaneous expense input, lenient
    pub misc_cost: String,
    ledger: Ledger,
    /// Totals as of the last successful entry
    summary: Option<Summary>,
}

impl BillingSession {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            ..Default::default()
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    pub fn summary(&self) -> Option<Summary> {
        self.summary
    }

    /// Run one user action
    pub fn dispatch(&mut self, command: Command) -> Result<Outcome> {
        match command {
            Command::AddEntry => {
                let total_cost = self.add_entry()?;
                Ok(Outcome::EntryAdded { total_cost })
            }
            Command::ExportWorkbook => self.export(ExportKind::Workbook),
            Command::ExportReport => self.export(ExportKind::Report),
        }
    }

    /// Submit the form.
    ///
    /// On success the record is appended, the form cleared and the summary
    /// recomputed. On failure nothing changes, the form included.
    pub fn add_entry(&mut self) -> Result<f64> {
        let record = match self.form.to_record() {
            Ok(record) => record,
            Err(e) => {
                warn!(error = %e, "trip entry rejected");
                return Err(e);
            }
        };

        let total_cost = self.append_record(record);
        self.form.clear();

        info!(total_cost, entries = self.ledger.len(), "trip entry added");
        Ok(total_cost)
    }

    /// Submit imported rows one by one, stopping at the first invalid one.
    ///
    /// Rows are validated on their own; the on-screen form is not touched.
    pub fn import(&mut self, trips: Vec<ImportedTrip>) -> Result<usize> {
        let mut added = 0;
        for trip in trips {
            let record = trip.form.to_record().map_err(|e| {
                warn!(line = trip.line, error = %e, "imported trip rejected");
                Error::Import {
                    line: trip.line,
                    reason: e.to_string(),
                }
            })?;
            self.append_record(record);
            added += 1;
        }
        info!(added, entries = self.ledger.len(), "trips imported");
        Ok(added)
    }

    fn append_record(&mut self, record: TripRecord) -> f64 {
        let total_cost = record.total_cost();
        self.ledger.append(record);
        self.recompute_summary();
        total_cost
    }

    /// Write the ledger to the configured path for `kind`
    pub fn export(&self, kind: ExportKind) -> Result<Outcome> {
        let path = match kind {
            ExportKind::Workbook => self.config.workbook_path.clone(),
            ExportKind::Report => self.config.report_path.clone(),
        };
        self.export_to(kind, &path)?;
        Ok(Outcome::Exported { kind, path })
    }

    /// Write the ledger for `kind` to an explicit path
    pub fn export_to(&self, kind: ExportKind, path: &Path) -> Result<()> {
        let exporter: Box<dyn LedgerExporter> = match kind {
            ExportKind::Workbook => Box::new(WorkbookExporter),
            ExportKind::Report => Box::new(ReportExporter::default()),
        };
        exporter.export(self.ledger.snapshot(), path)
    }

    /// Summary text for each of `SUMMARY_LABELS`; blank before the first entry
    pub fn summary_lines(&self) -> [(&'static str, String); 4] {
        let values = match self.summary {
            Some(s) => [s.go_total, s.return_total, s.grand_total, s.profit]
                .map(|v| format_currency(&self.config.currency_symbol, v)),
            None => Default::default(),
        };

        let [go, ret, total, profit] = values;
        [
            (SUMMARY_LABELS[0], go),
            (SUMMARY_LABELS[1], ret),
            (SUMMARY_LABELS[2], total),
            (SUMMARY_LABELS[3], profit),
        ]
    }

    fn recompute_summary(&mut self) {
        let fuel = parse_expense(&self.fuel_cost);
        let misc = parse_expense(&self.misc_cost);
        self.summary = Some(summarize(self.ledger.snapshot(), fuel, misc));
    }
}
