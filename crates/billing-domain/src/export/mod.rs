//! Exporter trait definitions

use std::path::Path;

use billing_types::Result;

use crate::model::TripRecord;

/// Kind of file an exporter produces
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportKind {
    /// Spreadsheet with one row per trip
    Workbook,
    /// Fixed-column PDF table
    Report,
}

impl ExportKind {
    pub fn label(&self) -> &'static str {
        match self {
            ExportKind::Workbook => "workbook",
            ExportKind::Report => "report",
        }
    }
}

impl std::fmt::Display for ExportKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Writes a full ledger snapshot to a file, replacing whatever is there
pub trait LedgerExporter {
    fn kind(&self) -> ExportKind;

    fn export(&self, records: &[TripRecord], output_path: &Path) -> Result<()>;
}
