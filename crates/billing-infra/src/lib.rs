//! File exporters and loaders for the trip ledger

pub mod report;
pub mod trip_csv;
pub mod workbook;

pub use report::{ReportExporter, ReportLayout};
pub use trip_csv::load_trip_forms;
pub use workbook::{export_to_excel, WorkbookExporter};
