//! Excel export functionality

use std::path::Path;

use billing_domain::export::{ExportKind, LedgerExporter};
use billing_domain::model::TripRecord;
use billing_types::{Error, Result, COLUMN_HEADERS};
use rust_xlsxwriter::{Format, FormatAlign, FormatBorder, Workbook, Worksheet, XlsxError};
use tracing::info;

/// Name of the single worksheet, the spreadsheet default
pub const SHEET_NAME: &str = "Sheet1";

/// One worksheet cell
#[derive(Debug, Clone, PartialEq)]
pub enum SheetCell {
    Text(String),
    Number(f64),
}

/// Writes the ledger to an `.xlsx` workbook
#[derive(Debug, Clone, Copy, Default)]
pub struct WorkbookExporter;

impl LedgerExporter for WorkbookExporter {
    fn kind(&self) -> ExportKind {
        ExportKind::Workbook
    }

    fn export(&self, records: &[TripRecord], output_path: &Path) -> Result<()> {
        export_to_excel(records, output_path)
    }
}

/// Export trips to an Excel file, overwriting it
pub fn export_to_excel(records: &[TripRecord], output_path: &Path) -> Result<()> {
    let mut workbook = Workbook::new();

    let sheet = workbook.add_worksheet();
    write_trips_sheet(sheet, records)?;

    workbook.save(output_path).map_err(excel_error)?;

    info!(rows = records.len(), path = %output_path.display(), "workbook written");
    Ok(())
}

/// Header row followed by one row per record
pub fn sheet_rows(records: &[TripRecord]) -> Vec<Vec<SheetCell>> {
    let header = COLUMN_HEADERS
        .iter()
        .map(|h| SheetCell::Text(h.to_string()))
        .collect();

    std::iter::once(header)
        .chain(records.iter().map(record_row))
        .collect()
}

fn record_row(record: &TripRecord) -> Vec<SheetCell> {
    vec![
        SheetCell::Text(record.date().to_string()),
        SheetCell::Text(record.trip_type().to_string()),
        SheetCell::Text(record.truck_no().to_string()),
        SheetCell::Text(record.driver().to_string()),
        SheetCell::Text(record.from().to_string()),
        SheetCell::Text(record.to().to_string()),
        SheetCell::Text(record.product().to_string()),
        SheetCell::Number(record.weight_kg()),
        SheetCell::Number(record.rate_per_tonne()),
        SheetCell::Number(record.total_cost()),
    ]
}

fn write_trips_sheet(sheet: &mut Worksheet, records: &[TripRecord]) -> Result<()> {
    sheet.set_name(SHEET_NAME).map_err(excel_error)?;

    let header_format = Format::new()
        .set_bold()
        .set_border(FormatBorder::Thin)
        .set_align(FormatAlign::Center);

    for (row_idx, cells) in sheet_rows(records).iter().enumerate() {
        let row = row_idx as u32;
        for (col_idx, cell) in cells.iter().enumerate() {
            let col = col_idx as u16;
            match cell {
                SheetCell::Text(text) if row == 0 => {
                    sheet
                        .write_string_with_format(row, col, text, &header_format)
                        .map_err(excel_error)?;
                }
                SheetCell::Text(text) => {
                    sheet.write_string(row, col, text).map_err(excel_error)?;
                }
                SheetCell::Number(value) => {
                    sheet.write_number(row, col, *value).map_err(excel_error)?;
                }
            }
        }
    }

    // Wider columns for the longer headers
    for col in 7..10u16 {
        sheet.set_column_width(col, 15).map_err(excel_error)?;
    }

    Ok(())
}

fn excel_error(e: XlsxError) -> Error {
    Error::Excel(e.to_string())
}
