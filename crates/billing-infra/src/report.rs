//! PDF report export: a bordered fixed-column table of every trip

use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use billing_domain::export::{ExportKind, LedgerExporter};
use billing_domain::model::TripRecord;
use billing_types::{Error, Result, COLUMN_HEADERS};
use printpdf::path::PaintMode;
use printpdf::{
    BuiltinFont, Color, IndirectFontRef, Mm, PdfDocument, PdfLayerReference, Rect, Rgb,
};
use tracing::info;

const REPORT_TITLE: &str = "Truck Report";
const LAYER_NAME: &str = "Table";

/// Horizontal gap between a cell border and its text
const CELL_PADDING_MM: f32 = 1.0;
const PT_TO_MM: f32 = 25.4 / 72.0;

/// Page geometry of the report, all lengths in millimetres
#[derive(Debug, Clone, PartialEq)]
pub struct ReportLayout {
    pub page_width_mm: f32,
    pub page_height_mm: f32,
    /// Left and top margin
    pub margin_mm: f32,
    /// Rows may not extend into this band at the bottom of the page
    pub bottom_margin_mm: f32,
    pub line_height_mm: f32,
    pub font_size_pt: f32,
    pub column_widths_mm: [f32; 10],
}

impl Default for ReportLayout {
    fn default() -> Self {
        Self {
            page_width_mm: 210.0,
            page_height_mm: 297.0,
            margin_mm: 10.0,
            bottom_margin_mm: 20.0,
            line_height_mm: 8.0,
            font_size_pt: 10.0,
            column_widths_mm: [22.0, 16.0, 22.0, 22.0, 22.0, 22.0, 22.0, 22.0, 24.0, 24.0],
        }
    }
}

impl ReportLayout {
    /// Rows that fit between the top margin and the bottom margin
    pub fn rows_per_page(&self) -> usize {
        let usable = self.page_height_mm - self.bottom_margin_mm - self.margin_mm;
        ((usable / self.line_height_mm).floor() as usize).max(1)
    }

    /// Number of data rows on each page.
    ///
    /// The header takes one slot on the first page only. There is always
    /// at least one page, even for an empty ledger.
    pub fn paginate(&self, data_rows: usize) -> Vec<usize> {
        let per_page = self.rows_per_page();
        let first = per_page.saturating_sub(1).min(data_rows);

        let mut pages = vec![first];
        let mut remaining = data_rows - first;
        while remaining > 0 {
            let count = remaining.min(per_page);
            pages.push(count);
            remaining -= count;
        }
        pages
    }

    /// Text baseline for a row whose top edge is `top_mm` below the page top
    fn baseline_mm(&self, top_mm: f32) -> f32 {
        let from_top =
            top_mm + 0.5 * self.line_height_mm + 0.3 * self.font_size_pt * PT_TO_MM;
        self.page_height_mm - from_top
    }
}

/// Writes the ledger as a PDF table
#[derive(Debug, Clone, Default)]
pub struct ReportExporter {
    layout: ReportLayout,
}

impl ReportExporter {
    pub fn with_layout(layout: ReportLayout) -> Self {
        Self { layout }
    }
}

impl LedgerExporter for ReportExporter {
    fn kind(&self) -> ExportKind {
        ExportKind::Report
    }

    fn export(&self, records: &[TripRecord], output_path: &Path) -> Result<()> {
        write_report(records, output_path, &self.layout)
    }
}

fn write_report(records: &[TripRecord], output_path: &Path, layout: &ReportLayout) -> Result<()> {
    let width = Mm(layout.page_width_mm);
    let height = Mm(layout.page_height_mm);

    let (doc, first_page, first_layer) = PdfDocument::new(REPORT_TITLE, width, height, LAYER_NAME);
    let font = doc
        .add_builtin_font(BuiltinFont::Helvetica)
        .map_err(pdf_error)?;

    let pages = layout.paginate(records.len());
    let mut remaining = records.iter();

    for (page_idx, row_count) in pages.iter().enumerate() {
        let layer = if page_idx == 0 {
            doc.get_page(first_page).get_layer(first_layer)
        } else {
            let (page, layer) = doc.add_page(width, height, LAYER_NAME);
            doc.get_page(page).get_layer(layer)
        };
        layer.set_outline_color(black());
        layer.set_outline_thickness(0.5);

        let mut top = layout.margin_mm;
        if page_idx == 0 {
            let header = COLUMN_HEADERS.map(str::to_string);
            draw_row(&layer, &font, layout, top, &header, true);
            top += layout.line_height_mm;
        }

        for record in remaining.by_ref().take(*row_count) {
            draw_row(&layer, &font, layout, top, &record.display_cells(), false);
            top += layout.line_height_mm;
        }
    }

    let file = File::create(output_path)?;
    doc.save(&mut BufWriter::new(file)).map_err(pdf_error)?;

    info!(
        rows = records.len(),
        pages = pages.len(),
        path = %output_path.display(),
        "report written"
    );
    Ok(())
}

fn draw_row(
    layer: &PdfLayerReference,
    font: &IndirectFontRef,
    layout: &ReportLayout,
    top_mm: f32,
    cells: &[String; 10],
    shaded: bool,
) {
    let bottom = layout.page_height_mm - top_mm - layout.line_height_mm;
    let baseline = layout.baseline_mm(top_mm);
    let mut x = layout.margin_mm;

    for (text, width) in cells.iter().zip(layout.column_widths_mm) {
        let rect = Rect::new(Mm(x), Mm(bottom), Mm(x + width), Mm(bottom + layout.line_height_mm));
        if shaded {
            layer.set_fill_color(header_fill());
            layer.add_rect(rect.with_mode(PaintMode::FillStroke));
        } else {
            layer.add_rect(rect.with_mode(PaintMode::Stroke));
        }

        // Text is painted with the fill colour
        layer.set_fill_color(black());
        layer.use_text(text.as_str(), layout.font_size_pt, Mm(x + CELL_PADDING_MM), Mm(baseline), font);
        x += width;
    }
}

fn header_fill() -> Color {
    let gray = 220.0 / 255.0;
    Color::Rgb(Rgb::new(gray, gray, gray, None))
}

fn black() -> Color {
    Color::Rgb(Rgb::new(0.0, 0.0, 0.0, None))
}

fn pdf_error(e: impl std::fmt::Display) -> Error {
    Error::Pdf(e.to_string())
}
