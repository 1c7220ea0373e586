//! Trip table and summary totals

use billing_app::session::BillingSession;
use billing_domain::model::Ledger;
use billing_types::COLUMN_HEADERS;
use eframe::egui::{self, Color32, RichText, Ui};
use egui_extras::{Column, TableBuilder};

const ROW_HEIGHT: f32 = 20.0;

/// Every ledger record, one row each, in submission order
pub fn table_ui(ui: &mut Ui, ledger: &Ledger) {
    if ledger.is_empty() {
        ui.vertical_centered(|ui| {
            ui.label(RichText::new("No trips entered yet").color(Color32::GRAY));
        });
        return;
    }

    TableBuilder::new(ui)
        .striped(true)
        .resizable(true)
        .cell_layout(egui::Layout::centered_and_justified(egui::Direction::LeftToRight))
        .columns(Column::initial(90.0).at_least(50.0), COLUMN_HEADERS.len())
        .max_scroll_height(320.0)
        .header(ROW_HEIGHT + 4.0, |mut header| {
            for title in COLUMN_HEADERS {
                header.col(|ui| {
                    ui.strong(title);
                });
            }
        })
        .body(|mut body| {
            for record in ledger.snapshot() {
                body.row(ROW_HEIGHT, |mut row| {
                    for cell in record.display_cells() {
                        row.col(|ui| {
                            ui.label(cell);
                        });
                    }
                });
            }
        });
}

/// Go/Return/total/profit as of the last entry
pub fn summary_ui(ui: &mut Ui, session: &BillingSession) {
    ui.vertical_centered(|ui| {
        egui::Grid::new("summary")
            .num_columns(2)
            .spacing([20.0, 6.0])
            .show(ui, |ui| {
                for (label, value) in session.summary_lines() {
                    ui.label(RichText::new(label).strong());
                    ui.label(value);
                    ui.end_row();
                }
            });
    });
}
