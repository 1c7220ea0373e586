//! Main application window

use billing_app::config::Config;
use billing_app::session::{BillingSession, Command};
use billing_types::Error;
use eframe::egui::{self, RichText};
use tracing::{error, warn};

use crate::entry_panel::EntryPanel;
use crate::ledger_panel;

/// Main application state
pub struct BillingApp {
    /// Form, expenses, ledger and totals
    session: BillingSession,
    /// Entry form widget state
    entry_panel: EntryPanel,
}

impl BillingApp {
    /// Create a new application instance
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        let mut style = (*cc.egui_ctx.style()).clone();
        style.interaction.tooltip_delay = 0.5;
        style.animation_time = 0.1;
        cc.egui_ctx.set_style(style);

        let config = Config::load().unwrap_or_else(|e| {
            warn!(error = %e, "failed to load config, using defaults");
            Config::default()
        });

        Self {
            session: BillingSession::new(config),
            entry_panel: EntryPanel::default(),
        }
    }

    /// Run a button action and report the result in a dialog
    fn handle_command(&mut self, command: Command) {
        match self.session.dispatch(command) {
            Ok(outcome) => {
                if let Some(notice) = outcome.notice() {
                    show_dialog(rfd::MessageLevel::Info, command.label(), &notice);
                }
            }
            Err(e @ Error::InvalidNumber { .. }) => {
                show_dialog(
                    rfd::MessageLevel::Error,
                    "Input Error",
                    &format!("Enter Weight and Rate as numbers.\n\n{}", e),
                );
            }
            Err(e) => {
                error!(command = command.label(), error = %e, "command failed");
                show_dialog(rfd::MessageLevel::Error, "Export Error", &e.to_string());
            }
        }
    }
}

/// Blocking native message box
fn show_dialog(level: rfd::MessageLevel, title: &str, description: &str) {
    rfd::MessageDialog::new()
        .set_level(level)
        .set_title(title)
        .set_description(description)
        .set_buttons(rfd::MessageButtons::Ok)
        .show();
}

impl eframe::App for BillingApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::top("title_bar").show(ctx, |ui| {
            ui.add_space(8.0);
            ui.vertical_centered(|ui| {
                ui.label(RichText::new("🚛 Truck Transport Billing System").heading().strong());
            });
            ui.add_space(8.0);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            let command = self.entry_panel.ui(ui, &mut self.session);

            ui.add_space(10.0);
            ui.separator();
            ui.add_space(10.0);

            ledger_panel::table_ui(ui, self.session.ledger());

            ui.add_space(10.0);
            ui.separator();
            ui.add_space(10.0);

            ledger_panel::summary_ui(ui, &self.session);

            if let Some(command) = command {
                self.handle_command(command);
            }
        });
    }
}
