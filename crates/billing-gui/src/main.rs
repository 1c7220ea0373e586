//! GUI entry point for Truck Billing

mod app;
mod entry_panel;
mod ledger_panel;

use app::BillingApp;
use eframe::egui;
use tracing_subscriber::EnvFilter;

fn main() -> eframe::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1050.0, 850.0])
            .with_min_inner_size([800.0, 600.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Truck Billing App",
        options,
        Box::new(|cc| Ok(Box::new(BillingApp::new(cc)))),
    )
}
