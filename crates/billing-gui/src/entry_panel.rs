//! Trip entry form and action buttons

use billing_app::constants::{rate_choices, weight_choices};
use billing_app::session::{BillingSession, Command};
use billing_types::TripType;
use eframe::egui::{self, Color32, RichText, Ui};

const FIELD_WIDTH: f32 = 220.0;

/// Entry form with preset lists for weight and rate
pub struct EntryPanel {
    weight_choices: Vec<String>,
    rate_choices: Vec<String>,
}

impl Default for EntryPanel {
    fn default() -> Self {
        Self::new()
    }
}

impl EntryPanel {
    pub fn new() -> Self {
        Self {
            weight_choices: weight_choices(),
            rate_choices: rate_choices(),
        }
    }

    /// Render the form. Returns the action button pressed this frame, if any.
    pub fn ui(&mut self, ui: &mut Ui, session: &mut BillingSession) -> Option<Command> {
        ui.vertical_centered(|ui| {
            egui::Grid::new("trip_form")
                .num_columns(2)
                .spacing([12.0, 6.0])
                .show(ui, |ui| {
                    let form = &mut session.form;

                    let text_fields: [(&str, &mut String); 6] = [
                        ("Date (DD-MM-YYYY):", &mut form.date),
                        ("Truck No:", &mut form.truck_no),
                        ("Driver Name:", &mut form.driver),
                        ("From:", &mut form.from),
                        ("To:", &mut form.to),
                        ("Product Name:", &mut form.product),
                    ];
                    for (label, value) in text_fields {
                        ui.label(label);
                        ui.add(egui::TextEdit::singleline(value).desired_width(FIELD_WIDTH));
                        ui.end_row();
                    }

                    ui.label("Weight (Kg):");
                    preset_input(ui, "weight_presets", &mut form.weight_kg, &self.weight_choices);
                    ui.end_row();

                    ui.label("Rate Per Tonne:");
                    preset_input(ui, "rate_presets", &mut form.rate_per_tonne, &self.rate_choices);
                    ui.end_row();

                    ui.label("Trip Type:");
                    egui::ComboBox::from_id_salt("trip_type")
                        .selected_text(form.trip_type.label())
                        .width(FIELD_WIDTH)
                        .show_ui(ui, |ui| {
                            for trip_type in TripType::ALL {
                                ui.selectable_value(&mut form.trip_type, trip_type, trip_type.label());
                            }
                        });
                    ui.end_row();

                    ui.label("Fuel Cost:");
                    ui.add(egui::TextEdit::singleline(&mut session.fuel_cost).desired_width(FIELD_WIDTH));
                    ui.end_row();

                    ui.label("Miscellaneous:");
                    ui.add(egui::TextEdit::singleline(&mut session.misc_cost).desired_width(FIELD_WIDTH));
                    ui.end_row();
                });
        });

        ui.add_space(10.0);

        let mut pressed = None;
        ui.vertical_centered(|ui| {
            ui.horizontal(|ui| {
                let buttons = [
                    (Command::AddEntry, "➕", Color32::from_rgb(0x2e, 0x7d, 0x32)),
                    (Command::ExportWorkbook, "💾", Color32::from_rgb(0x15, 0x65, 0xc0)),
                    (Command::ExportReport, "📄", Color32::from_rgb(0xef, 0x6c, 0x00)),
                ];
                for (command, icon, fill) in buttons {
                    let text = RichText::new(format!("{} {}", icon, command.label())).color(Color32::WHITE);
                    let button = egui::Button::new(text).fill(fill).min_size(egui::vec2(140.0, 28.0));
                    if ui.add(button).clicked() {
                        pressed = Some(command);
                    }
                    ui.add_space(10.0);
                }
            });
        });

        pressed
    }
}

/// Free-text input with a dropdown of preset values
fn preset_input(ui: &mut Ui, id: &str, value: &mut String, presets: &[String]) {
    ui.horizontal(|ui| {
        ui.add(egui::TextEdit::singleline(value).desired_width(FIELD_WIDTH - 30.0));
        egui::ComboBox::from_id_salt(id)
            .selected_text("")
            .width(20.0)
            .show_ui(ui, |ui| {
                for preset in presets {
                    if ui.selectable_label(value == preset, preset.as_str()).clicked() {
                        *value = preset.clone();
                    }
                }
            });
    });
}
