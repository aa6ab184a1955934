// src/gui/components/settings_panel.rs
use eframe::egui;

use crate::{
    config::settings::Theme,
    csv::Delimiter,
    gui::{actions, app::App},
};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.heading("Settings");
    ui.add_space(6.0);

    let draft = &mut app.settings_draft;
    egui::Grid::new("settings_grid")
        .num_columns(2)
        .spacing([12.0, 8.0])
        .show(ui, |ui| {
            ui.label("Default format:");
            egui::ComboBox::from_id_salt("settings_delimiter")
                .selected_text(draft.default_copy_format.label())
                .show_ui(ui, |ui| {
                    for d in Delimiter::ALL {
                        ui.selectable_value(&mut draft.default_copy_format, d, d.label());
                    }
                });
            ui.end_row();

            ui.label("Theme:");
            ui.horizontal(|ui| {
                ui.radio_value(&mut draft.theme, Theme::Light, "Light");
                ui.radio_value(&mut draft.theme, Theme::Dark, "Dark");
            });
            ui.end_row();
        });

    ui.add_space(6.0);
    let dirty = app.settings_draft != app.state.settings;
    if ui.add_enabled(dirty, egui::Button::new("Save")).clicked() {
        actions::save_settings(app, ui.ctx());
    }
    ui.weak(format!("Stored in {}", app.settings_store.path().display()));
}
