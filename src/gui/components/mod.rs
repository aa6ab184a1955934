// src/gui/components/mod.rs
pub mod export_bar;
pub mod extract_panel;
pub mod review_table;
pub mod settings_panel;
pub mod tabs;

use eframe::egui;

use crate::gui::{app::App, progress::get_status};

pub fn status_line(ui: &mut egui::Ui, app: &App) {
    ui.horizontal(|ui| {
        if app.running {
            ui.spinner();
        }
        ui.label(format!("Status: {}", get_status(&app.status)));
    });
}
