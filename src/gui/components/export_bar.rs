// src/gui/components/export_bar.rs

use eframe::egui;

use crate::{
    csv::Delimiter,
    gui::{actions, app::App},
    review::render,
};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    let has_review = app.review.is_some();

    ui.horizontal(|ui| {
        // --- Orientation ---
        if ui
            .add_enabled(has_review, egui::Button::new("⇄ Swap"))
            .on_hover_text("Swap terms and definitions")
            .clicked()
        {
            if let Some(r) = app.review.as_mut() {
                r.swap();
                let lang = r.language();
                logf!("UI: swapped → {} / {}", lang.term_language, lang.definition_language);
            }
        }

        ui.separator();

        // --- Format ---
        let delim = &mut app.state.options.export.delimiter;
        let before = *delim;
        ui.label("Format:");
        egui::ComboBox::from_id_salt("export_delimiter")
            .selected_text(delim.label())
            .show_ui(ui, |ui| {
                for d in Delimiter::ALL {
                    ui.selectable_value(delim, d, d.label());
                }
            });
        if *delim != before {
            logf!("UI: Export delimiter → {:?}", delim);
        }

        // --- Actions ---
        if ui.add_enabled(has_review, egui::Button::new("Copy")).clicked() {
            actions::copy(app, ui.ctx());
        }
        if ui.add_enabled(has_review, egui::Button::new("Download")).clicked() {
            actions::export(app);
        }

        ui.separator();
        let n = app.review.as_ref().map_or(0, |r| r.len());
        ui.label(render::count_label(n));
    });
}
