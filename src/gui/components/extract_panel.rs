// src/gui/components/extract_panel.rs
use eframe::egui;

use crate::{
    config::options::ScrapeMode,
    gui::{actions, app::App},
};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.heading("Extract flashcards");
    ui.label("Paste a StudyGo list URL, or choose a page saved from the browser.");
    ui.add_space(6.0);

    ui.horizontal(|ui| {
        ui.label("Source:");
        let field = egui::TextEdit::singleline(&mut app.state.gui.source_text)
            .hint_text("https://www.studygo.com/nl/learn/lists/…")
            .desired_width(420.0)
            .font(egui::TextStyle::Monospace);
        let resp = ui.add_enabled(!app.running, field);
        if resp.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
            actions::extract(app, ui.ctx());
        }
        if ui.add_enabled(!app.running, egui::Button::new("Browse…")).clicked() {
            actions::browse(app);
        }
    });

    let mode = &mut app.state.options.scrape.mode;
    let mut heuristic = *mode == ScrapeMode::Heuristic;
    if ui
        .checkbox(&mut heuristic, "Fallback heuristics (unrendered pages)")
        .on_hover_text("Skip waiting for the rendered list and guess pairs from the raw page")
        .changed()
    {
        *mode = if heuristic { ScrapeMode::Heuristic } else { ScrapeMode::Live };
        logf!("UI: scrape mode → {:?}", mode);
    }

    ui.add_space(6.0);
    let label = if app.running { "Extracting…" } else { "Extract" };
    if ui.add_enabled(!app.running, egui::Button::new(label)).clicked() {
        actions::extract(app, ui.ctx());
    }
}
