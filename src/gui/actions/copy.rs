// src/gui/actions/copy.rs
use eframe::egui;

use crate::gui::{app::App, progress::set_status};

pub fn copy(app: &mut App, ui_ctx: &egui::Context) {
    let Some(review) = app.review.as_mut() else {
        app.status("Nothing to copy");
        logd!("Copy: Clicked, but there's no review data");
        return;
    };
    review.commit_edit();

    if review.is_empty() {
        set_status(&app.status, "No flashcards to copy.");
        logd!("Copy: Clicked, but every row was deleted");
        return;
    }

    let delim = app.state.options.export.delimiter;
    let txt = review.export_string(delim);
    logf!("Copy: rows={} delimiter={:?}", review.len(), delim);

    ui_ctx.copy_text(txt);
    set_status(&app.status, format!("Copied {} flashcards to clipboard", review.len()));
}
