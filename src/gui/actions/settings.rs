// src/gui/actions/settings.rs
use eframe::egui;

use crate::gui::app::{apply_theme, App};

pub fn save_settings(app: &mut App, ctx: &egui::Context) {
    let draft = app.settings_draft;
    match app.settings_store.save(&draft) {
        Ok(()) => {
            if draft.theme != app.state.settings.theme {
                apply_theme(ctx, draft.theme);
            }
            app.state.settings = draft;
            // New default applies to the review tab right away.
            app.state.options.export.delimiter = draft.default_copy_format;
            app.status("Settings saved.");
        }
        Err(e) => {
            loge!("Settings: save failed: {}", e);
            app.status(format!("Error saving settings: {e}"));
        }
    }
}
