// src/gui/components/tabs.rs
//
// Top tabs. Leaving the review tab closes any open edit (committed).
use eframe::egui;

use crate::{config::state::Tab, gui::app::App};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.horizontal_wrapped(|ui| {
        ui.spacing_mut().item_spacing.x = 8.0;
        let cur = app.state.gui.current_tab;

        for tab in Tab::ALL {
            let selected = tab == cur;
            let title = match (tab, app.review.as_ref()) {
                (Tab::Review, Some(r)) => format!("{} ({})", tab.title(), r.len()),
                _ => s!(tab.title()),
            };

            if ui.selectable_label(selected, title).clicked() && !selected {
                logf!("UI: Tab switch {:?} → {:?}", cur, tab);
                if let Some(r) = app.review.as_mut() {
                    r.commit_edit();
                }
                if tab == Tab::Settings {
                    // Page shows what is on disk, not an abandoned draft.
                    app.settings_draft = app.settings_store.load_or_default();
                }
                app.state.gui.current_tab = tab;
            }
        }
    });
}
