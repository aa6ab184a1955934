// src/gui/components/review_table.rs
//
// Editable flashcard table. Cells are plain labels (never markup); clicking
// one opens a single-line editor. Enter or clicking away commits, Escape reverts.
// Row changes are collected during the frame and applied after the table is drawn.

use eframe::egui::{self, Align, CursorIcon, Layout, RichText, Sense};
use egui_extras::{Column, TableBuilder};

use crate::{
    gui::{app::App, progress::set_status},
    review::{render, Field, ReviewState},
};

enum EndEdit {
    Commit,
    Cancel,
}

enum RowAction {
    Begin(usize, Field),
    Delete(usize),
}

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    let Some(review) = app.review.as_mut() else {
        ui.add_space(12.0);
        ui.label("No flashcards yet. Extract a list first.");
        return;
    };
    if review.is_empty() {
        ui.label("All flashcards were deleted.");
        return;
    }

    let lang = review.language();
    if lang.is_swapped {
        ui.weak("Swapped: terms and definitions exchanged");
    }

    let (th_term, th_def) = render::headers(review);
    let row_h = ui.text_style_height(&egui::TextStyle::Body) + 10.0;

    let mut end: Option<EndEdit> = None;
    let mut action: Option<RowAction> = None;

    TableBuilder::new(ui)
        .striped(true)
        .cell_layout(Layout::left_to_right(Align::Center))
        .column(Column::exact(36.0))
        .column(Column::initial(280.0).resizable(true).clip(true).at_least(80.0))
        .column(Column::remainder().clip(true).at_least(80.0))
        .column(Column::exact(28.0))
        .header(24.0, |mut header| {
            header.col(|ui| {
                ui.strong("#");
            });
            header.col(|ui| {
                ui.add(egui::Label::new(RichText::new(&th_term).strong()).selectable(false));
            });
            header.col(|ui| {
                ui.add(egui::Label::new(RichText::new(&th_def).strong()).selectable(false));
            });
            header.col(|_ui| {});
        })
        .body(|body| {
            body.rows(row_h, review.len(), |mut row| {
                let i = row.index();
                row.col(|ui| {
                    ui.weak((i + 1).to_string());
                });
                for field in [Field::Term, Field::Definition] {
                    row.col(|ui| cell(ui, review, i, field, &mut end, &mut action));
                }
                row.col(|ui| {
                    if ui.small_button("🗑").on_hover_text("Delete").clicked() {
                        action = Some(RowAction::Delete(i));
                    }
                });
            });
        });

    // Close the old session before opening or deleting anything.
    match end {
        Some(EndEdit::Commit) => {
            review.commit_edit();
        }
        Some(EndEdit::Cancel) => review.cancel_edit(),
        None => {}
    }
    match action {
        Some(RowAction::Begin(row, field)) => {
            review.begin_edit(row, field);
        }
        Some(RowAction::Delete(row)) => {
            if let Some(p) = review.delete(row) {
                logf!("UI: deleted {:?}", p.term);
                set_status(&app.status, format!("Deleted \"{}\" ({} left)", p.term, review.len()));
            }
        }
        None => {}
    }
}

fn cell(
    ui: &mut egui::Ui,
    review: &mut ReviewState,
    row: usize,
    field: Field,
    end: &mut Option<EndEdit>,
    action: &mut Option<RowAction>,
) {
    if review.editing() == Some((row, field)) {
        let Some(buf) = review.edit_buffer_mut() else { return };
        let resp = ui.add(egui::TextEdit::singleline(buf).desired_width(f32::INFINITY));
        if resp.lost_focus() {
            *end = Some(if ui.input(|i| i.key_pressed(egui::Key::Escape)) {
                EndEdit::Cancel
            } else {
                EndEdit::Commit
            });
        } else if !resp.has_focus() {
            resp.request_focus();
        }
        return;
    }

    let Some(pair) = review.pairs().get(row) else { return };
    let text = match field {
        Field::Term => pair.term.as_str(),
        Field::Definition => pair.definition.as_str(),
    };
    let resp = ui
        .add(egui::Label::new(text).truncate().sense(Sense::click()))
        .on_hover_cursor(CursorIcon::Text);
    if resp.clicked() {
        *action = Some(RowAction::Begin(row, field));
    }
}
