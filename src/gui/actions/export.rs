// src/gui/actions/export.rs
use crate::{file, gui::app::App};

/// Download: save dialog seeded with `<stem>.<ext>`, extension forced by the delimiter.
pub fn export(app: &mut App) {
    let Some(review) = app.review.as_mut() else {
        app.status("Nothing to export");
        return;
    };
    review.commit_edit();
    if review.is_empty() {
        logd!("Export: Clicked, but there's nothing to export");
        app.status("No flashcards to export.");
        return;
    }

    let export = &app.state.options.export;
    let delim = export.delimiter;
    let mut dialog = rfd::FileDialog::new()
        .add_filter(delim.label(), &[delim.ext()])
        .set_file_name(export.file_name());
    if export.out_dir().is_dir() {
        dialog = dialog.set_directory(export.out_dir());
    }

    let Some(chosen) = dialog.save_file() else {
        logd!("Export: cancelled");
        app.status("Download cancelled");
        return;
    };
    let path = chosen.with_extension(delim.ext());

    let msg = match app.review.as_ref().map(|r| file::write_export_to(&path, r.pairs(), delim)) {
        Some(Ok(p)) => {
            app.state.options.export.set_path(&p.to_string_lossy());
            format!("Saved {}", p.display())
        }
        Some(Err(e)) => {
            loge!("Export: Error: {}", e);
            format!("Export error: {e}")
        }
        None => s!("Nothing to export"),
    };
    app.status(msg);
}
