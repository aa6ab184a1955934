// src/gui/actions/extract.rs
use std::{path::Path, sync::mpsc, thread};

use eframe::egui;

use crate::{
    error::ScrapeError,
    gui::{
        app::{App, WorkerResult},
        progress::GuiProgress,
    },
    scrape,
    transfer,
};

/// Start one extraction on a worker thread. No-op while one is running.
pub fn extract(app: &mut App, ctx: &egui::Context) {
    if app.running {
        logd!("Extract: Clicked while running, ignoring");
        return;
    }
    let text = app.state.gui.source_text.trim().to_string();
    if text.is_empty() {
        app.status("Enter a list URL or choose a saved page first");
        return;
    }

    let opts = app.state.options.scrape.clone();
    let mut source = match scrape::open_source(&text, opts.mode) {
        Ok(s) => s,
        Err(e) => {
            loge!("Extract: {}", e);
            app.status(format!("Error: {e}"));
            return;
        }
    };

    logf!("Extract: Begin source={} mode={:?}", source.describe(), opts.mode);
    app.status("Extracting…");

    let status = app.status.clone();
    let ctx = ctx.clone();
    let (tx, rx) = mpsc::channel::<WorkerResult>();

    // scraper's Html is not Send, so parsing stays inside the worker.
    thread::spawn(move || {
        let mut prog = GuiProgress::new(status);
        let res = scrape::run(source.as_mut(), &opts, Some(&mut prog));
        let _ = tx.send(res);
        ctx.request_repaint();
    });

    app.pending = Some(rx);
    app.running = true;
}

/// Worker result → holding area → review tab. On any error the previous
/// review stays as it was.
pub fn finish_extract(app: &mut App, res: WorkerResult) {
    let result = match res {
        Ok(r) => r,
        Err(e @ ScrapeError::NothingFound) => {
            logf!("Extract: nothing found");
            app.status(e.to_string());
            return;
        }
        Err(e) => {
            loge!("Extract: Error: {}", e);
            app.status(format!("Error: {e}"));
            return;
        }
    };

    let mut opened = false;
    let mut surface = || opened = true;
    if let Err(e) = transfer::hand_off(&mut app.mailbox, &result, &mut surface) {
        app.status(format!("Error: {e}"));
        return;
    }

    if opened && app.open_review() {
        app.status(format!("Extracted {} flashcards", result.len()));
    }
}

/// Pick a saved page from disk into the source field.
pub fn browse(app: &mut App) {
    let mut dialog = rfd::FileDialog::new().add_filter("Web page", &["html", "htm"]);
    if !app.state.gui.last_browse_dir.is_empty() {
        dialog = dialog.set_directory(&app.state.gui.last_browse_dir);
    }
    let Some(path) = dialog.pick_file() else {
        logd!("Browse: cancelled");
        return;
    };

    if let Some(dir) = path.parent().map(Path::to_string_lossy) {
        app.state.gui.last_browse_dir = dir.into_owned();
    }
    app.state.gui.source_text = path.to_string_lossy().into_owned();
    logf!("Browse: {}", app.state.gui.source_text);
}
