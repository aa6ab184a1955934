// src/gui/app.rs
use std::{
    error::Error,
    sync::{
        mpsc::{Receiver, TryRecvError},
        Arc, Mutex,
    },
    time::Duration,
};

use eframe::egui;

use crate::{
    config::{
        settings::{Settings, SettingsStore, Theme},
        state::{AppState, Tab},
    },
    error::ScrapeError,
    model::ExtractionResult,
    review::ReviewState,
    transfer::{FileMailbox, Mailbox},
};

use super::{actions, components, progress::set_status};

pub type WorkerResult = Result<ExtractionResult, ScrapeError>;

pub fn run(options: eframe::NativeOptions) -> Result<(), Box<dyn Error>> {
    let settings_store = SettingsStore::default();
    let settings = settings_store.load_or_default();

    eframe::run_native(
        "StudyGo Flashcard Scraper",
        options,
        Box::new(move |cc| {
            apply_theme(&cc.egui_ctx, settings.theme);
            Ok(Box::new(App::new(AppState::from_settings(settings), settings_store)))
        }),
    )?;
    Ok(())
}

pub fn apply_theme(ctx: &egui::Context, theme: Theme) {
    ctx.set_theme(match theme {
        Theme::Light => egui::Theme::Light,
        Theme::Dark => egui::Theme::Dark,
    });
}

pub struct App {
    // single source of truth (UI thread only)
    pub state: AppState,
    pub settings_store: SettingsStore,
    /// Settings page edits this copy; Save persists it.
    pub settings_draft: Settings,

    pub mailbox: FileMailbox,
    pub review: Option<ReviewState>,

    // status/progress (worker writes here)
    pub status: Arc<Mutex<String>>,
    pub running: bool,
    pub pending: Option<Receiver<WorkerResult>>,
}

impl App {
    pub fn new(state: AppState, settings_store: SettingsStore) -> Self {
        let settings_draft = state.settings;
        let mut app = Self {
            state,
            settings_store,
            settings_draft,
            mailbox: FileMailbox::default(),
            review: None,
            status: Arc::new(Mutex::new(s!("Idle"))),
            running: false,
            pending: None,
        };

        // Last hand-off survives a restart.
        if app.open_review() {
            app.status("Loaded previous flashcards");
        }
        logf!(
            "Init: delimiter={:?} theme={:?} review={}",
            app.state.options.export.delimiter,
            app.state.settings.theme,
            app.review.as_ref().map_or(0, ReviewState::len)
        );
        app
    }

    #[inline]
    pub fn status<T: Into<String>>(&self, msg: T) {
        set_status(&self.status, msg);
    }

    /// Load the holding area into the review tab. False when it is empty or unreadable.
    pub fn open_review(&mut self) -> bool {
        match self.mailbox.peek() {
            Ok(Some(result)) => {
                logf!("Review: opened {} pairs", result.len());
                self.review = Some(ReviewState::from_result(result));
                self.state.gui.current_tab = Tab::Review;
                true
            }
            Ok(None) => false,
            Err(e) => {
                loge!("Review: {}", e);
                self.status(format!("Error: {e}"));
                false
            }
        }
    }

    fn poll_worker(&mut self, ctx: &egui::Context) {
        let Some(rx) = &self.pending else { return };
        match rx.try_recv() {
            Ok(res) => {
                self.pending = None;
                self.running = false;
                actions::finish_extract(self, res);
            }
            Err(TryRecvError::Empty) => {
                ctx.request_repaint_after(Duration::from_millis(100));
            }
            Err(TryRecvError::Disconnected) => {
                loge!("Extract: worker ended without a result");
                self.pending = None;
                self.running = false;
                self.status("Extraction stopped unexpectedly");
            }
        }
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.poll_worker(ctx);

        egui::TopBottomPanel::bottom("status").show(ctx, |ui| {
            components::status_line(ui, self);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            components::tabs::draw(ui, self);

            ui.separator();

            match self.state.gui.current_tab {
                Tab::Extract => components::extract_panel::draw(ui, self),
                Tab::Review => {
                    components::export_bar::draw(ui, self);
                    ui.separator();
                    components::review_table::draw(ui, self);
                }
                Tab::Settings => components::settings_panel::draw(ui, self),
            }
        });
    }
}
