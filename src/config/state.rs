// src/config/state.rs
use super::options::AppOptions;
use super::settings::Settings;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    Extract,
    Review,
    Settings,
}

impl Tab {
    pub const ALL: [Tab; 3] = [Tab::Extract, Tab::Review, Tab::Settings];

    pub fn title(self) -> &'static str {
        match self {
            Tab::Extract => "Extract",
            Tab::Review => "Review",
            Tab::Settings => "Settings",
        }
    }
}

#[derive(Clone, Debug)]
pub struct GuiState {
    /// URL or path typed into the Extract tab
    pub source_text: String,
    pub last_browse_dir: String,
    pub current_tab: Tab,
}

impl Default for GuiState {
    fn default() -> Self {
        Self {
            source_text: s!(),
            last_browse_dir: s!(),
            current_tab: Tab::default(),
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct AppState {
    pub options: AppOptions,
    pub settings: Settings,
    pub gui: GuiState,
}

impl AppState {
    /// Options seeded from persisted settings (export delimiter).
    pub fn from_settings(settings: Settings) -> Self {
        let mut state = Self { settings, ..Self::default() };
        state.options.export.delimiter = settings.default_copy_format;
        state
    }
}
